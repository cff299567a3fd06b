#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use lumen_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;
use crate::testing::Fixture;

fn request(g: &Globals, trait_name: &str, operands: &[&Ty], result: Option<&Ty>) -> WitnessRequest {
    WitnessRequest::new(
        g.interner().intern(trait_name),
        operands.iter().map(|&ty| ty.clone()).collect(),
        result.cloned(),
    )
}

fn resolve(g: &Globals, trait_name: &str, operands: &[&Ty], result: Option<&Ty>) -> (IntrinsicId, Vec<Ty>) {
    let resolution = g
        .resolve_builtin(&request(g, trait_name, operands, result))
        .unwrap();
    (resolution.intrinsic.id, resolution.type_args)
}

#[test]
fn operator_spellings_map_to_trait_members() {
    assert_eq!(operator_trait_name("+"), Some("op_Addition"));
    assert_eq!(operator_trait_name(">="), Some("op_GreaterThanOrEqual"));
    assert_eq!(operator_trait_name("**"), Some("Pow"));
    assert_eq!(operator_trait_name("~~~"), Some("op_LogicalNot"));
    assert_eq!(operator_trait_name("<|"), None);
}

#[test]
fn every_operator_spelling_has_a_witness_family() {
    for (spelling, trait_name) in OPERATOR_TRAITS {
        assert!(family(trait_name).is_some(), "{spelling} maps to {trait_name}");
    }
}

#[test]
fn binary_operator() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let (int, float) = (g.int_ty(), g.float_ty());

    let (id, args) = resolve(g, "op_Addition", &[int, int], Some(int));
    assert_eq!(id, IntrinsicId::AdditionDynamic);
    assert_eq!(args, vec![int.clone(), int.clone(), int.clone()]);

    let (id, args) = resolve(g, "op_Multiply", &[int, float], Some(float));
    assert_eq!(id, IntrinsicId::MultiplyDynamic);
    assert_eq!(args, vec![int.clone(), float.clone(), float.clone()]);

    let (id, _) = resolve(g, "op_CheckedSubtraction", &[int, int], Some(int));
    assert_eq!(id, IntrinsicId::CheckedSubtractionDynamic);
}

#[test]
fn binary_operator_needs_a_result() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();
    let err = g
        .resolve_builtin(&request(g, "op_Addition", &[int, int], None))
        .unwrap_err();
    assert_eq!(
        err,
        GlobalsError::UnsupportedWitness {
            trait_name: "op_Addition".to_owned(),
            shape: WitnessShape {
                operands: 2,
                has_result: false,
            },
        }
    );
    assert_eq!(err.code(), ErrorCode::E9101);
}

#[test]
fn relational_operator_ignores_the_result() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let string = g.string_ty();

    let (id, args) = resolve(g, "op_LessThan", &[string, string], Some(g.bool_ty()));
    assert_eq!(id, IntrinsicId::LessThanDynamic);
    assert_eq!(args, vec![string.clone(), string.clone()]);

    let (id, _) = resolve(g, "op_Equality", &[string, string], None);
    assert_eq!(id, IntrinsicId::EqualityDynamic);
}

#[test]
fn unary_operator() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();

    let (id, args) = resolve(g, "op_UnaryNegation", &[int], Some(int));
    assert_eq!(id, IntrinsicId::UnaryNegationDynamic);
    assert_eq!(args, vec![int.clone(), int.clone()]);

    let (id, _) = resolve(g, "op_OnesComplement", &[int], Some(int));
    assert_eq!(id, IntrinsicId::LogicalNotDynamic);

    let (id, args) = resolve(g, "op_Explicit", &[int], Some(g.float_ty()));
    assert_eq!(id, IntrinsicId::ExplicitDynamic);
    assert_eq!(args, vec![int.clone(), g.float_ty().clone()]);
}

#[test]
fn generic_constants() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let float = g.float_ty();

    let (id, args) = resolve(g, "get_Zero", &[], Some(float));
    assert_eq!(id, IntrinsicId::GenericZeroDynamic);
    assert_eq!(args, vec![float.clone()]);

    let (id, _) = resolve(g, "get_One", &[], Some(float));
    assert_eq!(id, IntrinsicId::GenericOneDynamic);

    assert!(g.resolve_builtin(&request(g, "get_Zero", &[], None)).is_err());
}

#[test]
fn math_functions() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let (int, float) = (g.int_ty(), g.float_ty());

    let (id, args) = resolve(g, "Abs", &[float], Some(float));
    assert_eq!(id, IntrinsicId::Abs);
    assert_eq!(args, vec![float.clone()]);

    let (id, args) = resolve(g, "Sqrt", &[float], Some(float));
    assert_eq!(id, IntrinsicId::Sqrt);
    assert_eq!(args, vec![float.clone(), float.clone()]);

    let (id, args) = resolve(g, "Atan2", &[float, float], Some(float));
    assert_eq!(id, IntrinsicId::Atan2);
    assert_eq!(args, vec![float.clone(), float.clone()]);

    let (id, args) = resolve(g, "Pow", &[float, int], Some(float));
    assert_eq!(id, IntrinsicId::Pow);
    assert_eq!(args, vec![float.clone(), int.clone()]);

    let (id, args) = resolve(g, "Sign", &[float], Some(int));
    assert_eq!(id, IntrinsicId::Sign);
    assert_eq!(args, vec![float.clone()]);
}

#[test]
fn array_indexing_by_rank() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();
    let elem = g.char_ty();

    for (rank, get, set) in [
        (1, IntrinsicId::GetArray, IntrinsicId::SetArray),
        (2, IntrinsicId::GetArray2D, IntrinsicId::SetArray2D),
        (3, IntrinsicId::GetArray3D, IntrinsicId::SetArray3D),
        (4, IntrinsicId::GetArray4D, IntrinsicId::SetArray4D),
    ] {
        let array = g.mk_array_ty(rank, elem.clone());
        let mut operands = vec![&array];
        operands.extend(std::iter::repeat(int).take(rank));

        let (id, args) = resolve(g, "get_Item", &operands, Some(elem));
        assert_eq!(id, get);
        assert_eq!(args, vec![elem.clone()]);

        operands.push(elem);
        let (id, args) = resolve(g, "set_Item", &operands, None);
        assert_eq!(id, set);
        assert_eq!(args, vec![elem.clone()]);
    }
}

#[test]
fn array_indexing_rejects_mismatched_shapes() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();
    let matrix = g.mk_array_ty(2, int.clone());
    assert!(g
        .resolve_builtin(&request(g, "get_Item", &[&matrix, int], Some(int)))
        .is_err());

    let cube5 = g.mk_array_ty(5, int.clone());
    let operands = [&cube5, int, int, int, int, int];
    assert!(g
        .resolve_builtin(&request(g, "get_Item", &operands, Some(int)))
        .is_err());
}

#[test]
fn string_indexing() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let (id, args) = resolve(g, "get_Item", &[g.string_ty(), g.int_ty()], Some(g.char_ty()));
    assert_eq!(id, IntrinsicId::GetString);
    assert!(args.is_empty());

    let err = g
        .resolve_builtin(&request(
            g,
            "set_Item",
            &[g.string_ty(), g.int_ty(), g.char_ty()],
            None,
        ))
        .unwrap_err();
    assert_eq!(err.code(), ErrorCode::E9101);
}

#[test]
fn unknown_trait_member_is_unsupported() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();
    let err = g
        .resolve_builtin(&request(g, "op_Concatenate", &[int, int], Some(int)))
        .unwrap_err();
    assert_eq!(
        err.to_string(),
        "no built-in witness for `op_Concatenate` with 2 operand(s) and a result"
    );
}

#[test]
fn trait_names_from_another_interner_are_unsupported() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();
    let foreign = lumen_ir::Name::from_raw(lumen_ir::Name::MAX_LOCAL);
    let req = WitnessRequest::new(foreign, vec![int.clone(), int.clone()], Some(int.clone()));

    let err = g.resolve_builtin(&req).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E9101);
    assert!(matches!(
        err,
        GlobalsError::UnsupportedWitness {
            shape: WitnessShape {
                operands: 2,
                has_result: true
            },
            ..
        }
    ));
}

#[test]
fn resolution_borrows_the_registered_intrinsic() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty();
    let resolution = g
        .resolve_builtin(&request(g, "op_Division", &[int, int], Some(int)))
        .unwrap();
    assert!(std::ptr::eq(
        resolution.intrinsic,
        g.intrinsic(IntrinsicId::DivisionDynamic)
    ));
}

#[test]
fn addition_over_a_type_parameter_instantiates_three_arguments() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let t = Ty::var(crate::ty::TyParam {
        name: g.interner().intern("T"),
        index: 0,
    });
    let trait_name = operator_trait_name("+").unwrap();
    let (id, args) = resolve(g, trait_name, &[&t, &t], Some(&t));
    assert_eq!(id, IntrinsicId::AdditionDynamic);
    assert_eq!(args, vec![t.clone(), t.clone(), t]);
}
