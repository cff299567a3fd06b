//! A session from construction through type canonicalization.

use lumen_globals::{
    operator_trait_name, GlobalsConfig, GlobalsError, IntrinsicId, Nullness, PrimitiveKind,
    TupInfo, Ty, TyKind, WitnessRequest,
};
use pretty_assertions::assert_eq;

use super::support::session;

#[test]
fn imported_signature_is_canonicalized() {
    let g = session(GlobalsConfig::default());

    // `Function`2<Tuple`2<Int32, String>, Boolean>` as read from metadata.
    let host = |kind| g.mk_app_ty(g.tycons().sys_prim(kind).unwrap(), Vec::new());
    let pair = g.mk_compiled_tuple_ty(
        TupInfo::Ref,
        &[host(PrimitiveKind::Int32), host(PrimitiveKind::String)],
    );
    let imported = g.mk_app_ty(
        g.tycon(lumen_globals::NamedTycon::Func),
        vec![pair, host(PrimitiveKind::Bool)],
    );

    let canonical = g.improve_ty(&g.decompile_ty(&imported));
    match canonical.kind() {
        TyKind::Fun { domain, range, .. } => {
            let (tup, elems) = domain.tuple_elems().unwrap();
            assert_eq!(tup, TupInfo::Ref);
            assert!(Ty::ptr_eq(&elems[0], g.int_ty()));
            assert!(Ty::ptr_eq(&elems[1], g.string_ty()));
            assert!(Ty::ptr_eq(range, g.bool_ty()));
        }
        other => panic!("expected a function type, got {other:?}"),
    }
}

#[test]
fn operator_constraint_resolves_to_a_registered_intrinsic() {
    let g = session(GlobalsConfig::default());
    let trait_name = g.interner().intern(operator_trait_name("-").unwrap());
    let float = g.float_ty().clone();
    let req = WitnessRequest::new(trait_name, vec![float.clone(), float.clone()], Some(float));

    let resolution = g.resolve_builtin(&req).unwrap();
    assert_eq!(resolution.intrinsic.id, IntrinsicId::SubtractionDynamic);
    assert_eq!(resolution.type_args.len(), 3);
    assert!(std::ptr::eq(
        resolution.intrinsic,
        g.intrinsic(IntrinsicId::SubtractionDynamic)
    ));
}

#[test]
fn known_intrinsics_are_found_by_name() {
    let g = session(GlobalsConfig::default());
    let raise = g
        .try_find_known_intrinsic_by_name("Operators", None, "Raise", 1)
        .unwrap();
    assert_eq!(raise.id, IntrinsicId::Raise);
    assert_eq!(
        g.find_known_intrinsic(&raise.key).map(|vref| vref.id),
        Some(IntrinsicId::Raise)
    );
}

#[test]
fn null_tracking_session_distinguishes_string_variants() {
    let g = session(GlobalsConfig::default().with_null_tracking(true));
    let with_null = g.string_ty_with_null();
    let without_null = g.string_ty_without_null();
    assert_eq!(with_null.nullness(), Nullness::WithNull);
    assert_eq!(without_null.nullness(), Nullness::WithoutNull);
    assert_ne!(with_null, without_null);
}

#[test]
fn deferred_failures_surface_as_diagnostics() {
    let g = session(GlobalsConfig::default());
    let missing = g.find_sys_tycon("System.Text", "StringBuilder");
    let err = g.deref_tycon(&missing).unwrap_err();
    assert_eq!(
        err,
        GlobalsError::DeferredResolution {
            diagnostic: "System.Text.StringBuilder not found".to_owned()
        }
    );
    let diagnostic = err.to_diagnostic();
    assert_eq!(diagnostic.code, err.code());
}

#[test]
fn attributes_for_generated_code() {
    let g = session(GlobalsConfig::default());
    let mut attrs = Vec::new();
    g.add_method_generated_attrs(&mut attrs);
    assert_eq!(attrs.len(), 2);

    let embedded = g
        .find_or_embed_attrib("System.Runtime.CompilerServices.NullableAttribute")
        .unwrap();
    assert!(embedded.is_available());
    assert_eq!(g.embedded_types().len(), 1);
    assert!(g.local_unit().defines(
        &g.interner().intern_path("System.Runtime.CompilerServices"),
        g.interner().intern("NullableAttribute"),
        false,
    ));
}
