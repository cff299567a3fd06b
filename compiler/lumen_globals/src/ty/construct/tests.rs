#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use pretty_assertions::assert_eq;

use crate::testing::Fixture;
use crate::tycons::NamedTycon;
use crate::ty::{TupInfo, Ty, TyKind};

#[test]
fn iterated_fun_is_right_nested() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let int = g.int_ty().clone();
    let s = g.string_ty().clone();
    let b = g.bool_ty().clone();

    let ty = g.mk_iterated_fun_ty([int.clone(), s.clone()], b.clone());
    assert_eq!(ty, g.mk_fun_ty(int, g.mk_fun_ty(s, b)));
}

#[test]
fn iterated_fun_without_domains_is_range() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let ty = g.mk_iterated_fun_ty(Vec::new(), g.int_ty().clone());
    assert!(Ty::ptr_eq(&ty, g.int_ty()));
}

#[test]
fn array_ranks_use_distinct_constructors() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let one = g.mk_array_ty(1, g.int_ty().clone());
    let two = g.mk_array_ty(2, g.int_ty().clone());
    assert_ne!(one, two);
    assert_eq!(g.dest_array_ty(&two).map(|(rank, _)| rank), Some(2));
    assert_eq!(g.dest_array_ty(&one).map(|(_, e)| e.clone()), Some(g.int_ty().clone()));
    assert_eq!(g.dest_array_ty(g.int_ty()), None);
}

#[test]
#[should_panic(expected = "array rank 33")]
fn array_rank_above_limit_panics() {
    let fx = Fixture::new();
    let _ = fx.globals.mk_array_ty(33, fx.globals.int_ty().clone());
}

#[test]
#[should_panic(expected = "array rank 0")]
fn array_rank_zero_panics() {
    let fx = Fixture::new();
    let _ = fx.globals.mk_array_ty(0, fx.globals.int_ty().clone());
}

#[test]
fn single_element_tuple_is_the_element() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let ty = g.mk_ref_tuple_ty(vec![g.int_ty().clone()]);
    assert!(Ty::ptr_eq(&ty, g.int_ty()));
}

#[test]
fn struct_tuple_keeps_structness() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let ty = g.mk_struct_tuple_ty(vec![g.int_ty().clone(), g.bool_ty().clone()]);
    match ty.kind() {
        TyKind::Tuple { tup, elems } => {
            assert_eq!(*tup, TupInfo::Struct);
            assert_eq!(elems.len(), 2);
        }
        other => panic!("expected a tuple, got {other:?}"),
    }
}

#[test]
fn format_ty_has_five_arguments() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let u = g.unit_ty().clone();
    let ty = g.mk_format_ty(u.clone(), u.clone(), u.clone(), u.clone(), u);
    let (tcref, args) = ty.as_app().unwrap();
    assert_eq!(tcref, g.tycon(NamedTycon::Format));
    assert_eq!(args.len(), 5);
}

#[test]
fn primitive_predicates() {
    let fx = Fixture::new();
    let g = &fx.globals;
    assert!(g.is_string_ty(g.string_ty()));
    assert!(g.is_obj_ty(g.obj_ty()));
    assert!(g.is_unit_ty(g.unit_ty()));
    assert!(!g.is_string_ty(g.obj_ty()));
}
