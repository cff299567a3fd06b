//! Two known intrinsics may never share a linkage key.

use std::sync::Arc;

use lumen_globals::{GlobalsConfig, IntrinsicId, KnownIntrinsicTable, INTRINSICS};

use super::support::session;

#[test]
#[should_panic(expected = "duplicate known intrinsic")]
fn re_registering_a_table_row_is_fatal() {
    let g = session(GlobalsConfig::default());
    g.register(&INTRINSICS[IntrinsicId::Raise.index()]);
}

#[test]
fn other_intrinsics_may_be_registered_repeatedly() {
    let g = session(GlobalsConfig::default());
    let def = &INTRINSICS[IntrinsicId::AdditionDynamic.index()];
    let first = g.register(def);
    let second = g.register(def);
    assert_eq!(first, second);
    assert!(!Arc::ptr_eq(&first, &second));
}

fn clash(first_id: IntrinsicId, second_id: IntrinsicId) {
    let g = session(GlobalsConfig::default());
    let mut first = g.make_other_intrinsic(IntrinsicId::Fst);
    first.id = first_id;
    let mut second = first.clone();
    second.id = second_id;

    let table = KnownIntrinsicTable::new();
    table.insert(Arc::new(first));
    table.insert(Arc::new(second));
}

#[test]
#[should_panic(expected = "share linkage key")]
fn clash_detected_in_one_order() {
    clash(IntrinsicId::Fst, IntrinsicId::Snd);
}

#[test]
#[should_panic(expected = "share linkage key")]
fn clash_detected_in_the_other_order() {
    clash(IntrinsicId::Snd, IntrinsicId::Fst);
}
