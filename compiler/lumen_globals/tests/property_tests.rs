//! Property tests for the nominal tuple encoding.

#![allow(clippy::unwrap_used, clippy::expect_used, reason = "Tests can panic")]

#[path = "session/support.rs"]
mod support;

use lumen_globals::{Globals, GlobalsConfig, TupInfo, Ty, TyParam, MAX_TUPLE};
use proptest::prelude::*;
use std::sync::OnceLock;

fn globals() -> &'static Globals {
    static GLOBALS: OnceLock<Globals> = OnceLock::new();
    GLOBALS.get_or_init(|| support::session(GlobalsConfig::default()))
}

fn vars(g: &Globals, n: usize) -> Vec<Ty> {
    (0..n)
        .map(|i| {
            Ty::var(TyParam {
                name: g.interner().intern(&format!("t{i}")),
                index: u32::try_from(i).unwrap(),
            })
        })
        .collect()
}

fn tup_info() -> impl Strategy<Value = TupInfo> {
    prop_oneof![Just(TupInfo::Ref), Just(TupInfo::Struct)]
}

proptest! {
    #[test]
    fn encode_then_decompile_is_identity(arity in 2usize..=30, tup in tup_info()) {
        let g = globals();
        let elems = vars(g, arity);
        let compiled = g.mk_compiled_tuple_ty(tup, &elems);
        prop_assert_eq!(g.decompile_ty(&compiled), Ty::tuple(tup, elems));
    }

    #[test]
    fn compiled_tuples_never_exceed_eight_arguments(arity in 1usize..=30, tup in tup_info()) {
        let g = globals();
        let mut ty = g.mk_compiled_tuple_ty(tup, &vars(g, arity));
        let mut seen = 0;
        loop {
            let (tcref, args) = ty.as_app().unwrap();
            prop_assert!(args.len() <= MAX_TUPLE);
            prop_assert_eq!(g.tycons().tuples.classify(tcref), Some((tup, args.len())));
            if args.len() < MAX_TUPLE {
                seen += args.len();
                break;
            }
            seen += MAX_TUPLE - 1;
            ty = args[MAX_TUPLE - 1].clone();
        }
        prop_assert_eq!(seen, arity);
    }
}
