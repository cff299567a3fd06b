//! One environment read from many threads.

use std::sync::Arc;

use lumen_globals::{
    GlobalsConfig, IntrinsicId, Nullness, PrimitiveKind, TupInfo, Ty, WitnessRequest,
};
use rayon::prelude::*;

use super::support::session;

#[test]
fn readers_share_one_environment() {
    let g = Arc::new(session(GlobalsConfig::default()));
    let trait_name = g.interner().intern("op_Addition");

    (0..256).into_par_iter().for_each(|i| {
        let int = g.int_ty().clone();
        assert!(Ty::ptr_eq(&int, g.prim_ty(PrimitiveKind::Int32)));

        let elems: Vec<Ty> = (0..(i % 20) + 2).map(|_| int.clone()).collect();
        let compiled = g.mk_compiled_tuple_ty(TupInfo::Ref, &elems);
        assert_eq!(g.decompile_ty(&compiled), Ty::tuple(TupInfo::Ref, elems));

        let host = g.tycons().sys_prim(PrimitiveKind::Int32).unwrap();
        let improved = g.improve_tycon(host, &[], Nullness::Ambivalent).unwrap();
        assert!(Ty::ptr_eq(&improved, g.int_ty()));

        let req = WitnessRequest::new(trait_name, vec![int.clone(), int.clone()], Some(int));
        assert_eq!(
            g.resolve_builtin(&req).unwrap().intrinsic.id,
            IntrinsicId::AdditionDynamic
        );
    });
}

#[test]
fn concurrent_embedding_yields_one_definition() {
    let g = session(GlobalsConfig::default());
    let name = "System.Runtime.CompilerServices.IsUnmanagedAttribute";

    let stamps: Vec<_> = (0..128)
        .into_par_iter()
        .map(|_| g.find_or_embed_attrib(name).unwrap().tcref.stamp())
        .collect();

    assert!(stamps.iter().all(|stamp| stamp.is_some() && *stamp == stamps[0]));
    assert_eq!(g.embedded_types().len(), 1);
}

#[test]
fn concurrent_attribute_lookups_agree() {
    let g = session(GlobalsConfig::default());
    let infos: Vec<_> = (0..128)
        .into_par_iter()
        .map(|i| {
            let name = if i % 2 == 0 {
                "System.ObsoleteAttribute"
            } else {
                "System.Diagnostics.DebuggerHiddenAttribute"
            };
            (i % 2, g.find_attrib(name))
        })
        .collect();
    for (parity, info) in &infos {
        let expected = &infos[*parity as usize].1;
        assert_eq!(info, expected);
    }
}
