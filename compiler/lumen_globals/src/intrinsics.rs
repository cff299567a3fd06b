//! Intrinsic symbols.
//!
//! Intrinsics are standard-library values the compiler refers to directly:
//! operators, conversion functions, sequence builders and so on. Each has a
//! stable `IntrinsicId`, a precomputed signature, and a linkage key under
//! which code generation and the optimizer look it up.

mod table;
mod template;

use std::sync::Arc;

use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use lumen_ir::{Name, NamespacePath, StringInterner};
use rustc_hash::FxBuildHasher;

use crate::ty::{Nullness, Ty, TyParam};

pub use table::{Entity, IntrinsicDef, IntrinsicId, INTRINSICS};
pub use template::{Sig, TyTemplate};
pub(crate) use template::InstantiateCx;

/// The module (or type) an intrinsic is declared in.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct EnclosingEntity {
    pub path: NamespacePath,
    /// Compiled short name of the module.
    pub name: Name,
}

/// The key under which a known intrinsic is registered.
///
/// Two intrinsics with equal keys cannot coexist.
#[derive(Clone, Copy, Eq, PartialEq, Hash, Debug)]
pub struct LinkageKey {
    pub entity: Name,
    pub member_parent: Option<Name>,
    pub compiled_name: Name,
    pub arg_count: u32,
}

/// A fully instantiated intrinsic symbol.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct IntrinsicValRef {
    pub id: IntrinsicId,
    pub entity: EnclosingEntity,
    pub logical_name: Name,
    pub compiled_name: Name,
    pub member_parent: Option<Name>,
    pub typars: Box<[TyParam]>,
    /// Curried argument groups.
    pub arg_groups: Box<[Box<[Ty]>]>,
    pub ret_ty: Ty,
    /// The full curried function type.
    pub ty: Ty,
    pub key: LinkageKey,
    pub known: bool,
}

impl IntrinsicValRef {
    pub fn is_member(&self) -> bool {
        self.member_parent.is_some()
    }

    pub fn arg_count(&self) -> u32 {
        self.key.arg_count
    }

    /// The type parameters as type variables, in declaration order.
    pub fn typar_tys(&self) -> impl Iterator<Item = Ty> + '_ {
        self.typars.iter().map(|p| Ty::var(*p))
    }
}

/// Instantiate one table row.
pub(crate) fn build_intrinsic(
    def: &IntrinsicDef,
    interner: &StringInterner,
    cx: &InstantiateCx<'_>,
) -> IntrinsicValRef {
    let (namespace, module) = def.entity.location();
    let entity = EnclosingEntity {
        path: interner.intern_path(namespace),
        name: interner.intern(module),
    };
    let logical_name = interner.intern(def.logical_name);
    let compiled_name = interner.intern(def.compiled_name);
    let member_parent = def.member_parent.map(|p| interner.intern(p));

    let typars: Box<[TyParam]> = def
        .typars
        .iter()
        .zip(0u32..)
        .map(|(name, index)| TyParam {
            name: interner.intern(name),
            index,
        })
        .collect();
    let typar_tys: Vec<Ty> = typars.iter().map(|p| Ty::var(*p)).collect();
    let cx = InstantiateCx {
        typars: &typar_tys,
        ..*cx
    };

    let arg_groups: Box<[Box<[Ty]>]> = def
        .sig
        .args
        .iter()
        .map(|group| cx.instantiate_all(group).into_boxed_slice())
        .collect();
    let ret_ty = cx.instantiate(&def.sig.ret);
    let ty = arg_groups.iter().rev().fold(ret_ty.clone(), |range, group| {
        Ty::fun(cx.group_domain(group), range, Nullness::WithoutNull)
    });

    #[expect(
        clippy::cast_possible_truncation,
        reason = "intrinsic signatures have a handful of arguments"
    )]
    let arg_count = def.sig.arg_count() as u32;
    let key = LinkageKey {
        entity: entity.name,
        member_parent,
        compiled_name,
        arg_count,
    };

    IntrinsicValRef {
        id: def.id,
        entity,
        logical_name,
        compiled_name,
        member_parent,
        typars,
        arg_groups,
        ret_ty,
        ty,
        key,
        known: def.known,
    }
}

/// Known intrinsics by linkage key.
///
/// Insertion is safe from any thread. A second registration under an
/// existing key is a compiler bug and panics.
#[derive(Debug, Default)]
pub struct KnownIntrinsicTable {
    map: DashMap<LinkageKey, Arc<IntrinsicValRef>, FxBuildHasher>,
}

impl KnownIntrinsicTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a known intrinsic.
    ///
    /// # Panics
    /// Panics if another intrinsic is already registered under the same key.
    pub fn insert(&self, vref: Arc<IntrinsicValRef>) {
        match self.map.entry(vref.key) {
            Entry::Occupied(existing) => panic!(
                "duplicate known intrinsic: {:?} and {:?} share linkage key {:?}",
                existing.get().id,
                vref.id,
                vref.key
            ),
            Entry::Vacant(slot) => {
                slot.insert(vref);
            }
        }
    }

    pub fn get(&self, key: &LinkageKey) -> Option<Arc<IntrinsicValRef>> {
        self.map.get(key).map(|entry| Arc::clone(entry.value()))
    }

    pub fn len(&self) -> usize {
        self.map.len()
    }

    pub fn is_empty(&self) -> bool {
        self.map.is_empty()
    }
}
