//! Compile-time type templates for intrinsic signatures.
//!
//! Intrinsic signatures are written as `const` data and instantiated against
//! the environment's well-known constructors and primitive types when the
//! environment is built.

use crate::prims::{PrimitiveKind, PrimitiveTypes};
use crate::tycons::{NamedTycon, WellKnownTycons};
use crate::ty::{Nullness, TupInfo, Ty};

/// A type with holes for the owning intrinsic's type parameters.
#[derive(Copy, Clone, Debug)]
pub enum TyTemplate {
    Prim(PrimitiveKind),
    /// The intrinsic's type parameter at this index.
    Var(u8),
    App(NamedTycon, &'static [TyTemplate]),
    /// Array of the given rank.
    Array(u8, &'static TyTemplate),
    Fun(&'static TyTemplate, &'static TyTemplate),
    Tuple(&'static [TyTemplate]),
}

/// Curried argument groups and a return type.
///
/// A group of several templates is one tupled argument; an empty group is `unit`.
#[derive(Copy, Clone, Debug)]
pub struct Sig {
    pub args: &'static [&'static [TyTemplate]],
    pub ret: TyTemplate,
}

impl Sig {
    pub const fn new(args: &'static [&'static [TyTemplate]], ret: TyTemplate) -> Self {
        Sig { args, ret }
    }

    /// A value of type `ret` with no arguments.
    pub const fn value(ret: TyTemplate) -> Self {
        Sig { args: &[], ret }
    }

    /// Total number of arguments across all groups.
    pub const fn arg_count(&self) -> usize {
        let mut total = 0;
        let mut i = 0;
        while i < self.args.len() {
            total += self.args[i].len();
            i += 1;
        }
        total
    }
}

/// What a template needs to become a type.
pub(crate) struct InstantiateCx<'a> {
    pub tycons: &'a WellKnownTycons,
    pub prims: &'a PrimitiveTypes,
    pub typars: &'a [Ty],
}

impl InstantiateCx<'_> {
    pub fn instantiate(&self, template: &TyTemplate) -> Ty {
        match *template {
            TyTemplate::Prim(kind) => self.prims.get(kind).clone(),
            TyTemplate::Var(i) => self
                .typars
                .get(usize::from(i))
                .cloned()
                .unwrap_or_else(|| panic!("template refers to missing type parameter {i}")),
            TyTemplate::App(tycon, args) => Ty::app(
                self.tycons.get(tycon).clone(),
                self.instantiate_all(args),
                Nullness::Ambivalent,
            ),
            TyTemplate::Array(rank, elem) => Ty::app(
                self.tycons.array(usize::from(rank)).clone(),
                vec![self.instantiate(elem)],
                Nullness::WithoutNull,
            ),
            TyTemplate::Fun(domain, range) => Ty::fun(
                self.instantiate(domain),
                self.instantiate(range),
                Nullness::WithoutNull,
            ),
            TyTemplate::Tuple(elems) => Ty::tuple(TupInfo::Ref, self.instantiate_all(elems)),
        }
    }

    pub fn instantiate_all(&self, templates: &[TyTemplate]) -> Vec<Ty> {
        templates.iter().map(|t| self.instantiate(t)).collect()
    }

    /// The domain type of one argument group.
    pub fn group_domain(&self, group: &[Ty]) -> Ty {
        match group {
            [] => self.prims.get(PrimitiveKind::Unit).clone(),
            [single] => single.clone(),
            many => Ty::tuple(TupInfo::Ref, many),
        }
    }
}
