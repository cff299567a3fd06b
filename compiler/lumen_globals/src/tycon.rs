//! Type-constructor references.
//!
//! A `TyconRef` names a type definition either directly (a type in the local
//! unit) or by `(unit, path, name)` for types defined elsewhere. Non-local
//! references resolve lazily: dereferencing consults the unit's contents at
//! the time of the call, so a reference built before the local unit is
//! populated starts working once the type is defined.
//!
//! Equality and hashing use the reference's key (unit identity, path, name),
//! never the definition it currently resolves to.

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

use lumen_ir::{Name, NamespacePath, StringInterner, StringLookup};

use crate::error::GlobalsError;
use crate::unit::{CompilationUnit, Stamp, TypeDef, UnitId, UnitRef};

#[derive(Clone, Debug)]
pub struct NonLocalTycon {
    pub unit: UnitRef,
    pub path: NamespacePath,
    pub name: Name,
}

/// Reference to a type constructor.
#[derive(Clone)]
pub enum TyconRef {
    Local(Arc<TypeDef>),
    NonLocal(Arc<NonLocalTycon>),
}

/// Which unit a reference is scoped to, for key comparison.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
enum Scope {
    Unit(UnitId),
    /// A deferred unit. The path and name already identify it.
    Deferred,
}

impl TyconRef {
    pub fn local(def: Arc<TypeDef>) -> Self {
        TyconRef::Local(def)
    }

    pub fn non_local(unit: UnitRef, path: NamespacePath, name: Name) -> Self {
        TyconRef::NonLocal(Arc::new(NonLocalTycon { unit, path, name }))
    }

    /// Reference a type in `unit` by name, without requiring it to exist yet.
    pub fn in_unit(unit: &Arc<CompilationUnit>, path: NamespacePath, name: Name) -> Self {
        Self::non_local(UnitRef::Resolved(Arc::clone(unit)), path, name)
    }

    pub fn name(&self) -> Name {
        match self {
            TyconRef::Local(def) => def.name,
            TyconRef::NonLocal(nl) => nl.name,
        }
    }

    pub fn path(&self) -> &NamespacePath {
        match self {
            TyconRef::Local(def) => &def.path,
            TyconRef::NonLocal(nl) => &nl.path,
        }
    }

    fn scope(&self) -> Scope {
        match self {
            TyconRef::Local(def) => Scope::Unit(def.unit),
            TyconRef::NonLocal(nl) => match nl.unit.unit_id() {
                Some(id) => Scope::Unit(id),
                None => Scope::Deferred,
            },
        }
    }

    pub fn unit_id(&self) -> Option<UnitId> {
        match self.scope() {
            Scope::Unit(id) => Some(id),
            Scope::Deferred => None,
        }
    }

    /// True when the reference is backed by a deferred sentinel.
    pub fn is_deferred(&self) -> bool {
        self.scope() == Scope::Deferred
    }

    /// The definition, if the unit resolved and currently defines the type.
    pub fn try_deref(&self) -> Option<Arc<TypeDef>> {
        match self {
            TyconRef::Local(def) => Some(Arc::clone(def)),
            TyconRef::NonLocal(nl) => nl.unit.try_unit()?.lookup(&nl.path, nl.name),
        }
    }

    /// The definition, or the reason it cannot be reached.
    ///
    /// A deferred unit raises its diagnostic; a resolved unit that lacks the
    /// type reports `TypeNotFound`.
    pub fn deref(&self, interner: &StringInterner) -> Result<Arc<TypeDef>, GlobalsError> {
        match self {
            TyconRef::Local(def) => Ok(Arc::clone(def)),
            TyconRef::NonLocal(nl) => {
                let unit = nl.unit.force()?;
                unit.lookup(&nl.path, nl.name)
                    .ok_or_else(|| GlobalsError::TypeNotFound {
                        path: nl.path.qualify(nl.name, interner),
                        unit: interner.lookup(unit.name()).to_owned(),
                    })
            }
        }
    }

    pub fn can_deref(&self) -> bool {
        self.try_deref().is_some()
    }

    /// Stamp of the current definition, if dereferenceable.
    pub fn stamp(&self) -> Option<Stamp> {
        self.try_deref().map(|def| def.stamp)
    }

    /// Fully qualified name, e.g. `System.Int32`.
    pub fn display(&self, lookup: &impl StringLookup) -> String {
        self.path().qualify(self.name(), lookup)
    }
}

impl PartialEq for TyconRef {
    fn eq(&self, other: &Self) -> bool {
        if let (TyconRef::Local(a), TyconRef::Local(b)) = (self, other) {
            if Arc::ptr_eq(a, b) {
                return true;
            }
        }
        self.name() == other.name() && self.path() == other.path() && self.scope() == other.scope()
    }
}

impl Eq for TyconRef {}

impl Hash for TyconRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.scope().hash(state);
        self.path().hash(state);
        self.name().hash(state);
    }
}

impl fmt::Debug for TyconRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let kind = match self {
            TyconRef::Local(_) => "Local",
            TyconRef::NonLocal(_) => "NonLocal",
        };
        f.debug_struct("TyconRef")
            .field("kind", &kind)
            .field("scope", &self.scope())
            .field("path", self.path())
            .field("name", &self.name())
            .finish()
    }
}

#[cfg(test)]
mod tests;
