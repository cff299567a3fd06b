//! Compilation units and the type definitions they hold.
//!
//! A compilation unit is an externally supplied, already-loaded library
//! (or the unit currently being compiled). Units are shared by `Arc`; their
//! contents sit behind a lock so the local unit can be populated after the
//! global environment has been built.

mod resolver;

use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU32, AtomicU64, Ordering};
use std::sync::Arc;

use bitflags::bitflags;
use lumen_ir::{Name, NamespacePath};
use parking_lot::RwLock;
use rustc_hash::FxHashMap;

use crate::error::GlobalsError;

pub use resolver::{resolve_or_deferred, UnitResolver, UnitTable};

static NEXT_STAMP: AtomicU64 = AtomicU64::new(1);
static NEXT_UNIT: AtomicU32 = AtomicU32::new(1);

/// Identity of a type definition, unique for the lifetime of the process.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct Stamp(u64);

impl Stamp {
    pub fn fresh() -> Self {
        Stamp(NEXT_STAMP.fetch_add(1, Ordering::Relaxed))
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Identity of a compilation unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub struct UnitId(u32);

impl UnitId {
    fn fresh() -> Self {
        UnitId(NEXT_UNIT.fetch_add(1, Ordering::Relaxed))
    }
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnitKind {
    /// The unit being compiled in this session.
    Local,
    /// A referenced library.
    External,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeDefKind {
    Class,
    Struct,
    Union,
    Record,
    Interface,
    Abbreviation,
    Attribute,
}

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Access {
    #[default]
    Public,
    Internal,
}

bitflags! {
    /// Definition properties that do not change after the type is defined.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct TypeDefFlags: u8 {
        const SEALED = 1 << 0;
        const ABSTRACT = 1 << 1;
        /// Synthesized by the compiler into the local unit.
        const EMBEDDED = 1 << 2;
        /// Stack-only value type.
        const BYREF_LIKE = 1 << 3;
    }
}

/// A type definition owned by a compilation unit.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct TypeDef {
    pub stamp: Stamp,
    pub unit: UnitId,
    pub path: NamespacePath,
    pub name: Name,
    pub kind: TypeDefKind,
    pub arity: u32,
    pub access: Access,
    pub flags: TypeDefFlags,
}

impl TypeDef {
    pub fn is_public(&self) -> bool {
        self.access == Access::Public
    }
}

/// Description of a type to define in a unit.
#[derive(Clone, Debug)]
pub struct TypeDefSpec {
    pub path: NamespacePath,
    pub name: Name,
    pub kind: TypeDefKind,
    pub arity: u32,
    pub access: Access,
    pub flags: TypeDefFlags,
}

impl TypeDefSpec {
    /// A public, non-generic type with no flags.
    pub fn new(path: NamespacePath, name: Name, kind: TypeDefKind) -> Self {
        TypeDefSpec {
            path,
            name,
            kind,
            arity: 0,
            access: Access::Public,
            flags: TypeDefFlags::empty(),
        }
    }

    #[must_use]
    pub fn arity(mut self, arity: u32) -> Self {
        self.arity = arity;
        self
    }

    #[must_use]
    pub fn access(mut self, access: Access) -> Self {
        self.access = access;
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: TypeDefFlags) -> Self {
        self.flags = flags;
        self
    }
}

/// A loaded compilation unit.
pub struct CompilationUnit {
    id: UnitId,
    name: Name,
    kind: UnitKind,
    /// Namespace, then type name.
    defs: RwLock<FxHashMap<NamespacePath, FxHashMap<Name, Arc<TypeDef>>>>,
}

impl CompilationUnit {
    /// The unit being compiled. Starts empty and is filled in as checking proceeds.
    pub fn new_local(name: Name) -> Arc<Self> {
        Arc::new(Self::with_kind(name, UnitKind::Local))
    }

    pub fn new_external(name: Name) -> Arc<Self> {
        Arc::new(Self::with_kind(name, UnitKind::External))
    }

    fn with_kind(name: Name, kind: UnitKind) -> Self {
        CompilationUnit {
            id: UnitId::fresh(),
            name,
            kind,
            defs: RwLock::new(FxHashMap::default()),
        }
    }

    #[inline]
    pub fn id(&self) -> UnitId {
        self.id
    }

    #[inline]
    pub fn name(&self) -> Name {
        self.name
    }

    #[inline]
    pub fn kind(&self) -> UnitKind {
        self.kind
    }

    pub fn is_local(&self) -> bool {
        self.kind == UnitKind::Local
    }

    /// Define a type, or return the existing definition at the same path and name.
    pub fn define(&self, spec: TypeDefSpec) -> Arc<TypeDef> {
        if let Some(existing) = self.lookup(&spec.path, spec.name) {
            return existing;
        }
        let mut defs = self.defs.write();
        let namespace = defs.entry(spec.path.clone()).or_default();
        let def = namespace.entry(spec.name).or_insert_with(|| {
            Arc::new(TypeDef {
                stamp: Stamp::fresh(),
                unit: self.id,
                path: spec.path,
                name: spec.name,
                kind: spec.kind,
                arity: spec.arity,
                access: spec.access,
                flags: spec.flags,
            })
        });
        Arc::clone(def)
    }

    pub fn lookup(&self, path: &NamespacePath, name: Name) -> Option<Arc<TypeDef>> {
        self.defs.read().get(path)?.get(&name).cloned()
    }

    /// True when the unit defines the type, restricted to public types if asked.
    pub fn defines(&self, path: &NamespacePath, name: Name, public_only: bool) -> bool {
        self.lookup(path, name)
            .is_some_and(|def| !public_only || def.is_public())
    }

    /// Number of types defined across all namespaces.
    pub fn len(&self) -> usize {
        self.defs.read().values().map(FxHashMap::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl fmt::Debug for CompilationUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompilationUnit")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("kind", &self.kind)
            .field("types", &self.len())
            .finish()
    }
}

/// Placeholder for a compilation unit that could not be found.
///
/// Carries the diagnostic to raise if anything tries to use it.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub struct DeferredUnit {
    pub path: NamespacePath,
    pub type_name: Name,
    pub diagnostic: String,
}

/// Reference to the compilation unit that defines a type.
#[derive(Clone, Debug)]
pub enum UnitRef {
    Resolved(Arc<CompilationUnit>),
    /// Fails with its diagnostic only when forced.
    Deferred(Arc<DeferredUnit>),
}

impl UnitRef {
    pub fn deferred(path: NamespacePath, type_name: Name, diagnostic: String) -> Self {
        UnitRef::Deferred(Arc::new(DeferredUnit {
            path,
            type_name,
            diagnostic,
        }))
    }

    /// The resolved unit, or the deferred diagnostic as an error.
    pub fn force(&self) -> Result<&Arc<CompilationUnit>, GlobalsError> {
        match self {
            UnitRef::Resolved(unit) => Ok(unit),
            UnitRef::Deferred(deferred) => Err(GlobalsError::DeferredResolution {
                diagnostic: deferred.diagnostic.clone(),
            }),
        }
    }

    pub fn try_unit(&self) -> Option<&Arc<CompilationUnit>> {
        match self {
            UnitRef::Resolved(unit) => Some(unit),
            UnitRef::Deferred(_) => None,
        }
    }

    pub fn is_deferred(&self) -> bool {
        matches!(self, UnitRef::Deferred(_))
    }

    pub fn diagnostic(&self) -> Option<&str> {
        match self {
            UnitRef::Resolved(_) => None,
            UnitRef::Deferred(deferred) => Some(&deferred.diagnostic),
        }
    }

    pub fn unit_id(&self) -> Option<UnitId> {
        self.try_unit().map(|unit| unit.id())
    }
}

impl PartialEq for UnitRef {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (UnitRef::Resolved(a), UnitRef::Resolved(b)) => a.id() == b.id(),
            (UnitRef::Deferred(a), UnitRef::Deferred(b)) => {
                a.path == b.path && a.type_name == b.type_name
            }
            _ => false,
        }
    }
}

impl Eq for UnitRef {}

impl Hash for UnitRef {
    fn hash<H: Hasher>(&self, state: &mut H) {
        match self {
            UnitRef::Resolved(unit) => {
                0u8.hash(state);
                unit.id().hash(state);
            }
            UnitRef::Deferred(deferred) => {
                1u8.hash(state);
                deferred.path.hash(state);
                deferred.type_name.hash(state);
            }
        }
    }
}
