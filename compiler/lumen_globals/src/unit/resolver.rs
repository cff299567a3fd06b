//! Resolution of compilation units by type name.

use std::sync::Arc;

use lumen_ir::{Name, NamespacePath, StringLookup};

use super::{CompilationUnit, UnitRef};

/// Finds the compilation unit that defines a type.
///
/// Supplied by the session driver. Returns `None` when no loaded unit
/// defines the type (or, with `public_only`, no unit defines it publicly).
pub trait UnitResolver: Send + Sync {
    fn resolve(
        &self,
        path: &NamespacePath,
        type_name: Name,
        public_only: bool,
    ) -> Option<Arc<CompilationUnit>>;
}

impl<F> UnitResolver for F
where
    F: Fn(&NamespacePath, Name, bool) -> Option<Arc<CompilationUnit>> + Send + Sync,
{
    fn resolve(
        &self,
        path: &NamespacePath,
        type_name: Name,
        public_only: bool,
    ) -> Option<Arc<CompilationUnit>> {
        self(path, type_name, public_only)
    }
}

/// Resolver over a fixed list of loaded units, searched in order.
#[derive(Default, Debug)]
pub struct UnitTable {
    units: Vec<Arc<CompilationUnit>>,
}

impl UnitTable {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_unit(mut self, unit: Arc<CompilationUnit>) -> Self {
        self.units.push(unit);
        self
    }

    pub fn add(&mut self, unit: Arc<CompilationUnit>) {
        self.units.push(unit);
    }

    pub fn units(&self) -> &[Arc<CompilationUnit>] {
        &self.units
    }
}

impl UnitResolver for UnitTable {
    fn resolve(
        &self,
        path: &NamespacePath,
        type_name: Name,
        public_only: bool,
    ) -> Option<Arc<CompilationUnit>> {
        self.units
            .iter()
            .find(|unit| unit.defines(path, type_name, public_only))
            .cloned()
    }
}

/// Resolve a unit, substituting a deferred sentinel when nothing defines the type.
///
/// The sentinel's diagnostic reads `"<path>.<name> not found"`.
pub fn resolve_or_deferred(
    resolver: &dyn UnitResolver,
    lookup: &impl StringLookup,
    path: &NamespacePath,
    type_name: Name,
    public_only: bool,
) -> UnitRef {
    match resolver.resolve(path, type_name, public_only) {
        Some(unit) => UnitRef::Resolved(unit),
        None => {
            let diagnostic = format!("{} not found", path.qualify(type_name, lookup));
            tracing::debug!(%diagnostic, "deferring unresolved compilation unit");
            UnitRef::deferred(path.clone(), type_name, diagnostic)
        }
    }
}
