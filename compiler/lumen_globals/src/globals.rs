//! The session-wide global environment.
//!
//! `Globals` is built once per compilation session and then shared read-only
//! (usually as `Arc<Globals>`) by every analysis thread. It owns the
//! well-known type constructors, the primitive type handles, the intrinsic
//! registry, the attribute catalog and the lazily built canonicalization
//! maps.

use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

use lumen_diagnostic::Diagnostic;
use lumen_ir::{Name, NamespacePath, SharedInterner, StringInterner};

use crate::attributes::{AttributeCatalog, WellKnownAttributes};
use crate::canon::{DecompileMap, ImproveMap, ImproveStrategy};
use crate::config::GlobalsConfig;
use crate::error::GlobalsError;
use crate::intrinsics::{
    build_intrinsic, InstantiateCx, IntrinsicDef, IntrinsicId, IntrinsicValRef,
    KnownIntrinsicTable, LinkageKey, INTRINSICS,
};
use crate::prims::{PrimitiveKind, PrimitiveTypes};
use crate::tycon::TyconRef;
use crate::tycons::{NamedTycon, TyconFinder, WellKnownTycons};
use crate::ty::{Nullness, Ty};
use crate::unit::{resolve_or_deferred, CompilationUnit, TypeDef, UnitRef, UnitResolver};

/// The compilation units known when the session starts.
#[derive(Clone, Debug)]
pub struct SessionUnits {
    /// The unit being compiled. Starts empty; the type checker fills it.
    pub local: Arc<CompilationUnit>,
    /// The standard library, when it was loaded as a referenced unit.
    pub std_lib: Option<Arc<CompilationUnit>>,
}

impl SessionUnits {
    pub fn new(local: Arc<CompilationUnit>) -> Self {
        SessionUnits {
            local,
            std_lib: None,
        }
    }

    #[must_use]
    pub fn with_std_lib(mut self, std_lib: Arc<CompilationUnit>) -> Self {
        self.std_lib = Some(std_lib);
        self
    }
}

/// The global type and symbol environment of one compilation session.
pub struct Globals {
    config: GlobalsConfig,
    interner: SharedInterner,
    resolver: Box<dyn UnitResolver>,
    local_unit: Arc<CompilationUnit>,
    core_unit: UnitRef,
    pub(crate) tycons: WellKnownTycons,
    pub(crate) prims: PrimitiveTypes,
    /// Every intrinsic, indexed by `IntrinsicId`.
    intrinsics: Box<[Arc<IntrinsicValRef>]>,
    known_intrinsics: KnownIntrinsicTable,
    pub(crate) attributes: AttributeCatalog,
    well_known_attributes: WellKnownAttributes,
    improve_strategy: ImproveStrategy,
    pub(crate) decompile_map: OnceLock<DecompileMap>,
    pub(crate) improve_map: OnceLock<ImproveMap>,
}

impl Globals {
    /// Build the environment for a session.
    ///
    /// Looks up every well-known type constructor, builds the primitive
    /// types, instantiates the intrinsic table and precomputes the
    /// well-known attribute descriptors. Missing units never fail
    /// construction: they become deferred sentinels that report their
    /// diagnostic when forced.
    ///
    /// # Errors
    /// Returns `GlobalsError::InvalidConfig` when the configuration is rejected.
    ///
    /// # Panics
    /// Panics if two known intrinsics share a linkage key.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(std_lib = config.compiling_std_lib, mode = ?config.mode)
    )]
    pub fn new(
        config: GlobalsConfig,
        interner: SharedInterner,
        units: SessionUnits,
        resolver: impl UnitResolver + 'static,
    ) -> Result<Self, GlobalsError> {
        config.validate()?;
        let resolver: Box<dyn UnitResolver> = Box::new(resolver);
        let SessionUnits { local, std_lib } = units;

        let core_unit = match (config.compiling_std_lib, std_lib) {
            (true, _) => UnitRef::Resolved(Arc::clone(&local)),
            (false, Some(std_lib)) => UnitRef::Resolved(std_lib),
            (false, None) => {
                let diagnostic = format!("{} not found", config.std_lib_name);
                tracing::debug!(%diagnostic, "standard library unit is not loaded");
                UnitRef::deferred(
                    NamespacePath::root(),
                    interner.intern(&config.std_lib_name),
                    diagnostic,
                )
            }
        };

        let tycons = WellKnownTycons::new(&TyconFinder {
            interner: &interner,
            resolver: resolver.as_ref(),
            local: &local,
            core: &core_unit,
            compiling_std_lib: config.compiling_std_lib,
        });
        let prims = PrimitiveTypes::new(&tycons, config.effective_null_tracking());

        let cx = InstantiateCx {
            tycons: &tycons,
            prims: &prims,
            typars: &[],
        };
        let known_intrinsics = KnownIntrinsicTable::new();
        let intrinsics: Box<[Arc<IntrinsicValRef>]> = INTRINSICS
            .iter()
            .enumerate()
            .map(|(index, def)| {
                assert_eq!(
                    def.id.index(),
                    index,
                    "intrinsic table row for {:?} is out of order",
                    def.id
                );
                let vref = Arc::new(build_intrinsic(def, &interner, &cx));
                if vref.known {
                    known_intrinsics.insert(Arc::clone(&vref));
                }
                vref
            })
            .collect();

        let attributes = AttributeCatalog::default();
        let well_known_attributes =
            WellKnownAttributes::new(&attributes, &interner, resolver.as_ref());

        let improve_strategy = if config.compiling_std_lib {
            ImproveStrategy::ByName
        } else {
            ImproveStrategy::ByStamp
        };

        tracing::debug!(
            intrinsics = intrinsics.len(),
            known = known_intrinsics.len(),
            ?improve_strategy,
            "global environment ready"
        );

        Ok(Globals {
            config,
            interner,
            resolver,
            local_unit: local,
            core_unit,
            tycons,
            prims,
            intrinsics,
            known_intrinsics,
            attributes,
            well_known_attributes,
            improve_strategy,
            decompile_map: OnceLock::new(),
            improve_map: OnceLock::new(),
        })
    }

    pub fn config(&self) -> &GlobalsConfig {
        &self.config
    }

    pub fn interner(&self) -> &StringInterner {
        &self.interner
    }

    pub fn shared_interner(&self) -> &SharedInterner {
        &self.interner
    }

    pub(crate) fn resolver(&self) -> &dyn UnitResolver {
        self.resolver.as_ref()
    }

    pub fn local_unit(&self) -> &Arc<CompilationUnit> {
        &self.local_unit
    }

    /// The standard library unit, or its deferred sentinel.
    pub fn core_unit(&self) -> &UnitRef {
        &self.core_unit
    }

    pub fn improve_strategy(&self) -> ImproveStrategy {
        self.improve_strategy
    }

    pub fn well_known_attributes(&self) -> &WellKnownAttributes {
        &self.well_known_attributes
    }

    /// Join a relative source path onto the configured base path.
    pub fn resolve_source_path(&self, path: &Path) -> PathBuf {
        self.config.resolve_source_path(path)
    }

    /// Diagnostic for `err`, attributed to the source file that triggered it.
    #[cold]
    pub fn diagnostic_at(&self, err: &GlobalsError, source: &Path) -> Diagnostic {
        err.to_diagnostic()
            .with_file(self.resolve_source_path(source))
    }

    // Compilation units and type-constructor references

    /// The unit defining `path.name`, or a deferred sentinel.
    pub fn resolve_or_deferred(
        &self,
        path: &NamespacePath,
        name: Name,
        public_only: bool,
    ) -> UnitRef {
        resolve_or_deferred(self.resolver(), &*self.interner, path, name, public_only)
    }

    /// Reference a host-runtime type through the resolver.
    pub fn find_sys_tycon(&self, namespace: &str, name: &str) -> TyconRef {
        self.finder().sys(namespace, name)
    }

    /// Reference a standard-library type without consulting the resolver.
    pub fn find_core_tycon(&self, namespace: &str, name: &str) -> TyconRef {
        self.finder().core(namespace, name)
    }

    fn finder(&self) -> TyconFinder<'_> {
        TyconFinder {
            interner: &self.interner,
            resolver: self.resolver(),
            local: &self.local_unit,
            core: &self.core_unit,
            compiling_std_lib: self.config.compiling_std_lib,
        }
    }

    /// Dereference, promoting deferred failures to errors.
    pub fn deref_tycon(&self, tcref: &TyconRef) -> Result<Arc<TypeDef>, GlobalsError> {
        tcref.deref(&self.interner)
    }

    pub fn tycons(&self) -> &WellKnownTycons {
        &self.tycons
    }

    #[inline]
    pub fn tycon(&self, tycon: NamedTycon) -> &TyconRef {
        self.tycons.get(tycon)
    }

    // Primitive types

    pub fn prims(&self) -> &PrimitiveTypes {
        &self.prims
    }

    #[inline]
    pub fn prim_ty(&self, kind: PrimitiveKind) -> &Ty {
        self.prims.get(kind)
    }

    /// A primitive with explicit nullness.
    pub fn prim_ty_with_nullness(&self, kind: PrimitiveKind, nullness: Nullness) -> Ty {
        self.prims.with_nullness(kind, nullness)
    }

    pub fn int_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Int32)
    }

    pub fn int64_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Int64)
    }

    pub fn float_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Float)
    }

    pub fn bool_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Bool)
    }

    pub fn char_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Char)
    }

    pub fn unit_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Unit)
    }

    pub fn exn_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Exn)
    }

    pub fn system_type_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::SystemType)
    }

    pub fn string_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::String)
    }

    pub fn string_ty_with_null(&self) -> Ty {
        self.prim_ty_with_nullness(PrimitiveKind::String, Nullness::WithNull)
    }

    pub fn string_ty_without_null(&self) -> Ty {
        self.prim_ty_with_nullness(PrimitiveKind::String, Nullness::WithoutNull)
    }

    pub fn obj_ty(&self) -> &Ty {
        self.prim_ty(PrimitiveKind::Obj)
    }

    pub fn obj_ty_with_null(&self) -> Ty {
        self.prim_ty_with_nullness(PrimitiveKind::Obj, Nullness::WithNull)
    }

    pub fn obj_ty_without_null(&self) -> Ty {
        self.prim_ty_with_nullness(PrimitiveKind::Obj, Nullness::WithoutNull)
    }

    // Intrinsics

    /// The precomputed intrinsic for `id`. Identical on every call.
    #[inline]
    pub fn intrinsic(&self, id: IntrinsicId) -> &IntrinsicValRef {
        &self.intrinsics[id.index()]
    }

    pub fn intrinsics(&self) -> impl Iterator<Item = &IntrinsicValRef> {
        self.intrinsics.iter().map(|vref| &**vref)
    }

    pub fn known_intrinsics(&self) -> &KnownIntrinsicTable {
        &self.known_intrinsics
    }

    pub fn find_known_intrinsic(&self, key: &LinkageKey) -> Option<Arc<IntrinsicValRef>> {
        self.known_intrinsics.get(key)
    }

    /// Look up a known intrinsic by the strings of its linkage key.
    ///
    /// Never interns: a name the session has not seen cannot be a key.
    pub fn try_find_known_intrinsic_by_name(
        &self,
        entity: &str,
        member_parent: Option<&str>,
        compiled_name: &str,
        arg_count: u32,
    ) -> Option<Arc<IntrinsicValRef>> {
        let member_parent = match member_parent {
            Some(parent) => Some(self.interner.get(parent)?),
            None => None,
        };
        self.find_known_intrinsic(&LinkageKey {
            entity: self.interner.get(entity)?,
            member_parent,
            compiled_name: self.interner.get(compiled_name)?,
            arg_count,
        })
    }

    /// Re-derive an intrinsic from its table row.
    ///
    /// Equal to `intrinsic(id)`, but freshly allocated.
    pub fn make_other_intrinsic(&self, id: IntrinsicId) -> IntrinsicValRef {
        build_intrinsic(&INTRINSICS[id.index()], &self.interner, &self.instantiate_cx())
    }

    /// Instantiate an intrinsic definition and, if known, register it.
    ///
    /// # Panics
    /// Panics if a known intrinsic with the same linkage key is already registered.
    pub fn register(&self, def: &IntrinsicDef) -> Arc<IntrinsicValRef> {
        let vref = Arc::new(build_intrinsic(def, &self.interner, &self.instantiate_cx()));
        if vref.known {
            self.known_intrinsics.insert(Arc::clone(&vref));
        }
        vref
    }

    pub(crate) fn instantiate_cx(&self) -> InstantiateCx<'_> {
        InstantiateCx {
            tycons: &self.tycons,
            prims: &self.prims,
            typars: &[],
        }
    }
}

impl std::fmt::Debug for Globals {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Globals")
            .field("config", &self.config)
            .field("local_unit", &self.local_unit)
            .field("core_unit", &self.core_unit)
            .field("intrinsics", &self.intrinsics.len())
            .field("known_intrinsics", &self.known_intrinsics.len())
            .field("improve_strategy", &self.improve_strategy)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests;
