//! Global type and symbol environment for Lumen.
//!
//! One `Globals` value per compilation session. It is built before type
//! checking starts and then only read, from any number of threads.
//!
//! # What it holds
//!
//! - Type-constructor references for every type the compiler names
//!   directly, resolved through the session's unit resolver or deferred
//!   when nothing provides them
//! - Precomputed primitive types (`int`, `string`, `obj`, ...)
//! - The intrinsic symbol registry, with lookup by linkage key
//! - Decompile and improve maps that canonicalize imported types
//! - Attribute descriptors for code generation
//! - Built-in witnesses for operator and math constraints
//!
//! # Deferred resolution
//!
//! Building the environment never fails because a type is missing. A
//! reference to a type no loaded unit provides is backed by a deferred
//! sentinel carrying the diagnostic `"<namespace>.<name> not found"`, raised
//! only if something dereferences it.

mod attributes;
mod canon;
mod config;
mod error;
mod globals;
mod intrinsics;
mod prims;
mod tuple;
mod tycon;
mod tycons;
mod ty;
mod unit;
mod witness;

#[cfg(test)]
mod testing;

pub use attributes::{
    AttrArg, AttribInfo, CustomAttr, IlTypeRef, ScopeRef, WellKnownAttributes,
    EMBEDDABLE_ATTRIBUTES,
};
pub use canon::ImproveStrategy;
pub use config::{CompilationMode, GlobalsConfig, LangFeature, LangVersion};
pub use error::{ConfigError, GlobalsError, WitnessShape};
pub use globals::{Globals, SessionUnits};
pub use intrinsics::{
    EnclosingEntity, Entity, IntrinsicDef, IntrinsicId, IntrinsicValRef, KnownIntrinsicTable,
    LinkageKey, Sig, TyTemplate, INTRINSICS,
};
pub use prims::{PrimitiveKind, PrimitiveTypes};
pub use tuple::{TupleTycons, GOOD_TUPLE_FIELDS, MAX_TUPLE};
pub use tycon::{NonLocalTycon, TyconRef};
pub use tycons::{
    array_tycon_name, NamedTycon, Origin, WellKnownTycons, CORE_NAMESPACE, MAX_ARRAY_RANK,
    SYSTEM_NAMESPACE,
};
pub use ty::{super_fold_ty, Nullness, TupInfo, Ty, TyFolder, TyKind, TyParam};
pub use unit::{
    Access, CompilationUnit, DeferredUnit, Stamp, TypeDef, TypeDefFlags, TypeDefKind,
    TypeDefSpec, UnitId, UnitKind, UnitRef, UnitResolver, UnitTable,
};
pub use witness::{operator_trait_name, WitnessRequest, WitnessResolution};

use std::sync::Once;

static TRACING_INIT: Once = Once::new();

/// Initialize tracing for debug output.
///
/// Safe to call multiple times. Enable with `RUST_LOG=lumen_globals=debug`
/// or `RUST_LOG=lumen_globals=trace`.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        use tracing_subscriber::{fmt, prelude::*, EnvFilter};

        // Only initialize if RUST_LOG is set
        if std::env::var("RUST_LOG").is_ok() {
            let filter = EnvFilter::from_default_env();
            // Another subscriber may already be installed by the host.
            let _ = tracing_subscriber::registry()
                .with(fmt::layer().with_target(true).with_level(true))
                .with(filter)
                .try_init();
        }
    });
}

#[cfg(target_pointer_width = "64")]
mod size_asserts {
    use super::{Nullness, Ty, TyconRef};
    lumen_ir::static_assert_size!(Ty, 8);
    lumen_ir::static_assert_size!(TyconRef, 16);
    lumen_ir::static_assert_size!(Nullness, 1);
}
