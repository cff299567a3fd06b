//! Session fixtures for unit tests.

#![allow(clippy::unwrap_used, reason = "Fixtures panic on setup failure")]

use std::sync::Arc;

use lumen_ir::{NamespacePath, SharedInterner, StringInterner};

use crate::attributes::WellKnownAttributes;
use crate::config::GlobalsConfig;
use crate::globals::{Globals, SessionUnits};
use crate::prims::PrimitiveKind;
use crate::tuple::MAX_TUPLE;
use crate::tycons::{array_tycon_name, NamedTycon, Origin, CORE_NAMESPACE, MAX_ARRAY_RANK, SYSTEM_NAMESPACE};
use crate::unit::{Access, CompilationUnit, TypeDefKind, TypeDefSpec, UnitTable};

/// An attribute the host runtime fixture defines, but not publicly.
pub(crate) const INTERNAL_ATTRIBUTE: &str = "System.Runtime.CompilerServices.IsByRefLikeAttribute";

pub(crate) fn define(
    unit: &CompilationUnit,
    interner: &StringInterner,
    namespace: &str,
    name: &str,
    kind: TypeDefKind,
) {
    let path = if namespace.is_empty() {
        NamespacePath::root()
    } else {
        interner.intern_path(namespace)
    };
    unit.define(TypeDefSpec::new(path, interner.intern(name), kind));
}

/// Define every host-runtime type the environment names.
pub(crate) fn populate_host(unit: &CompilationUnit, interner: &StringInterner) {
    for kind in PrimitiveKind::ALL {
        if let Some(name) = kind.host_name() {
            define(unit, interner, SYSTEM_NAMESPACE, name, TypeDefKind::Struct);
        }
    }
    for arity in 1..=MAX_TUPLE {
        define(unit, interner, SYSTEM_NAMESPACE, &format!("Tuple`{arity}"), TypeDefKind::Class);
        define(unit, interner, SYSTEM_NAMESPACE, &format!("ValueTuple`{arity}"), TypeDefKind::Struct);
    }
    for tycon in NamedTycon::ALL {
        if let (Origin::Host, namespace, name) = tycon.location() {
            define(unit, interner, namespace, name, TypeDefKind::Class);
        }
    }
    for &full_name in WellKnownAttributes::REQUIRED {
        let (namespace, name) = full_name.rsplit_once('.').unwrap_or(("", full_name));
        define(unit, interner, namespace, name, TypeDefKind::Attribute);
    }
    let (namespace, name) = INTERNAL_ATTRIBUTE.rsplit_once('.').unwrap();
    unit.define(
        TypeDefSpec::new(interner.intern_path(namespace), interner.intern(name), TypeDefKind::Attribute)
            .access(Access::Internal),
    );
}

/// Define every standard-library type the environment names.
pub(crate) fn populate_core(unit: &CompilationUnit, interner: &StringInterner) {
    for kind in PrimitiveKind::ALL {
        if let Some(name) = kind.core_name() {
            define(unit, interner, CORE_NAMESPACE, name, TypeDefKind::Abbreviation);
        }
    }
    for tycon in NamedTycon::ALL {
        if let (Origin::Core, namespace, name) = tycon.location() {
            define(unit, interner, namespace, name, TypeDefKind::Class);
        }
    }
    for rank in 1..=MAX_ARRAY_RANK {
        define(unit, interner, CORE_NAMESPACE, &array_tycon_name(rank), TypeDefKind::Class);
    }
}

/// A session with a host runtime, a loaded standard library and an empty local unit.
pub(crate) struct Fixture {
    #[allow(dead_code, reason = "Kept so fixtures own the interner they populate")]
    pub interner: SharedInterner,
    pub host: Arc<CompilationUnit>,
    pub core: Arc<CompilationUnit>,
    pub globals: Globals,
}

impl Fixture {
    pub fn new() -> Self {
        Self::with_config(GlobalsConfig::default())
    }

    pub fn with_config(config: GlobalsConfig) -> Self {
        let interner = SharedInterner::new();
        let host = CompilationUnit::new_external(interner.intern("System.Runtime"));
        populate_host(&host, &interner);
        let core = CompilationUnit::new_external(interner.intern("Lumen.Core"));
        populate_core(&core, &interner);
        let local = CompilationUnit::new_local(interner.intern("app"));

        let resolver = UnitTable::new()
            .with_unit(Arc::clone(&host))
            .with_unit(Arc::clone(&core));
        let units = SessionUnits::new(local).with_std_lib(Arc::clone(&core));
        let globals = Globals::new(config, interner.clone(), units, resolver).unwrap();
        Fixture {
            interner,
            host,
            core,
            globals,
        }
    }

    /// A session with no units at all: every lookup is deferred.
    pub fn empty() -> Globals {
        let interner = SharedInterner::new();
        let local = CompilationUnit::new_local(interner.intern("app"));
        Globals::new(
            GlobalsConfig::default(),
            interner,
            SessionUnits::new(local),
            UnitTable::new(),
        )
        .unwrap()
    }

    /// A session compiling the standard library itself. The local unit is empty.
    pub fn std_lib() -> Globals {
        let interner = SharedInterner::new();
        let local = CompilationUnit::new_local(interner.intern("Lumen.Core"));
        Globals::new(
            GlobalsConfig::default().with_std_lib(true),
            interner,
            SessionUnits::new(local),
            UnitTable::new(),
        )
        .unwrap()
    }
}
