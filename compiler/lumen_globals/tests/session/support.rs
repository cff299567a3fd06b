//! Session construction shared by the integration tests.

use std::sync::Arc;

use lumen_globals::{
    array_tycon_name, CompilationUnit, Globals, GlobalsConfig, NamedTycon, Origin,
    PrimitiveKind, SessionUnits, TypeDefKind, TypeDefSpec, UnitTable, WellKnownAttributes,
    CORE_NAMESPACE, MAX_ARRAY_RANK, MAX_TUPLE, SYSTEM_NAMESPACE,
};
use lumen_ir::{NamespacePath, SharedInterner, StringInterner};

pub fn define(unit: &CompilationUnit, interner: &StringInterner, full_name: &str, kind: TypeDefKind) {
    let (namespace, name) = full_name.rsplit_once('.').unwrap_or(("", full_name));
    let path = if namespace.is_empty() {
        NamespacePath::root()
    } else {
        interner.intern_path(namespace)
    };
    unit.define(TypeDefSpec::new(path, interner.intern(name), kind));
}

/// A host runtime unit defining every type the environment asks it for.
pub fn host_unit(interner: &StringInterner) -> Arc<CompilationUnit> {
    let unit = CompilationUnit::new_external(interner.intern("System.Runtime"));
    for kind in PrimitiveKind::ALL {
        if let Some(name) = kind.host_name() {
            define(&unit, interner, &format!("{SYSTEM_NAMESPACE}.{name}"), TypeDefKind::Struct);
        }
    }
    for arity in 1..=MAX_TUPLE {
        define(&unit, interner, &format!("System.Tuple`{arity}"), TypeDefKind::Class);
        define(&unit, interner, &format!("System.ValueTuple`{arity}"), TypeDefKind::Struct);
    }
    for tycon in NamedTycon::ALL {
        if let (Origin::Host, namespace, name) = tycon.location() {
            define(&unit, interner, &format!("{namespace}.{name}"), TypeDefKind::Class);
        }
    }
    for &attribute in WellKnownAttributes::REQUIRED {
        define(&unit, interner, attribute, TypeDefKind::Attribute);
    }
    unit
}

/// A standard library unit.
pub fn core_unit(interner: &StringInterner) -> Arc<CompilationUnit> {
    let unit = CompilationUnit::new_external(interner.intern("Lumen.Core"));
    for kind in PrimitiveKind::ALL {
        if let Some(name) = kind.core_name() {
            define(&unit, interner, &format!("{CORE_NAMESPACE}.{name}"), TypeDefKind::Abbreviation);
        }
    }
    for tycon in NamedTycon::ALL {
        if let (Origin::Core, namespace, name) = tycon.location() {
            define(&unit, interner, &format!("{namespace}.{name}"), TypeDefKind::Class);
        }
    }
    for rank in 1..=MAX_ARRAY_RANK {
        let name = array_tycon_name(rank);
        define(&unit, interner, &format!("{CORE_NAMESPACE}.{name}"), TypeDefKind::Class);
    }
    unit
}

/// A session with the host runtime and the standard library loaded.
pub fn session(config: GlobalsConfig) -> Globals {
    lumen_globals::init_tracing();
    let interner = SharedInterner::new();
    let host = host_unit(&interner);
    let core = core_unit(&interner);
    let local = CompilationUnit::new_local(interner.intern("app"));
    let resolver = UnitTable::new()
        .with_unit(host)
        .with_unit(Arc::clone(&core));
    Globals::new(
        config,
        interner,
        SessionUnits::new(local).with_std_lib(core),
        resolver,
    )
    .unwrap()
}
