#![allow(clippy::unwrap_used, reason = "Tests use unwrap for brevity")]

use std::path::Path;

use lumen_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;
use crate::config::{CompilationMode, LangVersion};
use crate::error::ConfigError;
use crate::testing::{populate_host, Fixture};
use crate::unit::UnitTable;

fn assert_send_sync<T: Send + Sync>() {}

#[test]
fn globals_can_be_shared_across_threads() {
    assert_send_sync::<Globals>();
    assert_send_sync::<Arc<Globals>>();
}

#[test]
fn relative_base_path_is_rejected() {
    let interner = SharedInterner::new();
    let local = CompilationUnit::new_local(interner.intern("app"));
    let err = Globals::new(
        GlobalsConfig::default().with_base_path("src"),
        interner,
        SessionUnits::new(local),
        UnitTable::new(),
    )
    .unwrap_err();
    assert_eq!(
        err,
        GlobalsError::InvalidConfig(ConfigError::RelativeBasePath("src".into()))
    );
    assert_eq!(err.code(), ErrorCode::E9102);
}

#[test]
fn unsupported_language_version_is_rejected() {
    let interner = SharedInterner::new();
    let local = CompilationUnit::new_local(interner.intern("app"));
    let result = Globals::new(
        GlobalsConfig::default().with_lang_version(LangVersion::new(9, 0)),
        interner,
        SessionUnits::new(local),
        UnitTable::new(),
    );
    assert!(matches!(
        result,
        Err(GlobalsError::InvalidConfig(ConfigError::UnsupportedLanguageVersion { .. }))
    ));
}

#[test]
fn missing_std_lib_defers_the_core_unit() {
    let g = Fixture::empty();
    let core = g.core_unit();
    assert!(core.is_deferred());
    assert_eq!(core.diagnostic(), Some("Lumen.Core not found"));
    assert_eq!(
        core.force().unwrap_err(),
        GlobalsError::DeferredResolution {
            diagnostic: "Lumen.Core not found".to_owned()
        }
    );
}

#[test]
fn missing_std_lib_types_name_themselves_when_forced() {
    let g = Fixture::empty();
    let option = g.tycon(NamedTycon::Option);
    assert_eq!(
        g.deref_tycon(option).unwrap_err(),
        GlobalsError::DeferredResolution {
            diagnostic: "Lumen.Core.Option`1 not found".to_owned()
        }
    );

    let absent = g.find_core_tycon("Lumen.Core.Collections", "Bag`1");
    assert_eq!(
        g.deref_tycon(&absent).unwrap_err().to_string(),
        "Lumen.Core.Collections.Bag`1 not found"
    );
    assert_ne!(g.tycon(NamedTycon::List), option);
}

#[test]
fn loaded_std_lib_is_the_core_unit() {
    let fx = Fixture::new();
    assert_eq!(fx.globals.core_unit().unit_id(), Some(fx.core.id()));
    assert!(fx.globals.local_unit().is_empty());
}

#[test]
fn compiling_the_std_lib_makes_the_local_unit_core() {
    let g = Fixture::std_lib();
    assert_eq!(g.core_unit().unit_id(), Some(g.local_unit().id()));
    assert_eq!(g.improve_strategy(), ImproveStrategy::ByName);
    assert_eq!(Fixture::new().globals.improve_strategy(), ImproveStrategy::ByStamp);
}

#[test]
fn find_sys_tycon_goes_through_the_resolver() {
    let fx = Fixture::new();
    let g = &fx.globals;

    let int32 = g.find_sys_tycon("System", "Int32");
    assert_eq!(int32.unit_id(), Some(fx.host.id()));
    assert_eq!(
        &int32,
        g.tycons().sys_prim(PrimitiveKind::Int32).unwrap()
    );

    let missing = g.find_sys_tycon("System.Collections", "Hashtable");
    assert!(missing.is_deferred());
    assert_eq!(
        g.deref_tycon(&missing).unwrap_err().to_string(),
        "System.Collections.Hashtable not found"
    );
}

#[test]
fn find_core_tycon_addresses_the_std_lib_without_resolving() {
    let fx = Fixture::new();
    let g = &fx.globals;

    let option = g.find_core_tycon("Lumen.Core", "Option`1");
    assert_eq!(option.unit_id(), Some(fx.core.id()));

    let absent = g.find_core_tycon("Lumen.Core", "NotThere");
    assert!(!absent.is_deferred());
    let err = g.deref_tycon(&absent).unwrap_err();
    assert_eq!(err.code(), ErrorCode::E2102);
}

#[test]
fn resolve_or_deferred_reports_the_qualified_name() {
    let fx = Fixture::new();
    let g = &fx.globals;
    let path = g.interner().intern_path("System");

    let found = g.resolve_or_deferred(&path, g.interner().intern("String"), true);
    assert_eq!(found.unit_id(), Some(fx.host.id()));

    let missing = g.resolve_or_deferred(&path, g.interner().intern("Nope"), true);
    assert_eq!(missing.diagnostic(), Some("System.Nope not found"));
}

#[test]
fn closures_work_as_resolvers() {
    let interner = SharedInterner::new();
    let host = CompilationUnit::new_external(interner.intern("System.Runtime"));
    populate_host(&host, &interner);
    let local = CompilationUnit::new_local(interner.intern("app"));

    let resolver_host = Arc::clone(&host);
    let resolver = move |path: &NamespacePath, name: Name, public_only: bool| {
        resolver_host
            .defines(path, name, public_only)
            .then(|| Arc::clone(&resolver_host))
    };
    let g = Globals::new(
        GlobalsConfig::default(),
        interner,
        SessionUnits::new(local),
        resolver,
    )
    .unwrap();

    assert!(g.tycons().sys_prim(PrimitiveKind::String).unwrap().can_deref());
    assert!(g.tycon(NamedTycon::Option).is_deferred());
    assert!(g.well_known_attributes().compiler_generated.is_available());
}

#[test]
fn source_paths_resolve_against_the_base_path() {
    let base = if cfg!(windows) { "C:\\work" } else { "/work" };
    let interner = SharedInterner::new();
    let local = CompilationUnit::new_local(interner.intern("app"));
    let g = Globals::new(
        GlobalsConfig::default().with_base_path(base),
        interner,
        SessionUnits::new(local),
        UnitTable::new(),
    )
    .unwrap();

    assert_eq!(
        g.resolve_source_path(Path::new("lib/a.lm")),
        Path::new(base).join("lib/a.lm")
    );
    let absolute = Path::new(base).join("b.lm");
    assert_eq!(g.resolve_source_path(&absolute), absolute);

    let unbased = Fixture::empty();
    assert_eq!(
        unbased.resolve_source_path(Path::new("c.lm")),
        Path::new("c.lm")
    );
}

#[test]
fn diagnostics_are_attributed_to_resolved_source_paths() {
    let base = if cfg!(windows) { "C:\\work" } else { "/work" };
    let fx = Fixture::with_config(GlobalsConfig::default().with_base_path(base));
    let g = &fx.globals;
    let err = g
        .deref_tycon(&g.find_sys_tycon("System.Collections", "Hashtable"))
        .unwrap_err();

    let diag = g.diagnostic_at(&err, Path::new("src/main.lm"));
    assert_eq!(diag.code, ErrorCode::E2101);
    assert_eq!(diag.message, "System.Collections.Hashtable not found");
    assert_eq!(diag.file, Some(Path::new(base).join("src/main.lm")));

    let unbased = Fixture::empty();
    let diag = unbased.diagnostic_at(&err, Path::new("src/main.lm"));
    assert_eq!(diag.file.as_deref(), Some(Path::new("src/main.lm")));
}

#[test]
fn configuration_is_kept() {
    let config = GlobalsConfig::default()
        .with_mode(CompilationMode::Interactive)
        .with_null_tracking(true);
    let fx = Fixture::with_config(config.clone());
    assert_eq!(fx.globals.config(), &config);
    assert!(fx.globals.config().mode.is_interactive());
}

#[test]
fn every_intrinsic_is_built_in_table_order() {
    let fx = Fixture::new();
    let ids: Vec<IntrinsicId> = fx.globals.intrinsics().map(|vref| vref.id).collect();
    assert_eq!(ids, IntrinsicId::ALL);
}

#[test]
fn debug_output_is_a_summary() {
    let fx = Fixture::new();
    let debug = format!("{:?}", fx.globals);
    assert!(debug.starts_with("Globals {"));
    assert!(debug.contains("improve_strategy: ByStamp"));
}
