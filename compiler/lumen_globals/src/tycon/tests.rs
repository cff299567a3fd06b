use rustc_hash::FxHashSet;

use lumen_ir::StringInterner;
use pretty_assertions::assert_eq;

use super::*;
use crate::unit::{TypeDefKind, TypeDefSpec};

struct Fixture {
    interner: StringInterner,
    unit: Arc<CompilationUnit>,
    path: NamespacePath,
    name: Name,
}

fn fixture() -> Fixture {
    let interner = StringInterner::new();
    let unit = CompilationUnit::new_local(interner.intern("Lumen.Core"));
    let path = interner.intern_path("Lumen.Core");
    let name = interner.intern("Option`1");
    Fixture {
        interner,
        unit,
        path,
        name,
    }
}

#[test]
fn non_local_refs_resolve_after_definition() {
    let f = fixture();
    let tcref = TyconRef::in_unit(&f.unit, f.path.clone(), f.name);

    assert!(!tcref.can_deref());
    assert_eq!(tcref.stamp(), None);
    assert!(matches!(
        tcref.deref(&f.interner),
        Err(GlobalsError::TypeNotFound { .. })
    ));

    let def = f
        .unit
        .define(TypeDefSpec::new(f.path.clone(), f.name, TypeDefKind::Union).arity(1));

    assert!(tcref.can_deref());
    assert_eq!(tcref.stamp(), Some(def.stamp));
    assert_eq!(tcref.deref(&f.interner).ok().map(|d| d.stamp), Some(def.stamp));
}

#[test]
fn not_found_names_the_type_and_unit() {
    let f = fixture();
    let tcref = TyconRef::in_unit(&f.unit, f.path.clone(), f.name);
    assert_eq!(
        tcref.deref(&f.interner).err(),
        Some(GlobalsError::TypeNotFound {
            path: "Lumen.Core.Option`1".to_owned(),
            unit: "Lumen.Core".to_owned(),
        })
    );
}

#[test]
fn deferred_refs_raise_their_diagnostic() {
    let f = fixture();
    let unit = UnitRef::deferred(f.path.clone(), f.name, "Lumen.Core.Option`1 not found".to_owned());
    let tcref = TyconRef::non_local(unit, f.path.clone(), f.name);

    assert!(tcref.is_deferred());
    assert!(!tcref.can_deref());
    assert_eq!(
        tcref.deref(&f.interner).err(),
        Some(GlobalsError::DeferredResolution {
            diagnostic: "Lumen.Core.Option`1 not found".to_owned()
        })
    );
}

#[test]
fn local_and_non_local_refs_to_the_same_type_are_equal() {
    let f = fixture();
    let def = f
        .unit
        .define(TypeDefSpec::new(f.path.clone(), f.name, TypeDefKind::Union).arity(1));

    let local = TyconRef::local(def);
    let by_name = TyconRef::in_unit(&f.unit, f.path.clone(), f.name);
    assert_eq!(local, by_name);

    let mut set = FxHashSet::default();
    set.insert(local);
    assert!(set.contains(&by_name));
}

#[test]
fn refs_into_different_units_differ() {
    let f = fixture();
    let other = CompilationUnit::new_external(f.interner.intern("Other"));
    let a = TyconRef::in_unit(&f.unit, f.path.clone(), f.name);
    let b = TyconRef::in_unit(&other, f.path.clone(), f.name);
    assert_ne!(a, b);
    assert_eq!(a.display(&f.interner), b.display(&f.interner));
    assert_eq!(a.display(&f.interner), "Lumen.Core.Option`1");
}
