//! Well-known type constructors.
//!
//! Every type constructor the compiler refers to by name is looked up once
//! here, when the environment is built. Host-runtime types go through the
//! session's unit resolver; standard-library types address the
//! standard-library unit directly. While compiling the standard library
//! itself, both kinds are addressed in the local unit: they cannot be
//! dereferenced until the type checker defines them.

use std::sync::Arc;

use lumen_ir::StringInterner;

use crate::prims::PrimitiveKind;
use crate::tuple::TupleTycons;
use crate::tycon::TyconRef;
use crate::unit::{resolve_or_deferred, CompilationUnit, UnitRef, UnitResolver};

/// Namespace of host-runtime primitives.
pub const SYSTEM_NAMESPACE: &str = "System";
/// Namespace of the standard library's core types.
pub const CORE_NAMESPACE: &str = "Lumen.Core";

/// Highest array rank with its own constructor.
pub const MAX_ARRAY_RANK: usize = 32;

#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Origin {
    /// Defined by the host runtime; found through the unit resolver.
    Host,
    /// Defined by the standard library.
    Core,
}

/// Named non-primitive type constructors.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum NamedTycon {
    Func,
    Option,
    ValueOption,
    List,
    Seq,
    RefCell,
    Format,
    Expr,
    RawExpr,
    ByRef,
    NativePtr,
    QueryBuilder,
    QuerySource,
    Lazy,
    Nullable,
    IEnumerable,
    IEnumerator,
    EqualityComparer,
    Comparer,
    Disposable,
    Void,
    SystemArray,
    Attribute,
    ValueType,
    Enum,
    Delegate,
}

impl NamedTycon {
    pub const ALL: [NamedTycon; 26] = [
        NamedTycon::Func,
        NamedTycon::Option,
        NamedTycon::ValueOption,
        NamedTycon::List,
        NamedTycon::Seq,
        NamedTycon::RefCell,
        NamedTycon::Format,
        NamedTycon::Expr,
        NamedTycon::RawExpr,
        NamedTycon::ByRef,
        NamedTycon::NativePtr,
        NamedTycon::QueryBuilder,
        NamedTycon::QuerySource,
        NamedTycon::Lazy,
        NamedTycon::Nullable,
        NamedTycon::IEnumerable,
        NamedTycon::IEnumerator,
        NamedTycon::EqualityComparer,
        NamedTycon::Comparer,
        NamedTycon::Disposable,
        NamedTycon::Void,
        NamedTycon::SystemArray,
        NamedTycon::Attribute,
        NamedTycon::ValueType,
        NamedTycon::Enum,
        NamedTycon::Delegate,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Where the constructor lives: origin, namespace, compiled name.
    pub const fn location(self) -> (Origin, &'static str, &'static str) {
        match self {
            NamedTycon::Func => (Origin::Core, CORE_NAMESPACE, "Function`2"),
            NamedTycon::Option => (Origin::Core, CORE_NAMESPACE, "Option`1"),
            NamedTycon::ValueOption => (Origin::Core, CORE_NAMESPACE, "ValueOption`1"),
            NamedTycon::List => (Origin::Core, CORE_NAMESPACE, "List`1"),
            NamedTycon::Seq => (Origin::Core, CORE_NAMESPACE, "seq`1"),
            NamedTycon::RefCell => (Origin::Core, CORE_NAMESPACE, "Ref`1"),
            NamedTycon::Format => (Origin::Core, CORE_NAMESPACE, "PrintfFormat`5"),
            NamedTycon::ByRef => (Origin::Core, CORE_NAMESPACE, "byref`1"),
            NamedTycon::NativePtr => (Origin::Core, CORE_NAMESPACE, "nativeptr`1"),
            NamedTycon::Expr => (Origin::Core, "Lumen.Core.Quotations", "Expr`1"),
            NamedTycon::RawExpr => (Origin::Core, "Lumen.Core.Quotations", "Expr"),
            NamedTycon::QueryBuilder => (Origin::Core, "Lumen.Core.Linq", "QueryBuilder"),
            NamedTycon::QuerySource => (Origin::Core, "Lumen.Core.Linq", "QuerySource`2"),
            NamedTycon::Lazy => (Origin::Host, SYSTEM_NAMESPACE, "Lazy`1"),
            NamedTycon::Nullable => (Origin::Host, SYSTEM_NAMESPACE, "Nullable`1"),
            NamedTycon::IEnumerable => {
                (Origin::Host, "System.Collections.Generic", "IEnumerable`1")
            }
            NamedTycon::IEnumerator => {
                (Origin::Host, "System.Collections.Generic", "IEnumerator`1")
            }
            NamedTycon::EqualityComparer => {
                (Origin::Host, "System.Collections", "IEqualityComparer")
            }
            NamedTycon::Comparer => (Origin::Host, "System.Collections", "IComparer"),
            NamedTycon::Disposable => (Origin::Host, SYSTEM_NAMESPACE, "IDisposable"),
            NamedTycon::Void => (Origin::Host, SYSTEM_NAMESPACE, "Void"),
            NamedTycon::SystemArray => (Origin::Host, SYSTEM_NAMESPACE, "Array"),
            NamedTycon::Attribute => (Origin::Host, SYSTEM_NAMESPACE, "Attribute"),
            NamedTycon::ValueType => (Origin::Host, SYSTEM_NAMESPACE, "ValueType"),
            NamedTycon::Enum => (Origin::Host, SYSTEM_NAMESPACE, "Enum"),
            NamedTycon::Delegate => (Origin::Host, SYSTEM_NAMESPACE, "Delegate"),
        }
    }
}

/// Compiled name of the array constructor for `rank`: `[]`1`, `[,]`1`, ...
pub fn array_tycon_name(rank: usize) -> String {
    format!("[{}]`1", ",".repeat(rank.saturating_sub(1)))
}

/// Looks up type constructors on behalf of the environment.
pub(crate) struct TyconFinder<'a> {
    pub interner: &'a StringInterner,
    pub resolver: &'a dyn UnitResolver,
    pub local: &'a Arc<CompilationUnit>,
    pub core: &'a UnitRef,
    pub compiling_std_lib: bool,
}

impl TyconFinder<'_> {
    /// A host-runtime type, located through the resolver.
    ///
    /// Unresolvable types yield a reference backed by a deferred sentinel.
    pub fn sys(&self, namespace: &str, name: &str) -> TyconRef {
        let path = self.interner.intern_path(namespace);
        let name = self.interner.intern(name);
        if self.compiling_std_lib {
            return TyconRef::in_unit(self.local, path, name);
        }
        let unit = resolve_or_deferred(self.resolver, self.interner, &path, name, false);
        TyconRef::non_local(unit, path, name)
    }

    /// A standard-library type, addressed in the standard-library unit.
    ///
    /// Without a loaded standard library each reference gets its own
    /// sentinel, so the failure names the type that was asked for.
    pub fn core(&self, namespace: &str, name: &str) -> TyconRef {
        let path = self.interner.intern_path(namespace);
        let name = self.interner.intern(name);
        if self.compiling_std_lib {
            return TyconRef::in_unit(self.local, path, name);
        }
        let unit = if self.core.is_deferred() {
            let diagnostic = format!("{} not found", path.qualify(name, self.interner));
            UnitRef::deferred(path.clone(), name, diagnostic)
        } else {
            self.core.clone()
        };
        TyconRef::non_local(unit, path, name)
    }

    fn find(&self, origin: Origin, namespace: &str, name: &str) -> TyconRef {
        match origin {
            Origin::Host => self.sys(namespace, name),
            Origin::Core => self.core(namespace, name),
        }
    }
}

/// Every well-known type constructor, looked up once.
#[derive(Clone, Debug)]
pub struct WellKnownTycons {
    /// Language-level primitive constructors, indexed by `PrimitiveKind`.
    core_prims: Box<[TyconRef]>,
    /// Host-runtime counterparts of the primitives.
    sys_prims: Box<[Option<TyconRef>]>,
    named: Box<[TyconRef]>,
    /// `arrays[r - 1]` is the rank `r` constructor.
    arrays: Box<[TyconRef]>,
    pub tuples: TupleTycons,
}

impl WellKnownTycons {
    pub(crate) fn new(finder: &TyconFinder<'_>) -> Self {
        let sys_prims: Box<[Option<TyconRef>]> = PrimitiveKind::ALL
            .iter()
            .map(|kind| kind.host_name().map(|name| finder.sys(SYSTEM_NAMESPACE, name)))
            .collect();
        let core_prims = PrimitiveKind::ALL
            .iter()
            .map(|&kind| match (kind.core_name(), &sys_prims[kind.index()]) {
                (None, Some(host)) => host.clone(),
                (name, _) => finder.core(CORE_NAMESPACE, name.unwrap_or("Unit")),
            })
            .collect();
        let named = NamedTycon::ALL
            .iter()
            .map(|tycon| {
                let (origin, namespace, name) = tycon.location();
                finder.find(origin, namespace, name)
            })
            .collect();
        let arrays = (1..=MAX_ARRAY_RANK)
            .map(|rank| finder.core(CORE_NAMESPACE, &array_tycon_name(rank)))
            .collect();
        let tuples = TupleTycons::new(
            std::array::from_fn(|i| finder.sys(SYSTEM_NAMESPACE, &format!("Tuple`{}", i + 1))),
            std::array::from_fn(|i| {
                finder.sys(SYSTEM_NAMESPACE, &format!("ValueTuple`{}", i + 1))
            }),
        );

        WellKnownTycons {
            core_prims,
            sys_prims,
            named,
            arrays,
            tuples,
        }
    }

    /// The language-level constructor for a primitive.
    #[inline]
    pub fn core_prim(&self, kind: PrimitiveKind) -> &TyconRef {
        &self.core_prims[kind.index()]
    }

    /// The host-runtime constructor for a primitive.
    #[inline]
    pub fn sys_prim(&self, kind: PrimitiveKind) -> Option<&TyconRef> {
        self.sys_prims[kind.index()].as_ref()
    }

    #[inline]
    pub fn get(&self, tycon: NamedTycon) -> &TyconRef {
        &self.named[tycon.index()]
    }

    /// The array constructor for `rank`.
    ///
    /// # Panics
    /// Panics when `rank` is outside `1..=32`.
    pub fn array(&self, rank: usize) -> &TyconRef {
        assert!(
            (1..=MAX_ARRAY_RANK).contains(&rank),
            "array rank {rank} is outside 1..={MAX_ARRAY_RANK}"
        );
        &self.arrays[rank - 1]
    }

    /// Rank of an array constructor.
    pub fn array_rank(&self, tcref: &TyconRef) -> Option<usize> {
        self.arrays.iter().position(|t| t == tcref).map(|i| i + 1)
    }
}
