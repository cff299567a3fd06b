//! Nominal function and tuple constructors back to structural types.

use rustc_hash::FxHashMap;

use crate::config::LangFeature;
use crate::globals::Globals;
use crate::tuple::MAX_TUPLE;
use crate::tycon::TyconRef;
use crate::tycons::{NamedTycon, WellKnownTycons};
use crate::ty::{super_fold_ty, Nullness, TupInfo, Ty, TyFolder, TyKind};
use crate::unit::Stamp;

#[derive(Copy, Clone, Eq, PartialEq, Debug)]
enum Rule {
    Function,
    Tuple(TupInfo),
}

/// Decompile rules keyed by the stamp of the nominal constructor.
#[derive(Debug)]
pub(crate) struct DecompileMap {
    rules: FxHashMap<Stamp, Rule>,
}

impl DecompileMap {
    /// Constructors that cannot be dereferenced yet get no entry. Value
    /// tuples stay nominal unless `struct_tuples` is set.
    #[tracing::instrument(level = "debug", skip(tycons))]
    pub fn build(tycons: &WellKnownTycons, struct_tuples: bool) -> Self {
        let mut rules = FxHashMap::default();
        let mut add = |tcref: &TyconRef, rule: Rule| match tcref.stamp() {
            Some(stamp) => {
                rules.insert(stamp, rule);
            }
            None => tracing::trace!(?tcref, "skipping undereferenceable constructor"),
        };

        add(tycons.get(NamedTycon::Func), Rule::Function);
        let tups: &[TupInfo] = if struct_tuples {
            &[TupInfo::Ref, TupInfo::Struct]
        } else {
            &[TupInfo::Ref]
        };
        for &tup in tups {
            for arity in 1..=MAX_TUPLE {
                add(tycons.tuples.tycon(tup, arity), Rule::Tuple(tup));
            }
        }

        let map = DecompileMap { rules };
        tracing::debug!(entries = map.len(), "decompile map built");
        map
    }

    fn rule(&self, tcref: &TyconRef) -> Option<Rule> {
        self.rules.get(&tcref.stamp()?).copied()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }
}

impl Globals {
    pub(crate) fn decompile_map(&self) -> &DecompileMap {
        self.decompile_map
            .get_or_init(|| {
                DecompileMap::build(&self.tycons, self.config().supports(LangFeature::StructTuples))
            })
    }

    /// The structural form of `tcref<args>`, if it has one.
    ///
    /// `Function`2<a, b>` becomes `a -> b` carrying `nullness`; nominal
    /// tuples decode to source tuples. One-element tuples and constructors
    /// without a rule give `None`.
    pub fn decompile_tycon(&self, tcref: &TyconRef, args: &[Ty], nullness: Nullness) -> Option<Ty> {
        match self.decompile_map().rule(tcref)? {
            Rule::Function => match args {
                [domain, range] => Some(Ty::fun(domain.clone(), range.clone(), nullness)),
                _ => None,
            },
            Rule::Tuple(tup) => self.tycons.tuples.decode(tup, args),
        }
    }

    /// Decompile every node of `ty`, innermost first.
    pub fn decompile_ty(&self, ty: &Ty) -> Ty {
        Decompiler { globals: self }.fold_ty(ty)
    }
}

struct Decompiler<'g> {
    globals: &'g Globals,
}

impl TyFolder for Decompiler<'_> {
    fn fold_ty(&mut self, ty: &Ty) -> Ty {
        let folded = super_fold_ty(self, ty);
        if let TyKind::App {
            tcref,
            args,
            nullness,
        } = folded.kind()
        {
            if let Some(decompiled) = self.globals.decompile_tycon(tcref, args, *nullness) {
                return decompiled;
            }
        }
        folded
    }
}
