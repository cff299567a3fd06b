//! Host-runtime primitives to language abbreviations.

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use lumen_ir::Name;

use crate::globals::Globals;
use crate::prims::PrimitiveKind;
use crate::tycon::TyconRef;
use crate::tycons::WellKnownTycons;
use crate::ty::{super_fold_ty, Nullness, Ty, TyFolder, TyKind};
use crate::unit::Stamp;

/// How host primitives are recognised.
///
/// While compiling the standard library the host types live in the local
/// unit and gain definitions only as checking proceeds, so they are indexed
/// by name and confirmed with a reference comparison on every lookup.
/// Everywhere else they are already defined and indexed by stamp.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ImproveStrategy {
    ByName,
    ByStamp,
}

#[derive(Debug)]
pub(crate) enum ImproveMap {
    ByName(FxHashMap<Name, SmallVec<[(TyconRef, PrimitiveKind); 1]>>),
    ByStamp(FxHashMap<Stamp, PrimitiveKind>),
}

impl ImproveMap {
    #[tracing::instrument(level = "debug", skip(tycons))]
    pub fn build(strategy: ImproveStrategy, tycons: &WellKnownTycons) -> Self {
        let entries = PrimitiveKind::ALL.iter().filter_map(|&kind| {
            let host = tycons.sys_prim(kind)?;
            (host != tycons.core_prim(kind)).then(|| (host.clone(), kind))
        });

        let map = match strategy {
            ImproveStrategy::ByName => {
                let mut by_name: FxHashMap<Name, SmallVec<[(TyconRef, PrimitiveKind); 1]>> =
                    FxHashMap::default();
                for (tcref, kind) in entries {
                    by_name.entry(tcref.name()).or_default().push((tcref, kind));
                }
                ImproveMap::ByName(by_name)
            }
            ImproveStrategy::ByStamp => ImproveMap::ByStamp(
                entries
                    .filter_map(|(tcref, kind)| Some((tcref.stamp()?, kind)))
                    .collect(),
            ),
        };
        tracing::debug!(entries = map.len(), "improve map built");
        map
    }

    fn lookup(&self, tcref: &TyconRef) -> Option<PrimitiveKind> {
        match self {
            ImproveMap::ByName(by_name) => by_name
                .get(&tcref.name())?
                .iter()
                .find(|(candidate, _)| candidate == tcref)
                .map(|&(_, kind)| kind),
            ImproveMap::ByStamp(by_stamp) => by_stamp.get(&tcref.stamp()?).copied(),
        }
    }

    pub fn len(&self) -> usize {
        match self {
            ImproveMap::ByName(by_name) => by_name.values().map(SmallVec::len).sum(),
            ImproveMap::ByStamp(by_stamp) => by_stamp.len(),
        }
    }
}

impl Globals {
    pub(crate) fn improve_map(&self) -> &ImproveMap {
        self.improve_map
            .get_or_init(|| ImproveMap::build(self.improve_strategy(), &self.tycons))
    }

    /// The language primitive spelled `tcref` by the host, with `nullness`.
    ///
    /// Only applies to constructors without arguments.
    pub fn improve_tycon(&self, tcref: &TyconRef, args: &[Ty], nullness: Nullness) -> Option<Ty> {
        if !args.is_empty() {
            return None;
        }
        let kind = self.improve_map().lookup(tcref)?;
        Some(self.prims.with_nullness(kind, nullness))
    }

    /// Improve every node of `ty`, innermost first.
    pub fn improve_ty(&self, ty: &Ty) -> Ty {
        Improver { globals: self }.fold_ty(ty)
    }
}

struct Improver<'g> {
    globals: &'g Globals,
}

impl TyFolder for Improver<'_> {
    fn fold_ty(&mut self, ty: &Ty) -> Ty {
        let folded = super_fold_ty(self, ty);
        if let TyKind::App {
            tcref,
            args,
            nullness,
        } = folded.kind()
        {
            if let Some(improved) = self.globals.improve_tycon(tcref, args, *nullness) {
                return improved;
            }
        }
        folded
    }
}
