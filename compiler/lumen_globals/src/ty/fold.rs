//! Bottom-up type rewriting.

use super::{Ty, TyKind};

/// Rewrites a type tree.
///
/// Override `fold_ty` to intercept nodes and call `super_fold_ty` to recurse.
/// Unchanged subtrees keep their identity, so a fold that rewrites nothing
/// returns the input handle.
pub trait TyFolder {
    fn fold_ty(&mut self, ty: &Ty) -> Ty {
        super_fold_ty(self, ty)
    }
}

/// Fold every child of `ty`, rebuilding the node only if a child changed.
pub fn super_fold_ty<F: TyFolder + ?Sized>(folder: &mut F, ty: &Ty) -> Ty {
    match ty.kind() {
        TyKind::App {
            tcref,
            args,
            nullness,
        } => match fold_slice(folder, args) {
            Some(args) => Ty::app(tcref.clone(), args, *nullness),
            None => ty.clone(),
        },
        TyKind::Fun {
            domain,
            range,
            nullness,
        } => {
            let new_domain = folder.fold_ty(domain);
            let new_range = folder.fold_ty(range);
            if Ty::ptr_eq(&new_domain, domain) && Ty::ptr_eq(&new_range, range) {
                ty.clone()
            } else {
                Ty::fun(new_domain, new_range, *nullness)
            }
        }
        TyKind::Tuple { tup, elems } => match fold_slice(folder, elems) {
            Some(elems) => Ty::tuple(*tup, elems),
            None => ty.clone(),
        },
        TyKind::Var(_) => ty.clone(),
    }
}

/// `None` when every element folded to itself.
fn fold_slice<F: TyFolder + ?Sized>(folder: &mut F, tys: &[Ty]) -> Option<Vec<Ty>> {
    let folded: Vec<Ty> = tys.iter().map(|ty| folder.fold_ty(ty)).collect();
    let changed = folded
        .iter()
        .zip(tys)
        .any(|(new, old)| !Ty::ptr_eq(new, old));
    changed.then_some(folded)
}
