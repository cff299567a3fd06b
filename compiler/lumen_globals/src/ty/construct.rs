//! Builders for types over the well-known constructors.

use crate::globals::Globals;
use crate::prims::PrimitiveKind;
use crate::tycon::TyconRef;
use crate::tycons::NamedTycon;

use super::{Nullness, TupInfo, Ty};

impl Globals {
    /// `tcref<args>` with ambivalent nullness.
    pub fn mk_app_ty(&self, tcref: &TyconRef, args: impl Into<Box<[Ty]>>) -> Ty {
        Ty::app(tcref.clone(), args, Nullness::Ambivalent)
    }

    fn mk_named_ty(&self, tycon: NamedTycon, args: impl Into<Box<[Ty]>>) -> Ty {
        self.mk_app_ty(self.tycon(tycon), args)
    }

    /// `domain -> range`. Function values are never null.
    pub fn mk_fun_ty(&self, domain: Ty, range: Ty) -> Ty {
        Ty::fun(domain, range, Nullness::WithoutNull)
    }

    /// `d1 -> d2 -> ... -> range`.
    pub fn mk_iterated_fun_ty<I>(&self, domains: I, range: Ty) -> Ty
    where
        I: IntoIterator<Item = Ty>,
        I::IntoIter: DoubleEndedIterator,
    {
        domains
            .into_iter()
            .rev()
            .fold(range, |range, domain| self.mk_fun_ty(domain, range))
    }

    /// Array of `elem` with the given rank.
    ///
    /// # Panics
    /// Panics when `rank` is outside `1..=32`.
    pub fn mk_array_ty(&self, rank: usize, elem: Ty) -> Ty {
        Ty::app(self.tycons.array(rank).clone(), vec![elem], Nullness::WithoutNull)
    }

    pub fn mk_option_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::Option, vec![ty])
    }

    pub fn mk_value_option_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::ValueOption, vec![ty])
    }

    pub fn mk_list_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::List, vec![ty])
    }

    pub fn mk_seq_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::Seq, vec![ty])
    }

    pub fn mk_lazy_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::Lazy, vec![ty])
    }

    pub fn mk_ref_cell_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::RefCell, vec![ty])
    }

    pub fn mk_quoted_expr_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::Expr, vec![ty])
    }

    pub fn mk_raw_expr_ty(&self) -> Ty {
        self.mk_named_ty(NamedTycon::RawExpr, Vec::new())
    }

    pub fn mk_byref_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::ByRef, vec![ty])
    }

    pub fn mk_nativeptr_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::NativePtr, vec![ty])
    }

    pub fn mk_nullable_ty(&self, ty: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::Nullable, vec![ty])
    }

    /// `PrintfFormat<printer, state, residue, result, tuple>`.
    pub fn mk_format_ty(&self, printer: Ty, state: Ty, residue: Ty, result: Ty, tuple: Ty) -> Ty {
        self.mk_named_ty(NamedTycon::Format, vec![printer, state, residue, result, tuple])
    }

    /// Source tuple. A single element is just that element.
    pub fn mk_tuple_ty(&self, tup: TupInfo, elems: Vec<Ty>) -> Ty {
        match <[Ty; 1]>::try_from(elems) {
            Ok([single]) => single,
            Err(elems) => Ty::tuple(tup, elems),
        }
    }

    pub fn mk_ref_tuple_ty(&self, elems: Vec<Ty>) -> Ty {
        self.mk_tuple_ty(TupInfo::Ref, elems)
    }

    pub fn mk_struct_tuple_ty(&self, elems: Vec<Ty>) -> Ty {
        self.mk_tuple_ty(TupInfo::Struct, elems)
    }

    /// The nominal host tuple for `elems`, nested past seven fields.
    ///
    /// # Panics
    /// Panics on an empty element list.
    pub fn mk_compiled_tuple_ty(&self, tup: TupInfo, elems: &[Ty]) -> Ty {
        self.tycons.tuples.encode(tup, elems)
    }

    /// Inverse of `mk_compiled_tuple_ty` on a nominal tuple's arguments.
    pub fn decode_tuple_ty(&self, tup: TupInfo, args: &[Ty]) -> Option<Ty> {
        self.tycons.tuples.decode(tup, args)
    }

    /// Element type and rank, if `ty` is an array.
    pub fn dest_array_ty<'a>(&self, ty: &'a Ty) -> Option<(usize, &'a Ty)> {
        let (tcref, args) = ty.as_app()?;
        let rank = self.tycons.array_rank(tcref)?;
        match args {
            [elem] => Some((rank, elem)),
            _ => None,
        }
    }

    pub fn is_string_ty(&self, ty: &Ty) -> bool {
        ty.is_app_of(self.tycons.core_prim(PrimitiveKind::String))
    }

    pub fn is_obj_ty(&self, ty: &Ty) -> bool {
        ty.is_app_of(self.tycons.core_prim(PrimitiveKind::Obj))
    }

    pub fn is_unit_ty(&self, ty: &Ty) -> bool {
        ty.is_app_of(self.tycons.core_prim(PrimitiveKind::Unit))
    }
}

#[cfg(test)]
mod tests;
