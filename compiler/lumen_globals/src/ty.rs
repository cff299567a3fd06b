//! Canonical type representation.
//!
//! Types are immutable, reference-counted trees. Cloning a `Ty` is a pointer
//! copy; `Ty::ptr_eq` tells whether two handles are the very same node, which
//! is how precomputed primitive types are recognised cheaply.

mod construct;
mod fold;

use std::fmt;
use std::sync::Arc;

use lumen_ir::{Name, StringLookup};

use crate::tycon::TyconRef;

pub use fold::{super_fold_ty, TyFolder};

/// Whether a reference type admits `null`.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
pub enum Nullness {
    /// Not tracked.
    #[default]
    Ambivalent,
    WithoutNull,
    WithNull,
}

/// Reference (boxed) or struct (unboxed) tuple.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum TupInfo {
    Ref,
    Struct,
}

impl TupInfo {
    pub fn is_struct(self) -> bool {
        self == TupInfo::Struct
    }
}

/// A generic type parameter, identified by its position in the owner's list.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub struct TyParam {
    pub name: Name,
    pub index: u32,
}

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TyKind {
    /// A type constructor applied to arguments.
    App {
        tcref: TyconRef,
        args: Box<[Ty]>,
        nullness: Nullness,
    },
    Fun {
        domain: Ty,
        range: Ty,
        nullness: Nullness,
    },
    /// A source-level tuple. Always has at least two elements once decoded.
    Tuple { tup: TupInfo, elems: Box<[Ty]> },
    Var(TyParam),
}

/// Shared handle to a type node.
#[derive(Clone, Eq, PartialEq, Hash)]
pub struct Ty(Arc<TyKind>);

impl Ty {
    pub fn new(kind: TyKind) -> Self {
        Ty(Arc::new(kind))
    }

    pub fn app(tcref: TyconRef, args: impl Into<Box<[Ty]>>, nullness: Nullness) -> Self {
        Ty::new(TyKind::App {
            tcref,
            args: args.into(),
            nullness,
        })
    }

    pub fn fun(domain: Ty, range: Ty, nullness: Nullness) -> Self {
        Ty::new(TyKind::Fun {
            domain,
            range,
            nullness,
        })
    }

    pub fn tuple(tup: TupInfo, elems: impl Into<Box<[Ty]>>) -> Self {
        Ty::new(TyKind::Tuple {
            tup,
            elems: elems.into(),
        })
    }

    pub fn var(param: TyParam) -> Self {
        Ty::new(TyKind::Var(param))
    }

    #[inline]
    pub fn kind(&self) -> &TyKind {
        &self.0
    }

    /// True when both handles point at the same node.
    #[inline]
    pub fn ptr_eq(a: &Ty, b: &Ty) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Nullness of the outermost node. Tuples and variables are ambivalent.
    pub fn nullness(&self) -> Nullness {
        match self.kind() {
            TyKind::App { nullness, .. } | TyKind::Fun { nullness, .. } => *nullness,
            TyKind::Tuple { .. } | TyKind::Var(_) => Nullness::Ambivalent,
        }
    }

    /// Constructor and arguments of an application.
    pub fn as_app(&self) -> Option<(&TyconRef, &[Ty])> {
        match self.kind() {
            TyKind::App { tcref, args, .. } => Some((tcref, args)),
            _ => None,
        }
    }

    pub fn is_app_of(&self, tcref: &TyconRef) -> bool {
        self.as_app().is_some_and(|(t, _)| t == tcref)
    }

    pub fn tuple_elems(&self) -> Option<(TupInfo, &[Ty])> {
        match self.kind() {
            TyKind::Tuple { tup, elems } => Some((*tup, elems)),
            _ => None,
        }
    }

    /// Render for diagnostics, e.g. `Lumen.Core.List`1<System.Int32>`.
    pub fn display(&self, lookup: &impl StringLookup) -> String {
        let mut out = String::new();
        self.write_display(lookup, &mut out);
        out
    }

    fn write_display(&self, lookup: &impl StringLookup, out: &mut String) {
        match self.kind() {
            TyKind::App {
                tcref,
                args,
                nullness,
            } => {
                out.push_str(lookup.lookup(tcref.name()));
                if !args.is_empty() {
                    out.push('<');
                    write_list(args, ", ", lookup, out);
                    out.push('>');
                }
                if *nullness == Nullness::WithNull {
                    out.push_str(" | null");
                }
            }
            TyKind::Fun { domain, range, .. } => {
                let paren = matches!(domain.kind(), TyKind::Fun { .. });
                if paren {
                    out.push('(');
                }
                domain.write_display(lookup, out);
                if paren {
                    out.push(')');
                }
                out.push_str(" -> ");
                range.write_display(lookup, out);
            }
            TyKind::Tuple { tup, elems } => {
                if tup.is_struct() {
                    out.push_str("struct ");
                }
                out.push('(');
                write_list(elems, " * ", lookup, out);
                out.push(')');
            }
            TyKind::Var(param) => {
                out.push('\'');
                out.push_str(lookup.lookup(param.name));
            }
        }
    }
}

fn write_list(tys: &[Ty], sep: &str, lookup: &impl StringLookup, out: &mut String) {
    for (i, ty) in tys.iter().enumerate() {
        if i > 0 {
            out.push_str(sep);
        }
        ty.write_display(lookup, out);
    }
}

impl fmt::Debug for Ty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(self.kind(), f)
    }
}
