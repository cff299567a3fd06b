//! Precomputed primitive types.
//!
//! Every primitive type handle is built once when the environment is
//! constructed. Code that wants `int` or `string` gets a clone of the same
//! node, so `Ty::ptr_eq` identifies primitives without a structural compare.

use crate::tycons::WellKnownTycons;
use crate::ty::{Nullness, Ty};

/// Primitive types the language names directly.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
pub enum PrimitiveKind {
    Int8,
    Int16,
    Int32,
    Int64,
    UInt8,
    UInt16,
    UInt32,
    UInt64,
    NativeInt,
    UNativeInt,
    Float32,
    Float,
    Decimal,
    Bool,
    Char,
    String,
    Obj,
    Exn,
    Unit,
    SystemType,
}

impl PrimitiveKind {
    pub const ALL: [PrimitiveKind; 20] = [
        PrimitiveKind::Int8,
        PrimitiveKind::Int16,
        PrimitiveKind::Int32,
        PrimitiveKind::Int64,
        PrimitiveKind::UInt8,
        PrimitiveKind::UInt16,
        PrimitiveKind::UInt32,
        PrimitiveKind::UInt64,
        PrimitiveKind::NativeInt,
        PrimitiveKind::UNativeInt,
        PrimitiveKind::Float32,
        PrimitiveKind::Float,
        PrimitiveKind::Decimal,
        PrimitiveKind::Bool,
        PrimitiveKind::Char,
        PrimitiveKind::String,
        PrimitiveKind::Obj,
        PrimitiveKind::Exn,
        PrimitiveKind::Unit,
        PrimitiveKind::SystemType,
    ];

    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Name of the standard-library abbreviation, if the language has one.
    pub const fn core_name(self) -> Option<&'static str> {
        Some(match self {
            PrimitiveKind::Int8 => "sbyte",
            PrimitiveKind::Int16 => "int16",
            PrimitiveKind::Int32 => "int",
            PrimitiveKind::Int64 => "int64",
            PrimitiveKind::UInt8 => "byte",
            PrimitiveKind::UInt16 => "uint16",
            PrimitiveKind::UInt32 => "uint32",
            PrimitiveKind::UInt64 => "uint64",
            PrimitiveKind::NativeInt => "nativeint",
            PrimitiveKind::UNativeInt => "unativeint",
            PrimitiveKind::Float32 => "float32",
            PrimitiveKind::Float => "float",
            PrimitiveKind::Decimal => "decimal",
            PrimitiveKind::Bool => "bool",
            PrimitiveKind::Char => "char",
            PrimitiveKind::String => "string",
            PrimitiveKind::Obj => "obj",
            PrimitiveKind::Exn => "exn",
            PrimitiveKind::Unit => "Unit",
            PrimitiveKind::SystemType => return None,
        })
    }

    /// Name of the host-runtime type in `System`, if there is one.
    pub const fn host_name(self) -> Option<&'static str> {
        Some(match self {
            PrimitiveKind::Int8 => "SByte",
            PrimitiveKind::Int16 => "Int16",
            PrimitiveKind::Int32 => "Int32",
            PrimitiveKind::Int64 => "Int64",
            PrimitiveKind::UInt8 => "Byte",
            PrimitiveKind::UInt16 => "UInt16",
            PrimitiveKind::UInt32 => "UInt32",
            PrimitiveKind::UInt64 => "UInt64",
            PrimitiveKind::NativeInt => "IntPtr",
            PrimitiveKind::UNativeInt => "UIntPtr",
            PrimitiveKind::Float32 => "Single",
            PrimitiveKind::Float => "Double",
            PrimitiveKind::Decimal => "Decimal",
            PrimitiveKind::Bool => "Boolean",
            PrimitiveKind::Char => "Char",
            PrimitiveKind::String => "String",
            PrimitiveKind::Obj => "Object",
            PrimitiveKind::Exn => "Exception",
            PrimitiveKind::SystemType => "Type",
            PrimitiveKind::Unit => return None,
        })
    }

    /// Reference types carry nullness variants.
    pub const fn is_nullable_reference(self) -> bool {
        matches!(self, PrimitiveKind::String | PrimitiveKind::Obj)
    }
}

/// One primitive's handles: the ambivalent base plus the two nullness variants.
#[derive(Clone, Debug)]
struct Variants {
    ambivalent: Ty,
    without_null: Ty,
    with_null: Ty,
}

/// The precomputed primitive type table.
#[derive(Clone, Debug)]
pub struct PrimitiveTypes {
    variants: Box<[Variants]>,
    null_tracking: bool,
}

impl PrimitiveTypes {
    /// Build every primitive once.
    ///
    /// Without null tracking the three variants of `string` and `obj` are one handle.
    pub fn new(tycons: &WellKnownTycons, null_tracking: bool) -> Self {
        let variants = PrimitiveKind::ALL
            .iter()
            .map(|&kind| {
                let tcref = tycons.core_prim(kind);
                let ambivalent = Ty::app(tcref.clone(), Vec::new(), Nullness::Ambivalent);
                if null_tracking && kind.is_nullable_reference() {
                    Variants {
                        without_null: Ty::app(tcref.clone(), Vec::new(), Nullness::WithoutNull),
                        with_null: Ty::app(tcref.clone(), Vec::new(), Nullness::WithNull),
                        ambivalent,
                    }
                } else {
                    Variants {
                        without_null: ambivalent.clone(),
                        with_null: ambivalent.clone(),
                        ambivalent,
                    }
                }
            })
            .collect();
        PrimitiveTypes {
            variants,
            null_tracking,
        }
    }

    #[inline]
    pub fn get(&self, kind: PrimitiveKind) -> &Ty {
        &self.variants[kind.index()].ambivalent
    }

    /// The primitive with the requested nullness.
    ///
    /// `string` and `obj` return their shared variant handles. Value types
    /// return the shared handle for ambivalent nullness and a fresh node
    /// otherwise.
    pub fn with_nullness(&self, kind: PrimitiveKind, nullness: Nullness) -> Ty {
        let variants = &self.variants[kind.index()];
        match nullness {
            Nullness::Ambivalent => variants.ambivalent.clone(),
            _ if kind.is_nullable_reference() || !self.null_tracking => match nullness {
                Nullness::WithNull => variants.with_null.clone(),
                _ => variants.without_null.clone(),
            },
            _ => match variants.ambivalent.as_app() {
                Some((tcref, _)) => Ty::app(tcref.clone(), Vec::new(), nullness),
                None => variants.ambivalent.clone(),
            },
        }
    }

    /// The primitive whose precomputed handle is exactly `ty`.
    pub fn kind_of(&self, ty: &Ty) -> Option<PrimitiveKind> {
        PrimitiveKind::ALL.iter().copied().find(|&kind| {
            let v = &self.variants[kind.index()];
            Ty::ptr_eq(ty, &v.ambivalent) || Ty::ptr_eq(ty, &v.without_null) || Ty::ptr_eq(ty, &v.with_null)
        })
    }
}
