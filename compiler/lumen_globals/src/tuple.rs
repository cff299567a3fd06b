//! Tuple arity encoding.
//!
//! The host runtime only has nominal tuple types of arity 1 through 8. Wider
//! tuples are stored as an 8-ary nominal tuple whose eighth slot holds the
//! remaining elements, nested recursively. Encoding turns a source-level
//! tuple into that nominal form; decoding reverses it.
//!
//! `(a, b, c, d, e, f, g, h, i)` encodes as
//! `Tuple8<a, b, c, d, e, f, g, Tuple2<h, i>>`, and a single leftover
//! element goes into a `Tuple1`.

use crate::tycon::TyconRef;
use crate::ty::{Nullness, TupInfo, Ty, TyKind};

/// Widest nominal tuple.
pub const MAX_TUPLE: usize = 8;

/// Elements stored directly in an 8-ary tuple before the nesting slot.
pub const GOOD_TUPLE_FIELDS: usize = MAX_TUPLE - 1;

/// Nominal tuple constructors of arity 1 through 8, for both structness kinds.
#[derive(Clone, Debug)]
pub struct TupleTycons {
    refs: [TyconRef; MAX_TUPLE],
    structs: [TyconRef; MAX_TUPLE],
}

impl TupleTycons {
    /// `refs[i]` and `structs[i]` must be the arity `i + 1` constructors.
    pub fn new(refs: [TyconRef; MAX_TUPLE], structs: [TyconRef; MAX_TUPLE]) -> Self {
        TupleTycons { refs, structs }
    }

    /// The nominal constructor for `arity`.
    ///
    /// # Panics
    /// Panics when `arity` is outside `1..=8`.
    pub fn tycon(&self, tup: TupInfo, arity: usize) -> &TyconRef {
        assert!(
            (1..=MAX_TUPLE).contains(&arity),
            "no nominal tuple of arity {arity}"
        );
        match tup {
            TupInfo::Ref => &self.refs[arity - 1],
            TupInfo::Struct => &self.structs[arity - 1],
        }
    }

    /// Structness and arity of a nominal tuple constructor.
    pub fn classify(&self, tcref: &TyconRef) -> Option<(TupInfo, usize)> {
        if let Some(i) = self.refs.iter().position(|t| t == tcref) {
            return Some((TupInfo::Ref, i + 1));
        }
        self.structs
            .iter()
            .position(|t| t == tcref)
            .map(|i| (TupInfo::Struct, i + 1))
    }

    pub fn is_tuple_tycon(&self, tcref: &TyconRef) -> bool {
        self.classify(tcref).is_some()
    }

    /// Encode a source tuple's elements as a nominal tuple type.
    ///
    /// # Panics
    /// Panics on an empty element list.
    pub fn encode(&self, tup: TupInfo, elems: &[Ty]) -> Ty {
        let n = elems.len();
        assert!(n > 0, "cannot encode an empty tuple");
        if n < MAX_TUPLE {
            return Ty::app(self.tycon(tup, n).clone(), elems, Nullness::WithoutNull);
        }
        let (head, rest) = elems.split_at(GOOD_TUPLE_FIELDS);
        let mut args = Vec::with_capacity(MAX_TUPLE);
        args.extend_from_slice(head);
        args.push(self.encode(tup, rest));
        Ty::app(self.tycon(tup, MAX_TUPLE).clone(), args, Nullness::WithoutNull)
    }

    /// Decode the arguments of a nominal tuple into a source tuple.
    ///
    /// Returns `None` for fewer than two arguments: a one-element nominal
    /// tuple has no source form. The eighth argument of an 8-ary tuple is
    /// spliced back in when it is a same-structness nominal or source tuple;
    /// anything else there is kept as an ordinary eighth element.
    pub fn decode(&self, tup: TupInfo, args: &[Ty]) -> Option<Ty> {
        match args.len() {
            0 | 1 => None,
            MAX_TUPLE => {
                let (head, nested) = args.split_at(GOOD_TUPLE_FIELDS);
                let elems = match self.unnest(tup, &nested[0]) {
                    Some(rest) => {
                        let mut elems = head.to_vec();
                        elems.extend(rest);
                        elems
                    }
                    None => args.to_vec(),
                };
                Some(Ty::tuple(tup, elems))
            }
            _ => Some(Ty::tuple(tup, args)),
        }
    }

    /// The elements held in an eighth slot, if it holds a continuation.
    fn unnest(&self, tup: TupInfo, slot: &Ty) -> Option<Vec<Ty>> {
        match slot.kind() {
            TyKind::App { tcref, args, .. } => match self.classify(tcref)? {
                (kind, _) if kind != tup => None,
                (_, 1) => Some(args.to_vec()),
                (_, _) => {
                    let decoded = self.decode(tup, args)?;
                    decoded.tuple_elems().map(|(_, elems)| elems.to_vec())
                }
            },
            TyKind::Tuple { tup: kind, elems } if *kind == tup => Some(elems.to_vec()),
            _ => None,
        }
    }

    /// Decode every nominal tuple in `ty`, innermost first.
    ///
    /// One-element nominal tuples stay nominal.
    pub fn decode_deep(&self, ty: &Ty) -> Ty {
        match ty.kind() {
            TyKind::App {
                tcref,
                args,
                nullness,
            } => {
                let args: Vec<Ty> = args.iter().map(|a| self.decode_deep(a)).collect();
                if let Some((tup, _)) = self.classify(tcref) {
                    if let Some(decoded) = self.decode(tup, &args) {
                        return decoded;
                    }
                }
                Ty::app(tcref.clone(), args, *nullness)
            }
            TyKind::Fun {
                domain,
                range,
                nullness,
            } => Ty::fun(self.decode_deep(domain), self.decode_deep(range), *nullness),
            TyKind::Tuple { tup, elems } => {
                let elems: Vec<Ty> = elems.iter().map(|e| self.decode_deep(e)).collect();
                Ty::tuple(*tup, elems)
            }
            TyKind::Var(_) => ty.clone(),
        }
    }
}
