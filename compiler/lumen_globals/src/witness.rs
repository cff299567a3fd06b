//! Built-in witnesses for trait constraints.
//!
//! When the constraint solver cannot discharge an operator or math
//! constraint statically (the operand types are only known at run time),
//! it asks for a witness: the dynamic-dispatch intrinsic implementing the
//! trait member, plus the type arguments to instantiate it with.

use lumen_ir::Name;

use crate::error::{GlobalsError, WitnessShape};
use crate::globals::Globals;
use crate::intrinsics::{IntrinsicId, IntrinsicValRef};
use crate::ty::Ty;

/// Operator spellings and the trait members they call.
const OPERATOR_TRAITS: &[(&str, &str)] = &[
    ("+", "op_Addition"),
    ("-", "op_Subtraction"),
    ("*", "op_Multiply"),
    ("/", "op_Division"),
    ("%", "op_Modulus"),
    ("&&&", "op_BitwiseAnd"),
    ("|||", "op_BitwiseOr"),
    ("^^^", "op_ExclusiveOr"),
    ("<<<", "op_LeftShift"),
    (">>>", "op_RightShift"),
    ("~~~", "op_LogicalNot"),
    ("~-", "op_UnaryNegation"),
    ("~+", "op_UnaryPlus"),
    ("=", "op_Equality"),
    ("<>", "op_Inequality"),
    ("<", "op_LessThan"),
    (">", "op_GreaterThan"),
    ("<=", "op_LessThanOrEqual"),
    (">=", "op_GreaterThanOrEqual"),
    ("**", "Pow"),
];

/// Trait member name for a source operator, e.g. `"+"` to `"op_Addition"`.
pub fn operator_trait_name(op: &str) -> Option<&'static str> {
    OPERATOR_TRAITS
        .iter()
        .find(|(spelling, _)| *spelling == op)
        .map(|&(_, trait_name)| trait_name)
}

/// A trait constraint the solver wants a built-in witness for.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessRequest {
    pub trait_name: Name,
    pub operand_tys: Vec<Ty>,
    pub result_ty: Option<Ty>,
}

impl WitnessRequest {
    pub fn new(trait_name: Name, operand_tys: Vec<Ty>, result_ty: Option<Ty>) -> Self {
        WitnessRequest {
            trait_name,
            operand_tys,
            result_ty,
        }
    }

    pub fn shape(&self) -> WitnessShape {
        WitnessShape {
            operands: self.operand_tys.len(),
            has_result: self.result_ty.is_some(),
        }
    }
}

/// The intrinsic implementing a witness and its type arguments.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WitnessResolution<'g> {
    pub intrinsic: &'g IntrinsicValRef,
    pub type_args: Vec<Ty>,
}

/// How a trait member's operands map onto an intrinsic's type parameters.
#[derive(Copy, Clone, Debug)]
enum Family {
    /// `lhs -> rhs -> result`, instantiated `[lhs, rhs, result]`.
    Binary(IntrinsicId),
    /// `lhs -> rhs -> bool`, instantiated `[lhs, rhs]`.
    Relational(IntrinsicId),
    /// `operand -> result`, instantiated `[operand, result]`.
    Unary(IntrinsicId),
    /// A generic constant, instantiated `[result]`.
    Constant(IntrinsicId),
    /// `T -> T`, instantiated `[T]`.
    MathSame(IntrinsicId),
    /// `T -> U`, instantiated `[T, U]`.
    MathMapped(IntrinsicId),
    Atan2,
    Pow,
    Sign,
    GetItem,
    SetItem,
}

fn family(trait_name: &str) -> Option<Family> {
    use Family::{Binary, Constant, MathMapped, MathSame, Relational, Unary};
    use IntrinsicId as Id;

    Some(match trait_name {
        "op_Addition" => Binary(Id::AdditionDynamic),
        "op_Subtraction" => Binary(Id::SubtractionDynamic),
        "op_Multiply" => Binary(Id::MultiplyDynamic),
        "op_Division" => Binary(Id::DivisionDynamic),
        "op_Modulus" => Binary(Id::ModulusDynamic),
        "op_BitwiseAnd" => Binary(Id::BitwiseAndDynamic),
        "op_BitwiseOr" => Binary(Id::BitwiseOrDynamic),
        "op_ExclusiveOr" => Binary(Id::ExclusiveOrDynamic),
        "op_LeftShift" => Binary(Id::LeftShiftDynamic),
        "op_RightShift" => Binary(Id::RightShiftDynamic),
        "op_CheckedAddition" => Binary(Id::CheckedAdditionDynamic),
        "op_CheckedSubtraction" => Binary(Id::CheckedSubtractionDynamic),
        "op_CheckedMultiply" => Binary(Id::CheckedMultiplyDynamic),

        "op_Equality" => Relational(Id::EqualityDynamic),
        "op_Inequality" => Relational(Id::InequalityDynamic),
        "op_LessThan" => Relational(Id::LessThanDynamic),
        "op_GreaterThan" => Relational(Id::GreaterThanDynamic),
        "op_LessThanOrEqual" => Relational(Id::LessThanOrEqualDynamic),
        "op_GreaterThanOrEqual" => Relational(Id::GreaterThanOrEqualDynamic),

        "op_UnaryNegation" => Unary(Id::UnaryNegationDynamic),
        "op_CheckedUnaryNegation" => Unary(Id::CheckedUnaryNegationDynamic),
        "op_UnaryPlus" => Unary(Id::UnaryPlusDynamic),
        "op_LogicalNot" | "op_OnesComplement" => Unary(Id::LogicalNotDynamic),
        "op_Explicit" => Unary(Id::ExplicitDynamic),
        "op_CheckedExplicit" => Unary(Id::CheckedExplicitDynamic),
        "op_Implicit" => Unary(Id::ImplicitDynamic),

        "get_Zero" => Constant(Id::GenericZeroDynamic),
        "get_One" => Constant(Id::GenericOneDynamic),

        "Abs" => MathSame(Id::Abs),
        "Acos" => MathSame(Id::Acos),
        "Asin" => MathSame(Id::Asin),
        "Atan" => MathSame(Id::Atan),
        "Ceiling" => MathSame(Id::Ceiling),
        "Cos" => MathSame(Id::Cos),
        "Cosh" => MathSame(Id::Cosh),
        "Exp" => MathSame(Id::Exp),
        "Floor" => MathSame(Id::Floor),
        "Log" => MathSame(Id::Log),
        "Log10" => MathSame(Id::Log10),
        "Round" => MathSame(Id::Round),
        "Sin" => MathSame(Id::Sin),
        "Sinh" => MathSame(Id::Sinh),
        "Tan" => MathSame(Id::Tan),
        "Tanh" => MathSame(Id::Tanh),
        "Truncate" => MathSame(Id::Truncate),
        "Sqrt" => MathMapped(Id::Sqrt),
        "Atan2" => Family::Atan2,
        "Pow" => Family::Pow,
        "Sign" => Family::Sign,

        "get_Item" => Family::GetItem,
        "set_Item" => Family::SetItem,
        _ => return None,
    })
}

const GET_ARRAY: [IntrinsicId; 4] = [
    IntrinsicId::GetArray,
    IntrinsicId::GetArray2D,
    IntrinsicId::GetArray3D,
    IntrinsicId::GetArray4D,
];

const SET_ARRAY: [IntrinsicId; 4] = [
    IntrinsicId::SetArray,
    IntrinsicId::SetArray2D,
    IntrinsicId::SetArray3D,
    IntrinsicId::SetArray4D,
];

impl Globals {
    /// Find the built-in witness for a trait constraint.
    ///
    /// # Errors
    /// Returns `GlobalsError::UnsupportedWitness` when the trait member has
    /// no built-in implementation for the request's shape. This is an
    /// internal error: the solver only asks for members it knows are built in.
    /// A trait name this session's interner never produced is reported the
    /// same way.
    pub fn resolve_builtin(
        &self,
        req: &WitnessRequest,
    ) -> Result<WitnessResolution<'_>, GlobalsError> {
        let Some(trait_name) = self.interner().try_lookup(req.trait_name) else {
            return Err(GlobalsError::UnsupportedWitness {
                trait_name: format!("{:?}", req.trait_name),
                shape: req.shape(),
            });
        };
        let resolved = family(trait_name).and_then(|family| self.match_shape(family, req));
        match resolved {
            Some((id, type_args)) => {
                tracing::trace!(trait_name, intrinsic = ?id, "resolved built-in witness");
                Ok(WitnessResolution {
                    intrinsic: self.intrinsic(id),
                    type_args,
                })
            }
            None => Err(GlobalsError::UnsupportedWitness {
                trait_name: trait_name.to_owned(),
                shape: req.shape(),
            }),
        }
    }

    fn match_shape(&self, family: Family, req: &WitnessRequest) -> Option<(IntrinsicId, Vec<Ty>)> {
        let operands = req.operand_tys.as_slice();
        let result = req.result_ty.as_ref();
        let found = match (family, operands, result) {
            (Family::Binary(id), [lhs, rhs], Some(r)) => (id, vec![lhs.clone(), rhs.clone(), r.clone()]),
            (Family::Relational(id), [lhs, rhs], _) => (id, vec![lhs.clone(), rhs.clone()]),
            (Family::Unary(id), [operand], Some(r)) => (id, vec![operand.clone(), r.clone()]),
            (Family::Constant(id), [], Some(r)) => (id, vec![r.clone()]),
            (Family::MathSame(id), [operand], _) => (id, vec![operand.clone()]),
            (Family::MathMapped(id), [operand], Some(r)) => (id, vec![operand.clone(), r.clone()]),
            (Family::Atan2, [y, _x], Some(r)) => (IntrinsicId::Atan2, vec![y.clone(), r.clone()]),
            (Family::Pow, [base, exponent], _) => (IntrinsicId::Pow, vec![base.clone(), exponent.clone()]),
            (Family::Sign, [operand], _) => (IntrinsicId::Sign, vec![operand.clone()]),
            (Family::GetItem, [target, indices @ ..], Some(_)) => self.get_item(target, indices)?,
            (Family::SetItem, [target, rest @ ..], _) => self.set_item(target, rest)?,
            _ => return None,
        };
        Some(found)
    }

    fn get_item(&self, target: &Ty, indices: &[Ty]) -> Option<(IntrinsicId, Vec<Ty>)> {
        if self.is_string_ty(target) && indices.len() == 1 {
            return Some((IntrinsicId::GetString, Vec::new()));
        }
        let (rank, elem) = self.dest_array_ty(target)?;
        let id = *GET_ARRAY.get(rank.checked_sub(1)?)?;
        (indices.len() == rank).then(|| (id, vec![elem.clone()]))
    }

    fn set_item(&self, target: &Ty, rest: &[Ty]) -> Option<(IntrinsicId, Vec<Ty>)> {
        let (rank, elem) = self.dest_array_ty(target)?;
        let id = *SET_ARRAY.get(rank.checked_sub(1)?)?;
        // Indices followed by the stored value.
        (rest.len() == rank + 1).then(|| (id, vec![elem.clone()]))
    }
}

#[cfg(test)]
mod tests;
