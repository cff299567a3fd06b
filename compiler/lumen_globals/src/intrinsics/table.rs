//! The intrinsic symbol table.
//!
//! One row per intrinsic, in `IntrinsicId` order. The environment
//! instantiates every row when it is built and registers the known ones
//! under their linkage key.

use super::template::{Sig, TyTemplate};
use crate::prims::PrimitiveKind;
use crate::tycons::NamedTycon;

macro_rules! intrinsic_ids {
    ($($variant:ident => $field:literal,)*) => {
        /// Stable identifier of an intrinsic symbol.
        #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, PartialOrd, Ord)]
        pub enum IntrinsicId {
            $($variant,)*
        }

        impl IntrinsicId {
            /// Every intrinsic, in table order.
            pub const ALL: &'static [IntrinsicId] = &[$(IntrinsicId::$variant,)*];

            /// Name of the environment accessor for this intrinsic.
            pub const fn field_name(self) -> &'static str {
                match self {
                    $(IntrinsicId::$variant => $field,)*
                }
            }

            #[inline]
            pub const fn index(self) -> usize {
                self as usize
            }
        }
    };
}

intrinsic_ids! {
    UncheckedAddition => "unchecked_addition",
    UncheckedSubtraction => "unchecked_subtraction",
    UncheckedMultiply => "unchecked_multiply",
    UncheckedDivision => "unchecked_division",
    UncheckedModulus => "unchecked_modulus",
    UncheckedUnaryNegation => "unchecked_unary_negation",
    BitwiseAnd => "bitwise_and",
    BitwiseOr => "bitwise_or",
    BitwiseXor => "bitwise_xor",
    BitwiseNot => "bitwise_not",
    BitwiseShiftLeft => "bitwise_shift_left",
    BitwiseShiftRight => "bitwise_shift_right",
    Equals => "equals_operator",
    NotEquals => "not_equals_operator",
    LessThan => "less_than_operator",
    GreaterThan => "greater_than_operator",
    LessThanOrEquals => "less_than_or_equals_operator",
    GreaterThanOrEquals => "greater_than_or_equals_operator",
    Compare => "compare_operator",
    Hash => "hash_operator",
    Not => "not",
    Raise => "raise",
    Reraise => "reraise",
    Failwith => "failwith",
    InvalidArg => "invalid_arg",
    NullArg => "null_arg",
    Ignore => "ignore",
    Id => "id",
    Fst => "fst",
    Snd => "snd",
    Ref => "ref",
    Deref => "deref",
    Assign => "assign",
    Box => "box",
    Unbox => "unbox",
    IsNull => "is_null",
    TypeOf => "typeof",
    TypeDefOf => "typedefof",
    SizeOf => "sizeof",
    NameOf => "nameof",
    Range => "range_op",
    RangeStep => "range_step_op",
    Lock => "lock",
    Using => "using",
    ToInt32 => "int32_operator",
    ToInt64 => "int64_operator",
    ToDouble => "float_operator",
    ToChar => "char_operator",
    ToString => "string_operator",
    ToByte => "byte_operator",
    Abs => "abs",
    Acos => "acos",
    Asin => "asin",
    Atan => "atan",
    Atan2 => "atan2",
    Ceiling => "ceil",
    Cos => "cos",
    Cosh => "cosh",
    Exp => "exp",
    Floor => "floor",
    Log => "log",
    Log10 => "log10",
    Pow => "pow",
    Round => "round",
    Sign => "sign",
    Sin => "sin",
    Sinh => "sinh",
    Sqrt => "sqrt",
    Tan => "tan",
    Tanh => "tanh",
    Truncate => "truncate",
    PipeRight => "pipe_right",
    PipeLeft => "pipe_left",
    ComposeRight => "compose_right",
    CheckedAddition => "checked_addition",
    CheckedSubtraction => "checked_subtraction",
    CheckedMultiply => "checked_multiply",
    CheckedUnaryNegation => "checked_unary_negation",
    CheckedToInt32 => "checked_int32_operator",
    BooleanAnd => "and_operator",
    BooleanOr => "or_operator",
    AddressOf => "address_of",
    GenericZero => "generic_zero",
    GenericOne => "generic_one",
    GenericEquality => "generic_equality",
    GenericEqualityEr => "generic_equality_er",
    GenericComparison => "generic_comparison",
    GenericHash => "generic_hash",
    PhysicalEquality => "physical_equality",
    PhysicalHash => "physical_hash",
    EnumOfValue => "enum_of_value",
    EnumToValue => "enum_to_value",
    GenericEqualityIntrinsic => "generic_equality_intrinsic",
    GenericEqualityErIntrinsic => "generic_equality_er_intrinsic",
    GenericEqualityWithComparerIntrinsic => "generic_equality_with_comparer_intrinsic",
    GenericComparisonIntrinsic => "generic_comparison_intrinsic",
    GenericComparisonWithComparerIntrinsic => "generic_comparison_with_comparer_intrinsic",
    GenericHashIntrinsic => "generic_hash_intrinsic",
    GenericHashWithComparerIntrinsic => "generic_hash_with_comparer_intrinsic",
    GenericLessThanIntrinsic => "generic_less_than_intrinsic",
    GenericGreaterThanIntrinsic => "generic_greater_than_intrinsic",
    GenericLessOrEqualIntrinsic => "generic_less_or_equal_intrinsic",
    GenericGreaterOrEqualIntrinsic => "generic_greater_or_equal_intrinsic",
    GetArray => "array_get",
    GetArray2D => "array2d_get",
    GetArray3D => "array3d_get",
    GetArray4D => "array4d_get",
    SetArray => "array_set",
    SetArray2D => "array2d_set",
    SetArray3D => "array3d_set",
    SetArray4D => "array4d_set",
    GetString => "string_get",
    UnboxGeneric => "unbox_generic",
    UnboxFast => "unbox_fast",
    TypeTestGeneric => "type_test_generic",
    TypeTestFast => "type_test_fast",
    CreateInstance => "create_instance",
    Dispose => "dispose",
    MakeDecimal => "make_decimal",
    AdditionDynamic => "addition_dynamic",
    SubtractionDynamic => "subtraction_dynamic",
    MultiplyDynamic => "multiply_dynamic",
    DivisionDynamic => "division_dynamic",
    ModulusDynamic => "modulus_dynamic",
    BitwiseAndDynamic => "bitwise_and_dynamic",
    BitwiseOrDynamic => "bitwise_or_dynamic",
    ExclusiveOrDynamic => "exclusive_or_dynamic",
    LeftShiftDynamic => "left_shift_dynamic",
    RightShiftDynamic => "right_shift_dynamic",
    CheckedAdditionDynamic => "checked_addition_dynamic",
    CheckedSubtractionDynamic => "checked_subtraction_dynamic",
    CheckedMultiplyDynamic => "checked_multiply_dynamic",
    UnaryNegationDynamic => "unary_negation_dynamic",
    CheckedUnaryNegationDynamic => "checked_unary_negation_dynamic",
    UnaryPlusDynamic => "unary_plus_dynamic",
    LogicalNotDynamic => "logical_not_dynamic",
    ExplicitDynamic => "explicit_dynamic",
    CheckedExplicitDynamic => "checked_explicit_dynamic",
    ImplicitDynamic => "implicit_dynamic",
    EqualityDynamic => "equality_dynamic",
    InequalityDynamic => "inequality_dynamic",
    LessThanDynamic => "less_than_dynamic",
    GreaterThanDynamic => "greater_than_dynamic",
    LessThanOrEqualDynamic => "less_than_or_equal_dynamic",
    GreaterThanOrEqualDynamic => "greater_than_or_equal_dynamic",
    GenericZeroDynamic => "generic_zero_dynamic",
    GenericOneDynamic => "generic_one_dynamic",
    RangeInt32 => "range_int32",
    RangeInt64 => "range_int64",
    RangeUInt64 => "range_uint64",
    RangeChar => "range_char",
    RangeGeneric => "range_generic",
    RangeStepGeneric => "range_step_generic",
    GetArraySlice => "array_get_slice",
    EnumerateWhile => "seq_while",
    EnumerateThenFinally => "seq_finally",
    EnumerateUsing => "seq_using",
    EnumerateTryWith => "seq_trywith",
    EnumerateFromFunctions => "seq_of_functions",
    SeqCollect => "seq_collect",
    SeqDelay => "seq_delay",
    SeqAppend => "seq_append",
    SeqSingleton => "seq_singleton",
    SeqEmpty => "seq_empty",
    SeqMap => "seq_map",
    SeqToList => "seq_to_list",
    SeqToArray => "seq_to_array",
    Sprintf => "sprintf",
    Printf => "printf",
    Printfn => "printfn",
    Failwithf => "failwithf",
    CreateSequence => "seq",
    Query => "query",
    Splice => "splice_expr",
    SpliceUntyped => "splice_raw_expr",
    NewFormat => "new_format",
    LiftValue => "lift_value",
    CastQuotation => "cast_quotation",
    LazyForce => "lazy_force",
    LazyCreate => "lazy_create",
    QueryRun => "query_run",
    QueryFor => "query_for",
    QuerySelect => "query_select",
    QueryYield => "query_yield",
    QueryZero => "query_zero",
    ArrayLength => "array_length",
    ArrayGet => "array_get_module",
    ArrayZeroCreate => "array_zero_create",
}

/// Enclosing module of an intrinsic.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Entity {
    Operators,
    Checked,
    IntrinsicOperators,
    LanguagePrimitives,
    HashCompare,
    IntrinsicFunctions,
    OperatorIntrinsics,
    RuntimeHelpers,
    SeqModule,
    ExtraTopLevelOperators,
    PrintfModule,
    Quotations,
    LazyExtensions,
    QueryRunExtensions,
    ArrayModule,
}

impl Entity {
    /// Namespace path and compiled module name.
    pub const fn location(self) -> (&'static str, &'static str) {
        match self {
            Entity::Operators => ("Lumen.Core", "Operators"),
            Entity::Checked => ("Lumen.Core.Operators", "Checked"),
            Entity::IntrinsicOperators => ("Lumen.Core.LanguagePrimitives", "IntrinsicOperators"),
            Entity::LanguagePrimitives => ("Lumen.Core", "LanguagePrimitives"),
            Entity::HashCompare => ("Lumen.Core.LanguagePrimitives", "HashCompare"),
            Entity::IntrinsicFunctions => ("Lumen.Core.LanguagePrimitives", "IntrinsicFunctions"),
            Entity::OperatorIntrinsics => ("Lumen.Core.Operators", "OperatorIntrinsics"),
            Entity::RuntimeHelpers => ("Lumen.Core.CompilerServices", "RuntimeHelpers"),
            Entity::SeqModule => ("Lumen.Core.Collections", "SeqModule"),
            Entity::ExtraTopLevelOperators => ("Lumen.Core", "ExtraTopLevelOperators"),
            Entity::PrintfModule => ("Lumen.Core", "PrintfModule"),
            Entity::Quotations => ("Lumen.Core.Quotations", "Expr"),
            Entity::LazyExtensions => ("Lumen.Core.Control", "LazyExtensions"),
            Entity::QueryRunExtensions => ("Lumen.Core.Linq", "QueryRunExtensions"),
            Entity::ArrayModule => ("Lumen.Core.Collections", "ArrayModule"),
        }
    }
}

/// Declarative description of one intrinsic.
#[derive(Copy, Clone, Debug)]
pub struct IntrinsicDef {
    pub id: IntrinsicId,
    pub entity: Entity,
    /// Name of the type the intrinsic is a member of, for members.
    pub member_parent: Option<&'static str>,
    pub logical_name: &'static str,
    pub compiled_name: &'static str,
    pub typars: &'static [&'static str],
    pub sig: Sig,
    /// Known intrinsics are registered for lookup by linkage key.
    pub known: bool,
}

impl IntrinsicDef {
    pub const fn new(
        id: IntrinsicId,
        entity: Entity,
        logical_name: &'static str,
        compiled_name: &'static str,
        typars: &'static [&'static str],
        sig: Sig,
    ) -> Self {
        IntrinsicDef {
            id,
            entity,
            member_parent: None,
            logical_name,
            compiled_name,
            typars,
            sig,
            known: true,
        }
    }

    #[must_use]
    pub const fn member_of(mut self, parent: &'static str) -> Self {
        self.member_parent = Some(parent);
        self
    }

    /// Built on demand rather than registered for lookup.
    #[must_use]
    pub const fn other(mut self) -> Self {
        self.known = false;
        self
    }

    pub const fn is_member(&self) -> bool {
        self.member_parent.is_some()
    }
}

// Type parameter lists.
const TP_T: &[&str] = &["T"];
const TP_TU: &[&str] = &["T", "U"];
const TP_TUV: &[&str] = &["T", "U", "V"];
const TP_BINARY: &[&str] = &["T1", "T2", "U"];
const TP_RELATION: &[&str] = &["T1", "T2"];
const TP_FORMAT: &[&str] = &["Printer", "State", "Residue", "Result", "Tuple"];

// Template shorthands.
const T: TyTemplate = TyTemplate::Var(0);
const U: TyTemplate = TyTemplate::Var(1);
const V: TyTemplate = TyTemplate::Var(2);
const W: TyTemplate = TyTemplate::Var(3);
const X: TyTemplate = TyTemplate::Var(4);
const INT: TyTemplate = TyTemplate::Prim(PrimitiveKind::Int32);
const INT64: TyTemplate = TyTemplate::Prim(PrimitiveKind::Int64);
const UINT64: TyTemplate = TyTemplate::Prim(PrimitiveKind::UInt64);
const BYTE: TyTemplate = TyTemplate::Prim(PrimitiveKind::UInt8);
const FLOAT: TyTemplate = TyTemplate::Prim(PrimitiveKind::Float);
const DECIMAL: TyTemplate = TyTemplate::Prim(PrimitiveKind::Decimal);
const BOOL: TyTemplate = TyTemplate::Prim(PrimitiveKind::Bool);
const CHAR: TyTemplate = TyTemplate::Prim(PrimitiveKind::Char);
const STRING: TyTemplate = TyTemplate::Prim(PrimitiveKind::String);
const OBJ: TyTemplate = TyTemplate::Prim(PrimitiveKind::Obj);
const EXN: TyTemplate = TyTemplate::Prim(PrimitiveKind::Exn);
const UNIT: TyTemplate = TyTemplate::Prim(PrimitiveKind::Unit);
const SYSTEM_TYPE: TyTemplate = TyTemplate::Prim(PrimitiveKind::SystemType);

const SEQ_T: TyTemplate = TyTemplate::App(NamedTycon::Seq, &[T]);
const SEQ_U: TyTemplate = TyTemplate::App(NamedTycon::Seq, &[U]);
const SEQ_V: TyTemplate = TyTemplate::App(NamedTycon::Seq, &[V]);
const REF_T: TyTemplate = TyTemplate::App(NamedTycon::RefCell, &[T]);
const ARR_T: TyTemplate = TyTemplate::Array(1, &T);
const ARR2_T: TyTemplate = TyTemplate::Array(2, &T);
const ARR3_T: TyTemplate = TyTemplate::Array(3, &T);
const ARR4_T: TyTemplate = TyTemplate::Array(4, &T);
const EXPR_T: TyTemplate = TyTemplate::App(NamedTycon::Expr, &[T]);
const RAW_EXPR: TyTemplate = TyTemplate::App(NamedTycon::RawExpr, &[]);
const LAZY_T: TyTemplate = TyTemplate::App(NamedTycon::Lazy, &[T]);
const QUERY_BUILDER: TyTemplate = TyTemplate::App(NamedTycon::QueryBuilder, &[]);
const SOURCE_TU: TyTemplate = TyTemplate::App(NamedTycon::QuerySource, &[T, U]);
const SOURCE_VU: TyTemplate = TyTemplate::App(NamedTycon::QuerySource, &[V, U]);
const OPTION_INT: TyTemplate = TyTemplate::App(NamedTycon::Option, &[INT]);
const EQ_COMPARER: TyTemplate = TyTemplate::App(NamedTycon::EqualityComparer, &[]);
const COMPARER: TyTemplate = TyTemplate::App(NamedTycon::Comparer, &[]);

// Shared signatures.
const BINARY: Sig = Sig::new(&[&[T], &[U]], V);
const HOMOGENEOUS_BINARY: Sig = Sig::new(&[&[T], &[T]], T);
const UNARY: Sig = Sig::new(&[&[T]], U);
const ENDO: Sig = Sig::new(&[&[T]], T);
const SHIFT: Sig = Sig::new(&[&[T], &[INT]], T);
const PREDICATE2: Sig = Sig::new(&[&[T], &[T]], BOOL);
const RELATION: Sig = Sig::new(&[&[T], &[U]], BOOL);
const ORDER: Sig = Sig::new(&[&[T], &[T]], INT);
const HASH: Sig = Sig::new(&[&[T]], INT);
const NULLARY: Sig = Sig::new(&[&[]], T);
const FAIL: Sig = Sig::new(&[&[STRING]], T);

const fn op(id: IntrinsicId, logical: &'static str, compiled: &'static str, typars: &'static [&'static str], sig: Sig) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::Operators, logical, compiled, typars, sig)
}

const fn math(id: IntrinsicId, logical: &'static str, compiled: &'static str) -> IntrinsicDef {
    op(id, logical, compiled, TP_T, ENDO)
}

const fn convert(id: IntrinsicId, logical: &'static str, compiled: &'static str, ret: TyTemplate) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::Operators, logical, compiled, TP_T, Sig { args: &[&[T]], ret })
}

const fn binary_dynamic(id: IntrinsicId, compiled: &'static str) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::LanguagePrimitives, compiled, compiled, TP_BINARY, BINARY).other()
}

const fn unary_dynamic(id: IntrinsicId, compiled: &'static str) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::LanguagePrimitives, compiled, compiled, TP_TU, UNARY).other()
}

const fn relational_dynamic(id: IntrinsicId, compiled: &'static str) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::LanguagePrimitives, compiled, compiled, TP_RELATION, RELATION).other()
}

const fn hash_compare(id: IntrinsicId, compiled: &'static str, typars: &'static [&'static str], sig: Sig) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::HashCompare, compiled, compiled, typars, sig)
}

const fn intrinsic_fn(id: IntrinsicId, compiled: &'static str, typars: &'static [&'static str], sig: Sig) -> IntrinsicDef {
    IntrinsicDef::new(id, Entity::IntrinsicFunctions, compiled, compiled, typars, sig)
}

/// Every intrinsic, indexed by `IntrinsicId`.
pub static INTRINSICS: &[IntrinsicDef] = &[
    // Operators
    op(IntrinsicId::UncheckedAddition, "op_Addition", "op_Addition", TP_BINARY, BINARY),
    op(IntrinsicId::UncheckedSubtraction, "op_Subtraction", "op_Subtraction", TP_BINARY, BINARY),
    op(IntrinsicId::UncheckedMultiply, "op_Multiply", "op_Multiply", TP_BINARY, BINARY),
    op(IntrinsicId::UncheckedDivision, "op_Division", "op_Division", TP_BINARY, BINARY),
    op(IntrinsicId::UncheckedModulus, "op_Modulus", "op_Modulus", TP_BINARY, BINARY),
    op(IntrinsicId::UncheckedUnaryNegation, "op_UnaryNegation", "op_UnaryNegation", TP_TU, UNARY),
    op(IntrinsicId::BitwiseAnd, "op_BitwiseAnd", "op_BitwiseAnd", TP_T, HOMOGENEOUS_BINARY),
    op(IntrinsicId::BitwiseOr, "op_BitwiseOr", "op_BitwiseOr", TP_T, HOMOGENEOUS_BINARY),
    op(IntrinsicId::BitwiseXor, "op_ExclusiveOr", "op_ExclusiveOr", TP_T, HOMOGENEOUS_BINARY),
    op(IntrinsicId::BitwiseNot, "op_LogicalNot", "op_LogicalNot", TP_T, ENDO),
    op(IntrinsicId::BitwiseShiftLeft, "op_LeftShift", "op_LeftShift", TP_T, SHIFT),
    op(IntrinsicId::BitwiseShiftRight, "op_RightShift", "op_RightShift", TP_T, SHIFT),
    op(IntrinsicId::Equals, "op_Equality", "op_Equality", TP_T, PREDICATE2),
    op(IntrinsicId::NotEquals, "op_Inequality", "op_Inequality", TP_T, PREDICATE2),
    op(IntrinsicId::LessThan, "op_LessThan", "op_LessThan", TP_T, PREDICATE2),
    op(IntrinsicId::GreaterThan, "op_GreaterThan", "op_GreaterThan", TP_T, PREDICATE2),
    op(IntrinsicId::LessThanOrEquals, "op_LessThanOrEqual", "op_LessThanOrEqual", TP_T, PREDICATE2),
    op(IntrinsicId::GreaterThanOrEquals, "op_GreaterThanOrEqual", "op_GreaterThanOrEqual", TP_T, PREDICATE2),
    op(IntrinsicId::Compare, "compare", "Compare", TP_T, ORDER),
    op(IntrinsicId::Hash, "hash", "Hash", TP_T, HASH),
    op(IntrinsicId::Not, "not", "Not", &[], Sig::new(&[&[BOOL]], BOOL)),
    op(IntrinsicId::Raise, "raise", "Raise", TP_T, Sig::new(&[&[EXN]], T)),
    op(IntrinsicId::Reraise, "reraise", "Reraise", TP_T, NULLARY),
    op(IntrinsicId::Failwith, "failwith", "FailWith", TP_T, FAIL),
    op(IntrinsicId::InvalidArg, "invalidArg", "InvalidArg", TP_T, Sig::new(&[&[STRING], &[STRING]], T)),
    op(IntrinsicId::NullArg, "nullArg", "NullArg", TP_T, FAIL),
    op(IntrinsicId::Ignore, "ignore", "Ignore", TP_T, Sig::new(&[&[T]], UNIT)),
    op(IntrinsicId::Id, "id", "Identity", TP_T, ENDO),
    op(IntrinsicId::Fst, "fst", "Fst", TP_TU, Sig::new(&[&[T, U]], T)),
    op(IntrinsicId::Snd, "snd", "Snd", TP_TU, Sig::new(&[&[T, U]], U)),
    op(IntrinsicId::Ref, "ref", "Ref", TP_T, Sig::new(&[&[T]], REF_T)),
    op(IntrinsicId::Deref, "op_Dereference", "op_Dereference", TP_T, Sig::new(&[&[REF_T]], T)),
    op(IntrinsicId::Assign, "op_ColonEquals", "op_ColonEquals", TP_T, Sig::new(&[&[REF_T], &[T]], UNIT)),
    op(IntrinsicId::Box, "box", "Box", TP_T, Sig::new(&[&[T]], OBJ)),
    op(IntrinsicId::Unbox, "unbox", "Unbox", TP_T, Sig::new(&[&[OBJ]], T)),
    op(IntrinsicId::IsNull, "isNull", "IsNull", TP_T, Sig::new(&[&[T]], BOOL)),
    op(IntrinsicId::TypeOf, "typeof", "TypeOf", TP_T, Sig::value(SYSTEM_TYPE)),
    op(IntrinsicId::TypeDefOf, "typedefof", "TypeDefOf", TP_T, Sig::value(SYSTEM_TYPE)),
    op(IntrinsicId::SizeOf, "sizeof", "SizeOf", TP_T, Sig::value(INT)),
    op(IntrinsicId::NameOf, "nameof", "NameOf", TP_T, Sig::new(&[&[T]], STRING)),
    op(IntrinsicId::Range, "op_Range", "op_Range", TP_T, Sig::new(&[&[T], &[T]], SEQ_T)),
    op(IntrinsicId::RangeStep, "op_RangeStep", "op_RangeStep", TP_TU, Sig::new(&[&[T], &[U], &[T]], SEQ_T)),
    op(IntrinsicId::Lock, "lock", "Lock", TP_TU, Sig::new(&[&[T], &[TyTemplate::Fun(&UNIT, &U)]], U)),
    op(IntrinsicId::Using, "using", "Using", TP_TU, Sig::new(&[&[T], &[TyTemplate::Fun(&T, &U)]], U)),
    convert(IntrinsicId::ToInt32, "int", "ToInt32", INT),
    convert(IntrinsicId::ToInt64, "int64", "ToInt64", INT64),
    convert(IntrinsicId::ToDouble, "float", "ToDouble", FLOAT),
    convert(IntrinsicId::ToChar, "char", "ToChar", CHAR),
    convert(IntrinsicId::ToString, "string", "ToString", STRING),
    convert(IntrinsicId::ToByte, "byte", "ToByte", BYTE),
    math(IntrinsicId::Abs, "abs", "Abs"),
    math(IntrinsicId::Acos, "acos", "Acos"),
    math(IntrinsicId::Asin, "asin", "Asin"),
    math(IntrinsicId::Atan, "atan", "Atan"),
    op(IntrinsicId::Atan2, "atan2", "Atan2", TP_TU, Sig::new(&[&[T], &[T]], U)),
    math(IntrinsicId::Ceiling, "ceil", "Ceiling"),
    math(IntrinsicId::Cos, "cos", "Cos"),
    math(IntrinsicId::Cosh, "cosh", "Cosh"),
    math(IntrinsicId::Exp, "exp", "Exp"),
    math(IntrinsicId::Floor, "floor", "Floor"),
    math(IntrinsicId::Log, "log", "Log"),
    math(IntrinsicId::Log10, "log10", "Log10"),
    op(IntrinsicId::Pow, "op_Exponentiation", "op_Exponentiation", TP_TU, Sig::new(&[&[T], &[U]], T)),
    math(IntrinsicId::Round, "round", "Round"),
    op(IntrinsicId::Sign, "sign", "Sign", TP_T, HASH),
    math(IntrinsicId::Sin, "sin", "Sin"),
    math(IntrinsicId::Sinh, "sinh", "Sinh"),
    op(IntrinsicId::Sqrt, "sqrt", "Sqrt", TP_TU, UNARY),
    math(IntrinsicId::Tan, "tan", "Tan"),
    math(IntrinsicId::Tanh, "tanh", "Tanh"),
    math(IntrinsicId::Truncate, "truncate", "Truncate"),
    op(IntrinsicId::PipeRight, "op_PipeRight", "op_PipeRight", TP_TU, Sig::new(&[&[T], &[TyTemplate::Fun(&T, &U)]], U)),
    op(IntrinsicId::PipeLeft, "op_PipeLeft", "op_PipeLeft", TP_TU, Sig::new(&[&[TyTemplate::Fun(&T, &U)], &[T]], U)),
    op(
        IntrinsicId::ComposeRight,
        "op_ComposeRight",
        "op_ComposeRight",
        TP_TUV,
        Sig::new(&[&[TyTemplate::Fun(&T, &U)], &[TyTemplate::Fun(&U, &V)]], TyTemplate::Fun(&T, &V)),
    ),
    // Operators.Checked
    IntrinsicDef::new(IntrinsicId::CheckedAddition, Entity::Checked, "op_Addition", "op_Addition", TP_BINARY, BINARY),
    IntrinsicDef::new(IntrinsicId::CheckedSubtraction, Entity::Checked, "op_Subtraction", "op_Subtraction", TP_BINARY, BINARY),
    IntrinsicDef::new(IntrinsicId::CheckedMultiply, Entity::Checked, "op_Multiply", "op_Multiply", TP_BINARY, BINARY),
    IntrinsicDef::new(IntrinsicId::CheckedUnaryNegation, Entity::Checked, "op_UnaryNegation", "op_UnaryNegation", TP_TU, UNARY),
    IntrinsicDef::new(IntrinsicId::CheckedToInt32, Entity::Checked, "int", "ToInt32", TP_T, Sig::new(&[&[T]], INT)),
    // LanguagePrimitives.IntrinsicOperators
    IntrinsicDef::new(IntrinsicId::BooleanAnd, Entity::IntrinsicOperators, "op_BooleanAnd", "op_BooleanAnd", &[], Sig::new(&[&[BOOL], &[BOOL]], BOOL)),
    IntrinsicDef::new(IntrinsicId::BooleanOr, Entity::IntrinsicOperators, "op_BooleanOr", "op_BooleanOr", &[], Sig::new(&[&[BOOL], &[BOOL]], BOOL)),
    IntrinsicDef::new(
        IntrinsicId::AddressOf,
        Entity::IntrinsicOperators,
        "op_AddressOf",
        "op_AddressOf",
        TP_T,
        Sig::new(&[&[T]], TyTemplate::App(NamedTycon::ByRef, &[T])),
    ),
    // LanguagePrimitives
    IntrinsicDef::new(IntrinsicId::GenericZero, Entity::LanguagePrimitives, "GenericZero", "GenericZero", TP_T, Sig::value(T)),
    IntrinsicDef::new(IntrinsicId::GenericOne, Entity::LanguagePrimitives, "GenericOne", "GenericOne", TP_T, Sig::value(T)),
    IntrinsicDef::new(IntrinsicId::GenericEquality, Entity::LanguagePrimitives, "GenericEquality", "GenericEquality", TP_T, PREDICATE2),
    IntrinsicDef::new(IntrinsicId::GenericEqualityEr, Entity::LanguagePrimitives, "GenericEqualityER", "GenericEqualityER", TP_T, PREDICATE2),
    IntrinsicDef::new(IntrinsicId::GenericComparison, Entity::LanguagePrimitives, "GenericComparison", "GenericComparison", TP_T, ORDER),
    IntrinsicDef::new(IntrinsicId::GenericHash, Entity::LanguagePrimitives, "GenericHash", "GenericHash", TP_T, HASH),
    IntrinsicDef::new(IntrinsicId::PhysicalEquality, Entity::LanguagePrimitives, "PhysicalEquality", "PhysicalEquality", TP_T, PREDICATE2),
    IntrinsicDef::new(IntrinsicId::PhysicalHash, Entity::LanguagePrimitives, "PhysicalHash", "PhysicalHash", TP_T, HASH),
    IntrinsicDef::new(IntrinsicId::EnumOfValue, Entity::LanguagePrimitives, "EnumOfValue", "EnumOfValue", TP_TU, UNARY),
    IntrinsicDef::new(IntrinsicId::EnumToValue, Entity::LanguagePrimitives, "EnumToValue", "EnumToValue", TP_TU, UNARY),
    // LanguagePrimitives.HashCompare
    hash_compare(IntrinsicId::GenericEqualityIntrinsic, "GenericEqualityIntrinsic", TP_T, PREDICATE2),
    hash_compare(IntrinsicId::GenericEqualityErIntrinsic, "GenericEqualityERIntrinsic", TP_T, PREDICATE2),
    hash_compare(
        IntrinsicId::GenericEqualityWithComparerIntrinsic,
        "GenericEqualityWithComparerIntrinsic",
        TP_T,
        Sig::new(&[&[EQ_COMPARER], &[T], &[T]], BOOL),
    ),
    hash_compare(IntrinsicId::GenericComparisonIntrinsic, "GenericComparisonIntrinsic", TP_T, ORDER),
    hash_compare(
        IntrinsicId::GenericComparisonWithComparerIntrinsic,
        "GenericComparisonWithComparerIntrinsic",
        TP_T,
        Sig::new(&[&[COMPARER], &[T], &[T]], INT),
    ),
    hash_compare(IntrinsicId::GenericHashIntrinsic, "GenericHashIntrinsic", TP_T, HASH),
    hash_compare(
        IntrinsicId::GenericHashWithComparerIntrinsic,
        "GenericHashWithComparerIntrinsic",
        TP_T,
        Sig::new(&[&[EQ_COMPARER], &[T]], INT),
    ),
    hash_compare(IntrinsicId::GenericLessThanIntrinsic, "GenericLessThanIntrinsic", TP_T, PREDICATE2),
    hash_compare(IntrinsicId::GenericGreaterThanIntrinsic, "GenericGreaterThanIntrinsic", TP_T, PREDICATE2),
    hash_compare(IntrinsicId::GenericLessOrEqualIntrinsic, "GenericLessOrEqualIntrinsic", TP_T, PREDICATE2),
    hash_compare(IntrinsicId::GenericGreaterOrEqualIntrinsic, "GenericGreaterOrEqualIntrinsic", TP_T, PREDICATE2),
    // LanguagePrimitives.IntrinsicFunctions
    intrinsic_fn(IntrinsicId::GetArray, "GetArray", TP_T, Sig::new(&[&[ARR_T], &[INT]], T)),
    intrinsic_fn(IntrinsicId::GetArray2D, "GetArray2D", TP_T, Sig::new(&[&[ARR2_T], &[INT], &[INT]], T)),
    intrinsic_fn(IntrinsicId::GetArray3D, "GetArray3D", TP_T, Sig::new(&[&[ARR3_T], &[INT], &[INT], &[INT]], T)),
    intrinsic_fn(IntrinsicId::GetArray4D, "GetArray4D", TP_T, Sig::new(&[&[ARR4_T], &[INT], &[INT], &[INT], &[INT]], T)),
    intrinsic_fn(IntrinsicId::SetArray, "SetArray", TP_T, Sig::new(&[&[ARR_T], &[INT], &[T]], UNIT)),
    intrinsic_fn(IntrinsicId::SetArray2D, "SetArray2D", TP_T, Sig::new(&[&[ARR2_T], &[INT], &[INT], &[T]], UNIT)),
    intrinsic_fn(IntrinsicId::SetArray3D, "SetArray3D", TP_T, Sig::new(&[&[ARR3_T], &[INT], &[INT], &[INT], &[T]], UNIT)),
    intrinsic_fn(
        IntrinsicId::SetArray4D,
        "SetArray4D",
        TP_T,
        Sig::new(&[&[ARR4_T], &[INT], &[INT], &[INT], &[INT], &[T]], UNIT),
    ),
    intrinsic_fn(IntrinsicId::GetString, "GetString", &[], Sig::new(&[&[STRING], &[INT]], CHAR)),
    intrinsic_fn(IntrinsicId::UnboxGeneric, "UnboxGeneric", TP_T, Sig::new(&[&[OBJ]], T)),
    intrinsic_fn(IntrinsicId::UnboxFast, "UnboxFast", TP_T, Sig::new(&[&[OBJ]], T)),
    intrinsic_fn(IntrinsicId::TypeTestGeneric, "TypeTestGeneric", TP_T, Sig::new(&[&[OBJ]], BOOL)),
    intrinsic_fn(IntrinsicId::TypeTestFast, "TypeTestFast", TP_T, Sig::new(&[&[OBJ]], BOOL)),
    intrinsic_fn(IntrinsicId::CreateInstance, "CreateInstance", TP_T, NULLARY),
    intrinsic_fn(IntrinsicId::Dispose, "Dispose", TP_T, Sig::new(&[&[T]], UNIT)),
    intrinsic_fn(
        IntrinsicId::MakeDecimal,
        "MakeDecimal",
        &[],
        Sig::new(&[&[INT], &[INT], &[INT], &[BOOL], &[BYTE]], DECIMAL),
    ),
    // Dynamic witnesses, built on demand by the witness resolver.
    binary_dynamic(IntrinsicId::AdditionDynamic, "AdditionDynamic"),
    binary_dynamic(IntrinsicId::SubtractionDynamic, "SubtractionDynamic"),
    binary_dynamic(IntrinsicId::MultiplyDynamic, "MultiplyDynamic"),
    binary_dynamic(IntrinsicId::DivisionDynamic, "DivisionDynamic"),
    binary_dynamic(IntrinsicId::ModulusDynamic, "ModulusDynamic"),
    binary_dynamic(IntrinsicId::BitwiseAndDynamic, "BitwiseAndDynamic"),
    binary_dynamic(IntrinsicId::BitwiseOrDynamic, "BitwiseOrDynamic"),
    binary_dynamic(IntrinsicId::ExclusiveOrDynamic, "ExclusiveOrDynamic"),
    binary_dynamic(IntrinsicId::LeftShiftDynamic, "LeftShiftDynamic"),
    binary_dynamic(IntrinsicId::RightShiftDynamic, "RightShiftDynamic"),
    binary_dynamic(IntrinsicId::CheckedAdditionDynamic, "CheckedAdditionDynamic"),
    binary_dynamic(IntrinsicId::CheckedSubtractionDynamic, "CheckedSubtractionDynamic"),
    binary_dynamic(IntrinsicId::CheckedMultiplyDynamic, "CheckedMultiplyDynamic"),
    unary_dynamic(IntrinsicId::UnaryNegationDynamic, "UnaryNegationDynamic"),
    unary_dynamic(IntrinsicId::CheckedUnaryNegationDynamic, "CheckedUnaryNegationDynamic"),
    unary_dynamic(IntrinsicId::UnaryPlusDynamic, "UnaryPlusDynamic"),
    unary_dynamic(IntrinsicId::LogicalNotDynamic, "LogicalNotDynamic"),
    unary_dynamic(IntrinsicId::ExplicitDynamic, "ExplicitDynamic"),
    unary_dynamic(IntrinsicId::CheckedExplicitDynamic, "CheckedExplicitDynamic"),
    unary_dynamic(IntrinsicId::ImplicitDynamic, "ImplicitDynamic"),
    relational_dynamic(IntrinsicId::EqualityDynamic, "EqualityDynamic"),
    relational_dynamic(IntrinsicId::InequalityDynamic, "InequalityDynamic"),
    relational_dynamic(IntrinsicId::LessThanDynamic, "LessThanDynamic"),
    relational_dynamic(IntrinsicId::GreaterThanDynamic, "GreaterThanDynamic"),
    relational_dynamic(IntrinsicId::LessThanOrEqualDynamic, "LessThanOrEqualDynamic"),
    relational_dynamic(IntrinsicId::GreaterThanOrEqualDynamic, "GreaterThanOrEqualDynamic"),
    IntrinsicDef::new(IntrinsicId::GenericZeroDynamic, Entity::LanguagePrimitives, "GenericZeroDynamic", "GenericZeroDynamic", TP_T, NULLARY).other(),
    IntrinsicDef::new(IntrinsicId::GenericOneDynamic, Entity::LanguagePrimitives, "GenericOneDynamic", "GenericOneDynamic", TP_T, NULLARY).other(),
    // Operators.OperatorIntrinsics
    IntrinsicDef::new(IntrinsicId::RangeInt32, Entity::OperatorIntrinsics, "RangeInt32", "RangeInt32", &[], Sig::new(&[&[INT], &[INT], &[INT]], TyTemplate::App(NamedTycon::Seq, &[INT]))),
    IntrinsicDef::new(IntrinsicId::RangeInt64, Entity::OperatorIntrinsics, "RangeInt64", "RangeInt64", &[], Sig::new(&[&[INT64], &[INT64], &[INT64]], TyTemplate::App(NamedTycon::Seq, &[INT64]))),
    IntrinsicDef::new(IntrinsicId::RangeUInt64, Entity::OperatorIntrinsics, "RangeUInt64", "RangeUInt64", &[], Sig::new(&[&[UINT64], &[UINT64], &[UINT64]], TyTemplate::App(NamedTycon::Seq, &[UINT64]))),
    IntrinsicDef::new(IntrinsicId::RangeChar, Entity::OperatorIntrinsics, "RangeChar", "RangeChar", &[], Sig::new(&[&[CHAR], &[CHAR]], TyTemplate::App(NamedTycon::Seq, &[CHAR]))),
    IntrinsicDef::new(IntrinsicId::RangeGeneric, Entity::OperatorIntrinsics, "RangeGeneric", "RangeGeneric", TP_T, Sig::new(&[&[T], &[T]], SEQ_T)),
    IntrinsicDef::new(IntrinsicId::RangeStepGeneric, Entity::OperatorIntrinsics, "RangeStepGeneric", "RangeStepGeneric", TP_TU, Sig::new(&[&[T], &[U], &[T]], SEQ_T)),
    IntrinsicDef::new(
        IntrinsicId::GetArraySlice,
        Entity::OperatorIntrinsics,
        "GetArraySlice",
        "GetArraySlice",
        TP_T,
        Sig::new(&[&[ARR_T], &[OPTION_INT], &[OPTION_INT]], ARR_T),
    ),
    // CompilerServices.RuntimeHelpers
    IntrinsicDef::new(
        IntrinsicId::EnumerateWhile,
        Entity::RuntimeHelpers,
        "EnumerateWhile",
        "EnumerateWhile",
        TP_T,
        Sig::new(&[&[TyTemplate::Fun(&UNIT, &BOOL)], &[SEQ_T]], SEQ_T),
    ),
    IntrinsicDef::new(
        IntrinsicId::EnumerateThenFinally,
        Entity::RuntimeHelpers,
        "EnumerateThenFinally",
        "EnumerateThenFinally",
        TP_T,
        Sig::new(&[&[SEQ_T], &[TyTemplate::Fun(&UNIT, &UNIT)]], SEQ_T),
    ),
    IntrinsicDef::new(
        IntrinsicId::EnumerateUsing,
        Entity::RuntimeHelpers,
        "EnumerateUsing",
        "EnumerateUsing",
        TP_TUV,
        Sig::new(&[&[T], &[TyTemplate::Fun(&T, &U)]], SEQ_V),
    ),
    IntrinsicDef::new(
        IntrinsicId::EnumerateTryWith,
        Entity::RuntimeHelpers,
        "EnumerateTryWith",
        "EnumerateTryWith",
        TP_T,
        Sig::new(&[&[SEQ_T], &[TyTemplate::Fun(&EXN, &INT)], &[TyTemplate::Fun(&EXN, &SEQ_T)]], SEQ_T),
    ),
    IntrinsicDef::new(
        IntrinsicId::EnumerateFromFunctions,
        Entity::RuntimeHelpers,
        "EnumerateFromFunctions",
        "EnumerateFromFunctions",
        TP_TU,
        Sig::new(
            &[&[TyTemplate::Fun(&UNIT, &T)], &[TyTemplate::Fun(&T, &BOOL)], &[TyTemplate::Fun(&T, &U)]],
            SEQ_U,
        ),
    ),
    // Collections.SeqModule
    IntrinsicDef::new(IntrinsicId::SeqCollect, Entity::SeqModule, "collect", "Collect", TP_TUV, Sig::new(&[&[TyTemplate::Fun(&T, &U)], &[SEQ_T]], SEQ_V)),
    IntrinsicDef::new(IntrinsicId::SeqDelay, Entity::SeqModule, "delay", "Delay", TP_T, Sig::new(&[&[TyTemplate::Fun(&UNIT, &SEQ_T)]], SEQ_T)),
    IntrinsicDef::new(IntrinsicId::SeqAppend, Entity::SeqModule, "append", "Append", TP_T, Sig::new(&[&[SEQ_T], &[SEQ_T]], SEQ_T)),
    IntrinsicDef::new(IntrinsicId::SeqSingleton, Entity::SeqModule, "singleton", "Singleton", TP_T, Sig::new(&[&[T]], SEQ_T)),
    IntrinsicDef::new(IntrinsicId::SeqEmpty, Entity::SeqModule, "empty", "Empty", TP_T, Sig::value(SEQ_T)),
    IntrinsicDef::new(IntrinsicId::SeqMap, Entity::SeqModule, "map", "Map", TP_TU, Sig::new(&[&[TyTemplate::Fun(&T, &U)], &[SEQ_T]], SEQ_U)),
    IntrinsicDef::new(IntrinsicId::SeqToList, Entity::SeqModule, "toList", "ToList", TP_T, Sig::new(&[&[SEQ_T]], TyTemplate::App(NamedTycon::List, &[T]))),
    IntrinsicDef::new(IntrinsicId::SeqToArray, Entity::SeqModule, "toArray", "ToArray", TP_T, Sig::new(&[&[SEQ_T]], ARR_T)),
    // ExtraTopLevelOperators
    IntrinsicDef::new(
        IntrinsicId::Sprintf,
        Entity::ExtraTopLevelOperators,
        "sprintf",
        "PrintFormatToStringThen",
        TP_T,
        Sig::new(&[&[TyTemplate::App(NamedTycon::Format, &[T, UNIT, STRING, STRING, T])]], T),
    ),
    IntrinsicDef::new(
        IntrinsicId::Printf,
        Entity::ExtraTopLevelOperators,
        "printf",
        "PrintFormat",
        TP_T,
        Sig::new(&[&[TyTemplate::App(NamedTycon::Format, &[T, OBJ, UNIT, UNIT, T])]], T),
    ),
    IntrinsicDef::new(
        IntrinsicId::Printfn,
        Entity::ExtraTopLevelOperators,
        "printfn",
        "PrintFormatLine",
        TP_T,
        Sig::new(&[&[TyTemplate::App(NamedTycon::Format, &[T, OBJ, UNIT, UNIT, T])]], T),
    ),
    IntrinsicDef::new(
        IntrinsicId::Failwithf,
        Entity::ExtraTopLevelOperators,
        "failwithf",
        "PrintFormatToStringThenFail",
        TP_TU,
        Sig::new(&[&[TyTemplate::App(NamedTycon::Format, &[T, UNIT, STRING, U, T])]], T),
    ),
    IntrinsicDef::new(IntrinsicId::CreateSequence, Entity::ExtraTopLevelOperators, "seq", "CreateSequence", TP_T, Sig::new(&[&[SEQ_T]], SEQ_T)),
    IntrinsicDef::new(IntrinsicId::Query, Entity::ExtraTopLevelOperators, "query", "query", &[], Sig::value(QUERY_BUILDER)),
    IntrinsicDef::new(IntrinsicId::Splice, Entity::ExtraTopLevelOperators, "op_Splice", "op_Splice", TP_T, Sig::new(&[&[EXPR_T]], T)),
    IntrinsicDef::new(IntrinsicId::SpliceUntyped, Entity::ExtraTopLevelOperators, "op_SpliceUntyped", "op_SpliceUntyped", TP_T, Sig::new(&[&[RAW_EXPR]], T)),
    // Members
    IntrinsicDef::new(
        IntrinsicId::NewFormat,
        Entity::PrintfModule,
        ".ctor",
        ".ctor",
        TP_FORMAT,
        Sig::new(&[&[STRING]], TyTemplate::App(NamedTycon::Format, &[T, U, V, W, X])),
    )
    .member_of("PrintfFormat`5"),
    IntrinsicDef::new(IntrinsicId::LiftValue, Entity::Quotations, "Value", "Value", TP_T, Sig::new(&[&[T]], RAW_EXPR)).member_of("Expr"),
    IntrinsicDef::new(IntrinsicId::CastQuotation, Entity::Quotations, "Cast", "Cast", TP_T, Sig::new(&[&[RAW_EXPR]], EXPR_T)).member_of("Expr"),
    IntrinsicDef::new(IntrinsicId::LazyForce, Entity::LazyExtensions, "Force", "Force", TP_T, Sig::new(&[&[LAZY_T]], T)).member_of("Lazy`1"),
    IntrinsicDef::new(IntrinsicId::LazyCreate, Entity::LazyExtensions, "Create", "Create", TP_T, Sig::new(&[&[TyTemplate::Fun(&UNIT, &T)]], LAZY_T))
        .member_of("Lazy`1"),
    IntrinsicDef::new(IntrinsicId::QueryRun, Entity::QueryRunExtensions, "Run", "Run", TP_T, Sig::new(&[&[QUERY_BUILDER], &[EXPR_T]], T))
        .member_of("QueryBuilder"),
    IntrinsicDef::new(
        IntrinsicId::QueryFor,
        Entity::QueryRunExtensions,
        "For",
        "For",
        TP_TUV,
        Sig::new(&[&[QUERY_BUILDER], &[SOURCE_TU], &[TyTemplate::Fun(&T, &SOURCE_VU)]], SOURCE_VU),
    )
    .member_of("QueryBuilder"),
    IntrinsicDef::new(
        IntrinsicId::QuerySelect,
        Entity::QueryRunExtensions,
        "Select",
        "Select",
        TP_TUV,
        Sig::new(&[&[QUERY_BUILDER], &[SOURCE_TU], &[TyTemplate::Fun(&T, &V)]], SOURCE_VU),
    )
    .member_of("QueryBuilder"),
    IntrinsicDef::new(IntrinsicId::QueryYield, Entity::QueryRunExtensions, "Yield", "Yield", TP_TU, Sig::new(&[&[QUERY_BUILDER], &[T]], SOURCE_TU))
        .member_of("QueryBuilder"),
    IntrinsicDef::new(IntrinsicId::QueryZero, Entity::QueryRunExtensions, "Zero", "Zero", TP_TU, Sig::new(&[&[QUERY_BUILDER]], SOURCE_TU))
        .member_of("QueryBuilder"),
    // Collections.ArrayModule
    IntrinsicDef::new(IntrinsicId::ArrayLength, Entity::ArrayModule, "length", "Length", TP_T, Sig::new(&[&[ARR_T]], INT)),
    IntrinsicDef::new(IntrinsicId::ArrayGet, Entity::ArrayModule, "get", "Get", TP_T, Sig::new(&[&[ARR_T], &[INT]], T)),
    IntrinsicDef::new(IntrinsicId::ArrayZeroCreate, Entity::ArrayModule, "zeroCreate", "ZeroCreate", TP_T, Sig::new(&[&[INT]], ARR_T)),
];
