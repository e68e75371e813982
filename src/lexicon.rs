//! Operator/type lexicon. The single place allowed to mint an operator
//! code string or a primitive type tag.
//!
//! Every other module reaches here rather than writing a literal like
//! `"+"` inline, so the canonicalization table has exactly one source
//! of truth.

use rustpython_ast::{BoolOp, CmpOp, Constant, Operator, UnaryOp};
use smol_str::SmolStr;

/// The full canonical set of binary operator codes, including the
/// comparison codes and the `&&`/`||` boolean codes.
pub const BINARY_OPERATOR_CODES: &[&str] = &[
    "+", "-", "*", "/", "//", "%", "**", "<<", ">>", "|", "^", "&", "==", "!=", "<", "<=", ">",
    ">=", "is", "is not", "in", "not in", "=", "&&", "||",
];

/// The full canonical set of unary operator codes.
pub const UNARY_OPERATOR_CODES: &[&str] = &["+", "-", "!", "~", "raise"];

pub const ASSIGN_OPERATOR_CODE: &str = "=";
pub const RAISE_OPERATOR_CODE: &str = "raise";

pub fn is_valid_binary_code(code: &str) -> bool {
    BINARY_OPERATOR_CODES.contains(&code)
}

pub fn is_valid_unary_code(code: &str) -> bool {
    UNARY_OPERATOR_CODES.contains(&code)
}

/// `BinOp`'s operator → canonical code. Matrix multiply (`@`) unifies
/// with `*`, which may be incorrect for numeric libraries that give it
/// distinct semantics.
pub fn binary_op_code(op: &Operator) -> &'static str {
    match op {
        Operator::Add => "+",
        Operator::Sub => "-",
        Operator::Mult => "*",
        Operator::MatMult => "*",
        Operator::Div => "/",
        Operator::Mod => "%",
        Operator::Pow => "**",
        Operator::LShift => "<<",
        Operator::RShift => ">>",
        Operator::BitOr => "|",
        Operator::BitXor => "^",
        Operator::BitAnd => "&",
        Operator::FloorDiv => "//",
    }
}

/// `Compare`'s per-comparator operator → canonical code.
pub fn cmp_op_code(op: &CmpOp) -> &'static str {
    match op {
        CmpOp::Eq => "==",
        CmpOp::NotEq => "!=",
        CmpOp::Lt => "<",
        CmpOp::LtE => "<=",
        CmpOp::Gt => ">",
        CmpOp::GtE => ">=",
        CmpOp::Is => "is",
        CmpOp::IsNot => "is not",
        CmpOp::In => "in",
        CmpOp::NotIn => "not in",
    }
}

/// `UnaryOp`'s operator → canonical code. `raise` is synthesized by the
/// statement translator, not produced from this table.
pub fn unary_op_code(op: &UnaryOp) -> &'static str {
    match op {
        UnaryOp::Invert => "~",
        UnaryOp::Not => "!",
        UnaryOp::UAdd => "+",
        UnaryOp::USub => "-",
    }
}

/// `BoolOp`'s operator (`and`/`or`) → canonical code.
pub fn bool_op_code(op: &BoolOp) -> &'static str {
    match op {
        BoolOp::And => "&&",
        BoolOp::Or => "||",
    }
}

/// Primitive type tags. `Unknown` stands in for anything the
/// translator cannot classify (e.g. an ellipsis literal).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PrimitiveType {
    None,
    Bool,
    Int,
    Float,
    Complex,
    Str,
    ByteArray,
    Unknown,
}

impl PrimitiveType {
    pub fn as_str(&self) -> &'static str {
        match self {
            PrimitiveType::None => "None",
            PrimitiveType::Bool => "bool",
            PrimitiveType::Int => "int",
            PrimitiveType::Float => "float",
            PrimitiveType::Complex => "complex",
            PrimitiveType::Str => "str",
            PrimitiveType::ByteArray => "byte[]",
            PrimitiveType::Unknown => "unknown",
        }
    }
}

/// Classifies a `Constant` node and, for a `complex` literal, renders
/// its textual form since the core does not natively model complex
/// arithmetic.
pub fn classify_constant(constant: &Constant) -> (PrimitiveType, SmolStr) {
    match constant {
        Constant::None => (PrimitiveType::None, SmolStr::new("None")),
        Constant::Bool(b) => (PrimitiveType::Bool, SmolStr::new(b.to_string())),
        Constant::Int(i) => (PrimitiveType::Int, SmolStr::new(i.to_string())),
        Constant::Float(f) => (PrimitiveType::Float, SmolStr::new(f.to_string())),
        Constant::Complex { real, imag } => (
            PrimitiveType::Complex,
            SmolStr::new(format_complex(*real, *imag)),
        ),
        Constant::Str(s) => (PrimitiveType::Str, SmolStr::new(s.as_str())),
        Constant::Bytes(b) => (
            PrimitiveType::ByteArray,
            SmolStr::new(String::from_utf8_lossy(b)),
        ),
        Constant::Ellipsis => (PrimitiveType::Unknown, SmolStr::new("...")),
        Constant::Tuple(_) => (PrimitiveType::Unknown, SmolStr::new("")),
    }
}

/// Renders `real + imag*j` the way Python's own `repr` of a complex
/// number does, e.g. `(3+5j)`.
pub fn format_complex(real: f64, imag: f64) -> String {
    if imag >= 0.0 || imag.is_nan() {
        format!("({real}+{imag}j)")
    } else {
        format!("({real}{imag}j)")
    }
}
