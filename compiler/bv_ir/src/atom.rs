//! Decoded tokens.

use std::fmt;

use num_bigint::BigInt;

use crate::{BinaryOp, UnaryOp, VarId};

/// One decoded token.
///
/// Literal and variable atoms are complete expressions on their own.
/// `Unary`, `Binary`, `If` and `Lambda` are placeholders: their operands are
/// the next 1, 2, 3 and 1 expressions of the pre-order stream.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Atom {
    Bool(bool),
    Int(BigInt),
    Str(String),
    Unary(UnaryOp),
    Binary(BinaryOp),
    If,
    Lambda(VarId),
    Var(VarId),
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::Bool(b) => write!(f, "Bool({b})"),
            Atom::Int(i) => write!(f, "Int({i})"),
            Atom::Str(s) => write!(f, "Str({s:?})"),
            Atom::Unary(op) => write!(f, "Unary({op})"),
            Atom::Binary(op) => write!(f, "Binary({op})"),
            Atom::If => f.write_str("If"),
            Atom::Lambda(id) => write!(f, "Lambda({id})"),
            Atom::Var(id) => write!(f, "Var({id})"),
        }
    }
}
