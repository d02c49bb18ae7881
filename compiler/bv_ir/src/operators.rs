//! Binary and unary operators.
//!
//! Each operator is written on the wire as a single symbol following the `B`
//! or `U` tag. The tables are closed: an unknown symbol is a decode error,
//! not a runtime one.

use std::fmt;

/// Binary operators (`B` tokens).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum BinaryOp {
    /// `$` - lazy function application.
    Apply,

    // Arithmetic
    Add,
    Sub,
    Mul,
    /// Truncates toward zero.
    Div,
    /// Sign follows the dividend.
    Mod,

    // Comparison
    Eq,
    Lt,
    Gt,

    // Logical
    Or,
    And,

    // Strings
    Concat,
    /// `T` - first `n` characters.
    Take,
    /// `D` - everything after the first `n` characters.
    Drop,
}

impl BinaryOp {
    /// All binary operators, in wire-symbol table order.
    pub const ALL: [BinaryOp; 14] = [
        Self::Apply,
        Self::Add,
        Self::Sub,
        Self::Mul,
        Self::Div,
        Self::Mod,
        Self::Eq,
        Self::Lt,
        Self::Gt,
        Self::Or,
        Self::And,
        Self::Concat,
        Self::Take,
        Self::Drop,
    ];

    /// Returns the wire symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Apply => "$",
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Mod => "%",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Or => "|",
            Self::And => "&",
            Self::Concat => ".",
            Self::Take => "T",
            Self::Drop => "D",
        }
    }

    /// Look up an operator by its wire symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }

    /// Human-readable name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Apply => "apply",
            Self::Add => "addition",
            Self::Sub => "subtraction",
            Self::Mul => "multiplication",
            Self::Div => "division",
            Self::Mod => "modulo",
            Self::Eq => "equality",
            Self::Lt => "less-than",
            Self::Gt => "greater-than",
            Self::Or => "or",
            Self::And => "and",
            Self::Concat => "concatenation",
            Self::Take => "take-prefix",
            Self::Drop => "drop-prefix",
        }
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

/// Unary operators (`U` tokens).
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum UnaryOp {
    /// `-`
    Neg,
    /// `!`
    Not,
    /// `#` - decode a string as a base-94 integer.
    StrToInt,
    /// `$` - encode an integer as a base-94 string.
    IntToStr,
}

impl UnaryOp {
    /// All unary operators, in wire-symbol table order.
    pub const ALL: [UnaryOp; 4] = [Self::Neg, Self::Not, Self::StrToInt, Self::IntToStr];

    /// Returns the wire symbol for this operator.
    pub const fn as_symbol(self) -> &'static str {
        match self {
            Self::Neg => "-",
            Self::Not => "!",
            Self::StrToInt => "#",
            Self::IntToStr => "$",
        }
    }

    /// Look up an operator by its wire symbol.
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|op| op.as_symbol() == symbol)
    }

    /// Human-readable name used in error messages.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Neg => "negation",
            Self::Not => "logical not",
            Self::StrToInt => "string-to-integer",
            Self::IntToStr => "integer-to-string",
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_symbol())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_symbols_round_trip() {
        for op in BinaryOp::ALL {
            assert_eq!(BinaryOp::from_symbol(op.as_symbol()), Some(op));
        }
    }

    #[test]
    fn test_unary_symbols_round_trip() {
        for op in UnaryOp::ALL {
            assert_eq!(UnaryOp::from_symbol(op.as_symbol()), Some(op));
        }
    }

    #[test]
    fn test_unknown_symbols() {
        assert_eq!(BinaryOp::from_symbol("^"), None);
        assert_eq!(BinaryOp::from_symbol(""), None);
        assert_eq!(UnaryOp::from_symbol("+"), None);
    }

    #[test]
    fn test_dollar_is_overloaded_by_arity() {
        assert_eq!(BinaryOp::from_symbol("$"), Some(BinaryOp::Apply));
        assert_eq!(UnaryOp::from_symbol("$"), Some(UnaryOp::IntToStr));
    }
}
