//! Assembly errors.

use thiserror::Error;

/// Result type for assembly.
pub type ParseResult<T> = Result<T, ParseError>;

/// Failure to assemble an atom stream into one expression.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ParseError {
    /// Assembly was asked to build an expression from no atoms at all.
    #[error("empty expression: there are no tokens to assemble")]
    EmptyExpression,

    /// The stream ended before a placeholder received all of its operands.
    #[error(
        "incomplete expression: {placeholder} at token {position} takes {expected} operand(s) \
         but the input ended after {found}"
    )]
    IncompleteExpression {
        placeholder: String,
        position: usize,
        expected: usize,
        found: usize,
    },

    /// A complete expression was assembled but atoms remain after it.
    #[error("{count} trailing token(s) after a complete expression, starting at token {position}")]
    TrailingTokens { position: usize, count: usize },
}
