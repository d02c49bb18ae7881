//! Codec errors.

use thiserror::Error;

/// Result type for codec operations.
pub type CodecResult<T> = Result<T, CodecError>;

/// Failure to decode or encode wire text.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum CodecError {
    /// A literal payload contains a byte outside `!`..=`~`.
    #[error("malformed literal {literal:?}: byte 0x{byte:02x} at offset {offset} is not a base-94 digit")]
    MalformedLiteral {
        literal: String,
        offset: usize,
        byte: u8,
    },

    /// Text being encoded contains a character outside the 94-symbol alphabet.
    #[error("character {ch:?} at offset {offset} has no encoding in the string alphabet")]
    UnencodableChar { ch: char, offset: usize },

    /// The token's leading tag character is not a known tag (or the token is empty).
    #[error("unknown token {token:?}")]
    UnknownToken { token: String },

    /// A `U` or `B` token names an operator outside the operator table.
    #[error("unknown {arity} operator {symbol:?} in token {token:?}")]
    UnknownOperator {
        arity: &'static str,
        symbol: String,
        token: String,
    },
}
