//! Pipeline errors.

use bv_codec::CodecError;
use bv_eval::EvalError;
use bv_parse::ParseError;
use thiserror::Error;

/// Result type for the driver pipeline.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Any failure between raw input and printed output.
#[derive(Debug, Error)]
pub enum Error {
    #[error("decode error: {0}")]
    Codec(#[from] CodecError),

    #[error("parse error: {0}")]
    Parse(#[from] ParseError),

    #[error("evaluation error: {0}")]
    Eval(#[from] EvalError),

    /// Only closures over an empty scope have a wire form.
    #[error("cannot encode a closure that refers to variables bound outside it")]
    OpenClosure,

    #[error("invalid {name}={value:?}: expected one of {expected}")]
    Config {
        name: &'static str,
        value: String,
        expected: &'static str,
    },

    #[error("cannot read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
