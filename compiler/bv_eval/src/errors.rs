//! Evaluation errors and their constructors.
//!
//! Every variant aborts the current evaluation; there is no recovery inside
//! the interpreter. Constructors are `#[cold]` so the hot evaluation paths
//! stay small.

use bv_codec::CodecError;
use bv_ir::VarId;
use num_bigint::BigInt;
use thiserror::Error;

/// Result of evaluating an expression.
pub type EvalResult<T> = Result<T, EvalError>;

/// A runtime failure.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EvalError {
    /// An operator or construct received a value of the wrong kind.
    #[error("type mismatch in {operation}: expected {expected}, found {found}")]
    TypeMismatch {
        operation: &'static str,
        expected: &'static str,
        found: &'static str,
    },

    /// A variable was referenced outside any lambda binding it.
    #[error("unbound variable v{id}")]
    UnboundVariable { id: VarId },

    /// `take`/`drop` with a count outside `0..=len`.
    #[error("{operation} {index} is out of range for a string of length {len}")]
    IndexOutOfRange {
        operation: &'static str,
        index: BigInt,
        len: usize,
    },

    /// Division or remainder by zero.
    #[error("{operation} by zero")]
    DivisionByZero { operation: &'static str },

    /// Integer-to-string on a negative integer.
    #[error("cannot convert negative integer {value} to a string")]
    NegativeConversion { value: BigInt },

    /// A thunk was demanded while it was already being forced.
    #[error("infinite recursion: v{id} depends on its own value")]
    InfiniteRecursion { id: VarId },

    /// String-to-integer met a character outside the alphabet.
    #[error(transparent)]
    Conversion(#[from] CodecError),
}

#[cold]
pub fn type_mismatch(operation: &'static str, expected: &'static str, found: &'static str) -> EvalError {
    EvalError::TypeMismatch {
        operation,
        expected,
        found,
    }
}

#[cold]
pub fn unbound_variable(id: &VarId) -> EvalError {
    EvalError::UnboundVariable { id: id.clone() }
}

#[cold]
pub fn index_out_of_range(operation: &'static str, index: &BigInt, len: usize) -> EvalError {
    EvalError::IndexOutOfRange {
        operation,
        index: index.clone(),
        len,
    }
}

#[cold]
pub fn division_by_zero(operation: &'static str) -> EvalError {
    EvalError::DivisionByZero { operation }
}

#[cold]
pub fn negative_conversion(value: &BigInt) -> EvalError {
    EvalError::NegativeConversion {
        value: value.clone(),
    }
}

#[cold]
pub fn infinite_recursion(id: &VarId) -> EvalError {
    EvalError::InfiniteRecursion { id: id.clone() }
}
