//! Evaluator for the bound-variable language.
//!
//! # Architecture
//!
//! - [`Interpreter`]: environment-based call-by-need evaluation over an
//!   [`ExprArena`](bv_ir::ExprArena). Closures capture persistent
//!   [`Environment`]s; arguments are passed as [`Thunk`]s forced at most once.
//! - [`ReductionCache`]: per-run memo table for applications, keyed by the
//!   operand nodes and the thunks bound to their free variables.
//! - [`evaluate_binary`] / [`evaluate_unary`]: the strict operator tables.
//!
//! Environments and values are `Rc`-based and therefore `!Send`. A program
//! run owns its interpreter; runs on other threads build their own.

mod cache;
mod environment;
pub mod errors;
mod interpreter;
mod operators;
mod unary_operators;
mod value;

pub use cache::{CacheKey, CacheMode, CacheStats, FreeVars, ReductionCache};
pub use environment::{Environment, Thunk, ThunkId};
pub use errors::{EvalError, EvalResult};
pub use interpreter::{evaluate, Interpreter};
pub use operators::evaluate_binary;
pub use unary_operators::evaluate_unary;
pub use value::{Closure, Value};

#[cfg(test)]
mod tests;
