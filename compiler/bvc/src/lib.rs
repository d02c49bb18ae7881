//! Driver for the bound-variable interpreter.
//!
//! Glues the codec, assembler and evaluator into the boundary operations
//! ([`encode`], [`decode`], [`evaluate_program`]) and the `bvc` command set.
//!
//! ```text
//! wire ──tokenize──► atoms ──parse_program──► arena ──Interpreter──► Value
//! ```

pub mod commands;
mod config;
mod error;
mod logging;
mod pipeline;

pub use config::{parse_cache_mode, EvalConfig, CACHE_ENV};
pub use error::{Error, Result};
pub use logging::{init_tracing, LOG_ENV, LOG_TREE_ENV};
pub use pipeline::{
    decode, encode, encode_expr, encode_value, evaluate_program, evaluate_program_with, render,
};

pub use bv_eval::{CacheMode, Value};
