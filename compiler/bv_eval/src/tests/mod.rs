//! Evaluator test suites.
//!
//! - `operators_tests` / `unary_operators_tests`: the strict operator tables
//! - `interpreter_tests`: evaluation rules, laziness, errors and fixtures
//! - `oracle`: a substitution-based reference evaluator, cross-checked
//!   against the interpreter

mod oracle;

use bv_ir::{ExprArena, ExprId};

use crate::{CacheMode, EvalResult, Interpreter, Value};

/// Decode and assemble a wire program.
#[allow(clippy::expect_used)]
pub(crate) fn program(wire: &str) -> (ExprArena, ExprId) {
    let atoms = bv_codec::tokenize(wire).expect("fixture should decode");
    bv_parse::parse_program(&atoms).expect("fixture should assemble")
}

/// Evaluate a wire program with the given cache mode.
pub(crate) fn run_with(wire: &str, mode: CacheMode) -> EvalResult<Value> {
    let (arena, root) = program(wire);
    Interpreter::with_cache_mode(&arena, mode).eval_program(root)
}

/// Evaluate a wire program with the cache enabled.
pub(crate) fn run(wire: &str) -> EvalResult<Value> {
    run_with(wire, CacheMode::Enabled)
}
