//! Wire text in, values and wire text out.

use bv_eval::{FreeVars, Interpreter, Value};
use bv_ir::{Atom, ExprArena, ExprId};
use tracing::debug;

use crate::{EvalConfig, Error, Result};

/// Encode outgoing text as a single string token.
pub fn encode(text: &str) -> Result<String> {
    Ok(bv_codec::encode_string_as_message(text)?)
}

/// Decode a message and assemble it into one expression tree.
///
/// Fails unless the message is exactly one expression.
pub fn decode(wire: &str) -> Result<(ExprArena, ExprId)> {
    let atoms = bv_codec::tokenize(wire)?;
    debug!(tokens = atoms.len(), "decoded message");
    Ok(bv_parse::parse_program(&atoms)?)
}

/// Decode and evaluate a program with the default configuration.
pub fn evaluate_program(wire: &str) -> Result<Value> {
    evaluate_program_with(wire, &EvalConfig::default())
}

/// Decode and evaluate a program in a fresh interpreter.
pub fn evaluate_program_with(wire: &str, config: &EvalConfig) -> Result<Value> {
    let (arena, root) = decode(wire)?;
    let mut interpreter = Interpreter::with_cache_mode(&arena, config.cache);
    Ok(interpreter.eval_program(root)?)
}

/// Flatten an expression tree back into wire text.
pub fn encode_expr(arena: &ExprArena, root: ExprId) -> Result<String> {
    Ok(bv_codec::encode_atoms(&arena.flatten(root))?)
}

/// Encode a value as wire text.
///
/// A closure is written as the source of its lambda, which is only faithful
/// when the lambda has no free variables; anything else is
/// [`Error::OpenClosure`].
pub fn encode_value(value: &Value, arena: &ExprArena) -> Result<String> {
    let atom = match value {
        Value::Bool(b) => Atom::Bool(*b),
        Value::Int(i) => Atom::Int(i.clone()),
        Value::Str(s) => Atom::Str(s.to_string()),
        Value::Closure(closure) => {
            if !FreeVars::new().is_closed(arena, closure.lambda) {
                return Err(Error::OpenClosure);
            }
            return encode_expr(arena, closure.lambda);
        }
    };
    Ok(bv_codec::encode_atom(&atom)?)
}

/// Render a program in lambda notation.
pub fn render(wire: &str) -> Result<String> {
    let (arena, root) = decode(wire)?;
    Ok(bv_ir::render_lambda(&arena, root))
}
