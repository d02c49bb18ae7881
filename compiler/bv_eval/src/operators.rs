//! Strict binary operators.
//!
//! Application is not here: it is the one binary form whose operands are not
//! both evaluated first, and it lives in the interpreter. Multiplication's
//! zero short-circuit is also decided by the interpreter before both sides
//! reach this table.

use std::rc::Rc;

use bv_ir::BinaryOp;
use num_bigint::BigInt;
use num_traits::{ToPrimitive, Zero};

use crate::errors::{division_by_zero, index_out_of_range, type_mismatch};
use crate::{EvalResult, Value};

/// Apply a strict binary operator to two evaluated operands.
///
/// [`BinaryOp::Apply`] is rejected with a type mismatch; the interpreter
/// handles application itself.
pub fn evaluate_binary(op: BinaryOp, left: Value, right: Value) -> EvalResult<Value> {
    match op {
        BinaryOp::Add => int_op(op, &left, &right, |a, b| Ok(a + b)),
        BinaryOp::Sub => int_op(op, &left, &right, |a, b| Ok(a - b)),
        BinaryOp::Mul => int_op(op, &left, &right, |a, b| Ok(a * b)),
        // BigInt division truncates toward zero and the remainder takes the
        // sign of the dividend.
        BinaryOp::Div => int_op(op, &left, &right, |a, b| {
            if b.is_zero() {
                return Err(division_by_zero("division"));
            }
            Ok(a / b)
        }),
        BinaryOp::Mod => int_op(op, &left, &right, |a, b| {
            if b.is_zero() {
                return Err(division_by_zero("modulo"));
            }
            Ok(a % b)
        }),
        BinaryOp::Lt => int_cmp(op, &left, &right, |a, b| a < b),
        BinaryOp::Gt => int_cmp(op, &left, &right, |a, b| a > b),
        BinaryOp::Eq => Ok(Value::Bool(left == right)),
        BinaryOp::Or => bool_op(op, &left, &right, |a, b| a || b),
        BinaryOp::And => bool_op(op, &left, &right, |a, b| a && b),
        BinaryOp::Concat => {
            let (a, b) = strings(op, &left, &right)?;
            let mut joined = String::with_capacity(a.len() + b.len());
            joined.push_str(a);
            joined.push_str(b);
            Ok(Value::Str(Rc::from(joined)))
        }
        BinaryOp::Take => {
            let (n, s) = count_and_string(op, &left, &right)?;
            let split = split_point(op, n, s)?;
            Ok(Value::Str(Rc::from(&s[..split])))
        }
        BinaryOp::Drop => {
            let (n, s) = count_and_string(op, &left, &right)?;
            let split = split_point(op, n, s)?;
            Ok(Value::Str(Rc::from(&s[split..])))
        }
        // Application needs its argument unevaluated, so an already evaluated
        // pair can never be applied here.
        BinaryOp::Apply => Err(type_mismatch(op.name(), "unevaluated argument", right.type_name())),
    }
}

fn int_op(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    f: impl FnOnce(&BigInt, &BigInt) -> EvalResult<BigInt>,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => f(a, b).map(Value::Int),
        _ => Err(mismatch(op, "int", left, right)),
    }
}

fn int_cmp(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    f: impl FnOnce(&BigInt, &BigInt) -> bool,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Int(a), Value::Int(b)) => Ok(Value::Bool(f(a, b))),
        _ => Err(mismatch(op, "int", left, right)),
    }
}

fn bool_op(
    op: BinaryOp,
    left: &Value,
    right: &Value,
    f: impl FnOnce(bool, bool) -> bool,
) -> EvalResult<Value> {
    match (left, right) {
        (Value::Bool(a), Value::Bool(b)) => Ok(Value::Bool(f(*a, *b))),
        _ => Err(mismatch(op, "bool", left, right)),
    }
}

fn strings<'v>(op: BinaryOp, left: &'v Value, right: &'v Value) -> EvalResult<(&'v str, &'v str)> {
    match (left, right) {
        (Value::Str(a), Value::Str(b)) => Ok((a, b)),
        _ => Err(mismatch(op, "string", left, right)),
    }
}

fn count_and_string<'v>(
    op: BinaryOp,
    left: &'v Value,
    right: &'v Value,
) -> EvalResult<(&'v BigInt, &'v str)> {
    match (left, right) {
        (Value::Int(n), Value::Str(s)) => Ok((n, s)),
        (Value::Int(_), other) => Err(type_mismatch(op.name(), "string", other.type_name())),
        (other, _) => Err(type_mismatch(op.name(), "int", other.type_name())),
    }
}

/// Byte offset after the first `n` characters of `s`, if `0 <= n <= len`.
fn split_point(op: BinaryOp, n: &BigInt, s: &str) -> EvalResult<usize> {
    let len = s.chars().count();
    match n.to_usize() {
        Some(count) if count <= len => Ok(s
            .char_indices()
            .nth(count)
            .map_or(s.len(), |(offset, _)| offset)),
        _ => Err(index_out_of_range(op.name(), n, len)),
    }
}

/// Report whichever operand has the wrong kind, the left one first.
#[cold]
fn mismatch(op: BinaryOp, expected: &'static str, left: &Value, right: &Value) -> crate::EvalError {
    let found = if left.type_name() == expected {
        right.type_name()
    } else {
        left.type_name()
    };
    type_mismatch(op.name(), expected, found)
}
