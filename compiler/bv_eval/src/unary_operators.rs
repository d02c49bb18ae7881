//! Unary operators.

use std::rc::Rc;

use bv_codec::{alphabet_string_to_int, int_to_alphabet_string};
use bv_ir::UnaryOp;
use num_bigint::{BigInt, Sign};

use crate::errors::{negative_conversion, type_mismatch};
use crate::{EvalResult, Value};

/// Apply a unary operator to an evaluated operand.
pub fn evaluate_unary(op: UnaryOp, operand: Value) -> EvalResult<Value> {
    match (op, &operand) {
        (UnaryOp::Neg, Value::Int(n)) => Ok(Value::Int(-n)),
        (UnaryOp::Not, Value::Bool(b)) => Ok(Value::Bool(!b)),
        (UnaryOp::IntToStr, Value::Int(n)) => {
            let Some(magnitude) = n.to_biguint() else {
                return Err(negative_conversion(n));
            };
            Ok(Value::Str(Rc::from(int_to_alphabet_string(&magnitude))))
        }
        (UnaryOp::StrToInt, Value::Str(s)) => {
            let n = alphabet_string_to_int(s)?;
            Ok(Value::Int(BigInt::from_biguint(Sign::Plus, n)))
        }
        _ => Err(invalid_unary_op(op, &operand)),
    }
}

#[cold]
fn invalid_unary_op(op: UnaryOp, operand: &Value) -> crate::EvalError {
    let expected = match op {
        UnaryOp::Neg | UnaryOp::IntToStr => "int",
        UnaryOp::Not => "bool",
        UnaryOp::StrToInt => "string",
    };
    type_mismatch(op.name(), expected, operand.type_name())
}
