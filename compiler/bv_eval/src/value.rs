//! Runtime values.

use std::fmt;
use std::rc::Rc;

use bv_ir::{ExprId, VarName};
use num_bigint::BigInt;

use crate::Environment;

/// A fully evaluated value.
#[derive(Clone, Debug)]
pub enum Value {
    Bool(bool),
    Int(BigInt),
    Str(Rc<str>),
    Closure(Rc<Closure>),
}

/// A lambda paired with the environment it was evaluated in.
#[derive(Debug)]
pub struct Closure {
    /// The `Lambda` node this closure was created from.
    pub lambda: ExprId,
    pub param: VarName,
    pub body: ExprId,
    pub env: Environment,
}

impl Value {
    /// Name of this value's kind, as used in error messages.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Str(_) => "string",
            Value::Closure(_) => "closure",
        }
    }

    pub fn closure(lambda: ExprId, param: VarName, body: ExprId, env: Environment) -> Self {
        Value::Closure(Rc::new(Closure {
            lambda,
            param,
            body,
            env,
        }))
    }
}

/// Booleans, integers and strings compare by value. Closures are never equal
/// to anything, themselves included.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Bool(a), Value::Bool(b)) => a == b,
            (Value::Int(a), Value::Int(b)) => a == b,
            (Value::Str(a), Value::Str(b)) => a == b,
            _ => false,
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<BigInt> for Value {
    fn from(i: BigInt) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(BigInt::from(i))
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(BigInt::from(i))
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(Rc::from(s))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => f.write_str(s),
            Value::Closure(closure) => write!(f, "<closure @{}>", closure.lambda.raw()),
        }
    }
}
