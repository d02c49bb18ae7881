//! Expression nodes.

use std::rc::Rc;

use num_bigint::BigInt;

use crate::{BinaryOp, ExprId, UnaryOp, VarName};

/// An assembled expression node. Children live in the same arena.
///
/// String payloads are reference-counted so evaluating a literal never copies
/// its text.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Expr {
    Bool(bool),
    Int(BigInt),
    Str(Rc<str>),
    Unary {
        op: UnaryOp,
        operand: ExprId,
    },
    Binary {
        op: BinaryOp,
        left: ExprId,
        right: ExprId,
    },
    If {
        test: ExprId,
        then_branch: ExprId,
        else_branch: ExprId,
    },
    Lambda {
        param: VarName,
        body: ExprId,
    },
    Var(VarName),
}
