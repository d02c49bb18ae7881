//! Substitution-based reference evaluator.
//!
//! Reduces closed programs leftmost-outermost, rebuilding the tree with each
//! argument substituted for its parameter. Evaluation never goes under a
//! lambda, so every substituted argument is closed and naive substitution
//! cannot capture. Nothing is shared between uses of an argument, which
//! makes this exponentially slower than the interpreter on programs that
//! duplicate work.

#![allow(clippy::unwrap_used, clippy::expect_used)]

use bv_ir::{BinaryOp, Expr, ExprArena, ExprId, VarName};
use bv_stack::ensure_sufficient_stack;
use num_bigint::BigInt;
use num_traits::Zero;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::{program, run_with};
use crate::errors::{type_mismatch, unbound_variable};
use crate::{evaluate_binary, evaluate_unary, CacheMode, Environment, EvalResult, Value};

struct Oracle {
    arena: ExprArena,
}

impl Oracle {
    fn new(arena: &ExprArena) -> Self {
        Oracle {
            arena: arena.clone(),
        }
    }

    fn eval(&mut self, id: ExprId) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match self.arena.get(id).clone() {
            Expr::Bool(b) => Ok(Value::Bool(b)),
            Expr::Int(i) => Ok(Value::Int(i)),
            Expr::Str(s) => Ok(Value::Str(s)),
            Expr::Lambda { param, body } => Ok(Value::closure(id, param, body, Environment::empty())),
            Expr::Var(name) => Err(unbound_variable(self.arena.var_id(name))),
            Expr::If {
                test,
                then_branch,
                else_branch,
            } => match self.eval(test)? {
                Value::Bool(true) => self.eval(then_branch),
                Value::Bool(false) => self.eval(else_branch),
                other => Err(type_mismatch("conditional", "bool", other.type_name())),
            },
            Expr::Unary { op, operand } => {
                let operand = self.eval(operand)?;
                evaluate_unary(op, operand)
            }
            Expr::Binary {
                op: BinaryOp::Apply,
                left,
                right,
            } => match self.eval(left)? {
                Value::Closure(closure) => {
                    let reduced = self.substitute(closure.body, closure.param, right);
                    self.eval(reduced)
                }
                other => Err(type_mismatch("application", "closure", other.type_name())),
            },
            Expr::Binary {
                op: BinaryOp::Mul,
                left,
                right,
            } => {
                let right = self.eval(right)?;
                if matches!(&right, Value::Int(n) if n.is_zero()) {
                    return Ok(Value::Int(BigInt::zero()));
                }
                let left = self.eval(left)?;
                evaluate_binary(BinaryOp::Mul, left, right)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(left)?;
                let right = self.eval(right)?;
                evaluate_binary(op, left, right)
            }
        })
    }

    /// Replace free occurrences of `name` in `id` with `arg`, sharing every
    /// subtree that does not mention `name`.
    fn substitute(&mut self, id: ExprId, name: VarName, arg: ExprId) -> ExprId {
        ensure_sufficient_stack(|| match self.arena.get(id).clone() {
            Expr::Var(var) if var == name => arg,
            Expr::Bool(_) | Expr::Int(_) | Expr::Str(_) | Expr::Var(_) => id,
            Expr::Lambda { param, .. } if param == name => id,
            Expr::Lambda { param, body } => {
                let new_body = self.substitute(body, name, arg);
                if new_body == body {
                    id
                } else {
                    self.arena.alloc(Expr::Lambda {
                        param,
                        body: new_body,
                    })
                }
            }
            Expr::Unary { op, operand } => {
                let new_operand = self.substitute(operand, name, arg);
                if new_operand == operand {
                    id
                } else {
                    self.arena.unary(op, new_operand)
                }
            }
            Expr::Binary { op, left, right } => {
                let new_left = self.substitute(left, name, arg);
                let new_right = self.substitute(right, name, arg);
                if (new_left, new_right) == (left, right) {
                    id
                } else {
                    self.arena.binary(op, new_left, new_right)
                }
            }
            Expr::If {
                test,
                then_branch,
                else_branch,
            } => {
                let new = (
                    self.substitute(test, name, arg),
                    self.substitute(then_branch, name, arg),
                    self.substitute(else_branch, name, arg),
                );
                if new == (test, then_branch, else_branch) {
                    id
                } else {
                    self.arena.if_(new.0, new.1, new.2)
                }
            }
        })
    }
}

fn oracle(wire: &str) -> EvalResult<Value> {
    let (arena, root) = program(wire);
    Oracle::new(&arena).eval(root)
}

/// `n` nested applications of `x -> 4x` to 1.
fn quadrupling(n: usize) -> String {
    format!("B$ L! {}I\" L! B+ B+ v! v! B+ v! v!", "B$ v! ".repeat(n))
}

const AGREEMENT: &[&str] = &[
    // factorial 5
    "B$ B$ L\" B$ L# B$ v\" B$ v# v# L# B$ v\" B$ v# v# L$ L% ? B= v% I! I\" B* v% B$ v$ B- v% I\" I&",
    // 7c + (unbounded recursion * 0)
    "B+ I7c B* B$ B$ L\" B$ L# B$ v\" B$ v# v# L# B$ v\" B$ v# v# L$ L% ? B= v% I! I\" B+ I\" B$ v$ B- v% I\" I\":c1+0 I!",
    "? T I\" B/ I\" I!",
    "B$ L\" I# B/ I\" I!",
    "B$ B$ L\" L# v\" I$ I%",
    "B$ L\" B$ L\" v\" I# I$",
    "B. S4% S34",
    "U$ I4%34",
    "BT I$ S4%34",
    "BD I$ S4%34",
    "B$ L# B$ L\" B+ v\" v\" B* I$ v# I%",
    // errors agree too
    "B$ I\" I#",
    "? I\" I# I$",
    "B+ I\" v#",
    "B/ I\" I!",
];

#[test]
fn test_oracle_agrees_on_fixtures() {
    for wire in AGREEMENT {
        let expected = oracle(wire);
        assert_eq!(run_with(wire, CacheMode::Enabled), expected, "cached: {wire}");
        assert_eq!(run_with(wire, CacheMode::Disabled), expected, "uncached: {wire}");
    }
}

#[test]
fn test_oracle_agrees_on_small_quadrupling() {
    let wire = quadrupling(5);
    assert_eq!(oracle(&wire), Ok(Value::from(1024)));
    assert_eq!(run_with(&wire, CacheMode::Enabled), Ok(Value::from(1024)));
}

#[test]
fn test_oracle_factorial() {
    assert_eq!(oracle(AGREEMENT[0]), Ok(Value::from(120)));
}

/// Small integer programs with `let`-style bindings, possibly ill-scoped or
/// dividing by zero.
#[derive(Clone, Debug)]
enum Gen {
    Int(i64),
    Var(u8),
    Op(BinaryOp, Box<Gen>, Box<Gen>),
    IfLess(Box<Gen>, Box<Gen>, Box<Gen>, Box<Gen>),
    Let(u8, Box<Gen>, Box<Gen>),
}

impl Gen {
    fn wire(&self, out: &mut String) {
        match self {
            Gen::Int(n) if *n < 0 => {
                out.push_str("U- ");
                Gen::Int(-n).wire(out);
            }
            Gen::Int(n) => {
                let digits = bv_codec::encode_integer(&num_bigint::BigUint::from(n.unsigned_abs()));
                out.push_str(&format!("I{digits} "));
            }
            Gen::Var(id) => out.push_str(&format!("v{} ", char::from(b'!' + id))),
            Gen::Op(op, left, right) => {
                out.push_str(&format!("B{} ", op.as_symbol()));
                left.wire(out);
                right.wire(out);
            }
            Gen::IfLess(a, b, then, other) => {
                out.push_str("? B< ");
                a.wire(out);
                b.wire(out);
                then.wire(out);
                other.wire(out);
            }
            Gen::Let(id, value, body) => {
                out.push_str(&format!("B$ L{} ", char::from(b'!' + id)));
                body.wire(out);
                value.wire(out);
            }
        }
    }
}

fn gen_program() -> impl Strategy<Value = Gen> {
    let leaf = prop_oneof![
        (-20i64..20).prop_map(Gen::Int),
        (0u8..3).prop_map(Gen::Var),
    ];
    leaf.prop_recursive(5, 48, 4, |inner| {
        prop_oneof![
            (
                prop::sample::select(vec![
                    BinaryOp::Add,
                    BinaryOp::Sub,
                    BinaryOp::Mul,
                    BinaryOp::Div,
                    BinaryOp::Mod,
                ]),
                inner.clone(),
                inner.clone()
            )
                .prop_map(|(op, l, r)| Gen::Op(op, Box::new(l), Box::new(r))),
            (inner.clone(), inner.clone(), inner.clone(), inner.clone()).prop_map(
                |(a, b, t, e)| Gen::IfLess(Box::new(a), Box::new(b), Box::new(t), Box::new(e))
            ),
            (0u8..3, inner.clone(), inner)
                .prop_map(|(id, v, b)| Gen::Let(id, Box::new(v), Box::new(b))),
        ]
    })
}

proptest! {
    #[test]
    fn interpreter_matches_oracle(generated in gen_program()) {
        let mut wire = String::new();
        generated.wire(&mut wire);

        let expected = oracle(&wire);
        prop_assert_eq!(run_with(&wire, CacheMode::Enabled), expected.clone());
        prop_assert_eq!(run_with(&wire, CacheMode::Disabled), expected);
    }
}
