//! Environment-based call-by-need interpreter.
//!
//! # Evaluation rules
//!
//! - Literals evaluate to themselves; a lambda evaluates to a closure over
//!   the current environment.
//! - A variable forces the thunk it is bound to. The first force evaluates
//!   the thunk's expression in the thunk's own environment; every later
//!   force reuses that value.
//! - `f a` evaluates `f` to a closure, binds the closure's parameter to an
//!   unevaluated thunk of `a` (in the caller's environment) and evaluates the
//!   body. This is the only rule the [`ReductionCache`] intercepts.
//! - `? t a b` evaluates exactly one branch.
//! - Every other binary operator is strict in both operands, except that
//!   multiplication evaluates its right operand first and yields `0` without
//!   touching the left one when the right one is `0`.

use std::rc::Rc;

use bv_ir::{BinaryOp, Expr, ExprArena, ExprId, VarName};
use bv_stack::ensure_sufficient_stack;
use num_bigint::BigInt;
use num_traits::Zero;
use tracing::{debug, trace};

use crate::errors::{infinite_recursion, type_mismatch, unbound_variable};
use crate::environment::ThunkState;
use crate::{
    evaluate_binary, evaluate_unary, CacheMode, CacheStats, Environment, EvalResult,
    ReductionCache, Thunk, ThunkId, Value,
};

/// One evaluation context: an arena, its reduction cache, and the thunk id
/// counter. Build a fresh interpreter for every program run.
pub struct Interpreter<'a> {
    arena: &'a ExprArena,
    cache: Option<ReductionCache>,
    next_thunk: u64,
    reductions: u64,
}

impl<'a> Interpreter<'a> {
    /// An interpreter with the reduction cache enabled.
    pub fn new(arena: &'a ExprArena) -> Self {
        Self::with_cache_mode(arena, CacheMode::default())
    }

    pub fn with_cache_mode(arena: &'a ExprArena, mode: CacheMode) -> Self {
        Interpreter {
            arena,
            cache: mode.is_enabled().then(ReductionCache::new),
            next_thunk: 0,
            reductions: 0,
        }
    }

    /// Number of beta-reductions performed so far, cache hits excluded.
    pub fn reductions(&self) -> u64 {
        self.reductions
    }

    /// Cache counters, or `None` when the cache is disabled.
    pub fn cache_stats(&self) -> Option<CacheStats> {
        self.cache.as_ref().map(ReductionCache::stats)
    }

    /// Evaluate a closed program.
    #[tracing::instrument(level = "debug", skip_all, fields(root = root.raw(), cached = self.cache.is_some()))]
    pub fn eval_program(&mut self, root: ExprId) -> EvalResult<Value> {
        let result = self.eval(root, &Environment::empty());

        let stats = self.cache_stats().unwrap_or_default();
        debug!(
            reductions = self.reductions,
            thunks = self.next_thunk,
            cache_hits = stats.hits,
            cache_misses = stats.misses,
            cache_entries = stats.entries,
            ok = result.is_ok(),
            "evaluation finished"
        );
        result
    }

    /// Evaluate `id` under `env`.
    pub fn eval(&mut self, id: ExprId, env: &Environment) -> EvalResult<Value> {
        ensure_sufficient_stack(|| self.eval_inner(id, env))
    }

    fn eval_inner(&mut self, id: ExprId, env: &Environment) -> EvalResult<Value> {
        match self.arena.get(id) {
            Expr::Bool(b) => Ok(Value::Bool(*b)),
            Expr::Int(i) => Ok(Value::Int(i.clone())),
            Expr::Str(s) => Ok(Value::Str(Rc::clone(s))),
            Expr::Lambda { param, body } => Ok(Value::closure(id, *param, *body, env.clone())),
            Expr::Var(name) => self.lookup(*name, env),
            Expr::If {
                test,
                then_branch,
                else_branch,
            } => match self.eval(*test, env)? {
                Value::Bool(true) => self.eval(*then_branch, env),
                Value::Bool(false) => self.eval(*else_branch, env),
                other => Err(type_mismatch("conditional", "bool", other.type_name())),
            },
            Expr::Unary { op, operand } => {
                let operand = self.eval(*operand, env)?;
                evaluate_unary(*op, operand)
            }
            Expr::Binary {
                op: BinaryOp::Apply,
                left,
                right,
            } => self.apply(*left, *right, env),
            Expr::Binary {
                op: BinaryOp::Mul,
                left,
                right,
            } => {
                // `f n * 0` must not evaluate `f n`: a fixed-point recursion on
                // the left may have no base case, and only the zero on the
                // right lets such programs finish.
                let right = self.eval(*right, env)?;
                if matches!(&right, Value::Int(n) if n.is_zero()) {
                    return Ok(Value::Int(BigInt::zero()));
                }
                let left = self.eval(*left, env)?;
                evaluate_binary(BinaryOp::Mul, left, right)
            }
            Expr::Binary { op, left, right } => {
                let left = self.eval(*left, env)?;
                let right = self.eval(*right, env)?;
                evaluate_binary(*op, left, right)
            }
        }
    }

    fn lookup(&mut self, name: VarName, env: &Environment) -> EvalResult<Value> {
        let Some(thunk) = env.lookup(name) else {
            return Err(unbound_variable(self.arena.var_id(name)));
        };
        self.force(name, thunk)
    }

    /// Evaluate a thunk, or return the value it already holds.
    fn force(&mut self, name: VarName, thunk: &Thunk) -> EvalResult<Value> {
        let (expr, thunk_env) = match thunk.state.replace(ThunkState::Forcing) {
            ThunkState::Done(value) => {
                *thunk.state.borrow_mut() = ThunkState::Done(value.clone());
                return Ok(value);
            }
            ThunkState::Forcing => return Err(infinite_recursion(self.arena.var_id(name))),
            ThunkState::Pending { expr, env } => (expr, env),
        };

        trace!(thunk = thunk.id().raw(), expr = expr.raw(), "forcing thunk");
        match self.eval(expr, &thunk_env) {
            Ok(value) => {
                *thunk.state.borrow_mut() = ThunkState::Done(value.clone());
                Ok(value)
            }
            Err(err) => {
                *thunk.state.borrow_mut() = ThunkState::Pending {
                    expr,
                    env: thunk_env,
                };
                Err(err)
            }
        }
    }

    fn apply(&mut self, function: ExprId, argument: ExprId, env: &Environment) -> EvalResult<Value> {
        let key = match &mut self.cache {
            Some(cache) => cache.key(self.arena, function, argument, env),
            None => None,
        };
        if let (Some(key), Some(cache)) = (&key, &mut self.cache) {
            if let Some(value) = cache.get(key) {
                trace!(function = function.raw(), argument = argument.raw(), "reduction cache hit");
                return Ok(value);
            }
        }

        let closure = match self.eval(function, env)? {
            Value::Closure(closure) => closure,
            other => return Err(type_mismatch("application", "closure", other.type_name())),
        };

        self.reductions += 1;
        let thunk = self.new_thunk(argument, env.clone());
        let body_env = closure.env.bind(closure.param, thunk);
        let result = self.eval(closure.body, &body_env)?;

        if let (Some(key), Some(cache)) = (key, &mut self.cache) {
            cache.insert(key, result.clone());
        }
        Ok(result)
    }

    fn new_thunk(&mut self, expr: ExprId, env: Environment) -> Rc<Thunk> {
        let id = ThunkId::new(self.next_thunk);
        self.next_thunk += 1;
        Rc::new(Thunk::new(id, expr, env))
    }
}

/// Evaluate a closed program with a fresh interpreter.
pub fn evaluate(arena: &ExprArena, root: ExprId, mode: CacheMode) -> EvalResult<Value> {
    Interpreter::with_cache_mode(arena, mode).eval_program(root)
}
