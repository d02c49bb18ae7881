//! Reduction cache.
//!
//! Memoizes applications `f a` by the identity of the two operand nodes plus
//! the thunks their free variables are bound to. Evaluation is pure and a
//! thunk id is never reused within one run, so two applications with equal
//! keys always reduce to the same value.
//!
//! The cache belongs to one [`Interpreter`](crate::Interpreter) and dies with
//! it: thunk ids from different runs are unrelated.

use std::rc::Rc;

use bv_ir::{Expr, ExprArena, ExprId, VarName};
use bv_stack::ensure_sufficient_stack;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::{Environment, ThunkId, Value};

/// Whether the interpreter memoizes applications.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum CacheMode {
    #[default]
    Enabled,
    Disabled,
}

impl CacheMode {
    pub fn is_enabled(self) -> bool {
        matches!(self, CacheMode::Enabled)
    }
}

/// Key of one memoized application.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct CacheKey {
    function: ExprId,
    argument: ExprId,
    /// Thunks bound to the free variables of both operands, in `VarName`
    /// order.
    bindings: SmallVec<[ThunkId; 4]>,
}

/// Hit/miss counters for one run.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub struct CacheStats {
    pub hits: u64,
    pub misses: u64,
    pub entries: usize,
}

/// Memo table for applications, plus the free-variable analysis it needs.
#[derive(Debug, Default)]
pub struct ReductionCache {
    results: FxHashMap<CacheKey, Value>,
    free_vars: FreeVars,
    hits: u64,
    misses: u64,
}

impl ReductionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build the key for applying `function` to `argument` under `env`.
    ///
    /// Returns `None` when some free variable is unbound; evaluation will
    /// report that, and there is nothing worth caching.
    pub fn key(
        &mut self,
        arena: &ExprArena,
        function: ExprId,
        argument: ExprId,
        env: &Environment,
    ) -> Option<CacheKey> {
        let left = self.free_vars.of(arena, function);
        let right = self.free_vars.of(arena, argument);

        let mut bindings = SmallVec::with_capacity(left.len() + right.len());
        for name in merge_sorted(&left, &right) {
            bindings.push(env.lookup(name)?.id());
        }

        Some(CacheKey {
            function,
            argument,
            bindings,
        })
    }

    pub fn get(&mut self, key: &CacheKey) -> Option<Value> {
        let value = self.results.get(key).cloned();
        if value.is_some() {
            self.hits += 1;
        } else {
            self.misses += 1;
        }
        value
    }

    pub fn insert(&mut self, key: CacheKey, value: Value) {
        self.results.insert(key, value);
    }

    pub fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            entries: self.results.len(),
        }
    }
}

/// Union of two sorted, deduplicated name lists, still sorted.
fn merge_sorted(a: &[VarName], b: &[VarName]) -> impl Iterator<Item = VarName> {
    let mut merged: SmallVec<[VarName; 8]> = SmallVec::with_capacity(a.len() + b.len());
    let (mut i, mut j) = (0, 0);
    while i < a.len() && j < b.len() {
        match a[i].cmp(&b[j]) {
            std::cmp::Ordering::Less => {
                merged.push(a[i]);
                i += 1;
            }
            std::cmp::Ordering::Greater => {
                merged.push(b[j]);
                j += 1;
            }
            std::cmp::Ordering::Equal => {
                merged.push(a[i]);
                i += 1;
                j += 1;
            }
        }
    }
    merged.extend_from_slice(&a[i..]);
    merged.extend_from_slice(&b[j..]);
    merged.into_iter()
}

/// Memoized free-variable sets, sorted and deduplicated.
#[derive(Debug, Default)]
pub struct FreeVars {
    memo: FxHashMap<ExprId, Rc<[VarName]>>,
}

impl FreeVars {
    pub fn new() -> Self {
        Self::default()
    }

    /// Free variables of the tree rooted at `id`.
    pub fn of(&mut self, arena: &ExprArena, id: ExprId) -> Rc<[VarName]> {
        if let Some(names) = self.memo.get(&id) {
            return Rc::clone(names);
        }

        let names: Rc<[VarName]> = ensure_sufficient_stack(|| match arena.get(id) {
            Expr::Bool(_) | Expr::Int(_) | Expr::Str(_) => Rc::from(Vec::new()),
            Expr::Var(name) => Rc::from(vec![*name]),
            Expr::Unary { operand, .. } => self.of(arena, *operand),
            Expr::Binary { left, right, .. } => {
                let left = self.of(arena, *left);
                let right = self.of(arena, *right);
                merge_sorted(&left, &right).collect()
            }
            Expr::If {
                test,
                then_branch,
                else_branch,
            } => {
                let test = self.of(arena, *test);
                let then_branch = self.of(arena, *then_branch);
                let else_branch = self.of(arena, *else_branch);
                let partial: SmallVec<[VarName; 8]> = merge_sorted(&test, &then_branch).collect();
                merge_sorted(&partial, &else_branch).collect()
            }
            Expr::Lambda { param, body } => self
                .of(arena, *body)
                .iter()
                .copied()
                .filter(|name| name != param)
                .collect(),
        });

        self.memo.insert(id, Rc::clone(&names));
        names
    }

    /// Whether the tree rooted at `id` has no free variables.
    pub fn is_closed(&mut self, arena: &ExprArena, id: ExprId) -> bool {
        self.of(arena, id).is_empty()
    }
}

#[cfg(test)]
mod tests;
