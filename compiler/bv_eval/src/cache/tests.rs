#![allow(clippy::unwrap_used, clippy::expect_used)]

use bv_ir::{BinaryOp, ExprArena, VarId};
use pretty_assertions::assert_eq;

use super::*;
use crate::Thunk;

fn name(arena: &mut ExprArena, id: u64) -> VarName {
    arena.intern(&VarId::from(id))
}

#[test]
fn test_free_vars_of_leaves() {
    let mut arena = ExprArena::new();
    let int = arena.int(3);
    let var = arena.var(1);
    let x = name(&mut arena, 1);
    let mut free = FreeVars::new();

    assert!(free.of(&arena, int).is_empty());
    assert_eq!(&*free.of(&arena, var), &[x]);
}

#[test]
fn test_lambda_binds_its_parameter() {
    // L" B+ v" v#  ==>  free: {v#}
    let mut arena = ExprArena::new();
    let bound = arena.var(1);
    let free_var = arena.var(2);
    let body = arena.binary(BinaryOp::Add, bound, free_var);
    let lambda = arena.lambda(1, body);
    let y = name(&mut arena, 2);
    let mut free = FreeVars::new();

    assert_eq!(&*free.of(&arena, lambda), &[y]);
    assert!(!free.is_closed(&arena, lambda));
}

#[test]
fn test_free_vars_are_sorted_and_deduplicated() {
    let mut arena = ExprArena::new();
    let z = arena.var(3);
    let x = arena.var(1);
    let z_again = arena.var(3);
    let test = arena.binary(BinaryOp::Lt, z, x);
    let two = arena.int(2);
    let cond = arena.if_(test, z_again, two);
    let mut free = FreeVars::new();

    let names = free.of(&arena, cond);
    assert_eq!(names.len(), 2);
    assert!(names[0] < names[1]);
}

#[test]
fn test_closed_program() {
    let mut arena = ExprArena::new();
    let body = arena.var(1);
    let identity = arena.lambda(1, body);
    let arg = arena.int(1);
    let app = arena.apply(identity, arg);
    let mut free = FreeVars::new();

    assert!(free.is_closed(&arena, app));
}

#[test]
fn test_key_tracks_bound_thunks() {
    let mut arena = ExprArena::new();
    let f = arena.var(1);
    let a = arena.var(2);
    let f_name = name(&mut arena, 1);
    let a_name = name(&mut arena, 2);

    let thunk = |id| Rc::new(Thunk::evaluated(ThunkId::new(id), Value::from(0)));
    let env_one = Environment::empty()
        .bind(f_name, thunk(10))
        .bind(a_name, thunk(11));
    let env_two = Environment::empty()
        .bind(f_name, thunk(10))
        .bind(a_name, thunk(12));

    let mut cache = ReductionCache::new();
    let first = cache.key(&arena, f, a, &env_one).unwrap();
    let again = cache.key(&arena, f, a, &env_one).unwrap();
    let second = cache.key(&arena, f, a, &env_two).unwrap();

    assert_eq!(first, again);
    assert_ne!(first, second);
}

#[test]
fn test_key_ignores_bindings_of_closed_operands() {
    let mut arena = ExprArena::new();
    let body = arena.var(1);
    let identity = arena.lambda(1, body);
    let arg = arena.int(5);
    let unrelated = name(&mut arena, 9);

    let env = Environment::empty().bind(
        unrelated,
        Rc::new(Thunk::evaluated(ThunkId::new(0), Value::from(1))),
    );

    let mut cache = ReductionCache::new();
    assert_eq!(
        cache.key(&arena, identity, arg, &env),
        cache.key(&arena, identity, arg, &Environment::empty()),
    );
}

#[test]
fn test_key_requires_every_free_variable() {
    let mut arena = ExprArena::new();
    let f = arena.var(1);
    let a = arena.int(1);

    let mut cache = ReductionCache::new();
    assert!(cache.key(&arena, f, a, &Environment::empty()).is_none());
}

#[test]
fn test_hits_and_misses_are_counted() {
    let mut arena = ExprArena::new();
    let f = arena.int(1);
    let a = arena.int(2);
    let mut cache = ReductionCache::new();
    let key = cache.key(&arena, f, a, &Environment::empty()).unwrap();

    assert_eq!(cache.get(&key), None);
    cache.insert(key.clone(), Value::from(42));
    assert_eq!(cache.get(&key), Some(Value::from(42)));

    assert_eq!(
        cache.stats(),
        CacheStats {
            hits: 1,
            misses: 1,
            entries: 1,
        }
    );
}

#[test]
fn test_cache_mode_default_is_enabled() {
    assert!(CacheMode::default().is_enabled());
    assert!(!CacheMode::Disabled.is_enabled());
}
