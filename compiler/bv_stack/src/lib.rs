//! Stack growth for deep recursion.
//!
//! Programs in the token language express loops as self-application through
//! a fixed-point combinator, so a modest input can turn into tens of
//! thousands of nested `apply` reductions. The assembler and the evaluator
//! both recurse on the tree; wrapping each recursive step in
//! [`ensure_sufficient_stack`] moves the limit from the thread's stack size
//! to available memory.
//!
//! - **Native targets**: `stacker::maybe_grow` allocates a new segment when
//!   less than [`RED_ZONE`] bytes remain.
//! - **WASM targets**: plain call.

/// Minimum stack space to keep available (256KB red zone).
///
/// One evaluator frame plus a thunk force plus an operator call can use a
/// few kilobytes in debug builds; this leaves room for several of them.
pub const RED_ZONE: usize = 256 * 1024;

/// Stack space to allocate when growing (2MB).
pub const STACK_PER_RECURSION: usize = 2 * 1024 * 1024;

/// Ensure sufficient stack space is available before executing `f`.
#[inline]
#[cfg(not(target_arch = "wasm32"))]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    stacker::maybe_grow(RED_ZONE, STACK_PER_RECURSION, f)
}

/// WASM version - just call directly (WASM has its own stack management).
#[inline]
#[cfg(target_arch = "wasm32")]
pub fn ensure_sufficient_stack<R>(f: impl FnOnce() -> R) -> R {
    f()
}
