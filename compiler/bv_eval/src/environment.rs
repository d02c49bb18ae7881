//! Persistent environments and call-by-need thunks.
//!
//! An [`Environment`] is a linked chain of immutable frames. Binding a name
//! allocates one new frame that points at the old chain, so a closure that
//! captured the old chain never observes later bindings and extending an
//! environment costs O(1) regardless of its size.
//!
//! Each frame binds a [`VarName`] to a shared [`Thunk`]: the argument
//! expression plus the environment it must be evaluated in. Thunks are
//! forced at most once; after that they hold their value.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use bv_ir::{ExprId, VarName};

use crate::Value;

/// Identity of a thunk within one interpreter run.
///
/// Ids come from a per-interpreter counter and are never reused, so two
/// bindings with the same id are guaranteed to produce the same value.
#[derive(Copy, Clone, Eq, PartialEq, Ord, PartialOrd, Hash, Debug)]
pub struct ThunkId(u64);

impl ThunkId {
    #[inline]
    pub const fn new(raw: u64) -> Self {
        ThunkId(raw)
    }

    #[inline]
    pub const fn raw(self) -> u64 {
        self.0
    }
}

/// Evaluation state of a thunk.
#[derive(Debug)]
pub(crate) enum ThunkState {
    /// Not yet demanded.
    Pending { expr: ExprId, env: Environment },
    /// Currently being evaluated. Demanding it again can never terminate.
    Forcing,
    /// Evaluated; the value is shared by every later use.
    Done(Value),
}

/// A suspended computation bound to a variable.
#[derive(Debug)]
pub struct Thunk {
    id: ThunkId,
    pub(crate) state: RefCell<ThunkState>,
}

impl Thunk {
    pub fn new(id: ThunkId, expr: ExprId, env: Environment) -> Self {
        Thunk {
            id,
            state: RefCell::new(ThunkState::Pending { expr, env }),
        }
    }

    /// A thunk that already holds its value.
    pub fn evaluated(id: ThunkId, value: Value) -> Self {
        Thunk {
            id,
            state: RefCell::new(ThunkState::Done(value)),
        }
    }

    #[inline]
    pub fn id(&self) -> ThunkId {
        self.id
    }

    /// The value, if this thunk has been forced.
    pub fn value(&self) -> Option<Value> {
        match &*self.state.borrow() {
            ThunkState::Done(value) => Some(value.clone()),
            ThunkState::Pending { .. } | ThunkState::Forcing => None,
        }
    }

    pub fn is_evaluated(&self) -> bool {
        matches!(&*self.state.borrow(), ThunkState::Done(_))
    }
}

struct Frame {
    name: VarName,
    thunk: Rc<Thunk>,
    parent: Environment,
}

/// Persistent map from variable names to thunks.
#[derive(Clone, Default)]
pub struct Environment(Option<Rc<Frame>>);

impl Environment {
    /// The environment of a closed program.
    pub fn empty() -> Self {
        Environment(None)
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_none()
    }

    /// A new environment with `name` bound to `thunk`, shadowing any outer
    /// binding of the same name. `self` is left untouched.
    #[must_use]
    pub fn bind(&self, name: VarName, thunk: Rc<Thunk>) -> Self {
        Environment(Some(Rc::new(Frame {
            name,
            thunk,
            parent: self.clone(),
        })))
    }

    /// The innermost binding of `name`.
    pub fn lookup(&self, name: VarName) -> Option<&Rc<Thunk>> {
        let mut frame = self.0.as_deref();
        while let Some(current) = frame {
            if current.name == name {
                return Some(&current.thunk);
            }
            frame = current.parent.0.as_deref();
        }
        None
    }

    /// Number of frames in the chain, shadowed bindings included.
    pub fn depth(&self) -> usize {
        let mut depth = 0;
        let mut frame = self.0.as_deref();
        while let Some(current) = frame {
            depth += 1;
            frame = current.parent.0.as_deref();
        }
        depth
    }
}

impl Drop for Environment {
    // A frame owns its thunk, whose pending environment or forced closure
    // leads back to more frames. Uniquely owned links go onto one worklist so
    // releasing a deep recursion never recurses natively.
    fn drop(&mut self) {
        let mut pending: Vec<Rc<Frame>> = self.0.take().into_iter().collect();
        while let Some(frame) = pending.pop() {
            let Ok(Frame { thunk, mut parent, .. }) = Rc::try_unwrap(frame) else {
                continue;
            };
            pending.extend(parent.0.take());

            let Ok(thunk) = Rc::try_unwrap(thunk) else {
                continue;
            };
            match thunk.state.into_inner() {
                ThunkState::Pending { mut env, .. } => pending.extend(env.0.take()),
                ThunkState::Done(Value::Closure(closure)) => {
                    if let Ok(mut closure) = Rc::try_unwrap(closure) {
                        pending.extend(closure.env.0.take());
                    }
                }
                ThunkState::Done(_) | ThunkState::Forcing => {}
            }
        }
    }
}

impl fmt::Debug for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = f.debug_list();
        let mut frame = self.0.as_deref();
        while let Some(current) = frame {
            list.entry(&(current.name, current.thunk.id()));
            frame = current.parent.0.as_deref();
        }
        list.finish()
    }
}
