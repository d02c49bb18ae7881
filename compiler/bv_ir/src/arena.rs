//! Flat expression storage.
//!
//! Nodes are appended and never mutated, so an `ExprId` stays valid (and
//! means the same thing) for the lifetime of the arena. The substitution
//! evaluator used in tests grows the arena with rebuilt nodes; the
//! environment evaluator only reads it.

use std::rc::Rc;

use num_bigint::BigInt;

use crate::{Atom, BinaryOp, Expr, ExprId, UnaryOp, VarId, VarInterner, VarName};

/// Contiguous storage for expression nodes plus the variable interner.
#[derive(Clone, Debug, Default)]
pub struct ExprArena {
    exprs: Vec<Expr>,
    names: VarInterner,
}

impl ExprArena {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an arena with room for `capacity` nodes.
    ///
    /// Every atom of a well-formed program becomes exactly one node, so the
    /// token count is an exact capacity hint.
    pub fn with_capacity(capacity: usize) -> Self {
        ExprArena {
            exprs: Vec::with_capacity(capacity),
            names: VarInterner::new(),
        }
    }

    /// Append a node, returning its id.
    pub fn alloc(&mut self, expr: Expr) -> ExprId {
        let index = u32::try_from(self.exprs.len())
            .unwrap_or_else(|_| panic!("expression arena exceeded {} nodes", u32::MAX));
        self.exprs.push(expr);
        ExprId::new(index)
    }

    /// Get a node by id.
    ///
    /// Ids are only ever produced by `alloc` on this arena, so indexing is
    /// always in bounds for ids that did not come from another arena.
    #[inline]
    pub fn get(&self, id: ExprId) -> &Expr {
        &self.exprs[id.index()]
    }

    pub fn len(&self) -> usize {
        self.exprs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.exprs.is_empty()
    }

    /// Number of distinct variable ids interned so far.
    pub fn var_count(&self) -> usize {
        self.names.len()
    }

    /// Intern a wire-level variable id.
    pub fn intern(&mut self, id: &VarId) -> VarName {
        self.names.intern(id)
    }

    /// The wire-level id of an interned variable name.
    pub fn var_id(&self, name: VarName) -> &VarId {
        self.names.lookup(name)
    }

    // Construction helpers

    pub fn bool(&mut self, value: bool) -> ExprId {
        self.alloc(Expr::Bool(value))
    }

    pub fn int(&mut self, value: impl Into<BigInt>) -> ExprId {
        self.alloc(Expr::Int(value.into()))
    }

    pub fn str(&mut self, value: &str) -> ExprId {
        self.alloc(Expr::Str(Rc::from(value)))
    }

    pub fn unary(&mut self, op: UnaryOp, operand: ExprId) -> ExprId {
        self.alloc(Expr::Unary { op, operand })
    }

    pub fn binary(&mut self, op: BinaryOp, left: ExprId, right: ExprId) -> ExprId {
        self.alloc(Expr::Binary { op, left, right })
    }

    pub fn apply(&mut self, function: ExprId, argument: ExprId) -> ExprId {
        self.binary(BinaryOp::Apply, function, argument)
    }

    pub fn if_(&mut self, test: ExprId, then_branch: ExprId, else_branch: ExprId) -> ExprId {
        self.alloc(Expr::If {
            test,
            then_branch,
            else_branch,
        })
    }

    pub fn lambda(&mut self, param: u64, body: ExprId) -> ExprId {
        let param = self.intern(&VarId::from(param));
        self.alloc(Expr::Lambda { param, body })
    }

    pub fn var(&mut self, id: u64) -> ExprId {
        let name = self.intern(&VarId::from(id));
        self.alloc(Expr::Var(name))
    }

    /// Flatten the tree rooted at `root` back into its pre-order atom stream.
    ///
    /// This is the exact inverse of assembly: feeding the result to the
    /// assembler reproduces a structurally equal tree with nothing left over.
    pub fn flatten(&self, root: ExprId) -> Vec<Atom> {
        let mut atoms = Vec::new();
        let mut stack = vec![root];

        while let Some(id) = stack.pop() {
            match self.get(id) {
                Expr::Bool(b) => atoms.push(Atom::Bool(*b)),
                Expr::Int(i) => atoms.push(Atom::Int(i.clone())),
                Expr::Str(s) => atoms.push(Atom::Str(s.to_string())),
                Expr::Var(name) => atoms.push(Atom::Var(self.var_id(*name).clone())),
                Expr::Unary { op, operand } => {
                    atoms.push(Atom::Unary(*op));
                    stack.push(*operand);
                }
                Expr::Binary { op, left, right } => {
                    atoms.push(Atom::Binary(*op));
                    stack.push(*right);
                    stack.push(*left);
                }
                Expr::If {
                    test,
                    then_branch,
                    else_branch,
                } => {
                    atoms.push(Atom::If);
                    stack.push(*else_branch);
                    stack.push(*then_branch);
                    stack.push(*test);
                }
                Expr::Lambda { param, body } => {
                    atoms.push(Atom::Lambda(self.var_id(*param).clone()));
                    stack.push(*body);
                }
            }
        }

        atoms
    }

    /// Compare the tree at `a` in this arena with the tree at `b` in `other`.
    ///
    /// Node ids and interned names are arena-local, so variables are compared
    /// by their wire ids.
    pub fn structurally_eq(&self, a: ExprId, other: &ExprArena, b: ExprId) -> bool {
        let mut stack = vec![(a, b)];

        while let Some((a, b)) = stack.pop() {
            match (self.get(a), other.get(b)) {
                (Expr::Bool(x), Expr::Bool(y)) if x == y => {}
                (Expr::Int(x), Expr::Int(y)) if x == y => {}
                (Expr::Str(x), Expr::Str(y)) if x == y => {}
                (Expr::Var(x), Expr::Var(y)) if self.var_id(*x) == other.var_id(*y) => {}
                (
                    Expr::Unary { op, operand },
                    Expr::Unary {
                        op: other_op,
                        operand: other_operand,
                    },
                ) if op == other_op => stack.push((*operand, *other_operand)),
                (
                    Expr::Binary { op, left, right },
                    Expr::Binary {
                        op: other_op,
                        left: other_left,
                        right: other_right,
                    },
                ) if op == other_op => {
                    stack.push((*left, *other_left));
                    stack.push((*right, *other_right));
                }
                (
                    Expr::If {
                        test,
                        then_branch,
                        else_branch,
                    },
                    Expr::If {
                        test: other_test,
                        then_branch: other_then,
                        else_branch: other_else,
                    },
                ) => {
                    stack.push((*test, *other_test));
                    stack.push((*then_branch, *other_then));
                    stack.push((*else_branch, *other_else));
                }
                (
                    Expr::Lambda { param, body },
                    Expr::Lambda {
                        param: other_param,
                        body: other_body,
                    },
                ) if self.var_id(*param) == other.var_id(*other_param) => {
                    stack.push((*body, *other_body));
                }
                _ => return false,
            }
        }

        true
    }
}
