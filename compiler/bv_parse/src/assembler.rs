//! Recursive-descent assembly over a flat atom slice.

use std::rc::Rc;

use bv_ir::{Atom, Expr, ExprArena, ExprId};
use bv_stack::ensure_sufficient_stack;
use tracing::{debug, trace};

use crate::{ParseError, ParseResult};

/// Cursor over the atom stream, writing nodes into `arena`.
struct Assembler<'a, 'arena> {
    atoms: &'a [Atom],
    pos: usize,
    arena: &'arena mut ExprArena,
}

impl Assembler<'_, '_> {
    /// Assemble the expression starting at the cursor.
    ///
    /// Children are allocated before their parent, so every node's operands
    /// have smaller ids than the node itself.
    fn expr(&mut self) -> ParseResult<ExprId> {
        ensure_sufficient_stack(|| {
            let atoms = self.atoms;
            let position = self.pos;
            let Some(atom) = atoms.get(position) else {
                return Err(ParseError::EmptyExpression);
            };
            self.pos += 1;

            let expr = match atom {
                Atom::Bool(b) => Expr::Bool(*b),
                Atom::Int(i) => Expr::Int(i.clone()),
                Atom::Str(s) => Expr::Str(Rc::from(s.as_str())),
                Atom::Var(id) => Expr::Var(self.arena.intern(id)),
                Atom::Unary(op) => {
                    let [operand] = self.operands(atom, position)?;
                    Expr::Unary { op: *op, operand }
                }
                Atom::Binary(op) => {
                    let [left, right] = self.operands(atom, position)?;
                    Expr::Binary {
                        op: *op,
                        left,
                        right,
                    }
                }
                Atom::If => {
                    let [test, then_branch, else_branch] = self.operands(atom, position)?;
                    Expr::If {
                        test,
                        then_branch,
                        else_branch,
                    }
                }
                Atom::Lambda(id) => {
                    let param = self.arena.intern(id);
                    let [body] = self.operands(atom, position)?;
                    Expr::Lambda { param, body }
                }
            };

            Ok(self.arena.alloc(expr))
        })
    }

    /// Assemble exactly `N` operands for the placeholder at `position`.
    fn operands<const N: usize>(
        &mut self,
        placeholder: &Atom,
        position: usize,
    ) -> ParseResult<[ExprId; N]> {
        trace!(%placeholder, position, "assembling operands");
        let mut operands = [ExprId::new(0); N];
        for (found, slot) in operands.iter_mut().enumerate() {
            *slot = self.expr().map_err(|err| match err {
                ParseError::EmptyExpression => ParseError::IncompleteExpression {
                    placeholder: placeholder.to_string(),
                    position,
                    expected: N,
                    found,
                },
                other => other,
            })?;
        }
        Ok(operands)
    }
}

/// Assemble one expression from the front of `atoms`.
///
/// Returns the root and the unconsumed suffix. Callers that expect a whole
/// program should use [`parse_program`], which rejects a non-empty suffix.
pub fn assemble<'a>(atoms: &'a [Atom], arena: &mut ExprArena) -> ParseResult<(ExprId, &'a [Atom])> {
    let mut assembler = Assembler {
        atoms,
        pos: 0,
        arena,
    };
    let root = assembler.expr()?;
    Ok((root, &atoms[assembler.pos..]))
}

/// Assemble a complete program into a fresh arena.
///
/// Fails with [`ParseError::TrailingTokens`] unless every atom is consumed.
#[tracing::instrument(level = "debug", skip_all, fields(tokens = atoms.len()))]
pub fn parse_program(atoms: &[Atom]) -> ParseResult<(ExprArena, ExprId)> {
    let mut arena = ExprArena::with_capacity(atoms.len());
    let (root, rest) = assemble(atoms, &mut arena)?;

    if !rest.is_empty() {
        return Err(ParseError::TrailingTokens {
            position: atoms.len() - rest.len(),
            count: rest.len(),
        });
    }

    debug!(nodes = arena.len(), vars = arena.var_count(), "assembled program");
    Ok((arena, root))
}
