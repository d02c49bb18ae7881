//! Lambda-notation rendering for debugging.
//!
//! ```text
//! B$ L$ B+ v$ I" I$   ==>   ((λw.(+ w 1)) 3)
//! ```

use std::fmt::Write;

use crate::{BinaryOp, Expr, ExprArena, ExprId, VarName};

/// Short names for the first sixteen variable ids.
const VAR_NAMES: [&str; 16] = [
    "x", "y", "z", "w", "a", "b", "c", "d", "e", "f", "g", "h", "i", "j", "k", "l",
];

/// Render the tree rooted at `root` in lambda notation.
pub fn render_lambda(arena: &ExprArena, root: ExprId) -> String {
    let mut out = String::new();
    render_into(arena, root, &mut out);
    out
}

fn render_into(arena: &ExprArena, id: ExprId, out: &mut String) {
    match arena.get(id) {
        Expr::Bool(b) => {
            let _ = write!(out, "{b}");
        }
        Expr::Int(i) => {
            let _ = write!(out, "{i}");
        }
        Expr::Str(s) => {
            let _ = write!(out, "{s:?}");
        }
        Expr::Var(name) => push_var(arena, *name, out),
        Expr::Unary { op, operand } => {
            let _ = write!(out, "({op} ");
            render_into(arena, *operand, out);
            out.push(')');
        }
        Expr::Binary {
            op: BinaryOp::Apply,
            left,
            right,
        } => {
            out.push('(');
            render_into(arena, *left, out);
            out.push(' ');
            render_into(arena, *right, out);
            out.push(')');
        }
        Expr::Binary { op, left, right } => {
            let _ = write!(out, "({op} ");
            render_into(arena, *left, out);
            out.push(' ');
            render_into(arena, *right, out);
            out.push(')');
        }
        Expr::If {
            test,
            then_branch,
            else_branch,
        } => {
            out.push_str("(if ");
            render_into(arena, *test, out);
            out.push(' ');
            render_into(arena, *then_branch, out);
            out.push(' ');
            render_into(arena, *else_branch, out);
            out.push(')');
        }
        Expr::Lambda { param, body } => {
            out.push_str("(λ");
            push_var(arena, *param, out);
            out.push('.');
            render_into(arena, *body, out);
            out.push(')');
        }
    }
}

fn push_var(arena: &ExprArena, name: VarName, out: &mut String) {
    let id = arena.var_id(name);
    match id.to_u64().and_then(|n| usize::try_from(n).ok()) {
        Some(n) if n < VAR_NAMES.len() => out.push_str(VAR_NAMES[n]),
        _ => {
            let _ = write!(out, "v{id}");
        }
    }
}
