//! Bound-variable IR - shared data types for the interpreter pipeline.
//!
//! # Architecture
//!
//! ```text
//! wire text ──► Vec<Atom> ──► ExprArena + ExprId ──► Value
//!   (bv_codec)      (bv_parse)            (bv_eval)
//! ```
//!
//! - [`Atom`]: one decoded token. Operator, conditional and lambda atoms are
//!   arity-bearing placeholders whose children follow them in pre-order.
//! - [`Expr`] / [`ExprArena`] / [`ExprId`]: the assembled tree, stored flat.
//!   Children are referenced by index, never by `Box`, so nodes are cheap to
//!   share and an `ExprId` doubles as an identity key for memoization.
//! - [`VarId`] / [`VarName`]: variable ids as written on the wire (unbounded)
//!   and their dense interned form inside one arena.

mod arena;
mod atom;
mod expr;
mod expr_id;
mod name;
mod operators;
mod render;

pub use arena::ExprArena;
pub use atom::Atom;
pub use expr::Expr;
pub use expr_id::ExprId;
pub use name::{VarId, VarInterner, VarName};
pub use operators::{BinaryOp, UnaryOp};
pub use render::render_lambda;
