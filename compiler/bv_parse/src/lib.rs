//! Tree assembler for the bound-variable token language.
//!
//! The wire format has no grouping syntax: a program is the pre-order walk of
//! its tree, and each placeholder atom's arity says how many of the following
//! expressions belong to it. Assembly is therefore a single left-to-right
//! pass that recurses once per placeholder.
//!
//! ```text
//! B+ I" B* I# I$      ==>   (+ 1 (* 2 3))
//! ```

mod assembler;
mod error;

pub use assembler::{assemble, parse_program};
pub use error::{ParseError, ParseResult};

#[cfg(test)]
mod tests;
