//! Assembler tests.
//!
//! - `assembler`: shape of assembled trees and error reporting
//! - `roundtrip`: property tests for flatten/assemble inversion
