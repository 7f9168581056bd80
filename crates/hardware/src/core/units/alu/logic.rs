//! ALU logical and comparison operations.
//!
//! Implements bitwise OR, AND, XOR, and signed set-less-than. The comparison
//! result is always 0 or 1.

use crate::core::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a logic/comparison variant).
/// * `a`  - First operand.
/// * `b`  - Second operand.
///
/// # Returns
///
/// The 64-bit result. Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    match op {
        AluOp::Or => a | b,
        AluOp::And => a & b,
        AluOp::Xor => a ^ b,
        AluOp::Slt => (a < b) as i64,
        _ => 0,
    }
}
