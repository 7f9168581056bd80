//! ALU shift operations.
//!
//! Implements shift-left logical (SLL) and shift-right logical (SRL).
//! Shift amounts are masked to 6 bits (0–63), as for RV64. SRL fills with
//! zeros regardless of the sign of the shifted value.

use crate::core::signals::AluOp;

/// Bit mask for shift amount in RV64 (6 bits: 0-63).
const SHAMT_MASK: i64 = 0x3f;

/// Executes a shift operation.
///
/// # Arguments
///
/// * `op` - The ALU operation to perform (must be a shift variant).
/// * `a`  - The value to be shifted.
/// * `b`  - The shift amount (lower 6 bits used, upper bits ignored).
///
/// # Returns
///
/// The 64-bit result. Returns `0` for non-shift opcodes.
pub const fn execute(op: AluOp, a: i64, b: i64) -> i64 {
    let shamt = (b & SHAMT_MASK) as u32;
    match op {
        AluOp::Sll => a.wrapping_shl(shamt),
        AluOp::Srl => (a as u64).wrapping_shr(shamt) as i64,
        _ => 0,
    }
}
