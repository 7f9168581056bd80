//! RISC-V Base Integer (I) Function Codes (funct7).
//!
//! The `funct7` field (bits 31-25) is used in R-type instructions to
//! distinguish between operations that share the same `funct3` (ADD vs SUB).

/// Default operation (ADD, SLL, SRL, etc.).
pub const DEFAULT: u32 = 0b0000000;

/// Alternate operation selecting SUB over ADD.
pub const SUB: u32 = 0b0100000;
