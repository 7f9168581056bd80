//! RISC-V Application Binary Interface (ABI) register names.
//!
//! Maps the standard ABI names onto register indices for the assembler,
//! the disassembler and state dumps.

/// Register x0 (zero register, always zero).
pub const REG_ZERO: usize = 0;
/// Register x1 (return address, ra).
pub const REG_RA: usize = 1;
/// Register x2 (stack pointer, sp).
pub const REG_SP: usize = 2;
/// Register x10 (first argument/return value, a0).
pub const REG_A0: usize = 10;
/// Register x11 (second argument, a1).
pub const REG_A1: usize = 11;

/// ABI register names for x0–x31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "ra", "sp", "gp", "tp", "t0", "t1", "t2", "s0", "s1", "a0", "a1", "a2", "a3", "a4",
    "a5", "a6", "a7", "s2", "s3", "s4", "s5", "s6", "s7", "s8", "s9", "s10", "s11", "t3", "t4",
    "t5", "t6",
];

/// Returns the ABI name for an integer register index, or `"x??"` if out of range.
#[inline]
pub fn name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("x??")
}

/// Resolves a register operand written as `xN` or as an ABI name.
///
/// `fp` is accepted as an alias of `s0`.
///
/// # Returns
///
/// The register index, or `None` if `token` names no architectural register.
pub fn parse(token: &str) -> Option<usize> {
    let token = token.trim();
    if let Some(num) = token.strip_prefix('x') {
        if let Ok(idx) = num.parse::<usize>() {
            return (idx < REG_NAMES.len()).then_some(idx);
        }
    }
    if token == "fp" {
        return Some(8);
    }
    REG_NAMES.iter().position(|&n| n == token)
}
