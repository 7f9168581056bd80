//! Instruction encoders.
//!
//! The inverse of [`decode`](crate::isa::decode): packs register indices,
//! function codes and immediates into 32-bit words for each format. Used by the
//! assembler and by anything that needs to synthesise instruction streams.
//! Immediates are truncated to the width of the format's field; B- and J-type
//! offsets drop bit 0.

/// Packs the fields shared by every format: `rd`, `funct3` and the opcode.
#[inline]
const fn base(opcode: u32, rd: usize, funct3: u32) -> u32 {
    ((funct3 & 0x7) << 12) | (((rd as u32) & 0x1F) << 7) | (opcode & 0x7F)
}

/// Encodes an R-type instruction.
pub const fn r_type(opcode: u32, rd: usize, funct3: u32, rs1: usize, rs2: usize, funct7: u32) -> u32 {
    ((funct7 & 0x7F) << 25)
        | (((rs2 as u32) & 0x1F) << 20)
        | (((rs1 as u32) & 0x1F) << 15)
        | base(opcode, rd, funct3)
}

/// Encodes an I-type instruction with a 12-bit immediate.
pub const fn i_type(opcode: u32, rd: usize, funct3: u32, rs1: usize, imm: i64) -> u32 {
    let imm_bits = (imm as u32) & 0xFFF;
    (imm_bits << 20) | (((rs1 as u32) & 0x1F) << 15) | base(opcode, rd, funct3)
}

/// Encodes an S-type instruction with a 12-bit immediate.
pub const fn s_type(opcode: u32, funct3: u32, rs1: usize, rs2: usize, imm: i64) -> u32 {
    let v = imm as u32;
    let hi = (v >> 5) & 0x7F;
    let lo = v & 0x1F;
    (hi << 25)
        | (((rs2 as u32) & 0x1F) << 20)
        | (((rs1 as u32) & 0x1F) << 15)
        | ((funct3 & 0x7) << 12)
        | (lo << 7)
        | (opcode & 0x7F)
}

/// Encodes a B-type instruction with a 13-bit even offset.
pub const fn b_type(opcode: u32, funct3: u32, rs1: usize, rs2: usize, imm: i64) -> u32 {
    let v = imm as u32;
    let bit12 = (v >> 12) & 1;
    let bits10_5 = (v >> 5) & 0x3F;
    let bits4_1 = (v >> 1) & 0xF;
    let bit11 = (v >> 11) & 1;
    (bit12 << 31)
        | (bits10_5 << 25)
        | (((rs2 as u32) & 0x1F) << 20)
        | (((rs1 as u32) & 0x1F) << 15)
        | ((funct3 & 0x7) << 12)
        | (bits4_1 << 8)
        | (bit11 << 7)
        | (opcode & 0x7F)
}

/// Encodes a J-type instruction with a 21-bit even offset.
pub const fn j_type(opcode: u32, rd: usize, imm: i64) -> u32 {
    let v = imm as u32;
    let bit20 = (v >> 20) & 1;
    let bits10_1 = (v >> 1) & 0x3FF;
    let bit11 = (v >> 11) & 1;
    let bits19_12 = (v >> 12) & 0xFF;
    (bit20 << 31) | (bits10_1 << 21) | (bit11 << 20) | (bits19_12 << 12) | base(opcode, rd, 0)
}
