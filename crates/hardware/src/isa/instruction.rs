//! Instruction encoding and decoding utilities.
//!
//! Provides bit extraction functions and structures for decoding
//! RISC-V instruction fields from 32-bit instruction encodings.

use crate::common::DecodeError;
use crate::isa::rv64i::opcodes;

/// Bit mask for extracting the opcode field (bits 0-6).
pub const OPCODE_MASK: u32 = 0x7F;
/// Bit mask for extracting the destination register field (bits 7-11).
pub const RD_MASK: u32 = 0x1F;
/// Bit mask for extracting the first source register field (bits 15-19).
pub const RS1_MASK: u32 = 0x1F;
/// Bit mask for extracting the second source register field (bits 20-24).
pub const RS2_MASK: u32 = 0x1F;
/// Bit mask for extracting the funct3 field (bits 12-14).
pub const FUNCT3_MASK: u32 = 0x7;
/// Bit mask for extracting the funct7 field (bits 25-31).
pub const FUNCT7_MASK: u32 = 0x7F;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Provides methods to extract all standard RISC-V instruction fields
/// from a 32-bit instruction encoding.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 0-6).
    ///
    /// The opcode determines the instruction format and operation category.
    fn opcode(&self) -> u32;

    /// Extracts the destination register field (bits 7-11).
    ///
    /// Register 0 (x0) is hardwired to zero and writes are ignored.
    fn rd(&self) -> usize;

    /// Extracts the first source register field (bits 15-19).
    fn rs1(&self) -> usize;

    /// Extracts the second source register field (bits 20-24).
    fn rs2(&self) -> usize;

    /// Extracts the funct3 field (bits 12-14).
    fn funct3(&self) -> u32;

    /// Extracts the funct7 field (bits 25-31).
    ///
    /// Distinguishes standard and alternate R-type encodings (ADD vs SUB).
    fn funct7(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        self & OPCODE_MASK
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        ((self >> 7) & RD_MASK) as usize
    }

    #[inline(always)]
    fn rs1(&self) -> usize {
        ((self >> 15) & RS1_MASK) as usize
    }

    #[inline(always)]
    fn rs2(&self) -> usize {
        ((self >> 20) & RS2_MASK) as usize
    }

    #[inline(always)]
    fn funct3(&self) -> u32 {
        (self >> 12) & FUNCT3_MASK
    }

    #[inline(always)]
    fn funct7(&self) -> u32 {
        (self >> 25) & FUNCT7_MASK
    }
}

/// Instruction encoding format, selected by the opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum InstructionFormat {
    /// Register-register arithmetic; no immediate.
    R,
    /// 12-bit immediate: immediate arithmetic, loads, JALR.
    I,
    /// Split 12-bit immediate: stores.
    S,
    /// 13-bit even branch offset.
    B,
    /// 21-bit even jump offset.
    J,
}

impl InstructionFormat {
    /// Selects the format for an opcode.
    ///
    /// # Errors
    ///
    /// Returns [`DecodeError::UnknownOpcode`] for any opcode outside the
    /// recognised instruction classes. The format is never guessed.
    pub const fn from_opcode(opcode: u32) -> Result<Self, DecodeError> {
        match opcode {
            opcodes::OP_REG => Ok(Self::R),
            opcodes::OP_IMM | opcodes::OP_LOAD | opcodes::OP_JALR => Ok(Self::I),
            opcodes::OP_STORE => Ok(Self::S),
            opcodes::OP_BRANCH => Ok(Self::B),
            opcodes::OP_JAL => Ok(Self::J),
            _ => Err(DecodeError::UnknownOpcode { opcode }),
        }
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Derived fresh from the raw word every cycle and never mutated.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Extracted opcode field.
    pub opcode: u32,
    /// Encoding format implied by the opcode.
    pub format: InstructionFormat,
    /// Destination register index.
    pub rd: usize,
    /// First source register index.
    pub rs1: usize,
    /// Second source register index.
    pub rs2: usize,
    /// Function code field 3.
    pub funct3: u32,
    /// Function code field 7. Zero for every format but R-type.
    pub funct7: u32,
    /// Sign-extended immediate value. Zero for R-type.
    pub imm: i64,
}
