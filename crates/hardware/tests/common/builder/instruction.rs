//! Instruction word builder.
//!
//! Wraps the crate's encoders in a fluent API so tests read like assembly.

use rvdp_core::isa::encode;
use rvdp_core::isa::rv64i::funct3::*;
use rvdp_core::isa::rv64i::funct7;
use rvdp_core::isa::rv64i::opcodes::*;

#[derive(Clone, Copy, Debug, Default)]
pub struct InstructionBuilder {
    opcode: u32,
    rd: usize,
    funct3: u32,
    rs1: usize,
    rs2: usize,
    funct7: u32,
    imm: i64,
}

impl InstructionBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn opcode(mut self, op: u32) -> Self {
        self.opcode = op;
        self
    }

    pub fn rd(mut self, rd: usize) -> Self {
        self.rd = rd;
        self
    }

    pub fn rs1(mut self, rs1: usize) -> Self {
        self.rs1 = rs1;
        self
    }

    pub fn rs2(mut self, rs2: usize) -> Self {
        self.rs2 = rs2;
        self
    }

    pub fn funct3(mut self, funct3: u32) -> Self {
        self.funct3 = funct3;
        self
    }

    pub fn funct7(mut self, funct7: u32) -> Self {
        self.funct7 = funct7;
        self
    }

    pub fn imm(mut self, imm: i64) -> Self {
        self.imm = imm;
        self
    }

    /// Encodes the word using the format implied by the opcode.
    pub fn build(self) -> u32 {
        match self.opcode {
            OP_REG => encode::r_type(OP_REG, self.rd, self.funct3, self.rs1, self.rs2, self.funct7),
            OP_STORE => encode::s_type(OP_STORE, self.funct3, self.rs1, self.rs2, self.imm),
            OP_BRANCH => encode::b_type(OP_BRANCH, self.funct3, self.rs1, self.rs2, self.imm),
            OP_JAL => encode::j_type(OP_JAL, self.rd, self.imm),
            op => encode::i_type(op, self.rd, self.funct3, self.rs1, self.imm),
        }
    }

    // ── Shorthands ──────────────────────────────────────

    pub fn add(rd: usize, rs1: usize, rs2: usize) -> u32 {
        Self::new().opcode(OP_REG).rd(rd).rs1(rs1).rs2(rs2).funct3(ADD_SUB).build()
    }

    pub fn sub(rd: usize, rs1: usize, rs2: usize) -> u32 {
        Self::new()
            .opcode(OP_REG)
            .rd(rd)
            .rs1(rs1)
            .rs2(rs2)
            .funct3(ADD_SUB)
            .funct7(funct7::SUB)
            .build()
    }

    pub fn addi(rd: usize, rs1: usize, imm: i64) -> u32 {
        Self::new().opcode(OP_IMM).rd(rd).rs1(rs1).funct3(ADD_SUB).imm(imm).build()
    }

    pub fn ld(rd: usize, rs1: usize, imm: i64) -> u32 {
        Self::new().opcode(OP_LOAD).rd(rd).rs1(rs1).funct3(LD).imm(imm).build()
    }

    pub fn sd(rs2: usize, rs1: usize, imm: i64) -> u32 {
        Self::new().opcode(OP_STORE).rs1(rs1).rs2(rs2).funct3(SD).imm(imm).build()
    }

    pub fn branch(funct3: u32, rs1: usize, rs2: usize, imm: i64) -> u32 {
        Self::new().opcode(OP_BRANCH).rs1(rs1).rs2(rs2).funct3(funct3).imm(imm).build()
    }

    pub fn beq(rs1: usize, rs2: usize, imm: i64) -> u32 {
        Self::branch(BEQ, rs1, rs2, imm)
    }

    pub fn jal(rd: usize, imm: i64) -> u32 {
        Self::new().opcode(OP_JAL).rd(rd).imm(imm).build()
    }

    pub fn jalr(rd: usize, rs1: usize, imm: i64) -> u32 {
        Self::new().opcode(OP_JALR).rd(rd).rs1(rs1).funct3(JALR).imm(imm).build()
    }

    /// `addi x0, x0, 0`.
    pub fn nop() -> u32 {
        Self::addi(0, 0, 0)
    }
}
