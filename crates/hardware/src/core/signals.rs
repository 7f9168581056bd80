//! Datapath control signals and operation types.
//!
//! This module defines the signals that route one instruction through the
//! single-cycle datapath. It performs:
//! 1. **Operation Classification:** The coarse ALU-operation class and the concrete ALU operation.
//! 2. **Operand Selection:** The source of the second ALU operand.
//! 3. **Memory Control:** Load/store enables and the writeback source.
//! 4. **Control Flow:** Branch kind and jump kind.
//!
//! A [`ControlSignals`] value is produced fresh every cycle and never mutated.
//! It deliberately has no `Default`: every field is assigned for every
//! recognised opcode.

/// Concrete ALU operation selected by ALU control.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOp {
    /// Integer addition.
    Add,

    /// Integer subtraction.
    Sub,

    /// Shift left logical.
    Sll,

    /// Set less than (signed).
    Slt,

    /// Bitwise XOR.
    Xor,

    /// Shift right logical.
    Srl,

    /// Bitwise OR.
    Or,

    /// Bitwise AND.
    And,
}

/// Coarse ALU-operation class emitted by the control unit.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluOpClass {
    /// Address calculation for loads, stores and JALR; always addition.
    ForcedAdd,

    /// Branch comparison; subtraction or set-less-than depending on funct3.
    BranchCompare,

    /// R-type and immediate arithmetic; decided by funct3/funct7.
    FunctionCode,
}

/// Source of the second ALU operand.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AluSrc {
    /// Value of register `rs2`.
    Reg2,

    /// Sign-extended immediate.
    Imm,
}

/// Conditional branch kind. Exactly one is selected for a branch instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum BranchKind {
    /// Taken when the operands are equal (ALU zero flag set).
    Eq,

    /// Taken when the operands differ (ALU zero flag clear).
    Ne,

    /// Taken when `rs1 < rs2` signed (set-less-than result non-zero).
    Lt,

    /// Taken when `rs1 >= rs2` signed (set-less-than result zero).
    Ge,
}

/// Unconditional jump kind.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum JumpKind {
    /// Jump and link: target is `pc + imm`.
    Jal,

    /// Jump and link register: target is the ALU result `rs1 + imm`.
    Jalr,
}

/// Control signals for one instruction.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSignals {
    /// Write the writeback value to `rd`.
    pub reg_write: bool,

    /// Source of the second ALU operand.
    pub alu_src: AluSrc,

    /// Store `rs2` to memory at the ALU result.
    pub mem_write: bool,

    /// Load from memory at the ALU result.
    pub mem_read: bool,

    /// Write back the loaded value instead of the ALU result.
    pub mem_to_reg: bool,

    /// Coarse ALU-operation class refined by ALU control.
    pub alu_op: AluOpClass,

    /// Branch condition, for conditional branches only.
    pub branch: Option<BranchKind>,

    /// Jump kind, for JAL and JALR only.
    pub jump: Option<JumpKind>,
}
