//! Main Control Unit.
//!
//! Maps the opcode (and, for branches, funct3) onto the full [`ControlSignals`]
//! bundle. There is one arm per recognised opcode and each arm assigns every
//! field; anything else is a decode failure.

use crate::common::DecodeError;
use crate::core::signals::{AluOpClass, AluSrc, BranchKind, ControlSignals, JumpKind};
use crate::isa::rv64i::{funct3 as f3, opcodes};

/// Produces the control signals for an instruction class.
///
/// # Arguments
///
/// * `opcode` - The 7-bit major opcode.
/// * `funct3` - The funct3 field; only inspected for branches.
///
/// # Errors
///
/// * [`DecodeError::UnknownOpcode`] for an opcode outside the seven recognised classes.
/// * [`DecodeError::UnknownBranchFunct3`] for a branch other than BEQ/BNE/BLT/BGE.
pub fn control(opcode: u32, funct3: u32) -> Result<ControlSignals, DecodeError> {
    let signals = match opcode {
        opcodes::OP_REG => ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Reg2,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::FunctionCode,
            branch: None,
            jump: None,
        },
        opcodes::OP_IMM => ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Imm,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::FunctionCode,
            branch: None,
            jump: None,
        },
        opcodes::OP_LOAD => ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Imm,
            mem_write: false,
            mem_read: true,
            mem_to_reg: true,
            alu_op: AluOpClass::ForcedAdd,
            branch: None,
            jump: None,
        },
        opcodes::OP_JALR => ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Imm,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::ForcedAdd,
            branch: None,
            jump: Some(JumpKind::Jalr),
        },
        opcodes::OP_STORE => ControlSignals {
            reg_write: false,
            alu_src: AluSrc::Imm,
            mem_write: true,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::ForcedAdd,
            branch: None,
            jump: None,
        },
        opcodes::OP_BRANCH => ControlSignals {
            reg_write: false,
            alu_src: AluSrc::Reg2,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::BranchCompare,
            branch: Some(branch_kind(funct3)?),
            jump: None,
        },
        opcodes::OP_JAL => ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Reg2,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::ForcedAdd,
            branch: None,
            jump: Some(JumpKind::Jal),
        },
        _ => return Err(DecodeError::UnknownOpcode { opcode }),
    };
    Ok(signals)
}

/// Second-level dispatch for the branch opcode.
///
/// # Errors
///
/// Returns [`DecodeError::UnknownBranchFunct3`] for any funct3 other than
/// BEQ, BNE, BLT or BGE.
pub fn branch_kind(funct3: u32) -> Result<BranchKind, DecodeError> {
    match funct3 {
        f3::BEQ => Ok(BranchKind::Eq),
        f3::BNE => Ok(BranchKind::Ne),
        f3::BLT => Ok(BranchKind::Lt),
        f3::BGE => Ok(BranchKind::Ge),
        _ => Err(DecodeError::UnknownBranchFunct3 { funct3 }),
    }
}
