//! ALU Control.
//!
//! Refines the control unit's coarse [`AluOpClass`] plus the function-code
//! fields into the exact [`AluOp`]:
//!
//! | class          | funct3   | funct7    | operation |
//! |----------------|----------|-----------|-----------|
//! | forced-add     | any      | any       | add       |
//! | branch         | BEQ/BNE  | any       | sub       |
//! | branch         | BLT/BGE  | any       | slt       |
//! | function-code  | 000      | 0000000   | add       |
//! | function-code  | 000      | 0100000   | sub       |
//! | function-code  | 001      | any       | sll       |
//! | function-code  | 010      | any       | slt       |
//! | function-code  | 100      | any       | xor       |
//! | function-code  | 101      | any       | srl       |
//! | function-code  | 110      | any       | or        |
//! | function-code  | 111      | any       | and       |

use crate::common::DecodeError;
use crate::core::signals::{AluOp, AluOpClass};
use crate::isa::rv64i::{funct3 as f3, funct7 as f7};

/// Selects the concrete ALU operation.
///
/// # Arguments
///
/// * `class`  - ALU-operation class from the control unit.
/// * `funct3` - funct3 field of the instruction.
/// * `funct7` - funct7 field (already zero for immediate arithmetic).
///
/// # Errors
///
/// * [`DecodeError::UnknownBranchFunct3`] for a branch comparison outside BEQ/BNE/BLT/BGE.
/// * [`DecodeError::UnknownAluFunction`] for a function-code combination missing from the table.
pub fn alu_control(class: AluOpClass, funct3: u32, funct7: u32) -> Result<AluOp, DecodeError> {
    match class {
        AluOpClass::ForcedAdd => Ok(AluOp::Add),
        AluOpClass::BranchCompare => match funct3 {
            f3::BEQ | f3::BNE => Ok(AluOp::Sub),
            f3::BLT | f3::BGE => Ok(AluOp::Slt),
            _ => Err(DecodeError::UnknownBranchFunct3 { funct3 }),
        },
        AluOpClass::FunctionCode => match (funct3, funct7) {
            (f3::ADD_SUB, f7::DEFAULT) => Ok(AluOp::Add),
            (f3::ADD_SUB, f7::SUB) => Ok(AluOp::Sub),
            (f3::SLL, _) => Ok(AluOp::Sll),
            (f3::SLT, _) => Ok(AluOp::Slt),
            (f3::XOR, _) => Ok(AluOp::Xor),
            (f3::SRL, _) => Ok(AluOp::Srl),
            (f3::OR, _) => Ok(AluOp::Or),
            (f3::AND, _) => Ok(AluOp::And),
            _ => Err(DecodeError::UnknownAluFunction { funct3, funct7 }),
        },
    }
}
