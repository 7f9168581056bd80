//! Instruction Decode (ID).
//!
//! This module implements the decode step. It performs the following:
//! 1. **Field Extraction:** Splits the word into opcode, registers, function codes and immediate.
//! 2. **Control:** Derives the control-signal bundle from opcode and funct3.
//! 3. **ALU Control:** Refines the ALU-operation class into a concrete operation.
//! 4. **Operand Read:** Reads rs1 and rs2 from the register file.

use crate::common::{DecodeError, SimError};
use crate::core::Cpu;
use crate::core::stages::latches::{IdEx, IfId};
use crate::core::units::alu::control::alu_control;
use crate::core::units::control::control;
use crate::isa::decode::decode;

/// Executes the decode step.
///
/// # Arguments
///
/// * `cpu`   - The CPU state; only the register file is read.
/// * `if_id` - The fetched instruction.
///
/// # Errors
///
/// Returns [`SimError::Decode`] with the PC and word of the instruction if the
/// opcode, branch funct3, or ALU function code is not recognised.
pub fn decode_stage(cpu: &Cpu, if_id: IfId) -> Result<IdEx, SimError> {
    let IfId { pc, inst } = if_id;
    let wrap = |source: DecodeError| SimError::Decode { pc, inst, source };

    let decoded = decode(inst).map_err(wrap)?;
    let ctrl = control(decoded.opcode, decoded.funct3).map_err(wrap)?;
    let alu_op = alu_control(ctrl.alu_op, decoded.funct3, decoded.funct7).map_err(wrap)?;

    Ok(IdEx {
        pc,
        decoded,
        ctrl,
        alu_op,
        rv1: cpu.regs.read(decoded.rs1),
        rv2: cpu.regs.read(decoded.rs2),
    })
}
