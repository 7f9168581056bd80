//! Execute (EX).
//!
//! Selects the second ALU operand, runs the ALU and resolves the next PC.
//! JALR computes its target as `rs1 + imm` through the same ALU path as
//! loads and stores.

use crate::core::signals::AluSrc;
use crate::core::stages::latches::{ExMem, IdEx};
use crate::core::units::alu::Alu;
use crate::core::units::branch::next_pc;

/// Executes the execute step.
///
/// # Arguments
///
/// * `id_ex` - Decoded instruction with its operands.
///
/// # Returns
///
/// The ALU outputs and the selected next PC.
pub fn execute_stage(id_ex: &IdEx) -> ExMem {
    let imm = id_ex.decoded.imm;
    let op2 = match id_ex.ctrl.alu_src {
        AluSrc::Reg2 => id_ex.rv2,
        AluSrc::Imm => imm,
    };
    let alu = Alu::execute(id_ex.alu_op, id_ex.rv1, op2);
    let (next, pc_source) = next_pc(id_ex.pc, &id_ex.ctrl, imm, alu);

    ExMem {
        pc: id_ex.pc,
        decoded: id_ex.decoded,
        ctrl: id_ex.ctrl,
        alu,
        store_data: id_ex.rv2,
        next_pc: next,
        pc_source,
    }
}
