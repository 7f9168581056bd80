//! Writeback (WB).
//!
//! Selects the value destined for the register file and writes it. Priority:
//! loaded data, then the return address for jumps, then the ALU result.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::stages::latches::MemWb;

/// Selects the writeback value for an instruction.
pub const fn writeback_value(mem_wb: &MemWb) -> i64 {
    match mem_wb.load_data {
        Some(data) if mem_wb.ctrl.mem_to_reg => data,
        _ if mem_wb.ctrl.jump.is_some() => mem_wb.pc.wrapping_add(INSTRUCTION_SIZE) as i64,
        _ => mem_wb.alu_result,
    }
}

/// Executes the writeback step.
///
/// Writes nothing if `reg_write` is clear; writes to `x0` are dropped by the
/// register file.
pub fn wb_stage(cpu: &mut Cpu, mem_wb: &MemWb) {
    if mem_wb.ctrl.reg_write {
        cpu.regs.write(mem_wb.decoded.rd, writeback_value(mem_wb));
    }
}
