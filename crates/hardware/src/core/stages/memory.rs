//! Memory Access (MEM).
//!
//! Performs the doubleword load or store addressed by the ALU result.
//! Misaligned accesses proceed and are reported with a warning.

use tracing::warn;

use crate::common::constants::DWORD_BYTES;
use crate::common::{MemoryError, SimError};
use crate::core::Cpu;
use crate::core::stages::latches::{ExMem, MemWb};

/// Executes the memory step.
///
/// # Arguments
///
/// * `cpu`    - Mutable CPU state; data memory is written for stores.
/// * `ex_mem` - Execute results.
///
/// # Errors
///
/// Returns [`SimError::MemoryOutOfBounds`] if the 8-byte access does not fit
/// in data memory. A failed store writes nothing.
pub fn mem_stage(cpu: &mut Cpu, ex_mem: &ExMem) -> Result<MemWb, SimError> {
    let ctrl = ex_mem.ctrl;
    let addr = ex_mem.alu.result as u64;
    let wrap = |source: MemoryError| SimError::MemoryOutOfBounds {
        pc: ex_mem.pc,
        inst: ex_mem.decoded.raw,
        source,
    };

    if (ctrl.mem_read || ctrl.mem_write) && addr % DWORD_BYTES as u64 != 0 {
        warn!(
            pc = format_args!("{:#x}", ex_mem.pc),
            addr = format_args!("{addr:#x}"),
            "misaligned doubleword access"
        );
    }

    if ctrl.mem_write {
        cpu.dmem.store_dword(addr, ex_mem.store_data).map_err(wrap)?;
    }
    let load_data = if ctrl.mem_read {
        Some(cpu.dmem.load_dword(addr).map_err(wrap)?)
    } else {
        None
    };

    Ok(MemWb {
        pc: ex_mem.pc,
        decoded: ex_mem.decoded,
        ctrl,
        alu_result: ex_mem.alu.result,
        load_data,
        next_pc: ex_mem.next_pc,
        pc_source: ex_mem.pc_source,
    })
}
