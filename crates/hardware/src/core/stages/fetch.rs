//! Instruction Fetch (IF).
//!
//! Reads the instruction word at the current program counter from the
//! instruction stream.

use crate::common::SimError;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::Cpu;
use crate::core::stages::latches::IfId;

/// Executes the fetch step.
///
/// # Arguments
///
/// * `cpu` - The CPU state; only the PC and instruction stream are read.
///
/// # Errors
///
/// * [`SimError::MisalignedFetch`] if the PC is not a multiple of 4.
/// * [`SimError::FetchOutOfBounds`] if no instruction lives at the PC.
pub fn fetch_stage(cpu: &Cpu) -> Result<IfId, SimError> {
    let pc = cpu.pc;
    if pc % INSTRUCTION_SIZE != 0 {
        return Err(SimError::MisalignedFetch { pc });
    }
    let inst = cpu
        .imem
        .fetch(pc)
        .ok_or_else(|| SimError::FetchOutOfBounds {
            pc,
            last_addr: cpu.imem.last_addr(),
        })?;
    Ok(IfId { pc, inst })
}
