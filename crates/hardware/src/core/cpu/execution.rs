//! Main Execution Loop.
//!
//! This module implements the cycle of the single-cycle core. It performs the following:
//! 1. **Datapath:** Runs fetch, decode, execute, memory and writeback for one instruction.
//! 2. **Commit:** Updates the PC, the clock and the statistics.
//! 3. **Termination:** Halts once the PC moves past the last instruction.
//! 4. **Observability:** Logs retired instructions and control-flow redirects.

use tracing::{debug, trace};

use super::{CoreStatus, Cpu};
use crate::common::SimError;
use crate::core::stages::latches::MemWb;
use crate::core::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::core::units::branch::PcSource;
use crate::isa::disasm::disassemble;
use crate::stats::InstClass;

impl Cpu {
    /// Advances the core by one cycle.
    ///
    /// Executes the instruction at the PC to completion. On success the
    /// register file, data memory, PC, clock and statistics all reflect the
    /// retired instruction; on error none of them changed.
    ///
    /// # Returns
    ///
    /// The status after the cycle: [`CoreStatus::Halted`] once the new PC
    /// lies past the last instruction of the stream.
    ///
    /// # Errors
    ///
    /// * [`SimError::Halted`] if the core had already halted.
    /// * [`SimError::MisalignedFetch`] or [`SimError::FetchOutOfBounds`] if the
    ///   PC does not address an instruction.
    /// * [`SimError::Decode`] for an unrecognised instruction.
    /// * [`SimError::MemoryOutOfBounds`] for a load or store outside data memory.
    pub fn tick(&mut self) -> Result<CoreStatus, SimError> {
        if self.is_halted() {
            return Err(SimError::Halted {
                pc: self.pc,
                clock: self.clock,
            });
        }

        let if_id = fetch_stage(self)?;
        let id_ex = decode_stage(self, if_id)?;
        let ex_mem = execute_stage(&id_ex);
        let mem_wb = mem_stage(self, &ex_mem)?;
        wb_stage(self, &mem_wb);

        self.commit(&mem_wb);
        Ok(self.status)
    }

    /// Commits the PC, clock and statistics of a retired instruction.
    fn commit(&mut self, mem_wb: &MemWb) {
        if self.trace || cfg!(feature = "always-trace") {
            trace!(
                clock = self.clock,
                pc = format_args!("{:#010x}", mem_wb.pc),
                inst = format_args!("{:#010x}", mem_wb.decoded.raw),
                "{}",
                disassemble(mem_wb.decoded.raw)
            );
        }
        if mem_wb.pc_source.is_redirect() {
            debug!(
                from = format_args!("{:#x}", mem_wb.pc),
                to = format_args!("{:#x}", mem_wb.next_pc),
                source = ?mem_wb.pc_source,
                "control transfer"
            );
        }

        self.pc = mem_wb.next_pc;
        self.clock += 1;
        self.stats.record(
            InstClass::from_signals(&mem_wb.ctrl),
            mem_wb.pc_source == PcSource::BranchTaken,
        );

        if self.pc > self.imem.last_addr() {
            self.status = CoreStatus::Halted;
            debug!(
                pc = format_args!("{:#x}", self.pc),
                clock = self.clock,
                "core halted"
            );
        }
    }
}
