//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which holds the whole
//! architectural state of the single-cycle datapath. It coordinates the following:
//! 1. **State Management:** Program counter, cycle clock, and run status.
//! 2. **Storage:** The register file and data memory, owned exclusively by one core.
//! 3. **Instruction Stream:** A shared, read-only reference to the loaded program.
//! 4. **Inspection:** Read-only accessors used by runners and tests.

/// Cycle orchestration (the tick operation).
pub mod execution;

use std::fmt;
use std::sync::Arc;

use crate::common::constants::ARCH_REG_COUNT;
use crate::common::{ConfigError, MemoryError};
use crate::config::Config;
use crate::core::arch::gpr::Gpr;
use crate::soc::{DataMemory, InstructionSource};
use crate::stats::SimStats;

/// Run status of a core.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CoreStatus {
    /// More instructions remain; the core accepts ticks.
    Running,
    /// The PC moved past the last instruction; further ticks fail.
    Halted,
}

/// Main CPU structure containing all processor state.
///
/// Created once per program run; advanced one instruction per [`Cpu::tick`].
/// Several cores may share one instruction stream but never share registers
/// or memory.
pub struct Cpu {
    /// Cycles completed so far.
    pub(crate) clock: u64,
    /// Program Counter.
    pub(crate) pc: u64,
    /// Running or halted.
    pub(crate) status: CoreStatus,
    /// Instruction stream being executed.
    pub(crate) imem: Arc<dyn InstructionSource>,
    /// General-purpose registers.
    pub(crate) regs: Gpr,
    /// Data memory for loads and stores.
    pub(crate) dmem: DataMemory,
    /// Performance statistics.
    pub(crate) stats: SimStats,
    /// Enable per-instruction trace logging.
    pub(crate) trace: bool,
}

impl fmt::Debug for Cpu {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cpu")
            .field("clock", &self.clock)
            .field("pc", &format_args!("{:#x}", self.pc))
            .field("status", &self.status)
            .field("instructions", &self.imem.len())
            .field("num_regs", &self.regs.len())
            .field("data_memory_bytes", &self.dmem.capacity())
            .finish_non_exhaustive()
    }
}

impl Cpu {
    /// Creates a new CPU with zeroed registers and memory.
    ///
    /// # Arguments
    ///
    /// * `imem`   - The instruction stream to execute.
    /// * `config` - Sizing, start PC and trace settings. A register count below
    ///   32 is raised to 32.
    ///
    /// # Returns
    ///
    /// A running core with `clock == 0` and `pc == config.general.start_pc`.
    pub fn new(imem: Arc<dyn InstructionSource>, config: &Config) -> Self {
        Self {
            clock: 0,
            pc: config.general.start_pc,
            status: CoreStatus::Running,
            imem,
            regs: Gpr::new(config.core.num_regs.max(ARCH_REG_COUNT)),
            dmem: DataMemory::new(config.core.data_memory_bytes),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Current program counter.
    pub const fn pc(&self) -> u64 {
        self.pc
    }

    /// Number of completed cycles.
    pub const fn clock(&self) -> u64 {
        self.clock
    }

    /// Current run status.
    pub const fn status(&self) -> CoreStatus {
        self.status
    }

    /// Returns `true` once the core has halted.
    pub fn is_halted(&self) -> bool {
        self.status == CoreStatus::Halted
    }

    /// Value of register `idx`, or `None` if it does not exist.
    pub fn reg(&self, idx: usize) -> Option<i64> {
        self.regs.get(idx)
    }

    /// All register values in index order.
    pub fn registers(&self) -> &[i64] {
        self.regs.as_slice()
    }

    /// Byte of data memory at `addr`, or `None` if out of range.
    pub fn mem_byte(&self, addr: u64) -> Option<u8> {
        self.dmem.read_byte(addr)
    }

    /// Reads the doubleword at `addr` (little-endian).
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the 8 bytes do not fit in memory.
    pub fn load_dword(&self, addr: u64) -> Result<i64, MemoryError> {
        self.dmem.load_dword(addr)
    }

    /// Read-only view of data memory.
    pub const fn data_memory(&self) -> &DataMemory {
        &self.dmem
    }

    /// The instruction stream this core executes.
    pub fn instructions(&self) -> &dyn InstructionSource {
        self.imem.as_ref()
    }

    /// Performance statistics collected so far.
    pub const fn stats(&self) -> &SimStats {
        &self.stats
    }

    /// Seeds a register before the run. Writes to `x0` are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RegisterSeedOutOfRange`] if `idx` does not exist.
    pub fn set_reg(&mut self, idx: usize, val: i64) -> Result<(), ConfigError> {
        if idx >= self.regs.len() {
            return Err(ConfigError::RegisterSeedOutOfRange {
                index: idx,
                num_regs: self.regs.len(),
            });
        }
        self.regs.write(idx, val);
        Ok(())
    }

    /// Seeds the program counter before the run.
    pub const fn set_pc(&mut self, pc: u64) {
        self.pc = pc;
    }

    /// Mutable data memory, for seeding before the run.
    pub const fn data_memory_mut(&mut self) -> &mut DataMemory {
        &mut self.dmem
    }

    /// Dumps the current CPU state (PC, clock and registers) to stdout.
    pub fn dump_state(&self) {
        println!("PC = {:#018x}  clock = {}", self.pc, self.clock);
        self.regs.dump();
    }
}
