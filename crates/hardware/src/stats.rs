//! Simulation statistics collection and reporting.
//!
//! This module tracks per-core metrics of the datapath simulator. It provides:
//! 1. **Cycle and CPI:** Total cycles, retired instructions, and cycles per instruction.
//! 2. **Instruction mix:** Counts by class (register ALU, immediate ALU, load, store, branch, jump).
//! 3. **Control flow:** Branches taken and not taken.
//!
//! Every counter is derived from simulated state only, so two identical runs
//! produce identical statistics.

use std::fmt;

use crate::core::signals::{AluSrc, ControlSignals};

/// Instruction class used for the instruction mix.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// Register-register arithmetic (R-type).
    AluReg,
    /// Register-immediate arithmetic.
    AluImm,
    /// Doubleword load.
    Load,
    /// Doubleword store.
    Store,
    /// Conditional branch.
    Branch,
    /// JAL or JALR.
    Jump,
}

impl InstClass {
    /// Classifies an instruction by its control signals.
    pub const fn from_signals(signals: &ControlSignals) -> Self {
        if signals.mem_read {
            Self::Load
        } else if signals.mem_write {
            Self::Store
        } else if signals.branch.is_some() {
            Self::Branch
        } else if signals.jump.is_some() {
            Self::Jump
        } else if matches!(signals.alu_src, AluSrc::Imm) {
            Self::AluImm
        } else {
            Self::AluReg
        }
    }

    /// Short label used in reports.
    pub const fn label(self) -> &'static str {
        match self {
            Self::AluReg => "alu.reg",
            Self::AluImm => "alu.imm",
            Self::Load => "load",
            Self::Store => "store",
            Self::Branch => "branch",
            Self::Jump => "jump",
        }
    }
}

/// Simulation statistics for one core.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles elapsed.
    pub cycles: u64,
    /// Number of instructions retired.
    pub instructions_retired: u64,

    /// Count of R-type ALU instructions retired.
    pub inst_alu_reg: u64,
    /// Count of immediate ALU instructions retired.
    pub inst_alu_imm: u64,
    /// Count of load instructions retired.
    pub inst_load: u64,
    /// Count of store instructions retired.
    pub inst_store: u64,
    /// Count of conditional branches retired.
    pub inst_branch: u64,
    /// Count of JAL/JALR instructions retired.
    pub inst_jump: u64,

    /// Conditional branches whose condition held.
    pub branches_taken: u64,
    /// Conditional branches that fell through.
    pub branches_not_taken: u64,
}

impl SimStats {
    /// Records one retired instruction.
    ///
    /// # Arguments
    ///
    /// * `class` - Instruction class of the retired instruction.
    /// * `taken` - For branches, whether the branch was taken; ignored otherwise.
    pub const fn record(&mut self, class: InstClass, taken: bool) {
        self.cycles += 1;
        self.instructions_retired += 1;
        match class {
            InstClass::AluReg => self.inst_alu_reg += 1,
            InstClass::AluImm => self.inst_alu_imm += 1,
            InstClass::Load => self.inst_load += 1,
            InstClass::Store => self.inst_store += 1,
            InstClass::Jump => self.inst_jump += 1,
            InstClass::Branch => {
                self.inst_branch += 1;
                if taken {
                    self.branches_taken += 1;
                } else {
                    self.branches_not_taken += 1;
                }
            }
        }
    }

    /// Retired count for one instruction class.
    pub const fn count(&self, class: InstClass) -> u64 {
        match class {
            InstClass::AluReg => self.inst_alu_reg,
            InstClass::AluImm => self.inst_alu_imm,
            InstClass::Load => self.inst_load,
            InstClass::Store => self.inst_store,
            InstClass::Branch => self.inst_branch,
            InstClass::Jump => self.inst_jump,
        }
    }

    /// Cycles per instruction, or 0.0 before the first instruction retires.
    pub fn cpi(&self) -> f64 {
        if self.instructions_retired == 0 {
            0.0
        } else {
            self.cycles as f64 / self.instructions_retired as f64
        }
    }

    /// Prints all statistics to stdout.
    pub fn print(&self) {
        print!("{self}");
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let total = self.instructions_retired.max(1) as f64;
        writeln!(f, "==========================================================")?;
        writeln!(f, "RV64I DATAPATH SIMULATION STATISTICS")?;
        writeln!(f, "==========================================================")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "sim_insts                {}", self.instructions_retired)?;
        writeln!(f, "sim_cpi                  {:.4}", self.cpi())?;
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for class in [
            InstClass::AluReg,
            InstClass::AluImm,
            InstClass::Load,
            InstClass::Store,
            InstClass::Branch,
            InstClass::Jump,
        ] {
            let n = self.count(class);
            writeln!(
                f,
                "  op.{:<19} {} ({:.2}%)",
                class.label(),
                n,
                (n as f64 / total) * 100.0
            )?;
        }
        writeln!(f, "----------------------------------------------------------")?;
        writeln!(f, "CONTROL FLOW")?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  branch.not_taken       {}", self.branches_not_taken)?;
        writeln!(f, "==========================================================")
    }
}
