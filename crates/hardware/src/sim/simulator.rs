//! Simulator: owns a core and drives it to completion.
//!
//! The runner collaborator of the datapath. It builds a core from a program
//! and a configuration, seeds it, and ticks it until it halts, fails, or hits
//! the configured cycle limit.

use std::sync::Arc;

use tracing::{debug, error};

use crate::common::{ConfigError, SimError};
use crate::config::Config;
use crate::core::{CoreStatus, Cpu};
use crate::sim::loader::apply_init;
use crate::soc::InstructionSource;

/// Why a run stopped without a fatal error.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunOutcome {
    /// The PC moved past the last instruction.
    Halted,
    /// `general.max_cycles` elapsed before the core halted.
    CycleLimit,
}

/// Result of a completed run.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RunSummary {
    /// Why the run stopped.
    pub outcome: RunOutcome,
    /// Cycles executed by the core in total.
    pub cycles: u64,
    /// Final program counter.
    pub pc: u64,
}

/// Top-level simulator: one core plus its run limits.
#[derive(Debug)]
pub struct Simulator {
    /// The simulated core.
    pub cpu: Cpu,
    max_cycles: Option<u64>,
}

impl Simulator {
    /// Creates a simulator for `program` and seeds its initial state.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the configuration fails validation.
    pub fn new(program: Arc<dyn InstructionSource>, config: &Config) -> Result<Self, ConfigError> {
        config.validate()?;
        let mut cpu = Cpu::new(program, config);
        apply_init(&mut cpu, &config.init)?;
        Ok(Self {
            cpu,
            max_cycles: config.general.max_cycles,
        })
    }

    /// Advances the core by one cycle.
    ///
    /// # Errors
    ///
    /// Forwards any [`SimError`] from [`Cpu::tick`].
    pub fn step(&mut self) -> Result<CoreStatus, SimError> {
        self.cpu.tick()
    }

    /// Ticks until the core halts or the cycle limit is reached.
    ///
    /// A core that has already halted returns immediately with
    /// [`RunOutcome::Halted`].
    ///
    /// # Errors
    ///
    /// Returns the first fatal [`SimError`]; the core keeps the state of the
    /// last completed cycle for inspection.
    pub fn run(&mut self) -> Result<RunSummary, SimError> {
        while !self.cpu.is_halted() {
            if self.max_cycles.is_some_and(|limit| self.cpu.clock() >= limit) {
                debug!(cycles = self.cpu.clock(), "cycle limit reached");
                return Ok(self.summary(RunOutcome::CycleLimit));
            }
            if let Err(e) = self.cpu.tick() {
                error!(clock = self.cpu.clock(), "simulation failed: {e}");
                return Err(e);
            }
        }
        Ok(self.summary(RunOutcome::Halted))
    }

    const fn summary(&self, outcome: RunOutcome) -> RunSummary {
        RunSummary {
            outcome,
            cycles: self.cpu.clock(),
            pc: self.cpu.pc(),
        }
    }
}
