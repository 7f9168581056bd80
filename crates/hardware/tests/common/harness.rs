use std::sync::Arc;

use rvdp_core::common::SimError;
use rvdp_core::config::Config;
use rvdp_core::core::{CoreStatus, Cpu};
use rvdp_core::sim::{RunSummary, Simulator};
use rvdp_core::soc::InstructionMemory;

/// Installs a test subscriber once; output is captured per test.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_env_filter("rvdp_core=trace")
        .try_init();
}

pub struct TestContext {
    pub sim: Simulator,
}

impl TestContext {
    /// Builds a simulator over `program` with the default configuration.
    pub fn new(program: &[u32]) -> Self {
        Self::with_config(program, &Config::default())
    }

    pub fn with_config(program: &[u32], config: &Config) -> Self {
        init_tracing();
        let imem = InstructionMemory::from_words(program).unwrap();
        let sim = Simulator::new(Arc::new(imem), config).unwrap();
        Self { sim }
    }

    /// Convenience accessor for the CPU.
    pub fn cpu(&self) -> &Cpu {
        &self.sim.cpu
    }

    /// Set a general-purpose register value.
    pub fn set_reg(&mut self, reg: usize, val: i64) {
        self.sim.cpu.set_reg(reg, val).unwrap();
    }

    /// Read a general-purpose register value.
    pub fn get_reg(&self, reg: usize) -> i64 {
        self.sim.cpu.reg(reg).unwrap()
    }

    /// Store a doubleword in data memory.
    pub fn store(&mut self, addr: u64, val: i64) {
        self.sim.cpu.data_memory_mut().store_dword(addr, val).unwrap();
    }

    /// Load a doubleword from data memory.
    pub fn load(&self, addr: u64) -> i64 {
        self.sim.cpu.load_dword(addr).unwrap()
    }

    /// Execute one cycle.
    pub fn tick(&mut self) -> Result<CoreStatus, SimError> {
        self.sim.step()
    }

    /// Execute `n` cycles, panicking on any error.
    pub fn run(&mut self, n: usize) -> CoreStatus {
        let mut status = self.cpu().status();
        for _ in 0..n {
            status = self.tick().unwrap();
        }
        status
    }

    /// Run to completion.
    pub fn run_to_halt(&mut self) -> RunSummary {
        self.sim.run().unwrap()
    }
}
