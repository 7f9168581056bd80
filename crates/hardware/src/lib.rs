//! RISC-V single-cycle datapath simulator library.
//!
//! This crate implements a cycle-level functional simulator of a single-cycle
//! RV64I (subset) processor with the following:
//! 1. **Core:** Decoder, control unit, ALU control, ALU, register file and the per-cycle orchestrator.
//! 2. **Memory:** A shared instruction stream and a flat, byte-addressable data memory.
//! 3. **ISA:** Field extraction, immediate builders, encoders, an assembler and a disassembler.
//! 4. **Simulation:** Trace loading, state initialization, the run loop, configuration and statistics.
//!
//! # Examples
//!
//! ```
//! use std::sync::Arc;
//! use rvdp_core::{Config, Simulator};
//! use rvdp_core::sim::loader::parse_trace;
//! use rvdp_core::sim::RunOutcome;
//!
//! let program = parse_trace("addi a0, zero, 5\naddi a1, a0, 7\n").unwrap();
//! let mut sim = Simulator::new(Arc::new(program), &Config::default()).unwrap();
//! let summary = sim.run().unwrap();
//! assert_eq!(summary.outcome, RunOutcome::Halted);
//! assert_eq!(summary.cycles, 2);
//! assert_eq!(sim.cpu.reg(11), Some(12));
//! ```

/// Common types and constants (errors, sizes).
pub mod common;
/// Simulator configuration (defaults, hierarchical config structures, seeds).
pub mod config;
/// CPU core (state, cycle steps, functional units, register file).
pub mod core;
/// Instruction set (decode, encode, ABI names, assembler, disassembler).
pub mod isa;
/// Trace loading, initialization and the run loop.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse it from JSON.
pub use crate::config::Config;
/// Main CPU type; holds the PC, register file, data memory and stats.
pub use crate::core::Cpu;
/// Run loop over one core; construct with `Simulator::new`.
pub use crate::sim::Simulator;
/// Immutable instruction stream built by the loader.
pub use crate::soc::InstructionMemory;
