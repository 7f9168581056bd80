//! Core processor implementation.
//!
//! This module contains the single-cycle datapath: the CPU state and its
//! cycle orchestrator, the per-cycle steps, the functional units, the
//! register file and the control signals that tie them together.

/// Architectural state (general-purpose register file).
pub mod arch;

/// CPU state, inspection API and the tick orchestrator.
pub mod cpu;

/// Control signals produced by the control unit.
pub mod signals;

/// Per-cycle datapath steps (fetch, decode, execute, memory, writeback).
pub mod stages;

/// Functional units (ALU, ALU control, control unit, branch resolution).
pub mod units;

pub use self::cpu::{CoreStatus, Cpu};
