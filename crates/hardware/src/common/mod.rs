//! Common types and constants shared by every part of the simulator.
//!
//! It includes:
//! 1. **Constants:** Instruction width, register counts and data-memory sizing.
//! 2. **Error Handling:** Decode, memory, cycle, loader and configuration errors.

/// Simulator-wide constants.
pub mod constants;

/// Error types for decoding, memory access, cycles, loading and configuration.
pub mod error;

pub use error::{ConfigError, DecodeError, LoadError, MemoryError, SimError};
