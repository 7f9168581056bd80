//! Memories attached to the core.
//!
//! It provides:
//! 1. **Instruction Memory:** The immutable instruction stream and the trait the core fetches through.
//! 2. **Data Memory:** Byte-addressable storage for loads and stores.

/// Instruction stream storage and the `InstructionSource` trait.
pub mod imem;

/// Byte-addressable data memory.
pub mod memory;

pub use imem::{InstructionEntry, InstructionMemory, InstructionSource};
pub use memory::DataMemory;
