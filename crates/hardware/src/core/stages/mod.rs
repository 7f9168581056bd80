//! Datapath step implementations.
//!
//! One tick of the single-cycle core runs these steps in order. It includes:
//! 1. **Fetch:** Reads the instruction word at the PC.
//! 2. **Decode:** Splits the word, derives control signals and reads operands.
//! 3. **Execute:** Selects operands, runs the ALU and resolves the next PC.
//! 4. **Memory:** Performs the doubleword load or store.
//! 5. **Writeback:** Selects the writeback value and writes the register file.
//!
//! Fetch, decode and execute only read core state, and memory is the single
//! fallible step that mutates it, so a failing tick leaves the core untouched.

/// Instruction decode step.
pub mod decode;

/// Execute step.
pub mod execute;

/// Instruction fetch step.
pub mod fetch;

/// Values passed between steps.
pub mod latches;

/// Memory access step.
pub mod memory;

/// Writeback step.
pub mod writeback;

/// Decode step entry point.
pub use decode::decode_stage;
/// Execute step entry point.
pub use execute::execute_stage;
/// Fetch step entry point.
pub use fetch::fetch_stage;
/// Memory step entry point.
pub use memory::mem_stage;
/// Writeback step entry point.
pub use writeback::wb_stage;
