//! Global Simulator Constants.
//!
//! This module defines constants shared across the datapath. It includes:
//! 1. **Instruction Constants:** Instruction width and the PC stride.
//! 2. **Register Constants:** Architectural register count and the zero register.
//! 3. **Memory Constants:** Data-memory sizing and the load/store access width.

/// Size of a standard (32-bit) RISC-V instruction in bytes.
///
/// The PC advances by this amount on every non-redirecting cycle.
pub const INSTRUCTION_SIZE: u64 = 4;

/// Number of general-purpose registers addressable by a 5-bit register field.
pub const ARCH_REG_COUNT: usize = 32;

/// Default number of registers in the register file.
pub const DEFAULT_NUM_REGS: usize = ARCH_REG_COUNT;

/// Index of the hardwired zero register.
pub const ZERO_REG: usize = 0;

/// Default data-memory capacity in bytes (1 KiB).
pub const DEFAULT_DATA_MEMORY_BYTES: usize = 1024;

/// Width in bytes of every data-memory load and store (doubleword).
pub const DWORD_BYTES: usize = 8;

/// Number of doublewords seeded by the indexed-memory preset.
pub const INDEXED_MEMORY_DWORDS: usize = 16;
