//! RISC-V General-Purpose Register File.
//!
//! This module implements the integer register file of the datapath. It performs the following:
//! 1. **Storage:** Maintains `num_regs` signed 64-bit registers (32 by default).
//! 2. **Invariant Enforcement:** Ensures that register `x0` is hardwired to zero.
//! 3. **Debugging:** Provides utilities for dumping the complete register state.

use std::fmt;

use crate::common::constants::{DEFAULT_NUM_REGS, ZERO_REG};
use crate::isa::abi;

/// General-Purpose Register file.
///
/// Register `x0` is hardwired to zero: writes to it are discarded and reads
/// always return 0.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Gpr {
    regs: Vec<i64>,
}

impl Default for Gpr {
    fn default() -> Self {
        Self::new(DEFAULT_NUM_REGS)
    }
}

impl Gpr {
    /// Creates a register file with `num_regs` registers, all zero.
    ///
    /// # Arguments
    ///
    /// * `num_regs` - Number of registers. Callers validate that it covers
    ///   the 32 indices a 5-bit register field can name.
    pub fn new(num_regs: usize) -> Self {
        Self {
            regs: vec![0; num_regs],
        }
    }

    /// Number of registers in the file.
    pub fn len(&self) -> usize {
        self.regs.len()
    }

    /// Returns `true` if the file has no registers.
    pub fn is_empty(&self) -> bool {
        self.regs.is_empty()
    }

    /// Reads a general-purpose register value.
    ///
    /// # Arguments
    ///
    /// * `idx` - Register index.
    ///
    /// # Returns
    ///
    /// The value stored in the register. Register `x0` always returns 0.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the register file.
    pub fn read(&self, idx: usize) -> i64 {
        if idx == ZERO_REG { 0 } else { self.regs[idx] }
    }

    /// Reads a register, or `None` if `idx` is outside the register file.
    pub fn get(&self, idx: usize) -> Option<i64> {
        (idx < self.regs.len()).then(|| self.read(idx))
    }

    /// Writes a value to a general-purpose register.
    ///
    /// Writes to `x0` are ignored.
    ///
    /// # Panics
    ///
    /// Panics if `idx` is outside the register file.
    pub fn write(&mut self, idx: usize, val: i64) {
        if idx != ZERO_REG {
            self.regs[idx] = val;
        }
    }

    /// All register values in index order. Entry 0 is always 0.
    pub fn as_slice(&self) -> &[i64] {
        &self.regs
    }

    /// Dumps the contents of all registers to stdout.
    pub fn dump(&self) {
        print!("{self}");
    }
}

impl fmt::Display for Gpr {
    /// Formats the registers in pairs, ABI name and hexadecimal value.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, pair) in self.regs.chunks(2).enumerate() {
            for (j, val) in pair.iter().enumerate() {
                let idx = i * 2 + j;
                if j > 0 {
                    write!(f, " ")?;
                }
                write!(f, "x{idx:<2} ({:>4})={:#018x}", abi::name(idx), *val as u64)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
