//! Architectural state of the datapath.
//!
//! 1. **GPRs:** General-purpose integer register file with `x0` hard-wired to zero.

/// General-purpose register file implementation.
pub mod gpr;
