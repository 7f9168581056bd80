//! # Unit Components
//!
//! Tests for the building blocks of the datapath, organized like `src/`.


/// Control unit, ALU, branch resolution, register file and the core cycle.
pub mod core;




/// Statistics counters and reporting.
pub mod stats;
