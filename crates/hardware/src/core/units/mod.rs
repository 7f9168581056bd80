//! Functional units of the datapath.
//!
//! This module contains the ALU and its control, the main control unit, and
//! branch resolution with next-PC selection.

/// Arithmetic Logic Unit and ALU control.
pub mod alu;

/// Branch condition evaluation and next-PC selection.
pub mod branch;

/// Main control unit: opcode to control signals.
pub mod control;
