//! Inter-stage latch structures.
//!
//! This module defines the values handed from one step of the single-cycle
//! datapath to the next within a tick:
//! Fetch → Decode → Execute → Memory → Writeback.
//!
//! Latches live only for the duration of one tick; nothing is carried across
//! cycles.

use crate::core::signals::{AluOp, ControlSignals};
use crate::core::units::alu::AluOutput;
use crate::core::units::branch::PcSource;
use crate::isa::instruction::Decoded;

/// Fetch → Decode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IfId {
    /// Program counter of the instruction.
    pub pc: u64,
    /// 32-bit instruction encoding.
    pub inst: u32,
}

/// Decode → Execute.
///
/// Contains the decoded fields, the control signals, the concrete ALU
/// operation and the register operands read this cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct IdEx {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// Control signals for the rest of the datapath.
    pub ctrl: ControlSignals,
    /// Concrete ALU operation.
    pub alu_op: AluOp,
    /// Value read from rs1.
    pub rv1: i64,
    /// Value read from rs2.
    pub rv2: i64,
}

/// Execute → Memory.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ExMem {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// ALU result and zero flag.
    pub alu: AluOutput,
    /// Value to store (rs2) when `ctrl.mem_write` is set.
    pub store_data: i64,
    /// Selected next PC.
    pub next_pc: u64,
    /// How the next PC was selected.
    pub pc_source: PcSource,
}

/// Memory → Writeback.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct MemWb {
    /// Program counter of the instruction.
    pub pc: u64,
    /// Decoded instruction fields.
    pub decoded: Decoded,
    /// Control signals.
    pub ctrl: ControlSignals,
    /// ALU result.
    pub alu_result: i64,
    /// Value loaded from memory, for loads.
    pub load_data: Option<i64>,
    /// Selected next PC.
    pub next_pc: u64,
    /// How the next PC was selected.
    pub pc_source: PcSource,
}
