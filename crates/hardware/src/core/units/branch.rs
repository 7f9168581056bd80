//! Branch resolution and next-PC selection.
//!
//! Decides branch conditions from the ALU outputs and selects the next program
//! counter. Priority order: taken branch, JAL, JALR, then the sequential PC.

use crate::common::constants::INSTRUCTION_SIZE;
use crate::core::signals::{BranchKind, ControlSignals, JumpKind};
use crate::core::units::alu::AluOutput;

/// How the next PC was chosen.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PcSource {
    /// Non-control-flow instruction: `pc + 4`.
    Sequential,
    /// Conditional branch whose condition held: `pc + imm`.
    BranchTaken,
    /// Conditional branch whose condition failed: `pc + 4`.
    BranchNotTaken,
    /// JAL: `pc + imm`.
    Jal,
    /// JALR: the ALU result.
    Jalr,
}

impl PcSource {
    /// Returns `true` if control left the sequential path.
    pub const fn is_redirect(self) -> bool {
        matches!(self, Self::BranchTaken | Self::Jal | Self::Jalr)
    }
}

/// Evaluates a branch condition.
///
/// Equal/not-equal read the zero flag. Less-than/greater-or-equal read the
/// set-less-than result selected by ALU control for those branches.
pub const fn branch_taken(kind: BranchKind, alu: AluOutput) -> bool {
    match kind {
        BranchKind::Eq => alu.zero,
        BranchKind::Ne => !alu.zero,
        BranchKind::Lt => alu.result != 0,
        BranchKind::Ge => alu.result == 0,
    }
}

/// Selects the next program counter.
///
/// # Arguments
///
/// * `pc`      - Address of the current instruction.
/// * `signals` - Control signals of the current instruction.
/// * `imm`     - Sign-extended immediate of the current instruction.
/// * `alu`     - ALU outputs of the current cycle.
///
/// # Returns
///
/// The next PC and how it was chosen.
pub fn next_pc(pc: u64, signals: &ControlSignals, imm: i64, alu: AluOutput) -> (u64, PcSource) {
    let sequential = pc.wrapping_add(INSTRUCTION_SIZE);

    if let Some(kind) = signals.branch {
        return if branch_taken(kind, alu) {
            (pc.wrapping_add_signed(imm), PcSource::BranchTaken)
        } else {
            (sequential, PcSource::BranchNotTaken)
        };
    }

    match signals.jump {
        Some(JumpKind::Jal) => (pc.wrapping_add_signed(imm), PcSource::Jal),
        Some(JumpKind::Jalr) => (alu.result as u64, PcSource::Jalr),
        None => (sequential, PcSource::Sequential),
    }
}
