//! Branch decisions and next-PC selection.

use rstest::rstest;

use rvdp_core::core::signals::{AluOp, BranchKind, ControlSignals};
use rvdp_core::core::units::alu::Alu;
use rvdp_core::core::units::alu::control::alu_control;
use rvdp_core::core::units::branch::{PcSource, next_pc};
use rvdp_core::core::units::control::control;
use rvdp_core::isa::rv64i::funct3;
use rvdp_core::isa::rv64i::opcodes::{OP_BRANCH, OP_IMM, OP_JAL, OP_JALR};

const PC: u64 = 0x100;
const IMM: i64 = -16;

/// Runs a branch through control, ALU control, the ALU and next-PC selection.
fn branch(f3: u32, a: i64, b: i64) -> (u64, PcSource) {
    let signals = control(OP_BRANCH, f3).unwrap();
    let op = alu_control(signals.alu_op, f3, 0).unwrap();
    next_pc(PC, &signals, IMM, Alu::execute(op, a, b))
}

#[rstest]
#[case(funct3::BEQ, 5, 5, true)]
#[case(funct3::BEQ, 5, 6, false)]
#[case(funct3::BNE, 5, 6, true)]
#[case(funct3::BNE, -1, -1, false)]
#[case(funct3::BLT, -3, 2, true)]
#[case(funct3::BLT, 2, -3, false)]
#[case(funct3::BLT, 4, 4, false)]
#[case(funct3::BGE, 4, 4, true)]
#[case(funct3::BGE, 2, -3, true)]
#[case(funct3::BGE, -3, 2, false)]
fn decision_table(#[case] f3: u32, #[case] a: i64, #[case] b: i64, #[case] taken: bool) {
    let (pc, source) = branch(f3, a, b);
    if taken {
        assert_eq!(pc, PC - 16);
        assert_eq!(source, PcSource::BranchTaken);
    } else {
        assert_eq!(pc, PC + 4);
        assert_eq!(source, PcSource::BranchNotTaken);
    }
}

#[test]
fn jal_targets_pc_relative() {
    let signals = control(OP_JAL, 0).unwrap();
    let (pc, source) = next_pc(PC, &signals, 0x40, Alu::execute(signals_op(&signals), 1, 2));
    assert_eq!(pc, PC + 0x40);
    assert_eq!(source, PcSource::Jal);
    assert!(source.is_redirect());
}

#[test]
fn jalr_targets_alu_result() {
    let signals = control(OP_JALR, funct3::JALR).unwrap();
    let (pc, source) = next_pc(PC, &signals, 8, Alu::execute(signals_op(&signals), 0x2000, 8));
    assert_eq!(pc, 0x2008);
    assert_eq!(source, PcSource::Jalr);
}

#[test]
fn plain_instructions_are_sequential() {
    let signals = control(OP_IMM, funct3::ADD_SUB).unwrap();
    let (pc, source) = next_pc(PC, &signals, 100, Alu::execute(signals_op(&signals), 0, 100));
    assert_eq!(pc, PC + 4);
    assert_eq!(source, PcSource::Sequential);
    assert!(!source.is_redirect());
}

#[test]
fn lt_and_ge_read_the_slt_result_not_the_zero_flag() {
    let signals = ControlSignals {
        branch: Some(BranchKind::Lt),
        ..control(OP_BRANCH, funct3::BLT).unwrap()
    };
    // slt(1, 2) == 1 while the operands differ.
    let out = Alu::execute(AluOp::Slt, 1, 2);
    assert!(!out.zero);
    assert_eq!(next_pc(PC, &signals, IMM, out).1, PcSource::BranchTaken);
}

fn signals_op(signals: &ControlSignals) -> AluOp {
    alu_control(signals.alu_op, 0, 0).unwrap()
}
