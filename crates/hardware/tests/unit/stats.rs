//! Statistics collection.

use rstest::rstest;

use rvdp_core::core::units::control::control;
use rvdp_core::isa::rv64i::{funct3, opcodes};
use rvdp_core::stats::{InstClass, SimStats};

use crate::common::{InstructionBuilder as I, TestContext};

#[rstest]
#[case(opcodes::OP_REG, 0, InstClass::AluReg)]
#[case(opcodes::OP_IMM, 0, InstClass::AluImm)]
#[case(opcodes::OP_LOAD, 0b011, InstClass::Load)]
#[case(opcodes::OP_STORE, 0b011, InstClass::Store)]
#[case(opcodes::OP_BRANCH, funct3::BEQ, InstClass::Branch)]
#[case(opcodes::OP_JAL, 0, InstClass::Jump)]
#[case(opcodes::OP_JALR, 0, InstClass::Jump)]
fn classifies_by_control_signals(#[case] opcode: u32, #[case] f3: u32, #[case] class: InstClass) {
    let signals = control(opcode, f3).unwrap();
    assert_eq!(InstClass::from_signals(&signals), class);
}

#[test]
fn cpi_is_zero_before_retirement() {
    assert!(SimStats::default().cpi().abs() < f64::EPSILON);
}

#[test]
fn record_counts_branch_outcomes() {
    let mut stats = SimStats::default();
    stats.record(InstClass::Branch, true);
    stats.record(InstClass::Branch, false);
    stats.record(InstClass::Load, true);
    assert_eq!(stats.cycles, 3);
    assert_eq!(stats.instructions_retired, 3);
    assert_eq!(stats.count(InstClass::Branch), 2);
    assert_eq!(stats.count(InstClass::Load), 1);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.branches_not_taken, 1);
    assert!((stats.cpi() - 1.0).abs() < f64::EPSILON);
}

#[test]
fn report_lists_mix() {
    let mut stats = SimStats::default();
    stats.record(InstClass::Store, false);
    let report = stats.to_string();
    let cycles_line = report.lines().find(|l| l.starts_with("sim_cycles")).unwrap();
    assert_eq!(cycles_line.split_whitespace().last(), Some("1"));
    assert!(report.contains("op.store"));
    assert!(report.contains("(100.00%)"));
}

#[test]
fn core_statistics_track_a_run() {
    // x5 = 2; loop: x5 -= 1; bne x5, x0, loop
    let mut tc = TestContext::new(&[
        I::addi(5, 0, 2),
        I::addi(5, 5, -1),
        I::branch(funct3::BNE, 5, 0, -4),
    ]);
    let _ = tc.run_to_halt();
    let stats = tc.cpu().stats();
    assert_eq!(stats.cycles, 5);
    assert_eq!(stats.count(InstClass::AluImm), 3);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.branches_not_taken, 1);
}
