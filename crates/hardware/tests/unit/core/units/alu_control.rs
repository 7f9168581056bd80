//! ALU control table.

use rstest::rstest;

use rvdp_core::common::DecodeError;
use rvdp_core::core::signals::{AluOp, AluOpClass};
use rvdp_core::core::units::alu::control::alu_control;

#[rstest]
#[case(AluOpClass::ForcedAdd, 0b011, 0, AluOp::Add)]
#[case(AluOpClass::ForcedAdd, 0b000, 0b0100000, AluOp::Add)]
#[case(AluOpClass::BranchCompare, 0b000, 0, AluOp::Sub)]
#[case(AluOpClass::BranchCompare, 0b001, 0, AluOp::Sub)]
#[case(AluOpClass::BranchCompare, 0b100, 0, AluOp::Slt)]
#[case(AluOpClass::BranchCompare, 0b101, 0, AluOp::Slt)]
#[case(AluOpClass::FunctionCode, 0b000, 0b0000000, AluOp::Add)]
#[case(AluOpClass::FunctionCode, 0b000, 0b0100000, AluOp::Sub)]
#[case(AluOpClass::FunctionCode, 0b001, 0, AluOp::Sll)]
#[case(AluOpClass::FunctionCode, 0b010, 0, AluOp::Slt)]
#[case(AluOpClass::FunctionCode, 0b100, 0, AluOp::Xor)]
#[case(AluOpClass::FunctionCode, 0b101, 0, AluOp::Srl)]
#[case(AluOpClass::FunctionCode, 0b101, 0b0100000, AluOp::Srl)]
#[case(AluOpClass::FunctionCode, 0b110, 0, AluOp::Or)]
#[case(AluOpClass::FunctionCode, 0b111, 0, AluOp::And)]
fn table(#[case] class: AluOpClass, #[case] f3: u32, #[case] f7: u32, #[case] op: AluOp) {
    assert_eq!(alu_control(class, f3, f7), Ok(op));
}

#[rstest]
#[case(0b000, 0b0000001)] // mul
#[case(0b011, 0)] // sltu
fn missing_combinations_fail(#[case] f3: u32, #[case] f7: u32) {
    assert_eq!(
        alu_control(AluOpClass::FunctionCode, f3, f7),
        Err(DecodeError::UnknownAluFunction { funct3: f3, funct7: f7 })
    );
}
