//! Control unit: one complete signal bundle per recognised opcode.

use pretty_assertions::assert_eq;
use rstest::rstest;

use rvdp_core::common::DecodeError;
use rvdp_core::core::signals::{AluOpClass, AluSrc, BranchKind, ControlSignals, JumpKind};
use rvdp_core::core::units::control::{branch_kind, control};
use rvdp_core::isa::rv64i::funct3;
use rvdp_core::isa::rv64i::opcodes::*;

#[test]
fn r_type() {
    assert_eq!(
        control(OP_REG, 0).unwrap(),
        ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Reg2,
            mem_write: false,
            mem_read: false,
            mem_to_reg: false,
            alu_op: AluOpClass::FunctionCode,
            branch: None,
            jump: None,
        }
    );
}

#[test]
fn immediate_arithmetic() {
    let s = control(OP_IMM, funct3::XOR).unwrap();
    assert!(s.reg_write);
    assert_eq!(s.alu_src, AluSrc::Imm);
    assert_eq!(s.alu_op, AluOpClass::FunctionCode);
    assert!(!s.mem_read && !s.mem_write && !s.mem_to_reg);
    assert_eq!((s.branch, s.jump), (None, None));
}

#[test]
fn load() {
    assert_eq!(
        control(OP_LOAD, funct3::LD).unwrap(),
        ControlSignals {
            reg_write: true,
            alu_src: AluSrc::Imm,
            mem_write: false,
            mem_read: true,
            mem_to_reg: true,
            alu_op: AluOpClass::ForcedAdd,
            branch: None,
            jump: None,
        }
    );
}

#[test]
fn store() {
    let s = control(OP_STORE, funct3::SD).unwrap();
    assert!(!s.reg_write);
    assert!(s.mem_write && !s.mem_read);
    assert_eq!(s.alu_src, AluSrc::Imm);
    assert_eq!(s.alu_op, AluOpClass::ForcedAdd);
}

#[test]
fn jumps_write_the_link_register() {
    let jal = control(OP_JAL, 0).unwrap();
    assert!(jal.reg_write);
    assert_eq!(jal.jump, Some(JumpKind::Jal));
    assert_eq!(jal.branch, None);

    let jalr = control(OP_JALR, funct3::JALR).unwrap();
    assert!(jalr.reg_write);
    assert_eq!(jalr.alu_src, AluSrc::Imm);
    assert_eq!(jalr.alu_op, AluOpClass::ForcedAdd);
    assert_eq!(jalr.jump, Some(JumpKind::Jalr));
}

#[rstest]
#[case(funct3::BEQ, BranchKind::Eq)]
#[case(funct3::BNE, BranchKind::Ne)]
#[case(funct3::BLT, BranchKind::Lt)]
#[case(funct3::BGE, BranchKind::Ge)]
fn branch_selects_exactly_one_kind(#[case] f3: u32, #[case] kind: BranchKind) {
    let s = control(OP_BRANCH, f3).unwrap();
    assert_eq!(s.branch, Some(kind));
    assert_eq!(s.jump, None);
    assert!(!s.reg_write && !s.mem_write && !s.mem_read);
    assert_eq!(s.alu_src, AluSrc::Reg2);
    assert_eq!(s.alu_op, AluOpClass::BranchCompare);
}

#[rstest]
#[case(0b010)]
#[case(0b011)]
#[case(0b110)]
#[case(0b111)]
fn unsigned_and_reserved_branches_fail(#[case] f3: u32) {
    assert_eq!(
        control(OP_BRANCH, f3),
        Err(DecodeError::UnknownBranchFunct3 { funct3: f3 })
    );
    assert!(branch_kind(f3).is_err());
}

#[test]
fn unknown_opcode_fails() {
    assert_eq!(
        control(0b0110111, 0),
        Err(DecodeError::UnknownOpcode { opcode: 0b0110111 })
    );
}

#[test]
fn only_memory_instructions_touch_memory() {
    for opcode in [OP_REG, OP_IMM, OP_LOAD, OP_STORE, OP_BRANCH, OP_JAL, OP_JALR] {
        let s = control(opcode, 0).unwrap();
        assert_eq!(s.mem_read, opcode == OP_LOAD, "{opcode:#09b}");
        assert_eq!(s.mem_to_reg, opcode == OP_LOAD, "{opcode:#09b}");
        assert_eq!(s.mem_write, opcode == OP_STORE, "{opcode:#09b}");
    }
}
