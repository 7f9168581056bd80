//! Cycle behaviour of the single-cycle core.
//!
//! End-to-end scenarios, the halt condition, `x0` immutability and the
//! writeback/next-PC rules, each driven through `Cpu::tick`.

use pretty_assertions::assert_eq;
use proptest::prelude::*;

use rvdp_core::config::Config;
use rvdp_core::core::CoreStatus;
use rvdp_core::isa::rv64i::funct3::{BGE, BLT, BNE};

use crate::common::{InstructionBuilder as I, TestContext};

#[test]
fn single_add_into_x5() {
    let mut ctx = TestContext::new(&[I::add(5, 0, 0), I::nop()]);
    ctx.set_reg(5, 99);
    let status = ctx.tick().unwrap();
    assert_eq!(ctx.get_reg(5), 0);
    assert_eq!(ctx.cpu().pc(), 4);
    assert_eq!(ctx.cpu().clock(), 1);
    assert_eq!(status, CoreStatus::Running);
}

#[test]
fn single_add_as_last_instruction_halts() {
    let mut ctx = TestContext::new(&[I::add(5, 0, 0)]);
    assert_eq!(ctx.tick().unwrap(), CoreStatus::Halted);
    assert!(ctx.cpu().is_halted());
}

#[test]
fn store_then_load_42() {
    let mut ctx = TestContext::new(&[I::sd(6, 0, 0), I::ld(7, 0, 0)]);
    ctx.set_reg(6, 42);

    let _ = ctx.tick().unwrap();
    let bytes: Vec<u8> = (0..8).map(|a| ctx.cpu().mem_byte(a).unwrap()).collect();
    assert_eq!(bytes, 42i64.to_le_bytes().to_vec());

    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.get_reg(7), 42);
}

#[test]
fn backward_beq_moves_pc_back_by_eight() {
    let mut ctx = TestContext::new(&[I::nop(), I::nop(), I::beq(1, 2, -8), I::nop()]);
    ctx.set_reg(1, 7);
    ctx.set_reg(2, 7);
    let _ = ctx.run(2);
    assert_eq!(ctx.cpu().pc(), 8);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.cpu().pc(), 0);
}

#[test]
fn not_taken_branch_falls_through() {
    let mut ctx = TestContext::new(&[I::branch(BNE, 1, 2, -4), I::nop()]);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.cpu().pc(), 4);
}

#[test]
fn blt_and_bge_on_signed_operands() {
    let program = [
        I::branch(BLT, 1, 2, 8), // -1 < 1: taken to 8
        I::nop(),
        I::branch(BGE, 1, 2, 8), // -1 >= 1: not taken
        I::nop(),
    ];
    let mut ctx = TestContext::new(&program);
    ctx.set_reg(1, -1);
    ctx.set_reg(2, 1);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.cpu().pc(), 8);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.cpu().pc(), 12);
}

#[test]
fn x0_destination_is_discarded() {
    let mut ctx = TestContext::new(&[I::addi(0, 0, 123), I::add(1, 0, 0), I::nop()]);
    let _ = ctx.run(2);
    assert_eq!(ctx.get_reg(0), 0);
    assert_eq!(ctx.get_reg(1), 0);
}

#[test]
fn jal_links_and_jumps() {
    let mut ctx = TestContext::new(&[I::jal(1, 12), I::nop(), I::nop(), I::nop()]);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.get_reg(1), 4);
    assert_eq!(ctx.cpu().pc(), 12);
}

#[test]
fn jalr_uses_rs1_plus_imm_and_links() {
    let mut ctx = TestContext::new(&[I::nop(), I::jalr(5, 1, 4), I::nop(), I::nop()]);
    ctx.set_reg(1, 8);
    let _ = ctx.run(2);
    assert_eq!(ctx.get_reg(5), 8);
    assert_eq!(ctx.cpu().pc(), 12);
}

#[test]
fn jalr_reads_rs1_before_writing_rd() {
    // jalr ra, 0(ra): target uses the old ra.
    let mut ctx = TestContext::new(&[I::jalr(1, 1, 0), I::nop(), I::nop()]);
    ctx.set_reg(1, 8);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.cpu().pc(), 8);
    assert_eq!(ctx.get_reg(1), 4);
}

#[test]
fn operands_are_read_before_writeback() {
    // add x1, x1, x1 doubles the old value once.
    let mut ctx = TestContext::new(&[I::add(1, 1, 1)]);
    ctx.set_reg(1, 21);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.get_reg(1), 42);
}

#[test]
fn addi_with_large_negative_immediate_adds() {
    // The high immediate bits look like the SUB funct7 but must not subtract.
    let mut ctx = TestContext::new(&[I::addi(1, 2, -1024)]);
    ctx.set_reg(2, 2000);
    let _ = ctx.tick().unwrap();
    assert_eq!(ctx.get_reg(1), 976);
}

#[test]
fn halts_after_n_straight_line_ticks() {
    for n in 1..=6 {
        let program = vec![I::nop(); n];
        let mut ctx = TestContext::new(&program);
        for i in 1..=n {
            let status = ctx.tick().unwrap();
            let expected = if i == n { CoreStatus::Halted } else { CoreStatus::Running };
            assert_eq!(status, expected, "n={n} tick={i}");
        }
        assert_eq!(ctx.cpu().clock(), n as u64);
        assert_eq!(ctx.cpu().pc(), 4 * n as u64);
    }
}

#[test]
fn counted_loop_sums_down() {
    // a0 = 5; loop: a1 += a0; a0 -= 1; bne a0, zero, loop
    let program = [
        I::addi(10, 0, 5),
        I::add(11, 11, 10),
        I::addi(10, 10, -1),
        I::branch(BNE, 10, 0, -8),
    ];
    let mut ctx = TestContext::new(&program);
    let summary = ctx.run_to_halt();
    assert_eq!(ctx.get_reg(11), 15);
    assert_eq!(ctx.get_reg(10), 0);
    assert_eq!(summary.cycles, 1 + 5 * 3);
}

#[test]
fn stats_track_the_instruction_mix() {
    let program = [
        I::addi(1, 0, 1),
        I::add(2, 1, 1),
        I::sd(2, 0, 0),
        I::ld(3, 0, 0),
        I::beq(0, 0, 8),
        I::nop(),
        I::jal(0, 4),
        I::nop(),
    ];
    let mut ctx = TestContext::new(&program);
    let _ = ctx.run_to_halt();
    let stats = ctx.cpu().stats();
    assert_eq!(stats.instructions_retired, 7);
    assert_eq!(stats.inst_alu_imm, 2);
    assert_eq!(stats.inst_alu_reg, 1);
    assert_eq!(stats.inst_load, 1);
    assert_eq!(stats.inst_store, 1);
    assert_eq!(stats.inst_branch, 1);
    assert_eq!(stats.branches_taken, 1);
    assert_eq!(stats.inst_jump, 1);
}

#[test]
fn larger_register_file_is_addressable_by_seeding() {
    let mut config = Config::default();
    config.core.num_regs = 64;
    let mut ctx = TestContext::with_config(&[I::nop()], &config);
    ctx.set_reg(40, 5);
    assert_eq!(ctx.cpu().registers().len(), 64);
    assert_eq!(ctx.get_reg(40), 5);
}

proptest! {
    #[test]
    fn store_load_round_trip(slot in 0u64..127, val in any::<i64>()) {
        let addr = slot * 8;
        let mut ctx = TestContext::new(&[I::sd(2, 1, 0), I::ld(3, 1, 0)]);
        ctx.set_reg(1, addr as i64);
        ctx.set_reg(2, val);
        let _ = ctx.run(2);
        prop_assert_eq!(ctx.get_reg(3), val);
        prop_assert_eq!(ctx.load(addr), val);
    }

    #[test]
    fn identical_inputs_are_deterministic(a in any::<i64>(), b in any::<i64>()) {
        let program = [I::add(3, 1, 2), I::sub(4, 1, 2), I::sd(3, 0, 8), I::ld(5, 0, 8)];
        let run = || {
            let mut ctx = TestContext::new(&program);
            ctx.set_reg(1, a);
            ctx.set_reg(2, b);
            let summary = ctx.run_to_halt();
            (summary, ctx.cpu().registers().to_vec(), ctx.cpu().data_memory().as_bytes().to_vec())
        };
        prop_assert_eq!(run(), run());
    }
}
