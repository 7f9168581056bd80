//! The core only reads its instruction stream through `InstructionSource`.

use std::sync::Arc;

use mockall::predicate::eq;

use rvdp_core::common::SimError;
use rvdp_core::config::Config;
use rvdp_core::core::{CoreStatus, Cpu};
use rvdp_core::soc::{InstructionMemory, InstructionSource};

use crate::common::InstructionBuilder as I;
use crate::common::mocks::imem::MockImem;

#[test]
fn fetches_each_pc_once_per_tick() {
    let mut imem = MockImem::new();
    let _ = imem
        .expect_fetch()
        .with(eq(0))
        .times(1)
        .return_const(Some(I::addi(1, 0, 3)));
    let _ = imem
        .expect_fetch()
        .with(eq(4))
        .times(1)
        .return_const(Some(I::addi(2, 1, 4)));
    let _ = imem.expect_last_addr().return_const(4u64);
    let _ = imem.expect_len().return_const(2usize);

    let mut cpu = Cpu::new(Arc::new(imem), &Config::default());
    assert_eq!(cpu.tick(), Ok(CoreStatus::Running));
    assert_eq!(cpu.tick(), Ok(CoreStatus::Halted));
    assert_eq!(cpu.reg(2), Some(7));
}

#[test]
fn missing_word_is_fetch_out_of_bounds() {
    let mut imem = MockImem::new();
    let _ = imem.expect_fetch().return_const(None::<u32>);
    let _ = imem.expect_last_addr().return_const(0x20u64);
    let _ = imem.expect_len().return_const(9usize);

    let mut cpu = Cpu::new(Arc::new(imem), &Config::default());
    assert_eq!(
        cpu.tick(),
        Err(SimError::FetchOutOfBounds {
            pc: 0,
            last_addr: 0x20,
        })
    );
}

#[test]
fn cores_sharing_a_stream_stay_isolated() {
    let program: Arc<dyn InstructionSource> =
        Arc::new(InstructionMemory::from_words(&[I::addi(1, 1, 1)]).unwrap());
    let mut a = Cpu::new(Arc::clone(&program), &Config::default());
    let mut b = Cpu::new(program, &Config::default());
    a.set_reg(1, 10).unwrap();
    let _ = a.tick().unwrap();
    let _ = b.tick().unwrap();
    assert_eq!(a.reg(1), Some(11));
    assert_eq!(b.reg(1), Some(1));
}
