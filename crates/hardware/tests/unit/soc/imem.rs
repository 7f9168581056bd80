//! Instruction memory construction and fetch.

use rvdp_core::common::LoadError;
use rvdp_core::soc::{InstructionEntry, InstructionMemory, InstructionSource};

#[test]
fn words_are_laid_out_from_zero() {
    let imem = InstructionMemory::from_words(&[0x13, 0x33, 0x63]).unwrap();
    assert_eq!(imem.len(), 3);
    assert_eq!(imem.last_addr(), 8);
    assert_eq!(imem.fetch(4), Some(0x33));
    assert_eq!(imem.fetch(12), None);
    assert_eq!(imem.fetch(2), None);
}

#[test]
fn empty_stream_is_rejected() {
    assert!(matches!(InstructionMemory::from_words(&[]), Err(LoadError::Empty)));
    assert!(matches!(InstructionMemory::from_entries(Vec::new()), Err(LoadError::Empty)));
}

#[test]
fn entries_must_step_by_four() {
    let entries = vec![
        InstructionEntry { addr: 0, word: 0x13 },
        InstructionEntry { addr: 8, word: 0x13 },
    ];
    assert!(matches!(
        InstructionMemory::from_entries(entries),
        Err(LoadError::BadAddress {
            index: 1,
            addr: 8,
            expected: 4,
        })
    ));
}

#[test]
fn entries_round_trip() {
    let entries = vec![
        InstructionEntry { addr: 0, word: 1 },
        InstructionEntry { addr: 4, word: 2 },
    ];
    let imem = InstructionMemory::from_entries(entries.clone()).unwrap();
    assert_eq!(imem.entries(), entries.as_slice());
    assert!(!imem.is_empty());
}
