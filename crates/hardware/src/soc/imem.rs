//! Instruction Memory.
//!
//! The instruction stream supplied by the loader. It provides:
//! 1. **Source Abstraction:** The [`InstructionSource`] trait the core fetches through.
//! 2. **Storage:** [`InstructionMemory`], an ordered, immutable list of `(addr, word)` entries.
//!
//! Addresses start at 0 and increase by 4; the last entry's address drives
//! the core's halt check. Cores share a stream through an `Arc` and never
//! modify it.

use crate::common::LoadError;
use crate::common::constants::INSTRUCTION_SIZE;

/// Read-only supplier of instruction words.
pub trait InstructionSource: Send + Sync {
    /// Returns the word at byte address `addr`, or `None` if no instruction lives there.
    fn fetch(&self, addr: u64) -> Option<u32>;

    /// Address of the last instruction in the stream.
    fn last_addr(&self) -> u64;

    /// Number of instructions in the stream.
    fn len(&self) -> usize;

    /// Returns `true` if the stream holds no instructions.
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One instruction of the stream.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct InstructionEntry {
    /// Byte address of the instruction.
    pub addr: u64,
    /// Raw 32-bit encoding.
    pub word: u32,
}

/// Immutable instruction stream, addresses `0, 4, 8, …`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct InstructionMemory {
    entries: Vec<InstructionEntry>,
}

impl InstructionMemory {
    /// Builds a stream from words laid out from address 0.
    ///
    /// # Errors
    ///
    /// Returns [`LoadError::Empty`] if `words` is empty.
    pub fn from_words(words: &[u32]) -> Result<Self, LoadError> {
        if words.is_empty() {
            return Err(LoadError::Empty);
        }
        let entries = words
            .iter()
            .zip((0u64..).step_by(INSTRUCTION_SIZE as usize))
            .map(|(&word, addr)| InstructionEntry { addr, word })
            .collect();
        Ok(Self { entries })
    }

    /// Builds a stream from explicit `(addr, word)` entries.
    ///
    /// # Errors
    ///
    /// * [`LoadError::Empty`] if `entries` is empty.
    /// * [`LoadError::BadAddress`] if addresses do not start at 0 and increase by 4.
    pub fn from_entries(entries: Vec<InstructionEntry>) -> Result<Self, LoadError> {
        if entries.is_empty() {
            return Err(LoadError::Empty);
        }
        for (index, entry) in entries.iter().enumerate() {
            let expected = index as u64 * INSTRUCTION_SIZE;
            if entry.addr != expected {
                return Err(LoadError::BadAddress {
                    index,
                    addr: entry.addr,
                    expected,
                });
            }
        }
        Ok(Self { entries })
    }

    /// The entries in address order.
    pub fn entries(&self) -> &[InstructionEntry] {
        &self.entries
    }
}

impl InstructionSource for InstructionMemory {
    fn fetch(&self, addr: u64) -> Option<u32> {
        if addr % INSTRUCTION_SIZE != 0 {
            return None;
        }
        let idx = usize::try_from(addr / INSTRUCTION_SIZE).ok()?;
        self.entries.get(idx).map(|e| e.word)
    }

    fn last_addr(&self) -> u64 {
        self.entries.last().map_or(0, |e| e.addr)
    }

    fn len(&self) -> usize {
        self.entries.len()
    }
}
