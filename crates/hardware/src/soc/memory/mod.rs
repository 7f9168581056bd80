//! Data Memory.
//!
//! This module implements the flat, byte-addressable data memory used by load
//! and store instructions. It provides:
//! 1. **Storage:** A fixed-capacity byte array, zero-initialised.
//! 2. **Doubleword Access:** 8-byte little-endian loads and stores with bounds checking.
//! 3. **Inspection:** Byte reads and doubleword iteration for reporting.
//!
//! Alignment is not enforced; any in-bounds address is accepted.

use std::ops::Range;

use crate::common::MemoryError;
use crate::common::constants::DWORD_BYTES;

/// Fixed-capacity byte-addressable data memory.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DataMemory {
    bytes: Vec<u8>,
}

impl DataMemory {
    /// Creates a zero-filled data memory of `capacity` bytes.
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity],
        }
    }

    /// Capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.bytes.len()
    }

    /// Resolves `[addr, addr + width)` to a byte range inside the memory.
    fn range(&self, addr: u64, width: usize) -> Result<Range<usize>, MemoryError> {
        let err = MemoryError::OutOfBounds {
            addr,
            width,
            capacity: self.bytes.len(),
        };
        let start = usize::try_from(addr).map_err(|_| err)?;
        let end = start.checked_add(width).ok_or(err)?;
        if end > self.bytes.len() {
            return Err(err);
        }
        Ok(start..end)
    }

    /// Loads a doubleword.
    ///
    /// Reads 8 bytes little-endian starting at `addr`.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the 8 bytes do not fit in memory.
    pub fn load_dword(&self, addr: u64) -> Result<i64, MemoryError> {
        let range = self.range(addr, DWORD_BYTES)?;
        let mut buf = [0u8; DWORD_BYTES];
        buf.copy_from_slice(&self.bytes[range]);
        Ok(i64::from_le_bytes(buf))
    }

    /// Stores a doubleword.
    ///
    /// Writes `val` as 8 bytes little-endian starting at `addr`. Nothing is
    /// written if the access is out of bounds.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if the 8 bytes do not fit in memory.
    pub fn store_dword(&mut self, addr: u64, val: i64) -> Result<(), MemoryError> {
        let range = self.range(addr, DWORD_BYTES)?;
        self.bytes[range].copy_from_slice(&val.to_le_bytes());
        Ok(())
    }

    /// Reads one byte, or `None` if `addr` is outside the memory.
    pub fn read_byte(&self, addr: u64) -> Option<u8> {
        usize::try_from(addr)
            .ok()
            .and_then(|idx| self.bytes.get(idx).copied())
    }

    /// Writes one byte.
    ///
    /// # Errors
    ///
    /// Returns [`MemoryError::OutOfBounds`] if `addr` is outside the memory.
    pub fn write_byte(&mut self, addr: u64, val: u8) -> Result<(), MemoryError> {
        let range = self.range(addr, 1)?;
        self.bytes[range.start] = val;
        Ok(())
    }

    /// Raw view of the whole memory.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Iterates over the aligned doublewords of memory as `(addr, value)`.
    ///
    /// A trailing partial doubleword is skipped.
    pub fn dwords(&self) -> impl Iterator<Item = (u64, i64)> + '_ {
        self.bytes
            .chunks_exact(DWORD_BYTES)
            .enumerate()
            .map(|(i, chunk)| {
                let mut buf = [0u8; DWORD_BYTES];
                buf.copy_from_slice(chunk);
                ((i * DWORD_BYTES) as u64, i64::from_le_bytes(buf))
            })
    }
}
