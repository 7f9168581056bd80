//! Trace Loader and State Initialization.
//!
//! This module turns instruction traces into instruction streams and seeds a
//! core before its first cycle. It performs:
//! 1. **Trace parsing:** Each line is a raw word (`0x` hex, `0b` binary, or a bare
//!    32-digit binary string) or an assembly statement; raw words and assembly may be mixed.
//! 2. **Trace loading:** Reads a trace file from disk.
//! 3. **Initialization:** Applies register and memory seeds from the configuration.

use std::fs;
use std::path::Path;

use crate::common::{ConfigError, LoadError};
use crate::config::InitConfig;
use crate::core::Cpu;
use crate::isa::asm::{assemble, strip_comment};
use crate::soc::InstructionMemory;

/// Digits in a bare binary instruction word.
const WORD_BITS: usize = 32;

/// Parses a raw instruction word.
///
/// Accepts `0x`-prefixed hex, `0b`-prefixed binary, or exactly 32 binary
/// digits. Underscores are ignored.
///
/// # Returns
///
/// The word, or `None` if `token` is not a raw word.
pub fn parse_word(token: &str) -> Option<u32> {
    let token = token.trim().replace('_', "");
    if let Some(hex) = token.strip_prefix("0x").or_else(|| token.strip_prefix("0X")) {
        return u32::from_str_radix(hex, 16).ok();
    }
    if let Some(bin) = token.strip_prefix("0b").or_else(|| token.strip_prefix("0B")) {
        return u32::from_str_radix(bin, 2).ok();
    }
    if token.len() == WORD_BITS && token.bytes().all(|b| b == b'0' || b == b'1') {
        return u32::from_str_radix(&token, 2).ok();
    }
    None
}

/// Parses a trace into an instruction stream laid out from address 0.
///
/// Blank lines and comments (`#`, `//`) are skipped. Labels may be referenced
/// from any assembly line.
///
/// # Errors
///
/// * [`LoadError::Parse`] with the 1-based line number for a malformed line.
/// * [`LoadError::UndefinedLabel`] / [`LoadError::DuplicateLabel`] for label errors.
/// * [`LoadError::Empty`] if the trace holds no instructions.
pub fn parse_trace(text: &str) -> Result<InstructionMemory, LoadError> {
    let normalized: String = text
        .lines()
        .map(|line| {
            let body = strip_comment(line).trim();
            match parse_word(body) {
                Some(word) => format!(".word {word:#010x}\n"),
                None => format!("{line}\n"),
            }
        })
        .collect();
    let words = assemble(&normalized)?;
    InstructionMemory::from_words(&words)
}

/// Reads and parses a trace file.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read, otherwise as
/// [`parse_trace`].
pub fn load_trace_file(path: impl AsRef<Path>) -> Result<InstructionMemory, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_trace(&text)
}

/// Applies initial register and memory contents to a core.
///
/// Register seeds are applied first, then doubleword seeds, then byte seeds.
/// Seeds of `x0` are ignored.
///
/// # Arguments
///
/// * `cpu`  - The core to seed; normally before its first tick.
/// * `init` - Seeds from the configuration.
///
/// # Errors
///
/// Returns [`ConfigError::RegisterSeedOutOfRange`] or
/// [`ConfigError::MemorySeedOutOfRange`] for a seed outside the core. Seeds
/// applied before the failing one stay applied.
pub fn apply_init(cpu: &mut Cpu, init: &InitConfig) -> Result<(), ConfigError> {
    for seed in &init.registers {
        cpu.set_reg(seed.index, seed.value)?;
    }
    let dmem = cpu.data_memory_mut();
    for seed in &init.memory {
        dmem.store_dword(seed.addr, seed.value)
            .map_err(ConfigError::MemorySeedOutOfRange)?;
    }
    for seed in &init.bytes {
        dmem.write_byte(seed.addr, seed.value)
            .map_err(ConfigError::MemorySeedOutOfRange)?;
    }
    Ok(())
}
