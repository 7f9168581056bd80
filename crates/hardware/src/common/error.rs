//! Error definitions.
//!
//! This module defines every failure the simulator can report. It provides:
//! 1. **Decode Failures:** Opcodes and function codes the datapath does not recognise.
//! 2. **Memory Failures:** Data-memory accesses that fall outside the allocated region.
//! 3. **Cycle Failures:** The fatal per-cycle taxonomy surfaced by `Cpu::tick`.
//! 4. **Setup Failures:** Trace loading and configuration errors raised before the first tick.

use std::path::PathBuf;

use thiserror::Error;

/// Failure to map an instruction word onto a datapath control configuration.
///
/// Raised by the decoder, the control unit and ALU control. The decoder never
/// guesses a format, so any of these is fatal to the current run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// The 7-bit opcode matches none of the recognised instruction classes.
    #[error("unrecognised opcode {opcode:#09b}")]
    UnknownOpcode {
        /// Offending opcode field.
        opcode: u32,
    },

    /// A branch opcode carries a funct3 outside {BEQ, BNE, BLT, BGE}.
    #[error("unrecognised branch funct3 {funct3:#05b}")]
    UnknownBranchFunct3 {
        /// Offending funct3 field.
        funct3: u32,
    },

    /// A function-code-determined ALU operation has no entry in the ALU control table.
    #[error("unrecognised ALU function (funct3 {funct3:#05b}, funct7 {funct7:#09b})")]
    UnknownAluFunction {
        /// funct3 field of the instruction.
        funct3: u32,
        /// funct7 field of the instruction (zero for immediate arithmetic).
        funct7: u32,
    },
}

/// Data-memory access failure.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Error)]
pub enum MemoryError {
    /// The access `[addr, addr + width)` does not fit in the allocated region.
    #[error("access of {width} bytes at {addr:#x} exceeds data memory of {capacity} bytes")]
    OutOfBounds {
        /// First byte address of the access.
        addr: u64,
        /// Access width in bytes.
        width: usize,
        /// Capacity of the data memory in bytes.
        capacity: usize,
    },
}

/// Fatal condition raised while advancing the core by one cycle.
///
/// None of these is recoverable: a malformed instruction stream is a bug in
/// the trace being simulated. The core state is left exactly as it was before
/// the failing cycle so the runner can still inspect it.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SimError {
    /// The instruction at `pc` could not be decoded.
    #[error("decode failure at pc {pc:#x} (inst {inst:#010x}): {source}")]
    Decode {
        /// Address of the offending instruction.
        pc: u64,
        /// Raw instruction word.
        inst: u32,
        /// Underlying decoder, control or ALU control failure.
        source: DecodeError,
    },

    /// The PC does not address any instruction in the stream.
    #[error("fetch out of bounds at pc {pc:#x} (last instruction at {last_addr:#x})")]
    FetchOutOfBounds {
        /// Offending program counter.
        pc: u64,
        /// Address of the last instruction in the stream.
        last_addr: u64,
    },

    /// The PC is not a multiple of the instruction size.
    #[error("misaligned fetch at pc {pc:#x}")]
    MisalignedFetch {
        /// Offending program counter.
        pc: u64,
    },

    /// A load or store addressed memory outside the data-memory region.
    #[error("memory access out of bounds at pc {pc:#x} (inst {inst:#010x}): {source}")]
    MemoryOutOfBounds {
        /// Address of the load/store instruction.
        pc: u64,
        /// Raw instruction word.
        inst: u32,
        /// Underlying data-memory failure.
        source: MemoryError,
    },

    /// `tick` was invoked after the core reported that it had halted.
    #[error("tick after halt (pc {pc:#x}, clock {clock})")]
    Halted {
        /// Program counter at which the core halted.
        pc: u64,
        /// Clock value at which the core halted.
        clock: u64,
    },
}

/// Failure while turning a trace into an instruction stream.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The trace file could not be read.
    #[error("could not read trace '{}': {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// A line could not be parsed as an instruction word or assembly.
    #[error("line {line}: {msg}")]
    Parse {
        /// 1-based line number.
        line: usize,
        /// Description of the problem.
        msg: String,
    },

    /// A branch or jump names a label that is never defined.
    #[error("line {line}: undefined label '{label}'")]
    UndefinedLabel {
        /// 1-based line number of the reference.
        line: usize,
        /// Label name.
        label: String,
    },

    /// A label is defined more than once.
    #[error("line {line}: duplicate label '{label}'")]
    DuplicateLabel {
        /// 1-based line number of the second definition.
        line: usize,
        /// Label name.
        label: String,
    },

    /// The trace contains no instructions.
    #[error("instruction stream is empty")]
    Empty,

    /// Instruction addresses do not start at 0 and increase by 4.
    #[error("instruction {index} has address {addr:#x}, expected {expected:#x}")]
    BadAddress {
        /// Position of the entry in the stream.
        index: usize,
        /// Address supplied for the entry.
        addr: u64,
        /// Address the entry must have.
        expected: u64,
    },
}

/// Invalid or unreadable simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{}': {source}", path.display())]
    Io {
        /// Path that failed to read.
        path: PathBuf,
        /// Underlying I/O error.
        source: std::io::Error,
    },

    /// The configuration is not valid JSON for [`Config`](crate::config::Config).
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),

    /// The register file is smaller than the 5-bit register fields can address.
    #[error("register file of {num_regs} registers is smaller than the required {min}")]
    TooFewRegisters {
        /// Configured register count.
        num_regs: usize,
        /// Minimum register count.
        min: usize,
    },

    /// The data memory cannot hold a single doubleword.
    #[error("data memory of {bytes} bytes cannot hold a doubleword")]
    DataMemoryTooSmall {
        /// Configured capacity.
        bytes: usize,
    },

    /// A register seed names a register outside the register file.
    #[error("register seed x{index} is outside a register file of {num_regs} registers")]
    RegisterSeedOutOfRange {
        /// Seeded register index.
        index: usize,
        /// Configured register count.
        num_regs: usize,
    },

    /// A memory seed does not fit in the data memory.
    #[error("memory seed: {0}")]
    MemorySeedOutOfRange(#[source] MemoryError),
}
