//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains opcodes, function codes, field extraction, decoding and encoding
//! for the RV64I subset executed by the datapath, plus the text tooling built
//! on top of them.
//!
//! # Contents
//!
//! * `rv64i`: Opcode, funct3 and funct7 constants.
//! * `instruction` / `decode` / `encode`: Field layout, decoder and encoders.
//! * `asm` / `disasm`: Two-pass assembler and disassembler.
//! * `abi`: Register names.

/// Application Binary Interface (ABI) register name mappings.
pub mod abi;

/// Two-pass assembler for the supported subset.
pub mod asm;

/// Instruction decoding and per-format immediate builders.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// Per-format instruction encoders.
pub mod encode;

/// Instruction encoding structures and bit extraction utilities.
pub mod instruction;

/// Base integer instruction set constants.
pub mod rv64i;
