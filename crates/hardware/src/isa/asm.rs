//! Two-pass assembler for the RV64I datapath subset.
//!
//! Turns assembly text into instruction words laid out from address 0. It provides:
//! 1. **Pass one:** Strips comments, records `label:` definitions and assigns addresses.
//! 2. **Pass two:** Parses each statement and encodes it, resolving label references.
//!
//! Accepted statements:
//! - `add sub sll slt xor srl or and` as `op rd, rs1, rs2`
//! - `addi slti xori ori andi` as `op rd, rs1, imm`; `slli srli` with a 0..=63 shift amount
//! - `ld rd, imm(rs1)` and `sd rs2, imm(rs1)`
//! - `beq bne blt bge` as `op rs1, rs2, target`
//! - `jal target`, `jal rd, target`
//! - `jalr rs1`, `jalr rd, imm(rs1)`, `jalr rd, rs1, imm`
//! - `.word value` for a raw 32-bit word
//!
//! Registers are `x0`..`x31` or ABI names. Immediates are decimal, `0x` hex or
//! `0b` binary, optionally negative. Targets are byte offsets or labels.
//! `#` and `//` start comments.
//!
//! # Examples
//!
//! ```
//! use rvdp_core::isa::asm::assemble;
//!
//! let words = assemble("loop: addi a0, a0, -1\n bne a0, zero, loop\n").unwrap();
//! assert_eq!(words.len(), 2);
//! assert_eq!(words[0], 0xFFF5_0513);
//! ```

use std::collections::HashMap;

use crate::common::LoadError;
use crate::common::constants::INSTRUCTION_SIZE;
use crate::isa::abi;
use crate::isa::encode::{b_type, i_type, j_type, r_type, s_type};
use crate::isa::rv64i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Smallest I-type and S-type immediate.
const IMM12_MIN: i64 = -2048;
/// Largest I-type and S-type immediate.
const IMM12_MAX: i64 = 2047;
/// Largest shift amount for 64-bit shifts.
const SHAMT_MAX: i64 = 63;
/// Branch offsets span 13 signed bits.
const BRANCH_RANGE: (i64, i64) = (-4096, 4094);
/// Jump offsets span 21 signed bits.
const JUMP_RANGE: (i64, i64) = (-1_048_576, 1_048_574);

/// One instruction statement located by pass one.
#[derive(Debug)]
struct Statement<'a> {
    line: usize,
    addr: u64,
    text: &'a str,
}

/// Assembles source text into instruction words.
///
/// # Errors
///
/// * [`LoadError::Parse`] for malformed statements or out-of-range operands.
/// * [`LoadError::DuplicateLabel`] if a label is defined twice.
/// * [`LoadError::UndefinedLabel`] if a target names no label.
pub fn assemble(source: &str) -> Result<Vec<u32>, LoadError> {
    let (statements, labels) = first_pass(source)?;
    statements
        .iter()
        .map(|stmt| Encoder { stmt, labels: &labels }.encode())
        .collect()
}

/// Removes `#` and `//` comments from a line.
pub fn strip_comment(line: &str) -> &str {
    let cut = [line.find('#'), line.find("//")]
        .into_iter()
        .flatten()
        .min()
        .unwrap_or(line.len());
    &line[..cut]
}

/// Records labels and the address of every statement.
fn first_pass(source: &str) -> Result<(Vec<Statement<'_>>, HashMap<&str, u64>), LoadError> {
    let mut statements = Vec::new();
    let mut labels = HashMap::new();
    let mut addr = 0u64;

    for (idx, raw) in source.lines().enumerate() {
        let line = idx + 1;
        let mut text = strip_comment(raw).trim();

        while let Some((label, rest)) = split_label(text) {
            if labels.insert(label, addr).is_some() {
                return Err(LoadError::DuplicateLabel {
                    line,
                    label: label.to_owned(),
                });
            }
            text = rest.trim();
        }

        if !text.is_empty() {
            statements.push(Statement { line, addr, text });
            addr += INSTRUCTION_SIZE;
        }
    }
    Ok((statements, labels))
}

/// Splits a leading `label:` from a statement.
fn split_label(text: &str) -> Option<(&str, &str)> {
    let (head, rest) = text.split_once(':')?;
    let head = head.trim();
    is_label(head).then_some((head, rest))
}

fn is_label(token: &str) -> bool {
    let mut chars = token.chars();
    chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_' || c == '.')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '.')
}

/// Parses an integer literal: decimal, `0x` hex or `0b` binary, optionally negative.
pub fn parse_int(token: &str) -> Option<i64> {
    let token = token.trim();
    let (negative, body) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    let magnitude = if let Some(hex) = body.strip_prefix("0x").or_else(|| body.strip_prefix("0X")) {
        i128::from_str_radix(&hex.replace('_', ""), 16).ok()?
    } else if let Some(bin) = body.strip_prefix("0b").or_else(|| body.strip_prefix("0B")) {
        i128::from_str_radix(&bin.replace('_', ""), 2).ok()?
    } else {
        body.parse::<i128>().ok()?
    };
    let value = if negative { -magnitude } else { magnitude };
    i64::try_from(value).ok()
}

/// Encodes one statement of pass two.
struct Encoder<'s, 'a> {
    stmt: &'s Statement<'a>,
    labels: &'s HashMap<&'a str, u64>,
}

impl Encoder<'_, '_> {
    fn encode(&self) -> Result<u32, LoadError> {
        let (mnemonic, rest) = self
            .stmt
            .text
            .split_once(char::is_whitespace)
            .unwrap_or((self.stmt.text, ""));
        let ops: Vec<&str> = if rest.trim().is_empty() {
            Vec::new()
        } else {
            rest.split(',').map(str::trim).collect()
        };
        let mnemonic = mnemonic.to_ascii_lowercase();

        match mnemonic.as_str() {
            ".word" => {
                let [value] = self.operands(&ops)?;
                self.word(value)
            }
            "add" | "sub" | "sll" | "slt" | "xor" | "srl" | "or" | "and" => {
                let [rd, rs1, rs2] = self.operands(&ops)?;
                let (funct3, funct7) = match mnemonic.as_str() {
                    "add" => (f3::ADD_SUB, f7::DEFAULT),
                    "sub" => (f3::ADD_SUB, f7::SUB),
                    "sll" => (f3::SLL, f7::DEFAULT),
                    "slt" => (f3::SLT, f7::DEFAULT),
                    "xor" => (f3::XOR, f7::DEFAULT),
                    "srl" => (f3::SRL, f7::DEFAULT),
                    "or" => (f3::OR, f7::DEFAULT),
                    _ => (f3::AND, f7::DEFAULT),
                };
                Ok(r_type(
                    op::OP_REG,
                    self.reg(rd)?,
                    funct3,
                    self.reg(rs1)?,
                    self.reg(rs2)?,
                    funct7,
                ))
            }
            "addi" | "slti" | "xori" | "ori" | "andi" => {
                let [rd, rs1, imm] = self.operands(&ops)?;
                let funct3 = match mnemonic.as_str() {
                    "addi" => f3::ADD_SUB,
                    "slti" => f3::SLT,
                    "xori" => f3::XOR,
                    "ori" => f3::OR,
                    _ => f3::AND,
                };
                let imm = self.imm(imm, IMM12_MIN, IMM12_MAX)?;
                Ok(i_type(op::OP_IMM, self.reg(rd)?, funct3, self.reg(rs1)?, imm))
            }
            "slli" | "srli" => {
                let [rd, rs1, shamt] = self.operands(&ops)?;
                let funct3 = if mnemonic == "slli" { f3::SLL } else { f3::SRL };
                let shamt = self.imm(shamt, 0, SHAMT_MAX)?;
                Ok(i_type(op::OP_IMM, self.reg(rd)?, funct3, self.reg(rs1)?, shamt))
            }
            "ld" => {
                let [rd, mem] = self.operands(&ops)?;
                let (imm, rs1) = self.mem_operand(mem)?;
                Ok(i_type(op::OP_LOAD, self.reg(rd)?, f3::LD, rs1, imm))
            }
            "sd" => {
                let [rs2, mem] = self.operands(&ops)?;
                let (imm, rs1) = self.mem_operand(mem)?;
                Ok(s_type(op::OP_STORE, f3::SD, rs1, self.reg(rs2)?, imm))
            }
            "beq" | "bne" | "blt" | "bge" => {
                let [rs1, rs2, target] = self.operands(&ops)?;
                let funct3 = match mnemonic.as_str() {
                    "beq" => f3::BEQ,
                    "bne" => f3::BNE,
                    "blt" => f3::BLT,
                    _ => f3::BGE,
                };
                let offset = self.target(target, BRANCH_RANGE)?;
                Ok(b_type(op::OP_BRANCH, funct3, self.reg(rs1)?, self.reg(rs2)?, offset))
            }
            "jal" => {
                let (rd, target) = match ops.as_slice() {
                    [target] => (abi::REG_RA, *target),
                    [rd, target] => (self.reg(rd)?, *target),
                    _ => return Err(self.error(format!("jal expects 1 or 2 operands, found {}", ops.len()))),
                };
                Ok(j_type(op::OP_JAL, rd, self.target(target, JUMP_RANGE)?))
            }
            "jalr" => {
                let (rd, rs1, imm) = match ops.as_slice() {
                    [rs1] => (abi::REG_RA, self.reg(rs1)?, 0),
                    [rd, mem] => {
                        let (imm, rs1) = self.mem_operand(mem)?;
                        (self.reg(rd)?, rs1, imm)
                    }
                    [rd, rs1, imm] => (
                        self.reg(rd)?,
                        self.reg(rs1)?,
                        self.imm(imm, IMM12_MIN, IMM12_MAX)?,
                    ),
                    _ => return Err(self.error(format!("jalr expects 1 to 3 operands, found {}", ops.len()))),
                };
                Ok(i_type(op::OP_JALR, rd, f3::JALR, rs1, imm))
            }
            other => Err(self.error(format!("unknown mnemonic '{other}'"))),
        }
    }

    /// Checks the operand count and returns the operands as an array.
    fn operands<'o, const N: usize>(&self, ops: &[&'o str]) -> Result<[&'o str; N], LoadError> {
        <[&str; N]>::try_from(ops)
            .map_err(|_| self.error(format!("expected {N} operands, found {}", ops.len())))
    }

    fn reg(&self, token: &str) -> Result<usize, LoadError> {
        abi::parse(token).ok_or_else(|| self.error(format!("unknown register '{token}'")))
    }

    fn imm(&self, token: &str, min: i64, max: i64) -> Result<i64, LoadError> {
        let value =
            parse_int(token).ok_or_else(|| self.error(format!("invalid immediate '{token}'")))?;
        if !(min..=max).contains(&value) {
            return Err(self.error(format!("immediate {value} outside {min}..={max}")));
        }
        Ok(value)
    }

    fn word(&self, token: &str) -> Result<u32, LoadError> {
        parse_int(token)
            .and_then(|v| u32::try_from(v).ok())
            .ok_or_else(|| self.error(format!("invalid word '{token}'")))
    }

    /// Parses `imm(rs1)`; a missing immediate means 0.
    fn mem_operand(&self, token: &str) -> Result<(i64, usize), LoadError> {
        let malformed = || self.error(format!("expected imm(reg), found '{token}'"));
        let (imm, rest) = token.split_once('(').ok_or_else(malformed)?;
        let reg = rest.strip_suffix(')').ok_or_else(malformed)?;
        let imm = if imm.trim().is_empty() {
            0
        } else {
            self.imm(imm, IMM12_MIN, IMM12_MAX)?
        };
        Ok((imm, self.reg(reg)?))
    }

    /// Resolves a branch or jump target to a byte offset from this statement.
    fn target(&self, token: &str, (min, max): (i64, i64)) -> Result<i64, LoadError> {
        let offset = if let Some(value) = parse_int(token) {
            value
        } else if is_label(token) {
            let addr = self
                .labels
                .get(token)
                .ok_or_else(|| LoadError::UndefinedLabel {
                    line: self.stmt.line,
                    label: token.to_owned(),
                })?;
            addr.wrapping_sub(self.stmt.addr) as i64
        } else {
            return Err(self.error(format!("invalid target '{token}'")));
        };
        if offset % 2 != 0 {
            return Err(self.error(format!("target offset {offset} is odd")));
        }
        if !(min..=max).contains(&offset) {
            return Err(self.error(format!("target offset {offset} outside {min}..={max}")));
        }
        Ok(offset)
    }

    fn error(&self, msg: String) -> LoadError {
        LoadError::Parse {
            line: self.stmt.line,
            msg,
        }
    }
}
