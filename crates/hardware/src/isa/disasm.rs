//! Instruction Disassembler for the RV64I datapath subset.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for trace logging, the CLI and test diagnostics.
//!
//! Covers register and immediate arithmetic, `ld`, `sd`, the four conditional
//! branches, `jal` and `jalr`. Everything else renders as `unknown`. The text
//! names what the encoding means architecturally (`sra`, `srai`), which may
//! differ from what the datapath's ALU control selects for it.
//!
//! # Usage
//!
//! ```
//! use rvdp_core::isa::disasm::disassemble;
//! let text = disassemble(0x00A00513);
//! assert_eq!(text, "addi a0, zero, 10");
//! ```

use crate::isa::abi::name as xreg;
use crate::isa::decode::{b_type_imm, i_type_imm, j_type_imm, s_type_imm};
use crate::isa::instruction::InstructionBits;
use crate::isa::rv64i::{funct3 as f3, funct7 as f7, opcodes as op};

/// Mask of the shift amount in shift-immediate encodings.
const SHAMT_MASK: i64 = 0x3F;

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// Returns a mnemonic like `"add a0, a1, a2"` or `"unknown"` for
/// unrecognised encodings. Branch and jump targets are shown as byte offsets
/// relative to the instruction.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    let rd = xreg(inst.rd());
    let rs1 = xreg(inst.rs1());
    let rs2 = xreg(inst.rs2());
    let funct3 = inst.funct3();
    let funct7 = inst.funct7();

    match inst.opcode() {
        op::OP_REG => match reg_mnemonic(funct3, funct7) {
            Some(mn) => format!("{mn} {rd}, {rs1}, {rs2}"),
            None => unknown(),
        },
        op::OP_IMM => {
            let imm = i_type_imm(inst);
            match funct3 {
                f3::SLL => format!("slli {rd}, {rs1}, {}", imm & SHAMT_MASK),
                f3::SRL => {
                    let mn = if funct7 & f7::SUB == 0 { "srli" } else { "srai" };
                    format!("{mn} {rd}, {rs1}, {}", imm & SHAMT_MASK)
                }
                _ => {
                    let mn = match funct3 {
                        f3::ADD_SUB => "addi",
                        f3::SLT => "slti",
                        f3::XOR => "xori",
                        f3::OR => "ori",
                        f3::AND => "andi",
                        _ => "sltiu",
                    };
                    format!("{mn} {rd}, {rs1}, {imm}")
                }
            }
        }
        op::OP_LOAD if funct3 == f3::LD => format!("ld {rd}, {}({rs1})", i_type_imm(inst)),
        op::OP_STORE if funct3 == f3::SD => format!("sd {rs2}, {}({rs1})", s_type_imm(inst)),
        op::OP_BRANCH => {
            let mn = match funct3 {
                f3::BEQ => "beq",
                f3::BNE => "bne",
                f3::BLT => "blt",
                f3::BGE => "bge",
                _ => return unknown(),
            };
            format!("{mn} {rs1}, {rs2}, {}", b_type_imm(inst))
        }
        op::OP_JAL => format!("jal {rd}, {}", j_type_imm(inst)),
        op::OP_JALR if funct3 == f3::JALR => format!("jalr {rd}, {}({rs1})", i_type_imm(inst)),
        _ => unknown(),
    }
}

/// Mnemonic of an R-type instruction.
const fn reg_mnemonic(funct3: u32, funct7: u32) -> Option<&'static str> {
    let mn = match (funct3, funct7) {
        (f3::ADD_SUB, f7::DEFAULT) => "add",
        (f3::ADD_SUB, f7::SUB) => "sub",
        (f3::SLL, f7::DEFAULT) => "sll",
        (f3::SLT, f7::DEFAULT) => "slt",
        (f3::XOR, f7::DEFAULT) => "xor",
        (f3::SRL, f7::DEFAULT) => "srl",
        (f3::SRL, f7::SUB) => "sra",
        (f3::OR, f7::DEFAULT) => "or",
        (f3::AND, f7::DEFAULT) => "and",
        _ => return None,
    };
    Some(mn)
}

fn unknown() -> String {
    String::from("unknown")
}
