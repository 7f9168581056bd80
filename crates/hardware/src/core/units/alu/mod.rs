//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the integer ALU of the execute step. It is a pure
//! function of its operands and operation selector. All operations use 64-bit
//! two's-complement semantics with defined wraparound; nothing traps.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      Or, And, Xor, Slt
//! - [`shifts`]:     Sll, Srl
//! - [`control`]:    ALU control, refining the control unit's class into an [`AluOp`]

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// ALU control: (class, funct3, funct7) to concrete operation.
pub mod control;

/// Bitwise logical and comparison operations (or, and, xor, slt).
pub mod logic;

/// Shift operations (sll, srl).
pub mod shifts;

use crate::core::signals::AluOp;

/// Output of one ALU evaluation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AluOutput {
    /// Result of the selected operation.
    pub result: i64,
    /// `true` when the two operands are equal, whatever the operation.
    pub zero: bool,
}

/// Arithmetic Logic Unit (ALU) for integer operations.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// The zero flag compares the operands directly and is computed
    /// unconditionally; only equal/not-equal branches consume it.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform.
    /// * `a`  - First operand.
    /// * `b`  - Second operand (also the shift amount).
    ///
    /// # Returns
    ///
    /// The result and the zero flag.
    ///
    /// # Examples
    ///
    /// ```
    /// use rvdp_core::core::signals::AluOp;
    /// use rvdp_core::core::units::alu::Alu;
    ///
    /// let out = Alu::execute(AluOp::Add, 42, 8);
    /// assert_eq!(out.result, 50);
    /// assert!(!out.zero);
    ///
    /// // Signed comparison
    /// let out = Alu::execute(AluOp::Slt, -5, 10);
    /// assert_eq!(out.result, 1);
    ///
    /// // Equal operands raise the zero flag even for a subtraction
    /// let out = Alu::execute(AluOp::Sub, 7, 7);
    /// assert!(out.zero);
    /// ```
    pub fn execute(op: AluOp, a: i64, b: i64) -> AluOutput {
        let result = match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::Or | AluOp::And | AluOp::Xor | AluOp::Slt => logic::execute(op, a, b),
            AluOp::Sll | AluOp::Srl => shifts::execute(op, a, b),
        };
        AluOutput {
            result,
            zero: a == b,
        }
    }
}
