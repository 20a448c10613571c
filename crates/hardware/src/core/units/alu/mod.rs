//! Arithmetic Logic Unit (ALU).
//!
//! This module implements the 32-bit integer ALU used by the execute stage.
//!
//! Operations are organized into submodules by category:
//! - [`arithmetic`]: Add, Sub
//! - [`logic`]:      And, Or, Nor, Slt

/// Integer arithmetic operations (add, subtract).
pub mod arithmetic;

/// Bitwise logical and comparison operations (and, or, nor, slt).
pub mod logic;

use crate::core::datapath::signals::AluOp;

/// Arithmetic Logic Unit (ALU) for 32-bit integer operations.
#[derive(Debug, Clone, Copy, Default)]
pub struct Alu;

impl Alu {
    /// Executes an integer ALU operation.
    ///
    /// # Arguments
    ///
    /// * `op` - The ALU operation to perform
    /// * `a`  - First operand
    /// * `b`  - Second operand
    ///
    /// # Examples
    ///
    /// ```
    /// use scsim_core::core::units::alu::Alu;
    /// use scsim_core::core::datapath::AluOp;
    ///
    /// assert_eq!(Alu::execute(AluOp::Add, 5, 7), 12);
    /// assert_eq!(Alu::execute(AluOp::Sub, 0, 1), 0xFFFF_FFFF);
    ///
    /// // Set-less-than compares unsigned.
    /// assert_eq!(Alu::execute(AluOp::Slt, 0xFFFF_FFFF, 1), 0);
    /// ```
    pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
        match op {
            AluOp::Add | AluOp::Sub => arithmetic::execute(op, a, b),
            AluOp::And | AluOp::Or | AluOp::Nor | AluOp::Slt => logic::execute(op, a, b),
        }
    }
}
