//! ALU logical and comparison operations.
//!
//! Implements bitwise AND, OR, NOR and set-less-than. The comparison treats
//! both operands as unsigned 32-bit values; the result is always 0 or 1.

use crate::core::datapath::signals::AluOp;

/// Executes a logical or comparison operation.
///
/// Returns `0` for non-logic opcodes.
pub const fn execute(op: AluOp, a: u32, b: u32) -> u32 {
    match op {
        AluOp::And => a & b,
        AluOp::Or => a | b,
        AluOp::Nor => !(a | b),
        AluOp::Slt => (a < b) as u32,
        _ => 0,
    }
}
