//! Register-Type Function Codes.
//!
//! The `funct` field (bits 5-0) picks the ALU operation of an R-type
//! instruction. Codes outside this table leave the ALU operation unresolved.

/// Add.
pub const ADD: u32 = 0x20;
/// Subtract.
pub const SUB: u32 = 0x22;
/// Bitwise AND.
pub const AND: u32 = 0x24;
/// Bitwise OR.
pub const OR: u32 = 0x25;
/// Set on less than.
pub const SLT: u32 = 0x2A;
