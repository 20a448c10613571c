//! Primary Opcodes.
//!
//! Defines the opcode field (bits 31-26) values recognized by the control unit.
//! Any other opcode decodes to the all-disabled control word.

/// Register-type arithmetic/logic (ADD, SUB, AND, OR, SLT); selected further by `funct`.
pub const OP_RTYPE: u32 = 0x00;

/// Unconditional jump (J).
pub const OP_J: u32 = 0x02;

/// Branch on equal (BEQ).
pub const OP_BEQ: u32 = 0x04;

/// Load word (LW).
pub const OP_LW: u32 = 0x23;

/// Store word (SW).
pub const OP_SW: u32 = 0x2B;
