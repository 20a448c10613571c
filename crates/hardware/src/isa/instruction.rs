//! Instruction encoding and decoding utilities.
//!
//! Provides field accessors over a raw 32-bit instruction word and the
//! `Decoded` record produced by the decode step.
//!
//! ```text
//!  31    26 25  21 20  16 15  11 10   6 5     0
//! +--------+------+------+------+------+-------+
//! | opcode |  rs  |  rt  |  rd  | ---- | funct |   R-type
//! | opcode |  rs  |  rt  |     immediate       |   lw / sw / beq
//! | opcode |            jump target            |   j
//! +--------+-----------------------------------+
//! ```

use crate::common::bits::{extract_field, sign_extend16};

/// Bit range of the opcode field.
pub const OPCODE_BITS: (u32, u32) = (26, 31);
/// Bit range of the first source register field.
pub const RS_BITS: (u32, u32) = (21, 25);
/// Bit range of the second source / load destination register field.
pub const RT_BITS: (u32, u32) = (16, 20);
/// Bit range of the R-type destination register field.
pub const RD_BITS: (u32, u32) = (11, 15);
/// Bit range of the R-type function code field.
pub const FUNCT_BITS: (u32, u32) = (0, 5);
/// Bit range of the 16-bit immediate / offset field.
pub const IMM_BITS: (u32, u32) = (0, 15);
/// Bit range of the 26-bit jump target field.
pub const JUMP_BITS: (u32, u32) = (0, 25);

/// Trait for extracting instruction fields from encoded instructions.
///
/// Every accessor is a pure bit-field extraction; register indices are at
/// most five bits wide and therefore always valid register-file indices.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 26-31).
    fn opcode(&self) -> u32;

    /// Extracts the `rs` register field (bits 21-25).
    fn rs(&self) -> usize;

    /// Extracts the `rt` register field (bits 16-20).
    fn rt(&self) -> usize;

    /// Extracts the `rd` register field (bits 11-15).
    fn rd(&self) -> usize;

    /// Extracts the function code field (bits 0-5).
    fn funct(&self) -> u32;

    /// Extracts the raw 16-bit immediate field (bits 0-15), not sign-extended.
    fn imm16(&self) -> u32;

    /// Extracts the 26-bit jump target field (bits 0-25).
    fn jump_target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u32 {
        extract_field(*self, OPCODE_BITS.0, OPCODE_BITS.1)
    }

    #[inline(always)]
    fn rs(&self) -> usize {
        extract_field(*self, RS_BITS.0, RS_BITS.1) as usize
    }

    #[inline(always)]
    fn rt(&self) -> usize {
        extract_field(*self, RT_BITS.0, RT_BITS.1) as usize
    }

    #[inline(always)]
    fn rd(&self) -> usize {
        extract_field(*self, RD_BITS.0, RD_BITS.1) as usize
    }

    #[inline(always)]
    fn funct(&self) -> u32 {
        extract_field(*self, FUNCT_BITS.0, FUNCT_BITS.1)
    }

    #[inline(always)]
    fn imm16(&self) -> u32 {
        extract_field(*self, IMM_BITS.0, IMM_BITS.1)
    }

    #[inline(always)]
    fn jump_target(&self) -> u32 {
        extract_field(*self, JUMP_BITS.0, JUMP_BITS.1)
    }
}

/// Decoded instruction structure containing all extracted fields.
///
/// Every field is extracted regardless of the instruction class; the control
/// signals decide which of them the datapath actually uses.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Decoded {
    /// Raw 32-bit instruction encoding.
    pub raw: u32,
    /// Opcode field.
    pub opcode: u32,
    /// Function code field.
    pub funct: u32,
    /// First source register index.
    pub rs: usize,
    /// Second source register index (also the I-type destination).
    pub rt: usize,
    /// R-type destination register index.
    pub rd: usize,
    /// Sign-extended 16-bit immediate.
    pub imm: i32,
    /// 26-bit jump target field.
    pub jump_target: u32,
}

impl Decoded {
    /// Decodes every field of `raw`.
    pub fn from_raw(raw: u32) -> Self {
        Self {
            raw,
            opcode: raw.opcode(),
            funct: raw.funct(),
            rs: raw.rs(),
            rt: raw.rt(),
            rd: raw.rd(),
            imm: sign_extend16(raw.imm16()),
            jump_target: raw.jump_target(),
        }
    }
}
