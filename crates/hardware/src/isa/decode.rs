//! Instruction Decoder.
//!
//! Splits a fetched 32-bit word into its fields. Decoding never fails: an
//! unrecognized opcode still yields a complete `Decoded` record, and it is the
//! control unit that maps such opcodes to the all-disabled control word.

use crate::isa::instruction::Decoded;

/// Decodes a raw instruction word into its component fields.
///
/// ```
/// use scsim_core::isa::decode::decode;
///
/// // add $3, $1, $2
/// let d = decode(0x0022_1820);
/// assert_eq!((d.rs, d.rt, d.rd, d.funct), (1, 2, 3, 0x20));
/// ```
pub fn decode(inst: u32) -> Decoded {
    Decoded::from_raw(inst)
}
