//! Bit field codec.
//!
//! Pure helpers for pulling fields out of a 32-bit instruction word and for
//! widening the 16-bit immediate to a signed 32-bit value.

/// Returns bits `start_bit..=end_bit` of `word`, shifted down so that
/// `start_bit` lands at bit 0.
///
/// Callers must pass `start_bit <= end_bit <= 31`; the datapath only ever
/// passes constant field boundaries.
///
/// ```
/// use scsim_core::common::bits::extract_field;
///
/// assert_eq!(extract_field(0x1234_5678, 8, 12), 0x16);
/// assert_eq!(extract_field(0xFC00_0000, 26, 31), 0x3F);
/// ```
#[inline]
pub const fn extract_field(word: u32, start_bit: u32, end_bit: u32) -> u32 {
    debug_assert!(start_bit <= end_bit && end_bit <= 31);
    let width = end_bit - start_bit + 1;
    let mask = u32::MAX >> (32 - width);
    (word >> start_bit) & mask
}

/// Sign-extends the low 16 bits of `halfword` to a 32-bit signed value.
///
/// Bit 15 is the sign bit; bits above 15 of the input are ignored.
///
/// ```
/// use scsim_core::common::bits::sign_extend16;
///
/// assert_eq!(sign_extend16(0x8000), -32768);
/// assert_eq!(sign_extend16(0x0001), 1);
/// assert_eq!(sign_extend16(0xFFFF), -1);
/// ```
#[inline]
pub const fn sign_extend16(halfword: u32) -> i32 {
    (halfword as u16) as i16 as i32
}
