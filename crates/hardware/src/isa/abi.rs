//! Register name conventions.
//!
//! Maps register indices to the conventional assembler names used by the
//! disassembler and the register dump.

/// Register 0 (`$zero` by convention; writable unless hard-wired).
pub const REG_ZERO: usize = 0;
/// Register 1 (assembler temporary, `$at`).
pub const REG_AT: usize = 1;
/// Register 29 (stack pointer, `$sp`).
pub const REG_SP: usize = 29;
/// Register 31 (return address, `$ra`).
pub const REG_RA: usize = 31;

/// Conventional names for registers 0-31.
pub const REG_NAMES: [&str; 32] = [
    "zero", "at", "v0", "v1", "a0", "a1", "a2", "a3", "t0", "t1", "t2", "t3", "t4", "t5", "t6",
    "t7", "s0", "s1", "s2", "s3", "s4", "s5", "s6", "s7", "t8", "t9", "k0", "k1", "gp", "sp",
    "fp", "ra",
];

/// Returns the conventional name for a register index, or `"??"` when out of range.
#[inline]
pub fn reg_name(idx: usize) -> &'static str {
    REG_NAMES.get(idx).copied().unwrap_or("??")
}
