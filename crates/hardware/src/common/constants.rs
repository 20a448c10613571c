//! Global System Constants.
//!
//! This module defines system-wide constants used across the simulator. It includes:
//! 1. **Memory Constants:** Word size and the byte-to-word address shift.
//! 2. **Register Constants:** Register count and index width.
//! 3. **PC Constants:** Masks used when forming jump targets.

/// Size of one memory word and one instruction in bytes.
pub const WORD_SIZE: u32 = 4;

/// Number of bits to shift to convert a byte address into a word index.
pub const WORD_SHIFT: u32 = 2;

/// Mask for the byte-offset bits of an address (non-zero means misaligned).
pub const WORD_OFFSET_MASK: u32 = WORD_SIZE - 1;

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Number of register-file rows printed by a register dump.
pub const DUMP_ROWS: usize = 8;

/// Upper four bits of `pc + 4` that survive into a jump target.
pub const JUMP_REGION_MASK: u32 = 0xF000_0000;

/// Shift applied to branch offsets and jump fields (word to byte).
pub const TARGET_SHIFT: u32 = 2;

/// Default number of words in a dense data-memory backing store (64 KiB).
pub const DEFAULT_DENSE_WORDS: usize = 16 * 1024;
