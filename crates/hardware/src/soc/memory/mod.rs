//! Word-Addressed Memories.
//!
//! This module implements the two memories of the single-cycle machine. It provides:
//! 1. **Stores:** Sparse and dense backing storage behind the `WordStore` trait.
//! 2. **Data Memory:** One read port gated by read-enable, one write port gated by write-enable.
//! 3. **Instruction Memory:** Loaded from outside, fetched by the datapath.
//!
//! Both memories take byte addresses and access whole words; the two low
//! address bits are dropped.

/// Data memory with gated read and write ports.
pub mod data;

/// Instruction memory.
pub mod instruction;

/// Sparse and dense word stores.
pub mod store;

use tracing::debug;

use crate::common::constants::{WORD_OFFSET_MASK, WORD_SHIFT};

pub use data::DataMemory;
pub use instruction::InstructionMemory;
pub use store::{DenseStore, SparseStore};

/// Converts a byte address to a word index, noting misaligned addresses.
#[inline]
pub(crate) fn word_index(address: u32) -> u32 {
    if address & WORD_OFFSET_MASK != 0 {
        debug!("misaligned word access at {address:#010x}, low bits ignored");
    }
    address >> WORD_SHIFT
}
