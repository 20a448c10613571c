//! Backing-store trait for word-addressed memories.
//!
//! This module defines the `WordStore` trait implemented by the storage behind
//! the data and instruction memories. It provides:
//! 1. **Access:** Load and store of whole 32-bit words by word index.
//! 2. **Observability:** Enumeration of the non-zero words for diagnostics.
//!
//! A store is indexed by word, not by byte; translating a byte address to a
//! word index is the memory's job, not the store's. Locations that were never
//! written read as zero.

/// Storage behind a word-addressed memory.
///
/// Sparse and dense implementations must be indistinguishable through this
/// trait: a stored word reads back exactly and an unwritten word reads as zero.
pub trait WordStore: Send {
    /// Returns the word at `index`, or zero if it was never written.
    fn load_word(&self, index: u32) -> u32;

    /// Stores `value` at `index`.
    fn store_word(&mut self, index: u32, value: u32);

    /// Returns every non-zero word as `(index, value)`, in ascending index order.
    fn words(&self) -> Vec<(u32, u32)>;
}
