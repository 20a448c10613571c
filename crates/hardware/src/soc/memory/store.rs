//! Word store implementations.
//!
//! `SparseStore` keeps only the words that were written, which suits the
//! scattered addresses of hand-written test programs. `DenseStore` is a
//! vector for programs that sweep a contiguous region, with a sparse overflow
//! for anything past it.

use std::collections::BTreeMap;

use crate::soc::traits::WordStore;

/// Ordered-map word store; only non-zero words occupy space.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SparseStore {
    words: BTreeMap<u32, u32>,
}

impl SparseStore {
    /// Creates an empty store.
    pub const fn new() -> Self {
        Self {
            words: BTreeMap::new(),
        }
    }

    /// Returns the number of non-zero words held.
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Returns true if no non-zero word is held.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl WordStore for SparseStore {
    fn load_word(&self, index: u32) -> u32 {
        self.words.get(&index).copied().unwrap_or(0)
    }

    fn store_word(&mut self, index: u32, value: u32) {
        if value == 0 {
            let _ = self.words.remove(&index);
        } else {
            let _ = self.words.insert(index, value);
        }
    }

    fn words(&self) -> Vec<(u32, u32)> {
        self.words.iter().map(|(&i, &v)| (i, v)).collect()
    }
}

/// Vector word store covering word indices `0..capacity`.
///
/// Indices past the vector spill into an ordered map, so the store reads and
/// writes the whole 32-bit address space like [`SparseStore`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DenseStore {
    words: Vec<u32>,
    overflow: SparseStore,
}

impl DenseStore {
    /// Creates a zero-filled store of `capacity` words.
    pub fn new(capacity: usize) -> Self {
        Self {
            words: vec![0; capacity],
            overflow: SparseStore::new(),
        }
    }

    /// Returns the number of words held in the vector.
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Returns the number of non-zero words held past the vector.
    pub fn overflow_len(&self) -> usize {
        self.overflow.len()
    }
}

impl WordStore for DenseStore {
    fn load_word(&self, index: u32) -> u32 {
        self.words
            .get(index as usize)
            .copied()
            .unwrap_or_else(|| self.overflow.load_word(index))
    }

    fn store_word(&mut self, index: u32, value: u32) {
        match self.words.get_mut(index as usize) {
            Some(slot) => *slot = value,
            None => self.overflow.store_word(index, value),
        }
    }

    fn words(&self) -> Vec<(u32, u32)> {
        self.words
            .iter()
            .enumerate()
            .filter(|&(_, &v)| v != 0)
            .map(|(i, &v)| (i as u32, v))
            .chain(self.overflow.words())
            .collect()
    }
}
