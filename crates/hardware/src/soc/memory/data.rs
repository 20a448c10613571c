//! Data memory.
//!
//! The data memory has one read port and one write port, each gated by its
//! own control signal. The datapath reads before it commits, so a store in
//! one cycle is visible to loads from the next cycle onward.

use std::fmt::{self, Write as _};

use crate::common::constants::WORD_SHIFT;
use crate::config::{MemoryBacking, MemoryConfig};
use crate::soc::memory::store::{DenseStore, SparseStore};
use crate::soc::memory::word_index;
use crate::soc::traits::WordStore;

/// Word-granular data memory.
pub struct DataMemory {
    store: Box<dyn WordStore>,
}

impl fmt::Debug for DataMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DataMemory")
            .field("words", &self.store.words().len())
            .finish()
    }
}

impl Default for DataMemory {
    fn default() -> Self {
        Self::with_store(Box::new(SparseStore::new()))
    }
}

impl DataMemory {
    /// Creates a data memory whose backing store is chosen by `config`.
    pub fn new(config: &MemoryConfig) -> Self {
        match config.backing {
            MemoryBacking::Sparse => Self::with_store(Box::new(SparseStore::new())),
            MemoryBacking::Dense => Self::with_store(Box::new(DenseStore::new(config.dense_words))),
        }
    }

    /// Creates a data memory over an explicit backing store.
    pub fn with_store(store: Box<dyn WordStore>) -> Self {
        Self { store }
    }

    /// Reads the word at byte address `address` when `enable` is set.
    ///
    /// When `enable` is false the backing store is not touched and zero is
    /// returned; the datapath never uses a disabled read's value.
    pub fn read(&self, address: u32, enable: bool) -> u32 {
        if enable {
            self.store.load_word(word_index(address))
        } else {
            0
        }
    }

    /// Writes `value` to byte address `address` when `enable` is set.
    pub fn write(&mut self, address: u32, value: u32, enable: bool) {
        if enable {
            self.store.store_word(word_index(address), value);
        }
    }

    /// Returns every non-zero word as `(byte address, value)`, in address order.
    pub fn words(&self) -> Vec<(u32, u32)> {
        self.store
            .words()
            .into_iter()
            .map(|(i, v)| (i << WORD_SHIFT, v))
            .collect()
    }

    /// Renders the non-zero words, one `M[address] = value` line each.
    pub fn dump(&self) -> String {
        let mut out = String::new();
        for (addr, value) in self.words() {
            let _ = writeln!(out, "M[{addr:08x}] = {value:08x}");
        }
        out
    }
}
