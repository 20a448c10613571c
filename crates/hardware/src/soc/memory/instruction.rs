//! Instruction memory.
//!
//! Read-only from the datapath's point of view; only the loader writes it.
//! Fetching an address that was never loaded yields the zero word.

use crate::common::constants::WORD_SHIFT;
use crate::soc::memory::store::SparseStore;
use crate::soc::memory::word_index;
use crate::soc::traits::WordStore;

/// Word-granular instruction memory.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InstructionMemory {
    store: SparseStore,
}

impl InstructionMemory {
    /// Creates an empty instruction memory.
    pub const fn new() -> Self {
        Self {
            store: SparseStore::new(),
        }
    }

    /// Places `value` at byte address `address`.
    pub fn load(&mut self, address: u32, value: u32) {
        self.store.store_word(word_index(address), value);
    }

    /// Returns the instruction word at byte address `address`.
    pub fn fetch(&self, address: u32) -> u32 {
        self.store.load_word(word_index(address))
    }

    /// Returns every loaded non-zero word as `(byte address, value)`, in address order.
    pub fn words(&self) -> Vec<(u32, u32)> {
        self.store
            .words()
            .into_iter()
            .map(|(i, v)| (i << WORD_SHIFT, v))
            .collect()
    }

    /// Returns true if no instruction has been loaded.
    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }
}
