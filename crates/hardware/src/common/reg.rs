//! Register File.
//!
//! This module provides the `RegisterFile` struct holding the 32 general-purpose
//! registers of the datapath. It provides:
//! 1. **Storage:** 32 unsigned 32-bit registers, all zero at reset.
//! 2. **Ports:** Two combinational read ports and one write port gated by write-enable.
//! 3. **Register Zero Policy:** Plain storage by default, optionally hard-wired to zero.
//! 4. **Observability:** A textual dump of the full register state.

use std::fmt::Write as _;

use crate::common::constants::{DUMP_ROWS, NUM_REGS};

/// The 32-entry general-purpose register file.
///
/// Reads are combinational and always observe the currently stored value; the
/// datapath performs all of a cycle's reads before it commits that cycle's
/// write, which is what makes the write appear at the next clock edge.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
    hardwire_zero: bool,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new(false)
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    ///
    /// # Arguments
    ///
    /// * `hardwire_zero` - When true, register 0 always reads as zero and writes to it are dropped.
    pub const fn new(hardwire_zero: bool) -> Self {
        Self {
            regs: [0; NUM_REGS],
            hardwire_zero,
        }
    }

    /// Reads the value stored at `index`.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..32`. Indices produced by field
    /// extraction are five bits wide and can never trip this.
    pub const fn read(&self, index: usize) -> u32 {
        if self.hardwire_zero && index == 0 {
            0
        } else {
            self.regs[index]
        }
    }

    /// Writes `value` to register `index` when `enable` is set.
    ///
    /// # Arguments
    ///
    /// * `index` - Register index (0-31).
    /// * `value` - The 32-bit value to store.
    /// * `enable` - The register-write control signal; nothing changes when false.
    ///
    /// # Panics
    ///
    /// Panics if `index` is not in `0..32`.
    pub fn write(&mut self, index: usize, value: u32, enable: bool) {
        if !enable {
            return;
        }
        if self.hardwire_zero && index == 0 {
            return;
        }
        self.regs[index] = value;
    }

    /// Stores `value` directly, bypassing the write-enable gate.
    ///
    /// Intended for setup code that injects initial register state before the
    /// first cycle.
    pub fn set(&mut self, index: usize, value: u32) {
        self.write(index, value, true);
    }

    /// Returns a copy of all 32 register values.
    pub const fn snapshot(&self) -> [u32; NUM_REGS] {
        self.regs
    }

    /// Renders all 32 registers as eight rows of four columns.
    ///
    /// Row `i` lists registers `i`, `i + 8`, `i + 16` and `i + 24`:
    ///
    /// ```text
    /// R00: 00000000 R08: 00000000 R10: 00000000 R18: 00000000
    /// ```
    pub fn dump(&self) -> String {
        let mut out = String::with_capacity(DUMP_ROWS * 56);
        for i in 0..DUMP_ROWS {
            let _ = writeln!(
                out,
                "R{:02x}: {:08x} R{:02x}: {:08x} R{:02x}: {:08x} R{:02x}: {:08x}",
                i,
                self.read(i),
                i + 8,
                self.read(i + 8),
                i + 16,
                self.read(i + 16),
                i + 24,
                self.read(i + 24),
            );
        }
        out
    }
}
