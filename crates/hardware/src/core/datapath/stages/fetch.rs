//! Instruction Fetch Stage.
//!
//! Reads the instruction word at the current program counter. Addresses that
//! were never loaded fetch the zero word.

use tracing::trace;

use crate::core::Cpu;
use crate::core::datapath::wires::FetchEntry;

/// Executes the instruction fetch stage.
pub fn fetch_stage(cpu: &Cpu) -> FetchEntry {
    let pc = cpu.pc;
    let inst = cpu.imem.fetch(pc);
    trace!("IF  pc={pc:#010x} inst={inst:#010x}");
    FetchEntry { pc, inst }
}
