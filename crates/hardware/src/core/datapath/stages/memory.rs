//! Memory Access Stage.
//!
//! Reads data memory at the ALU result when `mem_read` is asserted. The store
//! path is only staged here; it is applied with the rest of the commit.

use tracing::trace;

use crate::core::Cpu;
use crate::core::datapath::wires::{DecodeEntry, ExecuteEntry, MemoryEntry};

/// Executes the memory stage.
pub fn mem_stage(cpu: &Cpu, decode: &DecodeEntry, execute: &ExecuteEntry) -> MemoryEntry {
    let read_data = cpu.dmem.read(execute.alu_result, decode.ctrl.mem_read);
    if decode.ctrl.mem_read {
        trace!("MEM load [{:#010x}] -> {read_data:#010x}", execute.alu_result);
    }
    MemoryEntry { read_data }
}
