//! CPU Core Definition and Initialization.
//!
//! This module defines the central `Cpu` structure, which owns the entire
//! machine state. It coordinates the following:
//! 1. **State Management:** Program counter and register file.
//! 2. **Memories:** Instruction memory (loaded from outside) and data memory.
//! 3. **Observability:** Per-cycle tracing, statistics and a textual dump.

/// Cycle evaluation, commit and run loops.
pub mod execution;

use std::fmt::Write as _;

use crate::common::RegisterFile;
use crate::config::Config;
use crate::isa::disasm::disassemble;
use crate::soc::{DataMemory, InstructionMemory};
use crate::stats::SimStats;

/// Main CPU structure containing all processor state.
///
/// Nothing outside the `Cpu` mutates its memories or registers while a cycle
/// is in progress; [`Cpu::tick`] is the only path from one architectural state
/// to the next.
#[derive(Debug)]
pub struct Cpu {
    /// Program Counter.
    pub pc: u32,
    /// General Purpose Registers.
    pub regs: RegisterFile,
    /// Instruction memory.
    pub imem: InstructionMemory,
    /// Data memory.
    pub dmem: DataMemory,
    /// Run statistics.
    pub stats: SimStats,
    /// Log a one-line summary of every cycle at `info` level.
    pub trace: bool,
}

impl Default for Cpu {
    fn default() -> Self {
        Self::new(&Config::default())
    }
}

impl Cpu {
    /// Creates a CPU in its reset state.
    ///
    /// The PC starts at `config.general.start_pc`, every register is zero and
    /// both memories are empty.
    pub fn new(config: &Config) -> Self {
        Self {
            pc: config.general.start_pc,
            regs: RegisterFile::new(config.general.hardwire_zero),
            imem: InstructionMemory::new(),
            dmem: DataMemory::new(&config.memory),
            stats: SimStats::default(),
            trace: config.general.trace_instructions,
        }
    }

    /// Places an instruction word at byte address `address`.
    ///
    /// Calls made between cycles take effect for the next fetch.
    pub fn load_instruction(&mut self, address: u32, word: u32) {
        self.imem.load(address, word);
    }

    /// Places a data word at byte address `address`.
    pub fn load_data_word(&mut self, address: u32, word: u32) {
        self.dmem.write(address, word, true);
    }

    /// Renders the PC, the instruction at the PC and the register file.
    ///
    /// ```text
    /// PROGRAM COUNTER = 00000000   INSTRUCTION = 00221820   add $v1, $at, $v0
    /// REGISTER FILE
    /// R00: 00000000 R08: 00000000 R10: 00000000 R18: 00000000
    /// ...
    /// ```
    pub fn dump(&self) -> String {
        let inst = self.imem.fetch(self.pc);
        let mut out = String::new();
        let _ = writeln!(
            out,
            "PROGRAM COUNTER = {:08x}   INSTRUCTION = {inst:08x}   {}",
            self.pc,
            disassemble(inst)
        );
        out.push_str("REGISTER FILE\n");
        out.push_str(&self.regs.dump());
        out
    }
}
