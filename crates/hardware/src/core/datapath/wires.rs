//! Datapath wires.
//!
//! Each stage function produces one of these records from the pre-cycle
//! machine state and the records of the stages before it. Together they form
//! the [`Cycle`] returned by [`crate::core::Cpu::tick`]; nothing in them is
//! applied to architectural state until the [`Commit`] is.

use crate::core::datapath::signals::{AluOp, ControlSignals, InstructionClass};
use crate::isa::instruction::Decoded;

/// Output of the fetch stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchEntry {
    /// Address the instruction was fetched from.
    pub pc: u32,
    /// Raw instruction word.
    pub inst: u32,
}

/// Output of the decode stage: fields, control and register operands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DecodeEntry {
    /// Every field of the instruction word.
    pub decoded: Decoded,
    /// Recognized class, `None` for an unknown opcode.
    pub class: Option<InstructionClass>,
    /// Control word from the signal table.
    pub ctrl: ControlSignals,
    /// Concrete ALU operation, `None` for an unknown R-type function code.
    pub alu_op: Option<AluOp>,
    /// Value read from register `rs`.
    pub rs_val: u32,
    /// Value read from register `rt`.
    pub rt_val: u32,
}

/// Output of the execute stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ExecuteEntry {
    /// ALU operand A.
    pub operand_a: u32,
    /// ALU operand B (immediate or `rt` value).
    pub operand_b: u32,
    /// ALU result, also the data-memory address.
    pub alu_result: u32,
    /// ALU zero flag.
    pub zero: bool,
}

/// Output of the memory stage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemoryEntry {
    /// Word read from data memory, zero when the read port is disabled.
    pub read_data: u32,
}

/// Staged register-file write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct RegWrite {
    /// Destination register.
    pub index: usize,
    /// Value to write.
    pub value: u32,
    /// Write-enable line.
    pub enable: bool,
}

/// Staged data-memory write.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct MemWrite {
    /// Byte address.
    pub address: u32,
    /// Value to store.
    pub value: u32,
    /// Write-enable line.
    pub enable: bool,
}

/// All state updates of one cycle, applied together at the clock edge.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Commit {
    /// Register-file write.
    pub reg_write: RegWrite,
    /// Data-memory write.
    pub mem_write: MemWrite,
    /// PC for the next cycle.
    pub next_pc: u32,
}

/// Complete record of one datapath cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Cycle {
    /// Fetch stage output.
    pub fetch: FetchEntry,
    /// Decode stage output.
    pub decode: DecodeEntry,
    /// Execute stage output.
    pub execute: ExecuteEntry,
    /// Memory stage output.
    pub memory: MemoryEntry,
    /// State updates for the clock edge.
    pub commit: Commit,
}

impl Cycle {
    /// Returns true if the next PC equals this cycle's PC (a `j .` style halt).
    pub const fn is_self_loop(&self) -> bool {
        self.commit.next_pc == self.fetch.pc
    }

    /// Returns true if a conditional branch redirected the PC.
    pub const fn branch_taken(&self) -> bool {
        self.decode.ctrl.branch && self.execute.zero
    }
}
