//! Simulation statistics collection and reporting.
//!
//! This module tracks what the datapath did over a run. It provides:
//! 1. **Cycles:** Total cycles executed (one instruction per cycle).
//! 2. **Instruction mix:** Counts by class (load, store, ALU, branch, jump, unrecognized).
//! 3. **Effects:** Register writes committed, memory instructions and taken branches.
//! 4. **Anomalies:** R-type words with an unrecognized function code.

use std::fmt;

use crate::core::datapath::{Cycle, InstructionClass};

const RULE: &str = "==========================================================";
const SUB_RULE: &str = "----------------------------------------------------------";

/// Simulation statistics structure.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimStats {
    /// Total cycles executed.
    pub cycles: u64,

    /// Count of `lw` instructions.
    pub inst_load: u64,
    /// Count of `sw` instructions.
    pub inst_store: u64,
    /// Count of R-type instructions, including those with unrecognized function codes.
    pub inst_alu: u64,
    /// Count of `beq` instructions.
    pub inst_branch: u64,
    /// Count of `j` instructions.
    pub inst_jump: u64,
    /// Count of words whose opcode is not recognized.
    pub inst_unrecognized: u64,

    /// Register-file writes actually committed.
    pub reg_writes: u64,
    /// Loads plus stores.
    pub mem_instructions: u64,
    /// Conditional branches whose condition held.
    pub branches_taken: u64,
    /// R-type words (other than the zero word) with an unrecognized function code.
    pub unrecognized_funct: u64,
}

impl SimStats {
    /// Accounts for one completed cycle.
    pub fn record(&mut self, cycle: &Cycle) {
        self.cycles += 1;

        match cycle.decode.class {
            Some(InstructionClass::LoadWord) => self.inst_load += 1,
            Some(InstructionClass::StoreWord) => self.inst_store += 1,
            Some(InstructionClass::RType) => {
                self.inst_alu += 1;
                if cycle.decode.alu_op.is_none() && cycle.fetch.inst != 0 {
                    self.unrecognized_funct += 1;
                }
            }
            Some(InstructionClass::BranchEq) => self.inst_branch += 1,
            Some(InstructionClass::Jump) => self.inst_jump += 1,
            None => self.inst_unrecognized += 1,
        }

        if cycle.commit.reg_write.enable {
            self.reg_writes += 1;
        }
        if cycle.decode.ctrl.mem_read || cycle.decode.ctrl.mem_write {
            self.mem_instructions += 1;
        }
        if cycle.branch_taken() {
            self.branches_taken += 1;
        }
    }

    /// Clears every counter.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}

impl fmt::Display for SimStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let cyc = self.cycles.max(1) as f64;
        let pct = |n: u64| (n as f64 / cyc) * 100.0;

        writeln!(f, "{RULE}")?;
        writeln!(f, "SINGLE-CYCLE DATAPATH STATISTICS")?;
        writeln!(f, "{RULE}")?;
        writeln!(f, "sim_cycles               {}", self.cycles)?;
        writeln!(f, "{SUB_RULE}")?;
        writeln!(f, "INSTRUCTION MIX")?;
        for (name, n) in [
            ("op.load", self.inst_load),
            ("op.store", self.inst_store),
            ("op.alu", self.inst_alu),
            ("op.branch", self.inst_branch),
            ("op.jump", self.inst_jump),
            ("op.unrecognized", self.inst_unrecognized),
        ] {
            writeln!(f, "  {name:<22} {n} ({:.2}%)", pct(n))?;
        }
        writeln!(f, "{SUB_RULE}")?;
        writeln!(f, "EFFECTS")?;
        writeln!(f, "  reg.writes             {}", self.reg_writes)?;
        writeln!(f, "  mem.instructions       {}", self.mem_instructions)?;
        writeln!(f, "  branch.taken           {}", self.branches_taken)?;
        writeln!(f, "  funct.unrecognized     {}", self.unrecognized_funct)?;
        writeln!(f, "{RULE}")
    }
}
