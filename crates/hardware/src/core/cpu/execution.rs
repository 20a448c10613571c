//! Main Execution Loop.
//!
//! This module implements one clock cycle of the datapath. It performs the following:
//! 1. **Evaluation:** Runs every stage against the pre-cycle state, producing a [`Cycle`].
//! 2. **Commit:** Applies the register write, memory write and PC update together.
//! 3. **Run Loops:** Hooked runs, fixed-count runs and runs that stop on a self-loop halt.
//!
//! Evaluation borrows the CPU immutably, so no read in a cycle can observe a
//! write from the same cycle.

use tracing::{debug, info};

use super::Cpu;
use crate::core::datapath::stages::{decode_stage, execute_stage, fetch_stage, mem_stage, wb_stage};
use crate::core::datapath::wires::{Commit, Cycle};
use crate::isa::disasm::disassemble;

impl Cpu {
    /// Computes everything the current cycle would do without changing any state.
    pub fn evaluate(&self) -> Cycle {
        let fetch = fetch_stage(self);
        let decode = decode_stage(self, &fetch);
        let execute = execute_stage(&fetch, &decode);
        let memory = mem_stage(self, &decode, &execute);
        let commit = wb_stage(&fetch, &decode, &execute, &memory);
        Cycle {
            fetch,
            decode,
            execute,
            memory,
            commit,
        }
    }

    /// Applies a cycle's staged updates.
    pub fn commit(&mut self, commit: &Commit) {
        let rw = commit.reg_write;
        self.regs.write(rw.index, rw.value, rw.enable);
        let mw = commit.mem_write;
        self.dmem.write(mw.address, mw.value, mw.enable);
        self.pc = commit.next_pc;
    }

    /// Executes exactly one cycle and returns its record.
    pub fn tick(&mut self) -> Cycle {
        let cycle = self.evaluate();
        if self.trace {
            info!(
                "[{:>6}] {:#010x}: {:08x}  {:<24} -> pc {:#010x}",
                self.stats.cycles,
                cycle.fetch.pc,
                cycle.fetch.inst,
                disassemble(cycle.fetch.inst),
                cycle.commit.next_pc
            );
        }
        self.commit(&cycle.commit);
        self.stats.record(&cycle);
        cycle
    }

    /// Alias for [`Cpu::tick`].
    pub fn update(&mut self) -> Cycle {
        self.tick()
    }

    /// Ticks up to `limit` times, calling `on_cycle` after each commit.
    ///
    /// The hook sees the post-commit CPU and the cycle record; returning
    /// `false` stops the run. Returns the number of cycles executed.
    pub fn run_with<F>(&mut self, limit: u64, mut on_cycle: F) -> u64
    where
        F: FnMut(&Self, &Cycle) -> bool,
    {
        for n in 1..=limit {
            let cycle = self.tick();
            if !on_cycle(self, &cycle) {
                return n;
            }
        }
        limit
    }

    /// Ticks `cycles` times and returns the number of cycles executed.
    pub fn run(&mut self, cycles: u64) -> u64 {
        self.run_with(cycles, |_, _| true)
    }

    /// Ticks until a cycle jumps to its own address or `limit` cycles have run.
    ///
    /// Returns the number of cycles executed, including the self-looping one.
    pub fn run_until_self_loop(&mut self, limit: u64) -> u64 {
        self.run_with(limit, |cpu, cycle| {
            if cycle.is_self_loop() {
                debug!("self-loop at {:#010x} after {} cycles", cpu.pc, cpu.stats.cycles);
                return false;
            }
            true
        })
    }
}
