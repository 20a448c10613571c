//! Writeback Stage.
//!
//! Stages every architectural update of the cycle into a [`Commit`]:
//! 1. **Register Write:** Destination `rd` or `rt`, value from memory or the ALU.
//! 2. **Memory Write:** The `rt` value at the ALU result, gated by `mem_write`.
//! 3. **Next PC:** Sequential, branch or jump target.

use tracing::trace;

use crate::common::constants::{JUMP_REGION_MASK, TARGET_SHIFT, WORD_SIZE};
use crate::core::datapath::signals::ControlSignals;
use crate::core::datapath::wires::{
    Commit, DecodeEntry, ExecuteEntry, FetchEntry, MemWrite, MemoryEntry, RegWrite,
};

/// Executes the writeback stage.
pub fn wb_stage(
    fetch: &FetchEntry,
    decode: &DecodeEntry,
    execute: &ExecuteEntry,
    memory: &MemoryEntry,
) -> Commit {
    let ctrl = decode.ctrl;
    let d = &decode.decoded;

    let reg_write = RegWrite {
        index: if ctrl.reg_dst_rd { d.rd } else { d.rt },
        value: if ctrl.mem_to_reg {
            memory.read_data
        } else {
            execute.alu_result
        },
        enable: ctrl.reg_write && decode.alu_op.is_some(),
    };

    let mem_write = MemWrite {
        address: execute.alu_result,
        value: decode.rt_val,
        enable: ctrl.mem_write,
    };

    let next_pc = next_pc(fetch.pc, &ctrl, execute.zero, d.imm, d.jump_target);

    trace!(
        "WB  reg[{}]={:#010x} en={} mem[{:#010x}]={:#010x} en={} next_pc={next_pc:#010x}",
        reg_write.index,
        reg_write.value,
        reg_write.enable,
        mem_write.address,
        mem_write.value,
        mem_write.enable,
    );

    Commit {
        reg_write,
        mem_write,
        next_pc,
    }
}

/// Computes the PC of the next cycle.
///
/// A jump takes precedence over a taken branch, which takes precedence over
/// the sequential `pc + 4`. All arithmetic wraps.
///
/// ```
/// use scsim_core::core::datapath::ControlSignals;
/// use scsim_core::core::datapath::stages::next_pc;
///
/// let jump = ControlSignals { jump: true, ..Default::default() };
/// assert_eq!(next_pc(0x0000_0004, &jump, false, 0, 4), 0x0000_0010);
///
/// let beq = ControlSignals { branch: true, ..Default::default() };
/// assert_eq!(next_pc(0x0000_0008, &beq, true, -3, 0), 0x0000_0000);
/// ```
pub const fn next_pc(
    pc: u32,
    ctrl: &ControlSignals,
    zero: bool,
    imm: i32,
    jump_target: u32,
) -> u32 {
    let seq = pc.wrapping_add(WORD_SIZE);
    if ctrl.jump {
        (seq & JUMP_REGION_MASK) | (jump_target << TARGET_SHIFT)
    } else if ctrl.branch && zero {
        ((imm as u32) << TARGET_SHIFT).wrapping_add(seq)
    } else {
        seq
    }
}
