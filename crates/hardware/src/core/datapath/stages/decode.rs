//! Instruction Decode Stage.
//!
//! This module implements the second stage of the datapath. It performs the following:
//! 1. **Decoding:** Splits the raw word into opcode, registers, immediate and jump field.
//! 2. **Control Generation:** Looks up the instruction class and its control word.
//! 3. **ALU Control:** Resolves the concrete ALU operation.
//! 4. **Register Read:** Reads `rs` and `rt` from the pre-cycle register file.

use tracing::trace;

use crate::core::Cpu;
use crate::core::datapath::control::alu_control;
use crate::core::datapath::signals::{ControlSignals, InstructionClass};
use crate::core::datapath::wires::{DecodeEntry, FetchEntry};
use crate::isa::decode::decode as instruction_decode;

/// Executes the instruction decode stage.
///
/// Both register reads happen unconditionally; the control word decides
/// later whether the values are used.
pub fn decode_stage(cpu: &Cpu, fetch: &FetchEntry) -> DecodeEntry {
    let decoded = instruction_decode(fetch.inst);
    let class = InstructionClass::from_opcode(decoded.opcode);
    let ctrl = ControlSignals::for_opcode(decoded.opcode);
    let alu_op = class.and_then(|c| alu_control(c, decoded.funct));

    let rs_val = cpu.regs.read(decoded.rs);
    let rt_val = cpu.regs.read(decoded.rt);

    trace!(
        "ID  opcode={:#04x} class={} rs={}:{rs_val:#010x} rt={}:{rt_val:#010x} rd={} imm={} ctrl={ctrl:?}",
        decoded.opcode,
        class.map_or("unknown", InstructionClass::mnemonic),
        decoded.rs,
        decoded.rt,
        decoded.rd,
        decoded.imm,
    );

    DecodeEntry {
        decoded,
        class,
        ctrl,
        alu_op,
        rs_val,
        rt_val,
    }
}
