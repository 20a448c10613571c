//! Execute Stage.
//!
//! Selects ALU operand B (sign-extended immediate or `rt`), runs the ALU and
//! raises the zero flag used by `beq`.

use tracing::{trace, warn};

use crate::core::datapath::signals::InstructionClass;
use crate::core::datapath::wires::{DecodeEntry, ExecuteEntry, FetchEntry};
use crate::core::units::alu::Alu;

/// Executes the execute stage.
///
/// An R-type word whose function code is not in the table produces a zero
/// result; write-back is suppressed for it by [`super::wb_stage`].
pub fn execute_stage(fetch: &FetchEntry, decode: &DecodeEntry) -> ExecuteEntry {
    let operand_a = decode.rs_val;
    let operand_b = if decode.ctrl.alu_src_imm {
        decode.decoded.imm as u32
    } else {
        decode.rt_val
    };

    let alu_result = match decode.alu_op {
        Some(op) => Alu::execute(op, operand_a, operand_b),
        None => {
            if decode.class == Some(InstructionClass::RType) && fetch.inst != 0 {
                warn!(
                    "unrecognized function code {:#04x} at pc {:#010x}",
                    decode.decoded.funct, fetch.pc
                );
            }
            0
        }
    };
    let zero = alu_result == 0;

    trace!("EX  a={operand_a:#010x} b={operand_b:#010x} result={alu_result:#010x} zero={zero}");

    ExecuteEntry {
        operand_a,
        operand_b,
        alu_result,
        zero,
    }
}
