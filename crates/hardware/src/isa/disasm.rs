//! Instruction Disassembler.
//!
//! Converts a 32-bit instruction encoding into a human-readable mnemonic
//! string for the state dump, per-cycle traces and test diagnostics.
//!
//! # Usage
//!
//! ```
//! use scsim_core::isa::disasm::disassemble;
//!
//! assert_eq!(disassemble(0x0022_1820), "add $v1, $at, $v0");
//! assert_eq!(disassemble(0x8C22_0004), "lw $v0, 4($at)");
//! ```

use crate::isa::abi::reg_name;
use crate::isa::base::{funct, opcodes};
use crate::isa::instruction::Decoded;

/// Returns the mnemonic for a recognized R-type function code.
fn rtype_mnemonic(code: u32) -> Option<&'static str> {
    match code {
        funct::ADD => Some("add"),
        funct::SUB => Some("sub"),
        funct::AND => Some("and"),
        funct::OR => Some("or"),
        funct::SLT => Some("slt"),
        _ => None,
    }
}

/// Disassembles a 32-bit instruction into a human-readable string.
///
/// The all-zero word renders as `nop`. Unrecognized function codes render as
/// `r-type funct=0x..` and unrecognized opcodes as `.word 0x........`.
pub fn disassemble(inst: u32) -> String {
    if inst == 0 {
        return "nop".to_string();
    }
    let d = Decoded::from_raw(inst);
    match d.opcode {
        opcodes::OP_RTYPE => match rtype_mnemonic(d.funct) {
            Some(m) => format!(
                "{} ${}, ${}, ${}",
                m,
                reg_name(d.rd),
                reg_name(d.rs),
                reg_name(d.rt)
            ),
            None => format!("r-type funct={:#04x}", d.funct),
        },
        opcodes::OP_LW => format!("lw ${}, {}(${})", reg_name(d.rt), d.imm, reg_name(d.rs)),
        opcodes::OP_SW => format!("sw ${}, {}(${})", reg_name(d.rt), d.imm, reg_name(d.rs)),
        opcodes::OP_BEQ => format!("beq ${}, ${}, {}", reg_name(d.rs), reg_name(d.rt), d.imm),
        opcodes::OP_J => format!("j {:#x}", d.jump_target << 2),
        _ => format!(".word {inst:#010x}"),
    }
}
