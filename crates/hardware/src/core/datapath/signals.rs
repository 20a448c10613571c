//! Datapath control signals and operation types.
//!
//! This module defines the signals that steer one cycle of the datapath. It covers:
//! 1. **Instruction Classes:** The five recognized opcode classes.
//! 2. **ALU Selection:** The coarse ALU class and the concrete ALU operation.
//! 3. **Control Word:** The eight single-bit lines produced by the control unit.

/// Concrete operation performed by the ALU.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum AluOp {
    /// Wrapping 32-bit addition.
    #[default]
    Add,

    /// Wrapping 32-bit subtraction.
    Sub,

    /// Bitwise AND.
    And,

    /// Bitwise OR.
    Or,

    /// Set less than (unsigned comparison, result 0 or 1).
    Slt,

    /// Bitwise NOR. Present in the ALU, never selected by the function-code table.
    Nor,
}

/// First-level ALU selection made from the instruction class alone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum AluOpClass {
    /// Address computation for loads and stores.
    Add,

    /// Equality test for branches.
    Subtract,

    /// Defer to the R-type function code.
    Funct,
}

/// Recognized instruction classes, keyed by opcode.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstructionClass {
    /// `lw rt, imm(rs)` (opcode 0x23).
    LoadWord,

    /// `sw rt, imm(rs)` (opcode 0x2B).
    StoreWord,

    /// Register-register ALU operation (opcode 0x00).
    RType,

    /// `beq rs, rt, imm` (opcode 0x04).
    BranchEq,

    /// `j target` (opcode 0x02).
    Jump,
}

impl InstructionClass {
    /// Short mnemonic used in traces and reports.
    pub const fn mnemonic(self) -> &'static str {
        match self {
            Self::LoadWord => "lw",
            Self::StoreWord => "sw",
            Self::RType => "r-type",
            Self::BranchEq => "beq",
            Self::Jump => "j",
        }
    }
}

/// Control word produced by the control unit for one instruction.
///
/// The default value has every line deasserted, which is what an
/// unrecognized opcode receives: nothing is written and the PC advances
/// sequentially.
#[allow(clippy::struct_excessive_bools)]
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ControlSignals {
    /// ALU operand B is the sign-extended immediate instead of `rt`.
    pub alu_src_imm: bool,
    /// Write-back destination is `rd` instead of `rt`.
    pub reg_dst_rd: bool,
    /// Instruction is a conditional branch taken when the ALU result is zero.
    pub branch: bool,
    /// Enable the data-memory read port.
    pub mem_read: bool,
    /// Enable the data-memory write port.
    pub mem_write: bool,
    /// Enable the register-file write port.
    pub reg_write: bool,
    /// Write-back value comes from data memory instead of the ALU.
    pub mem_to_reg: bool,
    /// Instruction is an unconditional jump.
    pub jump: bool,
}
