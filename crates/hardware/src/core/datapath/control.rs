//! Control unit.
//!
//! Three finite lookup tables turn decoded fields into datapath control:
//! 1. **Opcode Table:** opcode to [`InstructionClass`].
//! 2. **Signal Table:** class to [`ControlSignals`].
//! 3. **ALU Control:** class to [`AluOpClass`], then function code to [`AluOp`].

use crate::core::datapath::signals::{AluOp, AluOpClass, ControlSignals, InstructionClass};
use crate::isa::base::{funct, opcodes};

impl InstructionClass {
    /// Looks up the class of `opcode`, or `None` if it is not recognized.
    pub const fn from_opcode(opcode: u32) -> Option<Self> {
        match opcode {
            opcodes::OP_LW => Some(Self::LoadWord),
            opcodes::OP_SW => Some(Self::StoreWord),
            opcodes::OP_RTYPE => Some(Self::RType),
            opcodes::OP_BEQ => Some(Self::BranchEq),
            opcodes::OP_J => Some(Self::Jump),
            _ => None,
        }
    }

    /// First-level ALU selection for this class.
    pub const fn alu_op_class(self) -> AluOpClass {
        match self {
            Self::LoadWord | Self::StoreWord | Self::Jump => AluOpClass::Add,
            Self::BranchEq => AluOpClass::Subtract,
            Self::RType => AluOpClass::Funct,
        }
    }
}

impl AluOp {
    /// Looks up the R-type function code, or `None` if it is not recognized.
    pub const fn from_funct(code: u32) -> Option<Self> {
        match code {
            funct::ADD => Some(Self::Add),
            funct::SUB => Some(Self::Sub),
            funct::AND => Some(Self::And),
            funct::OR => Some(Self::Or),
            funct::SLT => Some(Self::Slt),
            _ => None,
        }
    }
}

impl ControlSignals {
    /// Control word for a recognized class.
    pub const fn for_class(class: InstructionClass) -> Self {
        match class {
            InstructionClass::LoadWord => Self {
                alu_src_imm: true,
                reg_dst_rd: false,
                branch: false,
                mem_read: true,
                mem_write: false,
                reg_write: true,
                mem_to_reg: true,
                jump: false,
            },
            InstructionClass::StoreWord => Self {
                alu_src_imm: true,
                reg_dst_rd: false,
                branch: false,
                mem_read: false,
                mem_write: true,
                reg_write: false,
                mem_to_reg: false,
                jump: false,
            },
            InstructionClass::RType => Self {
                alu_src_imm: false,
                reg_dst_rd: true,
                branch: false,
                mem_read: false,
                mem_write: false,
                reg_write: true,
                mem_to_reg: false,
                jump: false,
            },
            InstructionClass::BranchEq => Self {
                alu_src_imm: false,
                reg_dst_rd: false,
                branch: true,
                mem_read: false,
                mem_write: false,
                reg_write: false,
                mem_to_reg: false,
                jump: false,
            },
            InstructionClass::Jump => Self {
                alu_src_imm: false,
                reg_dst_rd: false,
                branch: false,
                mem_read: false,
                mem_write: false,
                reg_write: false,
                mem_to_reg: false,
                jump: true,
            },
        }
    }

    /// Control word for a raw opcode; unrecognized opcodes get the all-disabled word.
    pub fn for_opcode(opcode: u32) -> Self {
        InstructionClass::from_opcode(opcode).map_or_else(Self::default, Self::for_class)
    }
}

/// Resolves the concrete ALU operation for `class` and function code `code`.
///
/// Returns `None` only for an R-type instruction whose function code is not
/// in the table.
pub const fn alu_control(class: InstructionClass, code: u32) -> Option<AluOp> {
    match class.alu_op_class() {
        AluOpClass::Add => Some(AluOp::Add),
        AluOpClass::Subtract => Some(AluOp::Sub),
        AluOpClass::Funct => AluOp::from_funct(code),
    }
}
