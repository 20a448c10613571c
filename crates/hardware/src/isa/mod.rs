//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains definitions for opcodes, function codes, field extraction and
//! decoding of the five-class base subset.

/// Register name conventions.
pub mod abi;

/// Base subset opcodes and function codes.
pub mod base;

/// Instruction decoding.
pub mod decode;

/// Instruction disassembler for traces and diagnostics.
pub mod disasm;

/// Instruction field accessors and the decoded-instruction record.
pub mod instruction;
