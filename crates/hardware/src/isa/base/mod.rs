//! Base instruction subset.
//!
//! The five instruction classes understood by the single-cycle datapath:
//! load word, store word, register-type arithmetic/logic, branch-on-equal and
//! unconditional jump.
//!
//! # Structure
//!
//! - `opcodes`: Primary opcodes (bits 26-31).
//! - `funct`: Function codes (bits 0-5) selecting the R-type ALU operation.

/// Function code definitions for register-type instructions.
pub mod funct;

/// Primary opcodes.
pub mod opcodes;
