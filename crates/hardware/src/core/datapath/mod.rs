//! Single-cycle datapath.
//!
//! This module holds everything that happens between two clock edges:
//! 1. **Signals:** Instruction classes, ALU selection and the control word.
//! 2. **Control:** The opcode, signal and function-code tables.
//! 3. **Wires:** Per-stage records and the staged [`wires::Commit`].
//! 4. **Stages:** Fetch, decode, execute, memory and write-back as pure functions.

/// Control unit lookup tables.
pub mod control;

/// Control signal and operation type definitions.
pub mod signals;

/// Per-stage functions.
pub mod stages;

/// Stage output records and the cycle commit.
pub mod wires;

pub use signals::{AluOp, AluOpClass, ControlSignals, InstructionClass};
pub use wires::{Commit, Cycle, MemWrite, RegWrite};
