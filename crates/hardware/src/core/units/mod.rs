//! Execution units.
//!
//! The single-cycle datapath has one functional unit, the integer ALU.

/// Arithmetic Logic Unit for integer operations.
pub mod alu;
