//! Core processor implementation.
//!
//! This module contains the CPU, the single-cycle datapath with its control
//! unit, and the execution units the datapath drives.

/// CPU state, cycle execution and dumps.
pub mod cpu;

/// Single-cycle datapath (control unit, stages, wires, signals).
pub mod datapath;

/// Execution units (ALU).
pub mod units;

pub use self::cpu::Cpu;
