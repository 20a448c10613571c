//! Simulation utilities and program loading.
//!
//! Provides the loader for the textual program-description format that
//! fills instruction and data memory before simulation begins.

pub mod loader;

pub use loader::{LoadReport, MemoryTarget, ProgramEntry, load_program, load_str, parse_program};
