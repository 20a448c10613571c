//! Single-cycle datapath simulator library.
//!
//! This crate models the classic single-cycle processor built around a
//! five-class MIPS-style instruction subset (`lw`, `sw`, R-type, `beq`, `j`):
//! 1. **Common:** Bit field codec, register file, error types and constants.
//! 2. **ISA:** Opcode and function-code tables, field decoding, disassembly.
//! 3. **Core:** Control unit, ALU and the per-cycle datapath driven by [`Cpu::tick`].
//! 4. **Memory:** Word-addressed instruction and data memories.
//! 5. **Simulation:** Program-description loader, configuration and statistics.

/// Common types and constants (bit fields, register file, errors).
pub mod common;
/// Simulator configuration (defaults and JSON-deserializable structures).
pub mod config;
/// CPU core (datapath, control unit, ALU).
pub mod core;
/// Instruction set (opcodes, function codes, decode, disassembly).
pub mod isa;
/// Program-description loading.
pub mod sim;
/// Instruction and data memories.
pub mod soc;
/// Simulation statistics collection and reporting.
pub mod stats;

/// Root configuration type; use `Config::default()` or deserialize from JSON.
pub use crate::config::Config;
/// Main CPU type; owns the PC, register file and both memories.
pub use crate::core::Cpu;
