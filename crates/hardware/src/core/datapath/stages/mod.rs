//! Datapath stage implementations.
//!
//! The five stages of the single-cycle machine, each a pure function of the
//! pre-cycle CPU state and the outputs of the stages before it:
//! 1. **Fetch:** Reads the instruction word at the PC.
//! 2. **Decode:** Splits fields, consults the control unit, reads `rs` and `rt`.
//! 3. **Execute:** Selects operand B and runs the ALU.
//! 4. **Memory:** Reads data memory at the ALU result when enabled.
//! 5. **Writeback:** Stages the register write, memory write and next PC.

/// Instruction decode stage implementation.
pub mod decode;

/// Execute stage implementation.
pub mod execute;

/// Instruction fetch stage implementation.
pub mod fetch;

/// Memory access stage implementation.
pub mod memory;

/// Writeback stage implementation.
pub mod writeback;

/// Decode stage entry point.
pub use decode::decode_stage;
/// Execute stage entry point.
pub use execute::execute_stage;
/// Fetch stage entry point.
pub use fetch::fetch_stage;
/// Memory stage entry point.
pub use memory::mem_stage;
/// Writeback stage entry point.
pub use writeback::{next_pc, wb_stage};
