//! Memories attached to the datapath.
//!
//! This module organizes the storage owned by the CPU: the instruction
//! memory, the data memory and the backing-store trait they are built on.

/// Instruction and data memories.
pub mod memory;

/// Backing-store trait definitions.
pub mod traits;

pub use memory::{DataMemory, InstructionMemory};
pub use traits::WordStore;
