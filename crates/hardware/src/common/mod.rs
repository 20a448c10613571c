//! Common utilities and types used throughout the simulator.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Bit Fields:** Extraction of instruction fields and immediate sign extension.
//! 2. **Constants:** Word size, register count and PC arithmetic masks.
//! 3. **Error Handling:** Loader and configuration error types.
//! 4. **Register Management:** The 32-entry register file.

/// Bit field extraction and sign extension.
pub mod bits;

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for loading and configuration.
pub mod error;

/// Register file implementation.
pub mod reg;

pub use bits::{extract_field, sign_extend16};
pub use constants::{NUM_REGS, WORD_SIZE};
pub use error::{ConfigError, LineError, LoadError};
pub use reg::RegisterFile;
