//! Configuration system for the simulator.
//!
//! This module defines the configuration structures used to parameterize the
//! simulator. It provides:
//! 1. **Defaults:** Baseline machine constants (start PC, data memory size).
//! 2. **Structures:** Hierarchical config for general behavior and memory.
//! 3. **Enums:** Data-memory backing store selection.
//!
//! Configuration is read from JSON (`Config::from_json` / `Config::from_file`);
//! every field has a serde default so a partial document, or `{}`, is valid.

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::common::error::ConfigError;

/// Default configuration constants for the simulator.
mod defaults {
    /// Program counter value at reset.
    pub const START_PC: u32 = 0x0000_0000;

    /// Words in a dense data-memory store (64 KiB).
    pub const DENSE_WORDS: usize = crate::common::constants::DEFAULT_DENSE_WORDS;
}

/// Data-memory backing store implementation.
///
/// Both stores honor the same contract (stored words read back, unwritten
/// words read zero); they differ only in footprint and range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub enum MemoryBacking {
    /// Ordered map holding only the words that were written.
    ///
    /// Covers the full 32-bit address space.
    #[default]
    Sparse,
    /// Vector of `dense_words` words starting at address 0.
    ///
    /// Addresses past the end fall back to sparse storage.
    Dense,
}

/// Root configuration structure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Config {
    /// General simulation settings.
    #[serde(default)]
    pub general: GeneralConfig,
    /// Data-memory settings.
    #[serde(default)]
    pub memory: MemoryConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] if the text is not valid JSON or does not
    /// match the configuration schema.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Reads and parses a JSON configuration file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`] if the file cannot be read and
    /// [`ConfigError::Parse`] if its contents are invalid.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&text)
    }
}

/// General simulation settings and options.
#[derive(Debug, Clone, Deserialize)]
pub struct GeneralConfig {
    /// Log every cycle's PC, instruction and commit at `info` level.
    #[serde(default)]
    pub trace_instructions: bool,

    /// Initial PC value.
    #[serde(default = "GeneralConfig::default_start_pc")]
    pub start_pc: u32,

    /// Treat register 0 as a hard-wired zero instead of plain storage.
    #[serde(default)]
    pub hardwire_zero: bool,
}

impl GeneralConfig {
    /// Returns the default starting program counter.
    const fn default_start_pc() -> u32 {
        defaults::START_PC
    }
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            trace_instructions: false,
            start_pc: defaults::START_PC,
            hardwire_zero: false,
        }
    }
}

/// Data-memory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct MemoryConfig {
    /// Backing store implementation.
    #[serde(default)]
    pub backing: MemoryBacking,

    /// Capacity in words of the dense store (ignored for sparse).
    #[serde(default = "MemoryConfig::default_dense_words")]
    pub dense_words: usize,
}

impl MemoryConfig {
    /// Returns the default dense-store capacity.
    const fn default_dense_words() -> usize {
        defaults::DENSE_WORDS
    }
}

impl Default for MemoryConfig {
    fn default() -> Self {
        Self {
            backing: MemoryBacking::default(),
            dense_words: defaults::DENSE_WORDS,
        }
    }
}
