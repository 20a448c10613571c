//! Loader and configuration error definitions.
//!
//! The datapath itself never fails: unrecognized opcodes and function codes
//! fall back to defined behavior, and out-of-range indices are contract
//! violations that panic. The only recoverable failures come from the outside
//! world:
//! 1. **Load Errors:** Reading a program-description file.
//! 2. **Config Errors:** Reading or parsing a JSON configuration.
//! 3. **Line Errors:** Per-line parse problems that the loader skips and reports.

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Failure to load a program description as a whole.
#[derive(Debug, Error)]
pub enum LoadError {
    /// The file could not be opened or read.
    #[error("could not read program '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },
}

/// Failure to load a simulator configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("could not read config '{path}': {source}")]
    Io {
        /// Path that was being read.
        path: PathBuf,
        /// Underlying I/O failure.
        #[source]
        source: io::Error,
    },

    /// The configuration text is not valid JSON for [`crate::config::Config`].
    #[error("invalid config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Reason a single program-description line was skipped.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LineError {
    /// Fewer than three whitespace-separated tokens.
    #[error("expected 'address selector value', found {found} token(s)")]
    MissingFields {
        /// Number of tokens present.
        found: usize,
    },

    /// The address token is not a 32-bit hexadecimal number.
    #[error("invalid hex address '{0}'")]
    BadAddress(String),

    /// The memory selector is neither `0` (data) nor `1` (instruction).
    #[error("invalid memory selector '{0}' (expected 0 or 1)")]
    BadSelector(String),

    /// The value token is not a 32-bit hexadecimal number.
    #[error("invalid hex value '{0}'")]
    BadValue(String),
}
