//! Program-Description Loader.
//!
//! This module reads the textual format used to initialize the machine. It performs:
//! 1. **Parsing:** One `address selector value` triple per line, hex address and value
//!    with an optional `0x` prefix, selector `1` for instruction memory and `0` for data.
//! 2. **Filtering:** Blank lines and `#` comment lines are ignored; tokens after the
//!    third are ignored.
//! 3. **Recovery:** Malformed lines are skipped with a warning and reported, never fatal.
//!
//! ```text
//! # add $3, $1, $2
//! 00000000 1 00221820
//! 0x00000010 0 0x0000002a
//! ```

use std::fs;
use std::path::Path;

use tracing::{debug, warn};

use crate::common::error::{LineError, LoadError};
use crate::core::Cpu;

/// Memory a program entry is loaded into.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum MemoryTarget {
    /// Data memory (selector `0`).
    Data,
    /// Instruction memory (selector `1`).
    Instruction,
}

/// One successfully parsed program line.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ProgramEntry {
    /// 1-based line number in the source text.
    pub line: usize,
    /// Byte address.
    pub address: u32,
    /// Destination memory.
    pub target: MemoryTarget,
    /// 32-bit word.
    pub value: u32,
}

/// Outcome of loading a program description.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct LoadReport {
    /// Words placed in instruction memory.
    pub instructions: usize,
    /// Words placed in data memory.
    pub data_words: usize,
    /// Lines that were skipped, with their 1-based line number.
    pub skipped: Vec<(usize, LineError)>,
}

impl LoadReport {
    /// Returns true if every non-comment line was loaded.
    pub fn is_clean(&self) -> bool {
        self.skipped.is_empty()
    }
}

fn parse_hex(token: &str) -> Option<u32> {
    let digits = token
        .strip_prefix("0x")
        .or_else(|| token.strip_prefix("0X"))
        .unwrap_or(token);
    u32::from_str_radix(digits, 16).ok()
}

/// Parses a single line.
///
/// Returns `Ok(None)` for blank and comment lines.
///
/// # Errors
///
/// Returns the [`LineError`] describing why the line is malformed.
pub fn parse_line(line_no: usize, text: &str) -> Result<Option<ProgramEntry>, LineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(None);
    }

    let tokens: Vec<&str> = trimmed.split_whitespace().take(3).collect();
    let [addr, sel, value] = tokens[..] else {
        return Err(LineError::MissingFields {
            found: tokens.len(),
        });
    };

    let address = parse_hex(addr).ok_or_else(|| LineError::BadAddress(addr.to_owned()))?;
    let target = match sel.parse::<u32>() {
        Ok(0) => MemoryTarget::Data,
        Ok(1) => MemoryTarget::Instruction,
        _ => return Err(LineError::BadSelector(sel.to_owned())),
    };
    let value = parse_hex(value).ok_or_else(|| LineError::BadValue(value.to_owned()))?;

    Ok(Some(ProgramEntry {
        line: line_no,
        address,
        target,
        value,
    }))
}

/// Parses a whole program description.
///
/// Returns the parsed entries in source order and the skipped lines.
pub fn parse_program(text: &str) -> (Vec<ProgramEntry>, Vec<(usize, LineError)>) {
    let mut entries = Vec::new();
    let mut skipped = Vec::new();
    for (idx, line) in text.lines().enumerate() {
        let line_no = idx + 1;
        match parse_line(line_no, line) {
            Ok(Some(entry)) => entries.push(entry),
            Ok(None) => {}
            Err(e) => {
                warn!("skipping line {line_no}: {e}");
                skipped.push((line_no, e));
            }
        }
    }
    (entries, skipped)
}

/// Loads a program description held in memory into `cpu`.
pub fn load_str(text: &str, cpu: &mut Cpu) -> LoadReport {
    let (entries, skipped) = parse_program(text);
    let mut report = LoadReport {
        skipped,
        ..LoadReport::default()
    };
    for entry in entries {
        match entry.target {
            MemoryTarget::Instruction => {
                cpu.load_instruction(entry.address, entry.value);
                report.instructions += 1;
            }
            MemoryTarget::Data => {
                cpu.load_data_word(entry.address, entry.value);
                report.data_words += 1;
            }
        }
    }
    debug!(
        "loaded {} instruction(s), {} data word(s), skipped {} line(s)",
        report.instructions,
        report.data_words,
        report.skipped.len()
    );
    report
}

/// Reads a program-description file and loads it into `cpu`.
///
/// # Errors
///
/// Returns [`LoadError::Io`] if the file cannot be read. Malformed lines do
/// not fail the load; they are listed in [`LoadReport::skipped`].
pub fn load_program(path: impl AsRef<Path>, cpu: &mut Cpu) -> Result<LoadReport, LoadError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("loading program from {}", path.display());
    Ok(load_str(&text, cpu))
}
