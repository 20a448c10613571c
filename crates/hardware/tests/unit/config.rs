//! # Configuration Tests
//!
//! Tests for configuration defaults and JSON deserialization.

use std::io::Write;

use scsim_core::common::ConfigError;
use scsim_core::config::*;
use tempfile::NamedTempFile;

#[test]
fn test_config_default() {
    let config = Config::default();
    assert!(!config.general.trace_instructions);
    assert_eq!(config.general.start_pc, 0);
    assert!(!config.general.hardwire_zero);
    assert_eq!(config.memory.backing, MemoryBacking::Sparse);
    assert_eq!(config.memory.dense_words, 16 * 1024);
}

#[test]
fn test_empty_json_uses_defaults() {
    let config = Config::from_json("{}").unwrap();
    assert_eq!(config.general.start_pc, 0);
    assert_eq!(config.memory.backing, MemoryBacking::Sparse);
}

#[test]
fn test_partial_json() {
    let config = Config::from_json(
        r#"{
            "general": { "hardwire_zero": true },
            "memory": { "backing": "Dense" }
        }"#,
    )
    .unwrap();
    assert!(config.general.hardwire_zero);
    assert!(!config.general.trace_instructions);
    assert_eq!(config.memory.backing, MemoryBacking::Dense);
    assert_eq!(config.memory.dense_words, 16 * 1024);
}

#[test]
fn test_invalid_json_is_parse_error() {
    let err = Config::from_json(r#"{ "memory": { "backing": "Flash" } }"#).unwrap_err();
    assert!(matches!(err, ConfigError::Parse(_)));
}

#[test]
fn test_from_file() {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(br#"{ "general": { "start_pc": 64, "trace_instructions": true } }"#)
        .unwrap();
    file.flush().unwrap();

    let config = Config::from_file(file.path()).unwrap();
    assert_eq!(config.general.start_pc, 64);
    assert!(config.general.trace_instructions);
}

#[test]
fn test_from_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = Config::from_file(dir.path().join("nope.json")).unwrap_err();
    assert!(matches!(err, ConfigError::Io { .. }));
}
