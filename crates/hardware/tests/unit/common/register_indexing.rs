//! # Register Indexing Tests
//!
//! Unit tests for the `RegisterFile`: reset state, write-enable gating,
//! register 0 in both of its modes, and the textual dump.

use pretty_assertions::assert_eq;
use scsim_core::common::reg::RegisterFile;

#[test]
fn initial_values_are_zero() {
    let regs = RegisterFile::default();
    for i in 0..32 {
        assert_eq!(regs.read(i), 0, "R{i} should be 0 initially");
    }
}

#[test]
fn write_and_read() {
    let mut regs = RegisterFile::default();
    regs.write(1, 42, true);
    assert_eq!(regs.read(1), 42);
}

#[test]
fn disabled_write_is_dropped() {
    let mut regs = RegisterFile::default();
    regs.write(7, 0xDEAD_BEEF, false);
    assert_eq!(regs.read(7), 0);
}

#[test]
fn register_zero_is_storage_by_default() {
    let mut regs = RegisterFile::default();
    regs.write(0, 0x1234, true);
    assert_eq!(regs.read(0), 0x1234);
}

#[test]
fn register_zero_hardwired_when_configured() {
    let mut regs = RegisterFile::new(true);
    regs.write(0, 0xDEAD_BEEF, true);
    regs.set(0, 5);
    assert_eq!(regs.read(0), 0);
    assert_eq!(regs.snapshot()[0], 0);
}

#[test]
fn write_all_registers() {
    let mut regs = RegisterFile::default();
    for i in 0..32 {
        regs.write(i, i as u32 * 100, true);
    }
    for i in 0..32 {
        assert_eq!(regs.read(i), i as u32 * 100);
    }
}

#[test]
#[should_panic]
fn out_of_range_index_panics() {
    let regs = RegisterFile::default();
    let _ = regs.read(32);
}

#[test]
fn dump_layout() {
    let mut regs = RegisterFile::default();
    regs.set(1, 0x11);
    regs.set(9, 0x99);
    regs.set(31, 0xFFFF_FFFF);
    let dump = regs.dump();
    let lines: Vec<&str> = dump.lines().collect();
    assert_eq!(lines.len(), 8);
    assert_eq!(
        lines[0],
        "R00: 00000000 R08: 00000000 R10: 00000000 R18: 00000000"
    );
    assert_eq!(
        lines[1],
        "R01: 00000011 R09: 00000099 R11: 00000000 R19: 00000000"
    );
    assert_eq!(
        lines[7],
        "R07: 00000000 R0f: 00000000 R17: 00000000 R1f: ffffffff"
    );
}
