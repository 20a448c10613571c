//! Instruction Memory Tests.

use scsim_core::soc::InstructionMemory;

#[test]
fn unloaded_address_fetches_zero() {
    let imem = InstructionMemory::new();
    assert!(imem.is_empty());
    assert_eq!(imem.fetch(0x1000), 0);
}

#[test]
fn load_then_fetch() {
    let mut imem = InstructionMemory::new();
    imem.load(0x8, 0x8C22_0004);
    assert_eq!(imem.fetch(0x8), 0x8C22_0004);
    assert_eq!(imem.fetch(0x4), 0);
    assert_eq!(imem.words(), vec![(0x8, 0x8C22_0004)]);
}

#[test]
fn reload_overwrites() {
    let mut imem = InstructionMemory::new();
    imem.load(0, 1);
    imem.load(0, 2);
    assert_eq!(imem.fetch(0), 2);
}
