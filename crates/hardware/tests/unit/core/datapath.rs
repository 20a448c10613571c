//! Datapath Cycle Tests.
//!
//! Each test arranges registers and memory, runs one or a few cycles, and
//! checks the architectural state and the returned cycle record.

use scsim_core::config::{Config, MemoryBacking};
use scsim_core::core::datapath::{ControlSignals, InstructionClass};

use crate::common::builder::instruction::{InstructionBuilder, add, beq, j, lw, sub, sw};
use crate::common::harness::TestContext;

#[test]
fn add_writes_rd_and_advances_pc() {
    let mut ctx = TestContext::new().load_program(0, &[add(3, 1, 2)]);
    ctx.set_reg(1, 5);
    ctx.set_reg(2, 7);

    let cycle = ctx.step();

    assert_eq!(ctx.get_reg(3), 12);
    assert_eq!(ctx.cpu.pc, 4);
    assert_eq!(cycle.decode.class, Some(InstructionClass::RType));
    assert_eq!(cycle.execute.alu_result, 12);
    assert!(cycle.commit.reg_write.enable);
    assert_eq!(cycle.commit.reg_write.index, 3);
}

#[test]
fn reads_observe_pre_cycle_state() {
    let mut ctx = TestContext::new().load_program(0, &[add(1, 1, 1), add(1, 1, 1)]);
    ctx.set_reg(1, 3);

    let first = ctx.step();
    assert_eq!(first.decode.rs_val, 3);
    assert_eq!(first.decode.rt_val, 3);
    assert_eq!(ctx.get_reg(1), 6);

    let second = ctx.step();
    assert_eq!(second.decode.rs_val, 6);
    assert_eq!(ctx.get_reg(1), 12);
}

#[test]
fn evaluate_does_not_change_state() {
    let mut ctx = TestContext::new().load_program(0, &[sw(2, 0, 0x40)]);
    ctx.set_reg(2, 0xABCD);
    let before = ctx.regs();

    let cycle = ctx.cpu.evaluate();

    assert!(cycle.commit.mem_write.enable);
    assert_eq!(ctx.get_mem(0x40), 0);
    assert_eq!(ctx.regs(), before);
    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn load_reads_data_memory() {
    let mut ctx = TestContext::new()
        .load_program(0, &[lw(2, 1, 4)])
        .with_data(0x14, 0x2A);
    ctx.set_reg(1, 0x10);

    let cycle = ctx.step();

    assert_eq!(ctx.get_reg(2), 0x2A);
    assert_eq!(cycle.execute.alu_result, 0x14);
    assert_eq!(cycle.memory.read_data, 0x2A);
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn load_with_negative_offset() {
    let mut ctx = TestContext::new()
        .load_program(0, &[lw(4, 5, -4)])
        .with_data(0x100, 0x55);
    ctx.set_reg(5, 0x104);

    let _ = ctx.step();

    assert_eq!(ctx.get_reg(4), 0x55);
}

#[test]
fn store_then_load_round_trip() {
    let mut ctx = TestContext::new().load_program(0, &[sw(2, 1, 8), lw(3, 1, 8)]);
    ctx.set_reg(1, 0x100);
    ctx.set_reg(2, 0xCAFE_F00D);

    let store = ctx.step();
    assert!(!store.commit.reg_write.enable);
    assert_eq!(ctx.get_mem(0x108), 0xCAFE_F00D);

    let _ = ctx.step();
    assert_eq!(ctx.get_reg(3), 0xCAFE_F00D);
    assert_eq!(ctx.cpu.pc, 8);
}

#[test]
fn store_is_visible_to_following_load() {
    let mut ctx = TestContext::new()
        .load_program(0, &[lw(3, 0, 0x20), sw(2, 0, 0x20), lw(4, 0, 0x20)])
        .with_data(0x20, 1);
    ctx.set_reg(2, 2);

    ctx.run(3);

    assert_eq!(ctx.get_reg(3), 1);
    assert_eq!(ctx.get_reg(4), 2);
}

#[test]
fn jump_uses_field_times_four() {
    let mut ctx = TestContext::new().load_program(4, &[j(4)]);

    let cycle = ctx.step();

    assert_eq!(ctx.cpu.pc, 0x10);
    assert!(cycle.decode.ctrl.jump);
    assert!(!cycle.commit.reg_write.enable);
    assert!(!cycle.commit.mem_write.enable);
}

#[test]
fn jump_keeps_upper_bits_of_next_pc() {
    let mut ctx = TestContext::new().load_program(0x3FFF_FFFC, &[j(1)]);

    let _ = ctx.step();

    assert_eq!(ctx.cpu.pc, 0x4000_0004);
}

#[test]
fn branch_taken_when_equal() {
    let mut ctx = TestContext::new().load_program(8, &[beq(1, 2, -2)]);
    ctx.set_reg(1, 9);
    ctx.set_reg(2, 9);

    let cycle = ctx.step();

    assert!(cycle.execute.zero);
    assert!(cycle.branch_taken());
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn branch_not_taken_when_different() {
    let mut ctx = TestContext::new().load_program(8, &[beq(1, 2, 100)]);
    ctx.set_reg(1, 9);
    ctx.set_reg(2, 10);

    let cycle = ctx.step();

    assert!(!cycle.branch_taken());
    assert_eq!(ctx.cpu.pc, 12);
}

#[test]
fn branch_forward_offset() {
    let mut ctx = TestContext::new().load_program(0, &[beq(0, 0, 3)]);

    let _ = ctx.step();

    assert_eq!(ctx.cpu.pc, 16);
}

#[test]
fn branch_writes_nothing() {
    let mut ctx = TestContext::new().load_program(0, &[beq(1, 2, 1)]);
    ctx.set_reg(1, 4);
    ctx.set_reg(2, 4);
    let before = ctx.regs();

    let cycle = ctx.step();

    assert_eq!(ctx.regs(), before);
    assert!(!cycle.commit.mem_write.enable);
}

#[test]
fn unknown_opcode_only_advances_pc() {
    let word = InstructionBuilder::new().opcode(0x08).rs(1).rt(2).imm(7).build();
    let mut ctx = TestContext::new()
        .load_program(0, &[word])
        .with_data(0, 0x77);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);
    let before = ctx.regs();

    let cycle = ctx.step();

    assert_eq!(cycle.decode.class, None);
    assert_eq!(cycle.decode.ctrl, ControlSignals::default());
    assert_eq!(ctx.regs(), before);
    assert_eq!(ctx.cpu.dmem.words(), vec![(0, 0x77)]);
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn zero_word_is_a_no_op() {
    let mut ctx = TestContext::new();
    ctx.set_reg(0, 0x1234);
    let before = ctx.regs();

    let cycle = ctx.step();

    assert_eq!(cycle.fetch.inst, 0);
    assert!(!cycle.commit.reg_write.enable);
    assert_eq!(ctx.regs(), before);
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn unknown_funct_suppresses_write_back() {
    let word = InstructionBuilder::new().opcode(0).rs(1).rt(2).rd(3).funct(0x27).build();
    let mut ctx = TestContext::new().load_program(0, &[word]);
    ctx.set_reg(1, 0xF0);
    ctx.set_reg(2, 0x0F);
    ctx.set_reg(3, 0x99);

    let cycle = ctx.step();

    assert_eq!(cycle.decode.alu_op, None);
    assert_eq!(cycle.execute.alu_result, 0);
    assert_eq!(ctx.get_reg(3), 0x99);
    assert_eq!(ctx.cpu.stats.unrecognized_funct, 1);
}

#[test]
fn register_zero_is_writable_by_default() {
    let mut ctx = TestContext::new().load_program(0, &[add(0, 1, 2)]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);

    let _ = ctx.step();

    assert_eq!(ctx.get_reg(0), 3);
}

#[test]
fn register_zero_hardwired_drops_writes() {
    let mut config = Config::default();
    config.general.hardwire_zero = true;
    let mut ctx =
        TestContext::with_config(&config).load_program(0, &[add(0, 1, 2), add(3, 0, 1)]);
    ctx.set_reg(1, 1);
    ctx.set_reg(2, 2);

    let _ = ctx.step();
    assert_eq!(ctx.get_reg(0), 0);

    let _ = ctx.step();
    assert_eq!(ctx.get_reg(3), 1);
}

#[test]
fn sub_then_branch_on_result() {
    // R3 = R1 - R2 = 0, then beq R3, R0 jumps over one word.
    let program = [sub(3, 1, 2), beq(3, 0, 1), add(4, 1, 1), add(5, 1, 1)];
    let mut ctx = TestContext::new().load_program(0, &program);
    ctx.set_reg(1, 6);
    ctx.set_reg(2, 6);

    ctx.run(3);

    assert_eq!(ctx.get_reg(4), 0);
    assert_eq!(ctx.get_reg(5), 12);
    assert_eq!(ctx.cpu.pc, 16);
}

#[test]
fn pc_wraps_at_top_of_address_space() {
    let mut ctx = TestContext::new().load_program(0xFFFF_FFFC, &[add(1, 1, 1)]);

    let _ = ctx.step();

    assert_eq!(ctx.cpu.pc, 0);
}

#[test]
fn start_pc_comes_from_config() {
    let config = Config::from_json(r#"{ "general": { "start_pc": 256 } }"#).unwrap();
    let ctx = TestContext::with_config(&config);
    assert_eq!(ctx.cpu.pc, 0x100);
}

#[test]
fn dense_backing_serves_addresses_past_its_vector() {
    let mut config = Config::default();
    config.memory.backing = MemoryBacking::Dense;
    let mut ctx = TestContext::with_config(&config)
        .load_program(0, &[lw(1, 2, 0), sw(3, 2, 4), lw(4, 2, 4)]);
    ctx.set_reg(1, 0x55);
    ctx.set_reg(2, 0x0001_0000);
    ctx.set_reg(3, 0xCAFE);

    ctx.run(3);

    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_mem(0x0001_0004), 0xCAFE);
    assert_eq!(ctx.get_reg(4), 0xCAFE);
}

#[test]
fn decode_uses_opcode_control_table() {
    let program = [lw(1, 0, 0), sw(1, 0, 0), add(1, 1, 1), beq(1, 1, 0), j(0)];
    let mut ctx = TestContext::new().load_program(0, &program);

    for word in program {
        let cycle = ctx.step();
        assert_eq!(cycle.decode.ctrl, ControlSignals::for_opcode(word >> 26));
    }
}
