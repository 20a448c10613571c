//! Run Loop and Dump Tests.

use pretty_assertions::assert_eq;

use crate::common::builder::instruction::{add, j, lw};
use crate::common::harness::TestContext;

#[test]
fn run_executes_requested_cycles() {
    let mut ctx = TestContext::new().load_program(0, &[add(1, 1, 2), add(1, 1, 2), add(1, 1, 2)]);
    ctx.set_reg(2, 1);

    let executed = ctx.cpu.run(3);

    assert_eq!(executed, 3);
    assert_eq!(ctx.get_reg(1), 3);
    assert_eq!(ctx.cpu.stats.cycles, 3);
}

#[test]
fn run_until_self_loop_stops_on_halt() {
    // 0: add, 4: add, 8: j 8
    let mut ctx = TestContext::new().load_program(0, &[add(1, 1, 2), add(1, 1, 2), j(2)]);
    ctx.set_reg(2, 5);

    let executed = ctx.cpu.run_until_self_loop(100);

    assert_eq!(executed, 3);
    assert_eq!(ctx.cpu.pc, 8);
    assert_eq!(ctx.get_reg(1), 10);
}

#[test]
fn run_until_self_loop_honors_limit() {
    let mut ctx = TestContext::new();
    assert_eq!(ctx.cpu.run_until_self_loop(7), 7);
    assert_eq!(ctx.cpu.pc, 28);
}

#[test]
fn run_with_hook_sees_each_committed_cycle() {
    let mut ctx = TestContext::new().load_program(0, &[add(1, 1, 2), add(1, 1, 2), j(2)]);
    ctx.set_reg(2, 1);
    let mut seen = Vec::new();

    let executed = ctx.cpu.run_with(10, |cpu, cycle| {
        seen.push((cycle.fetch.pc, cpu.pc, cpu.regs.read(1)));
        !cycle.is_self_loop()
    });

    assert_eq!(executed, 3);
    assert_eq!(seen, vec![(0, 4, 1), (4, 8, 2), (8, 8, 2)]);
}

#[test]
fn run_with_hook_can_stop_immediately() {
    let mut ctx = TestContext::new().load_program(0, &[add(1, 1, 2)]);
    ctx.set_reg(2, 9);

    assert_eq!(ctx.cpu.run_with(5, |_, _| false), 1);
    assert_eq!(ctx.get_reg(1), 9);
    assert_eq!(ctx.cpu.stats.cycles, 1);
}

#[test]
fn update_is_tick() {
    let mut ctx = TestContext::new().load_program(0, &[add(1, 2, 2)]);
    ctx.set_reg(2, 4);

    let cycle = ctx.cpu.update();

    assert_eq!(cycle.commit.reg_write.value, 8);
    assert_eq!(ctx.cpu.pc, 4);
}

#[test]
fn load_after_first_tick_is_visible_next_cycle() {
    let mut ctx = TestContext::new();
    let _ = ctx.step();
    ctx.cpu.load_instruction(4, lw(1, 0, 0x10));
    ctx.cpu.load_data_word(0x10, 0xBEEF);

    let _ = ctx.step();

    assert_eq!(ctx.get_reg(1), 0xBEEF);
}

#[test]
fn dump_shows_pc_instruction_and_registers() {
    let mut ctx = TestContext::new().load_program(0, &[add(3, 1, 2)]);
    ctx.set_reg(1, 0x10);

    let dump = ctx.cpu.dump();
    let lines: Vec<&str> = dump.lines().collect();

    assert_eq!(
        lines[0],
        "PROGRAM COUNTER = 00000000   INSTRUCTION = 00221820   add $v1, $at, $v0"
    );
    assert_eq!(lines[1], "REGISTER FILE");
    assert_eq!(
        lines[2],
        "R00: 00000000 R08: 00000000 R10: 00000000 R18: 00000000"
    );
    assert_eq!(
        lines[3],
        "R01: 00000010 R09: 00000000 R11: 00000000 R19: 00000000"
    );
    assert_eq!(lines.len(), 10);
}
