//! End-to-end programs.
//!
//! Each test loads a short program, runs it from reset until the idle-run
//! monitor stops it, and checks the architectural result.

use mipsim_core::Simulator;
use mipsim_core::common::SimError;
use mipsim_core::config::Config;
use mipsim_core::isa::decode;
use mipsim_core::sim::RunState;
use mipsim_core::stats::StopReason;

use crate::common::TestContext;
use crate::common::builder::*;

#[test]
fn arithmetic_store_and_load() {
    let program = [
        addi(1, 0, 5),
        addi(2, 0, 7),
        add(3, 1, 2),
        sub(4, 2, 1),
        sw(3, 0, 4),
        or(5, 3, 4),
        lw(6, 0, 4),
        NOP,
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let report = ctx.run();

    assert_eq!(ctx.get_reg(3), 12);
    assert_eq!(ctx.get_reg(4), 2);
    assert_eq!(ctx.get_reg(5), 14);
    assert_eq!(ctx.get_reg(6), 12);
    assert_eq!(ctx.get_mem(4), 12);

    assert_eq!(report.cycles, 9);
    assert_eq!(report.executed, 7);
    assert_eq!(report.throughput.effective_cycles(), Some(5));
}

#[test]
fn slots_read_state_from_before_the_cycle() {
    let program = [addi(1, 0, 5), add(2, 1, 1), add(3, 1, 1), NOP];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(2), 0);
    assert_eq!(ctx.get_reg(3), 10);
}

#[test]
fn slot_one_wins_register_and_store_conflicts() {
    let program = [
        addi(1, 0, 1),
        addi(1, 0, 2),
        sw(1, 0, 0),
        sw(0, 0, 0),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_mem(0), 1);
}

#[test]
fn counted_loop_with_bne() {
    let program = [
        addi(1, 0, 3),
        addi(2, 0, 0),
        // loop: slots 2-3
        addi(2, 2, 1),
        addi(1, 1, -1),
        // slot 4 branches back to slot 2 while $1 != 0
        bne(1, 0, -3),
        NOP,
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let report = ctx.run();

    assert_eq!(ctx.get_reg(1), 0);
    assert_eq!(ctx.get_reg(2), 3);
    assert_eq!(report.cycles, 12);
    assert_eq!(report.executed, 11);
    assert_eq!(report.throughput.effective_cycles(), Some(8));
}

#[test]
fn call_and_return() {
    let program = [
        jal(4),
        addi(1, 0, 1),
        addi(3, 0, 3),
        j(8),
        addi(2, 0, 9),
        jr(31),
    ];
    let mut ctx = TestContext::new().load_program(&program);
    let report = ctx.run();

    assert_eq!(ctx.get_reg(31), 2);
    assert_eq!(ctx.get_reg(1), 1);
    assert_eq!(ctx.get_reg(2), 9);
    assert_eq!(ctx.get_reg(3), 3);
    assert_eq!(report.final_pc, 18);
}

#[test]
fn slot_one_redirect_wins() {
    let program = [j(6), j(4), NOP, NOP, addi(1, 0, 4), NOP, addi(1, 0, 6), NOP];
    let mut ctx = TestContext::new().load_program(&program);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(1), 6);
}

#[test]
fn unknown_words_count_but_do_nothing() {
    let program = [0xFC00_0000, addi(1, 0, 1)];
    let mut ctx = TestContext::new().load_program(&program);
    let report = ctx.run();
    assert_eq!(report.executed, 2);
    assert_eq!(ctx.get_reg(1), 1);
}

#[test]
fn zero_idle_threshold_is_refused_at_construction() {
    let mut config = Config::default();
    config.monitor.idle_threshold = 0;
    assert!(matches!(
        Simulator::new(config),
        Err(SimError::InvalidConfig(_))
    ));
}

#[test]
fn cycle_limit_stops_a_spinning_program() {
    let mut config = Config::default();
    config.general.max_cycles = 20;
    let mut ctx = TestContext::with_config(config).load_program(&[j(0), addi(1, 1, 1)]);
    let report = ctx.run();

    assert_eq!(report.reason, StopReason::CycleLimit);
    assert_eq!(report.state, RunState::Running);
    assert_eq!(report.cycles, 20);
    assert_eq!(report.executed, 40);
    assert_eq!(report.throughput.ipc(), Some(2.0));
    assert_eq!(ctx.get_reg(1), 20);
}

#[test]
fn trace_does_not_change_results() {
    let program = [addi(1, 0, 5), addi(2, 0, 7), add(3, 1, 2), NOP];

    let mut plain = TestContext::new().load_program(&program);
    let mut config = Config::default();
    config.general.trace_instructions = true;
    let mut traced = TestContext::with_config(config).load_program(&program);

    assert_eq!(plain.run(), traced.run());
    assert_eq!(plain.cpu().regs.snapshot(), traced.cpu().regs.snapshot());
}

#[test]
fn data_image_is_visible_to_loads() {
    let mut ctx = TestContext::new()
        .load_data(&[0, 0, 41])
        .load_program(&[lw(1, 0, 2), NOP, addi(2, 1, 1), NOP]);
    let _ = ctx.run();
    assert_eq!(ctx.get_reg(2), 42);
}

#[test]
fn registers_seeded_after_reset_are_used() {
    let mut ctx = TestContext::new().load_program(&[add(3, 1, 2), NOP]);
    ctx.release_reset();
    ctx.set_reg(1, 40);
    ctx.set_reg(2, 2);
    let _ = ctx.step_cycles(1);
    assert_eq!(ctx.get_reg(3), 42);
}

#[test]
fn cycle_record_carries_decode_and_redirect() {
    let mut ctx = TestContext::new().load_program(&[addi(1, 0, 5), j(6)]);
    ctx.release_reset();
    let record = ctx.sim.cpu.tick();
    assert_eq!(record.decoded, [decode(addi(1, 0, 5)), decode(j(6))]);
    assert_eq!(record.redirect, Some(6));
    assert_eq!(ctx.cpu().pc(), 6);
}
