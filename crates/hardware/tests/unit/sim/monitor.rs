//! Termination monitor tests.
//!
//! The monitor is driven both directly with synthetic bundles and through
//! the simulator with a real instruction stream.

use mipsim_core::config::Config;
use mipsim_core::core::pipeline::latches::FetchBundle;
use mipsim_core::sim::{Monitor, RunState};
use mipsim_core::stats::{StopReason, Throughput};

use crate::common::TestContext;
use crate::common::builder::*;

fn bundle(words: [u32; 2]) -> FetchBundle {
    FetchBundle { pc: 0, words }
}

#[test]
fn starts_resetting_and_runs_on_first_fetch() {
    let mut mon = Monitor::new(5);
    assert_eq!(mon.state(), RunState::Resetting);
    assert_eq!(mon.observe(&bundle([1, 0])), RunState::Running);
    assert_eq!(mon.cycles(), 1);
    assert_eq!(mon.executed(), 1);
}

#[test]
fn idle_run_must_be_consecutive() {
    let mut mon = Monitor::new(3);
    for words in [[0, 0], [0, 0], [1, 1], [0, 0], [0, 0]] {
        let _ = mon.observe(&bundle(words));
    }
    assert_eq!(mon.state(), RunState::Running);
    assert_eq!(mon.idle_run(), 2);
    assert_eq!(mon.observe(&bundle([0, 0])), RunState::Terminated);
    assert_eq!(mon.cycles(), 6);
    assert_eq!(mon.executed(), 2);
}

#[test]
fn throughput_uses_the_idle_corrected_denominator() {
    let mut mon = Monitor::new(2);
    for words in [[1, 1], [1, 0], [0, 0], [0, 0]] {
        let _ = mon.observe(&bundle(words));
    }
    assert_eq!(mon.state(), RunState::Terminated);
    // 4 cycles, threshold 2: 4 - 2 + 1 = 3
    assert_eq!(
        mon.throughput(),
        Throughput::Ipc {
            effective_cycles: 3,
            ipc: 1.0,
        }
    );
}

#[test]
fn forty_cycles_with_sixty_instructions() {
    // 25 full bundles and 10 half bundles: 35 busy cycles, 60 instructions.
    let inc = addi(1, 1, 1);
    let mut program = Vec::new();
    for _ in 0..25 {
        program.extend([inc, inc]);
    }
    for _ in 0..10 {
        program.extend([inc, NOP]);
    }

    let mut ctx = TestContext::new().load_program(&program);
    let report = ctx.run();

    assert_eq!(report.reason, StopReason::IdleRun);
    assert_eq!(report.state, RunState::Terminated);
    assert_eq!(report.cycles, 40);
    assert_eq!(report.executed, 60);
    assert_eq!(report.throughput.effective_cycles(), Some(36));
    let ipc = report.throughput.ipc().unwrap();
    assert!((ipc - 60.0 / 36.0).abs() < 1e-12);
    // Both slots of a bundle read the pre-cycle value, so each full bundle adds one.
    assert_eq!(ctx.get_reg(1), 35);
}

#[test]
fn empty_program_terminates_after_threshold() {
    let mut ctx = TestContext::new();
    let report = ctx.run();
    assert_eq!(report.cycles, 5);
    assert_eq!(report.executed, 0);
    assert_eq!(
        report.throughput,
        Throughput::Ipc {
            effective_cycles: 1,
            ipc: 0.0,
        }
    );
}

#[test]
fn mid_run_reset_pauses_counting() {
    let program = [addi(1, 0, 1), addi(2, 0, 2), addi(3, 0, 3), NOP];
    let mut ctx = TestContext::new().load_program(&program);
    ctx.release_reset();
    let _ = ctx.step_cycles(2);
    assert_eq!(ctx.sim.monitor.cycles(), 2);

    ctx.sim.set_reset(true);
    let _ = ctx.step_cycles(3);
    assert_eq!(ctx.sim.monitor.cycles(), 2);
    assert_eq!(ctx.cpu().pc(), 0);
    assert_eq!(ctx.get_reg(3), 0);

    ctx.sim.set_reset(false);
    let _ = ctx.step_cycles(1);
    assert_eq!(ctx.sim.monitor.cycles(), 3);
    assert_eq!(ctx.sim.monitor.executed(), 5);
}

#[test]
fn threshold_is_configurable() {
    let mut config = Config::default();
    config.monitor.idle_threshold = 1;
    let mut ctx = TestContext::with_config(config).load_program(&[addi(1, 0, 1), NOP]);
    let report = ctx.run();
    assert_eq!(report.cycles, 2);
    assert_eq!(report.executed, 1);
    assert_eq!(report.throughput.effective_cycles(), Some(2));
}
