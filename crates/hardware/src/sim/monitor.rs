//! Termination and Metrics Monitor.
//!
//! Watches the raw fetch stream, independently of decode, and decides when a
//! program has finished. It tracks:
//! 1. **Cycles:** Cumulative running cycles, idle cycles included.
//! 2. **Executed Instructions:** Cumulative non-idle words across both slots.
//! 3. **Idle Run:** Consecutive bundles whose slots are all idle.
//!
//! State machine: `Resetting -> Running` on the first fetch after reset is
//! released, `Running -> Terminated` once the idle run reaches the threshold.
//! `Terminated` is absorbing. Counters are never cleared mid-run.

use serde::Serialize;
use tracing::info;

use crate::core::pipeline::latches::FetchBundle;
use crate::stats::{Throughput, instructions_per_cycle};

/// Lifecycle of a run.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum RunState {
    /// Reset asserted, or released but nothing fetched yet.
    Resetting,
    /// Fetching and executing.
    Running,
    /// An idle run of the threshold length was observed.
    Terminated,
}

/// Idle-run termination detector and throughput counters.
#[derive(Clone, Debug)]
pub struct Monitor {
    state: RunState,
    threshold: u32,
    idle_run: u32,
    executed: u64,
    cycles: u64,
}

impl Monitor {
    /// Creates a monitor that terminates after `threshold` idle bundles.
    ///
    /// A threshold of zero is raised to one.
    pub const fn new(threshold: u32) -> Self {
        Self {
            state: RunState::Resetting,
            threshold: if threshold == 0 { 1 } else { threshold },
            idle_run: 0,
            executed: 0,
            cycles: 0,
        }
    }

    /// Current state.
    pub const fn state(&self) -> RunState {
        self.state
    }

    /// Idle-run threshold.
    pub const fn threshold(&self) -> u32 {
        self.threshold
    }

    /// Current consecutive idle-bundle count.
    pub const fn idle_run(&self) -> u32 {
        self.idle_run
    }

    /// Cumulative non-idle instruction words.
    pub const fn executed(&self) -> u64 {
        self.executed
    }

    /// Cumulative running cycles.
    pub const fn cycles(&self) -> u64 {
        self.cycles
    }

    /// Records one fetched bundle.
    ///
    /// The first call moves the monitor out of `Resetting`. Calls after
    /// termination change nothing.
    ///
    /// # Returns
    ///
    /// The state after recording the bundle.
    pub fn observe(&mut self, bundle: &FetchBundle) -> RunState {
        match self.state {
            RunState::Terminated => return RunState::Terminated,
            RunState::Resetting => self.state = RunState::Running,
            RunState::Running => {}
        }

        self.cycles += 1;
        self.executed += bundle.active_slots();
        if bundle.is_idle() {
            self.idle_run += 1;
        } else {
            self.idle_run = 0;
        }

        if self.idle_run >= self.threshold {
            self.state = RunState::Terminated;
            info!(
                cycles = self.cycles,
                executed = self.executed,
                "idle run detected, program terminated"
            );
        }
        self.state
    }

    /// Throughput at termination, per [`instructions_per_cycle`].
    ///
    /// Before termination the plain ratio of executed words to cycles is
    /// returned instead.
    pub fn throughput(&self) -> Throughput {
        match self.state {
            RunState::Terminated => {
                instructions_per_cycle(self.cycles, self.threshold, self.executed)
            }
            RunState::Resetting | RunState::Running => {
                Throughput::from_ratio(self.executed, self.cycles)
            }
        }
    }
}
