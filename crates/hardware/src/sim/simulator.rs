//! Simulator: owns the core and the termination monitor side by side.
//!
//! The simulator is the only place that sees the external reset and enable
//! inputs. It clocks the core, feeds each fetched bundle to the monitor, and
//! optionally logs a per-cycle trace.

use tracing::{debug, info, warn};

use crate::common::SimResult;
use crate::config::Config;
use crate::core::{CycleRecord, Cpu};
use crate::sim::monitor::{Monitor, RunState};
use crate::stats::{RunReport, StopReason, Throughput};

/// Top-level simulator: core state plus the run monitor.
#[derive(Debug)]
pub struct Simulator {
    /// Processor core.
    pub cpu: Cpu,
    /// Idle-run termination monitor and counters.
    pub monitor: Monitor,
    config: Config,
    reset: bool,
    enable: bool,
}

impl Simulator {
    /// Creates a simulator with reset asserted and the clock enabled.
    ///
    /// # Errors
    ///
    /// Returns [`crate::common::SimError::InvalidConfig`] if `config` fails
    /// [`Config::validate`].
    pub fn new(config: Config) -> SimResult<Self> {
        let cpu = Cpu::new(&config);
        Self::with_cpu(config, cpu)
    }

    /// Creates a simulator around an existing core.
    ///
    /// # Errors
    ///
    /// As [`Simulator::new`].
    pub fn with_cpu(config: Config, cpu: Cpu) -> SimResult<Self> {
        config.validate()?;
        let monitor = Monitor::new(config.monitor.idle_threshold);
        Ok(Self {
            cpu,
            monitor,
            config,
            reset: true,
            enable: true,
        })
    }

    /// Drives the synchronous reset input.
    pub const fn set_reset(&mut self, reset: bool) {
        self.reset = reset;
    }

    /// Drives the clock-enable input.
    pub const fn set_enable(&mut self, enable: bool) {
        self.enable = enable;
    }

    /// Current monitor state.
    pub const fn state(&self) -> RunState {
        self.monitor.state()
    }

    /// Advances one clock edge.
    ///
    /// With reset asserted the core is held at its reset values and the
    /// monitor does not count. With enable deasserted nothing changes.
    pub fn step(&mut self) -> RunState {
        if self.reset {
            self.cpu.apply_reset();
            return self.monitor.state();
        }
        if !self.enable {
            return self.monitor.state();
        }

        let record = self.cpu.tick();
        let state = self.monitor.observe(&record.bundle);
        if self.config.general.trace_instructions {
            self.trace_cycle(&record);
        }
        state
    }

    /// Runs a program from reset until the monitor terminates or the cycle
    /// guard is reached.
    pub fn run(&mut self) -> RunReport {
        self.set_enable(true);
        self.set_reset(true);
        for _ in 0..self.config.general.reset_cycles.max(1) {
            let _ = self.step();
        }
        self.set_reset(false);

        info!(
            pc = self.cpu.pc(),
            idle_threshold = self.monitor.threshold(),
            "reset released"
        );

        while self.monitor.cycles() < self.config.general.max_cycles {
            if self.step() == RunState::Terminated {
                return self.report(StopReason::IdleRun);
            }
        }

        warn!(
            max_cycles = self.config.general.max_cycles,
            "cycle limit reached before the program went idle"
        );
        self.report(StopReason::CycleLimit)
    }

    /// Builds a report from the current counters.
    pub fn report(&self, reason: StopReason) -> RunReport {
        let throughput = match reason {
            StopReason::IdleRun => self.monitor.throughput(),
            StopReason::CycleLimit => {
                Throughput::from_ratio(self.monitor.executed(), self.monitor.cycles())
            }
        };
        RunReport {
            state: self.monitor.state(),
            reason,
            cycles: self.monitor.cycles(),
            executed: self.monitor.executed(),
            idle_threshold: self.monitor.threshold(),
            final_pc: self.cpu.pc(),
            throughput,
        }
    }

    fn trace_cycle(&self, record: &CycleRecord) {
        let [w1, w2] = record.bundle.words;
        let [d1, d2] = record.decoded;
        let redirect = record
            .redirect
            .map_or_else(String::new, |target| format!(" -> {target}"));
        let dmem = self
            .cpu
            .dmem
            .head(self.config.memory.dump_words)
            .iter()
            .map(u32::to_string)
            .collect::<Vec<_>>()
            .join(", ");
        debug!(
            "Cycle {}: PC = {}{redirect}\n  Instruction 1 = {w1:#010x} ({d1})\n  Instruction 2 = {w2:#010x} ({d2})\n  Register File: {}\n  DM: [{dmem}]",
            self.monitor.cycles(),
            record.bundle.pc,
            self.cpu.regs.dump_line(),
        );
    }
}
