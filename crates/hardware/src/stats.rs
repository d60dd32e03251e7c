//! Run statistics and throughput reporting.
//!
//! This module turns the monitor's counters into the figures reported at the
//! end of a run. It provides:
//! 1. **Throughput:** The instructions-per-cycle formula as a pure function.
//! 2. **Run Report:** Final state, stop reason, counters and throughput, with
//!    a fixed-width text rendering and a serde representation for JSON output.

use serde::Serialize;

use crate::sim::monitor::RunState;

/// Throughput figure reported at the end of a run.
#[derive(Clone, Copy, Debug, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Throughput {
    /// A well-defined rate.
    Ipc {
        /// Cycle count used as the denominator.
        effective_cycles: u64,
        /// Executed instructions per effective cycle.
        ipc: f64,
    },
    /// The effective cycle count was not positive.
    NoInstructions,
}

impl Throughput {
    /// Returns the rate, if defined.
    pub const fn ipc(&self) -> Option<f64> {
        match self {
            Self::Ipc { ipc, .. } => Some(*ipc),
            Self::NoInstructions => None,
        }
    }

    /// Returns the denominator used, if defined.
    pub const fn effective_cycles(&self) -> Option<u64> {
        match self {
            Self::Ipc {
                effective_cycles, ..
            } => Some(*effective_cycles),
            Self::NoInstructions => None,
        }
    }

    /// Plain ratio of executed instructions to cycles.
    pub const fn from_ratio(executed: u64, cycles: u64) -> Self {
        if cycles == 0 {
            Self::NoInstructions
        } else {
            Self::Ipc {
                effective_cycles: cycles,
                ipc: executed as f64 / cycles as f64,
            }
        }
    }
}

/// Instructions per cycle at idle-run termination.
///
/// The denominator is `total_cycles - idle_run + 1`: the cycle count at the
/// moment the idle run was detected, minus the idle-run length, plus one.
/// The trailing idle cycles are excluded from the denominator while the
/// numerator already excludes idle words. The `+ 1` is part of the reported
/// figure and is kept as is.
///
/// # Arguments
///
/// * `total_cycles` - Cumulative running cycles at detection.
/// * `idle_run`     - Length of the idle run that ended the program.
/// * `executed`     - Cumulative non-idle instruction words.
///
/// # Returns
///
/// [`Throughput::NoInstructions`] when the denominator is zero or negative.
///
/// # Examples
///
/// ```
/// use mipsim_core::stats::{Throughput, instructions_per_cycle};
///
/// let t = instructions_per_cycle(40, 5, 60);
/// assert_eq!(t.effective_cycles(), Some(36));
/// assert!((t.ipc().unwrap() - 60.0 / 36.0).abs() < 1e-12);
///
/// assert_eq!(instructions_per_cycle(3, 5, 0), Throughput::NoInstructions);
/// ```
pub fn instructions_per_cycle(total_cycles: u64, idle_run: u32, executed: u64) -> Throughput {
    match total_cycles
        .saturating_add(1)
        .checked_sub(u64::from(idle_run))
    {
        Some(effective_cycles) if effective_cycles > 0 => Throughput::Ipc {
            effective_cycles,
            ipc: executed as f64 / effective_cycles as f64,
        },
        _ => Throughput::NoInstructions,
    }
}

/// Why a run stopped.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum StopReason {
    /// The idle-run monitor declared termination.
    IdleRun,
    /// The cycle guard was reached first.
    CycleLimit,
}

/// Summary of a completed run.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct RunReport {
    /// Monitor state when the run stopped.
    pub state: RunState,
    /// Why the run stopped.
    pub reason: StopReason,
    /// Cumulative running cycles, idle cycles included.
    pub cycles: u64,
    /// Cumulative non-idle instruction words fetched.
    pub executed: u64,
    /// Idle-run length that ends a program.
    pub idle_threshold: u32,
    /// Program counter when the run stopped.
    pub final_pc: u32,
    /// Throughput figure.
    pub throughput: Throughput,
}

impl RunReport {
    /// Renders the report as fixed-width text.
    pub fn render(&self) -> String {
        let reason = match self.reason {
            StopReason::IdleRun => "idle run",
            StopReason::CycleLimit => "cycle limit",
        };
        let mut lines = vec![
            "==========================================================".to_string(),
            "DUAL-ISSUE CORE RUN SUMMARY".to_string(),
            "==========================================================".to_string(),
            format!("stop_reason              {reason}"),
            format!("sim_cycles               {}", self.cycles),
            format!("sim_insts                {}", self.executed),
            format!("idle_threshold           {}", self.idle_threshold),
            format!("final_pc                 {:#x}", self.final_pc),
        ];
        match self.throughput {
            Throughput::Ipc {
                effective_cycles,
                ipc,
            } => {
                lines.push(format!("effective_cycles         {effective_cycles}"));
                lines.push(format!("sim_ipc                  {ipc:.4}"));
            }
            Throughput::NoInstructions => {
                lines.push("sim_ipc                  no instructions executed".to_string());
            }
        }
        lines.push("==========================================================".to_string());
        lines.join("\n")
    }

    /// Prints the report to stdout.
    pub fn print(&self) {
        println!("{}", self.render());
    }
}
