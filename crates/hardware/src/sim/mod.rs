//! Simulation driver, run monitor, and program loading.
//!
//! Provides the top-level [`Simulator`], the idle-run termination monitor,
//! and loaders for instruction and data images.

pub mod loader;
pub mod monitor;
pub mod simulator;

pub use monitor::{Monitor, RunState};
pub use simulator::Simulator;
