/// Image parsing and file loading.
pub mod loader;

/// Idle-run state machine and counters.
pub mod monitor;

/// End-to-end programs through the simulator.
pub mod simulator;
