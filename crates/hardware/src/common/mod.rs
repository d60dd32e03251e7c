//! Common utilities and types used throughout the core model.
//!
//! This module provides the building blocks shared by every component:
//! 1. **Constants:** Register count, issue width, idle word, and monitor threshold.
//! 2. **Error Handling:** The error type returned by loading and configuration paths.

/// Common constants used throughout the simulator.
pub mod constants;

/// Error types for image loading and configuration.
pub mod error;

pub use constants::{IDLE_WORD, ISSUE_WIDTH, NUM_REGS};
pub use error::{SimError, SimResult};
