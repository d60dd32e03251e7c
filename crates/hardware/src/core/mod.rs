//! Core processor implementation.
//!
//! This module contains the processor core: architectural state, the
//! functional units, the single-cycle dual-issue datapath, and the `Cpu`
//! that composes them.

/// Architectural state (register file, program counter).
pub mod arch;

/// Core composition and per-cycle orchestration.
pub mod cpu;

/// Fetch unit, execute stage interface and intra-cycle values.
pub mod pipeline;

/// Functional units (ALU, operand selector, sign extender).
pub mod units;

pub use self::cpu::{CycleRecord, Cpu};
