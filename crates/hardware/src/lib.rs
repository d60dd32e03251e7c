//! Dual-issue MIPS-like core model.
//!
//! This crate implements a cycle-accurate model of a two-wide, single-cycle
//! processor core with the following:
//! 1. **Core:** Fetch of two-word bundles, dual decode, four-read/two-write
//!    register file, a pluggable execute stage, and a single commit point.
//! 2. **Units:** Retaining operand selector, 16-bit sign extender, and ALU.
//! 3. **ISA:** Field extraction, classification, decoding, and disassembly.
//! 4. **Memory:** Word-addressed instruction and data stores.
//! 5. **Simulation:** Reset/enable driver, idle-run termination monitor,
//!    image loader, configuration, and throughput reporting.

/// Common constants and error types.
pub mod common;
/// Run configuration (defaults, hierarchical config structures).
pub mod config;
/// Processor core (architectural state, pipeline, functional units).
pub mod core;
/// Instruction set (fields, decode, disassembly).
pub mod isa;
/// Simulator, run monitor, and image loader.
pub mod sim;
/// Instruction and data stores.
pub mod soc;
/// Throughput calculation and run reports.
pub mod stats;

/// Root configuration type; use `Config::default()` or parse from JSON.
pub use crate::config::Config;
/// Processor core; holds registers, stores, and the execute stage.
pub use crate::core::Cpu;
/// Top-level driver owning the core and the run monitor.
pub use crate::sim::Simulator;
/// Summary produced at the end of a run.
pub use crate::stats::RunReport;
