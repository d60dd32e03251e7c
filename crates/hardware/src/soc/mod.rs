//! Storage attached to the core.
//!
//! Instruction and data stores are plain word-addressed arrays with a
//! one-cycle access latency: a read in cycle `n` observes every write
//! committed at the end of cycle `n - 1`.

/// Word-addressed instruction and data memories.
pub mod memory;

pub use memory::WordMemory;
