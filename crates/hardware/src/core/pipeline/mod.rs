//! Single-cycle dual-issue datapath.
//!
//! Each cycle the fetch unit reads a bundle, both slots are decoded and
//! executed against the previous cycle's committed state, and all results
//! commit together at the end of the cycle.

/// Reference execute stage for the instruction tables.
pub mod execute;

/// Fetch unit (program counter and next-address selection).
pub mod fetch;

/// Values carried between fetch, execute and commit within a cycle.
pub mod latches;

/// The execute stage interface.
pub mod traits;
