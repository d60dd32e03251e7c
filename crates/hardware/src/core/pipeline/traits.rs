//! Execute Stage Interface.
//!
//! The execute stage is the seam between the datapath (fetch, decode,
//! register file, commit) and the arithmetic semantics of the instruction
//! set. The datapath only relies on the signals in [`SlotOutcome`]; any
//! implementation of [`ExecuteUnit`] can be plugged into the core.

use std::fmt;

use crate::core::pipeline::latches::{SlotInput, SlotOutcome};

/// Computes the results of one issue slot.
///
/// Implementations must be pure with respect to architectural state: they
/// see operand values already read from the register file and return the
/// writes to perform. The core applies them at the commit point.
pub trait ExecuteUnit: fmt::Debug {
    /// Executes a single slot.
    ///
    /// # Arguments
    ///
    /// * `slot` - The decoded slot and its operand values.
    ///
    /// # Returns
    ///
    /// Control signals and results for write-back, memory and fetch redirect.
    fn execute(&self, slot: &SlotInput) -> SlotOutcome;
}
