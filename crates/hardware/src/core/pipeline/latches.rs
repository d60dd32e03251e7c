//! Inter-stage values carried through a single cycle.
//!
//! The core is not pipelined across cycles: every value here is produced and
//! consumed within one cycle, between the fetch and the commit point.
//! 1. **Fetch Bundle:** The two raw words read from the instruction store.
//! 2. **Slot Input:** A decoded slot with its register operands.
//! 3. **Slot Outcome:** Control signals and results the commit point consumes.

use crate::common::constants::{IDLE_WORD, ISSUE_WIDTH};
use crate::isa::Instruction;

/// Pair of instruction words fetched in one cycle, ordered (slot 1, slot 2).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct FetchBundle {
    /// Slot address of the first word; the second word sits at `pc + 1`.
    pub pc: u32,
    /// Raw instruction words.
    pub words: [u32; ISSUE_WIDTH],
}

impl FetchBundle {
    /// Whether every slot holds the idle word.
    pub fn is_idle(&self) -> bool {
        self.words.iter().all(|&w| w == IDLE_WORD)
    }

    /// Number of slots holding a non-idle word.
    pub fn active_slots(&self) -> u64 {
        self.words.iter().filter(|&&w| w != IDLE_WORD).count() as u64
    }
}

/// A decoded slot with the operand values read for it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlotInput {
    /// Slot address of this instruction.
    pub pc: u32,
    /// Sequential fetch address of the following bundle.
    pub next_pc: u32,
    /// Decoded instruction.
    pub inst: Instruction,
    /// Value read for the `rs` field.
    pub rs_val: u32,
    /// Value read for the `rt` field.
    pub rt_val: u32,
}

/// Results of executing one slot, applied at the commit point.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SlotOutcome {
    /// ALU result; the write-back value unless `mem_to_reg` is set.
    pub alu_result: u32,
    /// Destination register, if the slot writes one.
    pub dest: Option<u8>,
    /// Select load data instead of the ALU result for write-back.
    pub mem_to_reg: bool,
    /// Data store word address for loads and stores.
    pub mem_addr: u32,
    /// Value to store at `mem_addr`, if the slot stores.
    pub store: Option<u32>,
    /// Control-flow target, if the slot redirects fetch.
    pub redirect: Option<u32>,
}

impl SlotOutcome {
    /// Outcome of a slot that has no architectural effect.
    pub const NOP: Self = Self {
        alu_result: 0,
        dest: None,
        mem_to_reg: false,
        mem_addr: 0,
        store: None,
        redirect: None,
    };
}
