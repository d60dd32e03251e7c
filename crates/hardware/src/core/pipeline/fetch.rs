//! Instruction Fetch Unit.
//!
//! Reads one bundle of two adjacent slots per cycle at the program counter
//! and chooses the next fetch address. The next-address choice goes through
//! an [`OperandSelector`]: the sequential address (`pc + 2`) or, when a slot
//! redirected control flow, the redirect target.

use crate::common::constants::{BUNDLE_STRIDE, ISSUE_WIDTH};
use crate::core::arch::pc::ProgramCounter;
use crate::core::pipeline::latches::FetchBundle;
use crate::core::units::mux::OperandSelector;
use crate::soc::memory::WordMemory;

/// Program counter plus next-address selection.
#[derive(Clone, Copy, Debug)]
pub struct FetchUnit {
    pc: ProgramCounter,
    next_select: OperandSelector,
}

impl FetchUnit {
    /// Creates a fetch unit whose counter resets to `reset_pc`.
    pub const fn new(reset_pc: u32) -> Self {
        Self {
            pc: ProgramCounter::new(reset_pc),
            next_select: OperandSelector::new(),
        }
    }

    /// Returns the current fetch address.
    #[inline]
    pub const fn pc(&self) -> u32 {
        self.pc.value()
    }

    /// Address of the bundle following the current one.
    #[inline]
    pub const fn sequential_pc(&self) -> u32 {
        self.pc.value().wrapping_add(BUNDLE_STRIDE)
    }

    /// Reads the bundle addressed by the program counter.
    pub fn fetch(&self, imem: &WordMemory) -> FetchBundle {
        let pc = self.pc.value();
        let mut words = [0u32; ISSUE_WIDTH];
        for (slot, word) in words.iter_mut().enumerate() {
            *word = imem.read(pc.wrapping_add(slot as u32));
        }
        FetchBundle { pc, words }
    }

    /// Applies one clock event to the program counter.
    ///
    /// # Arguments
    ///
    /// * `reset`    - Synchronous reset.
    /// * `enable`   - Gates whether the counter advances.
    /// * `redirect` - Control-flow target computed this cycle, if any.
    pub fn clock(&mut self, reset: bool, enable: bool, redirect: Option<u32>) {
        let sequential = self.sequential_pc();
        let next = self.next_select.select(
            sequential,
            redirect.unwrap_or(sequential),
            redirect.is_some(),
            enable && !reset,
        );
        self.pc.clock(reset, enable, next);
        if reset {
            self.next_select.reset();
        }
    }
}
