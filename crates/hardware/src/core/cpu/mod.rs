//! Processor Core Composition.
//!
//! This module defines the `Cpu` structure, which wires the components of
//! the core together and advances them one cycle at a time:
//! 1. **Fetch:** The fetch unit reads a bundle of two words at the program counter.
//! 2. **Decode:** Both words are decoded independently.
//! 3. **Register Read:** Slot 1 reads through ports 1-2, slot 2 through ports 3-4.
//! 4. **Execute:** The pluggable execute stage computes results and redirects.
//! 5. **Commit:** Register writes (slot 1 on port 1, slot 2 on port 2), data
//!    stores, and the program counter update together at the end of the cycle.

use tracing::trace;

use crate::common::constants::ISSUE_WIDTH;
use crate::config::Config;
use crate::core::arch::gpr::{RegisterFile, WritePort, WriteRequest};
use crate::core::pipeline::execute::BasicExecute;
use crate::core::pipeline::fetch::FetchUnit;
use crate::core::pipeline::latches::{FetchBundle, SlotInput, SlotOutcome};
use crate::core::pipeline::traits::ExecuteUnit;
use crate::core::units::mux::OperandSelector;
use crate::isa::{Instruction, InstructionBits, decode};
use crate::soc::WordMemory;

/// Everything observed during one cycle, for tracing and monitoring.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CycleRecord {
    /// The raw bundle fetched this cycle.
    pub bundle: FetchBundle,
    /// Decoded slots, in bundle order.
    pub decoded: [Instruction; ISSUE_WIDTH],
    /// Control-flow target applied at the commit point, if any.
    pub redirect: Option<u32>,
}

/// The processor core: architectural state plus the execute stage.
#[derive(Debug)]
pub struct Cpu {
    /// General-purpose register file.
    pub regs: RegisterFile,
    /// Fetch unit holding the program counter.
    pub fetch: FetchUnit,
    /// Instruction store.
    pub imem: WordMemory,
    /// Data store.
    pub dmem: WordMemory,
    /// Per-port write-back selectors (ALU result vs. load data).
    wb_select: [OperandSelector; ISSUE_WIDTH],
    execute: Box<dyn ExecuteUnit>,
}

impl Cpu {
    /// Creates a core with the reference execute stage.
    pub fn new(config: &Config) -> Self {
        Self::with_execute(config, Box::new(BasicExecute))
    }

    /// Creates a core with a caller-supplied execute stage.
    pub fn with_execute(config: &Config, execute: Box<dyn ExecuteUnit>) -> Self {
        Self {
            regs: RegisterFile::new(),
            fetch: FetchUnit::new(config.general.reset_pc),
            imem: WordMemory::new(config.memory.imem_words),
            dmem: WordMemory::new(config.memory.dmem_words),
            wb_select: [OperandSelector::new(); ISSUE_WIDTH],
            execute,
        }
    }

    /// Current program counter.
    #[inline]
    pub const fn pc(&self) -> u32 {
        self.fetch.pc()
    }

    /// Holds every sequential element at its reset value for one clock.
    ///
    /// The instruction and data stores are not affected.
    pub fn apply_reset(&mut self) {
        self.regs.reset();
        self.fetch.clock(true, true, None);
        for mux in &mut self.wb_select {
            mux.reset();
        }
    }

    /// Advances the core by one enabled clock cycle.
    ///
    /// All evaluation reads the state committed by the previous cycle; the
    /// register file, data store and program counter update together at
    /// the end.
    pub fn tick(&mut self) -> CycleRecord {
        let bundle = self.fetch.fetch(&self.imem);
        let decoded = bundle.words.map(decode);

        let [w1, w2] = bundle.words;
        let operands = self.regs.read_ports([w1.rs(), w1.rt(), w2.rs(), w2.rt()]);

        let next_pc = self.fetch.sequential_pc();
        let mut outcomes = [SlotOutcome::NOP; ISSUE_WIDTH];
        for (slot, outcome) in outcomes.iter_mut().enumerate() {
            let input = SlotInput {
                pc: bundle.pc.wrapping_add(slot as u32),
                next_pc,
                inst: decoded[slot],
                rs_val: operands[slot * 2],
                rt_val: operands[slot * 2 + 1],
            };
            *outcome = self.execute.execute(&input);
        }

        let ports = [WritePort::One, WritePort::Two];
        for ((outcome, port), mux) in outcomes.iter().zip(ports).zip(&mut self.wb_select) {
            let load_data = self.dmem.read(outcome.mem_addr);
            let value = mux.select(
                outcome.alu_result,
                load_data,
                outcome.mem_to_reg,
                outcome.dest.is_some(),
            );
            let req = outcome
                .dest
                .map_or(WriteRequest::NONE, |dest| WriteRequest::new(dest, value));
            self.regs.drive(port, req);
        }

        let [o1, o2] = outcomes;
        let redirect = o1.redirect.or(o2.redirect);

        // Commit point.
        self.regs.commit();
        self.dmem.commit_stores(
            o1.store.map(|v| (o1.mem_addr, v)),
            o2.store.map(|v| (o2.mem_addr, v)),
        );
        self.fetch.clock(false, true, redirect);

        if let Some(target) = redirect {
            trace!(from = bundle.pc, to = target, "fetch redirected");
        }

        CycleRecord {
            bundle,
            decoded,
            redirect,
        }
    }

    /// Loads an instruction image at slot address `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image does not fit the instruction store.
    pub fn load_program(&mut self, base: usize, words: &[u32]) -> crate::common::SimResult<()> {
        self.imem.load(base, words)
    }

    /// Loads a data image at word address `base`.
    ///
    /// # Errors
    ///
    /// Returns an error if the image does not fit the data store.
    pub fn load_data(&mut self, base: usize, words: &[u32]) -> crate::common::SimResult<()> {
        self.dmem.load(base, words)
    }
}
