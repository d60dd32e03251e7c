//! General-Purpose Register File.
//!
//! This module implements the 32-entry register file of the core. It provides:
//! 1. **Storage:** 32 registers of 32 bits; register 0 is hardwired to zero.
//! 2. **Read Ports:** Four independent combinational read ports.
//! 3. **Write Ports:** Two write ports whose requests are held until the write
//!    edge and then committed together. When both ports target the same
//!    register, port 1 wins.
//! 4. **Debugging:** A one-line dump in the format used by cycle traces.

use std::fmt::Write as _;

use crate::common::constants::{NUM_REGS, READ_PORTS, ZERO_REG};
use crate::isa::instruction::REG_MASK;

/// A request presented on one write port for the current cycle.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct WriteRequest {
    /// Write enable.
    pub enable: bool,
    /// Destination register (5 bits).
    pub dest: u8,
    /// Value to write.
    pub value: u32,
}

impl WriteRequest {
    /// A disabled request.
    pub const NONE: Self = Self {
        enable: false,
        dest: 0,
        value: 0,
    };

    /// An enabled request writing `value` to `dest`.
    pub const fn new(dest: u8, value: u32) -> Self {
        Self {
            enable: true,
            dest,
            value,
        }
    }
}

/// Write port selector.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum WritePort {
    /// Port 1; has priority on conflicting writes.
    One,
    /// Port 2.
    Two,
}

/// Register file with four read ports and two write ports.
///
/// Reads always observe the last committed state: a request driven on a
/// write port becomes visible only after [`RegisterFile::commit`].
#[derive(Clone, Debug)]
pub struct RegisterFile {
    regs: [u32; NUM_REGS],
    port1: WriteRequest,
    port2: WriteRequest,
}

impl Default for RegisterFile {
    fn default() -> Self {
        Self::new()
    }
}

impl RegisterFile {
    /// Creates a register file with every register cleared.
    pub const fn new() -> Self {
        Self {
            regs: [0; NUM_REGS],
            port1: WriteRequest::NONE,
            port2: WriteRequest::NONE,
        }
    }

    /// Reads a register through one read port.
    ///
    /// Only the low five bits of `idx` are used. Register 0 always reads 0.
    #[inline]
    pub const fn read(&self, idx: u8) -> u32 {
        let idx = (idx as u32 & REG_MASK) as usize;
        if idx == ZERO_REG as usize {
            0
        } else {
            self.regs[idx]
        }
    }

    /// Reads all four ports at once.
    pub fn read_ports(&self, idx: [u8; READ_PORTS]) -> [u32; READ_PORTS] {
        idx.map(|i| self.read(i))
    }

    /// Presents a request on a write port for the current cycle.
    ///
    /// A later call for the same port replaces the earlier request.
    pub const fn drive(&mut self, port: WritePort, req: WriteRequest) {
        match port {
            WritePort::One => self.port1 = req,
            WritePort::Two => self.port2 = req,
        }
    }

    /// Write edge: commits the pending requests and clears both ports.
    ///
    /// Port 2 is applied first and port 1 second, so a same-register
    /// conflict keeps port 1's value. Requests targeting register 0 are
    /// dropped regardless of enable.
    pub fn commit(&mut self) {
        let port2 = std::mem::replace(&mut self.port2, WriteRequest::NONE);
        let port1 = std::mem::replace(&mut self.port1, WriteRequest::NONE);
        self.apply(port2);
        self.apply(port1);
    }

    /// Drives both ports and commits them in one step.
    pub fn write_pair(&mut self, port1: WriteRequest, port2: WriteRequest) {
        self.drive(WritePort::One, port1);
        self.drive(WritePort::Two, port2);
        self.commit();
    }

    /// Sets a register directly, outside the clocked write path.
    ///
    /// Used to seed state before a run. Register 0 stays zero.
    pub fn poke(&mut self, idx: u8, value: u32) {
        self.apply(WriteRequest::new(idx, value));
    }

    /// Synchronous reset: clears every register and any pending request.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// Returns a copy of all 32 registers as architecturally visible.
    pub fn snapshot(&self) -> [u32; NUM_REGS] {
        std::array::from_fn(|i| self.read(i as u8))
    }

    /// Formats every register on one line: `R0: 0 | R1: 5 | ...`.
    pub fn dump_line(&self) -> String {
        let mut line = String::with_capacity(NUM_REGS * 12);
        for (i, value) in self.snapshot().iter().enumerate() {
            if i > 0 {
                line.push_str(" | ");
            }
            let _ = write!(line, "R{i}: {value}");
        }
        line
    }

    fn apply(&mut self, req: WriteRequest) {
        let idx = (req.dest as u32 & REG_MASK) as usize;
        if req.enable && idx != ZERO_REG as usize {
            self.regs[idx] = req.value;
        }
    }
}
