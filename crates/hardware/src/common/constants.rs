//! Global Core Constants.
//!
//! This module defines constants shared across the core model. It includes:
//! 1. **Architectural Constants:** Register count plus the zero and link registers.
//! 2. **Fetch Constants:** Issue width and the reserved idle word.
//! 3. **Monitor Constants:** The idle-run threshold used to detect program termination.

/// Number of general-purpose registers.
pub const NUM_REGS: usize = 32;

/// Index of the hardwired zero register.
pub const ZERO_REG: u8 = 0;

/// Link register written by `jal`.
pub const LINK_REG: u8 = 31;

/// Number of instruction slots fetched per cycle.
pub const ISSUE_WIDTH: usize = 2;

/// Amount the program counter advances per cycle, in instruction slots.
pub const BUNDLE_STRIDE: u32 = ISSUE_WIDTH as u32;

/// The all-zero instruction word, used as filler and as the termination signal.
pub const IDLE_WORD: u32 = 0x0000_0000;

/// Consecutive fully idle bundles after which the run is declared finished.
pub const DEFAULT_IDLE_THRESHOLD: u32 = 5;

/// Number of register read ports.
pub const READ_PORTS: usize = 4;

/// Sign bit of a 16-bit immediate.
pub const IMM16_SIGN_BIT: u32 = 0x8000;

/// Upper half-word mask applied when sign-extending a negative immediate.
pub const SIGN_EXTEND_MASK: u32 = 0xFFFF_0000;
