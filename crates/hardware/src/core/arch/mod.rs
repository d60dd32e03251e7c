//! Architectural state elements.
//!
//! 1. **GPRs:** The dual-write-port general-purpose register file.
//! 2. **PC:** The synchronous program counter register.

/// General-Purpose Register file implementation.
pub mod gpr;

/// Program counter register.
pub mod pc;
