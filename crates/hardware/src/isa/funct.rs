//! Function Codes (funct).
//!
//! The `funct` field (bits 5-0) selects the operation of an R-type
//! instruction. It carries no meaning for any other opcode.

/// Shift left logical.
pub const SLL: u8 = 0x00;

/// Shift right logical.
pub const SRL: u8 = 0x02;

/// Jump register.
pub const JR: u8 = 0x08;

/// Set on greater than (signed). Non-standard, specific to this core.
pub const SGT: u8 = 0x14;

/// Exclusive OR. Non-standard placement, specific to this core.
pub const XOR: u8 = 0x15;

/// Add.
pub const ADD: u8 = 0x20;

/// Subtract.
pub const SUB: u8 = 0x22;

/// Bitwise AND.
pub const AND: u8 = 0x24;

/// Bitwise OR.
pub const OR: u8 = 0x25;

/// Bitwise NOR.
pub const NOR: u8 = 0x27;

/// Set on less than (signed).
pub const SLT: u8 = 0x2A;
