//! Primary Opcodes.
//!
//! Defines the major opcodes (bits 31-26). Opcode 0 selects the R-type
//! family, whose operation is then named by the `funct` field.

/// Register-register operations; the operation is given by `funct`.
pub const OP_SPECIAL: u8 = 0x00;

/// Jump.
pub const OP_J: u8 = 0x02;

/// Jump and link.
pub const OP_JAL: u8 = 0x03;

/// Branch if equal.
pub const OP_BEQ: u8 = 0x04;

/// Branch if not equal.
pub const OP_BNE: u8 = 0x05;

/// Add immediate.
pub const OP_ADDI: u8 = 0x08;

/// Set on less than immediate (signed).
pub const OP_SLTI: u8 = 0x0A;

/// AND immediate.
pub const OP_ANDI: u8 = 0x0C;

/// OR immediate.
pub const OP_ORI: u8 = 0x0D;

/// XOR immediate. This core places it at 0x16 rather than the usual 0x0E.
pub const OP_XORI: u8 = 0x16;

/// Load word.
pub const OP_LW: u8 = 0x23;

/// Store word.
pub const OP_SW: u8 = 0x2B;
