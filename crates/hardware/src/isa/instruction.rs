//! Instruction encoding and decoded-instruction types.
//!
//! Provides bit extraction for the fixed field positions of the 32-bit
//! instruction word and the closed set of decoded instruction shapes.

use std::fmt;

/// Bit shift of the opcode field (bits 31-26).
pub const OPCODE_SHIFT: u32 = 26;
/// Bit mask for the opcode field after shifting.
pub const OPCODE_MASK: u32 = 0x3F;
/// Bit shift of the `rs` field (bits 25-21).
pub const RS_SHIFT: u32 = 21;
/// Bit shift of the `rt` field (bits 20-16).
pub const RT_SHIFT: u32 = 16;
/// Bit shift of the `rd` field (bits 15-11).
pub const RD_SHIFT: u32 = 11;
/// Bit shift of the `shamt` field (bits 10-6).
pub const SHAMT_SHIFT: u32 = 6;
/// Bit mask for any 5-bit register or shift-amount field after shifting.
pub const REG_MASK: u32 = 0x1F;
/// Bit mask for the `funct` field (bits 5-0).
pub const FUNCT_MASK: u32 = 0x3F;
/// Bit mask for the 16-bit immediate (bits 15-0).
pub const IMM16_MASK: u32 = 0xFFFF;
/// Bit mask for the 26-bit jump target (bits 25-0).
pub const TARGET_MASK: u32 = 0x03FF_FFFF;

/// Trait for extracting instruction fields from encoded instructions.
///
/// Fields sit at fixed bit positions in every format; which of them are
/// meaningful depends on the opcode.
pub trait InstructionBits {
    /// Extracts the opcode field (bits 31-26).
    fn opcode(&self) -> u8;

    /// Extracts the first source register field (bits 25-21).
    fn rs(&self) -> u8;

    /// Extracts the second source / immediate destination field (bits 20-16).
    fn rt(&self) -> u8;

    /// Extracts the R-type destination register field (bits 15-11).
    fn rd(&self) -> u8;

    /// Extracts the shift amount (bits 10-6).
    fn shamt(&self) -> u8;

    /// Extracts the function code (bits 5-0). Only meaningful when the opcode is 0.
    fn funct(&self) -> u8;

    /// Extracts the raw 16-bit immediate (bits 15-0).
    fn imm16(&self) -> u16;

    /// Extracts the 26-bit jump target (bits 25-0).
    fn target(&self) -> u32;
}

impl InstructionBits for u32 {
    #[inline(always)]
    fn opcode(&self) -> u8 {
        ((self >> OPCODE_SHIFT) & OPCODE_MASK) as u8
    }

    #[inline(always)]
    fn rs(&self) -> u8 {
        ((self >> RS_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rt(&self) -> u8 {
        ((self >> RT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn rd(&self) -> u8 {
        ((self >> RD_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn shamt(&self) -> u8 {
        ((self >> SHAMT_SHIFT) & REG_MASK) as u8
    }

    #[inline(always)]
    fn funct(&self) -> u8 {
        (self & FUNCT_MASK) as u8
    }

    #[inline(always)]
    fn imm16(&self) -> u16 {
        (self & IMM16_MASK) as u16
    }

    #[inline(always)]
    fn target(&self) -> u32 {
        self & TARGET_MASK
    }
}

/// Instruction word layout family.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InstClass {
    /// Opcode 0; the operation is named by `funct`.
    RType,
    /// Immediate arithmetic/logic, branches, loads and stores.
    IType,
    /// 26-bit target jumps.
    JType,
    /// Encoding absent from the opcode or funct tables.
    Unrecognized,
}

/// Mnemonics of every instruction the core recognizes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Mnemonic {
    /// Add.
    Add,
    /// Subtract.
    Sub,
    /// Bitwise AND.
    And,
    /// Bitwise OR.
    Or,
    /// Set on less than.
    Slt,
    /// Set on greater than.
    Sgt,
    /// Shift left logical.
    Sll,
    /// Shift right logical.
    Srl,
    /// Bitwise NOR.
    Nor,
    /// Bitwise XOR.
    Xor,
    /// Jump register.
    Jr,
    /// Add immediate.
    Addi,
    /// Load word.
    Lw,
    /// Store word.
    Sw,
    /// Branch if equal.
    Beq,
    /// Branch if not equal.
    Bne,
    /// Jump and link.
    Jal,
    /// OR immediate.
    Ori,
    /// XOR immediate.
    Xori,
    /// AND immediate.
    Andi,
    /// Set on less than immediate.
    Slti,
    /// Jump.
    J,
}

impl Mnemonic {
    /// Assembly spelling of the mnemonic.
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::Sub => "sub",
            Self::And => "and",
            Self::Or => "or",
            Self::Slt => "slt",
            Self::Sgt => "sgt",
            Self::Sll => "sll",
            Self::Srl => "srl",
            Self::Nor => "nor",
            Self::Xor => "xor",
            Self::Jr => "jr",
            Self::Addi => "addi",
            Self::Lw => "lw",
            Self::Sw => "sw",
            Self::Beq => "beq",
            Self::Bne => "bne",
            Self::Jal => "jal",
            Self::Ori => "ori",
            Self::Xori => "xori",
            Self::Andi => "andi",
            Self::Slti => "slti",
            Self::J => "j",
        }
    }

    /// Whether the instruction's 16-bit immediate is interpreted as signed.
    ///
    /// The logical immediates (`andi`, `ori`, `xori`) are zero-extended.
    pub const fn signed_immediate(self) -> bool {
        matches!(
            self,
            Self::Addi | Self::Slti | Self::Lw | Self::Sw | Self::Beq | Self::Bne
        )
    }
}

impl fmt::Display for Mnemonic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A decoded instruction with the operand fields relevant to its shape.
///
/// Register indices are 5-bit values (0-31).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Instruction {
    /// `sll` / `srl`: `rd = rt shifted by shamt`.
    Shift {
        /// Shift mnemonic.
        op: Mnemonic,
        /// Destination register.
        rd: u8,
        /// Source register.
        rt: u8,
        /// Shift amount.
        shamt: u8,
    },
    /// `jr`: jump to the address held in `rs`.
    JumpRegister {
        /// Register holding the target.
        rs: u8,
    },
    /// Three-register operations: `rd = rs op rt`.
    Register {
        /// Operation mnemonic.
        op: Mnemonic,
        /// Destination register.
        rd: u8,
        /// First source register.
        rs: u8,
        /// Second source register.
        rt: u8,
    },
    /// Immediate arithmetic/logic: `rt = rs op imm`.
    Immediate {
        /// Operation mnemonic.
        op: Mnemonic,
        /// Destination register.
        rt: u8,
        /// Source register.
        rs: u8,
        /// Raw 16-bit immediate; see [`Mnemonic::signed_immediate`].
        imm: u16,
    },
    /// `beq` / `bne`: compare `rs` with `rt`, branch by a signed slot offset.
    Branch {
        /// Branch mnemonic.
        op: Mnemonic,
        /// First compared register.
        rs: u8,
        /// Second compared register.
        rt: u8,
        /// Signed offset in instruction slots.
        offset: i16,
    },
    /// `lw` / `sw`: access the word at `base + offset`.
    Memory {
        /// Access mnemonic.
        op: Mnemonic,
        /// Loaded-into or stored-from register.
        rt: u8,
        /// Base address register.
        base: u8,
        /// Signed word offset.
        offset: i16,
    },
    /// `j` / `jal` with a 26-bit target.
    Jump {
        /// Jump mnemonic.
        op: Mnemonic,
        /// Target slot address.
        target: u32,
    },
    /// Opcode 0 with a `funct` outside the table.
    UnknownFunct {
        /// The unrecognized function code.
        funct: u8,
    },
    /// Opcode outside the table.
    UnknownOpcode {
        /// The unrecognized opcode.
        opcode: u8,
    },
}

impl Instruction {
    /// Returns the layout family of the instruction.
    pub const fn class(&self) -> InstClass {
        match self {
            Self::Shift { .. } | Self::JumpRegister { .. } | Self::Register { .. } => {
                InstClass::RType
            }
            Self::Immediate { .. } | Self::Branch { .. } | Self::Memory { .. } => InstClass::IType,
            Self::Jump { .. } => InstClass::JType,
            Self::UnknownFunct { .. } | Self::UnknownOpcode { .. } => InstClass::Unrecognized,
        }
    }

    /// Returns the mnemonic, or `None` for unrecognized encodings.
    pub const fn mnemonic(&self) -> Option<Mnemonic> {
        match *self {
            Self::Shift { op, .. }
            | Self::Register { op, .. }
            | Self::Immediate { op, .. }
            | Self::Branch { op, .. }
            | Self::Memory { op, .. }
            | Self::Jump { op, .. } => Some(op),
            Self::JumpRegister { .. } => Some(Mnemonic::Jr),
            Self::UnknownFunct { .. } | Self::UnknownOpcode { .. } => None,
        }
    }

    /// Whether the encoding was absent from the decode tables.
    pub const fn is_unrecognized(&self) -> bool {
        matches!(self.class(), InstClass::Unrecognized)
    }
}
