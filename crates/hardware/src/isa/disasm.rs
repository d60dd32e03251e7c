//! Instruction Disassembler.
//!
//! Converts an instruction word into a human-readable mnemonic string for
//! traces, logs, and test diagnostics. All rendering goes through the
//! decoder so tooling never duplicates decode logic.
//!
//! # Usage
//!
//! ```
//! use mipsim_core::isa::disasm::disassemble;
//! assert_eq!(disassemble(0x0022_1820), "add $3, $1, $2");
//! assert_eq!(disassemble(0x8C45_0004), "lw $5, 4($2)");
//! ```

use std::fmt;

use crate::isa::decode::decode;
use crate::isa::instruction::Instruction;

/// Disassembles a 32-bit instruction word.
///
/// Returns a string like `"add $3, $1, $2"`, or an `unknown ...` description
/// for encodings outside the decode tables.
///
/// # Arguments
///
/// * `inst` - The raw 32-bit instruction encoding.
pub fn disassemble(inst: u32) -> String {
    decode(inst).to_string()
}

impl fmt::Display for Instruction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Self::Shift { op, rd, rt, shamt } => write!(f, "{op} ${rd}, ${rt}, {shamt}"),
            Self::JumpRegister { rs } => write!(f, "jr ${rs}"),
            Self::Register { op, rd, rs, rt } => write!(f, "{op} ${rd}, ${rs}, ${rt}"),
            Self::Immediate { op, rt, rs, imm } => {
                if op.signed_immediate() {
                    write!(f, "{op} ${rt}, ${rs}, {}", imm as i16)
                } else {
                    write!(f, "{op} ${rt}, ${rs}, {imm}")
                }
            }
            Self::Branch { op, rs, rt, offset } => write!(f, "{op} ${rs}, ${rt}, {offset}"),
            Self::Memory {
                op,
                rt,
                base,
                offset,
            } => write!(f, "{op} ${rt}, {offset}(${base})"),
            Self::Jump { op, target } => write!(f, "{op} {target:#x}"),
            Self::UnknownFunct { funct } => write!(f, "unknown r-type (funct {funct:#04x})"),
            Self::UnknownOpcode { opcode } => write!(f, "unknown (opcode {opcode:#04x})"),
        }
    }
}
