//! Instruction Decoder.
//!
//! Maps a raw 32-bit instruction word onto a structured [`Instruction`].
//! Decode is total: opcodes or function codes absent from the tables
//! produce an explicit unrecognized variant and never fail.
//!
//! Field selection per shape:
//! - `sll`/`srl` use `(rd, rt, shamt)`; `jr` uses `rs`; other R-type use `(rd, rs, rt)`.
//! - `beq`/`bne` use `(rs, rt, signed offset)`.
//! - `j`/`jal` use the 26-bit target.
//! - `lw`/`sw` use `(rt, signed offset, rs)`.
//! - Other I-type use `(rt, rs, imm)`.

use crate::isa::funct;
use crate::isa::instruction::{Instruction, InstructionBits, Mnemonic};
use crate::isa::opcodes;

/// Decodes a 32-bit instruction word.
///
/// # Arguments
///
/// * `inst` - The raw instruction word.
///
/// # Returns
///
/// The decoded instruction, or an `Unknown*` variant for encodings outside
/// the opcode/funct tables.
///
/// # Examples
///
/// ```
/// use mipsim_core::isa::decode::decode;
/// use mipsim_core::isa::instruction::{Instruction, Mnemonic};
///
/// // addi $5, $3, -16
/// let inst = decode(0x2065_FFF0);
/// assert_eq!(
///     inst,
///     Instruction::Immediate { op: Mnemonic::Addi, rt: 5, rs: 3, imm: 0xFFF0 }
/// );
/// ```
pub fn decode(inst: u32) -> Instruction {
    let opcode = inst.opcode();
    if opcode == opcodes::OP_SPECIAL {
        return decode_r_type(inst);
    }

    let Some(op) = opcode_mnemonic(opcode) else {
        return Instruction::UnknownOpcode { opcode };
    };

    match op {
        Mnemonic::Beq | Mnemonic::Bne => Instruction::Branch {
            op,
            rs: inst.rs(),
            rt: inst.rt(),
            offset: inst.imm16() as i16,
        },
        Mnemonic::J | Mnemonic::Jal => Instruction::Jump {
            op,
            target: inst.target(),
        },
        Mnemonic::Lw | Mnemonic::Sw => Instruction::Memory {
            op,
            rt: inst.rt(),
            base: inst.rs(),
            offset: inst.imm16() as i16,
        },
        _ => Instruction::Immediate {
            op,
            rt: inst.rt(),
            rs: inst.rs(),
            imm: inst.imm16(),
        },
    }
}

/// Decodes an opcode-0 word by its function code.
fn decode_r_type(inst: u32) -> Instruction {
    let code = inst.funct();
    let Some(op) = funct_mnemonic(code) else {
        return Instruction::UnknownFunct { funct: code };
    };

    match op {
        Mnemonic::Sll | Mnemonic::Srl => Instruction::Shift {
            op,
            rd: inst.rd(),
            rt: inst.rt(),
            shamt: inst.shamt(),
        },
        Mnemonic::Jr => Instruction::JumpRegister { rs: inst.rs() },
        _ => Instruction::Register {
            op,
            rd: inst.rd(),
            rs: inst.rs(),
            rt: inst.rt(),
        },
    }
}

/// Looks up the mnemonic of a non-zero opcode.
pub const fn opcode_mnemonic(opcode: u8) -> Option<Mnemonic> {
    Some(match opcode {
        opcodes::OP_ADDI => Mnemonic::Addi,
        opcodes::OP_LW => Mnemonic::Lw,
        opcodes::OP_SW => Mnemonic::Sw,
        opcodes::OP_BEQ => Mnemonic::Beq,
        opcodes::OP_BNE => Mnemonic::Bne,
        opcodes::OP_JAL => Mnemonic::Jal,
        opcodes::OP_ORI => Mnemonic::Ori,
        opcodes::OP_XORI => Mnemonic::Xori,
        opcodes::OP_ANDI => Mnemonic::Andi,
        opcodes::OP_SLTI => Mnemonic::Slti,
        opcodes::OP_J => Mnemonic::J,
        _ => return None,
    })
}

/// Looks up the mnemonic of an R-type function code.
pub const fn funct_mnemonic(code: u8) -> Option<Mnemonic> {
    Some(match code {
        funct::ADD => Mnemonic::Add,
        funct::SUB => Mnemonic::Sub,
        funct::AND => Mnemonic::And,
        funct::OR => Mnemonic::Or,
        funct::SLT => Mnemonic::Slt,
        funct::SGT => Mnemonic::Sgt,
        funct::SLL => Mnemonic::Sll,
        funct::SRL => Mnemonic::Srl,
        funct::NOR => Mnemonic::Nor,
        funct::XOR => Mnemonic::Xor,
        funct::JR => Mnemonic::Jr,
        _ => return None,
    })
}
