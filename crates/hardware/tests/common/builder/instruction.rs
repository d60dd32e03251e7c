//! Instruction word encoders.
//!
//! Each helper returns the raw 32-bit word for one instruction so tests can
//! spell programs the way an assembler listing would.

use mipsim_core::isa::funct;
use mipsim_core::isa::opcodes;

/// Encodes an R-type word.
pub fn r_type(funct: u8, rd: u8, rs: u8, rt: u8, shamt: u8) -> u32 {
    (u32::from(rs) & 0x1F) << 21
        | (u32::from(rt) & 0x1F) << 16
        | (u32::from(rd) & 0x1F) << 11
        | (u32::from(shamt) & 0x1F) << 6
        | (u32::from(funct) & 0x3F)
}

/// Encodes an I-type word.
pub fn i_type(opcode: u8, rt: u8, rs: u8, imm: u16) -> u32 {
    (u32::from(opcode) & 0x3F) << 26
        | (u32::from(rs) & 0x1F) << 21
        | (u32::from(rt) & 0x1F) << 16
        | u32::from(imm)
}

/// Encodes a J-type word.
pub fn j_type(opcode: u8, target: u32) -> u32 {
    (u32::from(opcode) & 0x3F) << 26 | (target & 0x03FF_FFFF)
}

pub fn add(rd: u8, rs: u8, rt: u8) -> u32 {
    r_type(funct::ADD, rd, rs, rt, 0)
}

pub fn sub(rd: u8, rs: u8, rt: u8) -> u32 {
    r_type(funct::SUB, rd, rs, rt, 0)
}

pub fn or(rd: u8, rs: u8, rt: u8) -> u32 {
    r_type(funct::OR, rd, rs, rt, 0)
}

pub fn slt(rd: u8, rs: u8, rt: u8) -> u32 {
    r_type(funct::SLT, rd, rs, rt, 0)
}

pub fn sll(rd: u8, rt: u8, shamt: u8) -> u32 {
    r_type(funct::SLL, rd, 0, rt, shamt)
}

pub fn jr(rs: u8) -> u32 {
    r_type(funct::JR, 0, rs, 0, 0)
}

pub fn addi(rt: u8, rs: u8, imm: i16) -> u32 {
    i_type(opcodes::OP_ADDI, rt, rs, imm as u16)
}

pub fn ori(rt: u8, rs: u8, imm: u16) -> u32 {
    i_type(opcodes::OP_ORI, rt, rs, imm)
}

pub fn lw(rt: u8, base: u8, offset: i16) -> u32 {
    i_type(opcodes::OP_LW, rt, base, offset as u16)
}

pub fn sw(rt: u8, base: u8, offset: i16) -> u32 {
    i_type(opcodes::OP_SW, rt, base, offset as u16)
}

pub fn beq(rs: u8, rt: u8, offset: i16) -> u32 {
    i_type(opcodes::OP_BEQ, rt, rs, offset as u16)
}

pub fn bne(rs: u8, rt: u8, offset: i16) -> u32 {
    i_type(opcodes::OP_BNE, rt, rs, offset as u16)
}

pub fn j(target: u32) -> u32 {
    j_type(opcodes::OP_J, target)
}

pub fn jal(target: u32) -> u32 {
    j_type(opcodes::OP_JAL, target)
}

/// The idle word (`sll $0, $0, 0`).
pub const NOP: u32 = 0;
