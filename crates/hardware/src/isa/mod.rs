//! Instruction Set Architecture (ISA) Definitions.
//!
//! Contains the opcode and function-code tables, field extraction, the
//! decoder, and the disassembler built on it.
//!
//! # Formats
//!
//! * R-type: opcode 0, operation selected by `funct`.
//! * I-type: 16-bit immediate arithmetic/logic, branches, loads and stores.
//! * J-type: 26-bit jump target.

/// Instruction decoding for all instruction formats.
pub mod decode;

/// Instruction disassembler for debug tracing and diagnostics.
pub mod disasm;

/// R-type function codes.
pub mod funct;

/// Instruction field extraction and decoded instruction types.
pub mod instruction;

/// Primary opcodes.
pub mod opcodes;

pub use decode::decode;
pub use disasm::disassemble;
pub use instruction::{InstClass, Instruction, InstructionBits, Mnemonic};
