//! Arithmetic Logic Unit (ALU).
//!
//! Integer operations used by the reference execute stage. All arithmetic
//! wraps at 32 bits; comparisons are signed and yield 0 or 1.

use crate::isa::Mnemonic;

/// Bit mask applied to shift amounts.
const SHIFT_MASK: u32 = 0x1F;

/// Integer ALU.
#[derive(Debug)]
pub struct Alu;

impl Alu {
    /// Executes the operation named by `op` on two operands.
    ///
    /// For shifts, `a` is the value being shifted and `b` the shift amount.
    /// Branch mnemonics produce `a - b`, which is zero when the operands are
    /// equal. Jumps pass `a` through.
    ///
    /// # Examples
    ///
    /// ```
    /// use mipsim_core::core::units::alu::Alu;
    /// use mipsim_core::isa::Mnemonic;
    ///
    /// assert_eq!(Alu::execute(Mnemonic::Add, 40, 2), 42);
    /// assert_eq!(Alu::execute(Mnemonic::Sgt, 1, (-1i32) as u32), 1);
    /// assert_eq!(Alu::execute(Mnemonic::Nor, 0, 0), u32::MAX);
    /// ```
    pub const fn execute(op: Mnemonic, a: u32, b: u32) -> u32 {
        match op {
            Mnemonic::Add | Mnemonic::Addi | Mnemonic::Lw | Mnemonic::Sw => a.wrapping_add(b),
            Mnemonic::Sub | Mnemonic::Beq | Mnemonic::Bne => a.wrapping_sub(b),
            Mnemonic::And | Mnemonic::Andi => a & b,
            Mnemonic::Or | Mnemonic::Ori => a | b,
            Mnemonic::Xor | Mnemonic::Xori => a ^ b,
            Mnemonic::Nor => !(a | b),
            Mnemonic::Slt | Mnemonic::Slti => ((a as i32) < (b as i32)) as u32,
            Mnemonic::Sgt => ((a as i32) > (b as i32)) as u32,
            Mnemonic::Sll => a << (b & SHIFT_MASK),
            Mnemonic::Srl => a >> (b & SHIFT_MASK),
            Mnemonic::Jr | Mnemonic::J | Mnemonic::Jal => a,
        }
    }
}
