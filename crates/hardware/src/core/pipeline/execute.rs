//! Reference Execute Stage.
//!
//! Plain semantics for every instruction in the decode tables:
//! 1. **ALU:** R-type and immediate operations write `rd` or `rt`.
//! 2. **Memory:** `lw`/`sw` address the data store at `rs + offset` (word units).
//! 3. **Control Flow:** Branches redirect to `pc + 1 + offset`; `j`/`jal`
//!    to the 26-bit target; `jr` to the value of `rs`. `jal` links `$31`
//!    to the next sequential bundle.
//!
//! Unrecognized words have no effect.

use crate::common::constants::LINK_REG;
use crate::core::pipeline::latches::{SlotInput, SlotOutcome};
use crate::core::pipeline::traits::ExecuteUnit;
use crate::core::units::alu::Alu;
use crate::core::units::sign_ext::{sign_extend16, zero_extend16};
use crate::isa::{Instruction, Mnemonic};

/// Default execute stage.
#[derive(Clone, Copy, Debug, Default)]
pub struct BasicExecute;

impl ExecuteUnit for BasicExecute {
    fn execute(&self, slot: &SlotInput) -> SlotOutcome {
        match slot.inst {
            Instruction::Shift { op, rd, shamt, .. } => SlotOutcome {
                alu_result: Alu::execute(op, slot.rt_val, u32::from(shamt)),
                dest: Some(rd),
                ..SlotOutcome::NOP
            },
            Instruction::Register { op, rd, .. } => SlotOutcome {
                alu_result: Alu::execute(op, slot.rs_val, slot.rt_val),
                dest: Some(rd),
                ..SlotOutcome::NOP
            },
            Instruction::JumpRegister { .. } => SlotOutcome {
                redirect: Some(slot.rs_val),
                ..SlotOutcome::NOP
            },
            Instruction::Immediate { op, rt, imm, .. } => {
                let operand = if op.signed_immediate() {
                    sign_extend16(imm)
                } else {
                    zero_extend16(imm)
                };
                SlotOutcome {
                    alu_result: Alu::execute(op, slot.rs_val, operand),
                    dest: Some(rt),
                    ..SlotOutcome::NOP
                }
            }
            Instruction::Branch { op, offset, .. } => {
                let equal = Alu::execute(op, slot.rs_val, slot.rt_val) == 0;
                let taken = match op {
                    Mnemonic::Beq => equal,
                    _ => !equal,
                };
                let target = slot
                    .pc
                    .wrapping_add(1)
                    .wrapping_add(sign_extend16(offset as u16));
                SlotOutcome {
                    redirect: taken.then_some(target),
                    ..SlotOutcome::NOP
                }
            }
            Instruction::Memory { op, rt, offset, .. } => {
                let addr = Alu::execute(op, slot.rs_val, sign_extend16(offset as u16));
                if op == Mnemonic::Lw {
                    SlotOutcome {
                        alu_result: addr,
                        dest: Some(rt),
                        mem_to_reg: true,
                        mem_addr: addr,
                        ..SlotOutcome::NOP
                    }
                } else {
                    SlotOutcome {
                        alu_result: addr,
                        mem_addr: addr,
                        store: Some(slot.rt_val),
                        ..SlotOutcome::NOP
                    }
                }
            }
            Instruction::Jump { op, target } => SlotOutcome {
                alu_result: slot.next_pc,
                dest: (op == Mnemonic::Jal).then_some(LINK_REG),
                redirect: Some(target),
                ..SlotOutcome::NOP
            },
            Instruction::UnknownFunct { .. } | Instruction::UnknownOpcode { .. } => {
                SlotOutcome::NOP
            }
        }
    }
}
