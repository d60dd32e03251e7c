/// Instruction word encoders.
pub mod instruction;

pub use instruction::*;
