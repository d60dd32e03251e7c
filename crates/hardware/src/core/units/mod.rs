//! Combinational and near-combinational functional units.

/// Arithmetic Logic Unit used by the reference execute stage.
pub mod alu;

/// Two-input operand selector with enable and hold.
pub mod mux;

/// 16-to-32-bit sign extension.
pub mod sign_ext;
