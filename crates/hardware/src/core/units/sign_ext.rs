//! Sign Extender.
//!
//! Widens a 16-bit immediate to 32 bits, replicating bit 15 into the upper
//! half-word.

use crate::common::constants::{IMM16_SIGN_BIT, SIGN_EXTEND_MASK};

/// Sign-extends a 16-bit value to 32 bits.
///
/// If bit 15 is set the result is the input OR-ed with `0xFFFF_0000`;
/// otherwise it is the input zero-extended.
///
/// # Examples
///
/// ```
/// use mipsim_core::core::units::sign_ext::sign_extend16;
///
/// assert_eq!(sign_extend16(0x7FFF), 0x0000_7FFF);
/// assert_eq!(sign_extend16(0x8000), 0xFFFF_8000);
/// ```
#[inline]
pub const fn sign_extend16(value: u16) -> u32 {
    let v = value as u32;
    if v & IMM16_SIGN_BIT != 0 {
        v | SIGN_EXTEND_MASK
    } else {
        v
    }
}

/// Zero-extends a 16-bit value to 32 bits.
#[inline]
pub const fn zero_extend16(value: u16) -> u32 {
    value as u32
}
