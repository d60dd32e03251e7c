use mipsim_core::core::units::sign_ext::{sign_extend16, zero_extend16};
use proptest::prelude::*;
use rstest::rstest;

#[rstest]
#[case(0x0000, 0x0000_0000)]
#[case(0x7FFF, 0x0000_7FFF)]
#[case(0x8000, 0xFFFF_8000)]
#[case(0xFFFF, 0xFFFF_FFFF)]
#[case(0xFFF0, 0xFFFF_FFF0)]
fn edge_values(#[case] input: u16, #[case] expected: u32) {
    assert_eq!(sign_extend16(input), expected);
}

proptest! {
    #[test]
    fn matches_signed_widening(value in any::<u16>()) {
        let out = sign_extend16(value);
        prop_assert_eq!(out as u16, value);
        prop_assert_eq!(out as i32, i32::from(value as i16));
        let high = out >> 16;
        prop_assert!(high == 0 || high == 0xFFFF);
        prop_assert_eq!(high == 0xFFFF, value & 0x8000 != 0);
    }

    #[test]
    fn zero_extension_keeps_high_half_clear(value in any::<u16>()) {
        prop_assert_eq!(zero_extend16(value), u32::from(value));
    }
}
