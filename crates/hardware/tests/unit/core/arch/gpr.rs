//! Register file tests.
//!
//! Covers the dual write-port priority, the hardwired zero register, and
//! read-before-write ordering within one cycle.

use mipsim_core::core::arch::gpr::{RegisterFile, WritePort, WriteRequest};
use proptest::prelude::*;

#[test]
fn single_port_write_is_visible_next_cycle() {
    let mut rf = RegisterFile::new();
    rf.write_pair(WriteRequest::new(5, 0xDEAD_BEEF), WriteRequest::NONE);
    assert_eq!(rf.read(5), 0xDEAD_BEEF);

    rf.write_pair(WriteRequest::NONE, WriteRequest::new(9, 0xCAFE_F00D));
    assert_eq!(rf.read(9), 0xCAFE_F00D);
    assert_eq!(rf.read(5), 0xDEAD_BEEF);
}

#[test]
fn port_one_wins_a_conflict() {
    let mut rf = RegisterFile::new();
    rf.write_pair(
        WriteRequest::new(20, 0x1111_1111),
        WriteRequest::new(20, 0x2222_2222),
    );
    assert_eq!(rf.read(20), 0x1111_1111);
}

#[test]
fn register_zero_ignores_writes() {
    let mut rf = RegisterFile::new();
    rf.write_pair(WriteRequest::new(0, 0xDEAD_BEEF), WriteRequest::new(0, 1));
    assert_eq!(rf.read(0), 0);
    rf.poke(0, 7);
    assert_eq!(rf.read(0), 0);
}

#[test]
fn reads_see_the_state_before_the_write_edge() {
    let mut rf = RegisterFile::new();
    rf.poke(3, 10);
    rf.drive(WritePort::One, WriteRequest::new(3, 99));
    assert_eq!(rf.read_ports([3, 3, 0, 3]), [10, 10, 0, 10]);
    rf.commit();
    assert_eq!(rf.read(3), 99);
}

#[test]
fn disabled_requests_do_nothing() {
    let mut rf = RegisterFile::new();
    rf.poke(4, 1);
    let req = WriteRequest {
        enable: false,
        dest: 4,
        value: 2,
    };
    rf.write_pair(req, req);
    assert_eq!(rf.read(4), 1);
}

#[test]
fn commit_clears_pending_requests() {
    let mut rf = RegisterFile::new();
    rf.drive(WritePort::Two, WriteRequest::new(6, 1));
    rf.commit();
    rf.poke(6, 2);
    rf.commit();
    assert_eq!(rf.read(6), 2);
}

#[test]
fn reset_clears_everything() {
    let mut rf = RegisterFile::new();
    rf.poke(31, 5);
    rf.drive(WritePort::One, WriteRequest::new(1, 1));
    rf.reset();
    rf.commit();
    assert_eq!(rf.snapshot(), [0; 32]);
}

#[test]
fn dump_line_format() {
    let mut rf = RegisterFile::new();
    rf.poke(1, 5);
    let line = rf.dump_line();
    assert!(line.starts_with("R0: 0 | R1: 5 | R2: 0"));
    assert!(line.ends_with("R31: 0"));
    assert_eq!(line.matches(" | ").count(), 31);
}

proptest! {
    #[test]
    fn dual_write_priority(
        r1 in 0u8..32,
        r2 in 0u8..32,
        v1 in any::<u32>(),
        v2 in any::<u32>(),
    ) {
        let mut rf = RegisterFile::new();
        rf.write_pair(WriteRequest::new(r1, v1), WriteRequest::new(r2, v2));

        let expect1 = if r1 == 0 { 0 } else { v1 };
        prop_assert_eq!(rf.read(r1), expect1);
        if r2 != r1 {
            let expect2 = if r2 == 0 { 0 } else { v2 };
            prop_assert_eq!(rf.read(r2), expect2);
        }
    }

    #[test]
    fn either_port_alone_round_trips(reg in 1u8..32, value in any::<u32>(), port_two in any::<bool>()) {
        let mut rf = RegisterFile::new();
        let port = if port_two { WritePort::Two } else { WritePort::One };
        rf.drive(port, WriteRequest::new(reg, value));
        rf.commit();
        prop_assert_eq!(rf.read(reg), value);
    }

    #[test]
    fn read_ports_are_independent(
        idx in proptest::array::uniform4(0u8..32),
        values in proptest::array::uniform32(any::<u32>()),
    ) {
        let mut rf = RegisterFile::new();
        for (reg, value) in values.iter().enumerate() {
            rf.poke(reg as u8, *value);
        }
        let out = rf.read_ports(idx);
        for (port, reg) in idx.iter().enumerate() {
            let expect = if *reg == 0 { 0 } else { values[*reg as usize] };
            prop_assert_eq!(out[port], expect);
        }
    }
}
