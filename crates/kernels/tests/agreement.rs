use kernels::hardware::Hardware;
use kernels::scalar::{popcnt_a, popcnt_b, popcnt_c};

fn check(x: u32, hardware: Option<Hardware>) {
    let a = popcnt_a(x);
    assert!(a <= 32);
    assert_eq!(a, popcnt_b(x), "x = {x:#010X}");
    assert_eq!(a, popcnt_c(x), "x = {x:#010X}");
    if let Some(hardware) = hardware {
        assert_eq!(a, hardware.count(x), "x = {x:#010X}");
    }
}

#[test]
fn low_16_bits() {
    detect::initialize();
    let hardware = Hardware::detect();
    for x in 0..=u16::MAX as u32 {
        check(x, hardware);
    }
}

#[test]
fn high_16_bits() {
    detect::initialize();
    let hardware = Hardware::detect();
    for x in 0..=u16::MAX as u32 {
        check(x << 16, hardware);
        check((x << 16) | 0xFFFF, hardware);
    }
}

#[test]
#[ignore = "visits all 2^32 inputs"]
fn every_u32() {
    detect::initialize();
    let hardware = Hardware::detect();
    for x in 0..=u32::MAX {
        check(x, hardware);
    }
}
