#![cfg(target_arch = "x86_64")]

#[test]
fn print() {
    detect::initialize();
    assert_eq!(detect::x86_64::test_popcnt(), detect::x86_64::detect_popcnt());
    assert_eq!(
        detect::x86_64::detect_popcnt(),
        detect::detect_hardware_popcnt()
    );
}
