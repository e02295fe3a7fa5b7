#[cfg(target_arch = "aarch64")]
pub mod aarch64;

#[cfg(target_arch = "x86_64")]
pub mod x86_64;

pub fn initialize() {
    #[cfg(target_arch = "x86_64")]
    {
        self::x86_64::ctor_popcnt();
    }
    #[cfg(target_arch = "aarch64")]
    {
        self::aarch64::ctor_neon();
    }
}

/// Whether the host has a native population count instruction that the
/// hardware kernel can be dispatched to.
#[cfg(target_arch = "x86_64")]
pub fn detect_hardware_popcnt() -> bool {
    self::x86_64::detect_popcnt()
}

#[cfg(target_arch = "aarch64")]
pub fn detect_hardware_popcnt() -> bool {
    self::aarch64::detect_neon()
}

#[cfg(not(any(target_arch = "x86_64", target_arch = "aarch64")))]
pub fn detect_hardware_popcnt() -> bool {
    false
}
