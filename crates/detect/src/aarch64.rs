use std::sync::atomic::{AtomicBool, Ordering};

static ATOMIC_NEON: AtomicBool = AtomicBool::new(false);

// `cnt` lives in the Advanced SIMD unit, so neon is what `count_ones` lowers to.
pub fn test_neon() -> bool {
    std::arch::is_aarch64_feature_detected!("neon")
}

pub fn ctor_neon() {
    ATOMIC_NEON.store(test_neon(), Ordering::Relaxed);
}

pub fn detect_neon() -> bool {
    ATOMIC_NEON.load(Ordering::Relaxed)
}
