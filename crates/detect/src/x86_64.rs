use std::sync::atomic::{AtomicBool, Ordering};

static ATOMIC_POPCNT: AtomicBool = AtomicBool::new(false);

pub fn test_popcnt() -> bool {
    std::is_x86_feature_detected!("popcnt")
}

pub fn ctor_popcnt() {
    ATOMIC_POPCNT.store(test_popcnt(), Ordering::Relaxed);
}

pub fn detect_popcnt() -> bool {
    ATOMIC_POPCNT.load(Ordering::Relaxed)
}
