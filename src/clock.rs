use std::time::Duration;

/// CPU time consumed by this process so far.
#[cfg(unix)]
pub fn process_cpu_time() -> Duration {
    use rustix::time::{clock_gettime, ClockId};
    let ts = clock_gettime(ClockId::ProcessCPUTime);
    Duration::new(ts.tv_sec as u64, ts.tv_nsec as u32)
}

/// Falls back to wall time since first use.
#[cfg(not(unix))]
pub fn process_cpu_time() -> Duration {
    use std::sync::OnceLock;
    use std::time::Instant;
    static START: OnceLock<Instant> = OnceLock::new();
    START.get_or_init(Instant::now).elapsed()
}
