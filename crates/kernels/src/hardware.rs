//! Native population count.
//!
//! Only reachable through a [`Hardware`] token, which exists only when the
//! host was detected to support the instruction.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hardware {
    _private: (),
}

impl Hardware {
    /// Requires `detect::initialize()` to have run.
    pub fn detect() -> Option<Self> {
        if detect::detect_hardware_popcnt() {
            Some(Self { _private: () })
        } else {
            None
        }
    }

    #[inline(always)]
    pub fn count(self, x: u32) -> u32 {
        // SAFETY: the token is only handed out after detection succeeded.
        unsafe { popcnt_d(x) }
    }

    pub fn accumulate(self, poly: u32) -> u64 {
        // SAFETY: as above.
        unsafe { accumulate_d(poly) }
    }
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "popcnt")]
unsafe fn popcnt_d(x: u32) -> u32 {
    x.count_ones()
}

#[cfg(target_arch = "x86_64")]
#[target_feature(enable = "popcnt")]
unsafe fn accumulate_d(poly: u32) -> u64 {
    crate::lfsr::accumulate(poly, |x| x.count_ones())
}

// `cnt` is part of the aarch64 baseline.
#[cfg(not(target_arch = "x86_64"))]
unsafe fn popcnt_d(x: u32) -> u32 {
    x.count_ones()
}

#[cfg(not(target_arch = "x86_64"))]
unsafe fn accumulate_d(poly: u32) -> u64 {
    crate::lfsr::accumulate(poly, |x| x.count_ones())
}
