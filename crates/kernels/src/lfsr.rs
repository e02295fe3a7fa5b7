//! Galois LFSR used to drive the benchmark through the whole input space in
//! an order the optimizer cannot predict.

use std::hint::black_box;

/// CRC-32 (IEEE), bit-reversed. Maximal length: visits every nonzero `u32`.
pub const CRC32_POLY: u32 = 0xEDB8_8320;

/// x^16 + x^14 + x^13 + x^11 + 1. Maximal length over the low 16 bits.
pub const POLY16: u32 = 0xB400;

pub const SEED: u32 = 1;

#[inline(always)]
pub fn step(state: u32, poly: u32) -> u32 {
    (state >> 1) ^ (if state & 1 != 0 { poly } else { 0 })
}

/// Visits every state of the register once, starting at [`SEED`] and
/// stopping right before the register returns to it.
#[derive(Debug, Clone)]
pub struct Lfsr {
    state: u32,
    poly: u32,
    done: bool,
}

impl Lfsr {
    pub fn new() -> Self {
        Self::with_poly(CRC32_POLY)
    }

    pub fn with_poly(poly: u32) -> Self {
        Self {
            state: SEED,
            poly,
            done: false,
        }
    }

    /// Number of states in one period, assuming the polynomial is primitive.
    pub fn period(poly: u32) -> u64 {
        let width = 32 - poly.leading_zeros();
        (1u64 << width) - 1
    }
}

impl Default for Lfsr {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for Lfsr {
    type Item = u32;

    #[inline(always)]
    fn next(&mut self) -> Option<u32> {
        if self.done {
            return None;
        }
        let current = self.state;
        self.state = step(current, self.poly);
        if self.state == SEED {
            self.done = true;
        }
        Some(current)
    }
}

/// Sums `f` over one full period. The running sum goes through
/// [`black_box`] on every step so calls cannot be hoisted or elided.
#[inline(always)]
pub fn accumulate<F>(poly: u32, mut f: F) -> u64
where
    F: FnMut(u32) -> u32,
{
    let mut r = SEED;
    let mut sum = 0u64;
    loop {
        sum = black_box(sum.wrapping_add(f(r) as u64));
        r = step(r, poly);
        if r == SEED {
            break;
        }
    }
    sum
}
