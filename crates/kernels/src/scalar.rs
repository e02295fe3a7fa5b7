//! Portable popcount formulas. The masks, shifts and their order are fixed.

pub const MU0: u32 = 0x5555_5555;
pub const MU1: u32 = 0x3333_3333;
pub const MU2: u32 = 0x0F0F_0F0F;
pub const MU3: u32 = 0x00FF_00FF;
pub const MU4: u32 = 0x0000_FFFF;

/// Five rounds of mask-shift-add. No lane ever overflows, so this is the
/// reference every other candidate is checked against.
#[inline(always)]
pub fn popcnt_a(mut x: u32) -> u32 {
    x = (x & MU0) + ((x >> 1) & MU0);
    x = (x & MU1) + ((x >> 2) & MU1);
    x = (x & MU2) + ((x >> 4) & MU2);
    x = (x & MU3) + ((x >> 8) & MU3);
    x = (x & MU4) + ((x >> 16) & MU4);
    x
}

/// Byte-lane sums folded with shift-add. Upper lanes carry garbage after the
/// folds; the 6-bit mask is what keeps the low lane exact.
#[inline(always)]
pub fn popcnt_b(mut x: u32) -> u32 {
    x = (x & MU0) + ((x >> 1) & MU0);
    x = (x & MU1) + ((x >> 2) & MU1);
    x = (x + (x >> 4)) & MU2;
    x += x >> 8;
    x += x >> 16;
    x & 63
}

/// Byte-lane sums folded by multiplying with the repunit `0x01010101`; the
/// total lands in the top byte.
#[inline(always)]
pub fn popcnt_c(mut x: u32) -> u32 {
    x = (x & MU0) + ((x >> 1) & MU0);
    x = (x & MU1) + ((x >> 2) & MU1);
    x = (x + (x >> 4)) & MU2;
    x.wrapping_mul(0x0101_0101) >> 24
}

/// Loop baseline. Not a popcount.
#[inline(always)]
pub fn identity(x: u32) -> u32 {
    x
}

#[cfg(test)]
mod tests {
    use super::*;

    const CASES: &[(u32, u32)] = &[
        (0, 0),
        (0xFFFF_FFFF, 32),
        (0x8000_0000, 1),
        (0x0F0F_0F0F, 16),
        (0x5555_5555, 16),
        (0xAAAA_AAAA, 16),
        (0x0000_0001, 1),
        (0x7FFF_FFFF, 31),
        (0xFFFF_0000, 16),
        (0x0123_4567, 12),
    ];

    #[test]
    fn known_values() {
        for &(x, expected) in CASES {
            assert_eq!(popcnt_a(x), expected, "popcnt_a({x:#010X})");
            assert_eq!(popcnt_b(x), expected, "popcnt_b({x:#010X})");
            assert_eq!(popcnt_c(x), expected, "popcnt_c({x:#010X})");
        }
    }

    #[test]
    fn single_bits() {
        for i in 0..32 {
            let x = 1u32 << i;
            assert_eq!(popcnt_a(x), 1);
            assert_eq!(popcnt_b(x), 1);
            assert_eq!(popcnt_c(x), 1);
        }
    }

    #[test]
    fn low_ones() {
        for n in 0..=32u32 {
            let x = if n == 32 { u32::MAX } else { (1u32 << n) - 1 };
            assert_eq!(popcnt_a(x), n);
            assert_eq!(popcnt_b(x), n);
            assert_eq!(popcnt_c(x), n);
        }
    }

    #[test]
    fn random_agrees_with_count_ones() {
        for _ in 0..100_000 {
            let x = rand::random::<u32>();
            let r = x.count_ones();
            assert_eq!(popcnt_a(x), r, "x = {x:#010X}");
            assert_eq!(popcnt_b(x), r, "x = {x:#010X}");
            assert_eq!(popcnt_c(x), r, "x = {x:#010X}");
        }
    }

    #[test]
    fn final_mask_in_b_is_required() {
        fn popcnt_b_unmasked(mut x: u32) -> u32 {
            x = (x & MU0) + ((x >> 1) & MU0);
            x = (x & MU1) + ((x >> 2) & MU1);
            x = (x + (x >> 4)) & MU2;
            x += x >> 8;
            x += x >> 16;
            x
        }
        // upper lanes still hold partial sums after the folds
        assert_eq!(popcnt_b_unmasked(0xFFFF_FFFF), 0x0810_1820);
        assert_eq!(popcnt_b(0xFFFF_FFFF), 32);
    }

    #[test]
    fn identity_is_identity() {
        assert_eq!(identity(0xDEAD_BEEF), 0xDEAD_BEEF);
    }
}
