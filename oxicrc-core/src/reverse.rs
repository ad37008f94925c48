//! Bit reversal primitives.
//!
//! Reverse-direction CRCs run on a mirrored register, so both the polynomial
//! (at table build time) and the initial value (at reset time) have to be
//! mirrored. Each routine swaps progressively larger groups of bits: odd and
//! even bits, then pairs, then nibbles, and so on up to the two halves of the
//! word. There is no data-dependent branching and everything is `const`, so
//! the same code serves table generation at compile time and resets at run
//! time.

/// Reverse the bit order of a `u8`.
#[inline]
pub const fn reverse_u8(mut value: u8) -> u8 {
    value = ((value & 0xAA) >> 1) | ((value & 0x55) << 1);
    value = ((value & 0xCC) >> 2) | ((value & 0x33) << 2);
    (value >> 4) | (value << 4)
}

/// Reverse the bit order of a `u16`.
#[inline]
pub const fn reverse_u16(mut value: u16) -> u16 {
    value = ((value & 0xAAAA) >> 1) | ((value & 0x5555) << 1);
    value = ((value & 0xCCCC) >> 2) | ((value & 0x3333) << 2);
    value = ((value & 0xF0F0) >> 4) | ((value & 0x0F0F) << 4);
    (value >> 8) | (value << 8)
}

/// Reverse the bit order of a `u32`.
#[inline]
pub const fn reverse_u32(mut value: u32) -> u32 {
    value = ((value & 0xAAAA_AAAA) >> 1) | ((value & 0x5555_5555) << 1);
    value = ((value & 0xCCCC_CCCC) >> 2) | ((value & 0x3333_3333) << 2);
    value = ((value & 0xF0F0_F0F0) >> 4) | ((value & 0x0F0F_0F0F) << 4);
    value = ((value & 0xFF00_FF00) >> 8) | ((value & 0x00FF_00FF) << 8);
    (value >> 16) | (value << 16)
}

/// Reverse the bit order of a `u64`.
#[inline]
pub const fn reverse_u64(mut value: u64) -> u64 {
    value = ((value & 0xAAAA_AAAA_AAAA_AAAA) >> 1) | ((value & 0x5555_5555_5555_5555) << 1);
    value = ((value & 0xCCCC_CCCC_CCCC_CCCC) >> 2) | ((value & 0x3333_3333_3333_3333) << 2);
    value = ((value & 0xF0F0_F0F0_F0F0_F0F0) >> 4) | ((value & 0x0F0F_0F0F_0F0F_0F0F) << 4);
    value = ((value & 0xFF00_FF00_FF00_FF00) >> 8) | ((value & 0x00FF_00FF_00FF_00FF) << 8);
    value = ((value & 0xFFFF_0000_FFFF_0000) >> 16) | ((value & 0x0000_FFFF_0000_FFFF) << 16);
    (value >> 32) | (value << 32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reverse_u8_single_bits() {
        for i in 0..8 {
            assert_eq!(reverse_u8(1 << i), 1 << (7 - i), "bit {}", i);
        }
    }

    #[test]
    fn test_reverse_u16_single_bits() {
        for i in 0..16 {
            assert_eq!(reverse_u16(1 << i), 1 << (15 - i), "bit {}", i);
        }
    }

    #[test]
    fn test_reverse_u32_single_bits() {
        for i in 0..32 {
            assert_eq!(reverse_u32(1 << i), 1 << (31 - i), "bit {}", i);
        }
    }

    #[test]
    fn test_reverse_u64_single_bits() {
        for i in 0..64 {
            assert_eq!(reverse_u64(1 << i), 1 << (63 - i), "bit {}", i);
        }
    }

    #[test]
    fn test_reverse_u8_exhaustive() {
        for value in 0..=u8::MAX {
            assert_eq!(reverse_u8(value), value.reverse_bits());
            assert_eq!(reverse_u8(reverse_u8(value)), value);
        }
    }

    #[test]
    fn test_reverse_known_polynomials() {
        // Reflected forms of well known generator polynomials
        assert_eq!(reverse_u16(0x8005), 0xA001);
        assert_eq!(reverse_u32(0x04C1_1DB7), 0xEDB8_8320);
        assert_eq!(reverse_u64(0x42F0_E1EB_A9EA_3693), 0xC96C_5795_D787_0F42);
    }

    #[test]
    fn test_reverse_matches_std() {
        let samples: [u64; 5] = [0, 1, 0x0123_4567_89AB_CDEF, u64::MAX, 0x8000_0000_0000_0001];
        for value in samples {
            assert_eq!(reverse_u64(value), value.reverse_bits());
            assert_eq!(reverse_u32(value as u32), (value as u32).reverse_bits());
            assert_eq!(reverse_u16(value as u16), (value as u16).reverse_bits());
        }
    }
}
