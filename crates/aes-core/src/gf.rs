//! Byte arithmetic in GF(2^8) modulo x^8 + x^4 + x^3 + x + 1.

/// Low byte of the reducing polynomial.
const REDUCER: u8 = 0x1b;

/// Multiplies `byte` by 2 (`xtime`).
#[inline]
pub const fn double(byte: u8) -> u8 {
    let shifted = byte << 1;
    if byte & 0x80 != 0 {
        shifted ^ REDUCER
    } else {
        shifted
    }
}

/// Multiplies `byte` by 3.
#[inline]
pub const fn times_three(byte: u8) -> u8 {
    byte ^ double(byte)
}

#[cfg(test)]
mod tests {
    use super::*;

    // Shift-and-add reference multiplication.
    fn gmul(mut a: u8, mut b: u8) -> u8 {
        let mut product = 0u8;
        while b != 0 {
            if b & 1 != 0 {
                product ^= a;
            }
            a = double(a);
            b >>= 1;
        }
        product
    }

    #[test]
    fn double_known_values() {
        // FIPS-197 section 4.2.1: {57} · {02} = {ae}, {ae} · {02} = {47}.
        assert_eq!(double(0x57), 0xae);
        assert_eq!(double(0xae), 0x47);
        assert_eq!(double(0x80), 0x1b);
        assert_eq!(double(0x00), 0x00);
    }

    #[test]
    fn times_three_known_values() {
        assert_eq!(times_three(0x01), 0x03);
        assert_eq!(times_three(0x57), 0xf9);
        assert_eq!(times_three(0x80), 0x9b);
    }

    #[test]
    fn distributes_over_xor() {
        for a in 0..=255u8 {
            for b in (0..=255u8).step_by(7) {
                assert_eq!(double(a ^ b), double(a) ^ double(b));
                assert_eq!(times_three(a ^ b), times_three(a) ^ times_three(b));
            }
        }
    }

    #[test]
    fn matches_generic_multiplication() {
        for a in 0..=255u8 {
            assert_eq!(double(a), gmul(a, 2));
            assert_eq!(times_three(a), gmul(a, 3));
        }
        assert_eq!(gmul(0x57, 0x13), 0xfe);
    }
}
