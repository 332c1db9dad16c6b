//! Canonical residues.

use num_bigint::BigInt;
use num_integer::Integer;

/// Reduces `v` into `[0, n)`.
///
/// Truncating remainders keep the sign of the dividend; this never does.
/// All protocol outputs and comparisons go through here.
///
/// `n` must be positive.
#[inline]
pub fn mod_n(v: &BigInt, n: &BigInt) -> BigInt {
    debug_assert!(n.sign() == num_bigint::Sign::Plus, "modulus must be positive");
    v.mod_floor(n)
}

#[cfg(test)]
mod tests {
    use super::*;
    use num_traits::Zero;

    #[test]
    fn test_positive_values() {
        let n = BigInt::from(11);
        assert_eq!(mod_n(&BigInt::from(25), &n), BigInt::from(3));
        assert_eq!(mod_n(&BigInt::from(11), &n), BigInt::zero());
        assert_eq!(mod_n(&BigInt::from(4), &n), BigInt::from(4));
    }

    #[test]
    fn test_negative_values() {
        let n = BigInt::from(11);
        // truncating % would give -3 here
        assert_eq!(mod_n(&BigInt::from(-3), &n), BigInt::from(8));
        assert_eq!(mod_n(&BigInt::from(-22), &n), BigInt::zero());
        assert_eq!(mod_n(&BigInt::from(-23), &n), BigInt::from(10));
    }

    #[test]
    fn test_range_sweep() {
        for modulus in [1i64, 2, 7, 36, 553913] {
            let n = BigInt::from(modulus);
            for v in -1000i64..1000 {
                let r = mod_n(&BigInt::from(v * 7919), &n);
                assert!(r >= BigInt::zero() && r < n, "{} mod {} = {}", v * 7919, modulus, r);
            }
        }
    }
}
