//! Protocol operations.
//!
//! With `t = 2^-1`, `S1 = t(x/y + y)` and `S2 = tK(x/y - y)`, so
//! `S1^2 - S2^2/K^2 = x` and, since `H = -1/K^2`, also `S1^2 + H*S2^2 = x`.
//! The checker needs only `H`. The receiver, given `K`, gets
//! `S1 + S2/K = x/y` and therefore `y = x * (S1 + S2/K)^-1`.
//!
//! All arithmetic is mod `N` and every result passes through [`mod_n`].

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::{ParameterError, Party, ProtocolError, Signature};
use crate::arith::{extended_gcd, mod_inverse, mod_n};

impl Party {
    /// Signs the operand pair `(x, y)` with this party's key.
    ///
    /// # Errors
    /// * `ParameterError::XNotCoprime` / `YNotCoprime` if an operand shares a factor with `N`.
    /// * `ProtocolError::NotInvertible` if `2` is not a unit mod `N`.
    pub fn sign(&self, x: &BigInt, y: &BigInt) -> Result<Signature, ProtocolError> {
        let n = &self.n;
        if !extended_gcd(x, n).gcd.is_one() {
            log::warn!("Refusing to sign: x shares a factor with N");
            return Err(ParameterError::XNotCoprime.into());
        }
        if !extended_gcd(y, n).gcd.is_one() {
            log::warn!("Refusing to sign: y shares a factor with N");
            return Err(ParameterError::YNotCoprime.into());
        }

        let y_inv = mod_inverse(y, n)?;
        let two_inv = mod_inverse(&BigInt::from(2u8), n)?;
        let x_over_y = x * &y_inv;

        let s1 = mod_n(&(&two_inv * (&x_over_y + y)), n);
        let s2 = mod_n(&(&two_inv * &self.k * (&x_over_y - y)), n);
        log::debug!("Signed operand pair, signature = ({}, {})", s1, s2);

        Ok(Signature::new(s1, s2))
    }

    /// Verifies `sig` against `x` using the signer's public parameter `h`.
    ///
    /// `x` is compared as given, without reduction: callers must pass it
    /// already in `[0, N)`, otherwise a valid signature reports `false`.
    pub fn check_sign(&self, x: &BigInt, sig: &Signature, h: &BigInt) -> bool {
        let n = &self.n;
        let check = mod_n(&(&sig.s1 * &sig.s1 + h * &sig.s2 * &sig.s2), n);
        let valid = *x == check;
        log::debug!("Signature check: {}", valid);
        valid
    }

    /// Recovers the secret operand from `sig` using the signer's key `k`.
    ///
    /// Returns zero when `S1^2 - S2^2/k^2 != x`, i.e. the key does not match.
    /// As with [`Party::check_sign`], `x` must already be in `[0, N)`.
    /// When `S2 = 0` every key passes this check.
    ///
    /// # Errors
    /// * `ProtocolError::NotInvertible` if `k` or `S1 + S2/k` is not a unit mod `N`.
    pub fn recover_message(
        &self,
        x: &BigInt,
        sig: &Signature,
        k: &BigInt,
    ) -> Result<BigInt, ProtocolError> {
        let n = &self.n;
        let k_inv = mod_inverse(k, n)?;
        let k_sq_inv = mod_inverse(&(k * k), n)?;

        let check = mod_n(&(&sig.s1 * &sig.s1 - &sig.s2 * &sig.s2 * &k_sq_inv), n);
        if check != *x {
            log::debug!("Recovery key does not match signature");
            return Ok(BigInt::zero());
        }

        let x_over_y = &sig.s1 + &sig.s2 * &k_inv;
        let y_over_x = mod_inverse(&x_over_y, n)?;
        Ok(mod_n(&(x * y_over_x), n))
    }
}
