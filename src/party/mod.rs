//! Key-holding parties.
//!
//! A [`Party`] holds a prime pair `(P, Q)` and a private key `K`, and derives
//! the shared modulus `N = P*Q` and the public verification parameter
//! `H = -(K^2)^-1 mod N` once at construction. Signer, Checker and Receiver are
//! all `Party` values built from the same prime pair with different keys.
//!
//! # Components
//! - `signature`: The `(S1, S2)` pair passed from signer to the other roles.
//! - `ops`: Sign, CheckSign and RecoverMessage.
//!
//! # Invariants
//! Enforced at construction, in this order, first failure wins. At least one
//! Miller-Rabin round is required and `P`, `Q` must be positive.
//! 1. `gcd(P, Q) = 1`
//! 2. `gcd(N, K) = 1`
//! 3. `P` passes Miller-Rabin
//! 4. `Q` passes Miller-Rabin
//!
//! A `Party` is immutable once built.

pub mod ops;
pub mod signature;

use core::fmt;
use num_bigint::BigInt;
use num_traits::{One, Signed, Zero};
use rand_core::{CryptoRng, OsRng, RngCore};

use crate::arith::{extended_gcd, is_probably_prime, mod_inverse, mod_n, ArithError};
use crate::config::ProtocolConfig;

pub use signature::Signature;

/// Parameter validation failures.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParameterError {
    /// `gcd(P, Q) != 1`.
    PqNotCoprime,
    /// `gcd(N, K) != 1`.
    NkNotCoprime,
    /// `P` failed the primality test.
    PNotPrime,
    /// `Q` failed the primality test.
    QNotPrime,
    /// Operand `x` shares a factor with `N`.
    XNotCoprime,
    /// Operand `y` shares a factor with `N`.
    YNotCoprime,
    /// Zero Miller-Rabin rounds would accept every odd factor.
    NoPrimalityRounds,
}

impl fmt::Display for ParameterError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterError::PqNotCoprime => write!(f, "P,Q not coprime"),
            ParameterError::NkNotCoprime => write!(f, "N,K not coprime"),
            ParameterError::PNotPrime => write!(f, "P not prime"),
            ParameterError::QNotPrime => write!(f, "Q not prime"),
            ParameterError::XNotCoprime => write!(f, "x,N not coprime"),
            ParameterError::YNotCoprime => write!(f, "y,N not coprime"),
            ParameterError::NoPrimalityRounds => {
                write!(f, "primality rounds must be at least 1")
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParameterError {}

/// Errors surfaced by party construction and the protocol operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolError {
    /// A parameter or operand failed validation.
    Parameter(ParameterError),
    /// A required modular inverse does not exist.
    NotInvertible,
}

impl fmt::Display for ProtocolError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProtocolError::Parameter(e) => write!(f, "Parameter error: {}", e),
            ProtocolError::NotInvertible => write!(f, "Value is not invertible modulo N"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ProtocolError {}

impl From<ParameterError> for ProtocolError {
    fn from(e: ParameterError) -> Self {
        ProtocolError::Parameter(e)
    }
}

impl From<ArithError> for ProtocolError {
    fn from(e: ArithError) -> Self {
        match e {
            ArithError::NotInvertible => ProtocolError::NotInvertible,
        }
    }
}

/// A key holder in the protocol.
#[derive(Clone, PartialEq, Eq)]
pub struct Party {
    p: BigInt,
    q: BigInt,
    n: BigInt,
    k: BigInt,
    h: BigInt,
}

impl fmt::Debug for Party {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Party")
            .field("p", &self.p)
            .field("q", &self.q)
            .field("n", &self.n)
            .field("h", &self.h)
            .field("k", &"***SENSITIVE***")
            .finish()
    }
}

impl Party {
    /// Builds and validates a party using the default config and the OS CSPRNG.
    pub fn new(p: BigInt, q: BigInt, k: BigInt) -> Result<Self, ProtocolError> {
        Self::with_config(p, q, k, &ProtocolConfig::default())
    }

    /// Builds and validates a party with the given config and the OS CSPRNG.
    pub fn with_config(
        p: BigInt,
        q: BigInt,
        k: BigInt,
        config: &ProtocolConfig,
    ) -> Result<Self, ProtocolError> {
        Self::with_rng(p, q, k, config, &mut OsRng)
    }

    /// Builds and validates a party, drawing primality witnesses from `rng`.
    ///
    /// # Errors
    /// * `ParameterError::NoPrimalityRounds` if `config.primality_rounds` is 0.
    /// * `ProtocolError::NotInvertible` if `K^2` has no inverse mod `N`.
    /// * `ProtocolError::Parameter` for the first failed invariant.
    pub fn with_rng<R: RngCore + CryptoRng + ?Sized>(
        p: BigInt,
        q: BigInt,
        k: BigInt,
        config: &ProtocolConfig,
        rng: &mut R,
    ) -> Result<Self, ProtocolError> {
        if config.primality_rounds == 0 {
            log::warn!("Rejecting party: primality testing disabled");
            return Err(ParameterError::NoPrimalityRounds.into());
        }
        // N must stay positive for every reduction below
        if p.is_negative() || p.is_zero() {
            log::warn!("Rejecting party: P = {} is not positive", p);
            return Err(ParameterError::PNotPrime.into());
        }
        if q.is_negative() || q.is_zero() {
            log::warn!("Rejecting party: Q = {} is not positive", q);
            return Err(ParameterError::QNotPrime.into());
        }

        let n = &p * &q;
        let k_sq_inv = mod_inverse(&(&k * &k), &n).map_err(|e| {
            log::warn!("Rejecting party: K^2 not invertible mod N = {}", n);
            ProtocolError::from(e)
        })?;
        let h = mod_n(&-k_sq_inv, &n);
        log::debug!("Derived party parameters: N = {}, H = {}", n, h);

        let party = Self { p, q, n, k, h };
        party.check_params(config.primality_rounds, rng).map_err(|e| {
            log::warn!("Rejecting party: {}", e);
            ProtocolError::from(e)
        })?;
        Ok(party)
    }

    fn check_params<R: RngCore + CryptoRng + ?Sized>(
        &self,
        rounds: u32,
        rng: &mut R,
    ) -> Result<(), ParameterError> {
        if !extended_gcd(&self.p, &self.q).gcd.is_one() {
            return Err(ParameterError::PqNotCoprime);
        }
        if !extended_gcd(&self.n, &self.k).gcd.is_one() {
            return Err(ParameterError::NkNotCoprime);
        }
        if !is_probably_prime(&self.p, rounds, rng) {
            return Err(ParameterError::PNotPrime);
        }
        if !is_probably_prime(&self.q, rounds, rng) {
            return Err(ParameterError::QNotPrime);
        }
        Ok(())
    }

    pub fn p(&self) -> &BigInt {
        &self.p
    }

    pub fn q(&self) -> &BigInt {
        &self.q
    }

    /// Shared modulus `N = P*Q`.
    pub fn modulus(&self) -> &BigInt {
        &self.n
    }

    /// Public verification parameter `H`, in `[0, N)`.
    pub fn public_param(&self) -> &BigInt {
        &self.h
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand_chacha::ChaCha20Rng;
    use rand_core::SeedableRng;

    fn build(p: i64, q: i64, k: i64) -> Result<Party, ProtocolError> {
        build_with_rounds(p, q, k, ProtocolConfig::default().primality_rounds)
    }

    fn build_with_rounds(p: i64, q: i64, k: i64, rounds: u32) -> Result<Party, ProtocolError> {
        let mut rng = ChaCha20Rng::seed_from_u64(42);
        let config = ProtocolConfig { primality_rounds: rounds };
        Party::with_rng(BigInt::from(p), BigInt::from(q), BigInt::from(k), &config, &mut rng)
    }

    #[test]
    fn test_derived_params() {
        let party = build(683, 811, 3).unwrap();
        assert_eq!(party.modulus(), &BigInt::from(553913));
        assert_eq!(party.public_param(), &BigInt::from(492367));
        // H * K^2 == -1 (mod N)
        let n = party.modulus();
        let check = mod_n(&(party.public_param() * BigInt::from(9)), n);
        assert_eq!(check, n - BigInt::one());
    }

    #[test]
    fn test_public_param_in_range() {
        for k in [2i64, 3, 5, 13, 1000, 553912, -3] {
            let party = build(683, 811, k).unwrap();
            let h = party.public_param();
            assert!(*h >= BigInt::from(0) && h < party.modulus(), "k = {}", k);
        }
    }

    #[test]
    fn test_equal_primes_rejected() {
        assert_eq!(
            build(683, 683, 3),
            Err(ProtocolError::Parameter(ParameterError::PqNotCoprime))
        );
    }

    #[test]
    fn test_non_primes_rejected() {
        let p_not_prime = Err(ProtocolError::Parameter(ParameterError::PNotPrime));
        let q_not_prime = Err(ProtocolError::Parameter(ParameterError::QNotPrime));
        assert_eq!(build(4, 9, 5), p_not_prime);
        assert_eq!(build(683, 9, 5), q_not_prime);
        assert_eq!(build(1, 811, 5), p_not_prime);
        assert_eq!(build(683, 0, 5), q_not_prime);
        assert_eq!(build(-683, 811, 5), p_not_prime);
    }

    #[test]
    fn test_unit_factor_follows_count_params_order() {
        // P = 1 leaves N = Q, so the K^2 inversion fails before the primality checks
        assert_eq!(build(1, 811, 811), Err(ProtocolError::NotInvertible));
        assert_eq!(build(1, 1, 5), Err(ProtocolError::NotInvertible));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert_eq!(
            build_with_rounds(9, 25, 7, 0),
            Err(ProtocolError::Parameter(ParameterError::NoPrimalityRounds))
        );
        assert_eq!(
            build_with_rounds(683, 811, 3, 0),
            Err(ProtocolError::Parameter(ParameterError::NoPrimalityRounds))
        );
        assert_eq!(
            build_with_rounds(9, 25, 7, 1),
            Err(ProtocolError::Parameter(ParameterError::PNotPrime))
        );
        assert!(build_with_rounds(683, 811, 3, 1).is_ok());
    }

    #[test]
    fn test_key_sharing_factor_rejected() {
        // K^2 has no inverse once K shares a factor with N
        assert_eq!(build(683, 811, 683), Err(ProtocolError::NotInvertible));
        assert_eq!(build(683, 811, 0), Err(ProtocolError::NotInvertible));
        assert_eq!(build(4, 9, 3), Err(ProtocolError::NotInvertible));
    }

    #[test]
    fn test_debug_redacts_key() {
        let party = build(683, 811, 777).unwrap();
        let debug_str = alloc::format!("{:?}", party);
        assert!(debug_str.contains("***SENSITIVE***"));
        assert!(!debug_str.contains("777"));
    }

    #[test]
    fn test_error_messages() {
        assert_eq!(alloc::format!("{}", ParameterError::PqNotCoprime), "P,Q not coprime");
        assert_eq!(alloc::format!("{}", ParameterError::NkNotCoprime), "N,K not coprime");
        assert_eq!(alloc::format!("{}", ParameterError::PNotPrime), "P not prime");
        assert_eq!(alloc::format!("{}", ParameterError::QNotPrime), "Q not prime");
    }
}
