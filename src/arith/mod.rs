//! Number-theoretic primitives over arbitrary-precision integers.
//!
//! Everything the protocol needs beyond plain `BigInt` arithmetic lives here.
//!
//! # Components
//! - `euclid`: Extended Euclidean solver and modular inversion.
//! - `modn`: Reduction of any integer into the canonical range `[0, n)`.
//! - `primality`: Miller-Rabin probabilistic primality test.
//!
//! # Invariants
//! - Every value returned from this module that is "mod n" lies in `[0, n)`.
//! - Randomness is never owned here; callers inject a CSPRNG per call.

pub mod euclid;
pub mod modn;
pub mod primality;

use core::fmt;

pub use euclid::{extended_gcd, mod_inverse, Bezout};
pub use modn::mod_n;
pub use primality::is_probably_prime;

/// Errors for modular arithmetic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArithError {
    /// The value shares a factor with the modulus (or the modulus is < 2).
    NotInvertible,
}

impl fmt::Display for ArithError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArithError::NotInvertible => write!(f, "Value is not invertible modulo N"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ArithError {}
