//! Extended Euclidean Algorithm.
//!
//! Computes `g = gcd(a, b)` together with Bezout coefficients `(x, y)` such that
//! `a*x + b*y = g`, and derives modular inverses from it.
//!
//! Division uses floor semantics (`div_mod_floor`) throughout so quotient and
//! remainder stay consistent with [`mod_n`] for negative intermediates.

use num_bigint::BigInt;
use num_integer::Integer;
use num_traits::{One, Signed, Zero};

use super::{mod_n, ArithError};

/// Result of the extended Euclidean algorithm.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bezout {
    /// Greatest common divisor (never negative).
    pub gcd: BigInt,
    /// Coefficient of `a`.
    pub x: BigInt,
    /// Coefficient of `b`.
    pub y: BigInt,
}

/// Returns `(g, x, y)` with `a*x + b*y = g = gcd(a, b)`.
///
/// Base case `a = 0` yields `(b, 0, 1)`; otherwise recurses on `(b mod a, a)`
/// and back-substitutes `(g, y' - (b div a) * x', x')`. If the recursion ends
/// on a negative gcd (possible when an input is negative), all three values
/// are negated so `g >= 0` while the identity still holds.
pub fn extended_gcd(a: &BigInt, b: &BigInt) -> Bezout {
    let (gcd, x, y) = solve(a, b);
    if gcd.is_negative() {
        Bezout { gcd: -gcd, x: -x, y: -y }
    } else {
        Bezout { gcd, x, y }
    }
}

fn solve(a: &BigInt, b: &BigInt) -> (BigInt, BigInt, BigInt) {
    if a.is_zero() {
        return (b.clone(), BigInt::zero(), BigInt::one());
    }
    let (quot, rem) = b.div_mod_floor(a);
    let (g, x1, y1) = solve(&rem, a);
    let x = y1 - &quot * &x1;
    (g, x, x1)
}

/// Computes `a^-1 mod n`, normalized into `[0, n)`.
///
/// # Errors
/// * `ArithError::NotInvertible` if `gcd(a, n) != 1` or `n < 2`.
pub fn mod_inverse(a: &BigInt, n: &BigInt) -> Result<BigInt, ArithError> {
    if *n <= BigInt::one() {
        return Err(ArithError::NotInvertible);
    }
    let reduced = mod_n(a, n);
    let bezout = extended_gcd(&reduced, n);
    if !bezout.gcd.is_one() {
        return Err(ArithError::NotInvertible);
    }
    Ok(mod_n(&bezout.x, n))
}
