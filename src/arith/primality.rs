//! Miller-Rabin probabilistic primality test.
//!
//! # Security
//! - **CSPRNG only**: witnesses come from a caller-supplied `RngCore + CryptoRng`.
//! - **Zeroization**: the raw witness bytes are wiped after each draw.
//! - **Bound**: witnesses are drawn from `2 <= a < n - 2`. The upper bound is
//!   exclusive and must stay that way for compatibility with existing parameter
//!   sets.
//!
//! A composite survives one round with probability at most 1/4, so `rounds`
//! rounds bound the false-positive rate by `4^-rounds`.

use alloc::vec;

use num_bigint::{BigInt, Sign};
use num_integer::Integer;
use num_traits::One;
use rand_core::{CryptoRng, RngCore};
use zeroize::Zeroizing;

/// Returns `true` if `n` is probably prime after `rounds` Miller-Rabin rounds.
///
/// Never fails: a composite verdict is simply `false`.
///
/// # Arguments
/// * `n` - Candidate to test.
/// * `rounds` - Number of independent witnesses to try.
/// * `rng` - Cryptographically secure source for the witnesses.
pub fn is_probably_prime<R: RngCore + CryptoRng + ?Sized>(
    n: &BigInt,
    rounds: u32,
    rng: &mut R,
) -> bool {
    let two = BigInt::from(2u8);
    let three = BigInt::from(3u8);

    if *n == two || *n == three {
        return true;
    }
    if *n < two || n.is_even() {
        return false;
    }

    // n - 1 = 2^s * t, t odd
    let one = BigInt::one();
    let n_minus_one = n - &one;
    let mut t = n_minus_one.clone();
    let mut s: u64 = 0;
    while t.is_even() {
        t >>= 1;
        s += 1;
    }

    let upper = n - &two;
    for round in 0..rounds {
        let a = sample_witness(&two, &upper, rng);
        let mut x = a.modpow(&t, n);

        if x == one || x == n_minus_one {
            continue;
        }

        for _ in 1..s {
            x = x.modpow(&two, n);
            if x == one {
                log::debug!("Miller-Rabin: nontrivial square root of 1 in round {}", round);
                return false;
            }
            if x == n_minus_one {
                break;
            }
        }

        if x != n_minus_one {
            log::debug!("Miller-Rabin: witness found in round {}", round);
            return false;
        }
    }

    true
}

/// Draws a uniform witness from `[low, high)` by rejection sampling.
///
/// Candidates are masked to the bit length of `high`, so each draw succeeds
/// with probability above 1/2 once `high` is large. Terminates almost surely;
/// there is no fixed iteration bound. Requires `low < high`.
fn sample_witness<R: RngCore + CryptoRng + ?Sized>(
    low: &BigInt,
    high: &BigInt,
    rng: &mut R,
) -> BigInt {
    let bits = high.bits();
    let len = (bits.div_ceil(8) as usize).max(1);
    let excess = (len as u64 * 8 - bits) as u32;
    let mask = 0xFFu8.checked_shr(excess).unwrap_or(0);

    let mut buf = Zeroizing::new(vec![0u8; len]);
    loop {
        rng.fill_bytes(&mut buf);
        buf[0] &= mask;
        let candidate = BigInt::from_bytes_be(Sign::Plus, &buf);
        if candidate >= *low && candidate < *high {
            return candidate;
        }
    }
}
