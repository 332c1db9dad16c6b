//! Signature pair.

use core::fmt;
use num_bigint::BigInt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A signature `(S1, S2)` over an operand pair, both components in `[0, N)`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Signature {
    pub s1: BigInt,
    pub s2: BigInt,
}

impl Signature {
    pub fn new(s1: BigInt, s2: BigInt) -> Self {
        Self { s1, s2 }
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.s1, self.s2)
    }
}
