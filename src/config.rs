//! Configuration for the protocol and the built-in demonstration.
//!
//! Defines the structure for user-configurable settings.

use num_bigint::BigInt;

use crate::session::Scenario;

/// Settings that affect party construction.
///
/// This struct should be populated by the host application and passed to
/// [`crate::party::Party::with_config`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProtocolConfig {
    /// Miller-Rabin rounds applied to each of `P` and `Q`.
    /// A composite passes with probability at most `4^-rounds`.
    pub primality_rounds: u32,
}

impl Default for ProtocolConfig {
    fn default() -> Self {
        Self { primality_rounds: 10 }
    }
}

/// Values used when the binary runs without arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoConfig {
    pub p: i64,
    pub q: i64,
    pub k_signer: i64,
    pub k_checker: i64,
    pub k_receiver: i64,
    pub x: i64,
    pub y: i64,
}

impl Default for DemoConfig {
    fn default() -> Self {
        Self {
            p: 683,
            q: 811,
            k_signer: 3,
            k_checker: 13,
            k_receiver: 5,
            x: 7,
            y: 11,
        }
    }
}

impl From<&DemoConfig> for Scenario {
    fn from(demo: &DemoConfig) -> Self {
        Scenario {
            p: BigInt::from(demo.p),
            q: BigInt::from(demo.q),
            k_signer: BigInt::from(demo.k_signer),
            k_checker: BigInt::from(demo.k_checker),
            k_receiver: BigInt::from(demo.k_receiver),
            x: BigInt::from(demo.x),
            y: BigInt::from(demo.y),
        }
    }
}
