//! Three-party signatures over a composite modulus.
//!
//! A Signer signs an operand pair `(x, y)`, a Checker verifies the signature
//! with only the Signer's public parameter `H`, and a Receiver recovers the
//! secret operand using the Signer's private key. All parties share the prime
//! pair `(P, Q)` and compute over `N = P*Q`.
//!
//! # Modules
//! - `arith`: Extended Euclid, modular inversion, canonical residues, Miller-Rabin.
//! - `party`: Party construction/validation and the protocol operations.
//! - `session`: A complete three-party run and its input format.
//! - `io`: Scenario and transcript files (`std` only).
//! - `config`: Protocol and demonstration settings.

#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

pub mod arith;
pub mod config;
pub mod party;
pub mod session;

#[cfg(feature = "std")]
pub mod io;

pub use config::{DemoConfig, ProtocolConfig};
pub use party::{ParameterError, Party, ProtocolError, Signature};
pub use session::{Scenario, Transcript};

pub use num_bigint::BigInt;
