//! A complete Signer / Checker / Receiver run.
//!
//! A [`Scenario`] carries the seven integers `p, q, kSigner, kChecker,
//! kReceiver, x, y`. Running it builds the three parties over the same prime
//! pair, signs `(x, y)` as the Signer, verifies as the Checker using the
//! Signer's public parameter, and recovers as the Receiver using the Signer's
//! key. The outcome is a [`Transcript`].

use alloc::vec::Vec;
use core::fmt;
use core::str::FromStr;

use num_bigint::BigInt;
use rand_core::{CryptoRng, OsRng, RngCore};

use crate::config::ProtocolConfig;
use crate::party::{Party, ProtocolError, Signature};

/// Number of comma-separated fields in a scenario description.
pub const FIELD_COUNT: usize = 7;

/// Errors for parsing a scenario description.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputError {
    /// Wrong number of comma-separated fields (holds the count found).
    FieldCount(usize),
    /// Field at `index` (0-based) is not a decimal integer.
    InvalidInteger { index: usize },
}

impl fmt::Display for InputError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputError::FieldCount(found) => write!(
                f,
                "Input must contain exactly {} comma-separated integers, found {} fields",
                FIELD_COUNT, found
            ),
            InputError::InvalidInteger { index } => {
                write!(f, "Field {} is not a decimal integer", index + 1)
            }
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for InputError {}

/// Inputs for one protocol run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Scenario {
    pub p: BigInt,
    pub q: BigInt,
    pub k_signer: BigInt,
    pub k_checker: BigInt,
    pub k_receiver: BigInt,
    pub x: BigInt,
    pub y: BigInt,
}

/// Outcome of a protocol run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transcript {
    pub signature: Signature,
    pub verified: bool,
    pub recovered: BigInt,
}

impl fmt::Display for Transcript {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Signature: {}", self.signature)?;
        writeln!(f, "Verification: {}", self.verified)?;
        write!(f, "Recovered message: {}", self.recovered)
    }
}

impl Scenario {
    /// Parses `p,q,kSigner,kChecker,kReceiver,x,y`.
    ///
    /// Whitespace around each field (including a trailing newline) is ignored.
    pub fn parse(input: &str) -> Result<Self, InputError> {
        let fields: Vec<&str> = input.split(',').map(str::trim).collect();
        if fields.len() != FIELD_COUNT {
            return Err(InputError::FieldCount(fields.len()));
        }

        let mut values = Vec::with_capacity(FIELD_COUNT);
        for (index, field) in fields.iter().enumerate() {
            let value = BigInt::from_str(field).map_err(|_| InputError::InvalidInteger { index })?;
            values.push(value);
        }

        let [p, q, k_signer, k_checker, k_receiver, x, y]: [BigInt; FIELD_COUNT] = values
            .try_into()
            .map_err(|v: Vec<BigInt>| InputError::FieldCount(v.len()))?;
        Ok(Self { p, q, k_signer, k_checker, k_receiver, x, y })
    }

    /// Runs the scenario with the default config and the OS CSPRNG.
    pub fn run(&self) -> Result<Transcript, ProtocolError> {
        self.run_with_rng(&ProtocolConfig::default(), &mut OsRng)
    }

    /// Runs the scenario, drawing primality witnesses from `rng`.
    pub fn run_with_rng<R: RngCore + CryptoRng + ?Sized>(
        &self,
        config: &ProtocolConfig,
        rng: &mut R,
    ) -> Result<Transcript, ProtocolError> {
        let mut build = |k: &BigInt| {
            Party::with_rng(self.p.clone(), self.q.clone(), k.clone(), config, &mut *rng)
        };
        let signer = build(&self.k_signer)?;
        let checker = build(&self.k_checker)?;
        let receiver = build(&self.k_receiver)?;
        log::debug!("Parties ready over N = {}", signer.modulus());

        let signature = signer.sign(&self.x, &self.y)?;
        let verified = checker.check_sign(&self.x, &signature, signer.public_param());
        let recovered = receiver.recover_message(&self.x, &signature, &self.k_signer)?;

        Ok(Transcript { signature, verified, recovered })
    }
}

impl FromStr for Scenario {
    type Err = InputError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}
