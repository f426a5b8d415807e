//! BLS signatures over BN256, the BDN rogue-key-resistant aggregation
//! scheme, and the participation masks used by collective signing.
//!
//! Keys live in `G2` and signatures in `G1`, matching the conode wire
//! format. Plain BLS aggregation (summing keys and signatures) is exposed
//! for protocols whose keys are known honest; everything roster-driven
//! goes through [`bdn`], which weighs each key with a hash-derived
//! coefficient so that an attacker-chosen key cannot cancel the others.
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

use std::fmt;

/// Errors from signing, aggregation and mask handling.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum BlsError {
    /// A signature failed the pairing check.
    InvalidSignature,
    /// A key, signature or scalar encoding could not be parsed.
    MalformedEncoding,
    /// A mask encoding does not match the roster size.
    InvalidMaskLength,
    /// A participant index is outside the roster.
    IndexOutOfRange,
    /// A public key does not appear in the roster.
    KeyNotFound,
    /// A mask cannot be built over an empty roster.
    EmptyRoster,
    /// Fewer participants than the policy requires.
    NotEnoughParticipants,
    /// Aggregation over an empty set of keys or signatures.
    EmptyAggregation,
}

impl fmt::Display for BlsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidSignature => write!(f, "signature verification failed"),
            Self::MalformedEncoding => write!(f, "malformed encoding"),
            Self::InvalidMaskLength => write!(f, "mask length does not match roster"),
            Self::IndexOutOfRange => write!(f, "participant index out of range"),
            Self::KeyNotFound => write!(f, "public key not in roster"),
            Self::EmptyRoster => write!(f, "empty roster"),
            Self::NotEnoughParticipants => write!(f, "not enough participants"),
            Self::EmptyAggregation => write!(f, "nothing to aggregate"),
        }
    }
}

impl std::error::Error for BlsError {}

pub type BlsResult<T> = std::result::Result<T, BlsError>;

pub mod bdn;
pub mod bls;
pub mod mask;
pub mod policy;

pub use bls::{keypair_from_rng, PublicKey, SecretKey, Signature};
pub use mask::Mask;
pub use policy::{byzantine_threshold, CompletePolicy, Policy, ThresholdPolicy};

#[cfg(test)]
mod tests;
