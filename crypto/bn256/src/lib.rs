//! The BN256 pairing-friendly curve used by the ByzCoin ledger.
//!
//! Implements the field tower `GF(p) ⊂ GF(p²) ⊂ GF(p⁶) ⊂ GF(p¹²)`, the
//! groups `G1` (over the base field) and `G2` (over the sextic twist), the
//! optimal-ate pairing `e: G1 × G2 → GT`, and scalars modulo the group
//! order. The wire encodings are fixed-width big-endian and must stay
//! bit-compatible with the conode implementations of the same curve.
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

use std::fmt;

/// Errors produced while parsing or operating on curve elements.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Bn256Error {
    /// An encoding had the wrong length or a coordinate out of range, or
    /// the decoded point is not on the curve.
    InvalidPoint,
    /// A field-element encoding was out of the range `[0, p)`.
    InvalidFieldElement,
    /// A scalar encoding had the wrong length or was `>=` the group order.
    InvalidScalar,
    /// Multiplicative inversion of the additive identity was requested.
    NotInvertible,
}

impl fmt::Display for Bn256Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidPoint => write!(f, "invalid curve point"),
            Self::InvalidFieldElement => write!(f, "invalid field element"),
            Self::InvalidScalar => write!(f, "invalid scalar"),
            Self::NotInvertible => write!(f, "element is not invertible"),
        }
    }
}

impl std::error::Error for Bn256Error {}

pub type Bn256Result<T> = std::result::Result<T, Bn256Error>;

pub(crate) mod constants;
pub(crate) mod fp;
mod fp12;
mod fp2;
mod fp6;
mod g1;
mod g2;
mod gt;
mod pairing;
mod scalar;

pub use fp12::Fp12;
pub use fp2::Fp2;
pub use fp6::Fp6;
pub use g1::G1;
pub use g2::G2;
pub use gt::Gt;
pub use pairing::pairing;
pub use scalar::Scalar;
