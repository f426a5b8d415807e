//! Curve-tagged `Point`/`Scalar` types spanning the two curve families the
//! ledger client speaks: BN256 (`G1`, `G2`) for collective signatures and
//! Ed25519 for per-user Schnorr identities.
//!
//! Every point and scalar carries its group as part of the value; mixing
//! families in an operation is a `CurveMismatch` error rather than a
//! silent wrong answer. The wire format prefixes each point with an
//! 8-byte ASCII group tag so decoders can fail closed on unknown groups.
#![forbid(unsafe_code)]
#![deny(clippy::unwrap_used)]

use std::fmt;

/// Errors of the facade layer.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum SuiteError {
    /// Operands belong to different curve families, or an operation is
    /// undefined for the value's family.
    CurveMismatch,
    /// The 8-byte tag of a point encoding is not a known group.
    UnknownPointType,
    /// A point encoding could not be decoded for its claimed group.
    MalformedPoint,
    /// A scalar encoding could not be decoded.
    MalformedScalar,
    /// A signature failed to parse for the key's family.
    MalformedSignature,
    /// Inversion of zero.
    NotInvertible,
}

impl fmt::Display for SuiteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::CurveMismatch => write!(f, "curve family mismatch"),
            Self::UnknownPointType => write!(f, "unrecognized point type"),
            Self::MalformedPoint => write!(f, "malformed point encoding"),
            Self::MalformedScalar => write!(f, "malformed scalar encoding"),
            Self::MalformedSignature => write!(f, "malformed signature"),
            Self::NotInvertible => write!(f, "element is not invertible"),
        }
    }
}

impl std::error::Error for SuiteError {}

pub type SuiteResult<T> = std::result::Result<T, SuiteError>;

mod group;
pub mod schnorr;
mod verify;

pub use group::{Group, Point, Scalar};
pub use verify::verify_signature;

#[cfg(test)]
mod tests;
