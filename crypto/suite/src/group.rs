//! The tagged point and scalar types and their wire format.

use crate::{SuiteError, SuiteResult};
use byzcoin_crypto_bn256::{G1, G2, Scalar as BnScalar};
use curve25519_dalek::edwards::CompressedEdwardsY;
use curve25519_dalek::traits::Identity;
use curve25519_dalek::{EdwardsPoint, Scalar as EdScalar};
use rand::{CryptoRng, Rng};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// The curve groups points and scalars can belong to.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Serialize, Deserialize)]
pub enum Group {
    /// BN256 `G1`, where BLS signatures live.
    Bn256G1,
    /// BN256 `G2`, where BLS public keys live.
    Bn256G2,
    /// The Ed25519 Edwards curve, for Schnorr identities.
    Ed25519,
}

impl Group {
    /// The 8-byte ASCII tag prefixing point encodings of this group.
    pub fn wire_tag(&self) -> &'static [u8; 8] {
        match self {
            Self::Bn256G1 => b"bn256.g1",
            Self::Bn256G2 => b"bn256.pt",
            Self::Ed25519 => b"ed25519\0",
        }
    }

    pub fn from_wire_tag(tag: &[u8]) -> Option<Self> {
        match tag {
            b"bn256.g1" => Some(Self::Bn256G1),
            b"bn256.pt" => Some(Self::Bn256G2),
            b"ed25519\0" => Some(Self::Ed25519),
            _ => None,
        }
    }

    /// Size of a point encoding, excluding the tag.
    pub fn point_bytes(&self) -> usize {
        match self {
            Self::Bn256G1 => 64,
            Self::Bn256G2 => 128,
            Self::Ed25519 => 32,
        }
    }

    pub fn scalar_bytes(&self) -> usize {
        32
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bn256G1 => "bn256.g1",
            Self::Bn256G2 => "bn256.g2",
            Self::Ed25519 => "ed25519",
        };
        write!(f, "{name}")
    }
}

/// A group element carrying its curve family.
#[derive(Clone, Eq, PartialEq)]
pub enum Point {
    Bn256G1(G1),
    Bn256G2(G2),
    Ed25519(EdwardsPoint),
}

impl fmt::Debug for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}({})", self.group(), hex::encode(self.serialize()))
    }
}

impl Point {
    pub fn group(&self) -> Group {
        match self {
            Self::Bn256G1(_) => Group::Bn256G1,
            Self::Bn256G2(_) => Group::Bn256G2,
            Self::Ed25519(_) => Group::Ed25519,
        }
    }

    pub fn identity(group: Group) -> Self {
        match group {
            Group::Bn256G1 => Self::Bn256G1(G1::identity()),
            Group::Bn256G2 => Self::Bn256G2(G2::identity()),
            Group::Ed25519 => Self::Ed25519(EdwardsPoint::identity()),
        }
    }

    pub fn generator(group: Group) -> Self {
        match group {
            Group::Bn256G1 => Self::Bn256G1(G1::generator()),
            Group::Bn256G2 => Self::Bn256G2(G2::generator()),
            Group::Ed25519 => Self::Ed25519(EdwardsPoint::mul_base(&EdScalar::ONE)),
        }
    }

    pub fn add(&self, other: &Self) -> SuiteResult<Self> {
        match (self, other) {
            (Self::Bn256G1(a), Self::Bn256G1(b)) => Ok(Self::Bn256G1(a.add(b))),
            (Self::Bn256G2(a), Self::Bn256G2(b)) => Ok(Self::Bn256G2(a.add(b))),
            (Self::Ed25519(a), Self::Ed25519(b)) => Ok(Self::Ed25519(a + b)),
            (_, _) => Err(SuiteError::CurveMismatch),
        }
    }

    pub fn sub(&self, other: &Self) -> SuiteResult<Self> {
        self.add(&other.neg())
    }

    pub fn neg(&self) -> Self {
        match self {
            Self::Bn256G1(p) => Self::Bn256G1(p.neg()),
            Self::Bn256G2(p) => Self::Bn256G2(p.neg()),
            Self::Ed25519(p) => Self::Ed25519(-p),
        }
    }

    pub fn mul(&self, k: &Scalar) -> SuiteResult<Self> {
        match (self, k) {
            (Self::Bn256G1(p), Scalar::Bn256(s)) => Ok(Self::Bn256G1(p.scalar_mul(s))),
            (Self::Bn256G2(p), Scalar::Bn256(s)) => Ok(Self::Bn256G2(p.scalar_mul(s))),
            (Self::Ed25519(p), Scalar::Ed25519(s)) => Ok(Self::Ed25519(p * s)),
            (_, _) => Err(SuiteError::CurveMismatch),
        }
    }

    /// `k·G` in the scalar's own group family; BN256 scalars map into `G1`.
    pub fn base_mul(k: &Scalar) -> Self {
        match k {
            Scalar::Bn256(s) => Self::Bn256G1(G1::base_mul(s)),
            Scalar::Ed25519(s) => Self::Ed25519(EdwardsPoint::mul_base(s)),
        }
    }

    /// Untagged group encoding: 64 bytes for `G1`, 128 for `G2`, the
    /// 32-byte compressed Edwards y for Ed25519.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Bn256G1(p) => p.to_bytes().to_vec(),
            Self::Bn256G2(p) => p.to_bytes().to_vec(),
            Self::Ed25519(p) => p.compress().to_bytes().to_vec(),
        }
    }

    /// Decodes the untagged encoding for a known group.
    pub fn deserialize(group: Group, bytes: &[u8]) -> SuiteResult<Self> {
        match group {
            Group::Bn256G1 => G1::from_bytes(bytes)
                .map(Self::Bn256G1)
                .map_err(|_| SuiteError::MalformedPoint),
            Group::Bn256G2 => G2::from_bytes(bytes)
                .map(Self::Bn256G2)
                .map_err(|_| SuiteError::MalformedPoint),
            Group::Ed25519 => {
                let compressed = CompressedEdwardsY::from_slice(bytes)
                    .map_err(|_| SuiteError::MalformedPoint)?;
                compressed
                    .decompress()
                    .map(Self::Ed25519)
                    .ok_or(SuiteError::MalformedPoint)
            }
        }
    }

    /// Tagged wire encoding: the group's 8-byte tag followed by
    /// [`Self::serialize`].
    pub fn marshal(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(8 + self.group().point_bytes());
        out.extend_from_slice(self.group().wire_tag());
        out.extend_from_slice(&self.serialize());
        out
    }

    /// The point factory: reads the 8-byte tag, dispatches to the matching
    /// decoder and fails closed on tags it does not recognize.
    pub fn unmarshal(bytes: &[u8]) -> SuiteResult<Self> {
        if bytes.len() < 8 {
            return Err(SuiteError::UnknownPointType);
        }
        let group = Group::from_wire_tag(&bytes[..8]).ok_or(SuiteError::UnknownPointType)?;
        if bytes.len() != 8 + group.point_bytes() {
            return Err(SuiteError::MalformedPoint);
        }
        Self::deserialize(group, &bytes[8..])
    }
}

/// A scalar carrying its curve family.
#[derive(Clone, Eq, PartialEq)]
pub enum Scalar {
    Bn256(BnScalar),
    Ed25519(EdScalar),
}

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-scalar(0x{})", self.group(), hex::encode(self.serialize()))
    }
}

impl Scalar {
    /// The family the scalar acts on; BN256 scalars act on both `G1` and
    /// `G2`, reported as `Bn256G1`.
    pub fn group(&self) -> Group {
        match self {
            Self::Bn256(_) => Group::Bn256G1,
            Self::Ed25519(_) => Group::Ed25519,
        }
    }

    pub fn random<R: Rng + CryptoRng>(group: Group, rng: &mut R) -> Self {
        match group {
            Group::Bn256G1 | Group::Bn256G2 => Self::Bn256(BnScalar::random(rng)),
            Group::Ed25519 => Self::Ed25519(EdScalar::random(rng)),
        }
    }

    pub fn zero(group: Group) -> Self {
        match group {
            Group::Bn256G1 | Group::Bn256G2 => Self::Bn256(BnScalar::zero()),
            Group::Ed25519 => Self::Ed25519(EdScalar::ZERO),
        }
    }

    pub fn one(group: Group) -> Self {
        match group {
            Group::Bn256G1 | Group::Bn256G2 => Self::Bn256(BnScalar::one()),
            Group::Ed25519 => Self::Ed25519(EdScalar::ONE),
        }
    }

    pub fn add(&self, other: &Self) -> SuiteResult<Self> {
        match (self, other) {
            (Self::Bn256(a), Self::Bn256(b)) => Ok(Self::Bn256(a.add(b))),
            (Self::Ed25519(a), Self::Ed25519(b)) => Ok(Self::Ed25519(a + b)),
            (_, _) => Err(SuiteError::CurveMismatch),
        }
    }

    pub fn mul(&self, other: &Self) -> SuiteResult<Self> {
        match (self, other) {
            (Self::Bn256(a), Self::Bn256(b)) => Ok(Self::Bn256(a.mul(b))),
            (Self::Ed25519(a), Self::Ed25519(b)) => Ok(Self::Ed25519(a * b)),
            (_, _) => Err(SuiteError::CurveMismatch),
        }
    }

    pub fn neg(&self) -> Self {
        match self {
            Self::Bn256(s) => Self::Bn256(s.neg()),
            Self::Ed25519(s) => Self::Ed25519(-s),
        }
    }

    pub fn invert(&self) -> SuiteResult<Self> {
        match self {
            Self::Bn256(s) => s
                .invert()
                .map(Self::Bn256)
                .map_err(|_| SuiteError::NotInvertible),
            Self::Ed25519(s) => {
                if s == &EdScalar::ZERO {
                    return Err(SuiteError::NotInvertible);
                }
                Ok(Self::Ed25519(s.invert()))
            }
        }
    }

    /// 32-byte encoding. BN256 scalars are big-endian, Ed25519 scalars
    /// little-endian; the conventions never cross this match.
    pub fn serialize(&self) -> Vec<u8> {
        match self {
            Self::Bn256(s) => s.to_bytes().to_vec(),
            Self::Ed25519(s) => s.to_bytes().to_vec(),
        }
    }

    pub fn deserialize(group: Group, bytes: &[u8]) -> SuiteResult<Self> {
        if bytes.len() != group.scalar_bytes() {
            return Err(SuiteError::MalformedScalar);
        }
        match group {
            Group::Bn256G1 | Group::Bn256G2 => BnScalar::from_bytes(bytes)
                .map(Self::Bn256)
                .map_err(|_| SuiteError::MalformedScalar),
            Group::Ed25519 => {
                let mut raw = [0u8; 32];
                raw.copy_from_slice(bytes);
                Option::<EdScalar>::from(EdScalar::from_canonical_bytes(raw))
                    .map(Self::Ed25519)
                    .ok_or(SuiteError::MalformedScalar)
            }
        }
    }
}

#[derive(Serialize, Deserialize)]
struct PointSerializationHelper {
    raw: Vec<u8>,
}

impl Serialize for Point {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let helper = PointSerializationHelper {
            raw: self.marshal(),
        };
        helper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Point {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let helper: PointSerializationHelper = Deserialize::deserialize(deserializer)?;
        Point::unmarshal(&helper.raw).map_err(|e| serde::de::Error::custom(format!("{e:?}")))
    }
}

#[derive(Serialize, Deserialize)]
struct ScalarSerializationHelper {
    group: Group,
    raw: Vec<u8>,
}

impl Serialize for Scalar {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let helper = ScalarSerializationHelper {
            group: self.group(),
            raw: self.serialize(),
        };
        helper.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for Scalar {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let helper: ScalarSerializationHelper = Deserialize::deserialize(deserializer)?;
        Scalar::deserialize(helper.group, &helper.raw)
            .map_err(|e| serde::de::Error::custom(format!("{e:?}")))
    }
}
