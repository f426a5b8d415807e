//! The pairing target group `GT`, an order-`r` multiplicative subgroup of
//! `GF(p¹²)*`.

use crate::fp12::Fp12;
use crate::scalar::Scalar;
use crate::Bn256Result;
use std::fmt;

#[derive(Clone, Eq, PartialEq)]
pub struct Gt(pub(crate) Fp12);

impl fmt::Debug for Gt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Gt({})", hex::encode(self.to_bytes()))
    }
}

impl Gt {
    pub fn one() -> Self {
        Self(Fp12::one())
    }

    pub fn is_one(&self) -> bool {
        self.0.is_one()
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self(self.0.mul(&other.0))
    }

    pub fn invert(&self) -> Bn256Result<Self> {
        Ok(Self(self.0.invert()?))
    }

    pub fn exp(&self, k: &Scalar) -> Self {
        Self(self.0.exp(k.as_biguint()))
    }

    /// 384-byte big-endian encoding of the underlying `GF(p¹²)` element.
    pub fn to_bytes(&self) -> [u8; 384] {
        self.0.to_bytes()
    }

    /// Parses the 384-byte encoding. Coordinates are range-checked; no
    /// subgroup check is performed.
    pub fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        Ok(Self(Fp12::from_bytes(bytes)?))
    }
}
