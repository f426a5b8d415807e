//! Scalars modulo the group order `r`.

use crate::constants::ORDER;
use crate::{Bn256Error, Bn256Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::{CryptoRng, Rng};
use std::fmt;
use zeroize::Zeroize;

/// An integer modulo the order of `G1`, `G2` and `GT`, always reduced.
#[derive(Clone, Eq, PartialEq)]
pub struct Scalar(BigUint);

impl fmt::Debug for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Scalar(0x{})", hex::encode(self.to_bytes()))
    }
}

impl Zeroize for Scalar {
    fn zeroize(&mut self) {
        self.0.set_zero();
    }
}

impl Drop for Scalar {
    fn drop(&mut self) {
        self.zeroize();
    }
}

impl Scalar {
    pub fn zero() -> Self {
        Self(BigUint::zero())
    }

    pub fn one() -> Self {
        Self(BigUint::one())
    }

    pub fn from_u64(v: u64) -> Self {
        Self(BigUint::from(v) % &*ORDER)
    }

    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Samples a uniform nonzero scalar by rejection.
    pub fn random<R: Rng + CryptoRng>(rng: &mut R) -> Self {
        loop {
            let mut buf = [0u8; 32];
            rng.fill_bytes(&mut buf);
            let v = BigUint::from_bytes_be(&buf);
            buf.zeroize();
            if !v.is_zero() && v < *ORDER {
                return Self(v);
            }
        }
    }

    pub fn add(&self, other: &Self) -> Self {
        Self((&self.0 + &other.0) % &*ORDER)
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self(((&self.0 + &*ORDER) - &other.0) % &*ORDER)
    }

    pub fn mul(&self, other: &Self) -> Self {
        Self((&self.0 * &other.0) % &*ORDER)
    }

    pub fn neg(&self) -> Self {
        if self.0.is_zero() {
            Self::zero()
        } else {
            Self(&*ORDER - &self.0)
        }
    }

    pub fn invert(&self) -> Bn256Result<Self> {
        if self.0.is_zero() {
            return Err(Bn256Error::NotInvertible);
        }
        let e = &*ORDER - BigUint::from(2u32);
        Ok(Self(self.0.modpow(&e, &ORDER)))
    }

    /// Fixed-width 32-byte big-endian encoding.
    pub fn to_bytes(&self) -> [u8; 32] {
        let mut out = [0u8; 32];
        let raw = self.0.to_bytes_be();
        out[32 - raw.len()..].copy_from_slice(&raw);
        out
    }

    /// Parses 32 big-endian bytes, rejecting values `>=` the group order.
    pub fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        if bytes.len() != 32 {
            return Err(Bn256Error::InvalidScalar);
        }
        let v = BigUint::from_bytes_be(bytes);
        if v >= *ORDER {
            return Err(Bn256Error::InvalidScalar);
        }
        Ok(Self(v))
    }

    /// Reduces an arbitrary-length big-endian integer modulo the order.
    /// Used for hash outputs, so the bias of plain reduction is accepted.
    pub fn reduce_wide_be(bytes: &[u8]) -> Self {
        Self(BigUint::from_bytes_be(bytes) % &*ORDER)
    }

    pub(crate) fn as_biguint(&self) -> &BigUint {
        &self.0
    }
}
