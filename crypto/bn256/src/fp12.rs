//! The full extension `GF(p¹²) = GF(p⁶)[ω] / (ω² − τ)`.

use crate::constants::{XI_TO_P_MINUS_1_OVER_6, XI_TO_P_SQUARED_MINUS_1_OVER_6};
use crate::fp6::Fp6;
use crate::{Bn256Error, Bn256Result};
use num_bigint::BigUint;

/// An element `x·ω + y` of `GF(p¹²)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fp12 {
    pub(crate) x: Fp6,
    pub(crate) y: Fp6,
}

impl Fp12 {
    pub fn one() -> Self {
        Self {
            x: Fp6::zero(),
            y: Fp6::one(),
        }
    }

    pub fn is_one(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    pub fn mul(&self, other: &Self) -> Self {
        // (ax ω + ay)(bx ω + by) with ω² = τ.
        let tx = self.x.mul(&other.y).add(&self.y.mul(&other.x));
        let ty = self.y.mul(&other.y).add(&self.x.mul(&other.x).mul_tau());
        Self { x: tx, y: ty }
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Conjugation over `GF(p⁶)`, i.e. the p⁶-power map.
    pub(crate) fn conjugate(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y.clone(),
        }
    }

    pub fn invert(&self) -> Bn256Result<Self> {
        let t = self.y.square().sub(&self.x.square().mul_tau());
        let tinv = t.invert()?;
        Ok(Self {
            x: self.x.mul(&tinv).neg(),
            y: self.y.mul(&tinv),
        })
    }

    pub fn exp(&self, e: &BigUint) -> Self {
        let mut res = Self::one();
        let mut base = self.clone();
        for i in 0..e.bits() {
            if e.bit(i) {
                res = res.mul(&base);
            }
            base = base.square();
        }
        res
    }

    pub(crate) fn frobenius(&self) -> Self {
        Self {
            x: self.x.frobenius().mul_fp2(&XI_TO_P_MINUS_1_OVER_6),
            y: self.y.frobenius(),
        }
    }

    pub(crate) fn frobenius_p2(&self) -> Self {
        Self {
            x: self.x.frobenius_p2().mul_gfp(&XI_TO_P_SQUARED_MINUS_1_OVER_6),
            y: self.y.frobenius_p2(),
        }
    }

    /// 384-byte encoding: the ω coefficient first, then the constant term.
    pub(crate) fn to_bytes(&self) -> [u8; 384] {
        let mut out = [0u8; 384];
        out[..192].copy_from_slice(&self.x.to_bytes());
        out[192..].copy_from_slice(&self.y.to_bytes());
        out
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        if bytes.len() != 384 {
            return Err(Bn256Error::InvalidFieldElement);
        }
        Ok(Self {
            x: Fp6::from_bytes(&bytes[..192])?,
            y: Fp6::from_bytes(&bytes[192..])?,
        })
    }
}
