//! The sextic extension `GF(p⁶) = GF(p²)[τ] / (τ³ − ξ)` with `ξ = i + 3`.

use crate::constants::{XI_TO_2P_MINUS_2_OVER_3, XI_TO_2P_SQUARED_MINUS_2_OVER_3, XI_TO_P_MINUS_1_OVER_3, XI_TO_P_SQUARED_MINUS_1_OVER_3};
use crate::fp2::Fp2;
use crate::{Bn256Error, Bn256Result};
use num_bigint::BigUint;

/// An element `x·τ² + y·τ + z` of `GF(p⁶)`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Fp6 {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl Fp6 {
    pub fn zero() -> Self {
        Self {
            x: Fp2::zero(),
            y: Fp2::zero(),
            z: Fp2::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            x: Fp2::zero(),
            y: Fp2::zero(),
            z: Fp2::one(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.x.is_zero() && self.y.is_zero() && self.z.is_one()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            x: self.x.add(&other.x),
            y: self.y.add(&other.y),
            z: self.z.add(&other.z),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            x: self.x.sub(&other.x),
            y: self.y.sub(&other.y),
            z: self.z.sub(&other.z),
        }
    }

    pub fn neg(&self) -> Self {
        Self {
            x: self.x.neg(),
            y: self.y.neg(),
            z: self.z.neg(),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        // Schoolbook product collecting coefficients of τ⁴..τ⁰, then
        // folding with τ³ = ξ so τ⁴ = ξτ.
        let c4 = self.x.mul(&other.x);
        let c3 = self.x.mul(&other.y).add(&self.y.mul(&other.x));
        let c2 = self
            .x
            .mul(&other.z)
            .add(&self.y.mul(&other.y))
            .add(&self.z.mul(&other.x));
        let c1 = self.y.mul(&other.z).add(&self.z.mul(&other.y));
        let c0 = self.z.mul(&other.z);
        Self {
            x: c2,
            y: c1.add(&c4.mul_xi()),
            z: c0.add(&c3.mul_xi()),
        }
    }

    pub fn mul_fp2(&self, b: &Fp2) -> Self {
        Self {
            x: self.x.mul(b),
            y: self.y.mul(b),
            z: self.z.mul(b),
        }
    }

    pub fn mul_gfp(&self, k: &BigUint) -> Self {
        Self {
            x: self.x.mul_scalar(k),
            y: self.y.mul_scalar(k),
            z: self.z.mul_scalar(k),
        }
    }

    pub fn square(&self) -> Self {
        self.mul(self)
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

    /// Multiplies by `τ`.
    pub(crate) fn mul_tau(&self) -> Self {
        // τ·(x τ² + y τ + z) = y τ² + z τ + x ξ
        Self {
            x: self.y.clone(),
            y: self.z.clone(),
            z: self.x.mul_xi(),
        }
    }

    pub fn invert(&self) -> Bn256Result<Self> {
        // Algorithm 17 of "Implementing cryptographic pairings over BN
        // curves" (Devegili et al.).
        let a = self.z.square().sub(&self.x.mul(&self.y).mul_xi());
        let b = self.x.square().mul_xi().sub(&self.y.mul(&self.z));
        let c = self.y.square().sub(&self.x.mul(&self.z));
        let f = c
            .mul(&self.y)
            .mul_xi()
            .add(&a.mul(&self.z))
            .add(&b.mul(&self.x).mul_xi());
        if f.is_zero() {
            return Err(Bn256Error::NotInvertible);
        }
        let f = f.invert()?;
        Ok(Self {
            x: c.mul(&f),
            y: b.mul(&f),
            z: a.mul(&f),
        })
    }

    /// The p-power Frobenius.
    pub(crate) fn frobenius(&self) -> Self {
        Self {
            x: self.x.conjugate().mul(&XI_TO_2P_MINUS_2_OVER_3),
            y: self.y.conjugate().mul(&XI_TO_P_MINUS_1_OVER_3),
            z: self.z.conjugate(),
        }
    }

    /// The p²-power Frobenius; its coefficients lie in the base field.
    pub(crate) fn frobenius_p2(&self) -> Self {
        Self {
            x: self.x.mul_scalar(&XI_TO_2P_SQUARED_MINUS_2_OVER_3),
            y: self.y.mul_scalar(&XI_TO_P_SQUARED_MINUS_1_OVER_3),
            z: self.z.clone(),
        }
    }

    /// 192-byte encoding, coefficients of τ², τ, 1 in that order.
    pub(crate) fn to_bytes(&self) -> [u8; 192] {
        let mut out = [0u8; 192];
        out[..64].copy_from_slice(&self.x.to_bytes());
        out[64..128].copy_from_slice(&self.y.to_bytes());
        out[128..].copy_from_slice(&self.z.to_bytes());
        out
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        if bytes.len() != 192 {
            return Err(Bn256Error::InvalidFieldElement);
        }
        Ok(Self {
            x: Fp2::from_bytes(&bytes[..64])?,
            y: Fp2::from_bytes(&bytes[64..128])?,
            z: Fp2::from_bytes(&bytes[128..])?,
        })
    }
}
