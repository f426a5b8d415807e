//! The quadratic extension `GF(p²) = GF(p)[i] / (i² + 1)`.

use crate::fp;
use crate::{Bn256Error, Bn256Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

/// An element `x·i + y` of `GF(p²)`, both coordinates reduced into `[0, p)`.
#[derive(Clone, Eq, PartialEq)]
pub struct Fp2 {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
}

impl fmt::Debug for Fp2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Fp2({}*i + {})",
            hex::encode(fp::to_bytes(&self.x)),
            hex::encode(fp::to_bytes(&self.y))
        )
    }
}

impl Fp2 {
    pub(crate) fn new(x: BigUint, y: BigUint) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::zero(),
        }
    }

    pub fn one() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
        }
    }

    pub fn is_zero(&self) -> bool {
        self.x.is_zero() && self.y.is_zero()
    }

    pub fn is_one(&self) -> bool {
        self.x.is_zero() && self.y.is_one()
    }

    pub fn add(&self, other: &Self) -> Self {
        Self {
            x: fp::add(&self.x, &other.x),
            y: fp::add(&self.y, &other.y),
        }
    }

    pub fn sub(&self, other: &Self) -> Self {
        Self {
            x: fp::sub(&self.x, &other.x),
            y: fp::sub(&self.y, &other.y),
        }
    }

    pub fn double(&self) -> Self {
        self.add(self)
    }

    pub fn neg(&self) -> Self {
        Self {
            x: fp::neg(&self.x),
            y: fp::neg(&self.y),
        }
    }

    /// The Galois conjugate `−x·i + y`, i.e. the image under `a ↦ aᵖ`.
    pub fn conjugate(&self) -> Self {
        Self {
            x: fp::neg(&self.x),
            y: self.y.clone(),
        }
    }

    pub fn mul(&self, other: &Self) -> Self {
        // (x1 i + y1)(x2 i + y2) = (x1 y2 + x2 y1) i + (y1 y2 − x1 x2)
        let tx = fp::add(&fp::mul(&self.x, &other.y), &fp::mul(&other.x, &self.y));
        let ty = fp::sub(&fp::mul(&self.y, &other.y), &fp::mul(&self.x, &other.x));
        Self { x: tx, y: ty }
    }

    pub fn mul_scalar(&self, k: &BigUint) -> Self {
        Self {
            x: fp::mul(&self.x, k),
            y: fp::mul(&self.y, k),
        }
    }

    pub fn square(&self) -> Self {
        self.mul(self)
    }

    /// Multiplies by the sextic non-residue `ξ = i + 3`.
    pub(crate) fn mul_xi(&self) -> Self {
        // (i + 3)(x i + y) = (3x + y) i + (3y − x)
        let three = BigUint::from(3u32);
        let tx = fp::add(&fp::mul(&self.x, &three), &self.y);
        let ty = fp::sub(&fp::mul(&self.y, &three), &self.x);
        Self { x: tx, y: ty }
    }

    pub fn invert(&self) -> Bn256Result<Self> {
        if self.is_zero() {
            return Err(Bn256Error::NotInvertible);
        }
        // 1/(x i + y) = (−x i + y) / (x² + y²)
        let t = fp::add(&fp::mul(&self.x, &self.x), &fp::mul(&self.y, &self.y));
        let t = fp::inv(&t);
        Ok(Self {
            x: fp::mul(&fp::neg(&self.x), &t),
            y: fp::mul(&self.y, &t),
        })
    }

    pub fn exp(&self, e: &BigUint) -> Self {
        let mut res = Self::one();
        let mut base = self.clone();
        let bits = e.bits();
        for i in 0..bits {
            if e.bit(i) {
                res = res.mul(&base);
            }
            base = base.square();
        }
        res
    }

    /// Encodes as 64 big-endian bytes, `x` coordinate first.
    pub(crate) fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        out[..32].copy_from_slice(&fp::to_bytes(&self.x));
        out[32..].copy_from_slice(&fp::to_bytes(&self.y));
        out
    }

    pub(crate) fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        if bytes.len() != 64 {
            return Err(Bn256Error::InvalidFieldElement);
        }
        let x = fp::from_bytes(&bytes[..32]).ok_or(Bn256Error::InvalidFieldElement)?;
        let y = fp::from_bytes(&bytes[32..]).ok_or(Bn256Error::InvalidFieldElement)?;
        Ok(Self { x, y })
    }
}
