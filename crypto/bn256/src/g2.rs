//! The group `G2`: the order-`r` subgroup of the sextic twist
//! `y² = x³ + b'` over `GF(p²)`.
//!
//! Unlike `G1` the twist group has a large cofactor, so deserialization
//! checks subgroup membership in addition to the curve equation.

use crate::constants::{G2_GEN_X, G2_GEN_Y, ORDER, TWIST_B};
use crate::fp2::Fp2;
use crate::scalar::Scalar;
use crate::{Bn256Error, Bn256Result};
use num_bigint::BigUint;
use std::fmt;

#[derive(Clone)]
pub struct G2 {
    pub(crate) x: Fp2,
    pub(crate) y: Fp2,
    pub(crate) z: Fp2,
}

impl fmt::Debug for G2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G2({})", hex::encode(self.to_bytes()))
    }
}

impl PartialEq for G2 {
    fn eq(&self, other: &Self) -> bool {
        self.make_affine() == other.make_affine()
    }
}

impl Eq for G2 {}

#[derive(Eq, PartialEq)]
struct Affine {
    infinity: bool,
    x: Fp2,
    y: Fp2,
}

impl G2 {
    pub fn identity() -> Self {
        Self {
            x: Fp2::zero(),
            y: Fp2::one(),
            z: Fp2::zero(),
        }
    }

    pub fn generator() -> Self {
        Self {
            x: G2_GEN_X.clone(),
            y: G2_GEN_Y.clone(),
            z: Fp2::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    pub fn add(&self, other: &Self) -> Self {
        // add-2007-bl over GF(p²)
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }
        let z1z1 = self.z.square();
        let z2z2 = other.z.square();
        let u1 = self.x.mul(&z2z2);
        let u2 = other.x.mul(&z1z1);
        let s1 = self.y.mul(&other.z).mul(&z2z2);
        let s2 = other.y.mul(&self.z).mul(&z1z1);
        let h = u2.sub(&u1);
        let t = s2.sub(&s1);
        if h.is_zero() && t.is_zero() {
            return self.double();
        }
        let i = h.double().square();
        let j = h.mul(&i);
        let rr = t.double();
        let v = u1.mul(&i);
        let x = rr.square().sub(&j).sub(&v.double());
        let s1j2 = s1.mul(&j).double();
        let y = rr.mul(&v.sub(&x)).sub(&s1j2);
        let tz = self.z.add(&other.z);
        let z = tz.square().sub(&z1z1).sub(&z2z2).mul(&h);
        Self { x, y, z }
    }

    pub fn double(&self) -> Self {
        // dbl-2009-l over GF(p²)
        let a = self.x.square();
        let b = self.y.square();
        let c = b.square();
        let t = self.x.add(&b).square().sub(&a).sub(&c);
        let d = t.double();
        let e = a.double().add(&a);
        let f = e.square();
        let x = f.sub(&d.double());
        let c8 = c.double().double().double();
        let y = e.mul(&d.sub(&x)).sub(&c8);
        let z = self.y.mul(&self.z).double();
        Self { x, y, z }
    }

    pub fn neg(&self) -> Self {
        if self.is_infinity() {
            return Self::identity();
        }
        Self {
            x: self.x.clone(),
            y: self.y.neg(),
            z: self.z.clone(),
        }
    }

    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        self.mul_big(k.as_biguint())
    }

    pub fn base_mul(k: &Scalar) -> Self {
        Self::generator().scalar_mul(k)
    }

    pub(crate) fn mul_big(&self, e: &BigUint) -> Self {
        let mut acc = Self::identity();
        for i in (0..e.bits()).rev() {
            acc = acc.double();
            if e.bit(i) {
                acc = acc.add(self);
            }
        }
        acc
    }

    fn make_affine(&self) -> Affine {
        if self.is_infinity() {
            return Affine {
                infinity: true,
                x: Fp2::zero(),
                y: Fp2::zero(),
            };
        }
        // z is nonzero here, the inversion cannot fail.
        let zinv = self.z.invert().unwrap_or_else(|_| Fp2::zero());
        let zinv2 = zinv.square();
        Affine {
            infinity: false,
            x: self.x.mul(&zinv2),
            y: self.y.mul(&zinv2.mul(&zinv)),
        }
    }

    /// Affine coordinates; the flag is true at infinity.
    pub(crate) fn affine_coordinates(&self) -> (Fp2, Fp2, bool) {
        let a = self.make_affine();
        (a.x, a.y, a.infinity)
    }

    /// 128-byte big-endian `x.x ‖ x.y ‖ y.x ‖ y.y` encoding; infinity is
    /// all zeros.
    pub fn to_bytes(&self) -> [u8; 128] {
        let mut out = [0u8; 128];
        let a = self.make_affine();
        if a.infinity {
            return out;
        }
        out[..64].copy_from_slice(&a.x.to_bytes());
        out[64..].copy_from_slice(&a.y.to_bytes());
        out
    }

    /// Parses the 128-byte encoding, rejecting points off the twist or
    /// outside the order-`r` subgroup.
    pub fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        if bytes.len() != 128 {
            return Err(Bn256Error::InvalidPoint);
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x = Fp2::from_bytes(&bytes[..64]).map_err(|_| Bn256Error::InvalidPoint)?;
        let y = Fp2::from_bytes(&bytes[64..]).map_err(|_| Bn256Error::InvalidPoint)?;
        let pt = Self {
            x,
            y,
            z: Fp2::one(),
        };
        if !pt.is_on_curve() {
            return Err(Bn256Error::InvalidPoint);
        }
        if !pt.mul_big(&ORDER).is_infinity() {
            return Err(Bn256Error::InvalidPoint);
        }
        Ok(pt)
    }

    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        let a = self.make_affine();
        let lhs = a.y.square();
        let rhs = a.x.square().mul(&a.x).add(&TWIST_B);
        lhs == rhs
    }
}
