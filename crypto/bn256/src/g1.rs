//! The group `G1`: points of `y² = x³ + 3` over the base field.
//!
//! Points are held in Jacobian coordinates; `z = 0` marks the point at
//! infinity. The curve has cofactor one, so every finite point on the curve
//! is in the prime-order subgroup.

use crate::constants::CURVE_B;
use crate::fp;
use crate::scalar::Scalar;
use crate::{Bn256Error, Bn256Result};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use std::fmt;

#[derive(Clone)]
pub struct G1 {
    pub(crate) x: BigUint,
    pub(crate) y: BigUint,
    pub(crate) z: BigUint,
}

impl fmt::Debug for G1 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "G1({})", hex::encode(self.to_bytes()))
    }
}

impl PartialEq for G1 {
    fn eq(&self, other: &Self) -> bool {
        self.make_affine() == other.make_affine()
    }
}

impl Eq for G1 {}

#[derive(Eq, PartialEq)]
struct Affine {
    infinity: bool,
    x: BigUint,
    y: BigUint,
}

impl G1 {
    pub fn identity() -> Self {
        Self {
            x: BigUint::zero(),
            y: BigUint::one(),
            z: BigUint::zero(),
        }
    }

    pub fn generator() -> Self {
        Self {
            x: BigUint::one(),
            y: BigUint::from(2u32),
            z: BigUint::one(),
        }
    }

    pub fn is_infinity(&self) -> bool {
        self.z.is_zero()
    }

    /// Multiplies the generator, `k·G`.
    pub fn base_mul(k: &Scalar) -> Self {
        Self::generator().scalar_mul(k)
    }

    pub fn add(&self, other: &Self) -> Self {
        // add-2007-bl
        if self.is_infinity() {
            return other.clone();
        }
        if other.is_infinity() {
            return self.clone();
        }
        let z1z1 = fp::mul(&self.z, &self.z);
        let z2z2 = fp::mul(&other.z, &other.z);
        let u1 = fp::mul(&self.x, &z2z2);
        let u2 = fp::mul(&other.x, &z1z1);
        let s1 = fp::mul(&fp::mul(&self.y, &other.z), &z2z2);
        let s2 = fp::mul(&fp::mul(&other.y, &self.z), &z1z1);
        let h = fp::sub(&u2, &u1);
        let t = fp::sub(&s2, &s1);
        if h.is_zero() && t.is_zero() {
            return self.double();
        }
        let i = fp::mul(&fp::mul(&BigUint::from(4u32), &h), &h);
        let j = fp::mul(&h, &i);
        let rr = fp::add(&t, &t);
        let v = fp::mul(&u1, &i);
        let x = fp::sub(&fp::sub(&fp::mul(&rr, &rr), &j), &fp::add(&v, &v));
        let s1j2 = fp::add(&fp::mul(&s1, &j), &fp::mul(&s1, &j));
        let y = fp::sub(&fp::mul(&rr, &fp::sub(&v, &x)), &s1j2);
        let tz = fp::add(&self.z, &other.z);
        let z = fp::mul(&fp::sub(&fp::sub(&fp::mul(&tz, &tz), &z1z1), &z2z2), &h);
        Self { x, y, z }
    }

    pub fn double(&self) -> Self {
        // dbl-2009-l
        let a = fp::mul(&self.x, &self.x);
        let b = fp::mul(&self.y, &self.y);
        let c = fp::mul(&b, &b);
        let t = fp::add(&self.x, &b);
        let t = fp::mul(&t, &t);
        let t = fp::sub(&t, &a);
        let t = fp::sub(&t, &c);
        let d = fp::add(&t, &t);
        let e = fp::add(&fp::add(&a, &a), &a);
        let f = fp::mul(&e, &e);
        let x = fp::sub(&f, &fp::add(&d, &d));
        let c8 = fp::mul(&BigUint::from(8u32), &c);
        let y = fp::sub(&fp::mul(&e, &fp::sub(&d, &x)), &c8);
        let z = fp::add(&fp::mul(&self.y, &self.z), &fp::mul(&self.y, &self.z));
        Self { x, y, z }
    }

    pub fn neg(&self) -> Self {
        if self.is_infinity() {
            return Self::identity();
        }
        Self {
            x: self.x.clone(),
            y: fp::neg(&self.y),
            z: self.z.clone(),
        }
    }

    pub fn scalar_mul(&self, k: &Scalar) -> Self {
        self.mul_big(k.as_biguint())
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
                x: BigUint::zero(),
                y: BigUint::zero(),
            };
        }
        let zinv = fp::inv(&self.z);
        let zinv2 = fp::mul(&zinv, &zinv);
        Affine {
            infinity: false,
            x: fp::mul(&self.x, &zinv2),
            y: fp::mul(&fp::mul(&self.y, &zinv2), &zinv),
        }
    }

    /// Affine coordinates; the second return is true at infinity.
    pub(crate) fn affine_coordinates(&self) -> (BigUint, BigUint, bool) {
        let a = self.make_affine();
        (a.x, a.y, a.infinity)
    }

    /// 64-byte big-endian `x ‖ y` encoding; infinity is all zeros.
    pub fn to_bytes(&self) -> [u8; 64] {
        let mut out = [0u8; 64];
        let a = self.make_affine();
        if a.infinity {
            return out;
        }
        out[..32].copy_from_slice(&fp::to_bytes(&a.x));
        out[32..].copy_from_slice(&fp::to_bytes(&a.y));
        out
    }

    /// Parses the 64-byte encoding, rejecting off-curve points.
    pub fn from_bytes(bytes: &[u8]) -> Bn256Result<Self> {
        if bytes.len() != 64 {
            return Err(Bn256Error::InvalidPoint);
        }
        if bytes.iter().all(|&b| b == 0) {
            return Ok(Self::identity());
        }
        let x = fp::from_bytes(&bytes[..32]).ok_or(Bn256Error::InvalidPoint)?;
        let y = fp::from_bytes(&bytes[32..]).ok_or(Bn256Error::InvalidPoint)?;
        let lhs = fp::mul(&y, &y);
        let rhs = fp::add(&fp::mul(&fp::mul(&x, &x), &x), &CURVE_B);
        if lhs != rhs {
            return Err(Bn256Error::InvalidPoint);
        }
        Ok(Self {
            x,
            y,
            z: BigUint::one(),
        })
    }

    pub fn is_on_curve(&self) -> bool {
        if self.is_infinity() {
            return true;
        }
        let a = self.make_affine();
        let lhs = fp::mul(&a.y, &a.y);
        let rhs = fp::add(&fp::mul(&fp::mul(&a.x, &a.x), &a.x), &CURVE_B);
        lhs == rhs
    }
}
