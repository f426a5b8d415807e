//! Arithmetic helpers over the base field `GF(p)`.
//!
//! Every value passed in and returned is in minimal form, i.e. reduced into
//! `[0, p)`. The subtraction helper relies on that invariant.

use crate::constants::P;
use num_bigint::BigUint;
use num_traits::Zero;

pub(crate) fn add(a: &BigUint, b: &BigUint) -> BigUint {
    (a + b) % &*P
}

pub(crate) fn sub(a: &BigUint, b: &BigUint) -> BigUint {
    // a, b < p, so a + p - b never underflows.
    ((a + &*P) - b) % &*P
}

pub(crate) fn mul(a: &BigUint, b: &BigUint) -> BigUint {
    (a * b) % &*P
}

pub(crate) fn neg(a: &BigUint) -> BigUint {
    if a.is_zero() {
        BigUint::zero()
    } else {
        &*P - a
    }
}

/// Inverse by Fermat's little theorem; maps zero to zero, callers guard.
pub(crate) fn inv(a: &BigUint) -> BigUint {
    let e = &*P - BigUint::from(2u32);
    a.modpow(&e, &P)
}

/// Fixed-width big-endian encoding of a reduced field element.
pub(crate) fn to_bytes(a: &BigUint) -> [u8; 32] {
    let mut out = [0u8; 32];
    let raw = a.to_bytes_be();
    out[32 - raw.len()..].copy_from_slice(&raw);
    out
}

/// Parses 32 big-endian bytes, rejecting values `>= p`.
pub(crate) fn from_bytes(bytes: &[u8]) -> Option<BigUint> {
    if bytes.len() != 32 {
        return None;
    }
    let v = BigUint::from_bytes_be(bytes);
    if v >= *P {
        return None;
    }
    Some(v)
}
