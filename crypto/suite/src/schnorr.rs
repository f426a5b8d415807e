//! Schnorr signatures over Ed25519, the per-user identity scheme.
//!
//! The classic scheme, not EdDSA: the nonce is drawn from the caller's
//! RNG rather than derived from the secret key, and the challenge is
//! `SHA-512(R ‖ A ‖ msg)` reduced modulo the group order.

use crate::group::{Group, Point, Scalar};
use crate::{SuiteError, SuiteResult};
use curve25519_dalek::{EdwardsPoint, Scalar as EdScalar};
use rand::{CryptoRng, Rng};
use sha2::{Digest, Sha512};

/// Length of a signature: compressed `R` followed by the 32-byte `s`.
pub const SIGNATURE_BYTES: usize = 64;

/// Generates an Ed25519 keypair `(a, A = a·B)`.
pub fn keypair_from_rng<R: Rng + CryptoRng>(rng: &mut R) -> (Scalar, Point) {
    let sk = Scalar::random(Group::Ed25519, rng);
    let pk = Point::base_mul(&sk);
    (sk, pk)
}

fn challenge(r_bytes: &[u8], pk_bytes: &[u8], msg: &[u8]) -> EdScalar {
    let mut h = Sha512::new();
    h.update(r_bytes);
    h.update(pk_bytes);
    h.update(msg);
    EdScalar::from_bytes_mod_order_wide(&h.finalize().into())
}

/// Signs `msg` with the Ed25519 secret scalar: `R = k·B`, `s = k + h·a`.
/// A BN256 scalar is a `CurveMismatch`.
pub fn sign<R: Rng + CryptoRng>(rng: &mut R, sk: &Scalar, msg: &[u8]) -> SuiteResult<Vec<u8>> {
    let a = match sk {
        Scalar::Ed25519(a) => a,
        Scalar::Bn256(_) => return Err(SuiteError::CurveMismatch),
    };
    let pk = Point::base_mul(sk).serialize();

    let k = EdScalar::random(rng);
    let r = EdwardsPoint::mul_base(&k).compress().to_bytes();

    let h = challenge(&r, &pk, msg);
    let s = k + h * a;

    let mut sig = Vec::with_capacity(SIGNATURE_BYTES);
    sig.extend_from_slice(&r);
    sig.extend_from_slice(&s.to_bytes());
    Ok(sig)
}

/// Verifies `s·B == R + h·A`. `Err` means the inputs could not be parsed;
/// `Ok(false)` means verification ran and failed.
pub fn verify(pk: &Point, msg: &[u8], sig: &[u8]) -> SuiteResult<bool> {
    let a = match pk {
        Point::Ed25519(_) => pk,
        _ => return Err(SuiteError::CurveMismatch),
    };
    if sig.len() != SIGNATURE_BYTES {
        return Err(SuiteError::MalformedSignature);
    }
    let r = Point::deserialize(Group::Ed25519, &sig[..32])
        .map_err(|_| SuiteError::MalformedSignature)?;
    let s = Scalar::deserialize(Group::Ed25519, &sig[32..])
        .map_err(|_| SuiteError::MalformedSignature)?;

    let h = Scalar::Ed25519(challenge(&sig[..32], &a.serialize(), msg));
    let lhs = Point::base_mul(&s);
    let rhs = r.add(&a.mul(&h)?)?;
    Ok(lhs == rhs)
}
