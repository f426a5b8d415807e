//! Plain BLS signatures: secret scalars, public keys in `G2`, signatures
//! in `G1`.

use crate::{BlsError, BlsResult};
use byzcoin_crypto_bn256::{pairing, G1, G2, Scalar};
use rand::{CryptoRng, Rng};
use sha2::{Digest, Sha256};
use std::fmt;
use zeroize::{Zeroize, ZeroizeOnDrop};

/// A BLS secret key; zeroized on drop.
#[derive(Zeroize, ZeroizeOnDrop)]
pub struct SecretKey(Scalar);

impl fmt::Debug for SecretKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "SecretKey(REDACTED)")
    }
}

/// A BLS public key, a point of `G2`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct PublicKey(pub(crate) G2);

/// A BLS signature, a point of `G1`.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Signature(pub(crate) G1);

/// Generates a keypair from the given RNG.
pub fn keypair_from_rng<R: Rng + CryptoRng>(rng: &mut R) -> (SecretKey, PublicKey) {
    let sk = Scalar::random(rng);
    let pk = PublicKey(G2::base_mul(&sk));
    (SecretKey(sk), pk)
}

/// Maps a message into `G1` by reducing its SHA-256 digest to a scalar
/// and multiplying the generator.
///
/// This is not a general-purpose hash-to-curve: the discrete log of the
/// result relative to the generator is known to anyone. It is kept for
/// wire compatibility with the conodes and must not be reused elsewhere.
pub(crate) fn hash_to_point(msg: &[u8]) -> G1 {
    let digest = Sha256::digest(msg);
    G1::base_mul(&Scalar::reduce_wide_be(&digest))
}

impl SecretKey {
    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Self> {
        Scalar::from_bytes(bytes)
            .map(Self)
            .map_err(|_| BlsError::MalformedEncoding)
    }

    pub fn to_bytes(&self) -> [u8; 32] {
        self.0.to_bytes()
    }

    pub fn public_key(&self) -> PublicKey {
        PublicKey(G2::base_mul(&self.0))
    }

    /// Signs a message: `x·H(m)`.
    pub fn sign(&self, msg: &[u8]) -> Signature {
        Signature(hash_to_point(msg).scalar_mul(&self.0))
    }
}

impl From<G2> for PublicKey {
    fn from(p: G2) -> Self {
        Self(p)
    }
}

impl PublicKey {
    pub(crate) fn from_point(p: G2) -> Self {
        Self(p)
    }

    pub(crate) fn point(&self) -> &G2 {
        &self.0
    }

    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Self> {
        G2::from_bytes(bytes)
            .map(Self)
            .map_err(|_| BlsError::MalformedEncoding)
    }

    pub fn to_bytes(&self) -> [u8; 128] {
        self.0.to_bytes()
    }

    /// Verifies `e(H(m), X) == e(s, G₂)`.
    pub fn verify(&self, msg: &[u8], sig: &Signature) -> BlsResult<()> {
        let left = pairing(&hash_to_point(msg), &self.0);
        let right = pairing(&sig.0, &G2::generator());
        if left == right {
            Ok(())
        } else {
            Err(BlsError::InvalidSignature)
        }
    }
}

impl Signature {
    pub(crate) fn from_point(p: G1) -> Self {
        Self(p)
    }

    pub(crate) fn point(&self) -> &G1 {
        &self.0
    }

    pub fn from_bytes(bytes: &[u8]) -> BlsResult<Self> {
        G1::from_bytes(bytes)
            .map(Self)
            .map_err(|_| BlsError::MalformedEncoding)
    }

    pub fn to_bytes(&self) -> [u8; 64] {
        self.0.to_bytes()
    }
}

/// Sums signatures. Safe only when the corresponding keys are trusted;
/// roster aggregation uses [`crate::bdn`] instead.
pub fn aggregate_signatures(sigs: &[Signature]) -> BlsResult<Signature> {
    if sigs.is_empty() {
        return Err(BlsError::EmptyAggregation);
    }
    let sum = sigs
        .iter()
        .fold(G1::identity(), |acc, s| acc.add(&s.0));
    Ok(Signature(sum))
}

/// Sums public keys, for verifying a plain aggregate signature.
pub fn aggregate_public_keys(keys: &[PublicKey]) -> BlsResult<PublicKey> {
    if keys.is_empty() {
        return Err(BlsError::EmptyAggregation);
    }
    let sum = keys
        .iter()
        .fold(G2::identity(), |acc, k| acc.add(&k.0));
    Ok(PublicKey(sum))
}
