//! The Boneh-Drijvers-Neven aggregation scheme.
//!
//! Each roster key is weighted by a coefficient derived from a SHAKE-256
//! hash of the whole roster before summing. A participant who registers a
//! function of other participants' keys can no longer cancel them out of
//! the aggregate, which defeats the classic rogue-key attack on plain BLS
//! aggregation.

use crate::bls::{PublicKey, SecretKey, Signature};
use crate::mask::Mask;
use crate::{BlsError, BlsResult};
use byzcoin_crypto_bn256::{G1, G2, Scalar};
use sha3::digest::{ExtendableOutput, Update, XofReader};
use sha3::Shake256;

/// Bytes squeezed from the XOF per roster key.
const COEF_BYTES: usize = 16;

/// Derives one aggregation coefficient per roster key. The XOF absorbs
/// the 128-byte encodings of all keys in roster order, so any change of
/// key material or ordering changes every coefficient.
pub fn hash_public_keys(publics: &[PublicKey]) -> Vec<Scalar> {
    let mut xof = Shake256::default();
    for pk in publics {
        xof.update(&pk.to_bytes());
    }
    let mut reader = xof.finalize_xof();
    let mut out = Vec::with_capacity(publics.len());
    for _ in 0..publics.len() {
        let mut chunk = [0u8; COEF_BYTES];
        reader.read(&mut chunk);
        out.push(Scalar::reduce_wide_be(&chunk));
    }
    out
}

/// Aggregates the enabled public keys of the mask as `Σ (cᵢ + 1)·Xᵢ`.
pub fn aggregate_public_keys(mask: &Mask) -> BlsResult<PublicKey> {
    if mask.count_enabled() == 0 {
        return Err(BlsError::EmptyAggregation);
    }
    let coefs = hash_public_keys(mask.publics());
    let mut acc = G2::identity();
    for i in mask.indices_enabled() {
        let c = coefs[i].add(&Scalar::one());
        acc = acc.add(&mask.publics()[i].point().scalar_mul(&c));
    }
    Ok(PublicKey::from_point(acc))
}

/// Aggregates partial signatures as `Σ (cᵢ + 1)·sᵢ`, where `sigs` holds
/// one signature per enabled mask bit, in roster order.
pub fn aggregate_signatures(sigs: &[Signature], mask: &Mask) -> BlsResult<Signature> {
    let enabled = mask.indices_enabled();
    if enabled.len() != sigs.len() {
        return Err(BlsError::InvalidMaskLength);
    }
    if sigs.is_empty() {
        return Err(BlsError::EmptyAggregation);
    }
    let coefs = hash_public_keys(mask.publics());
    let mut acc = G1::identity();
    for (sig, &i) in sigs.iter().zip(enabled.iter()) {
        let c = coefs[i].add(&Scalar::one());
        acc = acc.add(&sig.point().scalar_mul(&c));
    }
    Ok(Signature::from_point(acc))
}

/// Signs with plain BLS; the weighting happens at aggregation time only.
pub fn sign(sk: &SecretKey, msg: &[u8]) -> Signature {
    sk.sign(msg)
}

/// Verifies an aggregate signature against the mask's weighted aggregate
/// key.
pub fn verify(mask: &Mask, msg: &[u8], sig: &Signature) -> BlsResult<()> {
    let agg = aggregate_public_keys(mask)?;
    agg.verify(msg, sig)
}
