//! Signature verification dispatch for the access-control layer.

use crate::group::Point;
use crate::{schnorr, SuiteError, SuiteResult};
use byzcoin_crypto_bls::bls::{PublicKey, Signature};

/// Verifies a signature under whichever scheme the public key's family
/// uses: Schnorr for Ed25519 keys, BLS for BN256 `G2` keys.
///
/// `Err` means the inputs were malformed for that family; `Ok(false)`
/// means verification ran and rejected the signature. BN256 `G1` points
/// are not public keys of any scheme.
pub fn verify_signature(pk: &Point, msg: &[u8], sig: &[u8]) -> SuiteResult<bool> {
    match pk {
        Point::Ed25519(_) => schnorr::verify(pk, msg, sig),
        Point::Bn256G2(p) => {
            let sig = Signature::from_bytes(sig).map_err(|_| SuiteError::MalformedSignature)?;
            Ok(PublicKey::from(p.clone()).verify(msg, &sig).is_ok())
        }
        Point::Bn256G1(_) => Err(SuiteError::CurveMismatch),
    }
}
