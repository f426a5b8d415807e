//! Participation masks for collective signing.
//!
//! A mask pairs an ordered roster of public keys with a bitset recording
//! who contributed to an aggregate signature. Bit `i` of byte `i / 8`
//! (LSB first) corresponds to roster entry `i`. The plain sum of the
//! enabled keys is kept up to date incrementally as bits are toggled.

use crate::bls::PublicKey;
use crate::{BlsError, BlsResult};
use byzcoin_crypto_bn256::G2;

#[derive(Clone, Debug)]
pub struct Mask {
    publics: Vec<PublicKey>,
    mask: Vec<u8>,
    aggregate: G2,
}

impl Mask {
    /// Creates an all-disabled mask over the given roster. The roster
    /// must not be empty.
    pub fn new(publics: Vec<PublicKey>) -> BlsResult<Self> {
        if publics.is_empty() {
            return Err(BlsError::EmptyRoster);
        }
        let len = publics.len().div_ceil(8);
        Ok(Self {
            publics,
            mask: vec![0u8; len],
            aggregate: G2::identity(),
        })
    }

    /// Number of roster entries.
    pub fn len(&self) -> usize {
        self.publics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.publics.is_empty()
    }

    /// The roster, in the fixed order the bit positions refer to.
    pub fn publics(&self) -> &[PublicKey] {
        &self.publics
    }

    /// The raw bitset, `⌈n/8⌉` bytes.
    pub fn mask_bytes(&self) -> &[u8] {
        &self.mask
    }

    /// Roster position of a key, or `KeyNotFound`.
    pub fn index_of(&self, key: &PublicKey) -> BlsResult<usize> {
        self.publics
            .iter()
            .position(|k| k == key)
            .ok_or(BlsError::KeyNotFound)
    }

    /// Enables or disables the bit belonging to a roster key.
    pub fn set_key(&mut self, key: &PublicKey, enable: bool) -> BlsResult<()> {
        let i = self.index_of(key)?;
        self.set_bit(i, enable)
    }

    pub fn bit(&self, i: usize) -> BlsResult<bool> {
        if i >= self.publics.len() {
            return Err(BlsError::IndexOutOfRange);
        }
        Ok(self.mask[i / 8] & (1 << (i % 8)) != 0)
    }

    /// Enables or disables a participant, updating the cached plain
    /// aggregate by adding the key or its negation.
    pub fn set_bit(&mut self, i: usize, enable: bool) -> BlsResult<()> {
        if i >= self.publics.len() {
            return Err(BlsError::IndexOutOfRange);
        }
        let byte = i / 8;
        let bit = 1u8 << (i % 8);
        if enable && self.mask[byte] & bit == 0 {
            self.mask[byte] |= bit;
            self.aggregate = self.aggregate.add(self.publics[i].point());
        }
        if !enable && self.mask[byte] & bit != 0 {
            self.mask[byte] &= !bit;
            self.aggregate = self.aggregate.add(&self.publics[i].point().neg());
        }
        Ok(())
    }

    /// Replaces the whole bitset. The length must match the roster.
    pub fn set_mask(&mut self, mask: &[u8]) -> BlsResult<()> {
        if mask.len() != self.mask.len() {
            return Err(BlsError::InvalidMaskLength);
        }
        for i in 0..self.publics.len() {
            let bit = 1u8 << (i % 8);
            self.set_bit(i, mask[i / 8] & bit != 0)?;
        }
        Ok(())
    }

    /// Number of enabled participants.
    pub fn count_enabled(&self) -> usize {
        (0..self.publics.len())
            .filter(|&i| self.mask[i / 8] & (1 << (i % 8)) != 0)
            .count()
    }

    /// Roster indices of the enabled participants, ascending.
    pub fn indices_enabled(&self) -> Vec<usize> {
        (0..self.publics.len())
            .filter(|&i| self.mask[i / 8] & (1 << (i % 8)) != 0)
            .collect()
    }

    /// The enabled public keys, in roster order.
    pub fn participants(&self) -> Vec<PublicKey> {
        self.indices_enabled()
            .into_iter()
            .map(|i| self.publics[i].clone())
            .collect()
    }

    /// The plain (unweighted) sum of the enabled keys.
    pub fn aggregate_public_key(&self) -> PublicKey {
        PublicKey::from_point(self.aggregate.clone())
    }
}
