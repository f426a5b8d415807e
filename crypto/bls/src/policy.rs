//! Verification policies deciding whether a mask carries enough
//! participants for an aggregate signature to count.

use crate::mask::Mask;
use crate::{BlsError, BlsResult};

/// The minimum number of honest participants among `n` nodes when up to
/// `⌊(n−1)/3⌋` may be Byzantine: `n − (n−1)/3`.
pub fn byzantine_threshold(n: usize) -> usize {
    if n == 0 {
        return 0;
    }
    n - (n - 1) / 3
}

pub trait Policy {
    /// Checks the participation recorded in the mask.
    fn check(&self, mask: &Mask) -> BlsResult<()>;
}

/// Requires every roster member to have signed.
#[derive(Clone, Copy, Debug, Default)]
pub struct CompletePolicy;

impl Policy for CompletePolicy {
    fn check(&self, mask: &Mask) -> BlsResult<()> {
        if mask.count_enabled() == mask.len() {
            Ok(())
        } else {
            Err(BlsError::NotEnoughParticipants)
        }
    }
}

/// Requires at least `threshold` signers. The default threshold tolerates
/// the Byzantine third of the roster.
#[derive(Clone, Copy, Debug)]
pub struct ThresholdPolicy {
    threshold: usize,
}

impl ThresholdPolicy {
    pub fn new(threshold: usize) -> Self {
        Self { threshold }
    }

    /// Policy with the default threshold `n − (n−1)/3` for a roster of
    /// size `n`.
    pub fn byzantine(n: usize) -> Self {
        Self {
            threshold: byzantine_threshold(n),
        }
    }

    pub fn threshold(&self) -> usize {
        self.threshold
    }
}

impl Policy for ThresholdPolicy {
    fn check(&self, mask: &Mask) -> BlsResult<()> {
        if mask.count_enabled() >= self.threshold {
            Ok(())
        } else {
            Err(BlsError::NotEnoughParticipants)
        }
    }
}
