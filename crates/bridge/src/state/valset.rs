//! Stored validator-set checkpoint.

use alloy_primitives::B256;
use serde::{Deserialize, Serialize};

/// The trust anchor for the current validator set.
///
/// Only the digest is stored; the membership itself is supplied by callers
/// and authenticated by recomputing the digest against this checkpoint. The
/// rotation nonce advances by one on every successful rotation, so a digest
/// is only ever valid at the nonce it was installed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValsetCheckpoint {
    digest: B256,
    rotation_nonce: u64,
    power_threshold: u64,
}

impl ValsetCheckpoint {
    pub fn new(digest: B256, rotation_nonce: u64, power_threshold: u64) -> Self {
        Self {
            digest,
            rotation_nonce,
            power_threshold,
        }
    }

    pub fn digest(&self) -> B256 {
        self.digest
    }

    pub fn rotation_nonce(&self) -> u64 {
        self.rotation_nonce
    }

    pub fn power_threshold(&self) -> u64 {
        self.power_threshold
    }
}
