//! Construction-time configuration and the live fee policy.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

/// Parameters the bridge state is constructed with.
///
/// The owner and fee wallet are fixed at construction; the fee rate and the
/// fee wallet can later be changed through owner-gated controls.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BridgeConfig {
    pub owner: Address,
    pub fee_wallet: Address,
    /// Proportional settlement fee in units of 1/1000 of the principal.
    pub fee_rate_per_mille: u64,
}

/// Live fee policy applied when a transfer settles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FeeConfig {
    rate_per_mille: u64,
    fee_wallet: Address,
}

impl FeeConfig {
    pub fn new(rate_per_mille: u64, fee_wallet: Address) -> Self {
        Self {
            rate_per_mille,
            fee_wallet,
        }
    }

    pub fn rate_per_mille(&self) -> u64 {
        self.rate_per_mille
    }

    pub fn fee_wallet(&self) -> Address {
        self.fee_wallet
    }

    pub(crate) fn set_rate(&mut self, rate_per_mille: u64) {
        self.rate_per_mille = rate_per_mille;
    }

    pub(crate) fn set_wallet(&mut self, fee_wallet: Address) {
        self.fee_wallet = fee_wallet;
    }
}
