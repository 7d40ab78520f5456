//! Per-asset deposit policy.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

/// Deposit policy for one asset: whitelist membership and the minimum
/// deposit floor. The floor doubles as the fee floor at finalization.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssetPolicy {
    pub listed: bool,
    pub min_amount: U256,
}

/// Policy table keyed by asset address, with the zero address standing for
/// the native asset. Unknown assets are unlisted with a zero floor.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AssetPolicyTable {
    policies: BTreeMap<Address, AssetPolicy>,
}

impl AssetPolicyTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_listed(&self, asset: Address) -> bool {
        self.policies.get(&asset).is_some_and(|p| p.listed)
    }

    pub fn min_amount(&self, asset: Address) -> U256 {
        self.policies
            .get(&asset)
            .map(|p| p.min_amount)
            .unwrap_or_default()
    }

    pub(crate) fn set_listed(&mut self, asset: Address, listed: bool) {
        self.policies.entry(asset).or_default().listed = listed;
    }

    pub(crate) fn set_min_amount(&mut self, asset: Address, min_amount: U256) {
        self.policies.entry(asset).or_default().min_amount = min_amount;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_asset_defaults() {
        let table = AssetPolicyTable::new();
        let asset = Address::from([0x33; 20]);
        assert!(!table.is_listed(asset));
        assert_eq!(table.min_amount(asset), U256::ZERO);
    }

    #[test]
    fn test_listing_and_floor_are_independent() {
        let mut table = AssetPolicyTable::new();
        let asset = Address::from([0x33; 20]);

        table.set_min_amount(asset, U256::from(10u64));
        assert!(!table.is_listed(asset));
        assert_eq!(table.min_amount(asset), U256::from(10u64));

        table.set_listed(asset, true);
        assert!(table.is_listed(asset));

        // Delisting keeps the floor.
        table.set_listed(asset, false);
        assert_eq!(table.min_amount(asset), U256::from(10u64));
    }
}
