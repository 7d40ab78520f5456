//! The owned bridge state aggregate.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{
    errors::BridgeError,
    guards::{OwnerGate, PauseGate, ReentrancyGuard},
    state::{
        config::{BridgeConfig, FeeConfig},
        ledger::TransferLedger,
        policy::AssetPolicyTable,
        transfer::TransferEvent,
        valset::ValsetCheckpoint,
    },
};

/// The single aggregate holding all bridge state.
///
/// Operations take `&mut BridgeState`, so the type system already rules out
/// concurrent mutation; the embedded [`ReentrancyGuard`] additionally
/// rejects nested entry through the operation wrappers.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BridgeState {
    owner: OwnerGate,
    pause: PauseGate,
    #[serde(skip)]
    reentrancy: ReentrancyGuard,
    valset: Option<ValsetCheckpoint>,
    ledger: TransferLedger,
    assets: AssetPolicyTable,
    fees: FeeConfig,
}

impl BridgeState {
    pub fn new(config: BridgeConfig) -> Self {
        Self {
            owner: OwnerGate::new(config.owner),
            pause: PauseGate::default(),
            reentrancy: ReentrancyGuard::default(),
            valset: None,
            ledger: TransferLedger::new(),
            assets: AssetPolicyTable::new(),
            fees: FeeConfig::new(config.fee_rate_per_mille, config.fee_wallet),
        }
    }

    // Read-only queries.

    pub fn owner(&self) -> Address {
        self.owner.owner()
    }

    pub fn is_paused(&self) -> bool {
        self.pause.is_paused()
    }

    /// The installed validator-set checkpoint, if any.
    pub fn checkpoint(&self) -> Option<&ValsetCheckpoint> {
        self.valset.as_ref()
    }

    pub fn is_asset_listed(&self, asset: Address) -> bool {
        self.assets.is_listed(asset)
    }

    pub fn min_amount(&self, asset: Address) -> U256 {
        self.assets.min_amount(asset)
    }

    pub fn fee_config(&self) -> &FeeConfig {
        &self.fees
    }

    pub fn event(&self, nonce: u64) -> Option<&TransferEvent> {
        self.ledger.event(nonce)
    }

    /// Nonce of the most recently recorded transfer, 0 if none.
    pub fn last_event_nonce(&self) -> u64 {
        self.ledger.last_event_nonce()
    }

    // Crate-internal access for operation handlers.

    pub(crate) fn owner_gate(&self) -> &OwnerGate {
        &self.owner
    }

    pub(crate) fn pause_gate(&self) -> &PauseGate {
        &self.pause
    }

    pub(crate) fn pause_gate_mut(&mut self) -> &mut PauseGate {
        &mut self.pause
    }

    pub(crate) fn reentrancy_mut(&mut self) -> &mut ReentrancyGuard {
        &mut self.reentrancy
    }

    pub(crate) fn checkpoint_or_err(&self) -> Result<&ValsetCheckpoint, BridgeError> {
        self.valset.as_ref().ok_or(BridgeError::NotInitialized)
    }

    pub(crate) fn install_valset(&mut self, checkpoint: ValsetCheckpoint) {
        self.valset = Some(checkpoint);
    }

    pub(crate) fn ledger_mut(&mut self) -> &mut TransferLedger {
        &mut self.ledger
    }

    pub(crate) fn assets_mut(&mut self) -> &mut AssetPolicyTable {
        &mut self.assets
    }

    pub(crate) fn fees_mut(&mut self) -> &mut FeeConfig {
        &mut self.fees
    }
}
