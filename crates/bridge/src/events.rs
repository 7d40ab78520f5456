//! Observable records emitted by state-mutating operations.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::state::{AssetKind, TransferStatus};

/// A record emitted on a successful state transition.
///
/// Events are the external observation surface: off-chain relayers follow
/// [`BridgeEvent::TransferRequested`] to learn of new deposits and
/// [`BridgeEvent::ValsetUpdated`] to track the signing set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BridgeEvent {
    /// A validator set was installed or rotated.
    ValsetUpdated {
        rotation_nonce: u64,
        validators: Vec<Address>,
        powers: Vec<u64>,
    },

    /// A deposit was accepted and a transfer event opened.
    TransferRequested {
        event_nonce: u64,
        sender: Address,
        destination: Address,
        asset: AssetKind,
        amount: U256,
    },

    /// A transfer event reached a terminal status and funds were disbursed.
    TransferFinalized {
        event_nonce: u64,
        sender: Address,
        destination: Address,
        asset: AssetKind,
        amount: U256,
        status: TransferStatus,
    },

    /// An asset was added to or removed from the deposit whitelist.
    AssetListingChanged { asset: Address, listed: bool },
}

/// Destination for emitted events.
///
/// Emission is infallible: an event describes a transition that has already
/// committed, so the sink has no veto.
pub trait EventSink {
    fn emit(&mut self, event: BridgeEvent);
}

impl EventSink for Vec<BridgeEvent> {
    fn emit(&mut self, event: BridgeEvent) {
        self.push(event);
    }
}

/// Sink that drops every event. For callers that only care about the
/// operation result.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: BridgeEvent) {}
}
