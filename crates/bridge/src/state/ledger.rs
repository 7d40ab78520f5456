//! Append-only ledger of transfer events.

use std::collections::BTreeMap;

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::{
    errors::BridgeError,
    state::transfer::{AssetKind, TransferEvent, TransferResult, TransferStatus},
};

/// Append-only ledger of transfer events keyed by nonce.
///
/// Nonces start at 1 and increase by one per accepted deposit; 0 is reserved
/// as the not-found answer for nonce lookups. Entries are never removed.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferLedger {
    events: BTreeMap<u64, TransferEvent>,
    next_nonce: u64,
}

impl Default for TransferLedger {
    fn default() -> Self {
        Self {
            events: BTreeMap::new(),
            next_nonce: 1,
        }
    }
}

impl TransferLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Nonce of the most recently appended event, or 0 if none exists.
    pub fn last_event_nonce(&self) -> u64 {
        self.next_nonce - 1
    }

    pub fn event(&self, nonce: u64) -> Option<&TransferEvent> {
        self.events.get(&nonce)
    }

    /// Records a new waiting transfer and returns its nonce.
    pub(crate) fn append(
        &mut self,
        sender: Address,
        destination: Address,
        asset: AssetKind,
        amount: U256,
    ) -> u64 {
        let nonce = self.next_nonce;
        self.next_nonce += 1;
        self.events.insert(
            nonce,
            TransferEvent::new(nonce, sender, destination, asset, amount),
        );
        nonce
    }

    /// Moves a waiting event to the terminal status for `result` and returns
    /// a snapshot of the finalized entry.
    ///
    /// Rejects unknown nonces and entries that are already terminal, so a
    /// given nonce can be finalized at most once.
    pub(crate) fn finalize(
        &mut self,
        nonce: u64,
        result: TransferResult,
    ) -> Result<TransferEvent, BridgeError> {
        let event = self
            .events
            .get_mut(&nonce)
            .ok_or(BridgeError::UnknownEvent(nonce))?;
        if event.status().is_terminal() {
            return Err(BridgeError::AlreadyFinalized {
                event_nonce: nonce,
                status: event.status(),
            });
        }
        event.set_status(result.into());
        Ok(event.clone())
    }

    /// Reopens an entry whose disbursement failed after the status write.
    /// Only called on a nonce that [`Self::finalize`] just accepted.
    pub(crate) fn unwind_finalization(&mut self, nonce: u64) {
        if let Some(event) = self.events.get_mut(&nonce) {
            event.set_status(TransferStatus::Wait);
        }
    }
}
