//! Transfer events and their lifecycle.

use alloy_primitives::{Address, U256};
use serde::{Deserialize, Serialize};

use crate::constants::NATIVE_ASSET;

/// Lifecycle status of a transfer event.
///
/// Every event starts in [`TransferStatus::Wait`] and moves exactly once to
/// one of the three terminal statuses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TransferStatus {
    /// Deposit accepted, outcome pending validator decision.
    Wait,
    /// Settled: fee collected, principal burned.
    Deal,
    /// Rejected: full principal refunded to the sender.
    Refuse,
    /// Confiscated: full principal sent to the fee wallet.
    Punish,
}

impl TransferStatus {
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Wait)
    }
}

/// Terminal outcome a validator quorum can assign to a waiting transfer.
///
/// Wire codes are 1 (deal), 2 (refuse) and 3 (punish); 0 is the waiting
/// status and never a valid result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferResult {
    Deal,
    Refuse,
    Punish,
}

impl TransferResult {
    /// Decodes a wire result code.
    pub fn from_code(code: u8) -> Option<Self> {
        match code {
            1 => Some(Self::Deal),
            2 => Some(Self::Refuse),
            3 => Some(Self::Punish),
            _ => None,
        }
    }

    pub fn code(self) -> u8 {
        match self {
            Self::Deal => 1,
            Self::Refuse => 2,
            Self::Punish => 3,
        }
    }
}

impl From<TransferResult> for TransferStatus {
    fn from(result: TransferResult) -> Self {
        match result {
            TransferResult::Deal => Self::Deal,
            TransferResult::Refuse => Self::Refuse,
            TransferResult::Punish => Self::Punish,
        }
    }
}

/// The asset a transfer locks, resolved once at deposit intake.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AssetKind {
    /// The platform's native asset, carried as call value.
    Native,
    /// An external token contract.
    Token(Address),
}

impl AssetKind {
    /// Address form used for policy lookups and emitted records. The native
    /// asset maps to the zero-address sentinel.
    pub fn asset_address(self) -> Address {
        match self {
            Self::Native => NATIVE_ASSET,
            Self::Token(token) => token,
        }
    }
}

/// One transfer lifecycle instance, from deposit to terminal finalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransferEvent {
    event_nonce: u64,
    sender: Address,
    destination: Address,
    asset: AssetKind,
    amount: U256,
    status: TransferStatus,
}

impl TransferEvent {
    pub fn new(
        event_nonce: u64,
        sender: Address,
        destination: Address,
        asset: AssetKind,
        amount: U256,
    ) -> Self {
        Self {
            event_nonce,
            sender,
            destination,
            asset,
            amount,
            status: TransferStatus::Wait,
        }
    }

    pub fn event_nonce(&self) -> u64 {
        self.event_nonce
    }

    pub fn sender(&self) -> Address {
        self.sender
    }

    pub fn destination(&self) -> Address {
        self.destination
    }

    pub fn asset(&self) -> AssetKind {
        self.asset
    }

    pub fn amount(&self) -> U256 {
        self.amount
    }

    pub fn status(&self) -> TransferStatus {
        self.status
    }

    pub(crate) fn set_status(&mut self, status: TransferStatus) {
        self.status = status;
    }
}
