//! Validator-governed bridge core for a cross-chain asset relay.
//!
//! The crate models the receiving side of a relay: a validator set, known
//! only through a stored checkpoint digest, authorizes set rotations and
//! transfer outcomes by threshold signature, while users open transfer
//! events by depositing native value or whitelisted tokens.
//!
//! Layout:
//!
//! - [`state`] holds the owned [`BridgeState`] aggregate and its pieces
//!   (checkpoint, ledger, policy table, fee policy).
//! - [`handler`] implements the four state transitions: `initialize`,
//!   `update_valset`, `send_to_eth` and `submit_result`.
//! - [`admin`] implements the owner-gated policy controls.
//! - Funds leave through the [`FundsMover`] capability; observable
//!   transitions are reported through an [`EventSink`].

pub mod admin;
pub mod constants;
pub mod errors;
pub mod events;
pub mod fees;
pub mod funds;
pub mod guards;
pub mod handler;
pub mod state;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;

pub use constants::{BURN_SINK, NATIVE_ASSET, RESULT_DOMAIN};
pub use errors::BridgeError;
pub use events::{BridgeEvent, EventSink, NullSink};
pub use fees::{compute_fee, FEE_DENOMINATOR};
pub use funds::{FundsError, FundsMover};
pub use handler::{initialize, result_digest, send_to_eth, submit_result, update_valset};
pub use state::{
    AssetKind, BridgeConfig, BridgeState, TransferEvent, TransferLedger, TransferResult,
    TransferStatus, ValsetCheckpoint,
};
