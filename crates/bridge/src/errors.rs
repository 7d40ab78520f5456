//! Bridge operation errors.

use alloy_primitives::{Address, U256};
use relay_crypto::ThresholdError;
use thiserror::Error;

use crate::{funds::FundsError, state::TransferStatus};

/// Errors returned by bridge operations.
///
/// Every variant aborts its operation with no state change; the one external
/// interaction performed after a state write unwinds that write on failure
/// before surfacing as [`BridgeError::Funds`].
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum BridgeError {
    /// Caller is not the configured owner.
    #[error("caller {0} is not the owner")]
    NotOwner(Address),

    /// The bridge is paused.
    #[error("bridge is paused")]
    Paused,

    /// A protected operation was entered while another one was in flight.
    #[error("reentrant call rejected")]
    ReentrantCall,

    /// A validator set has already been installed.
    #[error("validator set already initialized")]
    AlreadyInitialized,

    /// No validator set has been installed yet.
    #[error("validator set not initialized")]
    NotInitialized,

    /// The proposed validator set arrays differ in length.
    #[error("malformed validator set: {validators} validators, {powers} powers")]
    MalformedNewValidatorSet { validators: usize, powers: usize },

    /// Signature bundle verification failed.
    #[error("threshold verification failed")]
    Threshold(#[from] ThresholdError),

    /// The supplied current validator set does not reproduce the stored
    /// checkpoint at its rotation nonce.
    #[error("supplied validator set does not match checkpoint at rotation nonce {rotation_nonce}")]
    StaleOrForgedValidatorSet { rotation_nonce: u64 },

    /// The signature bundle over a transfer result did not clear the power
    /// threshold.
    #[error("insufficient validator approval for event {event_nonce}")]
    InsufficientValidatorApproval {
        event_nonce: u64,
        #[source]
        source: ThresholdError,
    },

    /// The submitted result code is not a recognized terminal outcome.
    #[error("invalid transfer result code {0}")]
    InvalidResult(u8),

    /// No transfer event is recorded under the given nonce.
    #[error("unknown transfer event {0}")]
    UnknownEvent(u64),

    /// The transfer event already carries a terminal status.
    #[error("transfer event {event_nonce} already finalized as {status:?}")]
    AlreadyFinalized {
        event_nonce: u64,
        status: TransferStatus,
    },

    /// The asset is not on the deposit whitelist.
    #[error("asset {0} is not listed for deposit")]
    UnlistedAsset(Address),

    /// The deposit amount is below the per-asset floor.
    #[error("amount {amount} below minimum {min_amount}")]
    BelowMinimum { amount: U256, min_amount: U256 },

    /// Carried native value disagrees with the declared deposit.
    #[error("carried value {carried_value} does not match a deposit of {amount} for {token}")]
    NativeAssetMismatch {
        token: Address,
        amount: U256,
        carried_value: U256,
    },

    /// Fee rate exceeds the per-mille denominator.
    #[error("fee rate {0} exceeds the per-mille denominator")]
    InvalidFeeRate(u64),

    /// An external fund movement failed; the whole call is aborted.
    #[error("funds movement failed")]
    Funds(#[from] FundsError),
}
