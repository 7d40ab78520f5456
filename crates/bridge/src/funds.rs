//! Outbound fund movement as a fallible external capability.

use alloy_primitives::{Address, U256};
use thiserror::Error;

/// Failures reported by a funds-movement capability.
///
/// Any of these aborts the enclosing bridge call; the core never records a
/// terminal state with funds unmoved.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FundsError {
    /// A direct native-value transfer to a payable recipient failed.
    #[error("native transfer of {amount} to {to} failed")]
    NativeTransferFailed { to: Address, amount: U256 },

    /// A token payout from bridge custody failed.
    #[error("token {token} transfer of {amount} to {to} failed")]
    TokenPushFailed {
        token: Address,
        to: Address,
        amount: U256,
    },

    /// Pulling a token deposit from the sender into custody failed.
    #[error("token {token} pull of {amount} from {from} failed")]
    TokenPullFailed {
        token: Address,
        from: Address,
        amount: U256,
    },
}

/// Capability that moves funds on behalf of the bridge core.
///
/// Implementations wrap the platform's transfer primitives. For external
/// tokens the success contract is deliberately permissive: a transfer call
/// counts as successful when the call itself did not fail and it either
/// returned no data or the data decoded to boolean true — tokens that return
/// nothing on success are treated as successful.
pub trait FundsMover {
    /// Sends `amount` of the native asset to `to`. Must not silently fail:
    /// a failed transfer is reported as an error, never swallowed.
    fn transfer_native(&mut self, to: Address, amount: U256) -> Result<(), FundsError>;

    /// Pulls `amount` of `token` from `from` into bridge custody.
    fn pull_token(&mut self, token: Address, from: Address, amount: U256)
        -> Result<(), FundsError>;

    /// Pays out `amount` of `token` from bridge custody to `to`.
    fn push_token(&mut self, token: Address, to: Address, amount: U256) -> Result<(), FundsError>;
}
