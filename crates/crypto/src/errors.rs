use alloy_primitives::Address;
use thiserror::Error;

/// Failures of threshold-signature bundle verification.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ThresholdError {
    /// Validator, power and signature arrays must be pairwise equal length.
    #[error(
        "malformed validator set: {validators} validators, {powers} powers, {signatures} signatures"
    )]
    MalformedValidatorSet {
        validators: usize,
        powers: usize,
        signatures: usize,
    },

    /// A supplied signature did not recover to its validator. A present
    /// signature is never skipped: mismatch fails the whole bundle.
    #[error("invalid signature for validator {validator} at index {index}")]
    InvalidSignature { index: usize, validator: Address },

    /// Cumulative signed power did not strictly exceed the threshold.
    #[error("insufficient cumulative power: {cumulative} does not exceed threshold {threshold}")]
    InsufficientPower { cumulative: u128, threshold: u64 },
}
