//! Cumulative voting-power verification of validator signature bundles.

use alloy_primitives::{Address, B256};

use crate::{
    ecdsa::{verify_signature, EcdsaSignature},
    errors::ThresholdError,
};

/// Checks that the three bundle arrays are pairwise equal length.
pub fn ensure_bundle_shape(
    validators: &[Address],
    powers: &[u64],
    signatures: &[Option<EcdsaSignature>],
) -> Result<(), ThresholdError> {
    if validators.len() != powers.len() || validators.len() != signatures.len() {
        return Err(ThresholdError::MalformedValidatorSet {
            validators: validators.len(),
            powers: powers.len(),
            signatures: signatures.len(),
        });
    }
    Ok(())
}

/// Verifies that the signatures present in a bundle over `digest` carry
/// cumulative voting power strictly exceeding `power_threshold`.
///
/// `signatures[i]` is the slot for `validators[i]`; `None` marks an
/// abstention and contributes nothing. A present signature that does not
/// recover to its validator fails the whole check with no partial credit.
///
/// The loop stops early once the threshold is strictly exceeded. That is a
/// cost optimization only: the acceptance predicate is exactly
/// `cumulative > power_threshold`, so a bundle whose power equals the
/// threshold is rejected.
pub fn check_threshold(
    validators: &[Address],
    powers: &[u64],
    signatures: &[Option<EcdsaSignature>],
    digest: &B256,
    power_threshold: u64,
) -> Result<(), ThresholdError> {
    ensure_bundle_shape(validators, powers, signatures)?;

    let threshold = u128::from(power_threshold);
    let mut cumulative: u128 = 0;
    for (index, (validator, (power, slot))) in validators
        .iter()
        .zip(powers.iter().zip(signatures))
        .enumerate()
    {
        let Some(sig) = slot else {
            continue;
        };
        if !verify_signature(*validator, digest, sig) {
            return Err(ThresholdError::InvalidSignature {
                index,
                validator: *validator,
            });
        }
        cumulative += u128::from(*power);
        if cumulative > threshold {
            return Ok(());
        }
    }

    Err(ThresholdError::InsufficientPower {
        cumulative,
        threshold: power_threshold,
    })
}

/// Sums `powers` under the same early-exit strict-threshold rule used for
/// signature bundles.
///
/// Used to check that a validator set is self-consistent with a threshold it
/// is being installed with: the set's own total power must be able to
/// authorize an action.
pub fn check_total_power(powers: &[u64], power_threshold: u64) -> Result<(), ThresholdError> {
    let threshold = u128::from(power_threshold);
    let mut cumulative: u128 = 0;
    for power in powers {
        cumulative += u128::from(*power);
        if cumulative > threshold {
            return Ok(());
        }
    }

    Err(ThresholdError::InsufficientPower {
        cumulative,
        threshold: power_threshold,
    })
}
