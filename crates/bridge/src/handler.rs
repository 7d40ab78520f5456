//! State-transition handlers for the bridge operations.
//!
//! Each handler validates against the current state, applies its effects,
//! and emits events for the transitions it committed. Handlers that move
//! funds run under the reentrancy guard and order external interactions so
//! a failure leaves no partial record behind.

use alloy_primitives::{keccak256, Address, B256, U256};
use relay_crypto::{
    check_threshold, check_total_power, compute_checkpoint, ensure_bundle_shape, EcdsaSignature,
    ThresholdError,
};
use tracing::{debug, info, warn};

use crate::{
    constants::{NATIVE_ASSET, RESULT_DOMAIN},
    errors::BridgeError,
    events::{BridgeEvent, EventSink},
    fees,
    funds::FundsMover,
    state::{AssetKind, BridgeState, TransferResult, ValsetCheckpoint},
};

/// Digest validators sign to assign `result` to event `event_nonce`.
///
/// Binds the nonce, a domain tag and the result code, so a signature over
/// one outcome for one event authorizes nothing else.
pub fn result_digest(event_nonce: u64, result: TransferResult) -> B256 {
    let mut buf = Vec::with_capacity(8 + RESULT_DOMAIN.len() + 1);
    buf.extend_from_slice(&event_nonce.to_be_bytes());
    buf.extend_from_slice(RESULT_DOMAIN);
    buf.push(result.code());
    keccak256(buf)
}

/// Installs the first validator set.
///
/// Owner-only and one-shot: once a checkpoint exists the bridge can only be
/// re-keyed through [`update_valset`]. The set must be self-consistent with
/// the threshold it is installed with, so a set whose total power cannot
/// clear it is rejected up front.
pub fn initialize(
    state: &mut BridgeState,
    caller: Address,
    power_threshold: u64,
    validators: &[Address],
    powers: &[u64],
    sink: &mut impl EventSink,
) -> Result<(), BridgeError> {
    state.owner_gate().require(caller)?;
    if state.checkpoint().is_some() {
        return Err(BridgeError::AlreadyInitialized);
    }
    if validators.len() != powers.len() {
        return Err(BridgeError::MalformedNewValidatorSet {
            validators: validators.len(),
            powers: powers.len(),
        });
    }
    check_total_power(powers, power_threshold)?;

    let digest = compute_checkpoint(validators, powers, 0);
    state.install_valset(ValsetCheckpoint::new(digest, 0, power_threshold));
    info!(
        %digest,
        power_threshold,
        validators = validators.len(),
        "validator set initialized"
    );
    sink.emit(BridgeEvent::ValsetUpdated {
        rotation_nonce: 0,
        validators: validators.to_vec(),
        powers: powers.to_vec(),
    });
    Ok(())
}

/// Rotates the validator set to `new_validators`/`new_powers`.
///
/// The supplied current set must reproduce the stored checkpoint at its
/// rotation nonce, and must sign off on the successor checkpoint with power
/// strictly above the threshold. On success the rotation nonce advances by
/// one and the old checkpoint is gone for good.
pub fn update_valset(
    state: &mut BridgeState,
    new_validators: &[Address],
    new_powers: &[u64],
    current_validators: &[Address],
    current_powers: &[u64],
    signatures: &[Option<EcdsaSignature>],
    sink: &mut impl EventSink,
) -> Result<(), BridgeError> {
    state.reentrancy_mut().enter()?;
    let res = update_valset_inner(
        state,
        new_validators,
        new_powers,
        current_validators,
        current_powers,
        signatures,
        sink,
    );
    state.reentrancy_mut().exit();
    res
}

fn update_valset_inner(
    state: &mut BridgeState,
    new_validators: &[Address],
    new_powers: &[u64],
    current_validators: &[Address],
    current_powers: &[u64],
    signatures: &[Option<EcdsaSignature>],
    sink: &mut impl EventSink,
) -> Result<(), BridgeError> {
    state.pause_gate().check()?;
    if new_validators.len() != new_powers.len() {
        return Err(BridgeError::MalformedNewValidatorSet {
            validators: new_validators.len(),
            powers: new_powers.len(),
        });
    }
    ensure_bundle_shape(current_validators, current_powers, signatures)?;

    let checkpoint = *state.checkpoint_or_err()?;
    let supplied = compute_checkpoint(
        current_validators,
        current_powers,
        checkpoint.rotation_nonce(),
    );
    if supplied != checkpoint.digest() {
        return Err(BridgeError::StaleOrForgedValidatorSet {
            rotation_nonce: checkpoint.rotation_nonce(),
        });
    }

    // The current set signs the successor checkpoint, nonce already bumped.
    let next_nonce = checkpoint.rotation_nonce() + 1;
    let new_digest = compute_checkpoint(new_validators, new_powers, next_nonce);
    check_threshold(
        current_validators,
        current_powers,
        signatures,
        &new_digest,
        checkpoint.power_threshold(),
    )?;

    state.install_valset(ValsetCheckpoint::new(
        new_digest,
        next_nonce,
        checkpoint.power_threshold(),
    ));
    info!(
        rotation_nonce = next_nonce,
        validators = new_validators.len(),
        "validator set rotated"
    );
    sink.emit(BridgeEvent::ValsetUpdated {
        rotation_nonce: next_nonce,
        validators: new_validators.to_vec(),
        powers: new_powers.to_vec(),
    });
    Ok(())
}

/// Accepts a deposit and opens a waiting transfer event, returning its
/// nonce.
///
/// `token` selects the asset, with the zero address standing for the native
/// asset; `carried_value` is the native value attached to the call. A
/// native deposit must be funded exactly by the carried value, a token
/// deposit must carry none. The token pull happens before any record is
/// written, so a failed pull leaves no trace.
pub fn send_to_eth(
    state: &mut BridgeState,
    caller: Address,
    token: Address,
    destination: Address,
    amount: U256,
    carried_value: U256,
    funds: &mut impl FundsMover,
    sink: &mut impl EventSink,
) -> Result<u64, BridgeError> {
    state.reentrancy_mut().enter()?;
    let res = send_to_eth_inner(
        state,
        caller,
        token,
        destination,
        amount,
        carried_value,
        funds,
        sink,
    );
    state.reentrancy_mut().exit();
    res
}

fn send_to_eth_inner(
    state: &mut BridgeState,
    caller: Address,
    token: Address,
    destination: Address,
    amount: U256,
    carried_value: U256,
    funds: &mut impl FundsMover,
    sink: &mut impl EventSink,
) -> Result<u64, BridgeError> {
    state.pause_gate().check()?;
    if !state.is_asset_listed(token) {
        return Err(BridgeError::UnlistedAsset(token));
    }

    let asset = if token == NATIVE_ASSET {
        if carried_value != amount {
            return Err(BridgeError::NativeAssetMismatch {
                token,
                amount,
                carried_value,
            });
        }
        AssetKind::Native
    } else {
        // Value attached to a token deposit has nowhere to go.
        if !carried_value.is_zero() {
            return Err(BridgeError::NativeAssetMismatch {
                token,
                amount,
                carried_value,
            });
        }
        AssetKind::Token(token)
    };

    let min_amount = state.min_amount(token);
    if amount < min_amount {
        return Err(BridgeError::BelowMinimum { amount, min_amount });
    }

    // Interaction before the record: a failed pull leaves the ledger
    // untouched.
    if let AssetKind::Token(token) = asset {
        funds.pull_token(token, caller, amount)?;
    }

    let event_nonce = state.ledger_mut().append(caller, destination, asset, amount);
    debug!(
        event_nonce,
        sender = %caller,
        destination = %destination,
        amount = %amount,
        "transfer requested"
    );
    sink.emit(BridgeEvent::TransferRequested {
        event_nonce,
        sender: caller,
        destination,
        asset,
        amount,
    });
    Ok(event_nonce)
}

/// Finalizes a waiting transfer with a validator-approved result and
/// disburses its funds.
///
/// The supplied validator set is authenticated against the checkpoint, the
/// bundle must clear the power threshold over [`result_digest`], and the
/// target event must still be waiting. The status write lands before any
/// funds move; if disbursement then fails, the write is unwound and the
/// whole call reports the failure, leaving the event open for resubmission.
pub fn submit_result(
    state: &mut BridgeState,
    current_validators: &[Address],
    current_powers: &[u64],
    signatures: &[Option<EcdsaSignature>],
    event_nonce: u64,
    result_code: u8,
    funds: &mut impl FundsMover,
    sink: &mut impl EventSink,
) -> Result<(), BridgeError> {
    state.reentrancy_mut().enter()?;
    let res = submit_result_inner(
        state,
        current_validators,
        current_powers,
        signatures,
        event_nonce,
        result_code,
        funds,
        sink,
    );
    state.reentrancy_mut().exit();
    res
}

fn submit_result_inner(
    state: &mut BridgeState,
    current_validators: &[Address],
    current_powers: &[u64],
    signatures: &[Option<EcdsaSignature>],
    event_nonce: u64,
    result_code: u8,
    funds: &mut impl FundsMover,
    sink: &mut impl EventSink,
) -> Result<(), BridgeError> {
    state.pause_gate().check()?;
    let result =
        TransferResult::from_code(result_code).ok_or(BridgeError::InvalidResult(result_code))?;
    ensure_bundle_shape(current_validators, current_powers, signatures)?;

    let checkpoint = *state.checkpoint_or_err()?;
    let supplied = compute_checkpoint(
        current_validators,
        current_powers,
        checkpoint.rotation_nonce(),
    );
    if supplied != checkpoint.digest() {
        return Err(BridgeError::StaleOrForgedValidatorSet {
            rotation_nonce: checkpoint.rotation_nonce(),
        });
    }

    let digest = result_digest(event_nonce, result);
    check_threshold(
        current_validators,
        current_powers,
        signatures,
        &digest,
        checkpoint.power_threshold(),
    )
    .map_err(|err| match err {
        ThresholdError::InsufficientPower { .. } => BridgeError::InsufficientValidatorApproval {
            event_nonce,
            source: err,
        },
        other => other.into(),
    })?;

    // Effects before interactions: the entry is terminal before any funds
    // move, so a replay of this nonce is rejected from here on.
    let event = state.ledger_mut().finalize(event_nonce, result)?;
    let min_amount = state.min_amount(event.asset().asset_address());
    let fee_config = *state.fee_config();

    if let Err(err) = fees::disburse(&event, result, &fee_config, min_amount, funds) {
        // A failed external movement aborts the whole call; reopen the
        // entry so the outcome can be resubmitted.
        state.ledger_mut().unwind_finalization(event_nonce);
        warn!(event_nonce, %err, "disbursement failed, finalization unwound");
        return Err(err.into());
    }

    info!(event_nonce, status = ?event.status(), "transfer finalized");
    sink.emit(BridgeEvent::TransferFinalized {
        event_nonce,
        sender: event.sender(),
        destination: event.destination(),
        asset: event.asset(),
        amount: event.amount(),
        status: event.status(),
    });
    Ok(())
}
