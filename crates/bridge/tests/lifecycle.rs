//! End-to-end lifecycle: initialize, list assets, deposit, rotate the
//! validator set, and finalize transfers through the public API.

use alloy_primitives::{Address, U256};
use relay_bridge::{
    admin, compute_fee, initialize, result_digest, send_to_eth, submit_result, update_valset,
    BridgeConfig, BridgeError, BridgeEvent, BridgeState, NullSink, TransferResult, TransferStatus,
    BURN_SINK, NATIVE_ASSET,
};
use relay_bridge::test_utils::{
    addresses, make_validators, powers, sign_all, RecordingFunds, FEE_WALLET, OWNER,
};
use relay_crypto::compute_checkpoint;

const TOKEN: Address = Address::new([0x70; 20]);
const ALICE: Address = Address::new([0xA1; 20]);
const BOB: Address = Address::new([0xB0; 20]);
const DEST: Address = Address::new([0xD1; 20]);

#[test]
fn test_full_transfer_lifecycle() {
    // Owner brings up the bridge with three equal validators and a 0.5%
    // settlement fee.
    let validators = make_validators(&[100, 100, 100]);
    let mut state = BridgeState::new(BridgeConfig {
        owner: OWNER,
        fee_wallet: FEE_WALLET,
        fee_rate_per_mille: 5,
    });
    let mut events = Vec::new();
    initialize(
        &mut state,
        OWNER,
        200,
        &addresses(&validators),
        &powers(&validators),
        &mut events,
    )
    .unwrap();

    admin::set_asset_listed(&mut state, OWNER, TOKEN, true, &mut events).unwrap();
    admin::set_asset_listed(&mut state, OWNER, NATIVE_ASSET, true, &mut events).unwrap();
    admin::set_min_amount(&mut state, OWNER, TOKEN, U256::from(100u64)).unwrap();

    // Alice deposits tokens, Bob deposits native value.
    let mut funds = RecordingFunds::new();
    let token_amount = U256::from(40_000u64);
    let alice_nonce = send_to_eth(
        &mut state,
        ALICE,
        TOKEN,
        DEST,
        token_amount,
        U256::ZERO,
        &mut funds,
        &mut events,
    )
    .unwrap();
    assert_eq!(alice_nonce, 1);
    assert_eq!(funds.token_pulls, vec![(TOKEN, ALICE, token_amount)]);

    let native_amount = U256::from(9_000u64);
    let bob_nonce = send_to_eth(
        &mut state,
        BOB,
        NATIVE_ASSET,
        DEST,
        native_amount,
        native_amount,
        &mut funds,
        &mut events,
    )
    .unwrap();
    assert_eq!(bob_nonce, 2);

    // Validators settle Alice's transfer: fee to the wallet, rest burned.
    let bundle = sign_all(&validators, &result_digest(alice_nonce, TransferResult::Deal));
    submit_result(
        &mut state,
        &addresses(&validators),
        &powers(&validators),
        &bundle,
        alice_nonce,
        1,
        &mut funds,
        &mut events,
    )
    .unwrap();

    let fee = compute_fee(token_amount, 5, U256::from(100u64));
    assert_eq!(fee, U256::from(200u64));
    assert_eq!(
        funds.token_pushes,
        vec![
            (TOKEN, FEE_WALLET, fee),
            (TOKEN, BURN_SINK, token_amount - fee),
        ]
    );
    assert_eq!(
        state.event(alice_nonce).unwrap().status(),
        TransferStatus::Deal
    );

    // The set rotates; the retired set can no longer finalize Bob's
    // transfer, the new one refuses it with a full refund.
    let successors = make_validators(&[70, 70, 70, 70]);
    let successor_digest = compute_checkpoint(&addresses(&successors), &powers(&successors), 1);
    let rotation = sign_all(&validators, &successor_digest);
    update_valset(
        &mut state,
        &addresses(&successors),
        &powers(&successors),
        &addresses(&validators),
        &powers(&validators),
        &rotation,
        &mut events,
    )
    .unwrap();
    assert_eq!(state.checkpoint().unwrap().rotation_nonce(), 1);

    let stale = sign_all(&validators, &result_digest(bob_nonce, TransferResult::Refuse));
    let err = submit_result(
        &mut state,
        &addresses(&validators),
        &powers(&validators),
        &stale,
        bob_nonce,
        2,
        &mut funds,
        &mut events,
    )
    .unwrap_err();
    assert_eq!(
        err,
        BridgeError::StaleOrForgedValidatorSet { rotation_nonce: 1 }
    );

    let bundle = sign_all(&successors, &result_digest(bob_nonce, TransferResult::Refuse));
    submit_result(
        &mut state,
        &addresses(&successors),
        &powers(&successors),
        &bundle,
        bob_nonce,
        2,
        &mut funds,
        &mut events,
    )
    .unwrap();
    assert_eq!(funds.native_transfers, vec![(BOB, native_amount)]);
    assert_eq!(
        state.event(bob_nonce).unwrap().status(),
        TransferStatus::Refuse
    );

    // Every transition was observable.
    let finalized: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, BridgeEvent::TransferFinalized { .. }))
        .collect();
    assert_eq!(finalized.len(), 2);
    let rotations: Vec<_> = events
        .iter()
        .filter(|e| matches!(e, BridgeEvent::ValsetUpdated { .. }))
        .collect();
    assert_eq!(rotations.len(), 2);
}

#[test]
fn test_state_survives_serialization() {
    let validators = make_validators(&[10, 10, 10]);
    let mut state = BridgeState::new(BridgeConfig {
        owner: OWNER,
        fee_wallet: FEE_WALLET,
        fee_rate_per_mille: 5,
    });
    initialize(
        &mut state,
        OWNER,
        19,
        &addresses(&validators),
        &powers(&validators),
        &mut NullSink,
    )
    .unwrap();
    admin::set_asset_listed(&mut state, OWNER, TOKEN, true, &mut NullSink).unwrap();
    send_to_eth(
        &mut state,
        ALICE,
        TOKEN,
        DEST,
        U256::from(500u64),
        U256::ZERO,
        &mut RecordingFunds::new(),
        &mut NullSink,
    )
    .unwrap();

    let encoded = serde_json::to_string(&state).unwrap();
    let mut restored: BridgeState = serde_json::from_str(&encoded).unwrap();

    assert_eq!(restored.checkpoint(), state.checkpoint());
    assert_eq!(restored.last_event_nonce(), 1);
    assert_eq!(restored.event(1), state.event(1));

    // The restored state is live: the pending transfer can be finalized.
    let bundle = sign_all(&validators, &result_digest(1, TransferResult::Punish));
    submit_result(
        &mut restored,
        &addresses(&validators),
        &powers(&validators),
        &bundle,
        1,
        3,
        &mut RecordingFunds::new(),
        &mut NullSink,
    )
    .unwrap();
    assert_eq!(restored.event(1).unwrap().status(), TransferStatus::Punish);
}
