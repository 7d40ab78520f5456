//! Owner-gated policy controls.
//!
//! These remain available while the bridge is paused; pausing gates the
//! transfer and rotation paths, not the controls that manage them.

use alloy_primitives::{Address, U256};
use tracing::info;

use crate::{
    errors::BridgeError,
    events::{BridgeEvent, EventSink},
    fees::FEE_DENOMINATOR,
    state::BridgeState,
};

/// Adds an asset to or removes it from the deposit whitelist.
pub fn set_asset_listed(
    state: &mut BridgeState,
    caller: Address,
    asset: Address,
    listed: bool,
    sink: &mut impl EventSink,
) -> Result<(), BridgeError> {
    state.owner_gate().require(caller)?;
    state.assets_mut().set_listed(asset, listed);
    info!(%asset, listed, "asset listing changed");
    sink.emit(BridgeEvent::AssetListingChanged { asset, listed });
    Ok(())
}

/// Sets the per-asset minimum deposit amount, which doubles as the fee
/// floor at settlement.
pub fn set_min_amount(
    state: &mut BridgeState,
    caller: Address,
    asset: Address,
    min_amount: U256,
) -> Result<(), BridgeError> {
    state.owner_gate().require(caller)?;
    state.assets_mut().set_min_amount(asset, min_amount);
    Ok(())
}

/// Sets the proportional settlement fee rate, bounded by the per-mille
/// denominator.
pub fn set_fee_rate(
    state: &mut BridgeState,
    caller: Address,
    rate_per_mille: u64,
) -> Result<(), BridgeError> {
    state.owner_gate().require(caller)?;
    if rate_per_mille > FEE_DENOMINATOR {
        return Err(BridgeError::InvalidFeeRate(rate_per_mille));
    }
    state.fees_mut().set_rate(rate_per_mille);
    Ok(())
}

/// Redirects settlement fees and confiscations to a new wallet.
pub fn set_fee_wallet(
    state: &mut BridgeState,
    caller: Address,
    fee_wallet: Address,
) -> Result<(), BridgeError> {
    state.owner_gate().require(caller)?;
    state.fees_mut().set_wallet(fee_wallet);
    Ok(())
}

/// Engages or lifts the pause gate.
pub fn set_paused(
    state: &mut BridgeState,
    caller: Address,
    paused: bool,
) -> Result<(), BridgeError> {
    state.owner_gate().require(caller)?;
    state.pause_gate_mut().set(paused);
    info!(paused, "pause gate changed");
    Ok(())
}

#[cfg(test)]
mod tests {
    use alloy_primitives::U256;

    use super::*;
    use crate::{
        events::NullSink,
        state::BridgeConfig,
        test_utils::{FEE_WALLET, OWNER},
    };

    fn fresh_state() -> BridgeState {
        BridgeState::new(BridgeConfig {
            owner: OWNER,
            fee_wallet: FEE_WALLET,
            fee_rate_per_mille: 5,
        })
    }

    #[test]
    fn test_controls_are_owner_gated() {
        let mut state = fresh_state();
        let outsider = Address::from([0x01; 20]);
        let asset = Address::from([0x70; 20]);

        assert!(matches!(
            set_asset_listed(&mut state, outsider, asset, true, &mut NullSink),
            Err(BridgeError::NotOwner(_))
        ));
        assert!(matches!(
            set_min_amount(&mut state, outsider, asset, U256::from(1u64)),
            Err(BridgeError::NotOwner(_))
        ));
        assert!(matches!(
            set_fee_rate(&mut state, outsider, 1),
            Err(BridgeError::NotOwner(_))
        ));
        assert!(matches!(
            set_fee_wallet(&mut state, outsider, outsider),
            Err(BridgeError::NotOwner(_))
        ));
        assert!(matches!(
            set_paused(&mut state, outsider, true),
            Err(BridgeError::NotOwner(_))
        ));
    }

    #[test]
    fn test_listing_emits_event() {
        let mut state = fresh_state();
        let asset = Address::from([0x70; 20]);

        let mut events = Vec::new();
        set_asset_listed(&mut state, OWNER, asset, true, &mut events).unwrap();
        assert!(state.is_asset_listed(asset));
        assert_eq!(
            events,
            vec![BridgeEvent::AssetListingChanged {
                asset,
                listed: true,
            }]
        );
    }

    #[test]
    fn test_fee_rate_bounded_by_denominator() {
        let mut state = fresh_state();

        set_fee_rate(&mut state, OWNER, FEE_DENOMINATOR).unwrap();
        assert_eq!(state.fee_config().rate_per_mille(), FEE_DENOMINATOR);

        let err = set_fee_rate(&mut state, OWNER, FEE_DENOMINATOR + 1).unwrap_err();
        assert_eq!(err, BridgeError::InvalidFeeRate(FEE_DENOMINATOR + 1));
    }

    #[test]
    fn test_fee_wallet_redirect() {
        let mut state = fresh_state();
        let wallet = Address::from([0x99; 20]);

        set_fee_wallet(&mut state, OWNER, wallet).unwrap();
        assert_eq!(state.fee_config().fee_wallet(), wallet);
    }
}
