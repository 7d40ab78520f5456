//! Shared test helpers: deterministic validator keys, signature bundles and
//! mock collaborators.

use alloy_primitives::{Address, B256, U256};
use relay_crypto::ecdsa::{address_of, sign_digest, SigningKey};
use relay_crypto::EcdsaSignature;

use crate::{
    errors::BridgeError,
    events::NullSink,
    funds::{FundsError, FundsMover},
    handler,
    state::{BridgeConfig, BridgeState},
};

/// Fixed owner address used by [`setup_bridge`].
pub const OWNER: Address = Address::new([0xAA; 20]);

/// Fixed fee wallet used by [`setup_bridge`].
pub const FEE_WALLET: Address = Address::new([0xFE; 20]);

/// A validator with a known signing key.
#[derive(Debug, Clone)]
pub struct TestValidator {
    key: SigningKey,
    address: Address,
    power: u64,
}

impl TestValidator {
    pub fn address(&self) -> Address {
        self.address
    }

    pub fn power(&self) -> u64 {
        self.power
    }

    pub fn sign(&self, digest: &B256) -> EcdsaSignature {
        sign_digest(digest, &self.key)
    }
}

/// Builds a deterministic validator set with the given powers. Keys are
/// derived from the slot index, so the same powers always yield the same
/// addresses.
pub fn make_validators(powers: &[u64]) -> Vec<TestValidator> {
    powers
        .iter()
        .enumerate()
        .map(|(index, &power)| {
            let seed = u8::try_from(index + 1).expect("small validator sets only");
            let key = SigningKey::from_bytes(&[seed; 32].into()).expect("valid scalar");
            let address = address_of(key.verifying_key());
            TestValidator {
                key,
                address,
                power,
            }
        })
        .collect()
}

pub fn addresses(validators: &[TestValidator]) -> Vec<Address> {
    validators.iter().map(|v| v.address).collect()
}

pub fn powers(validators: &[TestValidator]) -> Vec<u64> {
    validators.iter().map(|v| v.power).collect()
}

/// Signs `digest` with every validator, no abstentions.
pub fn sign_all(validators: &[TestValidator], digest: &B256) -> Vec<Option<EcdsaSignature>> {
    validators.iter().map(|v| Some(v.sign(digest))).collect()
}

/// Constructs a bridge with [`OWNER`]/[`FEE_WALLET`] and the given fee rate,
/// then installs a fresh validator set with the given powers and threshold.
pub fn setup_bridge(
    validator_powers: &[u64],
    power_threshold: u64,
    fee_rate_per_mille: u64,
) -> Result<(BridgeState, Vec<TestValidator>), BridgeError> {
    let validators = make_validators(validator_powers);
    let mut state = BridgeState::new(BridgeConfig {
        owner: OWNER,
        fee_wallet: FEE_WALLET,
        fee_rate_per_mille,
    });
    handler::initialize(
        &mut state,
        OWNER,
        power_threshold,
        &addresses(&validators),
        &powers(&validators),
        &mut NullSink,
    )?;
    Ok((state, validators))
}

/// Funds mover that records every movement and can be told to fail.
#[derive(Debug, Default)]
pub struct RecordingFunds {
    pub native_transfers: Vec<(Address, U256)>,
    pub token_pulls: Vec<(Address, Address, U256)>,
    pub token_pushes: Vec<(Address, Address, U256)>,
    pub fail_native: bool,
    pub fail_pulls: bool,
    pub fail_pushes: bool,
}

impl RecordingFunds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl FundsMover for RecordingFunds {
    fn transfer_native(&mut self, to: Address, amount: U256) -> Result<(), FundsError> {
        if self.fail_native {
            return Err(FundsError::NativeTransferFailed { to, amount });
        }
        self.native_transfers.push((to, amount));
        Ok(())
    }

    fn pull_token(
        &mut self,
        token: Address,
        from: Address,
        amount: U256,
    ) -> Result<(), FundsError> {
        if self.fail_pulls {
            return Err(FundsError::TokenPullFailed {
                token,
                from,
                amount,
            });
        }
        self.token_pulls.push((token, from, amount));
        Ok(())
    }

    fn push_token(&mut self, token: Address, to: Address, amount: U256) -> Result<(), FundsError> {
        if self.fail_pushes {
            return Err(FundsError::TokenPushFailed { token, to, amount });
        }
        self.token_pushes.push((token, to, amount));
        Ok(())
    }
}
