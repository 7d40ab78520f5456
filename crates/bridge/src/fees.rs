//! Settlement fee computation and terminal disbursement.

use alloy_primitives::U256;

use crate::{
    constants::BURN_SINK,
    funds::{FundsError, FundsMover},
    state::{AssetKind, FeeConfig, TransferEvent, TransferResult},
};

/// Denominator of the proportional fee rate: a rate of `n` charges `n/1000`
/// of the principal.
pub const FEE_DENOMINATOR: u64 = 1000;

/// Computes the settlement fee for `amount`.
///
/// The fee is the larger of the proportional share and `min_amount`, then
/// clamped to the principal so the burned remainder can never underflow.
/// The proportional product is taken in full 256-bit width; `amount *
/// rate / 1000` cannot overflow because the rate is bounded by the
/// denominator.
pub fn compute_fee(amount: U256, rate_per_mille: u64, min_amount: U256) -> U256 {
    let proportional = amount * U256::from(rate_per_mille) / U256::from(FEE_DENOMINATOR);
    proportional.max(min_amount).min(amount)
}

/// Moves funds for a transfer that just reached the terminal status for
/// `result`.
///
/// Refusal refunds the full principal to the sender; punishment forwards it
/// to the fee wallet. Settlement splits the principal into a fee-wallet
/// share and a burned remainder, with one asymmetry kept from the settlement
/// contract this models: when no fee policy is configured at all (zero rate
/// and zero floor), the token path skips the fee transfer entirely, while
/// the native path still performs a zero-value fee transfer.
pub(crate) fn disburse(
    event: &TransferEvent,
    result: TransferResult,
    fees: &FeeConfig,
    min_amount: U256,
    funds: &mut impl FundsMover,
) -> Result<(), FundsError> {
    let amount = event.amount();
    match (result, event.asset()) {
        (TransferResult::Refuse, AssetKind::Native) => {
            funds.transfer_native(event.sender(), amount)
        }
        (TransferResult::Refuse, AssetKind::Token(token)) => {
            funds.push_token(token, event.sender(), amount)
        }
        (TransferResult::Punish, AssetKind::Native) => {
            funds.transfer_native(fees.fee_wallet(), amount)
        }
        (TransferResult::Punish, AssetKind::Token(token)) => {
            funds.push_token(token, fees.fee_wallet(), amount)
        }
        (TransferResult::Deal, AssetKind::Token(token)) => {
            if fees.rate_per_mille() == 0 && min_amount.is_zero() {
                // No fee policy configured: burn the full principal with no
                // fee-wallet interaction at all.
                return funds.push_token(token, BURN_SINK, amount);
            }
            let fee = compute_fee(amount, fees.rate_per_mille(), min_amount);
            funds.push_token(token, fees.fee_wallet(), fee)?;
            funds.push_token(token, BURN_SINK, amount - fee)
        }
        (TransferResult::Deal, AssetKind::Native) => {
            // The fee transfer happens even when the computed fee is zero.
            let fee = compute_fee(amount, fees.rate_per_mille(), min_amount);
            funds.transfer_native(fees.fee_wallet(), fee)?;
            funds.transfer_native(BURN_SINK, amount - fee)
        }
    }
}

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use super::*;

    #[test]
    fn test_proportional_fee_above_floor() {
        // 5/1000 of 10_000 = 50, above a floor of 10.
        assert_eq!(
            compute_fee(U256::from(10_000u64), 5, U256::from(10u64)),
            U256::from(50u64)
        );
    }

    #[test]
    fn test_floor_dominates_small_amounts() {
        // 5/1000 of 100 = 0 (integer division), lifted to the floor.
        assert_eq!(
            compute_fee(U256::from(100u64), 5, U256::from(10u64)),
            U256::from(10u64)
        );
    }

    #[test]
    fn test_fee_clamped_to_principal() {
        // Floor above the principal is clamped, never underflowing the
        // burned remainder.
        assert_eq!(
            compute_fee(U256::from(5u64), 5, U256::from(10u64)),
            U256::from(5u64)
        );
    }

    #[test]
    fn test_zero_policy_charges_nothing() {
        assert_eq!(compute_fee(U256::from(777u64), 0, U256::ZERO), U256::ZERO);
    }

    proptest! {
        #[test]
        fn prop_fee_never_exceeds_principal(
            amount in any::<u128>(),
            rate in 0u64..=FEE_DENOMINATOR,
            min in any::<u64>(),
        ) {
            let amount = U256::from(amount);
            let fee = compute_fee(amount, rate, U256::from(min));
            prop_assert!(fee <= amount);
            // The split always reassembles the principal exactly.
            prop_assert_eq!(fee + (amount - fee), amount);
        }

        #[test]
        fn prop_fee_at_least_proportional_share(
            amount in any::<u128>(),
            rate in 0u64..=FEE_DENOMINATOR,
            min in any::<u64>(),
        ) {
            let amount = U256::from(amount);
            let proportional =
                amount * U256::from(rate) / U256::from(FEE_DENOMINATOR);
            let fee = compute_fee(amount, rate, U256::from(min));
            prop_assert!(fee >= proportional.min(amount));
        }
    }
}
