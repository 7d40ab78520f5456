//! Validator-set checkpoint digests.
//!
//! A checkpoint is the single value trusted to represent "the current
//! validator set": a keccak-256 digest binding a rotation nonce, the
//! validator identities, and their voting powers.

use alloy_primitives::{keccak256, Address, B256};

/// Domain separator distinguishing checkpoint digests from other uses of
/// keccak-256.
pub const CHECKPOINT_DOMAIN: &[u8] = b"RELAY_VALSET_CHECKPOINT_V1";

/// Computes the binding digest over a validator set, its voting powers and a
/// rotation nonce.
///
/// The packing is order-sensitive and all fields are fixed width, so for
/// inputs of equal length two distinct `(nonce, validators, powers)` triples
/// practically never collide. Pure: identical inputs always yield identical
/// output.
///
/// Callers are responsible for checking that `validators` and `powers` have
/// equal length before trusting the digest.
pub fn compute_checkpoint(validators: &[Address], powers: &[u64], rotation_nonce: u64) -> B256 {
    let mut buf = Vec::with_capacity(CHECKPOINT_DOMAIN.len() + 8 + validators.len() * 28);
    buf.extend_from_slice(CHECKPOINT_DOMAIN);
    buf.extend_from_slice(&rotation_nonce.to_be_bytes());
    for (validator, power) in validators.iter().zip(powers) {
        buf.extend_from_slice(validator.as_slice());
        buf.extend_from_slice(&power.to_be_bytes());
    }
    keccak256(&buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_addr(id: u8) -> Address {
        Address::from([id; 20])
    }

    #[test]
    fn test_checkpoint_deterministic() {
        let validators = vec![make_addr(1), make_addr(2), make_addr(3)];
        let powers = vec![100, 200, 300];

        let a = compute_checkpoint(&validators, &powers, 7);
        let b = compute_checkpoint(&validators, &powers, 7);
        assert_eq!(a, b);
    }

    #[test]
    fn test_checkpoint_sensitive_to_every_input() {
        let validators = vec![make_addr(1), make_addr(2)];
        let powers = vec![100, 200];
        let base = compute_checkpoint(&validators, &powers, 0);

        // Change a validator.
        let changed = compute_checkpoint(&[make_addr(1), make_addr(9)], &powers, 0);
        assert_ne!(base, changed);

        // Change a power.
        let changed = compute_checkpoint(&validators, &[100, 201], 0);
        assert_ne!(base, changed);

        // Change the nonce.
        let changed = compute_checkpoint(&validators, &powers, 1);
        assert_ne!(base, changed);

        // Change the order.
        let changed = compute_checkpoint(&[make_addr(2), make_addr(1)], &[200, 100], 0);
        assert_ne!(base, changed);

        // Change the length.
        let changed = compute_checkpoint(&validators[..1], &powers[..1], 0);
        assert_ne!(base, changed);
    }
}
