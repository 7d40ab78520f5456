//! Fixed protocol constants.

use alloy_primitives::{address, Address};

/// Sentinel address denoting the native asset at the external call boundary.
///
/// Resolved into [`crate::AssetKind::Native`] once at deposit intake; the
/// sentinel is never re-inspected after that.
pub const NATIVE_ASSET: Address = Address::ZERO;

/// Non-recoverable destination representing value removed from circulation
/// when a transfer settles successfully.
pub const BURN_SINK: Address = address!("000000000000000000000000000000000000dEaD");

/// Domain separator for finalization-result digests.
pub const RESULT_DOMAIN: &[u8] = b"RELAY_TRANSFER_RESULT_V1";
