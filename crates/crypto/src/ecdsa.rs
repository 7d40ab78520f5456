//! Recoverable ECDSA signing and verification over keccak-256 digests.

use alloy_primitives::{keccak256, Address, B256};
use k256::ecdsa::{RecoveryId, Signature, VerifyingKey};

pub use k256::ecdsa::SigningKey;

/// Prefix of the standard signed-message wrap applied to a digest before
/// recovery.
const SIGNED_MESSAGE_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// A recoverable secp256k1 signature in `(v, r, s)` form.
///
/// Signature bundles align one slot per validator; an absent slot (`None` in
/// the bundle) is the abstention marker and never reaches recovery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EcdsaSignature {
    /// Recovery byte, accepted as 0/1 or 27/28.
    pub v: u8,
    pub r: B256,
    pub s: B256,
}

/// Applies the signed-message wrap to `digest`, yielding the prehash that is
/// actually signed.
pub fn wrap_digest(digest: &B256) -> B256 {
    let mut buf = [0u8; SIGNED_MESSAGE_PREFIX.len() + 32];
    buf[..SIGNED_MESSAGE_PREFIX.len()].copy_from_slice(SIGNED_MESSAGE_PREFIX);
    buf[SIGNED_MESSAGE_PREFIX.len()..].copy_from_slice(digest.as_slice());
    keccak256(buf)
}

/// Derives the 20-byte address of a verifying key: keccak-256 of the
/// uncompressed point without its tag byte, low 20 bytes.
pub fn address_of(key: &VerifyingKey) -> Address {
    let point = key.to_encoded_point(false);
    let hash = keccak256(&point.as_bytes()[1..]);
    Address::from_slice(&hash[12..])
}

fn normalize_v(v: u8) -> Option<u8> {
    match v {
        0 | 1 => Some(v),
        27 | 28 => Some(v - 27),
        _ => None,
    }
}

/// Recovers the signer address of `sig` over the wrapped `digest`.
///
/// Returns `None` for signatures that fail to parse or recover.
pub fn recover_signer(digest: &B256, sig: &EcdsaSignature) -> Option<Address> {
    let recovery_id = RecoveryId::from_byte(normalize_v(sig.v)?)?;

    let mut raw = [0u8; 64];
    raw[..32].copy_from_slice(sig.r.as_slice());
    raw[32..].copy_from_slice(sig.s.as_slice());
    let signature = Signature::from_slice(&raw).ok()?;

    let wrapped = wrap_digest(digest);
    let key = VerifyingKey::recover_from_prehash(wrapped.as_slice(), &signature, recovery_id).ok()?;
    Some(address_of(&key))
}

/// Checks that `sig` over `digest` was produced by `expected`.
pub fn verify_signature(expected: Address, digest: &B256, sig: &EcdsaSignature) -> bool {
    recover_signer(digest, sig) == Some(expected)
}

/// Signs `digest` (with the signed-message wrap applied) and returns the
/// `(v, r, s)` signature with `v` in 27/28 form.
pub fn sign_digest(digest: &B256, sk: &SigningKey) -> EcdsaSignature {
    let wrapped = wrap_digest(digest);
    let (signature, recovery_id) = sk
        .sign_prehash_recoverable(wrapped.as_slice())
        .expect("ecdsa: signing a 32-byte prehash");
    let raw = signature.to_bytes();
    EcdsaSignature {
        v: recovery_id.to_byte() + 27,
        r: B256::from_slice(&raw[..32]),
        s: B256::from_slice(&raw[32..]),
    }
}
