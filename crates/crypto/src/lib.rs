//! Cryptographic primitives for the validator relay: checkpoint digests,
//! recoverable ECDSA over keccak-256, and threshold-signature bundle
//! verification.

pub mod checkpoint;
pub mod ecdsa;
pub mod errors;
pub mod threshold;

pub use checkpoint::compute_checkpoint;
pub use ecdsa::{recover_signer, sign_digest, verify_signature, EcdsaSignature};
pub use errors::ThresholdError;
pub use threshold::{check_threshold, check_total_power, ensure_bundle_shape};
