//! Bridge state: the owned aggregate and its components.

mod bridge;
mod config;
mod ledger;
mod policy;
mod transfer;
mod valset;

pub use bridge::BridgeState;
pub use config::{BridgeConfig, FeeConfig};
pub use ledger::TransferLedger;
pub use policy::{AssetPolicy, AssetPolicyTable};
pub use transfer::{AssetKind, TransferEvent, TransferResult, TransferStatus};
pub use valset::ValsetCheckpoint;
