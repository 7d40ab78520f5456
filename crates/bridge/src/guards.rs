//! Access-control and call-protection capabilities held by the bridge state.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};

use crate::errors::BridgeError;

/// Owner capability. A single privileged address controls asset listing,
/// fee policy, and pausing; it has no authority over transfer outcomes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OwnerGate {
    owner: Address,
}

impl OwnerGate {
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }

    pub fn owner(&self) -> Address {
        self.owner
    }

    /// Rejects callers other than the owner.
    pub fn require(&self, caller: Address) -> Result<(), BridgeError> {
        if caller != self.owner {
            return Err(BridgeError::NotOwner(caller));
        }
        Ok(())
    }
}

/// Pause capability. While engaged, state-mutating transfer and rotation
/// operations are rejected; owner controls stay available so the pause can
/// be lifted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PauseGate {
    paused: bool,
}

impl PauseGate {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    pub fn set(&mut self, paused: bool) {
        self.paused = paused;
    }

    /// Rejects the call while the gate is engaged.
    pub fn check(&self) -> Result<(), BridgeError> {
        if self.paused {
            return Err(BridgeError::Paused);
        }
        Ok(())
    }
}

/// Non-reentrancy capability wrapped around every operation that moves
/// funds. Entry is exclusive; a nested entry is rejected rather than
/// deadlocked.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ReentrancyGuard {
    entered: bool,
}

impl ReentrancyGuard {
    pub fn enter(&mut self) -> Result<(), BridgeError> {
        if self.entered {
            return Err(BridgeError::ReentrantCall);
        }
        self.entered = true;
        Ok(())
    }

    pub fn exit(&mut self) {
        self.entered = false;
    }
}
