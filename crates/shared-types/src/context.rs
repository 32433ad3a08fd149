//! # Call Context
//!
//! What the host hands to every state-changing call.

use crate::entities::{Address, BlockNumber, U256};
use serde::{Deserialize, Serialize};

/// The authenticated sender, attached native value and current block.
///
/// The host is trusted for all three fields; components never derive the
/// sender from anything else.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallContext {
    /// Authenticated caller.
    pub sender: Address,
    /// Native value attached to the call, in wei.
    pub value: U256,
    /// Block at which the call executes.
    pub block_number: BlockNumber,
}

impl CallContext {
    /// A call without attached value.
    #[must_use]
    pub fn new(sender: Address, block_number: BlockNumber) -> Self {
        Self {
            sender,
            value: U256::zero(),
            block_number,
        }
    }

    /// Attaches native value to the call.
    #[must_use]
    pub fn with_value(mut self, value: U256) -> Self {
        self.value = value;
        self
    }
}
