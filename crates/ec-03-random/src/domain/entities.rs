//! # Draw Entropy

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber};

/// Inputs mixed into one draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DrawEntropy {
    /// Account the draw is for.
    pub account: Address,
    /// Block of the calling operation.
    pub block_number: BlockNumber,
    /// Caller-maintained counter, distinct per draw.
    pub nonce: u64,
}

impl DrawEntropy {
    /// Byte encoding fed to the hash: account, then big-endian block and nonce.
    #[must_use]
    pub fn to_bytes(&self) -> [u8; 36] {
        let mut out = [0u8; 36];
        out[..20].copy_from_slice(self.account.as_bytes());
        out[20..28].copy_from_slice(&self.block_number.to_be_bytes());
        out[28..].copy_from_slice(&self.nonce.to_be_bytes());
        out
    }
}
