//! # Keccak Random Generator

use sha3::{Digest, Keccak256};
use shared_types::{Address, U256};
use tracing::{debug, info, warn};

use crate::domain::entities::DrawEntropy;
use crate::domain::errors::RandomError;
use crate::ports::outbound::RandomSource;

/// Domain separator mixed into every draw.
const DRAW_TAG: &[u8] = b"ethecom.random.draw";

/// Keccak-based generator.
///
/// Holds no state besides its owner: a draw is a pure function of its
/// entropy, so callers vary the nonce to get distinct values.
#[derive(Debug, Clone)]
pub struct KeccakRandomGenerator {
    owner: Address,
}

impl KeccakRandomGenerator {
    /// Creates a generator owned by `owner`.
    #[must_use]
    pub fn new(owner: Address) -> Self {
        Self { owner }
    }
}

impl RandomSource for KeccakRandomGenerator {
    fn draw(&mut self, caller: Address, entropy: &DrawEntropy) -> Result<U256, RandomError> {
        if caller != self.owner {
            warn!("[ec-03] Rejected draw from non-owner {}", caller);
            return Err(RandomError::Unauthorized(caller));
        }
        let mut hasher = Keccak256::new();
        hasher.update(DRAW_TAG);
        hasher.update(entropy.to_bytes());
        let digest: [u8; 32] = hasher.finalize().into();
        debug!(
            "[ec-03] draw for {} at block {} nonce {}",
            entropy.account, entropy.block_number, entropy.nonce
        );
        Ok(U256::from_big_endian(&digest))
    }

    fn owner(&self) -> Address {
        self.owner
    }

    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), RandomError> {
        if caller != self.owner {
            return Err(RandomError::Unauthorized(caller));
        }
        info!("[ec-03] Ownership transferred {} -> {}", self.owner, new_owner);
        self.owner = new_owner;
        Ok(())
    }
}
