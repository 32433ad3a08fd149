//! # Outbound Ports

use shared_types::{Address, U256};

use crate::domain::entities::DrawEntropy;
use crate::domain::errors::RandomError;

/// A pseudo-random number provider.
///
/// Implementations must reject draws from anyone but their owner.
pub trait RandomSource: Send + Sync {
    /// Draws a number for `entropy`.
    ///
    /// # Errors
    /// * `RandomError::Unauthorized` - `caller` is not the owner
    fn draw(&mut self, caller: Address, entropy: &DrawEntropy) -> Result<U256, RandomError>;

    /// Current owner.
    fn owner(&self) -> Address;

    /// Owner-only: hands the source to `new_owner`.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), RandomError>;
}
