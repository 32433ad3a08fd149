//! # Inbound Ports
//!
//! The token surface seen by accounts and by other components.

use shared_types::{Address, U256};

use crate::domain::errors::TokenError;

/// Token operations.
///
/// `caller` is the authenticated sender supplied by the host.
pub trait TokenApi: Send + Sync {
    /// Total base units in existence.
    fn total_supply(&self) -> U256;

    /// Base units held by `account`.
    fn balance_of(&self, account: &Address) -> U256;

    /// Base units `spender` may still move out of `holder`.
    fn allowance(&self, holder: &Address, spender: &Address) -> U256;

    /// Moves `amount` from `caller` to `to`.
    fn transfer(&mut self, caller: Address, to: Address, amount: U256) -> Result<(), TokenError>;

    /// Sets the allowance `caller` grants to `spender`.
    fn approve(&mut self, caller: Address, spender: Address, amount: U256) -> Result<(), TokenError>;

    /// Moves `amount` from `from` to `to`, spending `caller`'s allowance.
    fn transfer_from(
        &mut self,
        caller: Address,
        from: Address,
        to: Address,
        amount: U256,
    ) -> Result<(), TokenError>;

    /// Owner-only: sets the allowance `holder` grants to the owner.
    fn owner_approve(&mut self, caller: Address, holder: Address, amount: U256) -> Result<(), TokenError>;

    /// Owner-only: hands ownership to `new_owner`.
    fn transfer_ownership(&mut self, caller: Address, new_owner: Address) -> Result<(), TokenError>;
}
