//! # Native Ledger
//!
//! Native-value balances owned by the host. Components move value through it
//! when a call carries payment, and payouts are credited back into it.

use crate::entities::{Address, U256};
use crate::errors::LedgerError;
use parking_lot::RwLock;
use std::collections::HashMap;
use std::sync::Arc;
use tracing::debug;

/// Shared handle to the native ledger.
pub type SharedLedger = Arc<RwLock<NativeLedger>>;

/// Native-value balance sheet.
#[derive(Debug, Default, Clone)]
pub struct NativeLedger {
    balances: HashMap<Address, U256>,
}

impl NativeLedger {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps a ledger into a shared handle.
    #[must_use]
    pub fn shared(self) -> SharedLedger {
        Arc::new(RwLock::new(self))
    }

    /// Mints native value into an account (genesis funding, test faucets).
    pub fn credit(&mut self, account: Address, amount: U256) -> Result<(), LedgerError> {
        let balance = self.balances.entry(account).or_default();
        *balance = balance
            .checked_add(amount)
            .ok_or(LedgerError::Overflow(account))?;
        Ok(())
    }

    /// Balance of an account; zero when unknown.
    #[must_use]
    pub fn balance_of(&self, account: &Address) -> U256 {
        self.balances.get(account).copied().unwrap_or_default()
    }

    /// Moves `amount` from `from` to `to`.
    ///
    /// Fails without touching either balance when `from` is short.
    pub fn transfer(&mut self, from: Address, to: Address, amount: U256) -> Result<(), LedgerError> {
        let available = self.balance_of(&from);
        if available < amount {
            return Err(LedgerError::InsufficientBalance {
                account: from,
                available,
                required: amount,
            });
        }
        if from == to || amount.is_zero() {
            return Ok(());
        }
        let target = self.balance_of(&to);
        let credited = target.checked_add(amount).ok_or(LedgerError::Overflow(to))?;
        self.balances.insert(from, available - amount);
        self.balances.insert(to, credited);
        debug!(%from, %to, %amount, "native transfer");
        Ok(())
    }
}
