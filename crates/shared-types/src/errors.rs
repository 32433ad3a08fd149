//! # Error Types
//!
//! Errors raised by the shared primitives.

use crate::entities::{Address, U256};
use thiserror::Error;

/// Validation errors for shared value types.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TypesError {
    /// Company names must contain at least one byte.
    #[error("Company name is empty")]
    EmptyName,

    /// Company name exceeds the fixed width.
    #[error("Company name too long: {len} bytes, max {max}")]
    NameTooLong { len: usize, max: usize },

    /// Logo URL exceeds the fixed width.
    #[error("Logo URL too long: {len} bytes, max {max}")]
    LogoUrlTooLong { len: usize, max: usize },
}

/// Errors from the native-value ledger.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LedgerError {
    /// Sender cannot fund the transfer.
    #[error("Insufficient native balance: {account} has {available}, needs {required}")]
    InsufficientBalance {
        account: Address,
        available: U256,
        required: U256,
    },

    /// Crediting would overflow a balance.
    #[error("Native balance overflow for {0}")]
    Overflow(Address),
}
