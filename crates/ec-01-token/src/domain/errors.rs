//! # Token Errors

use shared_types::{Address, U256};
use thiserror::Error;

/// Errors raised by token operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TokenError {
    /// Sender balance is below the amount.
    #[error("Insufficient balance: {account} has {available}, needs {required}")]
    InsufficientBalance {
        account: Address,
        available: U256,
        required: U256,
    },

    /// Spender allowance is below the amount.
    #[error("Insufficient allowance: {spender} may spend {allowed} of {holder}, needs {required}")]
    InsufficientAllowance {
        holder: Address,
        spender: Address,
        allowed: U256,
        required: U256,
    },

    /// Caller is not the token owner.
    #[error("Unauthorized: {0} is not the token owner")]
    Unauthorized(Address),

    /// Transfers to the zero address are rejected.
    #[error("Transfer to the zero address")]
    ZeroAddress,

    /// Arithmetic overflow.
    #[error("Arithmetic overflow")]
    Overflow,
}
