//! # Referral Errors

use ec_01_token::TokenError;
use shared_types::{Address, U256};
use thiserror::Error;

/// Errors raised by the rewarder.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReferralError {
    /// Caller is not the rewarder owner.
    #[error("Unauthorized: {0} is not the rewarder owner")]
    Unauthorized(Address),

    /// Malformed batch.
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    /// Batch total exceeds the rewarder's token balance.
    #[error("Insufficient balance: rewarder holds {available}, batch needs {required}")]
    InsufficientBalance { available: U256, required: U256 },

    /// Batch total does not fit in 256 bits.
    #[error("Arithmetic overflow")]
    Overflow,

    /// Underlying token failure.
    #[error("Token error: {0}")]
    Token(#[from] TokenError),
}
