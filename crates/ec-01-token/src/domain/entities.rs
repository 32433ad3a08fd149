//! # Token Entities

use serde::{Deserialize, Serialize};
use shared_types::U256;

use super::errors::TokenError;

/// Deployment parameters of a token.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct TokenConfig {
    /// Human-readable name.
    pub name: String,
    /// Ticker.
    pub symbol: String,
    /// Number of decimal places in one whole token.
    pub decimals: u8,
    /// Whole tokens minted to the creator.
    pub initial_supply: u64,
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            name: "Ethecom Token".to_string(),
            symbol: "ECOM".to_string(),
            decimals: 8,
            initial_supply: 2_000_000_000,
        }
    }
}

impl TokenConfig {
    /// Base units in one whole token (`10^decimals`).
    pub fn unit(&self) -> Result<U256, TokenError> {
        U256::from(10u8)
            .checked_pow(U256::from(self.decimals))
            .ok_or(TokenError::Overflow)
    }

    /// Initial supply in base units.
    pub fn total_supply(&self) -> Result<U256, TokenError> {
        U256::from(self.initial_supply)
            .checked_mul(self.unit()?)
            .ok_or(TokenError::Overflow)
    }
}
