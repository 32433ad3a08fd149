//! Marketplace and deployment configuration.
//!
//! # Example
//!
//! ```ignore
//! use ec_06_marketplace::{DeploymentConfig, MarketConfig};
//!
//! let config = DeploymentConfig::default()
//!     .with_market(MarketConfig::default().with_blocks_per_day(1000));
//! config.validate()?;
//! ```

use ec_01_token::TokenConfig;
use serde::{Deserialize, Serialize};
use shared_types::{milli_ether, CompanyName, LogoUrl, U256};
use std::env;
use std::str::FromStr;
use tracing::warn;

use super::errors::MarketError;

/// Tunable marketplace parameters. Token amounts are whole tokens.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MarketConfig {
    /// Value required to buy a top company, in wei.
    pub top_company_start_price: U256,
    /// Blocks per day; yield is `performance` tokens per day.
    pub blocks_per_day: u64,
    /// Lowest winning lucky-draw roll.
    pub min_random_privilege_value: u64,
    /// Tokens per lucky-draw ticket.
    pub super_privilege_cost: u64,
    /// Upper bound on the performance of a user-created company.
    pub max_user_created_performance: u64,
    /// Tokens charged per logo update.
    pub logo_fee: u64,
}

impl Default for MarketConfig {
    fn default() -> Self {
        Self {
            top_company_start_price: milli_ether(1), // 0.001 ether
            blocks_per_day: 5760,                    // 15s blocks
            min_random_privilege_value: 90,
            super_privilege_cost: 10,
            max_user_created_performance: 35,
            logo_fee: 2,
        }
    }
}

impl MarketConfig {
    /// Defaults overridden from environment variables.
    ///
    /// # Environment Variables
    ///
    /// - `EC_TOP_COMPANY_START_PRICE`: wei, decimal
    /// - `EC_BLOCKS_PER_DAY`
    /// - `EC_MIN_PRIVILEGE_ROLL`
    /// - `EC_SUPER_PRIVILEGE_COST`
    /// - `EC_MAX_USER_PERFORMANCE`
    /// - `EC_LOGO_FEE`
    ///
    /// Unparseable values are logged and ignored.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            top_company_start_price: env::var("EC_TOP_COMPANY_START_PRICE")
                .ok()
                .and_then(|raw| match U256::from_dec_str(raw.trim()) {
                    Ok(value) => Some(value),
                    Err(_) => {
                        warn!(value = %raw, "Ignoring invalid EC_TOP_COMPANY_START_PRICE");
                        None
                    }
                })
                .unwrap_or(defaults.top_company_start_price),
            blocks_per_day: env_parse("EC_BLOCKS_PER_DAY").unwrap_or(defaults.blocks_per_day),
            min_random_privilege_value: env_parse("EC_MIN_PRIVILEGE_ROLL")
                .unwrap_or(defaults.min_random_privilege_value),
            super_privilege_cost: env_parse("EC_SUPER_PRIVILEGE_COST")
                .unwrap_or(defaults.super_privilege_cost),
            max_user_created_performance: env_parse("EC_MAX_USER_PERFORMANCE")
                .unwrap_or(defaults.max_user_created_performance),
            logo_fee: env_parse("EC_LOGO_FEE").unwrap_or(defaults.logo_fee),
        }
    }

    /// Rejects values the marketplace cannot operate with.
    pub fn validate(&self) -> Result<(), MarketError> {
        if self.blocks_per_day == 0 {
            return Err(MarketError::InvalidInput(
                "blocks_per_day cannot be 0".to_string(),
            ));
        }
        if self.max_user_created_performance == 0 {
            return Err(MarketError::InvalidInput(
                "max_user_created_performance cannot be 0".to_string(),
            ));
        }
        if self.top_company_start_price.is_zero() {
            return Err(MarketError::InvalidInput(
                "top_company_start_price cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style setter for blocks per day.
    #[must_use]
    pub fn with_blocks_per_day(mut self, blocks_per_day: u64) -> Self {
        self.blocks_per_day = blocks_per_day;
        self
    }

    /// Builder-style setter for the lucky-draw parameters.
    #[must_use]
    pub fn with_super_privilege(mut self, min_roll: u64, cost: u64) -> Self {
        self.min_random_privilege_value = min_roll;
        self.super_privilege_cost = cost;
        self
    }

    /// Builder-style setter for the logo fee.
    #[must_use]
    pub fn with_logo_fee(mut self, fee: u64) -> Self {
        self.logo_fee = fee;
        self
    }
}

/// A catalog entry to seed at deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TopCompanySeed {
    /// Company name.
    pub name: CompanyName,
    /// Yield weight.
    pub performance: u64,
    /// Logo URL.
    #[serde(default)]
    pub logo_url: LogoUrl,
}

/// Everything the launch sequence needs.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeploymentConfig {
    /// Token parameters.
    pub token: TokenConfig,
    /// Marketplace parameters.
    pub market: MarketConfig,
    /// Whole tokens moved from the deployer into the marketplace reserve.
    pub market_token_reserve: u64,
    /// Overrides the default top-company release interval.
    pub blocks_in_between: Option<u64>,
    /// Catalog entries in auction order.
    pub top_companies: Vec<TopCompanySeed>,
    /// Names pinned to indices `0..` through a fixed-index overlay. Empty
    /// means no overlay.
    pub pinned_companies: Vec<CompanyName>,
}

impl Default for DeploymentConfig {
    fn default() -> Self {
        Self {
            token: TokenConfig::default(),
            market: MarketConfig::default(),
            market_token_reserve: 1_900_000_000,
            blocks_in_between: None,
            top_companies: Vec::new(),
            pinned_companies: Vec::new(),
        }
    }
}

impl DeploymentConfig {
    /// Defaults with `EC_*` overrides. See [`MarketConfig::from_env`];
    /// additionally `EC_MARKET_TOKEN_RESERVE` and `EC_BLOCKS_IN_BETWEEN`.
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            market: MarketConfig::from_env(),
            market_token_reserve: env_parse("EC_MARKET_TOKEN_RESERVE")
                .unwrap_or(defaults.market_token_reserve),
            blocks_in_between: env_parse("EC_BLOCKS_IN_BETWEEN").or(defaults.blocks_in_between),
            ..defaults
        }
    }

    /// Parses a JSON document; missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, MarketError> {
        let config: Self = serde_json::from_str(json)
            .map_err(|e| MarketError::InvalidInput(format!("deployment config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Validates the market section and the reserve against supply.
    pub fn validate(&self) -> Result<(), MarketError> {
        self.market.validate()?;
        if self.market_token_reserve > self.token.initial_supply {
            return Err(MarketError::InvalidInput(format!(
                "market_token_reserve {} exceeds initial supply {}",
                self.market_token_reserve, self.token.initial_supply
            )));
        }
        if self.blocks_in_between == Some(0) {
            return Err(MarketError::InvalidInput(
                "blocks_in_between cannot be 0".to_string(),
            ));
        }
        Ok(())
    }

    /// Builder-style setter for the market section.
    #[must_use]
    pub fn with_market(mut self, market: MarketConfig) -> Self {
        self.market = market;
        self
    }

    /// Builder-style setter for the seeded catalog.
    #[must_use]
    pub fn with_top_companies(mut self, companies: Vec<TopCompanySeed>) -> Self {
        self.top_companies = companies;
        self
    }

    /// Builder-style setter for the pinned names.
    #[must_use]
    pub fn with_pinned_companies(mut self, names: Vec<CompanyName>) -> Self {
        self.pinned_companies = names;
        self
    }
}

fn env_parse<T: FromStr>(key: &str) -> Option<T> {
    let raw = env::var(key).ok()?;
    match raw.trim().parse() {
        Ok(value) => Some(value),
        Err(_) => {
            warn!(key, value = %raw, "Ignoring unparseable environment override");
            None
        }
    }
}
