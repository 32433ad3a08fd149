//! # Marketplace Entities
//!
//! ## Company lifecycle
//!
//! ```text
//!                 purchase_top_company            purchase_company
//! Unregistered ─────────────────────────▶ Top(onsale) ◀──────────┐
//!      │                    │ claim                  └───────────┘
//!      │                    ▼
//!      │               Top(permanent)   (terminal)
//!      │ create_company
//!      ▼              permanently_own_my_company
//! User(onsale) ─────────────────────────────▶ User(permanent)
//!      ▲                                            │
//!      └────────────── put_company_onsale ──────────┘
//! ```

use serde::{Deserialize, Serialize};
use shared_types::{Address, BlockNumber, CompanyName, LogoUrl, U256};

use super::errors::MarketError;

/// A company held by the marketplace.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Company {
    /// Name as first registered.
    pub name: CompanyName,
    /// Logo URL.
    pub logo_url: LogoUrl,
    /// Current owner.
    pub owner: Address,
    /// Asking price in wei.
    pub price: U256,
    /// Price the current owner paid; zero for a company its creator paid for
    /// in tokens.
    pub last_price: U256,
    /// Yield weight.
    pub performance: u64,
    /// Listed for sale.
    pub is_onsale: bool,
    /// Seeded from the top-company catalog.
    pub is_top_company: bool,
    /// Held off the market with a super privilege.
    pub is_permanent: bool,
    /// Block the company entered the marketplace.
    pub created_at_block: BlockNumber,
}

/// Per-account aggregates.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountState {
    /// Sum of performance over owned companies.
    pub owned_performance: u64,
    /// Unspent super-privilege credits.
    pub super_privilege_count: u64,
    /// Block yield was last settled at.
    pub last_token_claimed_block: BlockNumber,
    /// Yield settled at earlier performance levels, not yet claimed.
    pub accrued_yield: U256,
}

impl AccountState {
    /// Yield earned since the last settlement at the current performance.
    pub fn pending_since_checkpoint(
        &self,
        block: BlockNumber,
        unit: U256,
        blocks_per_day: u64,
    ) -> Result<U256, MarketError> {
        let elapsed = block.saturating_sub(self.last_token_claimed_block);
        let per_block = U256::from(self.owned_performance)
            .checked_mul(unit)
            .ok_or(MarketError::Overflow)?
            / U256::from(blocks_per_day.max(1));
        per_block
            .checked_mul(U256::from(elapsed))
            .ok_or(MarketError::Overflow)
    }

    /// Total claimable yield at `block`.
    pub fn claimable(&self, block: BlockNumber, unit: U256, blocks_per_day: u64) -> Result<U256, MarketError> {
        self.accrued_yield
            .checked_add(self.pending_since_checkpoint(block, unit, blocks_per_day)?)
            .ok_or(MarketError::Overflow)
    }

    /// Settles yield up to `block` so a performance change starts a fresh
    /// segment.
    pub fn checkpoint(&mut self, block: BlockNumber, unit: U256, blocks_per_day: u64) -> Result<(), MarketError> {
        self.accrued_yield = self.claimable(block, unit, blocks_per_day)?;
        self.last_token_claimed_block = block;
        Ok(())
    }
}

/// Result of a name availability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum NameAvailability {
    /// Free to create.
    Available,
    /// Collides with a catalog entry.
    TakenInRegistry,
    /// Collides with a marketplace company.
    TakenInMarketplace,
}

impl NameAvailability {
    /// Whether the name can be used.
    #[must_use]
    pub fn is_available(self) -> bool {
        self == Self::Available
    }
}

/// Outcome of one lucky-draw ticket.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct LuckyDrawOutcome {
    /// Roll in `0..100`.
    pub roll: u64,
    /// Whether the roll met the threshold.
    pub won: bool,
    /// Privilege count after the draw.
    pub privilege_count: u64,
}
