//! # Marketplace (EC-06)
//!
//! Trading core of the economy: top-company auctions, resale along the price
//! curve, user-created companies, the super-privilege lottery and
//! performance yield.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): company and account records, resale
//!   settlement, configuration, [`MarketError`]
//! - **Ports Layer** (`ports/`): [`MarketplaceApi`] and
//!   [`MarketplaceAdminApi`] inbound; token, catalog, random source and event
//!   publisher outbound
//! - **Service Layer** (`service/`): [`Marketplace`] and the single-writer
//!   [`MarketplaceService`]
//! - **Deployment** (`deployment.rs`): [`Deployment`], the launch sequence
//!
//! ## Money Flow
//!
//! ```text
//!                    native value (wei)                 tokens (ECOM)
//! purchase_top_company  buyer ──▶ market        create_company   creator ──▶ market
//! purchase_company      buyer ──▶ market        update_logo_url  owner   ──▶ market
//!                       market ──▶ seller       lucky draw       player  ──▶ market
//!                       (last_price + 80% of    claim_my_token   market  ──▶ owner
//!                        profit)
//! withdraw              market ──▶ admin
//! ```
//!
//! ## Yield
//!
//! ```text
//! claimable = accrued + performance * unit / blocks_per_day * (block - last_claim)
//! ```
//!
//! `accrued` is settled whenever an account's performance changes, so buying
//! or selling never loses or double counts earned yield.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod deployment;
pub mod domain;
pub mod ports;
pub mod service;

pub use deployment::Deployment;
pub use domain::config::{DeploymentConfig, MarketConfig, TopCompanySeed};
pub use domain::entities::{AccountState, Company, LuckyDrawOutcome, NameAvailability};
pub use domain::errors::MarketError;
pub use domain::settlement::{Settlement, SELLER_PROFIT_SHARE_PERCENT};
pub use ports::inbound::{MarketplaceAdminApi, MarketplaceApi};
pub use service::marketplace::{Marketplace, MarketplaceParts, LUCKY_DRAW_RANGE};
pub use service::shared::MarketplaceService;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
