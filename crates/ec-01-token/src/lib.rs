//! # ECOM Token (EC-01)
//!
//! Fungible token in which creation costs, logo fees, lucky-draw tickets and
//! performance yield are paid.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): token configuration and errors
//! - **Ports Layer** (`ports/`): the [`TokenApi`] every caller programs against
//! - **Service Layer** (`service.rs`): [`FungibleToken`], the balance sheet
//!
//! ## Owner Approval
//!
//! Beyond the usual `transfer` / `approve` / `transfer_from`, the owner may set
//! the allowance any holder grants *to the owner* via `owner_approve`. Once
//! ownership is handed to the marketplace, this is how it charges fees without
//! a prior `approve` from the payer.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::TokenConfig;
pub use domain::errors::TokenError;
pub use ports::inbound::TokenApi;
pub use service::{FungibleToken, SharedToken};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
