//! # Referral Rewarder (EC-05)
//!
//! Pays referral rewards in whole ECOM tokens from its own token balance.
//! A batch is all-or-nothing: it is priced in full and checked against the
//! balance before the first transfer.

#![warn(missing_docs)]
#![warn(clippy::all)]

mod errors;
mod rewarder;

pub use errors::ReferralError;
pub use rewarder::{ReferralRewarder, MAX_BATCH};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
