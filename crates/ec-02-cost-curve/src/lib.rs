//! # Cost Curve (EC-02)
//!
//! Pure pricing functions of the marketplace.
//!
//! ## Functions
//!
//! - [`creation_cost`]: whole tokens charged to create the next company,
//!   stepping up as the catalog grows
//! - [`next_price`]: resale price after a purchase, multiplied per price band
//! - [`previous_price`]: inverse of `next_price` on its image
//!
//! ## Price Bands
//!
//! ```text
//! price (ether)   [0, 0.1)  [0.1, 1)  [1, 5)  [5, 10)  [10, ∞)
//! multiplier        2.0       1.6      1.4     1.2      1.1
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;

pub use domain::bands::{PriceBand, CREATION_COST_STEPS, PRICE_BANDS};
pub use domain::pricing::{creation_cost, next_price, previous_price};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
