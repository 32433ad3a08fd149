//! # Company Registry (EC-04)
//!
//! Catalog of the top companies auctioned by the marketplace.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): catalog entries, release schedule, errors
//! - **Ports Layer** (`ports/`): [`TopCompanyCatalog`], the seam the
//!   marketplace holds
//! - **Service Layer** (`service/`):
//!   - [`TopCompanyFactory`]: the seeded catalog
//!   - [`FixedIndexOverlay`]: decorator pinning names to auction indices
//!
//! ## Release Schedule
//!
//! ```text
//! releasable index at block b = (b - start_block) / blocks_in_between
//!
//! start_block ──┬── +240 ──┬── +240 ──┬── ...
//!  index 0..=0  │ 0..=1    │ 0..=2    │
//! ```
//!
//! The default schedule backdates `start_block` by 100 intervals, so indices
//! `0..=100` are open from the first block.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod domain;
pub mod ports;
pub mod service;

pub use domain::entities::{ReleaseSchedule, TopCompany};
pub use domain::errors::RegistryError;
pub use ports::inbound::TopCompanyCatalog;
pub use service::factory::TopCompanyFactory;
pub use service::overlay::FixedIndexOverlay;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
