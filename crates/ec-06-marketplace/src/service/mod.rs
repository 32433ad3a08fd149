//! # Service Layer
//!
//! - [`marketplace`]: the state machine, `&mut self` operations
//! - [`shared`]: [`MarketplaceService`](shared::MarketplaceService), the
//!   single-writer handle implementing the inbound ports

pub mod marketplace;
pub mod shared;
