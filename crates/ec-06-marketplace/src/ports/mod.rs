//! # Ports Layer
//!
//! - `inbound`: [`MarketplaceApi`](inbound::MarketplaceApi), what external
//!   callers program against
//! - `outbound`: the component seams the marketplace drives

pub mod inbound;
pub mod outbound;
