//! # Ports Layer
//!
//! - **Outbound (Driven)**: [`outbound::RandomSource`], what the marketplace
//!   needs from a randomness provider

pub mod outbound;
