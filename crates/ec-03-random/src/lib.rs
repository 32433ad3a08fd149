//! # Random Source (EC-03)
//!
//! Pseudo-random numbers for the super-privilege lucky draw and for the
//! performance of user-created companies.
//!
//! ## Architecture
//!
//! - **Domain Layer** (`domain/`): draw entropy and errors
//! - **Ports Layer** (`ports/`): [`RandomSource`], injected into the marketplace
//! - **Adapters** (`adapters/`):
//!   - [`KeccakRandomGenerator`]: keccak-256 over the draw entropy
//!   - [`SequenceRandom`]: scripted values for deterministic tests
//!
//! ## Security Notes
//!
//! Draws are predictable to anyone who knows the entropy. Every source is
//! owner-gated so only the marketplace, once it owns the source, can draw.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod adapters;
pub mod domain;
pub mod ports;

pub use adapters::keccak::KeccakRandomGenerator;
pub use adapters::sequence::SequenceRandom;
pub use domain::entities::DrawEntropy;
pub use domain::errors::RandomError;
pub use ports::outbound::RandomSource;

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
