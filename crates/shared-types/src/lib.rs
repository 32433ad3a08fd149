//! # Shared Types Crate
//!
//! Primitives shared by every Ethecom component.
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: addresses, names and value types used across
//!   component boundaries are defined here and nowhere else.
//! - **Host Boundary**: consensus, signing and gas belong to the host. The host
//!   is reduced to a [`CallContext`] (who calls, with how much value, at which
//!   block) and a [`NativeLedger`] holding native-value balances.
//! - **Case-Insensitive Identity**: companies are looked up by [`NameKey`], the
//!   keccak-256 hash of the lower-cased name, while the original spelling is
//!   kept for display.

pub mod context;
pub mod entities;
pub mod errors;
pub mod ledger;

pub use context::CallContext;
pub use entities::*;
pub use errors::*;
pub use ledger::{NativeLedger, SharedLedger};
