//! # Shared Bus - Marketplace Event Log
//!
//! Ordered, append-only record of everything the marketplace did.
//!
//! ## Model
//!
//! ```text
//! ┌──────────────┐   publish()   ┌────────────────────┐  subscribe()  ┌────────────┐
//! │ Marketplace  │ ────────────▶ │ InMemoryEventLog   │ ────────────▶ │ Subscriber │
//! │ (ec-06)      │               │ history + channel  │               │ (indexer)  │
//! └──────────────┘               └────────────────────┘               └────────────┘
//!                                        │
//!                                        └── events() / events_since(seq)
//! ```
//!
//! Every record gets a sequence number (strictly increasing, starting at 1)
//! and the block number of the call that produced it. Live subscribers get
//! records over a `tokio::sync::broadcast` channel; readers that attach late
//! replay the retained history instead.

#![allow(clippy::missing_const_for_fn)]
#![cfg_attr(test, allow(clippy::unwrap_used))]
#![cfg_attr(test, allow(clippy::expect_used))]

pub mod events;
pub mod publisher;
pub mod subscriber;

pub use events::{EventFilter, EventRecord, EventTopic, MarketEvent};
pub use publisher::{EventPublisher, InMemoryEventLog};
pub use subscriber::{Subscription, SubscriptionError};

/// Maximum records buffered per live subscriber before it lags.
pub const DEFAULT_CHANNEL_CAPACITY: usize = 1000;
