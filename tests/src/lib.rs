//! # Ethecom Test Suite
//!
//! Cross-component scenarios run against a fully deployed marketplace.
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! ├── harness.rs        # Deployment fixture, players, block clock
//! └── integration/      # Scenario suites
//!     ├── market_flows.rs      # purchases, resale pricing, creation
//!     ├── yield_flows.rs       # performance bookkeeping and claims
//!     ├── privilege_flows.rs   # lucky draw and permanent ownership
//!     ├── catalog_flows.rs     # name availability, overlay, schedule
//!     ├── security.rs          # rejected operations
//!     ├── events.rs            # event log and subscriptions
//!     └── invariants.rs        # randomized and concurrent churn
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! cargo test -p ec-tests
//! cargo test -p ec-tests integration::security::
//! ```

#![allow(dead_code)]
