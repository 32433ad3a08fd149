//! # Outbound Ports
//!
//! The marketplace holds each dependency behind the trait its component
//! publishes, so deployments and tests can swap implementations.
//!
//! | Seam | Used for |
//! |------|----------|
//! | [`TokenApi`] | fees, ticket costs, creation costs, yield payouts |
//! | [`TopCompanyCatalog`] | top-company lookups and release schedule |
//! | [`RandomSource`] | lucky-draw rolls and user-company performance |
//! | [`EventPublisher`] | the ordered event log |

pub use ec_01_token::TokenApi;
pub use ec_03_random::RandomSource;
pub use ec_04_company_registry::TopCompanyCatalog;
pub use shared_bus::EventPublisher;
