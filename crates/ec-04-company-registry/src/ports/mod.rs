//! # Ports Layer
//!
//! - **Inbound (Driving)**: [`inbound::TopCompanyCatalog`]

pub mod inbound;
