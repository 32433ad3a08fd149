//! # Ports Layer
//!
//! - **Inbound (Driving)**: [`inbound::TokenApi`], the operations callers use

pub mod inbound;
