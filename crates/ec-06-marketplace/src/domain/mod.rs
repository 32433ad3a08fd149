//! # Domain Layer
//!
//! Marketplace records, resale settlement, configuration and the error
//! taxonomy. No I/O.

pub mod config;
pub mod entities;
pub mod errors;
pub mod settlement;
