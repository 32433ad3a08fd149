//! # Domain Layer
//!
//! Token configuration and error types.

pub mod entities;
pub mod errors;
