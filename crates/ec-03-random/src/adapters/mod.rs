//! # Adapters
//!
//! Concrete [`crate::RandomSource`] implementations.

pub mod keccak;
pub mod sequence;
