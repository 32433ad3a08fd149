//! # Domain Layer
//!
//! Band tables and the arithmetic over them. No state, no I/O.

pub mod bands;
pub mod pricing;
