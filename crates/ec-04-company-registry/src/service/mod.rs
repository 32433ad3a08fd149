//! # Service Layer

pub mod factory;
pub mod overlay;
