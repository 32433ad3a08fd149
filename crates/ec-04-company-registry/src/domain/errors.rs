//! # Registry Errors

use shared_types::Address;
use thiserror::Error;

/// Errors raised by catalog operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RegistryError {
    /// Caller is not the catalog owner.
    #[error("Unauthorized: {0} is not the catalog owner")]
    Unauthorized(Address),

    /// No live entry for the index or name.
    #[error("Company not found in catalog")]
    NotFound,

    /// Malformed batch.
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
