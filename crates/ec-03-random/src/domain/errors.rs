//! # Random Errors

use shared_types::Address;
use thiserror::Error;

/// Errors raised by random sources.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// Caller is not the source owner.
    #[error("Unauthorized: {0} is not the random source owner")]
    Unauthorized(Address),

    /// A scripted source has no values.
    #[error("Random source has no values")]
    Exhausted,
}
