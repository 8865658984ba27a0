//! Domain error types

use thiserror::Error;

/// Domain-level validation errors.
///
/// Raised before any network call is made, so a rejected request never
/// consumes a correlation id on the client.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Research query cannot be empty")]
    EmptyQuery,

    #[error("Invalid research request: {0}")]
    InvalidRequest(String),

    #[error("Batch contains no jobs")]
    EmptyBatch,

    #[error("maxResult must be at least 1")]
    InvalidMaxResult,
}
