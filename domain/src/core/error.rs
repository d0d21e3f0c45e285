//! Domain error types

use thiserror::Error;

/// Domain-level errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Please select sports or enter a search query.")]
    EmptyRequest,

    #[error("Unknown topic: {0}")]
    UnknownTopic(String),
}
