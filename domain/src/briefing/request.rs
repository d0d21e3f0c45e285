//! Briefing request value object

use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// What the user asked a briefing about (Value Object)
///
/// Topics and query are mutually exclusive: a request is built from exactly
/// one of them and is never empty.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum BriefingRequest {
    /// Multi-topic survey over the selected sports
    Topics(Vec<String>),
    /// Deep dive on a single free-text query (already trimmed)
    Query(String),
}

impl BriefingRequest {
    /// Build a request from raw input.
    ///
    /// A non-blank query wins over the topic list; blank topic names are
    /// ignored. Fails with [`DomainError::EmptyRequest`] when nothing usable
    /// remains.
    pub fn from_input(topics: &[String], query: &str) -> Result<Self, DomainError> {
        let query = query.trim();
        if !query.is_empty() {
            return Ok(Self::Query(query.to_string()));
        }
        Self::topics(topics.iter().cloned())
    }

    /// Build a topics request, rejecting an empty selection
    pub fn topics<I, S>(topics: I) -> Result<Self, DomainError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let topics: Vec<String> = topics
            .into_iter()
            .map(Into::into)
            .map(|t| t.trim().to_string())
            .filter(|t| !t.is_empty())
            .collect();
        if topics.is_empty() {
            Err(DomainError::EmptyRequest)
        } else {
            Ok(Self::Topics(topics))
        }
    }

    /// Build a query request, rejecting a blank query
    pub fn query(query: impl AsRef<str>) -> Result<Self, DomainError> {
        let query = query.as_ref().trim();
        if query.is_empty() {
            Err(DomainError::EmptyRequest)
        } else {
            Ok(Self::Query(query.to_string()))
        }
    }
}

impl std::fmt::Display for BriefingRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Topics(topics) => write!(f, "topics: {}", topics.join(", ")),
            Self::Query(query) => write!(f, "query: {}", query),
        }
    }
}
