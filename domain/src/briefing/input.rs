//! User input state at the presentation boundary

use super::request::BriefingRequest;
use crate::core::error::DomainError;
use serde::{Deserialize, Serialize};

/// The user's current selection (Entity)
///
/// Topics and query are mutually exclusive at input time: toggling a topic
/// clears the query, and editing the query clears every selected topic.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingInput {
    selected_topics: Vec<String>,
    query: String,
}

impl BriefingInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Select a topic, or deselect it if already selected.
    ///
    /// Always clears the query. Selection order is preserved.
    pub fn toggle_topic(&mut self, name: impl Into<String>) {
        let name = name.into();
        self.query.clear();
        if let Some(pos) = self.selected_topics.iter().position(|t| *t == name) {
            self.selected_topics.remove(pos);
        } else {
            self.selected_topics.push(name);
        }
    }

    /// Replace the query text. Always clears the selected topics.
    pub fn set_query(&mut self, text: impl Into<String>) {
        self.selected_topics.clear();
        self.query = text.into();
    }

    /// Clear both topics and query
    pub fn clear(&mut self) {
        self.selected_topics.clear();
        self.query.clear();
    }

    pub fn selected_topics(&self) -> &[String] {
        &self.selected_topics
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn is_selected(&self, name: &str) -> bool {
        self.selected_topics.iter().any(|t| t == name)
    }

    /// Request for the "generate from topics" intent
    pub fn submit_from_topics(&self) -> Result<BriefingRequest, DomainError> {
        BriefingRequest::topics(self.selected_topics.iter().cloned())
    }

    /// Request for the "search" intent
    pub fn submit_from_query(&self) -> Result<BriefingRequest, DomainError> {
        BriefingRequest::query(&self.query)
    }
}
