//! Request state machine types

use super::result::BriefingResult;
use serde::{Deserialize, Serialize};

/// Progress stage while a request is in flight
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Waiting for the text model
    Analyzing,
    /// Waiting for the image step
    CreatingImage,
}

impl Stage {
    /// Progress message shown to the user
    pub fn message(&self) -> &'static str {
        match self {
            Stage::Analyzing => "Analyzing the latest sports news...",
            Stage::CreatingImage => "Creating a unique image for your briefing...",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

/// State of the single briefing request
///
/// `Idle → InFlight → Succeeded | Failed`; a new submission re-enters
/// `InFlight` from whichever state it finds.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "value", rename_all = "snake_case")]
pub enum RequestState {
    #[default]
    Idle,
    InFlight(Stage),
    Succeeded(BriefingResult),
    Failed(String),
}

impl RequestState {
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::InFlight(_))
    }

    pub fn progress_message(&self) -> Option<&'static str> {
        match self {
            RequestState::InFlight(stage) => Some(stage.message()),
            _ => None,
        }
    }

    pub fn result(&self) -> Option<&BriefingResult> {
        match self {
            RequestState::Succeeded(result) => Some(result),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Failed(message) => Some(message),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::briefing::result::{GeneratedBriefing, ImageRef};

    #[test]
    fn test_default_is_idle() {
        let state = RequestState::default();
        assert_eq!(state, RequestState::Idle);
        assert!(!state.is_loading());
    }

    #[test]
    fn test_in_flight_progress_message() {
        let state = RequestState::InFlight(Stage::CreatingImage);
        assert!(state.is_loading());
        assert_eq!(
            state.progress_message(),
            Some("Creating a unique image for your briefing...")
        );
    }

    #[test]
    fn test_accessors() {
        let result = BriefingResult::new(GeneratedBriefing::new("t", vec![]), ImageRef::url("u"));
        let ok = RequestState::Succeeded(result.clone());
        assert_eq!(ok.result(), Some(&result));
        assert!(ok.error().is_none());
        assert!(ok.progress_message().is_none());

        let failed = RequestState::Failed("boom".to_string());
        assert_eq!(failed.error(), Some("boom"));
    }
}
