//! View model handed to renderers
//!
//! A [`BriefingView`] is a plain snapshot of everything a screen needs,
//! built from the user's input and the orchestrator's request state.

use serde::Serialize;
use sportify_domain::{BriefingInput, BriefingResult, RequestState};

/// Renderable snapshot of the briefing screen
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BriefingView {
    pub selected_topics: Vec<String>,
    pub query: String,
    pub is_loading: bool,
    pub progress_message: Option<String>,
    pub error: Option<String>,
    pub result: Option<BriefingResult>,
}

impl BriefingView {
    pub fn new(input: &BriefingInput, state: &RequestState) -> Self {
        Self {
            selected_topics: input.selected_topics().to_vec(),
            query: input.query().to_string(),
            is_loading: state.is_loading(),
            progress_message: state.progress_message().map(str::to_string),
            error: state.error().map(str::to_string),
            result: state.result().cloned(),
        }
    }
}
