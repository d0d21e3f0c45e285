//! Progress notification port
//!
//! Defines the one-way contract from the orchestrator to the presentation
//! layer: every state change is pushed as a snapshot.

use sportify_domain::RequestState;

/// Callback for state changes during a briefing run
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (spinner, plain lines, a view model, etc.)
pub trait ProgressNotifier: Send + Sync {
    /// Called after every transition of the request state
    fn on_state_change(&self, state: &RequestState);
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl ProgressNotifier for NoProgress {
    fn on_state_change(&self, _state: &RequestState) {}
}
