//! Generate Briefing use case
//!
//! Orchestrates the full briefing flow:
//! prompt → text model → image step → result, while owning the single
//! [`RequestState`] the presentation layer renders.

use crate::ports::briefing_gateway::{BriefingGateway, GatewayError};
use crate::ports::image_gateway::ImageGateway;
use crate::ports::progress::{NoProgress, ProgressNotifier};
use sportify_domain::{BriefingRequest, BriefingResult, DomainError, PromptTemplate, RequestState, Stage};
use std::sync::{Arc, Mutex, MutexGuard};
use thiserror::Error;
use tracing::{debug, info, warn};

/// Errors that can occur during a briefing run
///
/// The `Display` output is the message stored in [`RequestState::Failed`].
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GenerateBriefingError {
    #[error("{0}")]
    Validation(#[from] DomainError),

    #[error("{0}")]
    Gateway(#[from] GatewayError),

    #[error("Failed to generate a briefing. The AI model returned no content.")]
    EmptyContent,

    #[error("Briefing request was superseded by a newer submission")]
    Superseded,
}

/// State slot guarded by one lock so the generation check and the write
/// happen together.
#[derive(Debug, Default)]
struct Slot {
    /// Token of the most recent submission; only it may write `state`
    generation: u64,
    state: RequestState,
}

/// Use case for generating a sports briefing
///
/// Only the latest submission may publish state: if a run is overtaken by a
/// newer one, it finishes with [`GenerateBriefingError::Superseded`] and
/// leaves the newer run's state untouched.
pub struct GenerateBriefingUseCase<B: BriefingGateway + 'static, I: ImageGateway + 'static> {
    briefing: Arc<B>,
    image: Arc<I>,
    slot: Mutex<Slot>,
}

impl<B: BriefingGateway + 'static, I: ImageGateway + 'static> GenerateBriefingUseCase<B, I> {
    pub fn new(briefing: Arc<B>, image: Arc<I>) -> Self {
        Self {
            briefing,
            image,
            slot: Mutex::new(Slot::default()),
        }
    }

    /// Snapshot of the current request state
    pub fn state(&self) -> RequestState {
        self.lock().state.clone()
    }

    /// Drop any result or error and return to `Idle`.
    ///
    /// Also invalidates a run that is still in flight.
    pub fn reset(&self, progress: &dyn ProgressNotifier) {
        let snapshot = {
            let mut slot = self.lock();
            slot.generation += 1;
            slot.state = RequestState::Idle;
            slot.state.clone()
        };
        progress.on_state_change(&snapshot);
    }

    /// Validate raw input and run the briefing.
    ///
    /// Empty topics together with a blank query fail synchronously with a
    /// validation error; no gateway is called.
    pub async fn submit(
        &self,
        topics: &[String],
        query: &str,
        progress: &dyn ProgressNotifier,
    ) -> Result<BriefingResult, GenerateBriefingError> {
        match BriefingRequest::from_input(topics, query) {
            Ok(request) => self.execute_with_progress(request, progress).await,
            Err(e) => Err(self.reject(e, progress)),
        }
    }

    /// Record a submission that failed validation.
    ///
    /// The error becomes the `Failed` state unless a run is in flight; a live
    /// run keeps its progress state and the error is only returned.
    pub fn reject(&self, error: DomainError, progress: &dyn ProgressNotifier) -> GenerateBriefingError {
        warn!("Rejected briefing submission: {}", error);
        let error = GenerateBriefingError::Validation(error);
        let snapshot = {
            let mut slot = self.lock();
            if slot.state.is_loading() {
                None
            } else {
                slot.state = RequestState::Failed(error.to_string());
                Some(slot.state.clone())
            }
        };
        if let Some(snapshot) = snapshot {
            progress.on_state_change(&snapshot);
        }
        error
    }

    /// Execute the use case with default (no-op) progress
    pub async fn execute(
        &self,
        request: BriefingRequest,
    ) -> Result<BriefingResult, GenerateBriefingError> {
        self.execute_with_progress(request, &NoProgress).await
    }

    /// Execute the use case with progress callbacks
    pub async fn execute_with_progress(
        &self,
        request: BriefingRequest,
        progress: &dyn ProgressNotifier,
    ) -> Result<BriefingResult, GenerateBriefingError> {
        let generation = self.begin(progress);
        info!(generation, "Starting briefing for {}", request);

        // Step 1: text model
        let prompt = PromptTemplate::briefing(&request);
        debug!(generation, prompt_len = prompt.len(), "Requesting briefing text");

        let generated = match self.briefing.fetch_briefing(&prompt).await {
            Ok(generated) => generated,
            Err(e) => {
                warn!(generation, "Briefing request failed: {}", e);
                return self.fail(generation, e.into(), progress);
            }
        };

        if !generated.has_content() {
            warn!(generation, "Text model returned no content");
            return self.fail(generation, GenerateBriefingError::EmptyContent, progress);
        }

        info!(
            generation,
            sources = generated.sources.len(),
            "Briefing text received"
        );

        // Step 2: image
        self.transition(generation, RequestState::InFlight(Stage::CreatingImage), progress)?;

        let image = match self.image.fetch_image(&generated.text).await {
            Ok(image) => image,
            Err(e) => {
                // A briefing without its image counts as a failed request
                warn!(generation, "Image step failed: {}", e);
                return self.fail(generation, e.into(), progress);
            }
        };

        let result = BriefingResult::new(generated, image);
        self.transition(generation, RequestState::Succeeded(result.clone()), progress)?;

        info!(generation, "Briefing complete");
        Ok(result)
    }

    /// Start a new run: take a fresh generation and enter `InFlight`.
    fn begin(&self, progress: &dyn ProgressNotifier) -> u64 {
        let (generation, snapshot) = {
            let mut slot = self.lock();
            slot.generation += 1;
            slot.state = RequestState::InFlight(Stage::Analyzing);
            (slot.generation, slot.state.clone())
        };
        progress.on_state_change(&snapshot);
        generation
    }

    /// Write `next` if `generation` is still the latest submission.
    fn transition(
        &self,
        generation: u64,
        next: RequestState,
        progress: &dyn ProgressNotifier,
    ) -> Result<(), GenerateBriefingError> {
        let snapshot = {
            let mut slot = self.lock();
            if slot.generation != generation {
                debug!(
                    generation,
                    latest = slot.generation,
                    "Discarding stale briefing update"
                );
                return Err(GenerateBriefingError::Superseded);
            }
            slot.state = next;
            slot.state.clone()
        };
        progress.on_state_change(&snapshot);
        Ok(())
    }

    fn fail(
        &self,
        generation: u64,
        error: GenerateBriefingError,
        progress: &dyn ProgressNotifier,
    ) -> Result<BriefingResult, GenerateBriefingError> {
        self.transition(generation, RequestState::Failed(error.to_string()), progress)?;
        Err(error)
    }

    fn lock(&self) -> MutexGuard<'_, Slot> {
        // Writes never leave the slot half-updated
        self.slot.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sportify_domain::{GeneratedBriefing, ImageRef, Source};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tokio::sync::{Notify, oneshot};

    // ==================== Test Mocks ====================

    struct MockBriefing {
        response: Result<GeneratedBriefing, GatewayError>,
        calls: AtomicUsize,
        prompts: Mutex<Vec<String>>,
    }

    impl MockBriefing {
        fn ok(text: &str, sources: Vec<Source>) -> Self {
            Self::with(Ok(GeneratedBriefing::new(text, sources)))
        }

        fn err(error: GatewayError) -> Self {
            Self::with(Err(error))
        }

        fn with(response: Result<GeneratedBriefing, GatewayError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                prompts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn last_prompt(&self) -> String {
            self.prompts.lock().unwrap().last().cloned().unwrap_or_default()
        }
    }

    #[async_trait]
    impl BriefingGateway for MockBriefing {
        async fn fetch_briefing(&self, prompt: &str) -> Result<GeneratedBriefing, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.prompts.lock().unwrap().push(prompt.to_string());
            self.response.clone()
        }
    }

    struct MockImage {
        response: Result<ImageRef, GatewayError>,
        calls: AtomicUsize,
        texts: Mutex<Vec<String>>,
    }

    impl MockImage {
        fn ok() -> Self {
            Self::with(Ok(ImageRef::url("https://img.test/1.png")))
        }

        fn with(response: Result<ImageRef, GatewayError>) -> Self {
            Self {
                response,
                calls: AtomicUsize::new(0),
                texts: Mutex::new(Vec::new()),
            }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl ImageGateway for MockImage {
        async fn fetch_image(&self, briefing_text: &str) -> Result<ImageRef, GatewayError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.texts.lock().unwrap().push(briefing_text.to_string());
            self.response.clone()
        }
    }

    #[derive(Default)]
    struct RecordingProgress {
        states: Mutex<Vec<RequestState>>,
    }

    impl RecordingProgress {
        fn states(&self) -> Vec<RequestState> {
            self.states.lock().unwrap().clone()
        }
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_state_change(&self, state: &RequestState) {
            self.states.lock().unwrap().push(state.clone());
        }
    }

    fn use_case(
        briefing: MockBriefing,
        image: MockImage,
    ) -> (
        GenerateBriefingUseCase<MockBriefing, MockImage>,
        Arc<MockBriefing>,
        Arc<MockImage>,
    ) {
        let briefing = Arc::new(briefing);
        let image = Arc::new(image);
        (
            GenerateBriefingUseCase::new(briefing.clone(), image.clone()),
            briefing,
            image,
        )
    }

    fn topics(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    // ==================== Validation ====================

    #[tokio::test]
    async fn test_empty_submission_is_rejected_without_network() {
        let (uc, briefing, image) = use_case(MockBriefing::ok("x", vec![]), MockImage::ok());
        let progress = RecordingProgress::default();

        for query in ["", "   ", "\n\t"] {
            let err = uc.submit(&[], query, &progress).await.unwrap_err();
            assert_eq!(err, GenerateBriefingError::Validation(DomainError::EmptyRequest));
        }

        assert_eq!(briefing.calls(), 0);
        assert_eq!(image.calls(), 0);
        assert_eq!(
            uc.state(),
            RequestState::Failed("Please select sports or enter a search query.".to_string())
        );
        assert!(progress.states().iter().all(|s| !s.is_loading()));
    }

    // ==================== Happy path ====================

    #[tokio::test]
    async fn test_topics_scenario_succeeds() {
        let source = Source::new("http://a", Some("A".to_string()));
        let (uc, briefing, image) = use_case(
            MockBriefing::ok("## NBA\n* Team X won", vec![source.clone()]),
            MockImage::ok(),
        );
        let progress = RecordingProgress::default();

        let result = uc
            .submit(&topics(&["NBA"]), "", &progress)
            .await
            .unwrap();

        let prompt = briefing.last_prompt();
        assert!(prompt.contains("NBA"));
        assert!(prompt.contains("##"));

        assert_eq!(result.text, "## NBA\n* Team X won");
        assert_eq!(result.sources, vec![source]);
        assert_eq!(image.texts.lock().unwrap()[0], "## NBA\n* Team X won");
        assert_eq!(uc.state(), RequestState::Succeeded(result.clone()));

        assert_eq!(
            progress.states(),
            vec![
                RequestState::InFlight(Stage::Analyzing),
                RequestState::InFlight(Stage::CreatingImage),
                RequestState::Succeeded(result),
            ]
        );
    }

    #[tokio::test]
    async fn test_query_uses_single_topic_prompt() {
        let (uc, briefing, _image) = use_case(MockBriefing::ok("## UFC 303", vec![]), MockImage::ok());

        uc.submit(&[], "UFC 303", &NoProgress).await.unwrap();

        let prompt = briefing.last_prompt();
        assert!(prompt.contains("\"UFC 303\""));
        assert!(prompt.contains("headings (##)"));
        assert!(!prompt.contains("for each sport"));
    }

    // ==================== Failures ====================

    #[tokio::test]
    async fn test_text_failure_stops_before_image() {
        let (uc, _briefing, image) = use_case(
            MockBriefing::err(GatewayError::QuotaExceeded),
            MockImage::ok(),
        );

        let err = uc
            .execute(BriefingRequest::Query("UFC 303".into()))
            .await
            .unwrap_err();

        assert_eq!(err, GenerateBriefingError::Gateway(GatewayError::QuotaExceeded));
        assert_eq!(image.calls(), 0);
        assert_eq!(
            uc.state(),
            RequestState::Failed(GatewayError::QuotaExceeded.to_string())
        );
    }

    #[tokio::test]
    async fn test_empty_text_fails_without_image_call() {
        let (uc, _briefing, image) = use_case(MockBriefing::ok("", vec![]), MockImage::ok());

        let err = uc.submit(&topics(&["NBA"]), "", &NoProgress).await.unwrap_err();

        assert_eq!(err, GenerateBriefingError::EmptyContent);
        assert_eq!(image.calls(), 0);
        let state = uc.state();
        assert!(state.error().unwrap().contains("returned no content"));
    }

    #[tokio::test]
    async fn test_image_failure_fails_whole_request() {
        let (uc, _briefing, image) = use_case(
            MockBriefing::ok("## NBA", vec![]),
            MockImage::with(Err(GatewayError::EmptyContent(
                "The image model returned no images.".to_string(),
            ))),
        );
        let progress = RecordingProgress::default();

        let err = uc
            .submit(&topics(&["NBA"]), "", &progress)
            .await
            .unwrap_err();

        assert!(matches!(err, GenerateBriefingError::Gateway(GatewayError::EmptyContent(_))));
        assert_eq!(image.calls(), 1);
        assert_eq!(
            uc.state(),
            RequestState::Failed("The image model returned no images.".to_string())
        );
        // Never observable as succeeded with a missing image
        assert!(progress.states().iter().all(|s| s.result().is_none()));
    }

    #[tokio::test]
    async fn test_new_submission_clears_previous_error() {
        let (uc, _briefing, _image) = use_case(MockBriefing::ok("## NBA", vec![]), MockImage::ok());
        let progress = RecordingProgress::default();

        let _ = uc.submit(&[], "", &progress).await;
        assert!(uc.state().error().is_some());

        uc.submit(&topics(&["NBA"]), "", &progress).await.unwrap();
        assert!(uc.state().result().is_some());
        assert_eq!(progress.states()[1], RequestState::InFlight(Stage::Analyzing));
    }

    #[tokio::test]
    async fn test_reset_returns_to_idle() {
        let (uc, _briefing, _image) = use_case(MockBriefing::ok("## NBA", vec![]), MockImage::ok());
        uc.submit(&topics(&["NBA"]), "", &NoProgress).await.unwrap();

        uc.reset(&NoProgress);
        assert_eq!(uc.state(), RequestState::Idle);
    }

    // ==================== Stale responses ====================

    /// Holds the first call until released; later calls answer immediately.
    struct GatedBriefing {
        entered: Notify,
        gate: tokio::sync::Mutex<Option<oneshot::Receiver<()>>>,
        calls: AtomicUsize,
    }

    #[async_trait]
    impl BriefingGateway for GatedBriefing {
        async fn fetch_briefing(&self, _prompt: &str) -> Result<GeneratedBriefing, GatewayError> {
            let call = self.calls.fetch_add(1, Ordering::SeqCst);
            if call == 0 {
                let rx = self.gate.lock().await.take();
                self.entered.notify_one();
                if let Some(rx) = rx {
                    let _ = rx.await;
                }
                return Ok(GeneratedBriefing::new("## stale", vec![]));
            }
            Ok(GeneratedBriefing::new("## fresh", vec![]))
        }
    }

    #[tokio::test]
    async fn test_stale_response_does_not_overwrite_newer_result() {
        let (tx, rx) = oneshot::channel();
        let briefing = Arc::new(GatedBriefing {
            entered: Notify::new(),
            gate: tokio::sync::Mutex::new(Some(rx)),
            calls: AtomicUsize::new(0),
        });
        let image = Arc::new(MockImage::ok());
        let uc = Arc::new(GenerateBriefingUseCase::new(briefing.clone(), image.clone()));

        let first_uc = Arc::clone(&uc);
        let first = tokio::spawn(async move {
            first_uc
                .execute(BriefingRequest::Query("first".into()))
                .await
        });

        briefing.entered.notified().await;

        let second = uc
            .execute(BriefingRequest::Query("second".into()))
            .await
            .unwrap();
        assert_eq!(second.text, "## fresh");

        tx.send(()).unwrap();
        let first = first.await.unwrap();

        assert_eq!(first, Err(GenerateBriefingError::Superseded));
        assert_eq!(uc.state().result().unwrap().text, "## fresh");
        // The stale run never reached the image step
        assert_eq!(image.calls(), 1);
    }

    #[tokio::test]
    async fn test_rejected_submission_leaves_live_run_alone() {
        let (tx, rx) = oneshot::channel();
        let briefing = Arc::new(GatedBriefing {
            entered: Notify::new(),
            gate: tokio::sync::Mutex::new(Some(rx)),
            calls: AtomicUsize::new(0),
        });
        let uc = Arc::new(GenerateBriefingUseCase::new(briefing.clone(), Arc::new(MockImage::ok())));

        let running_uc = Arc::clone(&uc);
        let running = tokio::spawn(async move {
            running_uc
                .execute(BriefingRequest::Query("live".into()))
                .await
        });
        briefing.entered.notified().await;

        let progress = RecordingProgress::default();
        let err = uc.submit(&[], "  ", &progress).await.unwrap_err();
        assert_eq!(err, GenerateBriefingError::Validation(DomainError::EmptyRequest));
        assert_eq!(uc.state(), RequestState::InFlight(Stage::Analyzing));
        assert!(progress.states().is_empty());

        tx.send(()).unwrap();
        let result = running.await.unwrap().unwrap();
        assert_eq!(uc.state(), RequestState::Succeeded(result));
    }
}
