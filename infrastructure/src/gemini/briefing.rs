//! Grounded briefing generation via `:generateContent`

use super::client::GeminiClient;
use super::types::{GenerateContentRequest, GenerateContentResponse};
use async_trait::async_trait;
use sportify_application::{BriefingGateway, GatewayError};
use sportify_domain::{GeneratedBriefing, Source};
use tracing::{debug, info};

/// Operation name used in generic error messages
const OPERATION: &str = "sports briefing";

/// [`BriefingGateway`] backed by a Gemini text model with search grounding
pub struct GeminiBriefingGateway {
    client: GeminiClient,
    model: String,
}

impl GeminiBriefingGateway {
    pub fn new(client: GeminiClient, model: impl Into<String>) -> Self {
        Self {
            client,
            model: model.into(),
        }
    }
}

/// Turn the first candidate into a briefing
fn into_briefing(response: GenerateContentResponse) -> GeneratedBriefing {
    let Some(candidate) = response.candidates.into_iter().next() else {
        return GeneratedBriefing::default();
    };

    let text = candidate.text();
    let sources = candidate
        .grounding_metadata
        .map(|m| m.grounding_chunks)
        .unwrap_or_default()
        .into_iter()
        .filter_map(|chunk| chunk.web)
        .filter_map(|web| {
            let uri = web.uri.filter(|uri| !uri.trim().is_empty())?;
            Some(Source::new(uri, web.title))
        })
        .collect();

    GeneratedBriefing::new(text, sources)
}

#[async_trait]
impl BriefingGateway for GeminiBriefingGateway {
    async fn fetch_briefing(&self, prompt: &str) -> Result<GeneratedBriefing, GatewayError> {
        let request = GenerateContentRequest::grounded(prompt);
        let response: GenerateContentResponse = self
            .client
            .post_json(&self.model, "generateContent", &request)
            .await
            .map_err(|e| e.into_gateway(OPERATION))?;

        let briefing = into_briefing(response);
        if !briefing.has_content() {
            return Err(GatewayError::EmptyContent(
                "Failed to generate a briefing. The AI model returned no content.".to_string(),
            ));
        }

        debug!(sources = briefing.sources.len(), "Grounding sources collected");
        info!(
            model = %self.model,
            chars = briefing.text.chars().count(),
            "Briefing generated"
        );
        Ok(briefing)
    }
}
