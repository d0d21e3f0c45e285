//! Briefing gateway port
//!
//! Defines the interface for asking a hosted text model for a briefing,
//! and the error taxonomy shared by every service adapter.

use async_trait::async_trait;
use sportify_domain::GeneratedBriefing;
use thiserror::Error;

/// Errors that can occur while talking to a hosted generative service
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GatewayError {
    #[error(
        "Your Google Gemini API Key is invalid or missing. Please check your environment configuration."
    )]
    InvalidCredential,

    #[error("You have exceeded your API quota. Please check your Google AI account settings.")]
    QuotaExceeded,

    #[error(
        "Failed to connect to the Gemini API due to a network issue. Please check your internet connection."
    )]
    Network,

    #[error("{0}")]
    EmptyContent(String),

    #[error("An error occurred while generating the {operation}: {message}")]
    Service { operation: String, message: String },
}

impl GatewayError {
    /// Map a raw service/transport message onto the taxonomy.
    ///
    /// Matching is done on the lower-cased message; anything unrecognised
    /// is wrapped with the operation name and the original message.
    pub fn classify(operation: &str, message: &str) -> Self {
        let lower = message.to_lowercase();

        if lower.contains("api key not valid")
            || lower.contains("api_key_invalid")
            || lower.contains("api key is missing")
            || lower.contains("missing api key")
        {
            return GatewayError::InvalidCredential;
        }
        if lower.contains("quota") || lower.contains("resource has been exhausted") {
            return GatewayError::QuotaExceeded;
        }
        if lower.contains("fetch")
            || lower.contains("network")
            || lower.contains("error sending request")
            || lower.contains("connection")
        {
            return GatewayError::Network;
        }

        GatewayError::Service {
            operation: operation.to_string(),
            message: message.to_string(),
        }
    }
}

/// Gateway for briefing text generation
///
/// Implementations (adapters) live in the infrastructure layer and are
/// expected to enable web-search grounding on the hosted model.
#[async_trait]
pub trait BriefingGateway: Send + Sync {
    /// Send the prompt and return the generated text with its grounding sources.
    ///
    /// Sources keep the order the service returned them in.
    async fn fetch_briefing(&self, prompt: &str) -> Result<GeneratedBriefing, GatewayError>;
}
