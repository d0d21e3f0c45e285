//! Error types for the Gemini adapters

use sportify_application::GatewayError;
use thiserror::Error;

/// Errors raised while talking to the Generative Language API
#[derive(Error, Debug)]
pub enum GeminiError {
    #[error("Missing API key")]
    MissingApiKey,

    #[error("HTTP transport error: {0}")]
    Transport(#[from] reqwest::Error),

    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("Failed to decode response: {0}")]
    Decode(String),
}

impl GeminiError {
    /// Map onto the shared gateway taxonomy for the given operation
    pub fn into_gateway(self, operation: &str) -> GatewayError {
        match self {
            GeminiError::MissingApiKey => GatewayError::InvalidCredential,
            GeminiError::Transport(e) if e.is_connect() || e.is_timeout() => GatewayError::Network,
            GeminiError::Transport(e) => GatewayError::classify(operation, &e.to_string()),
            GeminiError::Api { status, message } => {
                match GatewayError::classify(operation, &message) {
                    GatewayError::Service { .. } if status == 429 => GatewayError::QuotaExceeded,
                    classified => classified,
                }
            }
            GeminiError::Decode(message) => GatewayError::Service {
                operation: operation.to_string(),
                message,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_is_credential_error() {
        assert_eq!(
            GeminiError::MissingApiKey.into_gateway("sports briefing"),
            GatewayError::InvalidCredential
        );
    }

    #[test]
    fn test_api_message_is_classified() {
        let err = GeminiError::Api {
            status: 400,
            message: "API key not valid. Please pass a valid API key.".to_string(),
        };
        assert_eq!(err.into_gateway("sports briefing"), GatewayError::InvalidCredential);
    }

    #[test]
    fn test_status_429_is_quota() {
        let err = GeminiError::Api {
            status: 429,
            message: "Too many requests".to_string(),
        };
        assert_eq!(err.into_gateway("briefing image"), GatewayError::QuotaExceeded);
    }

    #[test]
    fn test_unknown_api_error_keeps_message() {
        let err = GeminiError::Api {
            status: 500,
            message: "Internal error encountered.".to_string(),
        };
        assert_eq!(
            err.into_gateway("briefing image").to_string(),
            "An error occurred while generating the briefing image: Internal error encountered."
        );
    }

    #[test]
    fn test_decode_error_is_service_error() {
        let err = GeminiError::Decode("expected value at line 1".to_string());
        assert!(matches!(
            err.into_gateway("sports briefing"),
            GatewayError::Service { .. }
        ));
    }
}
