//! Shared HTTP client for the Generative Language API

use super::error::GeminiError;
use super::types::ErrorEnvelope;
use serde::Serialize;
use serde::de::DeserializeOwned;
use sportify_domain::GeminiProviderConfig;
use std::time::Duration;
use tracing::{debug, warn};

/// Longest slice of a non-JSON error body carried into an error message
const MAX_ERROR_BODY: usize = 200;

/// Authenticated client for `{base_url}/v1beta/models/{model}:{method}` calls
#[derive(Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    base_url: String,
    api_key: Option<String>,
}

impl GeminiClient {
    /// Build a client from provider settings
    ///
    /// A missing API key is not an error here; every call will fail with
    /// [`GeminiError::MissingApiKey`] so the failure surfaces per request.
    pub fn new(config: &GeminiProviderConfig) -> Result<Self, GeminiError> {
        let mut builder = reqwest::Client::builder();
        if let Some(secs) = config.timeout_seconds {
            builder = builder.timeout(Duration::from_secs(secs));
        }
        Ok(Self::with_http(builder.build()?, config))
    }

    /// Build a client around an existing HTTP client (its timeout applies)
    pub fn with_http(http: reqwest::Client, config: &GeminiProviderConfig) -> Self {
        if config.api_key.is_none() {
            warn!("No Gemini API key configured; requests will be rejected");
        }

        Self {
            http,
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key.clone(),
        }
    }

    /// The underlying HTTP client, shared with the image loader
    pub fn http(&self) -> &reqwest::Client {
        &self.http
    }

    fn endpoint(&self, model: &str, method: &str) -> String {
        format!("{}/v1beta/models/{}:{}", self.base_url, model, method)
    }

    /// POST a JSON body to a model method and decode the JSON reply
    pub async fn post_json<Req, Resp>(
        &self,
        model: &str,
        method: &str,
        body: &Req,
    ) -> Result<Resp, GeminiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let api_key = self.api_key.as_deref().ok_or(GeminiError::MissingApiKey)?;
        let url = self.endpoint(model, method);
        debug!(model, method, "Sending Gemini request");

        let response = self
            .http
            .post(&url)
            .header("x-goog-api-key", api_key)
            .json(body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = error_message(&text)
                .unwrap_or_else(|| fallback_message(status.as_u16(), &text));
            debug!(model, method, status = status.as_u16(), "Gemini request failed");
            return Err(GeminiError::Api {
                status: status.as_u16(),
                message,
            });
        }

        serde_json::from_str(&text).map_err(|e| GeminiError::Decode(e.to_string()))
    }
}

/// Extract `error.message` from an API error body
fn error_message(body: &str) -> Option<String> {
    serde_json::from_str::<ErrorEnvelope>(body)
        .ok()
        .map(|e| e.error.message)
        .filter(|m| !m.trim().is_empty())
}

fn fallback_message(status: u16, body: &str) -> String {
    let body = sportify_domain::util::truncate_chars(body.trim(), MAX_ERROR_BODY);
    if body.is_empty() {
        format!("HTTP {}", status)
    } else {
        format!("HTTP {}: {}", status, body)
    }
}
