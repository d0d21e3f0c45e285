//! Imagen illustration strategy via `:predict`

use super::client::GeminiClient;
use super::types::{OutputOptions, PredictInstance, PredictParameters, PredictRequest, PredictResponse};
use async_trait::async_trait;
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use sportify_application::{GatewayError, ImageGateway};
use sportify_domain::{ImageRef, ImagenConfig, PromptTemplate};
use tracing::info;

const OPERATION: &str = "briefing image";

/// [`ImageGateway`] that calls an Imagen model and embeds the returned bytes
pub struct ImagenImageGateway {
    client: GeminiClient,
    config: ImagenConfig,
}

impl ImagenImageGateway {
    pub fn new(client: GeminiClient, config: ImagenConfig) -> Self {
        Self { client, config }
    }

    fn request(&self, briefing_text: &str) -> PredictRequest {
        PredictRequest {
            instances: vec![PredictInstance {
                prompt: PromptTemplate::image_prompt(briefing_text),
            }],
            parameters: PredictParameters {
                sample_count: 1,
                aspect_ratio: self.config.aspect_ratio.clone(),
                output_options: OutputOptions {
                    mime_type: self.config.mime_type.clone(),
                },
            },
        }
    }
}

#[async_trait]
impl ImageGateway for ImagenImageGateway {
    async fn fetch_image(&self, briefing_text: &str) -> Result<ImageRef, GatewayError> {
        let response: PredictResponse = self
            .client
            .post_json(&self.config.model, "predict", &self.request(briefing_text))
            .await
            .map_err(|e| e.into_gateway(OPERATION))?;

        let Some(prediction) = response.predictions.into_iter().next() else {
            return Err(GatewayError::EmptyContent(
                "The image model returned no images.".to_string(),
            ));
        };
        let payload = prediction
            .bytes_base64_encoded
            .filter(|b| !b.is_empty())
            .ok_or_else(|| {
                GatewayError::EmptyContent("The image model returned no images.".to_string())
            })?;

        let bytes = STANDARD.decode(&payload).map_err(|e| GatewayError::Service {
            operation: OPERATION.to_string(),
            message: format!("invalid image payload: {}", e),
        })?;

        let mime_type = prediction
            .mime_type
            .unwrap_or_else(|| self.config.mime_type.clone());
        info!(model = %self.config.model, bytes = bytes.len(), "Image generated");
        Ok(ImageRef::data(mime_type, payload))
    }
}
