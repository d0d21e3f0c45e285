//! URL-composition illustration strategy
//!
//! No network call is made: the returned URL renders the image when it is
//! fetched, so failures only show up when the image is loaded.

use async_trait::async_trait;
use rand::Rng;
use sportify_application::{GatewayError, ImageGateway};
use sportify_domain::{ImageRef, PollinationsConfig, PromptTemplate};
use tracing::debug;

/// Exclusive upper bound for random seeds
const SEED_RANGE: u32 = 1_000_000;

/// [`ImageGateway`] that composes a Pollinations rendering URL
pub struct PollinationsImageGateway {
    config: PollinationsConfig,
}

impl PollinationsImageGateway {
    pub fn new(config: PollinationsConfig) -> Self {
        Self { config }
    }

    /// Build the rendering URL for a prompt and seed
    pub fn compose_url(&self, prompt: &str, seed: u32) -> String {
        format!(
            "{}/prompt/{}?model={}&width={}&height={}&seed={}",
            self.config.base_url.trim_end_matches('/'),
            urlencoding::encode(prompt),
            urlencoding::encode(&self.config.model),
            self.config.width,
            self.config.height,
            seed
        )
    }

    fn seed(&self) -> u32 {
        self.config
            .seed
            .unwrap_or_else(|| rand::thread_rng().gen_range(0..SEED_RANGE))
    }
}

#[async_trait]
impl ImageGateway for PollinationsImageGateway {
    async fn fetch_image(&self, briefing_text: &str) -> Result<ImageRef, GatewayError> {
        let seed = self.seed();
        let url = self.compose_url(&PromptTemplate::image_prompt(briefing_text), seed);
        debug!(seed, "Composed image URL");
        Ok(ImageRef::url(url))
    }
}
