//! Illustration strategies
//!
//! [`ConfiguredImageGateway`] picks one strategy from configuration and
//! forwards to it, so the orchestrator holds a single concrete type.

mod pollinations;

pub use pollinations::PollinationsImageGateway;

use crate::gemini::{GeminiClient, ImagenImageGateway};
use async_trait::async_trait;
use sportify_application::{GatewayError, ImageGateway};
use sportify_domain::{ImageProviderConfig, ImageRef, ImageStrategy};
use tracing::info;

/// The image strategy selected in `[image] strategy`
pub enum ConfiguredImageGateway {
    Pollinations(PollinationsImageGateway),
    Imagen(ImagenImageGateway),
}

impl ConfiguredImageGateway {
    /// Build the configured strategy; Imagen reuses the text client's credential
    pub fn from_config(config: &ImageProviderConfig, client: &GeminiClient) -> Self {
        info!(strategy = %config.strategy, "Image strategy selected");
        match config.strategy {
            ImageStrategy::Pollinations => {
                Self::Pollinations(PollinationsImageGateway::new(config.pollinations.clone()))
            }
            ImageStrategy::Imagen => {
                Self::Imagen(ImagenImageGateway::new(client.clone(), config.imagen.clone()))
            }
        }
    }

    pub fn strategy(&self) -> ImageStrategy {
        match self {
            Self::Pollinations(_) => ImageStrategy::Pollinations,
            Self::Imagen(_) => ImageStrategy::Imagen,
        }
    }
}

#[async_trait]
impl ImageGateway for ConfiguredImageGateway {
    async fn fetch_image(&self, briefing_text: &str) -> Result<ImageRef, GatewayError> {
        match self {
            Self::Pollinations(gateway) => gateway.fetch_image(briefing_text).await,
            Self::Imagen(gateway) => gateway.fetch_image(briefing_text).await,
        }
    }
}
