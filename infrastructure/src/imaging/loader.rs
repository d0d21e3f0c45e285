//! Image loading from URL or embedded references

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use image::DynamicImage;
use sportify_domain::ImageRef;
use thiserror::Error;
use tracing::debug;

/// Why an image reference could not be turned into pixels
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Failed to fetch image: {0}")]
    Fetch(#[from] reqwest::Error),

    #[error("Image request returned HTTP {0}")]
    Status(u16),

    #[error("Invalid embedded image payload: {0}")]
    Payload(#[from] base64::DecodeError),

    #[error("Failed to decode image: {0}")]
    Decode(#[from] image::ImageError),
}

/// Resolves [`ImageRef`]s into decoded images
#[derive(Clone, Default)]
pub struct ImageLoader {
    http: reqwest::Client,
}

impl ImageLoader {
    pub fn new(http: reqwest::Client) -> Self {
        Self { http }
    }

    /// Fetch (for URLs) or unpack (for embedded data) and decode
    pub async fn load(&self, image: &ImageRef) -> Result<DynamicImage, LoadError> {
        let bytes = match image {
            ImageRef::Url { url } => self.fetch(url).await?,
            ImageRef::Data { base64, .. } => STANDARD.decode(base64)?,
        };
        Self::decode(&bytes)
    }

    async fn fetch(&self, url: &str) -> Result<Vec<u8>, LoadError> {
        debug!(url, "Fetching image");
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(LoadError::Status(status.as_u16()));
        }
        Ok(response.bytes().await?.to_vec())
    }

    /// Decode raw bytes, guessing the format from the content
    pub fn decode(bytes: &[u8]) -> Result<DynamicImage, LoadError> {
        Ok(image::load_from_memory(bytes)?)
    }
}
