//! Provider configuration types (provider-neutral, serde-free).
//!
//! These types define the shape of provider settings without depending
//! on any serialization format (TOML, JSON, etc.).

use std::str::FromStr;

/// Gemini text-generation provider configuration.
///
/// The API key is resolved once at startup and handed only to the
/// service client that needs it.
#[derive(Clone)]
pub struct GeminiProviderConfig {
    /// Resolved API key, if any.
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Text model identifier (default: "gemini-2.5-flash").
    pub model: String,
    /// Request timeout; `None` keeps the transport default.
    pub timeout_seconds: Option<u64>,
}

impl Default for GeminiProviderConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: "https://generativelanguage.googleapis.com".to_string(),
            model: "gemini-2.5-flash".to_string(),
            timeout_seconds: None,
        }
    }
}

impl std::fmt::Debug for GeminiProviderConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GeminiProviderConfig")
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("base_url", &self.base_url)
            .field("model", &self.model)
            .field("timeout_seconds", &self.timeout_seconds)
            .finish()
    }
}

/// Which image strategy produces the briefing illustration.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ImageStrategy {
    /// Compose a rendering URL; the image is produced when the URL is fetched.
    #[default]
    Pollinations,
    /// Call the Imagen model and embed the returned bytes.
    Imagen,
}

impl ImageStrategy {
    pub const VALID_VALUES: [&'static str; 2] = ["pollinations", "imagen"];

    pub fn as_str(&self) -> &'static str {
        match self {
            ImageStrategy::Pollinations => "pollinations",
            ImageStrategy::Imagen => "imagen",
        }
    }
}

impl FromStr for ImageStrategy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "pollinations" | "url" => Ok(ImageStrategy::Pollinations),
            "imagen" | "gemini" => Ok(ImageStrategy::Imagen),
            other => Err(format!("unknown image strategy: {}", other)),
        }
    }
}

impl std::fmt::Display for ImageStrategy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// URL-composition image strategy settings.
#[derive(Debug, Clone)]
pub struct PollinationsConfig {
    /// Base URL of the rendering endpoint.
    pub base_url: String,
    /// Rendering model query parameter (default: "flux").
    pub model: String,
    pub width: u32,
    pub height: u32,
    /// Fixed seed; a random one is drawn per request when `None`.
    pub seed: Option<u32>,
}

impl Default for PollinationsConfig {
    fn default() -> Self {
        Self {
            base_url: "https://image.pollinations.ai".to_string(),
            model: "flux".to_string(),
            width: 2560,
            height: 1440,
            seed: None,
        }
    }
}

/// Network image-generation strategy settings.
#[derive(Debug, Clone)]
pub struct ImagenConfig {
    /// Image model identifier.
    pub model: String,
    /// Requested aspect ratio (default: "16:9").
    pub aspect_ratio: String,
    /// Requested output format (default: "image/jpeg").
    pub mime_type: String,
}

impl Default for ImagenConfig {
    fn default() -> Self {
        Self {
            model: "imagen-4.0-generate-001".to_string(),
            aspect_ratio: "16:9".to_string(),
            mime_type: "image/jpeg".to_string(),
        }
    }
}

/// Top-level image provider configuration.
#[derive(Debug, Clone, Default)]
pub struct ImageProviderConfig {
    pub strategy: ImageStrategy,
    pub pollinations: PollinationsConfig,
    pub imagen: ImagenConfig,
}
