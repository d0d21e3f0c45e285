//! Image configuration from TOML (`[image]` section)

use serde::{Deserialize, Serialize};
use sportify_domain::{ImageProviderConfig, ImageStrategy, ImagenConfig, PollinationsConfig};

/// URL-composition strategy settings (`[image.pollinations]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilePollinationsConfig {
    pub base_url: String,
    pub model: String,
    pub width: u32,
    pub height: u32,
    /// Fixed seed (random per request when unset)
    pub seed: Option<u32>,
}

impl Default for FilePollinationsConfig {
    fn default() -> Self {
        let defaults = PollinationsConfig::default();
        Self {
            base_url: defaults.base_url,
            model: defaults.model,
            width: defaults.width,
            height: defaults.height,
            seed: defaults.seed,
        }
    }
}

/// Network generation strategy settings (`[image.imagen]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImagenConfig {
    pub model: String,
    pub aspect_ratio: String,
    pub mime_type: String,
}

impl Default for FileImagenConfig {
    fn default() -> Self {
        let defaults = ImagenConfig::default();
        Self {
            model: defaults.model,
            aspect_ratio: defaults.aspect_ratio,
            mime_type: defaults.mime_type,
        }
    }
}

/// Raw image configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileImageConfig {
    /// "pollinations" or "imagen"
    pub strategy: String,
    pub pollinations: FilePollinationsConfig,
    pub imagen: FileImagenConfig,
}

impl Default for FileImageConfig {
    fn default() -> Self {
        Self {
            strategy: ImageStrategy::default().as_str().to_string(),
            pollinations: FilePollinationsConfig::default(),
            imagen: FileImagenConfig::default(),
        }
    }
}

impl FileImageConfig {
    /// Parse the strategy string, falling back to the default when unknown
    pub fn parse_strategy(&self) -> ImageStrategy {
        self.strategy.parse().unwrap_or_default()
    }

    /// Convert into the provider-neutral domain config
    pub fn to_provider_config(&self) -> ImageProviderConfig {
        ImageProviderConfig {
            strategy: self.parse_strategy(),
            pollinations: PollinationsConfig {
                base_url: self.pollinations.base_url.trim_end_matches('/').to_string(),
                model: self.pollinations.model.clone(),
                width: self.pollinations.width,
                height: self.pollinations.height,
                seed: self.pollinations.seed,
            },
            imagen: ImagenConfig {
                model: self.imagen.model.clone(),
                aspect_ratio: self.imagen.aspect_ratio.clone(),
                mime_type: self.imagen.mime_type.clone(),
            },
        }
    }
}
