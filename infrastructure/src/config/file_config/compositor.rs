//! Compositor configuration from TOML (`[compositor]` section)

use serde::{Deserialize, Serialize};
use sportify_domain::compositor::geometry::DEFAULT_WATERMARK_BAND;

/// Raw compositor configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileCompositorConfig {
    /// Rows removed from the bottom of the source image
    pub watermark_band: u32,
    /// Default target width in pixels
    pub width: u32,
    /// Default target height in pixels
    pub height: u32,
}

impl Default for FileCompositorConfig {
    fn default() -> Self {
        Self {
            watermark_band: DEFAULT_WATERMARK_BAND,
            width: 896,
            height: 384,
        }
    }
}
