//! Infrastructure layer for sportify
//!
//! This crate contains adapters that implement the ports defined
//! in the application layer, the raster image compositor, and
//! configuration file loading.

pub mod config;
pub mod gemini;
pub mod illustration;
pub mod imaging;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use config::{
    ConfigLoader, FileCompositorConfig, FileConfig, FileGeminiConfig, FileImageConfig,
    FileOutputConfig, FileOutputFormat, FileReplConfig, FileTopicsConfig,
};
pub use gemini::{GeminiBriefingGateway, GeminiClient, GeminiError, ImagenImageGateway};
pub use illustration::{ConfiguredImageGateway, PollinationsImageGateway};
pub use imaging::{Compositor, ImageLoader, LoadError};
