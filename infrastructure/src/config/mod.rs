//! Configuration file loading for sportify
//!
//! This module handles file I/O and merging of configuration from multiple sources.
//! The priority order (highest to lowest):
//!
//! 1. `SPORTIFY_` prefixed environment variables (`SPORTIFY_GEMINI__MODEL=...`)
//! 2. `--config <path>` specified file
//! 3. Project root: `./sportify.toml` or `./.sportify.toml`
//! 4. XDG config: `$XDG_CONFIG_HOME/sportify/config.toml`
//! 5. Default values

mod file_config;
mod loader;

pub use file_config::{
    FileCompositorConfig, FileConfig, FileGeminiConfig, FileImageConfig, FileImagenConfig,
    FileOutputConfig, FileOutputFormat, FilePollinationsConfig, FileReplConfig, FileTopicsConfig,
};
pub use loader::ConfigLoader;
