//! Presentation-level configuration
//!
//! Resolved settings for output formatting and REPL behavior. The binary
//! fills these from the loaded file configuration and CLI flags.

use sportify_domain::OutputFormat;
use std::path::PathBuf;

/// Output configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputConfig {
    pub format: OutputFormat,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::default(),
            color: true,
        }
    }
}

impl OutputConfig {
    /// CLI flag first, then the configured format, then the default
    pub fn resolve(cli: Option<OutputFormat>, configured: Option<OutputFormat>, color: bool) -> Self {
        Self {
            format: cli.or(configured).unwrap_or_default(),
            color,
        }
    }

    /// Force plain output when color is disabled
    pub fn apply_color(&self) {
        if !self.color {
            colored::control::set_override(false);
        }
    }
}

/// REPL configuration for the presentation layer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReplConfig {
    /// Show progress indicators
    pub show_progress: bool,
    /// Path to history file (`None` disables history)
    pub history_file: Option<PathBuf>,
}

impl Default for ReplConfig {
    fn default() -> Self {
        Self {
            show_progress: true,
            history_file: default_history_path(),
        }
    }
}

/// `<data dir>/sportify/history.txt`
pub fn default_history_path() -> Option<PathBuf> {
    dirs::data_dir().map(|p| p.join("sportify").join("history.txt"))
}
