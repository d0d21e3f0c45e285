//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for briefings
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Rendered briefing with image reference and sources
    Full,
    /// Only the raw Markdown text
    Text,
    /// JSON output
    Json,
}

impl From<OutputFormat> for sportify_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Text => Self::Text,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for sportify
#[derive(Parser, Debug)]
#[command(name = "sportify")]
#[command(author, version, about = "AI sports briefings grounded on live web search")]
#[command(long_about = r#"
Sportify writes an up-to-date sports news briefing with a hosted model,
grounded on live web search, and illustrates it with a generated image.

A briefing is requested either for a set of sports (--topic) or for a
free-text query. When both are given, the query wins.

Configuration files are loaded from (in priority order):
1. SPORTIFY_* environment variables (SPORTIFY_GEMINI__MODEL=...)
2. --config <path>     Explicit config file
3. ./sportify.toml     Project-level config
4. ~/.config/sportify/config.toml   Global config

The API key is read from GEMINI_API_KEY unless configured otherwise.

Example:
  sportify -t Football -t Tennis
  sportify "Who won the last Formula 1 race?"
  sportify -t NBA --image-out briefing.png
  sportify --interactive
"#)]
pub struct Cli {
    /// Free-text search query (takes precedence over --topic)
    pub query: Option<String>,

    /// Sport to include (can be specified multiple times, by name or number)
    #[arg(short, long, value_name = "SPORT")]
    pub topic: Vec<String>,

    /// Start the interactive REPL
    #[arg(short, long)]
    pub interactive: bool,

    /// List the selectable sports and exit
    #[arg(long)]
    pub list_topics: bool,

    /// Output format (defaults to the configured format, then "full")
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Composite the briefing image into a PNG at this path
    #[arg(long, value_name = "PATH")]
    pub image_out: Option<PathBuf>,

    /// Width of the composited image in pixels
    #[arg(long, value_name = "PX")]
    pub width: Option<u32>,

    /// Height of the composited image in pixels
    #[arg(long, value_name = "PX")]
    pub height: Option<u32>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and the effective configuration, then exit
    #[arg(long)]
    pub show_config: bool,
}
