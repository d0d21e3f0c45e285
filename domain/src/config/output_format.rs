//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for a finished briefing
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Report, image reference and grounding sources (default)
    #[default]
    Full,
    /// Only the Markdown report
    Text,
    /// JSON output
    Json,
}
