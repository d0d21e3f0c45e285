//! Output formatter trait

use sportify_domain::{BriefingResult, OutputFormat};

/// Trait for formatting briefing results
pub trait BriefingFormatter {
    /// Format the complete briefing: text, image reference and sources
    fn format(&self, result: &BriefingResult) -> String;

    /// Format as JSON
    fn format_json(&self, result: &BriefingResult) -> String;

    /// Format the briefing text only
    fn format_text_only(&self, result: &BriefingResult) -> String;

    /// Dispatch on the configured output format
    fn format_as(&self, result: &BriefingResult, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => self.format(result),
            OutputFormat::Text => self.format_text_only(result),
            OutputFormat::Json => self.format_json(result),
        }
    }
}
