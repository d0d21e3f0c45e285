//! Console output formatter for briefings

use crate::output::formatter::BriefingFormatter;
use crate::output::markdown;
use crate::view::BriefingView;
use colored::Colorize;
use sportify_domain::{BriefingResult, ImageRef};

/// Formats briefings for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Format the complete briefing
    pub fn format(result: &BriefingResult) -> String {
        let mut output = String::new();

        output.push_str(&Self::header("Your Daily Briefing"));
        output.push_str("\n\n");

        output.push_str(&markdown::render(&result.text));
        output.push_str("\n\n");

        output.push_str(&format!(
            "{} {}\n",
            "Image:".cyan().bold(),
            Self::describe_image(&result.image)
        ));

        if !result.sources.is_empty() {
            output.push_str(&Self::section_header("Search Result Previews:"));
            for (i, source) in result.sources.iter().enumerate() {
                output.push_str(&format!(
                    "  {:>2}. {}\n      {}\n",
                    i + 1,
                    source.title.bold(),
                    source.uri.dimmed()
                ));
            }
        }

        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(result: &BriefingResult) -> String {
        serde_json::to_string_pretty(result).unwrap_or_else(|_| "{}".to_string())
    }

    /// Raw Markdown only, suitable for piping
    pub fn format_text_only(result: &BriefingResult) -> String {
        let mut output = result.text.trim_end().to_string();
        output.push('\n');
        output
    }

    /// Portable Markdown document: text, image reference, sources
    pub fn format_markdown_export(result: &BriefingResult) -> String {
        let mut output = result.text.trim_end().to_string();
        output.push_str(&format!("\n\n![Briefing image]({})\n", result.image.src()));

        if !result.sources.is_empty() {
            output.push_str("\n## Sources\n\n");
            for source in &result.sources {
                output.push_str(&format!("- [{}]({})\n", source.title, source.uri));
            }
        }
        output
    }

    /// Numbered catalog with selection markers
    pub fn format_topics(catalog: &[String], selected: &[String]) -> String {
        let mut output = format!("{}\n", "Select Sports:".cyan().bold());
        for (i, topic) in catalog.iter().enumerate() {
            let marker = if selected.contains(topic) {
                "[x]".green().to_string()
            } else {
                "[ ]".dimmed().to_string()
            };
            output.push_str(&format!("  {:>2}. {} {}\n", i + 1, marker, topic));
        }
        output
    }

    /// One-screen summary of the view state
    pub fn format_view(view: &BriefingView) -> String {
        let mut output = String::new();

        let topics = if view.selected_topics.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            view.selected_topics.join(", ")
        };
        output.push_str(&format!("{} {}\n", "Topics:".cyan().bold(), topics));

        let query = if view.query.is_empty() {
            "(none)".dimmed().to_string()
        } else {
            view.query.clone()
        };
        output.push_str(&format!("{} {}\n", "Query:".cyan().bold(), query));

        let status = if let Some(message) = &view.progress_message {
            message.yellow().to_string()
        } else if let Some(error) = &view.error {
            Self::format_error(error)
        } else if view.result.is_some() {
            "Briefing ready".green().to_string()
        } else {
            "Idle".dimmed().to_string()
        };
        output.push_str(&format!("{} {}\n", "Status:".cyan().bold(), status));

        output
    }

    /// Error line as shown to the user
    pub fn format_error(message: &str) -> String {
        format!("{} {}", "Error:".red().bold(), message)
    }

    fn describe_image(image: &ImageRef) -> String {
        match image {
            ImageRef::Url { url } => url.clone(),
            ImageRef::Data { mime_type, base64 } => {
                format!("embedded {} ({} KB)", mime_type, base64.len() * 3 / 4 / 1024)
            }
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }
}

impl BriefingFormatter for ConsoleFormatter {
    fn format(&self, result: &BriefingResult) -> String {
        Self::format(result)
    }

    fn format_json(&self, result: &BriefingResult) -> String {
        Self::format_json(result)
    }

    fn format_text_only(&self, result: &BriefingResult) -> String {
        Self::format_text_only(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportify_domain::{BriefingInput, GeneratedBriefing, OutputFormat, RequestState, Source, Stage};

    fn sample() -> BriefingResult {
        BriefingResult::new(
            GeneratedBriefing::new(
                "## Tennis\n### Final\n* **Sinner** wins",
                vec![
                    Source::new("https://a.example/1", Some("Match report".to_string())),
                    Source::new("https://b.example/2", None),
                ],
            ),
            ImageRef::url("https://image.example/prompt/x?seed=1"),
        )
    }

    #[test]
    fn test_full_format_sections() {
        colored::control::set_override(false);
        let output = ConsoleFormatter::format(&sample());

        assert!(output.contains("Your Daily Briefing"));
        assert!(output.contains("Tennis\n──────"));
        assert!(output.contains("• Sinner wins"));
        assert!(output.contains("Image: https://image.example/prompt/x?seed=1"));
        assert!(output.contains("Search Result Previews:"));
        assert!(output.contains(" 1. Match report\n      https://a.example/1"));
        assert!(output.contains(" 2. Untitled Source"));
    }

    #[test]
    fn test_no_sources_section_when_empty() {
        colored::control::set_override(false);
        let mut result = sample();
        result.sources.clear();
        assert!(!ConsoleFormatter::format(&result).contains("Search Result Previews:"));
    }

    #[test]
    fn test_embedded_image_not_dumped() {
        colored::control::set_override(false);
        let mut result = sample();
        result.image = ImageRef::data("image/jpeg", "A".repeat(4096));
        let output = ConsoleFormatter::format(&result);
        assert!(output.contains("Image: embedded image/jpeg (3 KB)"));
        assert!(!output.contains("AAAA"));
    }

    #[test]
    fn test_text_only_is_raw_markdown() {
        let output = ConsoleFormatter.format_as(&sample(), OutputFormat::Text);
        assert_eq!(output, "## Tennis\n### Final\n* **Sinner** wins\n");
    }

    #[test]
    fn test_json_round_trips_fields() {
        let output = ConsoleFormatter.format_as(&sample(), OutputFormat::Json);
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["sources"][1]["title"], "Untitled Source");
        assert_eq!(value["image"]["kind"], "url");
    }

    #[test]
    fn test_markdown_export() {
        let output = ConsoleFormatter::format_markdown_export(&sample());
        assert!(output.starts_with("## Tennis\n### Final\n* **Sinner** wins\n\n"));
        assert!(output.contains("![Briefing image](https://image.example/prompt/x?seed=1)"));
        assert!(output.contains("- [Match report](https://a.example/1)\n"));
        assert!(output.contains("- [Untitled Source](https://b.example/2)\n"));
    }

    #[test]
    fn test_topics_marks_selection() {
        colored::control::set_override(false);
        let catalog = vec!["Football".to_string(), "Tennis".to_string()];
        let output = ConsoleFormatter::format_topics(&catalog, &["Tennis".to_string()]);
        assert!(output.contains("1. [ ] Football"));
        assert!(output.contains("2. [x] Tennis"));
    }

    #[test]
    fn test_view_status_lines() {
        colored::control::set_override(false);
        let mut input = BriefingInput::new();
        input.set_query("Wimbledon");

        let loading = BriefingView::new(&input, &RequestState::InFlight(Stage::Analyzing));
        let output = ConsoleFormatter::format_view(&loading);
        assert!(output.contains("Query: Wimbledon"));
        assert!(output.contains("Status: Analyzing the latest sports news..."));

        let failed = BriefingView::new(&input, &RequestState::Failed("boom".to_string()));
        assert!(ConsoleFormatter::format_view(&failed).contains("Status: Error: boom"));
    }
}
