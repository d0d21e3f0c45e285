//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.

mod compositor;
mod gemini;
mod image;
mod output;
mod repl;
mod topics;

pub use compositor::FileCompositorConfig;
pub use gemini::FileGeminiConfig;
pub use image::{FileImageConfig, FileImagenConfig, FilePollinationsConfig};
pub use output::{FileOutputConfig, FileOutputFormat};
pub use repl::FileReplConfig;
pub use topics::FileTopicsConfig;

use serde::{Deserialize, Serialize};
use sportify_domain::{ConfigIssue, ConfigIssueCode, ImageStrategy};

/// Complete file configuration (raw TOML structure)
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Text model settings and credential
    pub gemini: FileGeminiConfig,
    /// Image strategy settings
    pub image: FileImageConfig,
    /// Selectable sports
    pub topics: FileTopicsConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Image compositing settings
    pub compositor: FileCompositorConfig,
    /// REPL settings
    pub repl: FileReplConfig,
}

impl FileConfig {
    /// Validate the entire configuration, returning all detected issues.
    pub fn validate(&self) -> Vec<ConfigIssue> {
        let mut issues = Vec::new();

        // 1. Model names
        for (field, value) in [
            ("gemini.model", &self.gemini.model),
            ("image.pollinations.model", &self.image.pollinations.model),
            ("image.imagen.model", &self.image.imagen.model),
        ] {
            if value.trim().is_empty() {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::EmptyModelName {
                        field: field.to_string(),
                    },
                    format!("{}: model name cannot be empty", field),
                ));
            }
        }

        // 2. Image strategy
        if self.image.strategy.parse::<ImageStrategy>().is_err() {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::InvalidEnumValue {
                    field: "image.strategy".to_string(),
                    value: self.image.strategy.clone(),
                    valid_values: ImageStrategy::VALID_VALUES
                        .iter()
                        .map(|v| v.to_string())
                        .collect(),
                },
                format!(
                    "image.strategy: unknown value '{}', falling back to '{}'",
                    self.image.strategy,
                    ImageStrategy::default()
                ),
            ));
        }

        // 3. Dimensions
        for (field, width, height) in [
            (
                "image.pollinations",
                self.image.pollinations.width,
                self.image.pollinations.height,
            ),
            ("compositor", self.compositor.width, self.compositor.height),
        ] {
            if width == 0 || height == 0 {
                issues.push(ConfigIssue::error(
                    ConfigIssueCode::InvalidDimensions {
                        field: field.to_string(),
                    },
                    format!("{}: width and height must be non-zero", field),
                ));
            }
        }

        // 4. Catalog
        if self.topics.catalog.iter().all(|t| t.trim().is_empty()) {
            issues.push(ConfigIssue::warning(
                ConfigIssueCode::EmptyCatalog,
                "topics.catalog is empty; falling back to the built-in sports",
            ));
        }

        // 5. Timeout
        if self.gemini.timeout_seconds == Some(0) {
            issues.push(ConfigIssue::error(
                ConfigIssueCode::InvalidTimeout,
                "gemini.timeout_seconds cannot be 0",
            ));
        }

        issues
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sportify_domain::OutputFormat;

    #[test]
    fn test_deserialize_full_config() {
        let toml_str = r#"
[gemini]
api_key_env = "SPORTIFY_KEY"
model = "gemini-2.5-pro"
timeout_seconds = 30

[image]
strategy = "imagen"

[image.pollinations]
width = 1280
height = 720
seed = 42

[topics]
catalog = ["NBA", "NFL"]

[output]
format = "text"
color = false

[compositor]
watermark_band = 60
width = 640
height = 320

[repl]
show_progress = false
history_file = "~/.local/share/sportify/history.txt"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.api_key_env, "SPORTIFY_KEY");
        assert_eq!(config.gemini.model, "gemini-2.5-pro");
        assert_eq!(config.gemini.timeout_seconds, Some(30));
        assert_eq!(config.image.parse_strategy(), ImageStrategy::Imagen);
        assert_eq!(config.image.pollinations.width, 1280);
        assert_eq!(config.image.pollinations.seed, Some(42));
        assert_eq!(config.topics.catalog, vec!["NBA", "NFL"]);
        assert_eq!(config.output.format, Some(OutputFormat::Text));
        assert!(!config.output.color);
        assert_eq!(config.compositor.watermark_band, 60);
        assert!(!config.repl.show_progress);
    }

    #[test]
    fn test_deserialize_partial_config() {
        let toml_str = r#"
[gemini]
model = "gemini-2.0-flash"
"#;

        let config: FileConfig = toml::from_str(toml_str).unwrap();
        assert_eq!(config.gemini.model, "gemini-2.0-flash");
        // Defaults should apply
        assert_eq!(config.gemini.api_key_env, "GEMINI_API_KEY");
        assert_eq!(config.image.parse_strategy(), ImageStrategy::Pollinations);
        assert_eq!(config.compositor.watermark_band, 85);
        assert!(config.output.color);
        assert!(config.repl.show_progress);
    }

    #[test]
    fn test_validate_valid_config() {
        let config = FileConfig::default();
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_reports_every_issue() {
        let mut config = FileConfig::default();
        config.gemini.model = " ".to_string();
        config.image.strategy = "dalle".to_string();
        config.compositor.width = 0;
        config.topics.catalog.clear();
        config.gemini.timeout_seconds = Some(0);

        let issues = config.validate();
        let codes: Vec<_> = issues.iter().map(|i| i.code.clone()).collect();

        assert!(codes.contains(&ConfigIssueCode::EmptyModelName {
            field: "gemini.model".to_string()
        }));
        assert!(codes.iter().any(|c| matches!(c, ConfigIssueCode::InvalidEnumValue { .. })));
        assert!(codes.contains(&ConfigIssueCode::InvalidDimensions {
            field: "compositor".to_string()
        }));
        assert!(codes.contains(&ConfigIssueCode::EmptyCatalog));
        assert!(codes.contains(&ConfigIssueCode::InvalidTimeout));
        assert_eq!(issues.iter().filter(|i| i.is_error()).count(), 3);
    }
}
