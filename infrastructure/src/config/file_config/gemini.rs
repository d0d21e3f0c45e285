//! Gemini configuration from TOML (`[gemini]` section)

use serde::{Deserialize, Serialize};
use sportify_domain::GeminiProviderConfig;

/// Raw Gemini configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileGeminiConfig {
    /// Environment variable name for the API key (default: "GEMINI_API_KEY").
    pub api_key_env: String,
    /// Direct API key (prefer the env var).
    pub api_key: Option<String>,
    /// Base URL for the Generative Language API.
    pub base_url: String,
    /// Text model used for briefings.
    pub model: String,
    /// Timeout in seconds for API calls
    pub timeout_seconds: Option<u64>,
}

impl Default for FileGeminiConfig {
    fn default() -> Self {
        let defaults = GeminiProviderConfig::default();
        Self {
            api_key_env: "GEMINI_API_KEY".to_string(),
            api_key: None,
            base_url: defaults.base_url,
            model: defaults.model,
            timeout_seconds: None,
        }
    }
}

impl FileGeminiConfig {
    /// Resolve the API key: the direct value wins, then the named env var.
    ///
    /// `lookup` reads an environment variable; blank values count as unset.
    pub fn resolve_api_key(&self, lookup: impl Fn(&str) -> Option<String>) -> Option<String> {
        self.api_key
            .clone()
            .filter(|k| !k.trim().is_empty())
            .or_else(|| lookup(&self.api_key_env).filter(|k| !k.trim().is_empty()))
    }

    /// Convert into the provider-neutral domain config
    pub fn to_provider_config(&self, lookup: impl Fn(&str) -> Option<String>) -> GeminiProviderConfig {
        GeminiProviderConfig {
            api_key: self.resolve_api_key(lookup),
            base_url: self.base_url.trim_end_matches('/').to_string(),
            model: self.model.clone(),
            timeout_seconds: self.timeout_seconds,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_direct_key_wins() {
        let config = FileGeminiConfig {
            api_key: Some("direct".to_string()),
            ..Default::default()
        };
        assert_eq!(
            config.resolve_api_key(|_| Some("from-env".to_string())),
            Some("direct".to_string())
        );
    }

    #[test]
    fn test_key_from_named_env_var() {
        let config = FileGeminiConfig {
            api_key_env: "MY_KEY".to_string(),
            ..Default::default()
        };
        let key = config.resolve_api_key(|name| (name == "MY_KEY").then(|| "k".to_string()));
        assert_eq!(key, Some("k".to_string()));
    }

    #[test]
    fn test_blank_key_is_missing() {
        let config = FileGeminiConfig {
            api_key: Some("  ".to_string()),
            ..Default::default()
        };
        assert_eq!(config.resolve_api_key(|_| Some(String::new())), None);
    }

    #[test]
    fn test_provider_config_trims_base_url() {
        let config = FileGeminiConfig {
            base_url: "http://localhost:8080/".to_string(),
            ..Default::default()
        };
        let provider = config.to_provider_config(|_| None);
        assert_eq!(provider.base_url, "http://localhost:8080");
        assert_eq!(provider.model, "gemini-2.5-flash");
        assert!(provider.api_key.is_none());
    }
}
