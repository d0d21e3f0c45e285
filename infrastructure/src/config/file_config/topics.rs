//! Topic catalog configuration from TOML (`[topics]` section)

use serde::{Deserialize, Serialize};
use sportify_domain::default_topics;

/// Raw topic catalog configuration from TOML
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FileTopicsConfig {
    /// Sports offered for selection, in display order
    pub catalog: Vec<String>,
}

impl Default for FileTopicsConfig {
    fn default() -> Self {
        Self {
            catalog: default_topics(),
        }
    }
}
