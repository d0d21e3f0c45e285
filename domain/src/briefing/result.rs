//! Briefing result value objects

use serde::{Deserialize, Serialize};

/// Title used when the service returns a source without one
pub const UNTITLED_SOURCE: &str = "Untitled Source";

/// A grounding source: a web page the model used to write the briefing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Source {
    pub uri: String,
    pub title: String,
}

impl Source {
    /// Create a source, substituting a placeholder for a missing or blank title
    pub fn new(uri: impl Into<String>, title: Option<String>) -> Self {
        let title = title
            .filter(|t| !t.trim().is_empty())
            .unwrap_or_else(|| UNTITLED_SOURCE.to_string());
        Self {
            uri: uri.into(),
            title,
        }
    }
}

/// Output of the text-generation step
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedBriefing {
    /// Markdown report
    pub text: String,
    /// Grounding sources in the order the service returned them
    pub sources: Vec<Source>,
}

impl GeneratedBriefing {
    pub fn new(text: impl Into<String>, sources: Vec<Source>) -> Self {
        Self {
            text: text.into(),
            sources,
        }
    }

    /// Whether the model produced any usable text
    pub fn has_content(&self) -> bool {
        !self.text.trim().is_empty()
    }
}

/// A displayable image reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ImageRef {
    /// Remote URL, resolved by whoever loads it
    Url { url: String },
    /// Embedded image bytes, base64 encoded
    Data { mime_type: String, base64: String },
}

impl ImageRef {
    pub fn url(url: impl Into<String>) -> Self {
        Self::Url { url: url.into() }
    }

    pub fn data(mime_type: impl Into<String>, base64: impl Into<String>) -> Self {
        Self::Data {
            mime_type: mime_type.into(),
            base64: base64.into(),
        }
    }

    /// The reference as an image source string (URL or `data:` URI)
    pub fn src(&self) -> String {
        match self {
            Self::Url { url } => url.clone(),
            Self::Data { mime_type, base64 } => format!("data:{};base64,{}", mime_type, base64),
        }
    }

    pub fn is_embedded(&self) -> bool {
        matches!(self, Self::Data { .. })
    }
}

/// A complete briefing (Value Object)
///
/// Created once per successful run and replaced wholesale by the next one.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BriefingResult {
    pub text: String,
    pub image: ImageRef,
    pub sources: Vec<Source>,
}

impl BriefingResult {
    pub fn new(generated: GeneratedBriefing, image: ImageRef) -> Self {
        Self {
            text: generated.text,
            image,
            sources: generated.sources,
        }
    }
}
