//! Domain layer for sportify
//!
//! This crate contains the core business logic, entities, and value objects.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Briefing
//!
//! A briefing is a Markdown sports report produced by a hosted text model,
//! grounded on web search results, together with an illustrative image:
//!
//! - **Request**: either a set of sports topics or a single free-text query
//! - **Input**: the user's current selection, where picking a topic clears the
//!   query and typing a query clears the topics
//! - **State**: `Idle → InFlight → Succeeded | Failed`, owned by the orchestrator
//!
//! ## Compositor
//!
//! Pure geometry for painting the returned image: crop the watermark band off
//! the bottom, then cover-fit the remainder into the target rectangle.

pub mod briefing;
pub mod compositor;
pub mod config;
pub mod core;
pub mod prompt;
pub mod providers;
pub mod util;

// Re-export commonly used types
pub use briefing::{
    catalog::default_topics,
    input::BriefingInput,
    request::BriefingRequest,
    result::{BriefingResult, GeneratedBriefing, ImageRef, Source},
    state::{RequestState, Stage},
};
pub use compositor::geometry::{CompositeError, DrawPlan, Rect, Size, plan_cover};
pub use config::{
    OutputFormat,
    validation::{ConfigIssue, ConfigIssueCode, Severity},
};
pub use core::error::DomainError;
pub use prompt::PromptTemplate;
pub use providers::{GeminiProviderConfig, ImageProviderConfig, ImageStrategy, ImagenConfig, PollinationsConfig};
