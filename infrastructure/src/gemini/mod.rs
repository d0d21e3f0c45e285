//! Gemini adapters
//!
//! Talks to the Generative Language REST API:
//!
//! - `:generateContent` with the `google_search` tool for grounded briefings
//! - `:predict` on an Imagen model for embedded illustrations
//!
//! Both gateways share one [`GeminiClient`], which owns the API key and the
//! `reqwest::Client`, so a single connection pool and timeout apply to every call.

mod briefing;
mod client;
mod error;
mod imagen;
pub mod types;

pub use briefing::GeminiBriefingGateway;
pub use client::GeminiClient;
pub use error::GeminiError;
pub use imagen::ImagenImageGateway;
