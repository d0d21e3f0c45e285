//! Image gateway port
//!
//! Defines the interface for producing the illustration of a briefing.

use super::briefing_gateway::GatewayError;
use async_trait::async_trait;
use sportify_domain::ImageRef;

/// Gateway for briefing illustrations
///
/// Strategies are interchangeable: an adapter may compose a URL that is
/// resolved later by whoever loads it, or call a generation service and
/// embed the returned bytes. Either way failures use [`GatewayError`], and
/// a service that produced no image reports [`GatewayError::EmptyContent`].
#[async_trait]
pub trait ImageGateway: Send + Sync {
    /// Produce an image reference for the given briefing text
    async fn fetch_image(&self, briefing_text: &str) -> Result<ImageRef, GatewayError>;
}
