//! Application layer for sportify
//!
//! This crate contains use cases and port definitions.
//! It depends only on the domain layer.

pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use ports::{
    briefing_gateway::{BriefingGateway, GatewayError},
    image_gateway::ImageGateway,
    progress::{NoProgress, ProgressNotifier},
};
pub use use_cases::generate_briefing::{GenerateBriefingError, GenerateBriefingUseCase};
