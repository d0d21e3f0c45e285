//! Port definitions (interfaces for external adapters)
//!
//! Ports define the contracts that infrastructure adapters must implement.

pub mod briefing_gateway;
pub mod image_gateway;
pub mod progress;
