//! Briefing subdomain: requests, user input, results and request state.

pub mod catalog;
pub mod input;
pub mod request;
pub mod result;
pub mod state;
