//! Progress display for briefing runs

pub mod reporter;
