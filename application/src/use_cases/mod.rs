//! Use cases (application services)

pub mod generate_briefing;
