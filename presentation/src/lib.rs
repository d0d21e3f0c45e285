//! Presentation layer for sportify
//!
//! This crate contains the CLI definition, console output formatting,
//! progress reporters, the view model handed to renderers, and the
//! interactive REPL.

pub mod cli;
pub mod config;
pub mod output;
pub mod progress;
pub mod repl;
pub mod view;

// Re-export commonly used types
pub use cli::commands::{Cli, OutputFormat};
pub use config::{OutputConfig, ReplConfig};
pub use output::console::ConsoleFormatter;
pub use output::formatter::BriefingFormatter;
pub use progress::reporter::{ProgressReporter, SimpleProgress};
pub use repl::BriefingRepl;
pub use view::BriefingView;
