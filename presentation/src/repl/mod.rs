//! Interactive REPL
//!
//! Provides a readline-based interface over a single briefing session:
//! pick sports, type a query, generate, inspect and save.

mod command;
mod session;

pub use command::ReplCommand;
pub use session::BriefingRepl;
