//! REPL command parsing

use std::path::PathBuf;

/// A parsed REPL input line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// List the catalog with selection markers
    Topics,
    /// Select or deselect a sport by name or number
    Toggle(String),
    /// Generate from the selected sports
    Go,
    /// Free text: set the query and search
    Query(String),
    /// Show the current view state
    State,
    /// Write the last briefing to a file
    Save(PathBuf),
    /// Clear topics and query
    Clear,
    Help,
    Quit,
    /// A command used without its required argument
    Usage(&'static str),
    Unknown(String),
}

impl ReplCommand {
    /// Parse a line; blank lines yield `None`
    pub fn parse(line: &str) -> Option<Self> {
        let line = line.trim();
        if line.is_empty() {
            return None;
        }
        if !line.starts_with('/') {
            return Some(Self::Query(line.to_string()));
        }

        let (name, arg) = match line.split_once(char::is_whitespace) {
            Some((name, arg)) => (name, arg.trim()),
            None => (line, ""),
        };

        let command = match name {
            "/topics" | "/t" => Self::Topics,
            "/toggle" | "/x" if arg.is_empty() => Self::Usage("/toggle <name|number>"),
            "/toggle" | "/x" => Self::Toggle(arg.to_string()),
            "/go" | "/g" => Self::Go,
            "/state" | "/s" => Self::State,
            "/save" if arg.is_empty() => Self::Usage("/save <path>"),
            "/save" => Self::Save(PathBuf::from(arg)),
            "/clear" => Self::Clear,
            "/help" | "/h" | "/?" => Self::Help,
            "/quit" | "/exit" | "/q" => Self::Quit,
            other => Self::Unknown(other.to_string()),
        };
        Some(command)
    }
}
