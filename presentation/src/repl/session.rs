//! REPL session over one briefing orchestrator

use super::command::ReplCommand;
use crate::config::ReplConfig;
use crate::output::console::ConsoleFormatter;
use crate::output::formatter::BriefingFormatter;
use crate::progress::reporter::ProgressReporter;
use crate::view::BriefingView;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use sportify_application::{
    BriefingGateway, GenerateBriefingError, GenerateBriefingUseCase, ImageGateway, NoProgress,
    ProgressNotifier,
};
use sportify_domain::briefing::catalog;
use sportify_domain::{BriefingInput, BriefingRequest, BriefingResult, DomainError, OutputFormat};
use std::path::Path;
use std::sync::Arc;
use tracing::debug;

/// Interactive briefing REPL
pub struct BriefingRepl<B: BriefingGateway + 'static, I: ImageGateway + 'static> {
    use_case: GenerateBriefingUseCase<B, I>,
    catalog: Vec<String>,
    input: BriefingInput,
    config: ReplConfig,
    format: OutputFormat,
}

impl<B: BriefingGateway + 'static, I: ImageGateway + 'static> BriefingRepl<B, I> {
    /// Create a new BriefingRepl
    pub fn new(briefing: Arc<B>, image: Arc<I>, catalog: Vec<String>) -> Self {
        Self {
            use_case: GenerateBriefingUseCase::new(briefing, image),
            catalog,
            input: BriefingInput::new(),
            config: ReplConfig::default(),
            format: OutputFormat::Full,
        }
    }

    pub fn with_config(mut self, config: ReplConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the format briefings are printed in
    pub fn with_format(mut self, format: OutputFormat) -> Self {
        self.format = format;
        self
    }

    /// Current screen state
    pub fn view(&self) -> BriefingView {
        BriefingView::new(&self.input, &self.use_case.state())
    }

    /// Run the interactive REPL
    pub async fn run(&mut self) -> rustyline::Result<()> {
        let mut rl = DefaultEditor::new()?;

        let history_path = self.config.history_file.clone();
        if let Some(ref path) = history_path {
            if let Some(parent) = path.parent() {
                let _ = std::fs::create_dir_all(parent);
            }
            let _ = rl.load_history(path);
        }

        self.print_welcome();

        loop {
            match rl.readline("sportify> ") {
                Ok(line) => {
                    let Some(command) = ReplCommand::parse(&line) else {
                        continue;
                    };
                    let _ = rl.add_history_entry(line.trim());

                    if self.handle(command).await {
                        break;
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!("Bye!");
                    break;
                }
                Err(err) => {
                    eprintln!("Error: {:?}", err);
                    break;
                }
            }
        }

        if let Some(ref path) = history_path {
            let _ = rl.save_history(path);
        }

        Ok(())
    }

    /// Apply one command. Returns true if the REPL should exit.
    pub async fn handle(&mut self, command: ReplCommand) -> bool {
        match command {
            ReplCommand::Quit => {
                println!("Bye!");
                return true;
            }
            ReplCommand::Help => Self::print_help(),
            ReplCommand::Topics => {
                print!(
                    "{}",
                    ConsoleFormatter::format_topics(&self.catalog, self.input.selected_topics())
                );
            }
            ReplCommand::Toggle(key) => match catalog::lookup(&self.catalog, &key) {
                Some(name) => {
                    let name = name.to_string();
                    self.input.toggle_topic(name.as_str());
                    let verb = if self.input.is_selected(&name) {
                        "Selected"
                    } else {
                        "Deselected"
                    };
                    println!("{} {}", verb, name);
                }
                None => println!("Unknown sport: {} (see /topics)", key),
            },
            ReplCommand::Go => {
                let request = self.input.submit_from_topics();
                self.submit(request).await;
            }
            ReplCommand::Query(text) => {
                self.input.set_query(text);
                let request = self.input.submit_from_query();
                self.submit(request).await;
            }
            ReplCommand::State => print!("{}", ConsoleFormatter::format_view(&self.view())),
            ReplCommand::Save(path) => match self.use_case.state().result() {
                Some(result) => match Self::save(result, &path) {
                    Ok(()) => println!("Saved briefing to {}", path.display()),
                    Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e.to_string())),
                },
                None => println!("No briefing to save yet."),
            },
            ReplCommand::Clear => {
                self.input.clear();
                self.use_case.reset(&NoProgress);
                println!("Selection cleared.");
            }
            ReplCommand::Usage(usage) => println!("Usage: {}", usage),
            ReplCommand::Unknown(cmd) => {
                println!("Unknown command: {}", cmd);
                println!("Type /help for available commands");
            }
        }
        false
    }

    async fn submit(&self, request: Result<BriefingRequest, DomainError>) {
        println!();

        let progress: Box<dyn ProgressNotifier> = if self.config.show_progress {
            Box::new(ProgressReporter::new())
        } else {
            Box::new(NoProgress)
        };
        let result = match request {
            Ok(request) => {
                self.use_case
                    .execute_with_progress(request, progress.as_ref())
                    .await
            }
            Err(e) => Err(self.use_case.reject(e, progress.as_ref())),
        };

        match result {
            Ok(result) => println!("{}", ConsoleFormatter.format_as(&result, self.format)),
            Err(GenerateBriefingError::Superseded) => debug!("Dropped superseded briefing"),
            Err(e) => eprintln!("{}", ConsoleFormatter::format_error(&e.to_string())),
        }
        println!();
    }

    fn save(result: &BriefingResult, path: &Path) -> std::io::Result<()> {
        let is_json = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("json"));
        let contents = if is_json {
            ConsoleFormatter::format_json(result)
        } else {
            ConsoleFormatter::format_markdown_export(result)
        };
        std::fs::write(path, contents)
    }

    fn print_welcome(&self) {
        println!();
        println!("╭─────────────────────────────────────────────╮");
        println!("│        Sportify - Your Daily Briefing       │");
        println!("╰─────────────────────────────────────────────╯");
        println!();
        print!(
            "{}",
            ConsoleFormatter::format_topics(&self.catalog, self.input.selected_topics())
        );
        println!();
        println!("Pick sports with /toggle and run /go, or just type a search query.");
        println!("Type /help for all commands.");
        println!();
    }

    fn print_help() {
        println!();
        println!("Commands:");
        println!("  /topics, /t              - List sports and the current selection");
        println!("  /toggle, /x <name|num>   - Select or deselect a sport");
        println!("  /go, /g                  - Generate a briefing for the selected sports");
        println!("  <any text>               - Search: briefing for a free-text query");
        println!("  /state, /s               - Show selection and request status");
        println!("  /save <path>             - Save the last briefing (.json or Markdown)");
        println!("  /clear                   - Clear selection, query and result");
        println!("  /help, /h, /?            - Show this help");
        println!("  /quit, /exit, /q         - Exit");
        println!();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use sportify_application::GatewayError;
    use sportify_domain::{GeneratedBriefing, ImageRef, RequestState, Source, default_topics};
    use std::sync::Mutex;

    struct MockBriefing {
        prompts: Mutex<Vec<String>>,
    }

    #[async_trait]
    impl BriefingGateway for MockBriefing {
        async fn fetch_briefing(&self, prompt: &str) -> Result<GeneratedBriefing, GatewayError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            Ok(GeneratedBriefing::new(
                "## Tennis\n* Final tonight",
                vec![Source::new("https://a.example", Some("A".to_string()))],
            ))
        }
    }

    struct MockImage;

    #[async_trait]
    impl ImageGateway for MockImage {
        async fn fetch_image(&self, _briefing_text: &str) -> Result<ImageRef, GatewayError> {
            Ok(ImageRef::url("https://img.example/1"))
        }
    }

    fn repl() -> (BriefingRepl<MockBriefing, MockImage>, Arc<MockBriefing>) {
        let briefing = Arc::new(MockBriefing {
            prompts: Mutex::new(Vec::new()),
        });
        let repl = BriefingRepl::new(Arc::clone(&briefing), Arc::new(MockImage), default_topics())
            .with_config(ReplConfig {
                show_progress: false,
                history_file: None,
            });
        (repl, briefing)
    }

    #[tokio::test]
    async fn test_toggle_by_number_and_name() {
        let (mut repl, _) = repl();
        repl.handle(ReplCommand::Toggle("3".to_string())).await;
        repl.handle(ReplCommand::Toggle("formula 1".to_string())).await;
        assert_eq!(repl.view().selected_topics, ["Tennis", "Formula 1"]);

        repl.handle(ReplCommand::Toggle("tennis".to_string())).await;
        assert_eq!(repl.view().selected_topics, ["Formula 1"]);

        repl.handle(ReplCommand::Toggle("Curling".to_string())).await;
        assert_eq!(repl.view().selected_topics, ["Formula 1"]);
    }

    #[tokio::test]
    async fn test_go_generates_from_topics() {
        let (mut repl, briefing) = repl();
        repl.handle(ReplCommand::Toggle("Tennis".to_string())).await;
        repl.handle(ReplCommand::Go).await;

        let view = repl.view();
        assert!(!view.is_loading);
        assert_eq!(view.result.unwrap().sources.len(), 1);
        assert!(briefing.prompts.lock().unwrap()[0].contains("these sports: Tennis"));
    }

    #[tokio::test]
    async fn test_go_without_selection_fails_validation() {
        let (mut repl, briefing) = repl();
        repl.handle(ReplCommand::Go).await;

        assert_eq!(
            repl.view().error.as_deref(),
            Some("Please select sports or enter a search query.")
        );
        assert!(briefing.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_blank_query_intent_is_rejected() {
        let (mut repl, briefing) = repl();
        repl.handle(ReplCommand::Toggle("Golf".to_string())).await;
        repl.handle(ReplCommand::Query("   ".to_string())).await;

        let view = repl.view();
        assert!(view.selected_topics.is_empty());
        assert_eq!(
            view.error.as_deref(),
            Some("Please select sports or enter a search query.")
        );
        assert!(briefing.prompts.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_query_clears_topics() {
        let (mut repl, briefing) = repl();
        repl.handle(ReplCommand::Toggle("Golf".to_string())).await;
        repl.handle(ReplCommand::Query("Ryder Cup".to_string())).await;

        let view = repl.view();
        assert!(view.selected_topics.is_empty());
        assert_eq!(view.query, "Ryder Cup");
        assert!(briefing.prompts.lock().unwrap()[0].contains("\"Ryder Cup\""));
    }

    #[tokio::test]
    async fn test_save_markdown_and_json() {
        let (mut repl, _) = repl();
        let dir = tempfile::tempdir().unwrap();
        let md = dir.path().join("briefing.md");

        // Nothing to save before the first briefing
        repl.handle(ReplCommand::Save(md.clone())).await;
        assert!(!md.exists());

        repl.handle(ReplCommand::Query("Wimbledon".to_string())).await;
        repl.handle(ReplCommand::Save(md.clone())).await;
        let saved = std::fs::read_to_string(&md).unwrap();
        assert!(saved.starts_with("## Tennis"));
        assert!(saved.contains("- [A](https://a.example)"));

        let json = dir.path().join("briefing.json");
        repl.handle(ReplCommand::Save(json.clone())).await;
        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&json).unwrap()).unwrap();
        assert_eq!(value["image"]["url"], "https://img.example/1");
    }

    #[tokio::test]
    async fn test_clear_and_quit() {
        let (mut repl, _) = repl();
        repl.handle(ReplCommand::Query("Ashes".to_string())).await;
        assert!(!repl.handle(ReplCommand::Clear).await);

        let view = repl.view();
        assert!(view.query.is_empty());
        assert_eq!(repl.use_case.state(), RequestState::Idle);
        assert!(repl.handle(ReplCommand::Quit).await);
    }
}
