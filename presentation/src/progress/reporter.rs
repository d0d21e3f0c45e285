//! Progress reporting for briefing runs

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use sportify_application::ProgressNotifier;
use sportify_domain::RequestState;
use std::sync::Mutex;
use std::time::Duration;

/// Spinner that follows the request state
pub struct ProgressReporter {
    spinner: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            spinner: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn start(&self, message: &'static str) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        let spinner = slot.get_or_insert_with(|| {
            let pb = ProgressBar::new_spinner();
            pb.set_style(Self::spinner_style());
            pb.enable_steady_tick(Duration::from_millis(100));
            pb
        });
        spinner.set_message(message);
    }

    fn finish(&self, line: Option<String>) {
        let Ok(mut slot) = self.spinner.lock() else {
            return;
        };
        if let Some(pb) = slot.take() {
            match line {
                Some(line) => pb.finish_with_message(line),
                None => pb.finish_and_clear(),
            }
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_state_change(&self, state: &RequestState) {
        match state {
            RequestState::InFlight(stage) => self.start(stage.message()),
            RequestState::Succeeded(_) => {
                self.finish(Some(format!("{} Briefing ready", "v".green())))
            }
            RequestState::Failed(_) | RequestState::Idle => self.finish(None),
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_state_change(&self, state: &RequestState) {
        match state {
            RequestState::InFlight(stage) => println!("{} {}", "->".cyan(), stage.message()),
            RequestState::Succeeded(_) => println!("  {} Briefing ready", "v".green()),
            RequestState::Failed(_) => println!("  {} Briefing failed", "x".red()),
            RequestState::Idle => {}
        }
    }
}
