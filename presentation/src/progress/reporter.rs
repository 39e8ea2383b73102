//! Progress reporting while a question is routed and answered

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::io::IsTerminal;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use switchboard_application::{NoProgress, ProgressNotifier};
use switchboard_domain::QuestionCategory;

/// Spinner on stderr that follows the routing stages
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
            .template("{spinner:.green} {prefix:.bold} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }

    fn with_spinner(&self, f: impl FnOnce(&ProgressBar)) {
        if let Ok(guard) = self.spinner.lock()
            && let Some(pb) = guard.as_ref()
        {
            f(pb);
        }
    }

    fn start(&self, prefix: &str, message: &str) {
        let pb = ProgressBar::new_spinner();
        pb.set_style(Self::spinner_style());
        pb.set_prefix(prefix.to_string());
        pb.set_message(message.to_string());
        pb.enable_steady_tick(Duration::from_millis(100));
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(previous) = guard.replace(pb)
        {
            previous.finish_and_clear();
        }
    }

    fn finish(&self) {
        if let Ok(mut guard) = self.spinner.lock()
            && let Some(pb) = guard.take()
        {
            pb.finish_and_clear();
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for ProgressReporter {
    fn drop(&mut self) {
        self.finish();
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_classify_start(&self) {
        self.start("route", "classifying question...");
    }

    fn on_classified(&self, category: QuestionCategory) {
        self.with_spinner(|pb| pb.set_message(format!("-> {} agent", category)));
    }

    fn on_agent_start(&self, category: QuestionCategory) {
        self.start(category.as_str(), "waiting for the model...");
    }

    fn on_agent_complete(&self, _category: QuestionCategory, _success: bool) {
        self.finish();
    }

    fn on_retry(&self, attempt: u32, max_attempts: u32, delay: Duration) {
        self.with_spinner(|pb| {
            pb.set_message(format!(
                "API overloaded, retry {}/{} in {:.1}s",
                attempt,
                max_attempts - 1,
                delay.as_secs_f32()
            ))
        });
    }
}

/// Simple text-based progress on stderr (no spinner)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_classified(&self, category: QuestionCategory) {
        eprintln!("{} {} agent", "->".cyan(), category.as_str().bold());
    }

    fn on_agent_start(&self, _category: QuestionCategory) {}

    fn on_agent_complete(&self, category: QuestionCategory, success: bool) {
        if success {
            eprintln!("  {} {}", "v".green(), category);
        } else {
            eprintln!("  {} {} (failed)", "x".red(), category);
        }
    }

    fn on_retry(&self, attempt: u32, max_attempts: u32, delay: Duration) {
        eprintln!(
            "  {} overloaded (attempt {}/{}), waiting {:?}",
            "!".yellow(),
            attempt,
            max_attempts,
            delay
        );
    }
}

/// Spinner on a terminal, plain lines when stderr is redirected, nothing
/// when progress is disabled
pub fn notifier_for(show_progress: bool) -> Arc<dyn ProgressNotifier> {
    if !show_progress {
        Arc::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Arc::new(ProgressReporter::new())
    } else {
        Arc::new(SimpleProgress)
    }
}
