//! Spinner shown while waiting for the model

use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use qa_application::AskProgressNotifier;
use qa_domain::Model;
use std::sync::Mutex;
use std::time::Duration;

/// Shows an indicatif spinner between request start and completion
pub struct SpinnerProgress {
    bar: Mutex<Option<ProgressBar>>,
}

impl SpinnerProgress {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn spinner_style() -> ProgressStyle {
        ProgressStyle::default_spinner()
            .template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
    }
}

impl Default for SpinnerProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl AskProgressNotifier for SpinnerProgress {
    fn on_request_start(&self, model: &Model) {
        let bar = ProgressBar::new_spinner();
        bar.set_style(Self::spinner_style());
        bar.set_message(format!("Sending question to {}...", model.to_string().cyan()));
        bar.enable_steady_tick(Duration::from_millis(100));

        if let Ok(mut slot) = self.bar.lock() {
            *slot = Some(bar);
        }
    }

    fn on_request_complete(&self, _success: bool) {
        if let Ok(mut slot) = self.bar.lock()
            && let Some(bar) = slot.take()
        {
            bar.finish_and_clear();
        }
    }
}
