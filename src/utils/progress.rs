use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a blocking step runs
pub struct ProgressTracker {
    bar: ProgressBar,
}

impl ProgressTracker {
    pub fn new(description: &str) -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.green} [{elapsed_precise}] {msg}") {
            bar.set_style(style);
        }
        bar.set_message(description.to_string());
        bar.enable_steady_tick(Duration::from_millis(100));

        ProgressTracker {
            bar,
        }
    }

    pub fn finish(&self, msg: &str) {
        self.bar.finish_with_message(msg.to_string());
    }

    pub fn abandon(&self) {
        self.bar.abandon();
    }

    pub fn set_message(&self, msg: &str) {
        self.bar.set_message(msg.to_string());
    }
}
