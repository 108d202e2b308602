//! Spinner display for daemon round-trips

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Spinner on stderr while a daemon call is in flight
///
/// Hidden automatically when stderr is not a terminal.
pub struct Spinner {
    pb: ProgressBar,
}

impl Spinner {
    pub fn start(message: impl Into<String>) -> Self {
        let pb = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
            pb.set_style(style);
        }
        pb.set_message(message.into());
        pb.enable_steady_tick(Duration::from_millis(100));
        Self { pb }
    }

    /// Remove the spinner line
    pub fn finish(&self) {
        self.pb.finish_and_clear();
    }
}

impl Drop for Spinner {
    fn drop(&mut self) {
        if !self.pb.is_finished() {
            self.pb.finish_and_clear();
        }
    }
}
