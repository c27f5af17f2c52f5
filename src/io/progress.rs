//! Spinner reporting solutions found while a search runs

use crate::io::configuration::PROGRESS_TICK_MS;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::default_spinner()
        .template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Live solution counter on stderr
///
/// Output written through `suspend` does not collide with the spinner line.
pub struct SolutionProgress {
    bar: ProgressBar,
}

impl Default for SolutionProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SolutionProgress {
    /// Visible spinner ticking in the background
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.set_message("searching");
        bar.enable_steady_tick(Duration::from_millis(PROGRESS_TICK_MS));
        Self { bar }
    }

    /// Spinner that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Report the running solution count
    pub fn record(&self, solutions: usize) {
        self.bar.set_position(solutions as u64);
        self.bar.set_message(format!("{solutions} solutions found"));
    }

    /// Solutions reported so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Run `f` with the spinner temporarily cleared
    pub fn suspend<F: FnOnce() -> R, R>(&self, f: F) -> R {
        self.bar.suspend(f)
    }

    /// Remove the spinner and leave a final summary
    pub fn finish(&self, solutions: usize) {
        self.bar
            .finish_with_message(format!("{solutions} solutions found"));
    }
}
