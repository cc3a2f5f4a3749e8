use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Status line shown while a command runs.
pub(crate) struct Spinner {
    bar: ProgressBar,
}

impl Spinner {
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        if let Ok(style) = ProgressStyle::with_template("{spinner:.green.dim.bold} {msg} ") {
            bar.set_style(style.tick_chars("/-\\| "));
        }
        bar.enable_steady_tick(Duration::from_millis(120));
        Self { bar }
    }

    pub fn set_status(&self, status: String) {
        self.bar.set_message(status);
    }

    /// print without tearing the spinner line
    pub fn println(&self, line: impl AsRef<str>) {
        self.bar.suspend(|| println!("{}", line.as_ref()));
    }

    pub fn suspend<T>(&self, f: impl FnOnce() -> T) -> T {
        self.bar.suspend(f)
    }

    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
