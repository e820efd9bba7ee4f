// ============================================================================
// flactools-cli/src/progress.rs
// ============================================================================
//
// PROGRESS REPORTING: Batch progress bar for flac2mp3
//
// A bar is only drawn when several files are converted and stderr is a
// terminal; otherwise every method is a no-op so output stays clean when
// piped or logged to a file.

use indicatif::{ProgressBar, ProgressStyle};

/// Progress over a batch of files.
pub struct BatchProgress {
    bar: Option<ProgressBar>,
}

impl BatchProgress {
    pub fn new(total: usize, quiet: bool) -> Self {
        let visible = total > 1 && !quiet && console::Term::stderr().is_term();
        let bar = visible.then(|| {
            let bar = ProgressBar::new(total as u64);
            if let Ok(style) =
                ProgressStyle::with_template("{spinner:.green} [{bar:30.cyan/blue}] {pos}/{len} {wide_msg}")
            {
                bar.set_style(style.progress_chars("=> "));
            }
            bar
        });
        Self { bar }
    }

    /// Hidden progress, used for single files and non-terminals.
    pub fn hidden() -> Self {
        Self { bar: None }
    }

    pub fn is_visible(&self) -> bool {
        self.bar.is_some()
    }

    pub fn start_item(&self, name: &str) {
        if let Some(bar) = &self.bar {
            bar.set_message(name.to_string());
        }
    }

    pub fn finish_item(&self) {
        if let Some(bar) = &self.bar {
            bar.inc(1);
        }
    }

    /// Prints a line without tearing the bar.
    pub fn println(&self, line: &str) {
        match &self.bar {
            Some(bar) => bar.println(line),
            None => println!("{line}"),
        }
    }

    pub fn finish(&self) {
        if let Some(bar) = &self.bar {
            bar.finish_and_clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_file_is_hidden() {
        assert!(!BatchProgress::new(1, false).is_visible());
        assert!(!BatchProgress::new(5, true).is_visible());
        assert!(!BatchProgress::hidden().is_visible());
    }
}
