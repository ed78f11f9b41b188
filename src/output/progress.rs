//! Progress bar utilities for file writing.

use indicatif::{ProgressBar, ProgressStyle};

/// Create a progress bar over the output files of a run.
pub fn create_file_progress(total_files: usize, enabled: bool) -> Option<ProgressBar> {
    if !enabled || total_files == 0 {
        return None;
    }

    let pb = ProgressBar::new(total_files as u64);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("█▓▒░ "),
    );
    Some(pb)
}

/// Finish a progress bar with a message.
pub fn finish_progress(pb: Option<ProgressBar>, message: &str) {
    if let Some(pb) = pb {
        pb.finish_with_message(message.to_string());
    }
}

/// Increment a progress bar, showing the file just handled.
pub fn inc_progress(pb: Option<&ProgressBar>, name: &str) {
    if let Some(pb) = pb {
        pb.set_message(name.to_string());
        pb.inc(1);
    }
}
