//! Progress bar display for deployments

use indicatif::{ProgressBar, ProgressStyle};

/// Progress display for file copies during a deployment
pub struct ProgressDisplay {
    file_pb: ProgressBar,
}

#[allow(clippy::unwrap_used)]
impl ProgressDisplay {
    /// Create a new progress display with total file count
    pub fn new(total_files: u64) -> Self {
        let style = ProgressStyle::default_bar()
            .template("[{bar:40.cyan/blue}] {pos}/{len} files {msg}")
            .unwrap()
            .progress_chars("#>-");

        let file_pb = ProgressBar::new(total_files);
        file_pb.set_style(style);

        Self { file_pb }
    }

    /// Update to show the file currently being copied
    pub fn update_file(&self, file_path: &str) {
        // Truncate long paths for display, on a char boundary
        let display_path = console::truncate_str(file_path, 50, "...");
        self.file_pb.set_message(display_path.to_string());
        self.file_pb.inc(1);
    }

    /// Finish and clear the bar after a successful pass
    pub fn finish(&self) {
        self.file_pb.finish_and_clear();
    }

    /// Abandon on error
    pub fn abandon(&self) {
        self.file_pb.abandon();
    }
}
