//! CLI-specific progress handling for route-rank
//!
//! Shows how far the data file has been read.

use std::sync::Arc;

use indicatif::{ProgressBar, ProgressStyle};
use route_rank::ProgressCallback;

/// Creates a byte-count progress bar for reading the data file
pub fn create_progress_bar(total_size: u64) -> ProgressBar {
    let pb = ProgressBar::new(total_size);
    pb.set_style(
        ProgressStyle::default_bar()
            .template("{spinner:.green} [{elapsed_precise}] [{wide_bar:.cyan/blue}] {bytes}/{total_bytes} ({percent}%)")
            .expect("Failed to create progress style")
            .progress_chars("#>-")
    );
    pb
}

/// Progress manager for the load phase
pub struct ProgressManager {
    pub pb: ProgressBar,
}

impl ProgressManager {
    /// Create a new progress manager
    pub fn new(total_size: u64, message: &str) -> Self {
        let pb = create_progress_bar(total_size);

        // Print initial message to stderr
        eprintln!("{}", message);

        Self { pb }
    }

    /// Callback that drives the bar from `(bytes_read, total_bytes)` updates
    pub fn callback(&self) -> ProgressCallback {
        let pb = self.pb.clone();
        Arc::new(move |read, total| {
            if pb.length().unwrap_or(0) != total {
                pb.set_length(total);
            }
            pb.set_position(read);
            // An unknown (zero) total must not close the bar on the first update
            if total > 0 && read >= total {
                pb.finish_with_message("✅ Routes loaded");
            }
        })
    }
}
