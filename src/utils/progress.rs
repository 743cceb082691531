// src/utils/progress.rs

use indicatif::{ProgressBar, ProgressStyle};
use std::env;

/// Configuration for progress reporting during a batch run
#[derive(Debug, Clone)]
pub struct ProgressConfig {
    /// Whether to show a progress bar at all
    pub enabled: bool,
    /// Refresh rate for the progress bar in milliseconds
    pub refresh_rate_ms: u64,
}

impl Default for ProgressConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            refresh_rate_ms: 100,
        }
    }
}

impl ProgressConfig {
    /// Create progress configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            enabled: env::var("RECONCILE_PROGRESS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
            refresh_rate_ms: env::var("RECONCILE_PROGRESS_REFRESH_RATE_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()
                .unwrap_or(100),
        }
    }

    /// Create a row progress bar if progress is enabled, None otherwise.
    /// With an unknown total the bar degrades to a spinner with a count.
    pub fn create_row_bar(&self, total_rows: Option<u64>) -> Option<ProgressBar> {
        if !self.enabled {
            return None;
        }
        let pb = match total_rows {
            Some(total) => {
                let pb = ProgressBar::new(total);
                pb.set_style(
                    ProgressStyle::default_bar()
                        .template(
                            "{spinner:.green} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {msg}",
                        )
                        .unwrap_or_else(|_| ProgressStyle::default_bar())
                        .progress_chars("█▉▊▋▌▍▎▏  "),
                );
                pb
            }
            None => {
                let pb = ProgressBar::new_spinner();
                pb.set_style(
                    ProgressStyle::default_spinner()
                        .template("{spinner:.green} [{elapsed_precise}] {pos} rows {msg}")
                        .unwrap_or_else(|_| ProgressStyle::default_spinner()),
                );
                pb
            }
        };
        pb.enable_steady_tick(std::time::Duration::from_millis(self.refresh_rate_ms));
        Some(pb)
    }
}
