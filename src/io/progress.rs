//! Terminal progress for a single render

use crate::io::configuration::{PROGRESS_BAR_WIDTH, PROGRESS_UPDATE_INTERVAL};
use crate::mosaic::RenderStats;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::sync::LazyLock;

static POLYGON_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    let template = format!(
        "{{prefix}} [{{bar:{PROGRESS_BAR_WIDTH}.cyan/blue}}] {{pos}}/{{len}} polygons {{msg}}"
    );
    ProgressStyle::default_bar()
        .template(&template)
        .unwrap_or_else(|_| ProgressStyle::default_bar())
        .progress_chars("█▉▊▋▌▍▎▏ ")
});

/// Progress bar over the polygons of one render
///
/// Redraws are throttled to every few polygons; the bar is cleared when the
/// render finishes.
pub struct ProgressReporter {
    bar: ProgressBar,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    /// Create a reporter with an empty bar
    pub fn new() -> Self {
        let bar = ProgressBar::new(0);
        bar.set_style(POLYGON_STYLE.clone());
        Self { bar }
    }

    /// Create a reporter that draws nothing
    pub fn hidden() -> Self {
        Self {
            bar: ProgressBar::hidden(),
        }
    }

    /// Label the bar with the input file name
    pub fn start(&self, path: &Path) {
        let display_name = path
            .file_name()
            .unwrap_or_default()
            .to_string_lossy()
            .to_string();
        self.bar.set_prefix(display_name);
        self.bar.set_position(0);
    }

    /// Record that `done` of `total` polygons have been processed
    pub fn update(&self, done: usize, total: usize) {
        if done == total || done % PROGRESS_UPDATE_INTERVAL == 0 {
            self.bar.set_length(total as u64);
            self.bar.set_position(done as u64);
        }
    }

    /// Polygons processed so far
    pub fn position(&self) -> u64 {
        self.bar.position()
    }

    /// Show the final counts and clear the bar
    pub fn finish(&self, stats: &RenderStats) {
        self.bar.set_message(format!(
            "({} painted, {} skipped)",
            stats.painted, stats.skipped
        ));
        self.bar.finish_and_clear();
    }
}
