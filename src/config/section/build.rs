//! `[build]` section of the resolved descriptor.
//!
//! Build and dev-server toggles, passed through as data to the build
//! pipeline.
//!
//! # Example
//!
//! ```toml
//! [build]
//! watch_polling = true        # Poll the filesystem instead of native events
//! watch_interval_ms = 100     # Poll interval in milliseconds
//! line_numbers = true         # Line numbers in code blocks
//! math = true                 # Math rendering in markdown
//! ```

use serde::Serialize;
use std::time::Duration;

/// Default poll interval in milliseconds.
pub const DEFAULT_WATCH_INTERVAL_MS: u64 = 100;

/// Build options for the rendering pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BuildOptions {
    /// Use polling for the dev-server file watcher.
    #[serde(rename = "watch_polling")]
    pub watch_polling_enabled: bool,

    /// Poll interval in milliseconds.
    pub watch_interval_ms: u64,

    /// Show line numbers in code blocks.
    #[serde(rename = "line_numbers")]
    pub line_numbers_in_code: bool,

    /// Render math in markdown.
    #[serde(rename = "math")]
    pub math_rendering_enabled: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            watch_polling_enabled: false,
            watch_interval_ms: DEFAULT_WATCH_INTERVAL_MS,
            line_numbers_in_code: false,
            math_rendering_enabled: false,
        }
    }
}

impl BuildOptions {
    /// Poll interval for the watcher, or `None` when polling is disabled.
    #[inline]
    pub fn watch_interval(&self) -> Option<Duration> {
        self.watch_polling_enabled
            .then(|| Duration::from_millis(self.watch_interval_ms))
    }
}
