//! Run configuration.
//!
//! The environment is read in exactly one place ([`RunConfig::from_env`],
//! called from the entry point); everything downstream takes an explicit
//! [`RunConfig`] value, so tests never have to mutate process state.

use std::env;
use std::path::{Path, PathBuf};
use std::time::Duration;

use shiftcal_feed::DEFAULT_FETCH_TIMEOUT;

use crate::error::{CliError, CliResult};

/// Environment variable naming the feed URL.
pub const ICAL_URL_VAR: &str = "ICAL_URL";

/// Configuration for a single pipeline run.
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// URL of the ICS roster feed.
    pub feed_url: String,

    /// Timeout for the single feed request.
    pub fetch_timeout: Duration,

    /// Directory the output files are written to.
    pub output_dir: PathBuf,

    /// Name of the republished calendar file.
    pub output_file: String,
}

impl RunConfig {
    /// Default output directory, served by the static-hosting surface.
    pub const DEFAULT_OUTPUT_DIR: &'static str = "docs";

    /// Default name of the republished calendar file.
    pub const DEFAULT_OUTPUT_FILE: &'static str = "fixed_shifts.ics";

    /// Marker file telling the static-hosting layer to serve files as-is.
    pub const MARKER_FILE: &'static str = ".nojekyll";

    /// Creates a configuration with the default output layout and timeout.
    pub fn new(feed_url: impl Into<String>) -> Self {
        Self {
            feed_url: feed_url.into(),
            fetch_timeout: DEFAULT_FETCH_TIMEOUT,
            output_dir: PathBuf::from(Self::DEFAULT_OUTPUT_DIR),
            output_file: Self::DEFAULT_OUTPUT_FILE.to_string(),
        }
    }

    /// Builds the configuration from the environment.
    ///
    /// # Errors
    ///
    /// Returns a configuration error when `ICAL_URL` is unset, before any
    /// network activity happens.
    pub fn from_env() -> CliResult<Self> {
        let url = env::var(ICAL_URL_VAR)
            .map_err(|_| CliError::config(format!("{ICAL_URL_VAR} is not set")))?;
        Ok(Self::new(url))
    }

    /// Builder: set the fetch timeout.
    #[must_use]
    pub fn with_fetch_timeout(mut self, timeout: Duration) -> Self {
        self.fetch_timeout = timeout;
        self
    }

    /// Builder: set the output directory.
    #[must_use]
    pub fn with_output_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.output_dir = dir.into();
        self
    }

    /// Builder: set the output filename.
    #[must_use]
    pub fn with_output_file(mut self, file: impl Into<String>) -> Self {
        self.output_file = file.into();
        self
    }

    /// Path of the republished calendar file.
    pub fn output_path(&self) -> PathBuf {
        self.output_dir.join(&self.output_file)
    }

    /// Path of the static-hosting marker file.
    pub fn marker_path(&self) -> PathBuf {
        self.output_dir.join(Self::MARKER_FILE)
    }

    /// The output directory.
    pub fn output_dir(&self) -> &Path {
        &self.output_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults() {
        let config = RunConfig::new("https://example.com/roster.ics");
        assert_eq!(config.feed_url, "https://example.com/roster.ics");
        assert_eq!(config.fetch_timeout, Duration::from_secs(15));
        assert_eq!(config.output_path(), PathBuf::from("docs/fixed_shifts.ics"));
        assert_eq!(config.marker_path(), PathBuf::from("docs/.nojekyll"));
    }

    #[test]
    fn builders_override_the_output_layout() {
        let config = RunConfig::new("https://example.com/roster.ics")
            .with_fetch_timeout(Duration::from_secs(2))
            .with_output_dir("/tmp/out")
            .with_output_file("shifts.ics");

        assert_eq!(config.fetch_timeout, Duration::from_secs(2));
        assert_eq!(config.output_path(), PathBuf::from("/tmp/out/shifts.ics"));
        assert_eq!(config.marker_path(), PathBuf::from("/tmp/out/.nojekyll"));
    }
}
