//! Top-level error types for the batch binary.

use std::io;

use thiserror::Error;

/// Result type for the binary.
pub type CliResult<T> = Result<T, CliError>;

/// Errors that can terminate a run.
#[derive(Debug, Error)]
pub enum CliError {
    /// IO error while publishing the output files.
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Failure in the fetch/parse/normalize stages.
    #[error("{0}")]
    Feed(#[from] shiftcal_feed::FeedError),

    /// Configuration error.
    #[error("Configuration error: {message}")]
    Config { message: String },
}

impl CliError {
    /// Creates a configuration error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}
