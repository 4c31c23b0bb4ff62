//! Feed pipeline error types.

use thiserror::Error;

/// Result type for feed operations.
pub type FeedResult<T> = Result<T, FeedError>;

/// Errors that can occur while fetching or transforming the feed.
///
/// All of these are fatal for the run; the only non-fatal condition in the
/// pipeline (an event missing DTSTART or DTEND) is handled by skipping the
/// event, not by an error.
#[derive(Debug, Error)]
pub enum FeedError {
    /// Transport-level failure talking to the feed host.
    #[error("Failed to fetch feed: {0}")]
    Fetch(#[from] reqwest::Error),

    /// The feed host answered with a non-success status.
    #[error("Feed request returned HTTP {status}")]
    Status { status: reqwest::StatusCode },

    /// The feed body is not a well-formed iCalendar document.
    #[error("Failed to parse feed: {0}")]
    Parse(String),

    /// A rewritten local time does not exist in the reference zone.
    #[error("Event '{uid}' produced a nonexistent local time")]
    InvalidTime { uid: String },
}

impl FeedError {
    /// Creates a non-success status error.
    pub fn status(status: reqwest::StatusCode) -> Self {
        Self::Status { status }
    }

    /// Creates a parse error.
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse(message.into())
    }

    /// Creates an invalid local time error for the given event.
    pub fn invalid_time(uid: impl Into<String>) -> Self {
        Self::InvalidTime { uid: uid.into() }
    }
}
