//! Feed retrieval.
//!
//! A single bounded GET of the configured feed URL. There is no retry and
//! no caching; any transport failure or non-success status aborts the run.

use std::time::Duration;

use reqwest::{Client, StatusCode};
use tracing::{debug, info};

use crate::error::{FeedError, FeedResult};

/// Default timeout for the single feed request.
pub const DEFAULT_FETCH_TIMEOUT: Duration = Duration::from_secs(15);

/// Fetches the raw feed body from `url`.
///
/// The request is bounded by `timeout`; a non-2xx response is an error even
/// when the transport succeeds.
pub async fn fetch_feed(url: &str, timeout: Duration) -> FeedResult<String> {
    let client = Client::builder()
        .timeout(timeout)
        .user_agent(format!("shiftcal/{}", env!("CARGO_PKG_VERSION")))
        .build()?;

    info!(url = %url, "Fetching feed");
    let response = client.get(url).send().await?;

    ensure_success(response.status())?;

    let body = response.text().await?;
    debug!(bytes = body.len(), "Fetched feed body");
    Ok(body)
}

/// Rejects non-success response statuses.
fn ensure_success(status: StatusCode) -> FeedResult<()> {
    if status.is_success() {
        Ok(())
    } else {
        Err(FeedError::status(status))
    }
}
