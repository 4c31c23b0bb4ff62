//! Pipeline orchestration.
//!
//! One linear pass: fetch → sanitize → parse → normalize → serialize →
//! publish. Any stage failure aborts the run; publication only happens
//! after normalization completed.

use icalendar::Calendar;
use tracing::debug;

use shiftcal_core::sanitize_feed;
use shiftcal_feed::{NormalizeReport, fetch_feed, normalize_calendar, parse_feed};

use crate::config::RunConfig;
use crate::error::CliResult;
use crate::publish::publish;

/// Runs the whole pipeline once.
pub async fn run(config: &RunConfig) -> CliResult<()> {
    let raw = fetch_feed(&config.feed_url, config.fetch_timeout).await?;

    let (republished, _report) = transform(&raw)?;

    publish(config, republished.to_string().as_bytes())?;
    Ok(())
}

/// The offline part of the pipeline: sanitize, parse and normalize.
///
/// Split from [`run`] so the transformation can be exercised end to end
/// without a network fetch.
pub fn transform(raw: &str) -> CliResult<(Calendar, NormalizeReport)> {
    let cleaned = sanitize_feed(raw);
    debug!(bytes = cleaned.len(), "Sanitized feed text");

    let calendar = parse_feed(&cleaned)?;
    let (republished, report) = normalize_calendar(&calendar)?;

    Ok((republished, report))
}
