//! Per-event shift normalization.
//!
//! Walks the source calendar in order and rebuilds every event with its
//! shift times rewritten per the policy in `shiftcal-core`. Everything that
//! is not a timed shift decision is copied through verbatim: calendar-level
//! properties, non-event components (VTIMEZONE and friends) and every event
//! property other than DTSTART/DTEND.

use chrono::Utc;
use icalendar::{Calendar, CalendarComponent, Component, Event, EventLike};
use tracing::{debug, info, warn};

use shiftcal_core::shift::{LOCAL_TZ, apply_shift_windows};

use crate::error::{FeedError, FeedResult};
use crate::ics::resolve_instant;

/// UID placeholder for events that carry none.
const NO_UID: &str = "N/A";

/// Outcome of a normalization run.
#[derive(Debug, Default)]
pub struct NormalizeReport {
    /// Number of events copied to the output.
    pub processed: usize,
    /// UIDs of events skipped for missing DTSTART or DTEND (`"N/A"` when
    /// the event carries no UID).
    pub skipped: Vec<String>,
}

/// Rewrites shift events in `source` and returns the republished calendar.
///
/// Events missing a start or end instant are skipped (and recorded in the
/// report); all other events appear in the output in source order.
pub fn normalize_calendar(source: &Calendar) -> FeedResult<(Calendar, NormalizeReport)> {
    // An empty calendar, not Calendar::new(): the default constructor
    // prefills VERSION/PRODID/CALSCALE, which would duplicate and shadow
    // the source's own metadata.
    let mut output = Calendar::empty();

    // Calendar metadata is copied before any component is appended.
    for property in &source.properties {
        output.append_property(property.clone());
    }

    let mut report = NormalizeReport::default();

    for component in source.iter() {
        match component {
            CalendarComponent::Event(event) => match normalize_event(event)? {
                Some(rebuilt) => {
                    report.processed += 1;
                    output.push(rebuilt);
                }
                None => {
                    let uid = event.get_uid().unwrap_or(NO_UID).to_string();
                    warn!(uid = %uid, "Skipping event missing DTSTART or DTEND");
                    report.skipped.push(uid);
                }
            },
            other => {
                debug!("Copying non-event component through unchanged");
                output.push(other.clone());
            }
        }
    }

    info!(
        processed = report.processed,
        skipped = report.skipped.len(),
        "Normalized shift events"
    );

    Ok((output, report))
}

/// Normalizes a single event, or returns `Ok(None)` when it lacks a start
/// or end instant.
///
/// The rebuild copies the whole source event and overrides exactly the two
/// time properties, so every other property (UID, SUMMARY, ATTENDEE lines,
/// X- extensions, nested alarms) survives untouched.
fn normalize_event(event: &Event) -> FeedResult<Option<Event>> {
    let (Some(start), Some(end)) = (event.get_start(), event.get_end()) else {
        return Ok(None);
    };

    let uid = event.get_uid().unwrap_or(NO_UID);

    let start_local = resolve_instant(start).with_timezone(&LOCAL_TZ);
    let end_local = resolve_instant(end).with_timezone(&LOCAL_TZ);

    let (new_start, new_end) = apply_shift_windows(start_local, end_local)
        .ok_or_else(|| FeedError::invalid_time(uid))?;

    let mut rebuilt = event.clone();
    rebuilt.starts(new_start.with_timezone(&Utc));
    rebuilt.ends(new_end.with_timezone(&Utc));

    info!(
        uid = %uid,
        local_start = %new_start.format("%H:%M"),
        local_end = %new_end.format("%H:%M"),
        "Adjusted shift times"
    );

    Ok(Some(rebuilt))
}
