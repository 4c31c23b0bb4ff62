//! Shift-window policy.
//!
//! The roster publishes shifts with placeholder start times; the real
//! working hours are fixed. Two rules map a published local start time to
//! the actual shift hours:
//!
//! * published 08:45 → worked 09:00–13:00 (morning shift)
//! * published 13:45 → worked 13:00–17:00 (afternoon shift)
//!
//! Rules are evaluated against the start time converted to the reference
//! zone ([`LOCAL_TZ`]); anything that matches neither rule passes through
//! unchanged.

use chrono::{DateTime, Timelike};
use chrono_tz::Tz;

/// The fixed reference zone in which shift windows are defined.
pub const LOCAL_TZ: Tz = chrono_tz::Europe::Amsterdam;

/// A rule mapping a published local start time to the real shift hours.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ShiftWindow {
    /// Local `(hour, minute)` a matching event is published to start at.
    pub trigger: (u32, u32),
    /// Local `(hour, minute)` the shift actually starts at.
    pub start: (u32, u32),
    /// Local `(hour, minute)` the shift actually ends at.
    pub end: (u32, u32),
}

/// The known shift windows, evaluated in order. First match wins.
pub const SHIFT_WINDOWS: [ShiftWindow; 2] = [
    ShiftWindow {
        trigger: (8, 45),
        start: (9, 0),
        end: (13, 0),
    },
    ShiftWindow {
        trigger: (13, 45),
        start: (13, 0),
        end: (17, 0),
    },
];

impl ShiftWindow {
    /// Whether a local start time matches this window's trigger.
    ///
    /// Only hour and minute are compared; the date, seconds and sub-second
    /// precision play no part in matching.
    pub fn matches(&self, start_local: &DateTime<Tz>) -> bool {
        (start_local.hour(), start_local.minute()) == self.trigger
    }
}

/// Applies the first matching shift window to a local start/end pair.
///
/// A match rewrites the hour and minute of both instants to the window's
/// real shift hours, keeping each instant's own date and seconds. Without a
/// match the pair is returned as given. `None` means a rewritten time does
/// not exist in the local zone (a DST gap), which cannot happen for the
/// fixed target hours but is surfaced rather than papered over.
pub fn apply_shift_windows(
    start_local: DateTime<Tz>,
    end_local: DateTime<Tz>,
) -> Option<(DateTime<Tz>, DateTime<Tz>)> {
    for window in &SHIFT_WINDOWS {
        if window.matches(&start_local) {
            let start = set_local_time(start_local, window.start)?;
            let end = set_local_time(end_local, window.end)?;
            return Some((start, end));
        }
    }
    Some((start_local, end_local))
}

fn set_local_time(instant: DateTime<Tz>, (hour, minute): (u32, u32)) -> Option<DateTime<Tz>> {
    instant.with_hour(hour)?.with_minute(minute)
}
