//! ICS parsing and instant resolution.
//!
//! Parsing is delegated to the icalendar crate; this module adds the
//! conversion from its [`DatePerhapsTime`] values to concrete UTC instants,
//! resolving `TZID=` references through chrono-tz.

use chrono::{DateTime, NaiveTime, TimeZone, Utc};
use chrono_tz::Tz;
use icalendar::{Calendar, CalendarDateTime, DatePerhapsTime};
use tracing::warn;

use crate::error::{FeedError, FeedResult};

/// Parses sanitized feed text into a calendar document.
pub fn parse_feed(text: &str) -> FeedResult<Calendar> {
    text.parse::<Calendar>().map_err(FeedError::parse)
}

/// Resolves an iCalendar date-or-datetime value to a UTC instant.
///
/// UTC values pass through; `TZID=` values are resolved via chrono-tz;
/// floating times and unknown zone names are read as UTC; date-only values
/// resolve to midnight UTC.
pub fn resolve_instant(value: DatePerhapsTime) -> DateTime<Utc> {
    match value {
        DatePerhapsTime::Date(date) => Utc.from_utc_datetime(&date.and_time(NaiveTime::MIN)),
        DatePerhapsTime::DateTime(dt) => match dt {
            CalendarDateTime::Utc(utc) => utc,
            CalendarDateTime::Floating(naive) => Utc.from_utc_datetime(&naive),
            CalendarDateTime::WithTimezone { date_time, tzid } => match tzid.parse::<Tz>() {
                Ok(tz) => match tz.from_local_datetime(&date_time).earliest() {
                    Some(zoned) => zoned.with_timezone(&Utc),
                    None => {
                        warn!(tzid = %tzid, "Local time does not exist in zone, reading as UTC");
                        Utc.from_utc_datetime(&date_time)
                    }
                },
                Err(_) => {
                    warn!(tzid = %tzid, "Unknown TZID, reading time as UTC");
                    Utc.from_utc_datetime(&date_time)
                }
            },
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{NaiveDate, NaiveDateTime};

    fn naive(y: i32, mo: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        NaiveDate::from_ymd_opt(y, mo, d)
            .unwrap()
            .and_hms_opt(h, mi, s)
            .unwrap()
    }

    #[test]
    fn parse_rejects_garbage() {
        assert!(parse_feed("this is not a calendar").is_err());
    }

    #[test]
    fn parse_accepts_minimal_calendar() {
        let ics = "BEGIN:VCALENDAR\r\nVERSION:2.0\r\nPRODID:-//Test//EN\r\nEND:VCALENDAR\r\n";
        assert!(parse_feed(ics).is_ok());
    }

    #[test]
    fn utc_values_pass_through() {
        let instant = Utc.with_ymd_and_hms(2024, 1, 10, 7, 45, 0).unwrap();
        let resolved = resolve_instant(DatePerhapsTime::DateTime(CalendarDateTime::Utc(instant)));
        assert_eq!(resolved, instant);
    }

    #[test]
    fn zoned_values_resolve_through_the_tz_database() {
        // Amsterdam in January is +01:00.
        let resolved = resolve_instant(DatePerhapsTime::DateTime(
            CalendarDateTime::WithTimezone {
                date_time: naive(2024, 1, 10, 8, 45, 0),
                tzid: "Europe/Amsterdam".to_string(),
            },
        ));
        assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 10, 7, 45, 0).unwrap());
    }

    #[test]
    fn unknown_tzid_falls_back_to_utc() {
        let resolved = resolve_instant(DatePerhapsTime::DateTime(
            CalendarDateTime::WithTimezone {
                date_time: naive(2024, 1, 10, 8, 45, 0),
                tzid: "Nowhere/Invalid".to_string(),
            },
        ));
        assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 10, 8, 45, 0).unwrap());
    }

    #[test]
    fn floating_values_are_read_as_utc() {
        let resolved = resolve_instant(DatePerhapsTime::DateTime(CalendarDateTime::Floating(
            naive(2024, 1, 10, 8, 45, 0),
        )));
        assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 10, 8, 45, 0).unwrap());
    }

    #[test]
    fn date_only_values_resolve_to_midnight_utc() {
        let resolved = resolve_instant(DatePerhapsTime::Date(
            NaiveDate::from_ymd_opt(2024, 1, 10).unwrap(),
        ));
        assert_eq!(resolved, Utc.with_ymd_and_hms(2024, 1, 10, 0, 0, 0).unwrap());
    }
}
