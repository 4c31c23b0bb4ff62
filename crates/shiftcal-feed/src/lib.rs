//! Feed retrieval, ICS parsing and shift normalization.
//!
//! The crate covers the middle of the pipeline: fetching the raw roster
//! feed, parsing it into an [`icalendar::Calendar`], and rewriting shift
//! event times according to the policy in `shiftcal-core`.

pub mod error;
pub mod fetch;
pub mod ics;
pub mod normalize;

pub use error::{FeedError, FeedResult};
pub use fetch::{DEFAULT_FETCH_TIMEOUT, fetch_feed};
pub use ics::{parse_feed, resolve_instant};
pub use normalize::{NormalizeReport, normalize_calendar};
