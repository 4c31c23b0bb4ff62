//! Core logic: feed sanitizing, shift-window policy, tracing setup

pub mod sanitize;
pub mod shift;
pub mod tracing;

pub use sanitize::sanitize_feed;
pub use shift::{LOCAL_TZ, SHIFT_WINDOWS, ShiftWindow, apply_shift_windows};
pub use tracing::{TracingConfig, TracingError, init_tracing};
