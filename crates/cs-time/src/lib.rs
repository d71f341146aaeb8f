//! # cs-time
//!
//! Date helpers over `chrono` types and working-day arithmetic.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Leap years and month boundaries.
pub mod calendar;

/// Month arithmetic, relative queries, and formatting.
pub mod date_ext;

/// Monday–Friday working-day arithmetic.
pub mod working_days;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{days_in_month, is_leap_year, min_date_for_sql_server};
pub use date_ext::{DateExt, DateTimeExt, ZonedExt};
pub use working_days::{is_working_weekday, CalendarDay, WorkingDayExt};
