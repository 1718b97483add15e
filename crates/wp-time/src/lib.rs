//! # wp-time
//!
//! Date, date-time, month and weekday types.
//!
//! [`Date`] is a serial day number, so adding a fixed number of days is
//! exact.  [`DateTime`] adds a second-of-day for queries that need sub-day
//! precision, such as moon-phase classification.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `Date` type.
pub mod date;

/// `DateTime`: a date plus a time of day.
pub mod datetime;

/// `Month`: month of the year.
pub mod month;

/// `Weekday`: day of the week.
pub mod weekday;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use date::{Date, BUDDHIST_ERA_OFFSET};
pub use datetime::{DateTime, SECONDS_PER_DAY};
pub use month::Month;
pub use weekday::Weekday;
