//! # wp-lunar
//!
//! The Thai Buddhist lunar calendar: moon phases, Wan Phra observance days,
//! Thai holidays and festival countdowns.
//!
//! All queries are pure functions of their arguments and of static,
//! versioned tables.  The free functions in this crate use the standard
//! configuration ([`LunarCalendar::standard`]); build a [`LunarCalendar`]
//! to change any input.
//!
//! ```
//! use wp_lunar::{resolve_observance_days, upcoming_festivals};
//! use wp_time::{Date, Month};
//!
//! let january = resolve_observance_days(2024, Month::January).unwrap();
//! assert_eq!(january[0].date, Date::from_ymd(2024, 1, 18).unwrap());
//!
//! let next = upcoming_festivals(Date::from_ymd(2024, 1, 1).unwrap());
//! assert_eq!((next[0].name, next[0].days_remaining), ("Songkran", 103));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// `LunarCalendar` configuration and its builder.
pub mod calendar;

/// Concrete holiday calendars.
pub mod calendars;

/// Tabulated new moons.
pub mod epochs;

/// Festival table and countdowns.
pub mod festivals;

/// `HolidayCalendar` trait and holiday records.
pub mod holiday_calendar;

/// Moon-phase classification.
pub mod moon_phase;

/// Wan Phra observance days.
pub mod observance;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use calendar::{DayInfo, LunarCalendar, LunarCalendarBuilder};
pub use calendars::{Thailand, UnitedStates};
pub use festivals::{Festival, FestivalCountdown};
pub use holiday_calendar::{HolidayCalendar, HolidayCategory, HolidayRecord};
pub use moon_phase::{MoonPhase, PhaseReading, SYNODIC_MONTH};
pub use observance::{LunarObservation, ObservanceOffset, UpcomingObservance};

use wp_core::errors::Result;
use wp_time::{DateTime, Month};

// ── Standard-configuration queries ────────────────────────────────────────────

/// Phase of the moon at `at`.
pub fn classify_moon_phase(at: impl Into<DateTime>) -> PhaseReading {
    LunarCalendar::standard().classify_moon_phase(at)
}

/// Wan Phra days in `month` of `year`, ascending, one per date.
///
/// Fails only if `year` is outside 1900–2199.
pub fn resolve_observance_days(year: u16, month: Month) -> Result<Vec<LunarObservation>> {
    LunarCalendar::standard().resolve_observance_days(year, month)
}

/// Thai holidays in `year`; empty when the year is not covered.
pub fn lookup_holidays(year: i32) -> Vec<HolidayRecord> {
    LunarCalendar::standard().lookup_holidays(year)
}

/// The three nearest festivals at or after `reference`.
pub fn upcoming_festivals(reference: impl Into<DateTime>) -> Vec<FestivalCountdown> {
    LunarCalendar::standard().upcoming_festivals(reference)
}

/// The next Wan Phra at or after `reference`, searching three months.
pub fn next_observance_day(reference: impl Into<DateTime>) -> Option<UpcomingObservance> {
    LunarCalendar::standard().next_observance_day(reference)
}

/// [`upcoming_festivals`] from [`DateTime::now`].
pub fn upcoming_festivals_from_now() -> Result<Vec<FestivalCountdown>> {
    Ok(upcoming_festivals(DateTime::now()?))
}

/// [`next_observance_day`] from [`DateTime::now`].
pub fn next_observance_day_from_now() -> Result<Option<UpcomingObservance>> {
    Ok(next_observance_day(DateTime::now()?))
}
