//! `DateTime`: a civil date plus a time of day, to the second.
//!
//! No time zone is attached: a `DateTime` is a wall-clock reading in
//! whatever zone the caller lives in.  Fractional day counts between two
//! readings are computed exactly from whole days and seconds.

use std::str::FromStr;

use chrono::{NaiveDate, NaiveDateTime, NaiveTime, Timelike};
use wp_core::errors::{Error, Result};
use wp_core::{ensure, Settings};

use crate::date::Date;

/// Seconds in one civil day.
pub const SECONDS_PER_DAY: u32 = 86_400;

/// A date with a time of day.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateTime {
    date: Date,
    second_of_day: u32,
}

impl DateTime {
    /// Create a date-time from a date and the second of the day
    /// (`0..86_400`).
    pub fn new(date: Date, second_of_day: u32) -> Result<Self> {
        ensure!(
            second_of_day < SECONDS_PER_DAY,
            "second of day {second_of_day} out of range [0, {SECONDS_PER_DAY})"
        );
        Ok(Self {
            date,
            second_of_day,
        })
    }

    /// Create a date-time from calendar and clock components.
    pub fn from_ymd_hms(year: u16, month: u8, day: u8, hour: u8, minute: u8, second: u8) -> Result<Self> {
        let date = Date::from_ymd(year, month, day)?;
        if hour > 23 || minute > 59 || second > 59 {
            return Err(Error::InvalidArgument(format!(
                "time {hour:02}:{minute:02}:{second:02} out of range"
            )));
        }
        DateTime::new(
            date,
            hour as u32 * 3_600 + minute as u32 * 60 + second as u32,
        )
    }

    /// Midnight at the start of `date`.
    pub fn at_midnight(date: Date) -> Self {
        Self {
            date,
            second_of_day: 0,
        }
    }

    /// Return "now".
    ///
    /// If an evaluation date is pinned in [`Settings`], midnight of that
    /// date is returned; otherwise the local wall-clock time.
    pub fn now() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Ok(DateTime::at_midnight(Date::from_serial(serial)?)),
            None => DateTime::try_from(chrono::Local::now().naive_local()),
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// The calendar date.
    pub fn date(&self) -> Date {
        self.date
    }

    /// Seconds elapsed since midnight.
    pub fn second_of_day(&self) -> u32 {
        self.second_of_day
    }

    /// Hour of the day (0–23).
    pub fn hour(&self) -> u8 {
        (self.second_of_day / 3_600) as u8
    }

    /// Minute of the hour (0–59).
    pub fn minute(&self) -> u8 {
        (self.second_of_day / 60 % 60) as u8
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Signed seconds from `earlier` to `self`.
    pub fn seconds_since(&self, earlier: DateTime) -> i64 {
        (self.date - earlier.date) as i64 * SECONDS_PER_DAY as i64
            + self.second_of_day as i64
            - earlier.second_of_day as i64
    }

    /// Signed fractional days from `earlier` to `self`.
    pub fn days_since(&self, earlier: DateTime) -> f64 {
        self.seconds_since(earlier) as f64 / SECONDS_PER_DAY as f64
    }

    /// Whole days until midnight of `target`, rounded up.
    ///
    /// Zero when `target` is today and it is exactly midnight; 1 for
    /// tomorrow at any time of day today.
    pub fn days_until(&self, target: Date) -> i32 {
        let seconds = DateTime::at_midnight(target).seconds_since(*self);
        seconds.div_euclid(SECONDS_PER_DAY as i64) as i32
            + (seconds.rem_euclid(SECONDS_PER_DAY as i64) != 0) as i32
    }
}

impl From<Date> for DateTime {
    fn from(date: Date) -> Self {
        DateTime::at_midnight(date)
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<NaiveDateTime> for DateTime {
    type Error = Error;

    fn try_from(dt: NaiveDateTime) -> Result<Self> {
        let date = Date::try_from(dt.date())?;
        DateTime::new(date, dt.time().num_seconds_from_midnight())
    }
}

impl From<DateTime> for NaiveDateTime {
    fn from(dt: DateTime) -> NaiveDateTime {
        let time = NaiveTime::from_num_seconds_from_midnight_opt(dt.second_of_day, 0)
            .unwrap_or(NaiveTime::MIN);
        NaiveDate::from(dt.date).and_time(time)
    }
}

impl FromStr for DateTime {
    type Err = Error;

    /// Parse `YYYY-MM-DDTHH:MM[:SS]`, `YYYY-MM-DD HH:MM[:SS]` or a bare
    /// `YYYY-MM-DD` (midnight).
    fn from_str(s: &str) -> Result<Self> {
        let s = s.trim();
        const FORMATS: [&str; 4] = [
            "%Y-%m-%dT%H:%M:%S",
            "%Y-%m-%dT%H:%M",
            "%Y-%m-%d %H:%M:%S",
            "%Y-%m-%d %H:%M",
        ];
        if let Some(dt) = FORMATS
            .iter()
            .find_map(|fmt| NaiveDateTime::parse_from_str(s, fmt).ok())
        {
            return DateTime::try_from(dt);
        }
        s.parse::<Date>().map(DateTime::at_midnight)
    }
}

// ── Display ───────────────────────────────────────────────────────────────────

impl std::fmt::Display for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}T{:02}:{:02}:{:02}",
            self.date.iso(),
            self.hour(),
            self.minute(),
            self.second_of_day % 60
        )
    }
}

impl std::fmt::Debug for DateTime {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "DateTime({self})")
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for DateTime {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn components() {
        let dt = DateTime::from_ymd_hms(2024, 1, 11, 11, 57, 0).unwrap();
        assert_eq!(dt.date().iso(), "2024-01-11");
        assert_eq!((dt.hour(), dt.minute()), (11, 57));
        assert_eq!(dt.to_string(), "2024-01-11T11:57:00");
    }

    #[test]
    fn rejects_bad_clock() {
        assert!(DateTime::from_ymd_hms(2024, 1, 1, 24, 0, 0).is_err());
        let d = Date::from_ymd(2024, 1, 1).unwrap();
        assert!(matches!(DateTime::new(d, SECONDS_PER_DAY), Err(Error::Precondition(_))));
    }

    #[test]
    fn fractional_days() {
        let a = DateTime::from_ymd_hms(2024, 1, 11, 12, 0, 0).unwrap();
        let b = DateTime::from_ymd_hms(2024, 1, 12, 0, 0, 0).unwrap();
        assert_eq!(b.days_since(a), 0.5);
        assert_eq!(a.days_since(b), -0.5);
    }

    #[test]
    fn days_until_rounds_up() {
        let target = Date::from_ymd(2024, 1, 5).unwrap();
        let midnight = DateTime::from_ymd_hms(2024, 1, 1, 0, 0, 0).unwrap();
        let morning = DateTime::from_ymd_hms(2024, 1, 1, 9, 30, 0).unwrap();
        assert_eq!(midnight.days_until(target), 4);
        assert_eq!(morning.days_until(target), 4);
        assert_eq!(DateTime::at_midnight(target).days_until(target), 0);
        // Past targets count negative.
        assert_eq!(morning.days_until(Date::from_ymd(2023, 12, 31).unwrap()), -1);
    }

    #[test]
    fn parse_variants() {
        let full: DateTime = "2024-01-11T11:57".parse().unwrap();
        assert_eq!(full.second_of_day(), 11 * 3_600 + 57 * 60);
        let spaced: DateTime = "2024-01-11 11:57:30".parse().unwrap();
        assert_eq!(spaced.second_of_day() % 60, 30);
        let bare: DateTime = "2024-01-11".parse().unwrap();
        assert_eq!(bare, DateTime::at_midnight(Date::from_ymd(2024, 1, 11).unwrap()));
        assert!("2024-01-11T25:00".parse::<DateTime>().is_err());
    }

    #[test]
    fn ordering_follows_clock() {
        let a = DateTime::from_ymd_hms(2024, 1, 1, 23, 0, 0).unwrap();
        let b = DateTime::from_ymd_hms(2024, 1, 2, 0, 0, 0).unwrap();
        assert!(a < b);
        assert!(DateTime::from(b.date()) == b);
    }
}
