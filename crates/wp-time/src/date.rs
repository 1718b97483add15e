//! `Date`: a civil date stored as a day serial.
//!
//! Serial 1 is 1900-01-01 and the last supported day, 2199-12-31, is
//! serial 109 573.  Adding days is plain integer addition, so the
//! observance offsets never drift with time zones or daylight saving.
//! Calendar decomposition (year, month, weekday) is delegated to `chrono`.

use std::str::FromStr;

use chrono::{Datelike, Months, NaiveDate};
use wp_core::errors::{Error, Result};
use wp_core::Settings;

use crate::month::Month;
use crate::weekday::Weekday;

/// Offset between the Common Era and the Thai Buddhist Era.
pub const BUDDHIST_ERA_OFFSET: i32 = 543;

/// `NaiveDate::num_days_from_ce` of 1899-12-31, serial 0.
const CE_DAYS_AT_EPOCH: i32 = 693_595;

const MIN_YEAR: u16 = 1900;
const MAX_YEAR: u16 = 2199;

/// A civil date, 1900-01-01 ..= 2199-12-31.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Date(i32);

impl Date {
    /// 1900-01-01.
    pub const MIN: Date = Date(1);

    /// 2199-12-31.
    pub const MAX: Date = Date(109_573);

    // ── Constructors ─────────────────────────────────────────────────────────

    /// Date with the given serial (1 = 1900-01-01).
    pub fn from_serial(serial: i32) -> Result<Self> {
        let date = Date(serial);
        if !(Self::MIN..=Self::MAX).contains(&date) {
            return Err(Error::Date(format!(
                "serial {serial} outside [{}, {}]",
                Self::MIN.0,
                Self::MAX.0
            )));
        }
        Ok(date)
    }

    /// Date from a year, a month number (1–12) and a day of the month.
    pub fn from_ymd(year: u16, month: u8, day: u8) -> Result<Self> {
        if !(MIN_YEAR..=MAX_YEAR).contains(&year) {
            return Err(Error::Date(format!(
                "year {year} out of range [{MIN_YEAR}, {MAX_YEAR}]"
            )));
        }
        if Month::from_number(month).is_none() {
            return Err(Error::Date(format!("month {month} out of range [1, 12]")));
        }
        let naive = NaiveDate::from_ymd_opt(year.into(), month.into(), day.into())
            .ok_or_else(|| Error::Date(format!("no day {day} in {year}-{month:02}")))?;
        Date::try_from(naive)
    }

    /// First day of `month` in `year`.
    pub fn first_of_month(year: u16, month: Month) -> Result<Self> {
        Date::from_ymd(year, month.number(), 1)
    }

    /// Last day of `month` in `year`.
    pub fn last_of_month(year: u16, month: Month) -> Result<Self> {
        Ok(Date::first_of_month(year, month)?.end_of_month())
    }

    /// Today: the evaluation date pinned in [`Settings`] if there is one,
    /// otherwise the local civil date.
    pub fn today() -> Result<Self> {
        match Settings::instance().evaluation_date_serial() {
            Some(serial) => Date::from_serial(serial),
            None => Date::try_from(chrono::Local::now().date_naive()),
        }
    }

    fn naive(self) -> NaiveDate {
        // In range by construction.
        NaiveDate::from_num_days_from_ce_opt(self.0 + CE_DAYS_AT_EPOCH).unwrap_or_default()
    }

    // ── Accessors ────────────────────────────────────────────────────────────

    /// Serial number.
    pub fn serial(&self) -> i32 {
        self.0
    }

    /// Gregorian year.
    pub fn year(&self) -> u16 {
        self.naive().year() as u16
    }

    /// Year of the Thai Buddhist Era (CE + 543).
    pub fn buddhist_era_year(&self) -> i32 {
        i32::from(self.year()) + BUDDHIST_ERA_OFFSET
    }

    /// Month of the year.
    pub fn month(&self) -> Month {
        Month::from_number(self.naive().month() as u8).unwrap_or(Month::January)
    }

    /// Day of the month, from 1.
    pub fn day_of_month(&self) -> u8 {
        self.naive().day() as u8
    }

    /// `(year, month number, day)`.
    pub fn ymd(&self) -> (u16, u8, u8) {
        let naive = self.naive();
        (naive.year() as u16, naive.month() as u8, naive.day() as u8)
    }

    /// Day of the week.
    pub fn weekday(&self) -> Weekday {
        self.naive().weekday().into()
    }

    /// Whether `other` lies in the same month of the same year.
    pub fn same_month(&self, other: Date) -> bool {
        let a = self.naive();
        let b = other.naive();
        (a.year(), a.month()) == (b.year(), b.month())
    }

    // ── Arithmetic ───────────────────────────────────────────────────────────

    /// `n` calendar days later (earlier if negative).
    pub fn add_days(self, n: i32) -> Result<Self> {
        self.0
            .checked_add(n)
            .ok_or_else(|| Error::Date(format!("{self:?} + {n} days overflows")))
            .and_then(Date::from_serial)
    }

    /// `n` calendar months later (earlier if negative), with the day clamped
    /// to the length of the target month: 2024-01-31 + 1 month is
    /// 2024-02-29.
    pub fn add_months(self, n: i32) -> Result<Self> {
        let months = Months::new(n.unsigned_abs());
        let moved = if n >= 0 {
            self.naive().checked_add_months(months)
        } else {
            self.naive().checked_sub_months(months)
        };
        moved
            .ok_or_else(|| Error::Date(format!("{self:?} + {n} months overflows")))
            .and_then(Date::try_from)
    }

    /// First day of this date's month.
    pub fn start_of_month(self) -> Self {
        Date(self.0 - i32::from(self.day_of_month()) + 1)
    }

    /// Last day of this date's month.
    pub fn end_of_month(self) -> Self {
        let start = self.start_of_month().naive();
        let length = start
            .checked_add_months(Months::new(1))
            .map_or(31, |next| (next - start).num_days() as i32);
        Date(self.start_of_month().0 + length - 1)
    }

    /// ISO 8601 calendar date, `YYYY-MM-DD`.
    pub fn iso(&self) -> String {
        self.naive().format("%Y-%m-%d").to_string()
    }
}

// ── Operators ─────────────────────────────────────────────────────────────────

/// Panics if the result leaves the supported range; use
/// [`Date::add_days`] to handle that case.
impl std::ops::Add<i32> for Date {
    type Output = Date;
    fn add(self, days: i32) -> Date {
        self.add_days(days).expect("date out of range")
    }
}

/// Panics if the result leaves the supported range.
impl std::ops::Sub<i32> for Date {
    type Output = Date;
    fn sub(self, days: i32) -> Date {
        self.add_days(-days).expect("date out of range")
    }
}

/// Signed number of days from `rhs` to `self`.
impl std::ops::Sub<Date> for Date {
    type Output = i32;
    fn sub(self, rhs: Date) -> i32 {
        self.0 - rhs.0
    }
}

// ── chrono interop ────────────────────────────────────────────────────────────

impl TryFrom<NaiveDate> for Date {
    type Error = Error;

    fn try_from(naive: NaiveDate) -> Result<Self> {
        let date = Date(naive.num_days_from_ce() - CE_DAYS_AT_EPOCH);
        if !(Self::MIN..=Self::MAX).contains(&date) {
            return Err(Error::Date(format!(
                "{naive} outside [{MIN_YEAR}-01-01, {MAX_YEAR}-12-31]"
            )));
        }
        Ok(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> NaiveDate {
        date.naive()
    }
}

impl FromStr for Date {
    type Err = Error;

    /// Parse `YYYY-MM-DD`.
    fn from_str(s: &str) -> Result<Self> {
        let naive = NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
            .map_err(|e| Error::InvalidArgument(format!("cannot parse date {s:?}: {e}")))?;
        Date::try_from(naive)
    }
}

// ── Formatting ────────────────────────────────────────────────────────────────

impl std::fmt::Display for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let (year, _, day) = self.ymd();
        write!(f, "{day} {} {year}", self.month())
    }
}

impl std::fmt::Debug for Date {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Date({})", self.iso())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Date {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.iso())
    }
}
