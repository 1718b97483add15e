//! `HolidayCalendar` trait and holiday records.
//!
//! A holiday calendar is a static, per-year table of named days.  Years
//! outside a table yield an empty list rather than an error, and
//! multi-day holidays appear as one record per day.

use wp_time::Date;

/// Category of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum HolidayCategory {
    /// Civil public holiday.
    Public,
    /// Buddhist religious holiday.
    Religious,
    /// Royal commemoration.
    Royal,
    /// Cultural festival.
    Cultural,
}

impl std::fmt::Display for HolidayCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            HolidayCategory::Public => "public",
            HolidayCategory::Religious => "religious",
            HolidayCategory::Royal => "royal",
            HolidayCategory::Cultural => "cultural",
        })
    }
}

/// One day of a holiday.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct HolidayRecord {
    /// Civil date.
    pub date: Date,
    /// English name.
    pub name: &'static str,
    /// Name in the calendar's own language.
    pub localized_name: &'static str,
    /// Category.
    pub category: HolidayCategory,
    /// Optional short description.
    pub description: Option<&'static str>,
}

/// Row of a static holiday table; turned into a [`HolidayRecord`] on lookup.
#[derive(Debug, Clone, Copy)]
pub(crate) struct HolidayEntry {
    pub ymd: (u16, u8, u8),
    pub name: &'static str,
    pub localized_name: &'static str,
    pub category: HolidayCategory,
    pub description: Option<&'static str>,
}

impl HolidayEntry {
    pub(crate) fn record(&self) -> Option<HolidayRecord> {
        let (y, m, d) = self.ymd;
        Some(HolidayRecord {
            date: Date::from_ymd(y, m, d).ok()?,
            name: self.name,
            localized_name: self.localized_name,
            category: self.category,
            description: self.description,
        })
    }
}

/// Records of every entry in `table` dated in `year`, in table order.
pub(crate) fn records_for_year(table: &[HolidayEntry], year: i32) -> Vec<HolidayRecord> {
    table
        .iter()
        .filter(|e| e.ymd.0 as i32 == year)
        .filter_map(HolidayEntry::record)
        .collect()
}

/// A table of holidays per year.
pub trait HolidayCalendar: std::fmt::Debug + Send + Sync {
    /// Human-readable name (e.g. `"Thailand"`).
    fn name(&self) -> &str;

    /// Every holiday record in `year`, in table order; empty when the year
    /// is not covered.
    fn holidays(&self, year: i32) -> Vec<HolidayRecord>;

    /// Holiday records dated exactly `date`.
    fn holidays_on(&self, date: Date) -> Vec<HolidayRecord> {
        self.holidays(date.year() as i32)
            .into_iter()
            .filter(|h| h.date == date)
            .collect()
    }

    /// Return `true` if `date` carries at least one holiday.
    fn is_holiday(&self, date: Date) -> bool {
        !self.holidays_on(date).is_empty()
    }
}
