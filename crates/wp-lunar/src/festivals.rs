//! Festival table and countdowns.
//!
//! Festivals are dated per year; nothing wraps around to "next year".  A
//! countdown only ever sees instances already present in the table, so the
//! table carries a few years of forward-looking entries.

use wp_time::{Date, DateTime};

/// Version tag of [`FESTIVALS`].
pub const FESTIVAL_TABLE_VERSION: &str = "2024-2027.1";

/// How many festivals a countdown lists by default.
pub const DEFAULT_FESTIVAL_LIMIT: usize = 3;

const SONGKRAN: (&str, &str, &str) = (
    "Songkran",
    "สงกรานต์",
    "Thai New Year water festival. Streets become water battlegrounds!",
);
const LOY_KRATHONG: (&str, &str, &str) = (
    "Loy Krathong",
    "ลอยกระทง",
    "Festival of lights. Float krathongs on water to pay respect to the water goddess.",
);
const CHINESE_NEW_YEAR: (&str, &str, &str) = (
    "Chinese New Year",
    "ตรุษจีน",
    "Celebrate with red envelopes, lion dances, and family reunions.",
);

/// Festival instances as `((year, month, day), (name, Thai name, description))`.
#[rustfmt::skip]
pub const FESTIVALS: [((u16, u8, u8), (&str, &str, &str)); 10] = [
    ((2024, 4, 13), SONGKRAN),
    ((2024, 11, 15), LOY_KRATHONG),
    ((2025, 1, 29), CHINESE_NEW_YEAR),
    ((2025, 4, 13), SONGKRAN),
    ((2025, 11, 5), LOY_KRATHONG),
    ((2026, 2, 17), CHINESE_NEW_YEAR),
    ((2026, 4, 13), SONGKRAN),
    ((2026, 11, 24), LOY_KRATHONG),
    ((2027, 2, 6), CHINESE_NEW_YEAR),
    ((2027, 4, 13), SONGKRAN),
];

/// One dated festival instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Festival {
    /// English name.
    pub name: &'static str,
    /// Thai name.
    pub localized_name: &'static str,
    /// Civil date.
    pub date: Date,
    /// Short description.
    pub description: &'static str,
}

/// A festival with the number of days left until it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FestivalCountdown {
    /// English name.
    pub name: &'static str,
    /// Thai name.
    pub localized_name: &'static str,
    /// Civil date.
    pub date: Date,
    /// Whole days until the festival, rounded up; never negative.
    pub days_remaining: i32,
    /// Short description.
    pub description: &'static str,
}

impl FestivalCountdown {
    /// Split the remaining days into whole 30-day months and leftover days.
    pub fn months_and_days(&self) -> (i32, i32) {
        (self.days_remaining / 30, self.days_remaining % 30)
    }
}

/// The standard festival table as dated instances.
pub fn thai_festivals() -> Vec<Festival> {
    FESTIVALS
        .iter()
        .filter_map(|&((y, m, d), (name, localized_name, description))| {
            Some(Festival {
                name,
                localized_name,
                date: Date::from_ymd(y, m, d).ok()?,
                description,
            })
        })
        .collect()
}

/// The `limit` nearest festivals at or after `reference`, nearest first.
///
/// A festival qualifies when its date at midnight is not earlier than
/// `reference`; a festival later on the same calendar day as a non-midnight
/// reference has already begun and is skipped.  Ties keep table order.
pub fn upcoming(festivals: &[Festival], reference: DateTime, limit: usize) -> Vec<FestivalCountdown> {
    let mut upcoming: Vec<FestivalCountdown> = festivals
        .iter()
        .filter(|f| DateTime::at_midnight(f.date) >= reference)
        .map(|f| FestivalCountdown {
            name: f.name,
            localized_name: f.localized_name,
            date: f.date,
            days_remaining: reference.days_until(f.date),
            description: f.description,
        })
        .collect();
    upcoming.sort_by_key(|c| c.days_remaining);
    upcoming.truncate(limit);
    if upcoming.len() < limit {
        tracing::debug!(
            reference = %reference,
            found = upcoming.len(),
            limit,
            "festival table exhausted"
        );
    }
    upcoming
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn table_is_sorted_and_complete() {
        let table = thai_festivals();
        assert_eq!(table.len(), FESTIVALS.len());
        assert!(table.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn first_countdown_of_2024() {
        let list = upcoming(&thai_festivals(), date(2024, 1, 1).into(), 3);
        let names: Vec<_> = list.iter().map(|c| (c.name, c.date.iso())).collect();
        assert_eq!(
            names,
            [
                ("Songkran", "2024-04-13".to_string()),
                ("Loy Krathong", "2024-11-15".to_string()),
                ("Chinese New Year", "2025-01-29".to_string()),
            ]
        );
        assert_eq!(list[0].days_remaining, 103);
        assert_eq!(list[0].months_and_days(), (3, 13));
    }

    #[test]
    fn festival_today_counts_zero_at_midnight() {
        let list = upcoming(&thai_festivals(), date(2025, 4, 13).into(), 1);
        assert_eq!(list[0].date, date(2025, 4, 13));
        assert_eq!(list[0].days_remaining, 0);
    }

    #[test]
    fn festival_already_begun_is_skipped() {
        let noon = DateTime::from_ymd_hms(2025, 4, 13, 12, 0, 0).unwrap();
        let list = upcoming(&thai_festivals(), noon, 1);
        assert_eq!(list[0].date, date(2025, 11, 5));
        // 205.5 days, rounded up.
        assert_eq!(list[0].days_remaining, 206);
    }

    #[test]
    fn near_table_end_returns_fewer() {
        let list = upcoming(&thai_festivals(), date(2027, 1, 1).into(), 3);
        assert_eq!(list.len(), 2);
        assert!(upcoming(&thai_festivals(), date(2027, 5, 1).into(), 3).is_empty());
    }
}
