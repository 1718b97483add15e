//! United States federal holidays.
//!
//! Shown next to Thai dates for expatriates who keep both calendars.  The
//! records are public holidays only; the localized name is the English name.
//!
//! Covered years: 2024–2025.

use crate::holiday_calendar::HolidayCategory::Public;
use crate::holiday_calendar::{records_for_year, HolidayCalendar, HolidayEntry, HolidayRecord};

#[rustfmt::skip]
const US_HOLIDAYS: [HolidayEntry; 20] = [
    HolidayEntry {
        ymd: (2024, 1, 1),
        name: "New Year's Day",
        localized_name: "New Year's Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 1, 15),
        name: "MLK Day",
        localized_name: "MLK Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 2, 19),
        name: "Presidents' Day",
        localized_name: "Presidents' Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 5, 27),
        name: "Memorial Day",
        localized_name: "Memorial Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 7, 4),
        name: "Independence Day",
        localized_name: "Independence Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 9, 2),
        name: "Labor Day",
        localized_name: "Labor Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 10, 14),
        name: "Columbus Day",
        localized_name: "Columbus Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 11, 11),
        name: "Veterans Day",
        localized_name: "Veterans Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 11, 28),
        name: "Thanksgiving",
        localized_name: "Thanksgiving",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 12, 25),
        name: "Christmas",
        localized_name: "Christmas",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 1, 1),
        name: "New Year's Day",
        localized_name: "New Year's Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 1, 20),
        name: "MLK Day",
        localized_name: "MLK Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 2, 17),
        name: "Presidents' Day",
        localized_name: "Presidents' Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 5, 26),
        name: "Memorial Day",
        localized_name: "Memorial Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 7, 4),
        name: "Independence Day",
        localized_name: "Independence Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 9, 1),
        name: "Labor Day",
        localized_name: "Labor Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 10, 13),
        name: "Columbus Day",
        localized_name: "Columbus Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 11, 11),
        name: "Veterans Day",
        localized_name: "Veterans Day",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 11, 27),
        name: "Thanksgiving",
        localized_name: "Thanksgiving",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 12, 25),
        name: "Christmas",
        localized_name: "Christmas",
        category: Public,
        description: None,
    },
];

/// United States federal holiday calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnitedStates;

impl HolidayCalendar for UnitedStates {
    fn name(&self) -> &str {
        "United States"
    }

    fn holidays(&self, year: i32) -> Vec<HolidayRecord> {
        records_for_year(&US_HOLIDAYS, year)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wp_time::{Date, Weekday};

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn ten_holidays_per_year() {
        assert_eq!(UnitedStates.holidays(2024).len(), 10);
        assert_eq!(UnitedStates.holidays(2025).len(), 10);
        assert!(UnitedStates.holidays(2026).is_empty());
    }

    #[test]
    fn monday_holidays_fall_on_mondays() {
        for year in [2024, 2025] {
            for r in UnitedStates.holidays(year) {
                if matches!(r.name, "MLK Day" | "Presidents' Day" | "Memorial Day" | "Labor Day" | "Columbus Day") {
                    assert_eq!(r.date.weekday(), Weekday::Monday, "{} {:?}", r.name, r.date);
                }
            }
        }
    }

    #[test]
    fn thanksgiving_is_a_thursday() {
        assert_eq!(date(2024, 11, 28).weekday(), Weekday::Thursday);
        assert!(UnitedStates.is_holiday(date(2024, 11, 28)));
        assert!(UnitedStates.is_holiday(date(2025, 11, 27)));
    }
}
