//! Thai holidays.
//!
//! Civil, royal and Buddhist holidays as announced for each year.  The
//! Buddhist days (Makha, Visakha and Asanha Bucha, Buddhist Lent) and Loy
//! Krathong follow the lunar calendar and move every year; the rest are
//! fixed.  Songkran is listed once per day of the three-day festival.
//!
//! Covered years: 2024–2025.

use crate::holiday_calendar::{records_for_year, HolidayCalendar, HolidayEntry, HolidayRecord};
use crate::holiday_calendar::HolidayCategory::*;

/// Version tag of the Thai holiday table.
pub const THAI_HOLIDAY_TABLE_VERSION: &str = "2024-2025.1";

/// Years covered by the Thai holiday table.
pub const SUPPORTED_YEARS: std::ops::RangeInclusive<i32> = 2024..=2025;

#[rustfmt::skip]
const THAI_HOLIDAYS: [HolidayEntry; 40] = [
    // 2024
    HolidayEntry {
        ymd: (2024, 1, 1),
        name: "New Year's Day",
        localized_name: "วันขึ้นปีใหม่",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 2, 24),
        name: "Makha Bucha Day",
        localized_name: "วันมาฆบูชา",
        category: Religious,
        description: Some("Commemorates Buddha's teachings to 1,250 monks"),
    },
    HolidayEntry {
        ymd: (2024, 4, 6),
        name: "Chakri Memorial Day",
        localized_name: "วันจักรี",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 4, 13),
        name: "Songkran Festival",
        localized_name: "วันสงกรานต์",
        category: Cultural,
        description: Some("Thai New Year - Water Festival"),
    },
    HolidayEntry {
        ymd: (2024, 4, 14),
        name: "Songkran Festival",
        localized_name: "วันสงกรานต์",
        category: Cultural,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 4, 15),
        name: "Songkran Festival",
        localized_name: "วันสงกรานต์",
        category: Cultural,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 5, 1),
        name: "National Labour Day",
        localized_name: "วันแรงงานแห่งชาติ",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 5, 4),
        name: "Coronation Day",
        localized_name: "วันฉัตรมงคล",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 5, 22),
        name: "Visakha Bucha Day",
        localized_name: "วันวิสาขบูชา",
        category: Religious,
        description: Some("Buddha's birth, enlightenment & death"),
    },
    HolidayEntry {
        ymd: (2024, 6, 3),
        name: "Queen Suthida's Birthday",
        localized_name: "วันเฉลิมพระชนมพรรษา สมเด็จพระราชินี",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 7, 20),
        name: "Asanha Bucha Day",
        localized_name: "วันอาสาฬหบูชา",
        category: Religious,
        description: Some("Buddha's first sermon"),
    },
    HolidayEntry {
        ymd: (2024, 7, 21),
        name: "Buddhist Lent Day",
        localized_name: "วันเข้าพรรษา",
        category: Religious,
        description: Some("Start of Buddhist Lent"),
    },
    HolidayEntry {
        ymd: (2024, 7, 28),
        name: "King's Birthday",
        localized_name: "วันเฉลิมพระชนมพรรษา ร.๑๐",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 8, 12),
        name: "Queen Mother's Birthday",
        localized_name: "วันแม่แห่งชาติ",
        category: Royal,
        description: Some("Mother's Day"),
    },
    HolidayEntry {
        ymd: (2024, 10, 13),
        name: "King Bhumibol Memorial Day",
        localized_name: "วันคล้ายวันสวรรคต ร.๙",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 10, 23),
        name: "Chulalongkorn Day",
        localized_name: "วันปิยมหาราช",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 11, 15),
        name: "Loy Krathong",
        localized_name: "วันลอยกระทง",
        category: Cultural,
        description: Some("Festival of Lights"),
    },
    HolidayEntry {
        ymd: (2024, 12, 5),
        name: "King Bhumibol's Birthday",
        localized_name: "วันพ่อแห่งชาติ",
        category: Royal,
        description: Some("Father's Day"),
    },
    HolidayEntry {
        ymd: (2024, 12, 10),
        name: "Constitution Day",
        localized_name: "วันรัฐธรรมนูญ",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2024, 12, 31),
        name: "New Year's Eve",
        localized_name: "วันสิ้นปี",
        category: Public,
        description: None,
    },
    // 2025
    HolidayEntry {
        ymd: (2025, 1, 1),
        name: "New Year's Day",
        localized_name: "วันขึ้นปีใหม่",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 2, 12),
        name: "Makha Bucha Day",
        localized_name: "วันมาฆบูชา",
        category: Religious,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 4, 6),
        name: "Chakri Memorial Day",
        localized_name: "วันจักรี",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 4, 13),
        name: "Songkran Festival",
        localized_name: "วันสงกรานต์",
        category: Cultural,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 4, 14),
        name: "Songkran Festival",
        localized_name: "วันสงกรานต์",
        category: Cultural,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 4, 15),
        name: "Songkran Festival",
        localized_name: "วันสงกรานต์",
        category: Cultural,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 5, 1),
        name: "National Labour Day",
        localized_name: "วันแรงงานแห่งชาติ",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 5, 4),
        name: "Coronation Day",
        localized_name: "วันฉัตรมงคล",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 5, 11),
        name: "Visakha Bucha Day",
        localized_name: "วันวิสาขบูชา",
        category: Religious,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 6, 3),
        name: "Queen Suthida's Birthday",
        localized_name: "วันเฉลิมพระชนมพรรษา สมเด็จพระราชินี",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 7, 10),
        name: "Asanha Bucha Day",
        localized_name: "วันอาสาฬหบูชา",
        category: Religious,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 7, 11),
        name: "Buddhist Lent Day",
        localized_name: "วันเข้าพรรษา",
        category: Religious,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 7, 28),
        name: "King's Birthday",
        localized_name: "วันเฉลิมพระชนมพรรษา ร.๑๐",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 8, 12),
        name: "Queen Mother's Birthday",
        localized_name: "วันแม่แห่งชาติ",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 10, 13),
        name: "King Bhumibol Memorial Day",
        localized_name: "วันคล้ายวันสวรรคต ร.๙",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 10, 23),
        name: "Chulalongkorn Day",
        localized_name: "วันปิยมหาราช",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 11, 5),
        name: "Loy Krathong",
        localized_name: "วันลอยกระทง",
        category: Cultural,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 12, 5),
        name: "King Bhumibol's Birthday",
        localized_name: "วันพ่อแห่งชาติ",
        category: Royal,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 12, 10),
        name: "Constitution Day",
        localized_name: "วันรัฐธรรมนูญ",
        category: Public,
        description: None,
    },
    HolidayEntry {
        ymd: (2025, 12, 31),
        name: "New Year's Eve",
        localized_name: "วันสิ้นปี",
        category: Public,
        description: None,
    },
];

/// Thai holiday calendar.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thailand;

impl HolidayCalendar for Thailand {
    fn name(&self) -> &str {
        "Thailand"
    }

    fn holidays(&self, year: i32) -> Vec<HolidayRecord> {
        let records = records_for_year(&THAI_HOLIDAYS, year);
        if records.is_empty() {
            tracing::debug!(year, "no Thai holiday table for year");
        }
        records
    }
}
