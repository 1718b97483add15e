//! The façade exposes the whole workspace under stable module names.

use wanphra::core::ScopedEvaluationDate;
use wanphra::lunar::{next_observance_day_from_now, LunarCalendar, MoonPhase};
use wanphra::time::{Date, Month};

#[test]
fn pinned_today_drives_next_observance() {
    let today = Date::from_ymd(2024, 2, 3).unwrap();
    let _guard = ScopedEvaluationDate::new(today.serial());

    let next = next_observance_day_from_now().unwrap().unwrap();
    assert_eq!(next.observation.date, Date::from_ymd(2024, 2, 9).unwrap());
    assert_eq!(next.observation.phase, MoonPhase::New);
    assert_eq!(next.days_remaining, 6);
}

#[test]
fn day_info_joins_observance_and_holiday() {
    let calendar = LunarCalendar::standard();

    let full_moon = calendar.day_info(Date::from_ymd(2024, 2, 23).unwrap());
    let observance = full_moon.observance.unwrap();
    assert_eq!(observance.phase, MoonPhase::Full);
    assert_eq!(observance.lunar_day, 15);
    assert!(full_moon.local_holiday.is_none());

    let makha_bucha = calendar.day_info(Date::from_ymd(2024, 2, 24).unwrap());
    assert!(makha_bucha.observance.is_none());
    assert_eq!(makha_bucha.local_holiday.unwrap().name, "Makha Bucha Day");
    assert!(makha_bucha.overlay_holiday.is_none());
    assert_eq!(makha_bucha.date.month(), Month::February);
}
