//! Integration tests for `Date`, `DateTime`, `Month` and `Weekday`.

use proptest::prelude::*;
use wp_core::ScopedEvaluationDate;
use chrono::{Datelike, NaiveDate};
use wp_time::{Date, DateTime, Month};

fn date(y: u16, m: u8, d: u8) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

// ─── Calendar consistency ─────────────────────────────────────────────────────

#[test]
fn consecutive_serials_follow_the_gregorian_calendar() {
    let mut d = date(2023, 12, 1);
    let mut naive = NaiveDate::from_ymd_opt(2023, 12, 1).unwrap();
    while d < date(2026, 2, 1) {
        assert_eq!(d.iso(), naive.to_string());
        assert_eq!(d.weekday(), naive.weekday().into());
        d = d + 1;
        naive = naive.succ_opt().unwrap();
    }
}

#[test]
fn leap_days() {
    assert_eq!(Date::last_of_month(2024, Month::February).unwrap().day_of_month(), 29);
    assert_eq!(Date::last_of_month(2025, Month::February).unwrap().day_of_month(), 28);
    assert_eq!(Date::last_of_month(2100, Month::February).unwrap().day_of_month(), 28);
    assert_eq!(Date::last_of_month(2000, Month::February).unwrap().day_of_month(), 29);
}

#[test]
fn month_index_conventions_agree() {
    // January 2024, written both ways.
    let zero_based = Month::from_index(0).unwrap();
    let one_based = Month::from_number(1).unwrap();
    assert_eq!(zero_based, one_based);
    assert_eq!(
        Date::first_of_month(2024, zero_based).unwrap(),
        date(2024, 1, 1)
    );
}

// ─── Evaluation date ──────────────────────────────────────────────────────────

#[test]
fn today_honours_pinned_evaluation_date() {
    let pinned = date(2024, 1, 1);
    let _guard = ScopedEvaluationDate::new(pinned.serial());
    assert_eq!(Date::today().unwrap(), pinned);
    assert_eq!(DateTime::now().unwrap(), DateTime::at_midnight(pinned));
}

// ─── Properties ───────────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn ymd_roundtrip(serial in 1i32..=Date::MAX.serial()) {
        let d = Date::from_serial(serial).unwrap();
        let (y, m, day) = d.ymd();
        prop_assert_eq!(Date::from_ymd(y, m, day).unwrap(), d);
    }

    #[test]
    fn add_months_stays_in_target_month(serial in 400i32..100_000, n in -24i32..=24) {
        let d = Date::from_serial(serial).unwrap();
        let moved = d.add_months(n).unwrap();
        let months = |x: Date| x.year() as i32 * 12 + x.month().index() as i32;
        prop_assert_eq!(months(moved) - months(d), n);
        prop_assert!(moved.day_of_month() <= d.day_of_month());
    }

    #[test]
    fn days_until_matches_ceiling(day_offset in -400i32..400, second in 0u32..86_400) {
        let base = date(2024, 6, 15);
        let now = DateTime::new(base, second).unwrap();
        let target = base + day_offset;
        let exact = (DateTime::at_midnight(target).seconds_since(now)) as f64 / 86_400.0;
        prop_assert_eq!(now.days_until(target), exact.ceil() as i32);
    }
}
