//! Universally-quantified properties of the standard calculator.

use proptest::prelude::*;
use wp_lunar::{
    classify_moon_phase, next_observance_day, resolve_observance_days, upcoming_festivals,
    MoonPhase, SYNODIC_MONTH,
};
use wp_time::{Date, DateTime, Month};

fn any_datetime() -> impl Strategy<Value = DateTime> {
    // 1950-01-01 .. 2150-01-01
    (18_264i32..91_312, 0u32..86_400)
        .prop_map(|(serial, second)| DateTime::new(Date::from_serial(serial).unwrap(), second).unwrap())
}

fn any_month() -> impl Strategy<Value = Month> {
    (0u8..12).prop_map(|i| Month::from_index(i).unwrap())
}

proptest! {
    #[test]
    fn phase_reading_is_in_range(at in any_datetime()) {
        let reading = classify_moon_phase(at);
        prop_assert!(reading.day_in_cycle < 30);
        prop_assert!(reading.cycle_position >= 0.0);
        prop_assert!(reading.cycle_position < SYNODIC_MONTH);
        prop_assert_eq!(reading.day_in_cycle as f64, reading.cycle_position.floor());
        prop_assert!(MoonPhase::ALL.contains(&reading.phase));
    }

    #[test]
    fn phase_repeats_every_synodic_month(at in any_datetime(), cycles in -20i64..20) {
        let shift = (cycles as f64 * SYNODIC_MONTH * 86_400.0).round() as i64;
        let days = shift.div_euclid(86_400) as i32;
        let seconds = shift.rem_euclid(86_400) as u32;
        let mut date = at.date().add_days(days).unwrap();
        let mut second = at.second_of_day() + seconds;
        if second >= 86_400 {
            second -= 86_400;
            date = date.add_days(1).unwrap();
        }
        let shifted = DateTime::new(date, second).unwrap();
        let a = classify_moon_phase(at).cycle_position;
        let b = classify_moon_phase(shifted).cycle_position;
        // Equal modulo the cycle, up to one second of rounding.
        let diff = (a - b).abs();
        prop_assert!(diff < 1e-4 || (SYNODIC_MONTH - diff) < 1e-4, "{a} vs {b}");
    }

    #[test]
    fn observances_stay_in_month_without_duplicates(year in 2023u16..=2026, month in any_month()) {
        let days = resolve_observance_days(year, month).unwrap();
        let first = Date::first_of_month(year, month).unwrap();
        let last = first.end_of_month();
        for o in &days {
            prop_assert!(o.date >= first && o.date <= last, "{:?} outside {year}-{month}", o.date);
            prop_assert!(o.is_observance_day);
            prop_assert!(matches!(o.lunar_day, 8 | 15));
        }
        prop_assert!(days.windows(2).all(|w| w[0].date < w[1].date));
        prop_assert_eq!(days.clone(), resolve_observance_days(year, month).unwrap());
    }

    #[test]
    fn next_observance_is_nearest(serial in 45_291i32..46_022, second in 0u32..86_400) {
        // 2024-01-01 .. 2025-12-31
        let reference = DateTime::new(Date::from_serial(serial).unwrap(), second).unwrap();
        if let Some(next) = next_observance_day(reference) {
            prop_assert!(DateTime::at_midnight(next.observation.date) >= reference);
            prop_assert!(next.days_remaining >= 0);
            prop_assert_eq!(next.days_remaining, reference.days_until(next.observation.date));
            // Nothing earlier in the reference month qualifies.
            let here = reference.date();
            let earlier = resolve_observance_days(here.year(), here.month())
                .unwrap()
                .into_iter()
                .any(|o| DateTime::at_midnight(o.date) >= reference && o.date < next.observation.date);
            prop_assert!(!earlier);
        }
    }

    #[test]
    fn festival_countdowns_are_sorted(serial in 45_200i32..46_900) {
        let reference = Date::from_serial(serial).unwrap();
        let list = upcoming_festivals(reference);
        prop_assert!(list.len() <= 3);
        prop_assert!(list.iter().all(|c| c.days_remaining >= 0 && c.date >= reference));
        prop_assert!(list.windows(2).all(|w| w[0].days_remaining <= w[1].days_remaining));
    }
}
