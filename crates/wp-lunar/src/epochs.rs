//! Tabulated new-moon epochs.
//!
//! Observance days are derived from these dates by fixed day offsets, so
//! the table is versioned data: editing an entry moves every Wan Phra in
//! that lunation.  Entries are civil dates in Thailand; the time of day of
//! each new moon is not recorded.

use wp_time::{Date, DateTime};

/// Version tag of [`NEW_MOONS`].
pub const NEW_MOON_TABLE_VERSION: &str = "2024-2025.1";

/// New moons for 2024–2025 as `(year, month, day)`.
pub const NEW_MOONS: [(u16, u8, u8); 25] = [
    (2024, 1, 11),
    (2024, 2, 9),
    (2024, 3, 10),
    (2024, 4, 8),
    (2024, 5, 8),
    (2024, 6, 6),
    (2024, 7, 5),
    (2024, 8, 4),
    (2024, 9, 3),
    (2024, 10, 2),
    (2024, 11, 1),
    (2024, 12, 1),
    (2024, 12, 30),
    (2025, 1, 29),
    (2025, 2, 28),
    (2025, 3, 29),
    (2025, 4, 27),
    (2025, 5, 27),
    (2025, 6, 25),
    (2025, 7, 24),
    (2025, 8, 23),
    (2025, 9, 21),
    (2025, 10, 21),
    (2025, 11, 20),
    (2025, 12, 20),
];

/// The new moon used as the phase-classification anchor, with its time of
/// day: 2024-01-11 11:57 as `(year, month, day, hour, minute)`.
pub const REFERENCE_NEW_MOON: (u16, u8, u8, u8, u8) = (2024, 1, 11, 11, 57);

/// The tabulated new moons as dates, in ascending order.
pub fn new_moon_epochs() -> Vec<Date> {
    NEW_MOONS
        .iter()
        .filter_map(|&(y, m, d)| Date::from_ymd(y, m, d).ok())
        .collect()
}

/// The phase-classification anchor as a date-time.
pub fn reference_new_moon() -> DateTime {
    let (y, m, d, h, min) = REFERENCE_NEW_MOON;
    DateTime::from_ymd_hms(y, m, d, h, min, 0)
        .unwrap_or_else(|_| DateTime::at_midnight(Date::MIN))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::moon_phase::SYNODIC_MONTH;

    #[test]
    fn table_is_complete_and_sorted() {
        let epochs = new_moon_epochs();
        assert_eq!(epochs.len(), NEW_MOONS.len());
        assert!(epochs.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn spacing_is_one_lunation() {
        for w in new_moon_epochs().windows(2) {
            let gap = w[1] - w[0];
            assert!(
                (29..=30).contains(&gap),
                "{:?} -> {:?} spans {gap} days",
                w[0],
                w[1]
            );
            assert!((gap as f64 - SYNODIC_MONTH).abs() < 1.0);
        }
    }

    #[test]
    fn anchor_matches_first_epoch() {
        let anchor = reference_new_moon();
        assert_eq!(anchor.date(), new_moon_epochs()[0]);
        assert_eq!((anchor.hour(), anchor.minute()), (11, 57));
    }
}
