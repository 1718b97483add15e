//! Buddhist observance days (Wan Phra).
//!
//! Wan Phra falls on the 8th and 15th day of the waxing fortnight and the
//! 8th and 15th (or 14th) day of the waning fortnight.  Here they are
//! derived by fixed calendar-day offsets from each tabulated new moon,
//! never from a live phase computation:
//!
//! | offset | fortnight day        | phase  |
//! |--------|----------------------|--------|
//! | +7     | ขึ้น ๘ ค่ำ (waxing 8th) | waxing |
//! | +14    | ขึ้น ๑๕ ค่ำ (full moon)  | full   |
//! | +22    | แรม ๘ ค่ำ (waning 8th)  | waning |
//! | +29    | แรม ๑๕ ค่ำ (dark moon)  | new    |
//!
//! A new moon contributes to a month when its observance window
//! `[epoch, epoch + 30 days]` overlaps the month, both ends inclusive at
//! day granularity.

use tracing::{debug, trace};
use wp_core::errors::Result;
use wp_time::{Date, DateTime, Month};

use crate::moon_phase::MoonPhase;

/// Length of the window after a new moon that can hold its observances.
pub const OBSERVANCE_WINDOW_DAYS: i32 = 30;

/// One observance day, as an offset from its new moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ObservanceOffset {
    /// Calendar days after the new moon.
    pub days: i32,
    /// Phase label carried by the observance.
    pub phase: MoonPhase,
    /// Day of the waxing or waning fortnight (8 or 15).
    pub lunar_day: u8,
    /// Thai label.
    pub label: &'static str,
    /// English label.
    pub english_label: &'static str,
}

/// The four Wan Phra of every lunation.
pub const WAN_PHRA_OFFSETS: [ObservanceOffset; 4] = [
    ObservanceOffset {
        days: 7,
        phase: MoonPhase::Waxing,
        lunar_day: 8,
        label: "วันพระ ขึ้น ๘ ค่ำ",
        english_label: "Wan Phra, 8th waxing day",
    },
    ObservanceOffset {
        days: 14,
        phase: MoonPhase::Full,
        lunar_day: 15,
        label: "วันพระ ขึ้น ๑๕ ค่ำ (วันเพ็ญ)",
        english_label: "Wan Phra, full moon",
    },
    ObservanceOffset {
        days: 22,
        phase: MoonPhase::Waning,
        lunar_day: 8,
        label: "วันพระ แรม ๘ ค่ำ",
        english_label: "Wan Phra, 8th waning day",
    },
    ObservanceOffset {
        days: 29,
        phase: MoonPhase::New,
        lunar_day: 15,
        label: "วันพระ แรม ๑๕ ค่ำ (วันดับ)",
        english_label: "Wan Phra, dark moon",
    },
];

/// A day in the lunar calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LunarObservation {
    /// Civil date.
    pub date: Date,
    /// Phase label.
    pub phase: MoonPhase,
    /// Day of the waxing or waning fortnight.
    pub lunar_day: u8,
    /// Days after the new moon the date was derived from.
    pub day_in_cycle: i32,
    /// Whether the day is a Buddhist observance day.
    pub is_observance_day: bool,
    /// Thai label.
    pub label: &'static str,
    /// English label.
    pub english_label: &'static str,
}

impl LunarObservation {
    fn from_offset(new_moon: Date, offset: &ObservanceOffset) -> Option<Self> {
        let date = new_moon.add_days(offset.days).ok()?;
        Some(Self {
            date,
            phase: offset.phase,
            lunar_day: offset.lunar_day,
            day_in_cycle: offset.days,
            is_observance_day: true,
            label: offset.label,
            english_label: offset.english_label,
        })
    }
}

/// The next observance day relative to a reference instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct UpcomingObservance {
    /// The observance itself.
    pub observation: LunarObservation,
    /// Whole days until it, rounded up.
    pub days_remaining: i32,
}

/// Observance days falling in `month` of `year`, ascending, one per date.
///
/// `new_moons` need not be sorted.  Fails only if `year` is outside the
/// supported date range.
pub fn observances_in_month(
    new_moons: &[Date],
    offsets: &[ObservanceOffset],
    year: u16,
    month: Month,
) -> Result<Vec<LunarObservation>> {
    let first = Date::first_of_month(year, month)?;
    let last = first.end_of_month();

    let relevant: Vec<Date> = new_moons
        .iter()
        .copied()
        .filter(|&nm| {
            let window_end = nm
                .add_days(OBSERVANCE_WINDOW_DAYS)
                .unwrap_or(Date::MAX);
            nm <= last && window_end >= first
        })
        .collect();
    debug!(
        year,
        month = month.number(),
        new_moons = relevant.len(),
        "selected new moons for month"
    );

    let mut found: Vec<LunarObservation> = Vec::with_capacity(relevant.len() * offsets.len());
    for nm in relevant {
        for offset in offsets {
            let Some(obs) = LunarObservation::from_offset(nm, offset) else {
                continue;
            };
            if !obs.date.same_month(first) {
                trace!(date = %obs.date.iso(), "observance outside month");
                continue;
            }
            if found.iter().any(|o| o.date == obs.date) {
                trace!(date = %obs.date.iso(), "duplicate observance dropped");
                continue;
            }
            found.push(obs);
        }
    }
    // Stable: among equal dates the first-derived entry was kept above.
    found.sort_by_key(|o| o.date);
    Ok(found)
}

/// The first observance at or after `reference`, scanning the reference
/// month and the following `horizon_months - 1` months.
///
/// An observance qualifies when its date at midnight is not earlier than
/// `reference`.  Returns `None` when the horizon holds no observance, which
/// happens past the end of the new-moon table.
pub fn next_observance(
    new_moons: &[Date],
    offsets: &[ObservanceOffset],
    reference: DateTime,
    horizon_months: u32,
) -> Option<UpcomingObservance> {
    let start = reference.date().start_of_month();
    for i in 0..horizon_months {
        let Ok(month_start) = start.add_months(i as i32) else {
            break;
        };
        let Ok(candidates) =
            observances_in_month(new_moons, offsets, month_start.year(), month_start.month())
        else {
            break;
        };
        if let Some(observation) = candidates
            .into_iter()
            .find(|o| DateTime::at_midnight(o.date) >= reference)
        {
            return Some(UpcomingObservance {
                observation,
                days_remaining: reference.days_until(observation.date),
            });
        }
    }
    debug!(
        reference = %reference,
        horizon_months,
        "no observance day within search horizon"
    );
    None
}
