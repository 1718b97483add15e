//! Moon-phase classification by mean synodic interpolation.
//!
//! The phase at any instant is found by measuring the elapsed time since a
//! known new moon, reducing it modulo the mean synodic month, and placing
//! the resulting cycle position into one of four coarse phase buckets.
//! This is an approximation good to a day or so; no ephemeris is involved.

use wp_time::DateTime;

/// Mean length of the synodic month in days.
///
/// The observance-day offsets in [`crate::observance`] are whole-day
/// fractions of this same constant.
pub const SYNODIC_MONTH: f64 = 29.530_59;

/// Coarse phase of the moon.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum MoonPhase {
    /// New moon (dark).
    New,
    /// Waxing (growing) moon.
    Waxing,
    /// Full moon.
    Full,
    /// Waning (shrinking) moon.
    Waning,
}

impl MoonPhase {
    /// All phases in cycle order.
    pub const ALL: [MoonPhase; 4] = [
        MoonPhase::New,
        MoonPhase::Waxing,
        MoonPhase::Full,
        MoonPhase::Waning,
    ];

    /// Lower-case English name.
    pub fn name(&self) -> &'static str {
        match self {
            MoonPhase::New => "new",
            MoonPhase::Waxing => "waxing",
            MoonPhase::Full => "full",
            MoonPhase::Waning => "waning",
        }
    }

    /// Thai name.
    pub fn thai_name(&self) -> &'static str {
        match self {
            MoonPhase::New => "เดือนดับ",
            MoonPhase::Waxing => "ข้างขึ้น",
            MoonPhase::Full => "เดือนเพ็ญ",
            MoonPhase::Waning => "ข้างแรม",
        }
    }
}

impl std::fmt::Display for MoonPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Upper bounds (exclusive) of the phase buckets, in cycle days.
///
/// Waxing and waning each span two buckets with the same label; the inner
/// breakpoints (7.38, 22.15) mark the quarter moons.
const PHASE_BUCKETS: [(f64, MoonPhase); 7] = [
    (1.85, MoonPhase::New),
    (7.38, MoonPhase::Waxing),
    (14.77, MoonPhase::Waxing),
    (16.61, MoonPhase::Full),
    (22.15, MoonPhase::Waning),
    (27.68, MoonPhase::Waning),
    (f64::INFINITY, MoonPhase::New),
];

/// Result of classifying an instant.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PhaseReading {
    /// Coarse phase.
    pub phase: MoonPhase,
    /// Whole days elapsed since the last new moon (`0..=29`).
    pub day_in_cycle: u8,
    /// Exact position in the cycle, in days, within `[0, synodic month)`.
    pub cycle_position: f64,
}

/// Position of `at` within the lunation cycle anchored at `new_moon`, in
/// days, normalised into `[0, synodic_month)`.
pub fn cycle_position(at: DateTime, new_moon: DateTime, synodic_month: f64) -> f64 {
    let elapsed = at.days_since(new_moon);
    let position = elapsed.rem_euclid(synodic_month);
    // rem_euclid may round up to the modulus itself for tiny negative inputs.
    if position >= synodic_month {
        0.0
    } else {
        position
    }
}

/// Map a cycle position (days since new moon) to its phase bucket.
pub fn phase_for_position(position: f64) -> MoonPhase {
    PHASE_BUCKETS
        .iter()
        .find(|(upper, _)| position < *upper)
        .map(|&(_, phase)| phase)
        .unwrap_or(MoonPhase::New)
}

/// Classify the moon at `at` relative to the new moon `new_moon`.
pub fn classify(at: DateTime, new_moon: DateTime, synodic_month: f64) -> PhaseReading {
    let position = cycle_position(at, new_moon, synodic_month);
    PhaseReading {
        phase: phase_for_position(position),
        day_in_cycle: position.floor() as u8,
        cycle_position: position,
    }
}
