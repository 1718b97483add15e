//! The configured lunar calculator (`LunarCalendar`).
//!
//! A `LunarCalendar` bundles every input the queries depend on: the synodic
//! month constant and phase anchor, the new-moon table, the observance
//! offsets, the festival table, the holiday calendars and the two search
//! limits.  It is immutable once built, so every query is a pure function
//! of its arguments and may be called from any thread.

use std::sync::{Arc, OnceLock};

use wp_core::ensure;
use wp_core::errors::Result;
use wp_time::{Date, DateTime, Month};

use crate::calendars::{Thailand, UnitedStates};
use crate::epochs::{new_moon_epochs, reference_new_moon};
use crate::festivals::{self, thai_festivals, Festival, FestivalCountdown, DEFAULT_FESTIVAL_LIMIT};
use crate::holiday_calendar::{HolidayCalendar, HolidayRecord};
use crate::moon_phase::{self, PhaseReading, SYNODIC_MONTH};
use crate::observance::{
    self, LunarObservation, ObservanceOffset, UpcomingObservance, OBSERVANCE_WINDOW_DAYS,
    WAN_PHRA_OFFSETS,
};

/// Months scanned by [`LunarCalendar::next_observance_day`] by default.
pub const DEFAULT_SEARCH_HORIZON_MONTHS: u32 = 3;

/// Everything known about one civil date.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct DayInfo {
    /// The date.
    pub date: Date,
    /// Observance day on this date, if any.
    pub observance: Option<LunarObservation>,
    /// First holiday of the local calendar on this date, if any.
    pub local_holiday: Option<HolidayRecord>,
    /// First holiday of the overlay calendar on this date, if any.
    pub overlay_holiday: Option<HolidayRecord>,
}

impl DayInfo {
    /// Return `true` if nothing is observed on this date.
    pub fn is_ordinary(&self) -> bool {
        self.observance.is_none() && self.local_holiday.is_none() && self.overlay_holiday.is_none()
    }
}

/// The lunar and holiday calculator.
#[derive(Debug, Clone)]
pub struct LunarCalendar {
    synodic_month: f64,
    phase_anchor: DateTime,
    new_moons: Vec<Date>,
    offsets: Vec<ObservanceOffset>,
    festivals: Vec<Festival>,
    festival_limit: usize,
    search_horizon_months: u32,
    local: Arc<dyn HolidayCalendar>,
    overlay: Option<Arc<dyn HolidayCalendar>>,
}

static STANDARD: OnceLock<LunarCalendar> = OnceLock::new();

impl LunarCalendar {
    /// The standard Thai configuration.
    pub fn thai() -> Self {
        LunarCalendar {
            synodic_month: SYNODIC_MONTH,
            phase_anchor: reference_new_moon(),
            new_moons: new_moon_epochs(),
            offsets: WAN_PHRA_OFFSETS.to_vec(),
            festivals: thai_festivals(),
            festival_limit: DEFAULT_FESTIVAL_LIMIT,
            search_horizon_months: DEFAULT_SEARCH_HORIZON_MONTHS,
            local: Arc::new(Thailand),
            overlay: Some(Arc::new(UnitedStates)),
        }
    }

    /// A shared instance of [`LunarCalendar::thai`], built on first use.
    pub fn standard() -> &'static LunarCalendar {
        STANDARD.get_or_init(LunarCalendar::thai)
    }

    /// Start from the standard configuration and override parts of it.
    pub fn builder() -> LunarCalendarBuilder {
        LunarCalendarBuilder::new()
    }

    // ── Inspectors ───────────────────────────────────────────────────────

    /// Mean synodic month in days.
    pub fn synodic_month(&self) -> f64 {
        self.synodic_month
    }

    /// The new moons, ascending.
    pub fn new_moons(&self) -> &[Date] {
        &self.new_moons
    }

    /// The local holiday calendar.
    pub fn local_calendar(&self) -> &dyn HolidayCalendar {
        self.local.as_ref()
    }

    // ── Queries ──────────────────────────────────────────────────────────

    /// Phase of the moon at `at`.
    pub fn classify_moon_phase(&self, at: impl Into<DateTime>) -> PhaseReading {
        moon_phase::classify(at.into(), self.phase_anchor, self.synodic_month)
    }

    /// Observance days in `month` of `year`, ascending, one per date.
    pub fn resolve_observance_days(&self, year: u16, month: Month) -> Result<Vec<LunarObservation>> {
        observance::observances_in_month(&self.new_moons, &self.offsets, year, month)
    }

    /// The first observance day at or after `reference`, if one lies within
    /// the search horizon.
    pub fn next_observance_day(&self, reference: impl Into<DateTime>) -> Option<UpcomingObservance> {
        observance::next_observance(
            &self.new_moons,
            &self.offsets,
            reference.into(),
            self.search_horizon_months,
        )
    }

    /// Local holidays in `year`; empty when the year is not covered.
    pub fn lookup_holidays(&self, year: i32) -> Vec<HolidayRecord> {
        self.local.holidays(year)
    }

    /// The nearest festivals at or after `reference`, nearest first.
    pub fn upcoming_festivals(&self, reference: impl Into<DateTime>) -> Vec<FestivalCountdown> {
        festivals::upcoming(&self.festivals, reference.into(), self.festival_limit)
    }

    /// Observance and holidays on `date`.
    pub fn day_info(&self, date: Date) -> DayInfo {
        let observance = self
            .resolve_observance_days(date.year(), date.month())
            .ok()
            .and_then(|days| days.into_iter().find(|o| o.date == date));
        DayInfo {
            date,
            observance,
            local_holiday: self.local.holidays_on(date).into_iter().next(),
            overlay_holiday: self
                .overlay
                .as_ref()
                .and_then(|c| c.holidays_on(date).into_iter().next()),
        }
    }
}

impl Default for LunarCalendar {
    fn default() -> Self {
        LunarCalendar::thai()
    }
}

/// Builder for [`LunarCalendar`].
///
/// Starts from the standard Thai configuration; [`build`](Self::build)
/// validates the result.
#[derive(Debug, Clone)]
pub struct LunarCalendarBuilder {
    inner: LunarCalendar,
}

impl LunarCalendarBuilder {
    /// Begin from the standard configuration.
    pub fn new() -> Self {
        Self {
            inner: LunarCalendar::thai(),
        }
    }

    /// Set the mean synodic month in days.
    pub fn with_synodic_month(mut self, days: f64) -> Self {
        self.inner.synodic_month = days;
        self
    }

    /// Set the new moon that anchors phase classification.
    pub fn with_phase_anchor(mut self, anchor: DateTime) -> Self {
        self.inner.phase_anchor = anchor;
        self
    }

    /// Replace the new-moon table.
    pub fn with_new_moons(mut self, new_moons: impl IntoIterator<Item = Date>) -> Self {
        self.inner.new_moons = new_moons.into_iter().collect();
        self
    }

    /// Replace the observance offsets.
    pub fn with_offsets(mut self, offsets: impl IntoIterator<Item = ObservanceOffset>) -> Self {
        self.inner.offsets = offsets.into_iter().collect();
        self
    }

    /// Replace the festival table.
    pub fn with_festivals(mut self, festivals: impl IntoIterator<Item = Festival>) -> Self {
        self.inner.festivals = festivals.into_iter().collect();
        self
    }

    /// Set how many festivals a countdown lists.
    pub fn with_festival_limit(mut self, limit: usize) -> Self {
        self.inner.festival_limit = limit;
        self
    }

    /// Set how many months the next-observance search scans.
    pub fn with_search_horizon(mut self, months: u32) -> Self {
        self.inner.search_horizon_months = months;
        self
    }

    /// Replace the local holiday calendar.
    pub fn with_local_calendar(mut self, calendar: impl HolidayCalendar + 'static) -> Self {
        self.inner.local = Arc::new(calendar);
        self
    }

    /// Replace or remove the overlay holiday calendar.
    pub fn with_overlay_calendar(mut self, calendar: Option<Arc<dyn HolidayCalendar>>) -> Self {
        self.inner.overlay = calendar;
        self
    }

    /// Validate and build.
    ///
    /// New moons are sorted and deduplicated; festivals are sorted by date.
    pub fn build(self) -> Result<LunarCalendar> {
        let mut cal = self.inner;
        let synodic = cal.synodic_month;
        ensure!(
            synodic.is_finite() && synodic > 0.0,
            "synodic month must be positive, got {synodic}"
        );
        ensure!(
            synodic <= OBSERVANCE_WINDOW_DAYS as f64,
            "synodic month {synodic} exceeds the {OBSERVANCE_WINDOW_DAYS}-day observance window"
        );
        for offset in &cal.offsets {
            ensure!(
                offset.days >= 0 && offset.days as f64 <= synodic,
                "observance offset {} outside one synodic month of {synodic} days",
                offset.days
            );
        }
        ensure!(cal.search_horizon_months >= 1, "search horizon must be at least one month");
        cal.new_moons.sort();
        cal.new_moons.dedup();
        cal.festivals.sort_by_key(|f| f.date);
        Ok(cal)
    }
}

impl Default for LunarCalendarBuilder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::holiday_calendar::HolidayCategory;
    use crate::moon_phase::MoonPhase;

    fn date(y: u16, m: u8, d: u8) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    #[test]
    fn builder_defaults_match_thai() {
        let built = LunarCalendar::builder().build().unwrap();
        assert_eq!(built.new_moons(), LunarCalendar::thai().new_moons());
        assert_eq!(built.synodic_month(), SYNODIC_MONTH);
    }

    #[test]
    fn builder_rejects_bad_configuration() {
        assert!(LunarCalendar::builder().with_synodic_month(0.0).build().is_err());
        assert!(LunarCalendar::builder().with_synodic_month(f64::NAN).build().is_err());
        assert!(LunarCalendar::builder().with_search_horizon(0).build().is_err());
        let too_far = ObservanceOffset {
            days: 31,
            ..WAN_PHRA_OFFSETS[0]
        };
        assert!(LunarCalendar::builder().with_offsets([too_far]).build().is_err());
    }

    #[test]
    fn builder_sorts_new_moons() {
        let cal = LunarCalendar::builder()
            .with_new_moons([date(2024, 2, 9), date(2024, 1, 11), date(2024, 2, 9)])
            .build()
            .unwrap();
        assert_eq!(cal.new_moons(), [date(2024, 1, 11), date(2024, 2, 9)]);
    }

    #[test]
    fn day_info_joins_sources() {
        let cal = LunarCalendar::thai();

        // Visakha Bucha 2024 is also the full-moon Wan Phra.
        let info = cal.day_info(date(2024, 5, 22));
        let obs = info.observance.unwrap();
        assert_eq!(obs.phase, MoonPhase::Full);
        let th = info.local_holiday.unwrap();
        assert_eq!(th.name, "Visakha Bucha Day");
        assert_eq!(th.category, HolidayCategory::Religious);
        assert!(info.overlay_holiday.is_none());

        // New Year's Day is in both holiday calendars.
        let info = cal.day_info(date(2025, 1, 1));
        assert!(info.local_holiday.is_some());
        assert_eq!(info.overlay_holiday.unwrap().name, "New Year's Day");

        assert!(cal.day_info(date(2024, 3, 5)).is_ordinary());
    }

    #[test]
    fn overlay_can_be_removed() {
        let cal = LunarCalendar::builder().with_overlay_calendar(None).build().unwrap();
        assert!(cal.day_info(date(2024, 7, 4)).overlay_holiday.is_none());
    }

    #[test]
    fn festival_limit_is_configurable() {
        let cal = LunarCalendar::builder().with_festival_limit(5).build().unwrap();
        assert_eq!(cal.upcoming_festivals(date(2024, 1, 1)).len(), 5);
    }
}
