//! Global library settings.
//!
//! [`Settings`] holds the **evaluation date**, the date treated as "today"
//! by every query that defaults its reference date.  It is a process-wide
//! singleton accessed via a `std::sync::OnceLock`.
//!
//! The date is stored as a serial number (days since December 31, 1899) so
//! that this crate does not depend on the date type defined downstream.
//! When no evaluation date is set, callers fall back to the system clock.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Process-wide settings used by the wanphra library.
pub struct Settings {
    /// The pinned evaluation date as a serial number, if any.
    evaluation_date: Mutex<Option<i32>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            evaluation_date: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<i32>> {
        // The slot holds a plain `Option<i32>`; a panic while it was held
        // cannot leave it half-written.
        self.evaluation_date
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the pinned evaluation date serial, or `None` if "today"
    /// should come from the system clock.
    pub fn evaluation_date_serial(&self) -> Option<i32> {
        *self.slot()
    }

    /// Pin the evaluation date to the given serial number.
    pub fn set_evaluation_date_serial(&self, serial: i32) {
        *self.slot() = Some(serial);
    }

    /// Clear the evaluation date, resetting it to "use the system clock".
    pub fn reset_evaluation_date(&self) {
        *self.slot() = None;
    }
}

/// RAII guard that pins the evaluation date for its lifetime and restores
/// the previous value when dropped.
///
/// ```
/// use wp_core::{ScopedEvaluationDate, Settings};
///
/// {
///     let _guard = ScopedEvaluationDate::new(45_292);
///     assert_eq!(Settings::instance().evaluation_date_serial(), Some(45_292));
/// }
/// ```
#[must_use = "the evaluation date is restored as soon as the guard is dropped"]
pub struct ScopedEvaluationDate {
    previous: Option<i32>,
}

impl ScopedEvaluationDate {
    /// Pin the evaluation date to `serial` until the guard is dropped.
    pub fn new(serial: i32) -> Self {
        let settings = Settings::instance();
        let previous = settings.evaluation_date_serial();
        settings.set_evaluation_date_serial(serial);
        Self { previous }
    }
}

impl Drop for ScopedEvaluationDate {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(serial) => settings.set_evaluation_date_serial(serial),
            None => settings.reset_evaluation_date(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // All assertions live in one test: the singleton is shared across the
    // test threads of this crate.
    #[test]
    fn scoped_guard_nests_and_restores() {
        let settings = Settings::instance();
        settings.reset_evaluation_date();
        assert_eq!(settings.evaluation_date_serial(), None);
        {
            let _outer = ScopedEvaluationDate::new(100);
            assert_eq!(settings.evaluation_date_serial(), Some(100));
            {
                let _inner = ScopedEvaluationDate::new(200);
                assert_eq!(settings.evaluation_date_serial(), Some(200));
            }
            assert_eq!(settings.evaluation_date_serial(), Some(100));
        }
        assert_eq!(settings.evaluation_date_serial(), None);
    }
}
