//! # wanphra
//!
//! Thai Buddhist lunar calendar: moon phases, Wan Phra observance days,
//! Thai public holidays and festival countdowns.
//!
//! This crate is a **façade** that re-exports all public items from the
//! underlying workspace crates. Application code should depend on this
//! crate rather than the individual `wp-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! wanphra = "0.1"
//! ```
//!
//! ```rust
//! use wanphra::lunar::{next_observance_day, MoonPhase};
//! use wanphra::time::Date;
//!
//! let next = next_observance_day(Date::from_ymd(2024, 1, 1).unwrap()).unwrap();
//! assert_eq!(next.observation.date, Date::from_ymd(2024, 1, 18).unwrap());
//! assert_eq!(next.observation.phase, MoonPhase::Waxing);
//! assert_eq!(next.days_remaining, 17);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core aliases, errors and the evaluation-date setting.
pub use wp_core as core;

/// Dates, date-times, months and weekdays.
pub use wp_time as time;

/// Moon phases, observance days, holidays and festivals.
pub use wp_lunar as lunar;
