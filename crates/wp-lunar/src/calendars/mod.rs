//! Concrete holiday calendars.

/// Thai civil, royal and Buddhist holidays.
pub mod thailand;

/// United States federal holidays, shown alongside Thai dates.
pub mod united_states;

pub use thailand::Thailand;
pub use united_states::UnitedStates;
