//! Error types for wanphra.
//!
//! Every fallible operation in the workspace returns the single
//! `thiserror`-derived [`Error`] enum.  Preconditions are checked with the
//! [`ensure!`](crate::ensure) macro and unconditional failures raised with
//! [`fail!`](crate::fail).
//!
//! Most calendar queries are total: an unsupported year yields an empty
//! result and a missing observance yields `None`.  Errors are reserved for
//! malformed input such as month 13 or February 30.

use thiserror::Error;

/// The top-level error type used throughout wanphra.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// General runtime error (raised by `fail!`).
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated (raised by `ensure!`).
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Date construction or date arithmetic left the supported range.
    #[error("date error: {0}")]
    Date(String),

    /// Invalid argument, e.g. an unparseable date string.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout wanphra.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use wp_core::{ensure, errors::Error};
/// fn positive(x: i32) -> wp_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::Precondition(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::Precondition(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use wp_core::{fail, errors::Error};
/// fn always_err() -> wp_core::errors::Result<()> {
///     fail!("something went wrong");
/// }
/// assert!(always_err().is_err());
/// ```
#[macro_export]
macro_rules! fail {
    ($($msg:tt)*) => {
        return Err($crate::errors::Error::Runtime(format!($($msg)*)))
    };
}
