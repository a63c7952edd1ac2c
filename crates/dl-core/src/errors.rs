//! Error types for datelib.
//!
//! Every fallible operation in the workspace returns [`Result`], whose error
//! side is the single `thiserror`-derived [`Error`] enum below.  The
//! [`ensure!`] and [`fail!`] macros are the short forms used to raise them.

use thiserror::Error;

/// The top-level error type used throughout datelib.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    /// A (year, month, day) combination that is not a calendar date, or date
    /// arithmetic that leaves the representable range.
    #[error("invalid date: {0}")]
    InvalidDate(String),

    /// Text that does not follow the expected grammar (tenors, ISO dates).
    #[error("invalid format: {0}")]
    InvalidFormat(String),

    /// A numeric value that does not fit the integer type it is parsed into.
    #[error("numeric overflow: {0}")]
    NumericOverflow(String),

    /// A holiday rule has no date in the requested year.
    #[error("rule not applicable: {0}")]
    RuleNotApplicable(String),

    /// The requested weekday occurrence does not exist in the month.
    #[error("occurrence not found: {0}")]
    OccurrenceNotFound(String),

    /// A bounded business-day scan ran out of steps.
    #[error("business day search exceeded: {0}")]
    BusinessDaySearchExceeded(String),

    /// A convention code or name that does not map to a known convention.
    #[error("unhandled convention: {0}")]
    UnhandledConvention(String),

    /// Precondition violated (argument out of range, wrong ordering).
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Shorthand `Result` type used throughout datelib.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Returns `Err(Error::InvalidArgument(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use dl_core::{ensure, errors::Error};
/// fn positive(x: i32) -> dl_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(matches!(positive(-1), Err(Error::InvalidArgument(_))));
/// ```
#[macro_export]
macro_rules! ensure {
    ($cond:expr, $($msg:tt)*) => {
        if !$cond {
            return Err($crate::errors::Error::InvalidArgument(
                format!($($msg)*)
            ));
        }
    };
}

/// Returns `Err(Error::$variant(...))` immediately.
///
/// # Example
/// ```
/// use dl_core::{fail, errors::Error};
/// fn always_err() -> dl_core::errors::Result<()> {
///     fail!(InvalidFormat, "bad tenor {:?}", "5X");
/// }
/// assert_eq!(
///     always_err(),
///     Err(Error::InvalidFormat("bad tenor \"5X\"".into()))
/// );
/// ```
#[macro_export]
macro_rules! fail {
    ($variant:ident, $($msg:tt)*) => {
        return Err($crate::errors::Error::$variant(format!($($msg)*)))
    };
}
