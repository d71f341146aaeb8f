//! Error types for chillisource.
//!
//! Every fallible helper in the workspace reports failure through the single
//! `thiserror`-derived [`Error`] enum below.  Precondition checks use the
//! [`ensure!`](crate::ensure) macro and unconditional failures use
//! [`fail!`](crate::fail).

use thiserror::Error;

/// The top-level error type used throughout chillisource.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
    /// General runtime error.
    #[error("{0}")]
    Runtime(String),

    /// Precondition violated.
    #[error("precondition not satisfied: {0}")]
    Precondition(String),

    /// Invalid argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    /// Input text did not have the expected shape (bad placeholder, bad hex
    /// digit, invalid UTF-8, …).
    #[error("format error: {0}")]
    Format(String),

    /// Date arithmetic left the representable range, or a date/time
    /// component was invalid.
    #[error("date error: {0}")]
    Date(String),

    /// A value could not be parsed into the requested type.
    #[error("cannot parse {value:?} as {target}")]
    Parse {
        /// The text that failed to parse.
        value: String,
        /// Name of the target type.
        target: &'static str,
    },

    /// A lookup by name or alias found nothing.
    #[error("{kind} not found: {name}")]
    NotFound {
        /// What was being looked up (e.g. the enum type name).
        kind: &'static str,
        /// The key that was not found.
        name: String,
    },
}

/// Shorthand `Result` type used throughout chillisource.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use cs_core::{ensure, errors::Error};
/// fn positive(x: i32) -> cs_core::errors::Result<i32> {
///     ensure!(x > 0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1).is_ok());
/// assert!(positive(-1).is_err());
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

/// Return `Err(Error::Runtime(...))` immediately.
///
/// # Example
/// ```
/// use cs_core::{fail, errors::Error};
/// fn always_err() -> cs_core::errors::Result<()> {
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
