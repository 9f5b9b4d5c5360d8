//! Error types for raining-rs.
//!
//! Most of the library signals out-of-domain inputs with IEEE-754 sentinel
//! values (NaN, ±∞) rather than errors; this module covers the remaining
//! hard failures – division by a zero-mean operand and invocation of an
//! unimplemented distribution capability – as a single `thiserror`-derived
//! enum, plus the `ensure!` / `fail!` convenience macros.

use thiserror::Error;

/// The top-level error type used throughout raining-rs.
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

    /// Division by an operand with zero expected value.
    #[error("division by zero")]
    DivisionByZero,

    /// A distribution capability was invoked without an implementation.
    #[error("not implemented: {0}")]
    NotImplemented(String),
}

/// Shorthand `Result` type used throughout raining-rs.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Return `Err(Error::Precondition(...))` if `$cond` is false.
///
/// # Example
/// ```
/// use rn_core::{ensure, errors::Error};
/// fn positive(x: f64) -> rn_core::errors::Result<f64> {
///     ensure!(x > 0.0, "x must be positive, got {x}");
///     Ok(x)
/// }
/// assert!(positive(1.0).is_ok());
/// assert!(positive(-1.0).is_err());
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
/// use rn_core::{fail, errors::Error};
/// fn always_err() -> rn_core::errors::Result<()> {
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(Error::DivisionByZero.to_string(), "division by zero");
        assert_eq!(
            Error::NotImplemented("pdf".into()).to_string(),
            "not implemented: pdf"
        );
        assert_eq!(
            Error::InvalidArgument("sigma".into()).to_string(),
            "invalid argument: sigma"
        );
    }

    #[test]
    fn ensure_propagates() {
        fn inner(x: f64) -> Result<f64> {
            ensure!(x.is_finite(), "x must be finite");
            Ok(x)
        }
        assert_eq!(inner(1.0), Ok(1.0));
        assert!(matches!(
            inner(f64::INFINITY),
            Err(Error::Precondition(_))
        ));
    }
}
