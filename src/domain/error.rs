//! Error types for the zcalc plugin.
//!
//! Two layers of errors live here:
//!
//! - [`EvalError`]: failures of a single calculator evaluation. These never
//!   escape the engine as `Err`; [`dispatch`](crate::domain::dispatch) catches
//!   them and hands them back in [`Dispatch`](crate::domain::Dispatch).
//! - [`ZcalcError`]: the crate-level error for theme loading and the
//!   application layer, with a [`Result`] alias.
//!
//! Both are implemented with `thiserror`.

use thiserror::Error;

/// A failed calculator evaluation.
///
/// # Examples
///
/// ```
/// use zcalc::domain::{EvalError, Operator};
///
/// assert_eq!(Operator::Divide.apply(5.0, 0.0), Err(EvalError::DivisionByZero));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EvalError {
    /// The right operand of a division was exactly zero.
    #[error("Cannot divide by zero")]
    DivisionByZero,

    /// Any other evaluation failure: an operand that does not parse as a
    /// finite number, or a result that overflowed.
    ///
    /// The string describes what went wrong and is only meant for logs.
    #[error("Invalid operation: {0}")]
    InvalidOperation(String),
}

impl EvalError {
    /// Short message suitable for the user-facing error modal.
    #[must_use]
    pub const fn user_message(&self) -> &'static str {
        match self {
            Self::DivisionByZero => "Cannot divide by zero",
            Self::InvalidOperation(_) => "Invalid operation",
        }
    }
}

/// The main error type for zcalc operations outside the pure engine.
#[derive(Debug, Error)]
pub enum ZcalcError {
    /// Filesystem or I/O operation failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Theme could not be read or parsed.
    #[error("Theme error: {0}")]
    Theme(String),
}

/// A specialized `Result` type for zcalc operations.
pub type Result<T> = std::result::Result<T, ZcalcError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_messages_hide_details() {
        let err = EvalError::InvalidOperation("operand \"1e999\" overflows".to_string());
        assert_eq!(err.user_message(), "Invalid operation");
        assert_eq!(EvalError::DivisionByZero.user_message(), "Cannot divide by zero");
    }

    #[test]
    fn io_errors_convert() {
        let err: ZcalcError = std::io::Error::new(std::io::ErrorKind::NotFound, "theme.toml").into();
        assert!(matches!(err, ZcalcError::Io(_)));
        assert_eq!(err.to_string(), "IO error: theme.toml");
    }
}
