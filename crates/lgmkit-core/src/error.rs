//! Error types for dates, periods and calendars.

use thiserror::Error;

/// A specialized Result type for core operations.
pub type CoreResult<T> = Result<T, CoreError>;

/// Errors raised by the calendar-side building blocks.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// Error in date calculations or invalid date.
    #[error("Invalid date: {message}")]
    InvalidDate {
        /// Description of the date error.
        message: String,
    },

    /// A period label such as `"6M"` could not be parsed.
    #[error("Invalid period string: {label}")]
    InvalidPeriod {
        /// The offending label.
        label: String,
    },

    /// Unknown convention or calendar name.
    #[error("Unknown {kind}: {name}")]
    UnknownConvention {
        /// What kind of convention was looked up.
        kind: &'static str,
        /// The name that did not match.
        name: String,
    },
}

impl CoreError {
    /// Creates an invalid date error.
    pub fn invalid_date(message: impl Into<String>) -> Self {
        Self::InvalidDate {
            message: message.into(),
        }
    }

    /// Creates an invalid period error.
    pub fn invalid_period(label: impl Into<String>) -> Self {
        Self::InvalidPeriod {
            label: label.into(),
        }
    }

    /// Creates an unknown convention error.
    pub fn unknown_convention(kind: &'static str, name: impl Into<String>) -> Self {
        Self::UnknownConvention {
            kind,
            name: name.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = CoreError::invalid_period("5Q");
        assert_eq!(err.to_string(), "Invalid period string: 5Q");

        let err = CoreError::unknown_convention("day count", "ACT/999");
        assert!(err.to_string().contains("ACT/999"));
    }
}
