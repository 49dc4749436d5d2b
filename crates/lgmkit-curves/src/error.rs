//! Error types for curve and surface operations.

use lgmkit_core::CoreError;
use lgmkit_math::MathError;
use thiserror::Error;

/// A specialized Result type for curve operations.
pub type CurveResult<T> = Result<T, CurveError>;

/// Error types for curve and surface operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CurveError {
    /// No usable time axis (times, days, dates or labels) was supplied.
    #[error("Missing input: {what}")]
    MissingInput {
        /// What is missing.
        what: &'static str,
    },

    /// Parallel arrays have different lengths.
    #[error("Shape mismatch in {what}: expected {expected}, got {got}")]
    ShapeMismatch {
        /// Which array is inconsistent.
        what: &'static str,
        /// Expected length.
        expected: usize,
        /// Actual length.
        got: usize,
    },

    /// Time axis is not strictly increasing.
    #[error("Non-monotonic times at index {index}: {prev:.6} >= {current:.6}")]
    NonMonotonicTimes {
        /// Index where monotonicity violation occurred.
        index: usize,
        /// Previous value.
        prev: f64,
        /// Current value.
        current: f64,
    },

    /// Invalid value (NaN, Inf, or domain error).
    #[error("Invalid value: {reason}")]
    InvalidValue {
        /// Description of why value is invalid.
        reason: String,
    },

    /// Error from the interpolation layer.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Error parsing a date or period label.
    #[error(transparent)]
    Core(#[from] CoreError),
}

impl CurveError {
    /// Creates an invalid value error.
    #[must_use]
    pub fn invalid_value(reason: impl Into<String>) -> Self {
        Self::InvalidValue {
            reason: reason.into(),
        }
    }

    /// Creates a shape mismatch error.
    #[must_use]
    pub fn shape_mismatch(what: &'static str, expected: usize, got: usize) -> Self {
        Self::ShapeMismatch {
            what,
            expected,
            got,
        }
    }
}

/// Checks that `values` is finite and strictly increasing.
pub(crate) fn check_increasing(values: &[f64]) -> CurveResult<()> {
    if let Some(v) = values.iter().find(|v| !v.is_finite()) {
        return Err(CurveError::invalid_value(format!("non-finite grid value {v}")));
    }
    for (i, w) in values.windows(2).enumerate() {
        if w[1] <= w[0] {
            return Err(CurveError::NonMonotonicTimes {
                index: i + 1,
                prev: w[0],
                current: w[1],
            });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_increasing() {
        assert!(check_increasing(&[0.0, 1.0, 2.0]).is_ok());
        assert!(matches!(
            check_increasing(&[0.0, 2.0, 2.0]),
            Err(CurveError::NonMonotonicTimes { index: 2, .. })
        ));
        assert!(check_increasing(&[0.0, f64::NAN]).is_err());
    }

    #[test]
    fn test_error_display() {
        let err = CurveError::shape_mismatch("zcs", 3, 2);
        assert_eq!(err.to_string(), "Shape mismatch in zcs: expected 3, got 2");
    }
}
