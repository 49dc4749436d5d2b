//! Error types for model calibration and pricing.

use lgmkit_cashflows::CashFlowError;
use lgmkit_curves::CurveError;
use lgmkit_math::MathError;
use thiserror::Error;

/// A specialized Result type for model operations.
pub type ModelResult<T> = Result<T, ModelError>;

/// Errors raised by the Bachelier and LGM models.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ModelError {
    /// A model parameter or input vector is out of range.
    #[error("Invalid parameter: {reason}")]
    InvalidParameter {
        /// Description of the problem.
        reason: String,
    },

    /// Root-finding failed while bootstrapping a basket instrument.
    #[error("Calibration failed for basket instrument {index}: {source}")]
    Calibration {
        /// Position of the instrument among the live basket entries.
        index: usize,
        /// Underlying solver error.
        #[source]
        source: MathError,
    },

    /// Calibrated variance decreased between two exercise dates.
    #[error("Non-monotonic variance at index {index}: {prev:.6e} > {current:.6e}")]
    NonMonotonicVariance {
        /// Index where the violation occurred.
        index: usize,
        /// Variance at the previous exercise date.
        prev: f64,
        /// Variance at this exercise date.
        current: f64,
    },

    /// Configuration could not be read or is inconsistent.
    #[error("Configuration error: {reason}")]
    Config {
        /// Description of the problem.
        reason: String,
    },

    /// Error from a numerical routine.
    #[error(transparent)]
    Math(#[from] MathError),

    /// Error from a curve or surface lookup.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Error from schedule or cash-flow generation.
    #[error(transparent)]
    CashFlow(#[from] CashFlowError),
}

impl ModelError {
    /// Creates an invalid parameter error.
    #[must_use]
    pub fn invalid_parameter(reason: impl Into<String>) -> Self {
        Self::InvalidParameter {
            reason: reason.into(),
        }
    }

    /// Creates a configuration error.
    #[must_use]
    pub fn config(reason: impl Into<String>) -> Self {
        Self::Config {
            reason: reason.into(),
        }
    }
}
