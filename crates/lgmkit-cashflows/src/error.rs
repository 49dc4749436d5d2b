//! Error types for schedule and cash-flow operations.

use lgmkit_core::CoreError;
use lgmkit_curves::CurveError;
use lgmkit_math::MathError;
use thiserror::Error;

/// A specialized Result type for cash-flow operations.
pub type CashFlowResult<T> = Result<T, CashFlowError>;

/// Errors raised while generating schedules, legs and cash-flow tables.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CashFlowError {
    /// Schedule inputs are inconsistent.
    #[error("Invalid schedule: {reason}")]
    InvalidSchedule {
        /// Description of the problem.
        reason: String,
    },

    /// A date needed to anchor the schedule is missing.
    #[error("Missing date: {what}")]
    MissingDate {
        /// Which date is missing.
        what: &'static str,
    },

    /// Tenor is negative.
    #[error("Tenor must be a non-negative number of months, got {tenor}")]
    InvalidTenor {
        /// Offending tenor.
        tenor: i32,
    },

    /// Cash-flow table is malformed.
    #[error("Invalid cash flows: {reason}")]
    InvalidCashFlows {
        /// Description of the problem.
        reason: String,
    },

    /// Date arithmetic failed.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Curve lookup failed.
    #[error(transparent)]
    Curve(#[from] CurveError),

    /// Root search failed.
    #[error(transparent)]
    Math(#[from] MathError),
}

impl CashFlowError {
    /// Creates an invalid schedule error.
    #[must_use]
    pub fn invalid_schedule(reason: impl Into<String>) -> Self {
        Self::InvalidSchedule {
            reason: reason.into(),
        }
    }

    /// Creates an invalid cash-flow error.
    #[must_use]
    pub fn invalid_cash_flows(reason: impl Into<String>) -> Self {
        Self::InvalidCashFlows {
            reason: reason.into(),
        }
    }
}
