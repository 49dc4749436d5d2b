//! Compounding conventions for zero rates.
//!
//! Zero rates on every curve are ACT/365 rates, either annually or
//! continuously compounded.
//!
//! # Example
//!
//! ```rust
//! use lgmkit_curves::Compounding;
//!
//! let df_continuous = Compounding::Continuous.discount_factor(0.05, 2.0);
//! let df_annual = Compounding::Annual.discount_factor(0.05, 2.0);
//! assert!(df_continuous < df_annual);
//! ```

use std::fmt;
use std::str::FromStr;

use lgmkit_core::{CoreError, MIN_TIME};
use serde::{Deserialize, Serialize};

/// Compounding convention of a zero rate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Compounding {
    /// `df = (1 + z)^-t`
    #[default]
    Annual,
    /// `df = exp(-z t)`
    Continuous,
}

impl Compounding {
    /// Discount factor for zero rate `zc` at time `t`.
    #[must_use]
    pub fn discount_factor(self, zc: f64, t: f64) -> f64 {
        match self {
            Self::Annual => (1.0 + zc).powf(-t),
            Self::Continuous => (-zc * t).exp(),
        }
    }

    /// Zero rate implied by discount factor `df` at time `t`.
    ///
    /// Returns 0 for `t` below [`MIN_TIME`].
    #[must_use]
    pub fn zero_rate(self, df: f64, t: f64) -> f64 {
        if t < MIN_TIME {
            return 0.0;
        }
        match self {
            Self::Annual => df.powf(-1.0 / t) - 1.0,
            Self::Continuous => -df.ln() / t,
        }
    }
}

impl fmt::Display for Compounding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Annual => write!(f, "annual"),
            Self::Continuous => write!(f, "continuous"),
        }
    }
}

impl FromStr for Compounding {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "a" | "annual" => Ok(Self::Annual),
            "c" | "continuous" => Ok(Self::Continuous),
            _ => Err(CoreError::unknown_convention("compounding", s)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_discount_factor() {
        assert_relative_eq!(Compounding::Annual.discount_factor(0.01, 5.0), 1.01_f64.powf(-5.0));
        assert_relative_eq!(
            Compounding::Continuous.discount_factor(0.05, 1.0),
            (-0.05_f64).exp()
        );
    }

    #[test]
    fn test_roundtrip() {
        for compounding in [Compounding::Annual, Compounding::Continuous] {
            let df = compounding.discount_factor(0.037, 7.5);
            assert_relative_eq!(compounding.zero_rate(df, 7.5), 0.037, epsilon = 1e-14);
        }
    }

    #[test]
    fn test_short_end_is_zero() {
        assert_eq!(Compounding::Annual.zero_rate(0.9999, 1.0 / 1000.0), 0.0);
    }

    #[test]
    fn test_parse() {
        assert_eq!("c".parse::<Compounding>().unwrap(), Compounding::Continuous);
        assert_eq!("".parse::<Compounding>().unwrap(), Compounding::Annual);
        assert!("semi".parse::<Compounding>().is_err());
    }
}
