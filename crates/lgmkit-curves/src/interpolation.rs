//! Interpolation laws for discount curves.
//!
//! A closed set of laws, chosen once at construction. Each law compiles
//! into a [`RateFunction`] over the curve's support points.

use std::fmt;
use std::str::FromStr;

use lgmkit_core::CoreError;
use lgmkit_math::interpolation::{
    BesselHermite, Interpolator, LinearInterpolator, LinearXyInterpolator,
};
use serde::{Deserialize, Serialize};

use crate::compounding::Compounding;
use crate::error::CurveResult;

/// Interpolation law between curve support points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InterpolationMode {
    /// Linear on discount factors. Always flat beyond the support range.
    #[default]
    LinearDf,
    /// Linear on zero rates.
    LinearZc,
    /// Linear on `t·z` (log-discount for continuous compounding). Always
    /// flat beyond the support range; all times must be positive.
    LinearRt,
    /// Bessel-Hermite cubic on zero rates.
    BesselHermite,
}

impl InterpolationMode {
    /// Whether the law forces flat zero-rate extrapolation at both ends.
    #[must_use]
    pub fn always_flat(self) -> bool {
        matches!(self, Self::LinearDf | Self::LinearRt)
    }
}

impl fmt::Display for InterpolationMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::LinearDf => "linear_df",
            Self::LinearZc => "linear_zc",
            Self::LinearRt => "linear_rt",
            Self::BesselHermite => "bessel",
        };
        write!(f, "{name}")
    }
}

impl FromStr for InterpolationMode {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "" | "linear" | "linear_df" => Ok(Self::LinearDf),
            "linear_zc" => Ok(Self::LinearZc),
            "linear_rt" => Ok(Self::LinearRt),
            "bessel" | "hermite" | "bessel_hermite" => Ok(Self::BesselHermite),
            _ => Err(CoreError::unknown_convention("interpolation", s)),
        }
    }
}

/// Compiled zero-rate function for one interpolation law.
#[derive(Debug, Clone)]
pub(crate) enum RateFunction {
    Df {
        dfs: LinearInterpolator,
        compounding: Compounding,
    },
    Zc(LinearInterpolator),
    Rt(LinearXyInterpolator),
    Hermite(BesselHermite),
}

impl RateFunction {
    pub(crate) fn new(
        mode: InterpolationMode,
        compounding: Compounding,
        times: &[f64],
        zcs: &[f64],
    ) -> CurveResult<Self> {
        let (times, zcs) = (times.to_vec(), zcs.to_vec());
        let function = match mode {
            InterpolationMode::LinearDf => {
                let dfs = times
                    .iter()
                    .zip(&zcs)
                    .map(|(&t, &z)| compounding.discount_factor(z, t))
                    .collect();
                Self::Df {
                    dfs: LinearInterpolator::new(times, dfs)?,
                    compounding,
                }
            }
            InterpolationMode::LinearZc => Self::Zc(LinearInterpolator::new(times, zcs)?),
            InterpolationMode::LinearRt => Self::Rt(LinearXyInterpolator::new(times, zcs)?),
            InterpolationMode::BesselHermite => Self::Hermite(BesselHermite::new(times, zcs)?),
        };
        Ok(function)
    }

    pub(crate) fn rate(&self, t: f64) -> CurveResult<f64> {
        let rate = match self {
            Self::Df { dfs, compounding } => compounding.zero_rate(dfs.interpolate(t)?, t),
            Self::Zc(interp) => interp.interpolate(t)?,
            Self::Rt(interp) => interp.interpolate(t)?,
            Self::Hermite(interp) => interp.interpolate(t)?,
        };
        Ok(rate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_parse_and_display() {
        for mode in [
            InterpolationMode::LinearDf,
            InterpolationMode::LinearZc,
            InterpolationMode::LinearRt,
            InterpolationMode::BesselHermite,
        ] {
            assert_eq!(mode.to_string().parse::<InterpolationMode>().unwrap(), mode);
        }
        assert!("cubic".parse::<InterpolationMode>().is_err());
    }

    #[test]
    fn test_linear_df_rate() {
        let f = RateFunction::new(
            InterpolationMode::LinearDf,
            Compounding::Annual,
            &[1.0, 3.0],
            &[0.01, 0.02],
        )
        .unwrap();
        let df1 = 1.01_f64.powf(-1.0);
        let df3 = 1.02_f64.powf(-3.0);
        let df2 = 0.5 * (df1 + df3);
        assert_relative_eq!(f.rate(2.0).unwrap(), df2.powf(-0.5) - 1.0, epsilon = 1e-14);
    }

    #[test]
    fn test_linear_rt_requires_positive_times() {
        assert!(RateFunction::new(
            InterpolationMode::LinearRt,
            Compounding::Continuous,
            &[0.0, 1.0],
            &[0.01, 0.02],
        )
        .is_err());
    }
}
