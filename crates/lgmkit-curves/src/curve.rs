//! Interpolated discount curves.
//!
//! A [`Curve`] is an immutable table of `(time, zero rate)` support points
//! with an [`InterpolationMode`], a [`Compounding`] convention and a flat
//! extrapolation flag for each end. Below the first or above the last
//! support point the zero rate is held flat unless the flag for that end
//! is cleared, in which case the interpolation law is extended.
//!
//! # Example
//!
//! ```rust
//! use lgmkit_curves::prelude::*;
//!
//! let curve = Curve::builder()
//!     .labels(["1Y", "5Y", "10Y"])
//!     .zcs(vec![0.01, 0.015, 0.02])
//!     .interpolation(InterpolationMode::LinearZc)
//!     .build()
//!     .unwrap();
//!
//! assert!((curve.get_rate(3.0).unwrap() - 0.0125).abs() < 1e-12);
//! assert!((curve.get_rate(30.0).unwrap() - 0.02).abs() < 1e-12);
//! ```

use lgmkit_core::{time_from, Date, Period};

use crate::compounding::Compounding;
use crate::error::{check_increasing, CurveError, CurveResult};
use crate::interpolation::{InterpolationMode, RateFunction};
use crate::scenario::{CurveShift, ScenarioCurve};
use crate::traits::YieldCurve;

/// Discount curve over `(time, zero rate)` support points.
#[derive(Debug, Clone)]
pub struct Curve {
    times: Vec<f64>,
    zcs: Vec<f64>,
    compounding: Compounding,
    interpolation: InterpolationMode,
    short_end_flat: bool,
    long_end_flat: bool,
    rate_fn: RateFunction,
}

impl Curve {
    /// Starts a [`CurveBuilder`].
    #[must_use]
    pub fn builder() -> CurveBuilder {
        CurveBuilder::default()
    }

    /// Curve from times and annually compounded zero rates, linear on
    /// discount factors.
    pub fn from_zcs(times: Vec<f64>, zcs: Vec<f64>) -> CurveResult<Self> {
        Self::builder().times(times).zcs(zcs).build()
    }

    /// Curve from times and discount factors, linear on discount factors.
    pub fn from_dfs(times: Vec<f64>, dfs: Vec<f64>) -> CurveResult<Self> {
        Self::builder().times(times).dfs(dfs).build()
    }

    /// Flat curve at annually compounded rate `rate`.
    ///
    /// # Errors
    ///
    /// Fails if `rate <= -1` or is not finite.
    pub fn constant(rate: f64) -> CurveResult<Self> {
        if !rate.is_finite() || rate <= -1.0 {
            return Err(CurveError::invalid_value(format!(
                "constant curve rate must exceed -1, got {rate}"
            )));
        }
        Self::from_dfs(vec![1.0], vec![1.0 / (1.0 + rate)])
    }

    /// Support times.
    pub fn times(&self) -> &[f64] {
        &self.times
    }

    /// Zero rates at the support times.
    pub fn zcs(&self) -> &[f64] {
        &self.zcs
    }

    /// Discount factors at the support times.
    pub fn dfs(&self) -> Vec<f64> {
        self.times
            .iter()
            .zip(&self.zcs)
            .map(|(&t, &z)| self.compounding.discount_factor(z, t))
            .collect()
    }

    /// Interpolation law.
    pub fn interpolation(&self) -> InterpolationMode {
        self.interpolation
    }

    /// Whether the zero rate is held flat below the first support point.
    pub fn short_end_flat(&self) -> bool {
        self.short_end_flat
    }

    /// Whether the zero rate is held flat above the last support point.
    pub fn long_end_flat(&self) -> bool {
        self.long_end_flat
    }

    /// View of this curve under a scenario shift.
    #[must_use]
    pub fn with_shift<'a>(&'a self, shift: &'a CurveShift) -> ScenarioCurve<'a> {
        ScenarioCurve::new(self, Some(shift))
    }
}

impl YieldCurve for Curve {
    fn get_rate(&self, t: f64) -> CurveResult<f64> {
        let n = self.times.len();
        if t <= self.times[0] && self.short_end_flat {
            return Ok(self.zcs[0]);
        }
        if t >= self.times[n - 1] && self.long_end_flat {
            return Ok(self.zcs[n - 1]);
        }
        self.rate_fn.rate(t)
    }

    fn compounding(&self) -> Compounding {
        self.compounding
    }
}

/// Builder for [`Curve`].
///
/// The time axis is taken from the first of `times`, `days` (ACT/365),
/// `dates` (ACT/365 from the first date) or period `labels` that was set.
/// Values are zero rates if given, otherwise discount factors converted
/// with the curve's compounding.
#[derive(Debug, Clone)]
pub struct CurveBuilder {
    times: Option<Vec<f64>>,
    days: Option<Vec<f64>>,
    dates: Option<Vec<Date>>,
    labels: Option<Vec<String>>,
    zcs: Option<Vec<f64>>,
    dfs: Option<Vec<f64>>,
    compounding: Compounding,
    interpolation: InterpolationMode,
    short_end_flat: bool,
    long_end_flat: bool,
}

impl Default for CurveBuilder {
    fn default() -> Self {
        Self {
            times: None,
            days: None,
            dates: None,
            labels: None,
            zcs: None,
            dfs: None,
            compounding: Compounding::default(),
            interpolation: InterpolationMode::default(),
            short_end_flat: true,
            long_end_flat: true,
        }
    }
}

impl CurveBuilder {
    /// Support times in years.
    #[must_use]
    pub fn times(mut self, times: Vec<f64>) -> Self {
        self.times = Some(times);
        self
    }

    /// Support points as day counts (divided by 365).
    #[must_use]
    pub fn days(mut self, days: Vec<f64>) -> Self {
        self.days = Some(days);
        self
    }

    /// Support points as dates; times run from the first date.
    #[must_use]
    pub fn dates(mut self, dates: Vec<Date>) -> Self {
        self.dates = Some(dates);
        self
    }

    /// Support points as period labels such as `"6M"` or `"10Y"`.
    #[must_use]
    pub fn labels<I, S>(mut self, labels: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.labels = Some(labels.into_iter().map(Into::into).collect());
        self
    }

    /// Zero rates at the support points.
    #[must_use]
    pub fn zcs(mut self, zcs: Vec<f64>) -> Self {
        self.zcs = Some(zcs);
        self
    }

    /// Discount factors at the support points.
    #[must_use]
    pub fn dfs(mut self, dfs: Vec<f64>) -> Self {
        self.dfs = Some(dfs);
        self
    }

    /// Compounding convention.
    #[must_use]
    pub fn compounding(mut self, compounding: Compounding) -> Self {
        self.compounding = compounding;
        self
    }

    /// Interpolation law.
    #[must_use]
    pub fn interpolation(mut self, interpolation: InterpolationMode) -> Self {
        self.interpolation = interpolation;
        self
    }

    /// Flat zero-rate extrapolation below the first point (default true).
    #[must_use]
    pub fn short_end_flat(mut self, flat: bool) -> Self {
        self.short_end_flat = flat;
        self
    }

    /// Flat zero-rate extrapolation above the last point (default true).
    #[must_use]
    pub fn long_end_flat(mut self, flat: bool) -> Self {
        self.long_end_flat = flat;
        self
    }

    /// Validates the inputs and builds the curve.
    ///
    /// # Errors
    ///
    /// Fails on a missing time axis or values, mismatched lengths,
    /// non-increasing or negative times, non-finite values, non-positive
    /// discount factors and unparseable labels.
    pub fn build(self) -> CurveResult<Curve> {
        let times = self.resolve_times()?;
        if times.is_empty() {
            return Err(CurveError::MissingInput {
                what: "support points",
            });
        }
        check_increasing(&times)?;
        if times[0] < 0.0 {
            return Err(CurveError::invalid_value(format!(
                "curve times must be non-negative, got {}",
                times[0]
            )));
        }

        let zcs = match (self.zcs, self.dfs) {
            (Some(zcs), _) => {
                if zcs.len() != times.len() {
                    return Err(CurveError::shape_mismatch("zcs", times.len(), zcs.len()));
                }
                if zcs.iter().any(|z| !z.is_finite()) {
                    return Err(CurveError::invalid_value("zero rates must be finite"));
                }
                zcs
            }
            (None, Some(dfs)) => {
                if dfs.len() != times.len() {
                    return Err(CurveError::shape_mismatch("dfs", times.len(), dfs.len()));
                }
                if dfs.iter().any(|df| !df.is_finite() || *df <= 0.0) {
                    return Err(CurveError::invalid_value(
                        "discount factors must be positive and finite",
                    ));
                }
                times
                    .iter()
                    .zip(&dfs)
                    .map(|(&t, &df)| self.compounding.zero_rate(df, t))
                    .collect()
            }
            (None, None) => {
                return Err(CurveError::MissingInput {
                    what: "zero rates or discount factors",
                })
            }
        };

        let rate_fn = RateFunction::new(self.interpolation, self.compounding, &times, &zcs)?;
        let always_flat = self.interpolation.always_flat();

        Ok(Curve {
            times,
            zcs,
            compounding: self.compounding,
            interpolation: self.interpolation,
            short_end_flat: self.short_end_flat || always_flat,
            long_end_flat: self.long_end_flat || always_flat,
            rate_fn,
        })
    }

    fn resolve_times(&self) -> CurveResult<Vec<f64>> {
        if let Some(times) = &self.times {
            return Ok(times.clone());
        }
        if let Some(days) = &self.days {
            return Ok(days.iter().map(|d| d / 365.0).collect());
        }
        if let Some(dates) = &self.dates {
            let Some(&first) = dates.first() else {
                return Ok(Vec::new());
            };
            return Ok(dates.iter().map(|&d| time_from(first, d)).collect());
        }
        if let Some(labels) = &self.labels {
            return labels_to_times(labels);
        }
        Err(CurveError::MissingInput {
            what: "times, days, dates or labels",
        })
    }
}

/// Converts period labels to year fractions.
pub fn labels_to_times<S: AsRef<str>>(labels: &[S]) -> CurveResult<Vec<f64>> {
    labels
        .iter()
        .map(|label| Period::years_from_label(label.as_ref()).map_err(CurveError::from))
        .collect()
}

/// Curve whose zero rate at each point of the union of both time grids is
/// the sum of the two input rates there.
///
/// The result takes compounding, interpolation and extrapolation flags
/// from `c1`. Neither input is modified.
pub fn add_curves(c1: &Curve, c2: &Curve) -> CurveResult<Curve> {
    let mut times: Vec<f64> = c1.times.iter().chain(&c2.times).copied().collect();
    times.sort_by(f64::total_cmp);
    times.dedup();

    let zcs = times
        .iter()
        .map(|&t| Ok(c1.get_rate(t)? + c2.get_rate(t)?))
        .collect::<CurveResult<Vec<f64>>>()?;

    Curve::builder()
        .times(times)
        .zcs(zcs)
        .compounding(c1.compounding)
        .interpolation(c1.interpolation)
        .short_end_flat(c1.short_end_flat)
        .long_end_flat(c1.long_end_flat)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn linear_df(i: f64) -> f64 {
        (20.0 - i) / 19.0 + 0.5 * (i - 1.0) / 19.0
    }

    #[test]
    fn test_constant_curve() {
        let c = Curve::constant(0.03).unwrap();
        for t in [0.1, 1.0 / 365.0, 10.0, 20.0] {
            assert_relative_eq!(c.get_rate(t).unwrap(), 0.03, epsilon = 1e-12);
        }
        assert!(Curve::constant(-1.0).is_err());
    }

    #[test]
    fn test_flat_one_percent() {
        let c = Curve::from_zcs(vec![1.0], vec![0.01]).unwrap();
        assert_relative_eq!(c.get_rate(5.0).unwrap(), 0.01);
        assert_relative_eq!(c.get_df(5.0).unwrap(), 1.01_f64.powf(-5.0), epsilon = 1e-15);
    }

    #[test]
    fn test_now_is_exactly_one() {
        let c = Curve::constant(0.05).unwrap();
        assert_eq!(c.get_df(0.0).unwrap(), 1.0);
        assert_eq!(c.get_df(1.0 / 600.0).unwrap(), 1.0);
    }

    #[test]
    fn test_linear_on_discount_factors() {
        let c = Curve::from_dfs(vec![1.0, 20.0], vec![1.0, 0.5]).unwrap();
        for i in 1..=20 {
            let t = f64::from(i);
            assert_relative_eq!(c.get_df(t).unwrap(), linear_df(t), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_days_and_labels_fallback() {
        let base = Curve::from_dfs(vec![1.0, 20.0], vec![1.0, 0.5]).unwrap();
        let knots = [1.0, 7.0, 12.0, 15.5, 20.0];
        let dfs: Vec<f64> = knots.iter().map(|&t| base.get_df(t).unwrap()).collect();

        let by_days = Curve::builder()
            .days(knots.iter().map(|t| t * 365.0).collect())
            .dfs(dfs.clone())
            .build()
            .unwrap();
        let by_labels = Curve::builder()
            .labels(["1Y", "7Y", "12Y", "186M", "20Y"])
            .dfs(dfs)
            .build()
            .unwrap();

        for i in 1..=20 {
            let t = f64::from(i);
            assert_relative_eq!(by_days.get_df(t).unwrap(), linear_df(t), epsilon = 1e-10);
            assert_relative_eq!(by_labels.get_df(t).unwrap(), linear_df(t), epsilon = 1e-10);
        }
    }

    #[test]
    fn test_dates_fallback() {
        let dates = ["01.01.2000", "31.12.2000", "31.12.2001", "31.12.2002", "28.12.2012"]
            .iter()
            .map(|s| Date::parse(s).unwrap())
            .collect();
        let c = Curve::builder()
            .dates(dates)
            .dfs(vec![1.0, 0.9, 0.8, 0.7, 0.5])
            .build()
            .unwrap();

        assert_relative_eq!(c.get_df(0.5).unwrap(), 0.95, epsilon = 1e-10);
        assert_relative_eq!(c.get_df(1.5).unwrap(), 0.85, epsilon = 1e-10);
        assert_relative_eq!(c.get_df(2.5).unwrap(), 0.75, epsilon = 1e-10);
        assert_relative_eq!(c.get_df(8.0).unwrap(), 0.6, epsilon = 1e-10);
    }

    #[test]
    fn test_non_flat_ends_extend_law() {
        let c = Curve::builder()
            .times(vec![1.0, 2.0])
            .zcs(vec![0.01, 0.02])
            .interpolation(InterpolationMode::LinearZc)
            .short_end_flat(false)
            .long_end_flat(false)
            .build()
            .unwrap();
        assert_relative_eq!(c.get_rate(0.5).unwrap(), 0.005, epsilon = 1e-14);
        assert_relative_eq!(c.get_rate(3.0).unwrap(), 0.03, epsilon = 1e-14);
    }

    #[test]
    fn test_linear_df_ignores_flat_flags() {
        let c = Curve::builder()
            .times(vec![1.0, 2.0])
            .zcs(vec![0.01, 0.02])
            .long_end_flat(false)
            .build()
            .unwrap();
        assert!(c.long_end_flat());
        assert_relative_eq!(c.get_rate(5.0).unwrap(), 0.02);
    }

    #[test]
    fn test_forward_quantities() {
        let c = Curve::constant(0.02).unwrap();
        assert_relative_eq!(c.get_fwd_rate(2.0, 5.0).unwrap(), 0.02, epsilon = 1e-12);
        assert_relative_eq!(c.get_fwd_amount(1.0, 2.0).unwrap(), 0.02, epsilon = 1e-12);
        assert_eq!(c.get_fwd_amount(1.0, 1.0).unwrap(), 0.0);
    }

    #[test]
    fn test_add_curves() {
        let c1 = Curve::builder()
            .labels(["0Y", "1Y", "2Y", "3Y", "13Y"])
            .zcs(vec![0.01, 0.009, 0.008, 0.008, 0.008])
            .build()
            .unwrap();
        let c2 = Curve::builder()
            .labels(["5Y", "10Y"])
            .zcs(vec![0.02, 0.02])
            .build()
            .unwrap();

        let sum = add_curves(&c1, &c2).unwrap();
        assert_eq!(sum.times().len(), 7);
        assert_relative_eq!(sum.get_rate(1.0).unwrap(), 0.029, epsilon = 1e-12);
        assert_relative_eq!(sum.get_rate(13.0).unwrap(), 0.028, epsilon = 1e-12);
        // inputs are untouched
        assert_eq!(c2.times(), &[5.0, 10.0]);
    }

    #[test]
    fn test_validation() {
        assert!(Curve::from_zcs(vec![1.0, 1.0], vec![0.01, 0.02]).is_err());
        assert!(Curve::from_zcs(vec![1.0, 2.0], vec![0.01]).is_err());
        assert!(Curve::from_zcs(vec![1.0], vec![f64::NAN]).is_err());
        assert!(Curve::from_dfs(vec![1.0], vec![0.0]).is_err());
        assert!(Curve::from_zcs(vec![-1.0, 1.0], vec![0.01, 0.01]).is_err());
        assert!(matches!(
            Curve::builder().zcs(vec![0.01]).build(),
            Err(CurveError::MissingInput { .. })
        ));
        assert!(matches!(
            Curve::builder().labels(["1X"]).zcs(vec![0.01]).build(),
            Err(CurveError::Core(_))
        ));
    }
}
