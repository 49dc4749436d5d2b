//! Linear Gauss-Markov one-factor model.
//!
//! The LGM model describes the reduced (numeraire-deflated) value of a zero
//! bond paying at `t` as
//!
//! ```text
//! P(t; x) = df(t) · exp(-h(t)·x - ½·h(t)²·ζ)
//! ```
//!
//! where the state `x` is normally distributed with variance `ζ` (written
//! `xi` throughout) at the exercise date. With mean reversion `a`:
//!
//! - `h(t) = (1 - e^{-a·t}) / a`, or `t` when `a = 0`
//! - `ξ(t) = ∫ σ(s)² / h'(s)² ds`, so a Hull-White volatility `σ` maps to
//!   `ξ = σ² · (e^{2·a·t} - 1) / (2·a)`
//!
//! The model is equivalent to Hull-White. It is parametrized only by the
//! vector of `xi` values at increasing exercise times, obtained either by
//! calibration to a swaption basket or from a Hull-White volatility.
//!
//! # Pricing
//!
//! - [`LgmModel::european_call`]: closed form via the break-even state at
//!   which the underlying is worth its strike
//! - [`LgmModel::bermudan_call`]: backward induction on a state grid with
//!   Gaussian transition densities

use std::cell::RefCell;

use lgmkit_cashflows::CashFlows;
use lgmkit_core::{time_from, Date, MIN_TIME};
use lgmkit_curves::{VolSurface, YieldCurve};
use lgmkit_math::distributions::cndf;
use lgmkit_math::solvers::{ridders, SolverConfig};
use log::{debug, warn};

use crate::config::{CalibrationPolicy, LgmConfig};
use crate::error::{ModelError, ModelResult};
use crate::swaption::CalibrationInstrument;

/// Below this variance an option is worth its intrinsic value.
const MIN_XI: f64 = 1e-10;

/// Variance increments below this carry values over unchanged.
const MIN_XI_STEP: f64 = 1e-12;

/// Lifecycle of an [`LgmModel`].
///
/// A priced model is represented by the returned
/// [`CallValuation`](crate::CallValuation); the model itself only tracks
/// whether its variance vector is known.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModelState {
    /// No exercise times or variances yet.
    Uninitialized,
    /// Variances known from calibration or a Hull-White volatility.
    Parametrized,
}

/// Discounting adjustments applied to the priced cash flows.
///
/// With a spread curve or a residual spread, cash flows are discounted at
/// `(1 + r_disc + r_spread + residual)^-t` instead of the discount curve's
/// own factors. The opportunity spread raises the exercise strike by the
/// spread accrued over the remaining life.
#[derive(Clone, Copy, Default)]
pub struct DiscountSpreads<'a> {
    /// Additional credit or funding curve.
    pub spread_curve: Option<&'a dyn YieldCurve>,
    /// Constant spread on top of both curves.
    pub residual_spread: f64,
    /// Spread forgone by the issuer after exercise.
    pub opportunity_spread: f64,
}

impl<'a> DiscountSpreads<'a> {
    /// Plain discounting, no opportunity spread.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the spread curve.
    #[must_use]
    pub fn with_spread_curve(mut self, curve: &'a dyn YieldCurve) -> Self {
        self.spread_curve = Some(curve);
        self
    }

    /// Sets the residual spread.
    #[must_use]
    pub fn with_residual_spread(mut self, spread: f64) -> Self {
        self.residual_spread = spread;
        self
    }

    /// Sets the opportunity spread.
    #[must_use]
    pub fn with_opportunity_spread(mut self, spread: f64) -> Self {
        self.opportunity_spread = spread;
        self
    }

    fn is_plain(&self) -> bool {
        self.spread_curve.is_none() && self.residual_spread == 0.0
    }
}

impl std::fmt::Debug for DiscountSpreads<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DiscountSpreads")
            .field("spread_curve", &self.spread_curve.is_some())
            .field("residual_spread", &self.residual_spread)
            .field("opportunity_spread", &self.opportunity_spread)
            .finish()
    }
}

/// Linear Gauss-Markov model.
///
/// # Example
///
/// ```rust
/// use lgmkit_models::LgmModel;
///
/// let mut model = LgmModel::new(0.03).unwrap();
/// model
///     .set_times_and_hull_white_volatility(&[1.0, 2.0, 3.0], &[0.01])
///     .unwrap();
/// let sigma = model.hull_white_volatility();
/// assert!(sigma.iter().all(|s| (s - 0.01).abs() < 1e-12));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct LgmModel {
    config: LgmConfig,
    t_ex: Vec<f64>,
    xi: Vec<f64>,
    state: ModelState,
}

impl LgmModel {
    /// Creates a model with mean reversion `a` and default settings.
    pub fn new(mean_reversion: f64) -> ModelResult<Self> {
        Self::from_config(LgmConfig {
            mean_reversion,
            ..LgmConfig::default()
        })
    }

    /// Creates a model from a validated configuration.
    pub fn from_config(config: LgmConfig) -> ModelResult<Self> {
        config.validate()?;
        Ok(Self {
            config,
            t_ex: Vec::new(),
            xi: Vec::new(),
            state: ModelState::Uninitialized,
        })
    }

    /// Mean reversion speed.
    pub fn mean_reversion(&self) -> f64 {
        self.config.mean_reversion
    }

    /// Model settings.
    pub fn config(&self) -> &LgmConfig {
        &self.config
    }

    /// Current lifecycle state.
    pub fn state(&self) -> ModelState {
        self.state
    }

    /// Exercise times of the variance vector.
    pub fn t_ex(&self) -> &[f64] {
        &self.t_ex
    }

    /// Integrated model variance at each exercise time.
    pub fn xi(&self) -> &[f64] {
        &self.xi
    }

    /// Model function `h(t)`.
    pub fn h(&self, t: f64) -> f64 {
        let a = self.config.mean_reversion;
        if a == 0.0 {
            t
        } else {
            -(-a * t).exp_m1() / a
        }
    }

    /// `∫₀ᵗ h'(s)⁻² ds`, the variance accumulated per unit of squared
    /// Hull-White volatility.
    pub fn variance_factor(&self, t: f64) -> f64 {
        let a = self.config.mean_reversion;
        if a == 0.0 {
            t
        } else {
            (2.0 * a * t).exp_m1() * 0.5 / a
        }
    }

    /// Parametrizes the model from a Hull-White volatility.
    ///
    /// `sigma` holds either one flat volatility or one value per interval
    /// ending at each of `times`. Exercise times must be positive and
    /// strictly increasing.
    pub fn set_times_and_hull_white_volatility(
        &mut self,
        times: &[f64],
        sigma: &[f64],
    ) -> ModelResult<()> {
        if sigma.len() != 1 && sigma.len() != times.len() {
            return Err(ModelError::invalid_parameter(format!(
                "expected 1 or {} volatilities, got {}",
                times.len(),
                sigma.len()
            )));
        }
        if let Some(s) = sigma.iter().find(|s| !s.is_finite() || **s < 0.0) {
            return Err(ModelError::invalid_parameter(format!(
                "Hull-White volatility must be finite and non-negative, got {s}"
            )));
        }
        let mut last = 0.0;
        for (i, &t) in times.iter().enumerate() {
            if !t.is_finite() || t <= last {
                return Err(ModelError::invalid_parameter(format!(
                    "exercise times must be positive and increasing, got {t} at index {i}"
                )));
            }
            last = t;
        }

        let xi = if sigma.len() == 1 {
            let s2 = sigma[0] * sigma[0];
            times.iter().map(|&t| s2 * self.variance_factor(t)).collect()
        } else {
            let mut xi = Vec::with_capacity(times.len());
            let (mut acc, mut last) = (0.0, 0.0);
            for (&t, &s) in times.iter().zip(sigma) {
                acc += s * s * (self.variance_factor(t) - self.variance_factor(last));
                xi.push(acc);
                last = t;
            }
            xi
        };

        self.t_ex = times.to_vec();
        self.xi = xi;
        self.state = ModelState::Parametrized;
        Ok(())
    }

    /// Hull-White volatility per interval implied by the variance vector.
    pub fn hull_white_volatility(&self) -> Vec<f64> {
        let mut sigma = Vec::with_capacity(self.t_ex.len());
        let (mut xi_last, mut t_last) = (0.0, 0.0);
        for (&t, &xi) in self.t_ex.iter().zip(&self.xi) {
            let dvf = self.variance_factor(t) - self.variance_factor(t_last);
            sigma.push(((xi - xi_last) / dvf).sqrt());
            xi_last = xi;
            t_last = t;
        }
        sigma
    }

    /// Calibrates the variance vector to a basket of instruments.
    ///
    /// Instruments expiring within [`MIN_TIME`] of `valuation` are dropped;
    /// the remaining ones must expire in increasing order. Each variance is
    /// bootstrapped so that the model's European price of the instrument's
    /// adjusted cash flow matches its market value.
    ///
    /// # Errors
    ///
    /// Under [`CalibrationPolicy::Strict`], a solver failure yields
    /// [`ModelError::Calibration`] and a decreasing variance yields
    /// [`ModelError::NonMonotonicVariance`].
    pub fn calibrate<B: CalibrationInstrument>(
        &mut self,
        basket: &[B],
        valuation: Date,
        disc_curve: &dyn YieldCurve,
        fwd_curve: &dyn YieldCurve,
        surface: &dyn VolSurface,
    ) -> ModelResult<()> {
        let policy = self.config.calibration.policy;
        let mut t_ex: Vec<f64> = Vec::with_capacity(basket.len());
        let mut xi_vec: Vec<f64> = Vec::with_capacity(basket.len());

        for instrument in basket {
            let tte = time_from(valuation, instrument.expiry());
            if tte <= MIN_TIME {
                debug!("calibration: skipping instrument expiring at t = {tte:.6}");
                continue;
            }
            let index = t_ex.len();
            if let Some(&prev) = t_ex.last() {
                if tte <= prev {
                    return Err(ModelError::invalid_parameter(format!(
                        "basket expiries must increase, got {tte:.6} after {prev:.6}"
                    )));
                }
            }

            let cf = instrument.adjusted_cash_flows(valuation, disc_curve, fwd_curve)?;
            let no_spreads = DiscountSpreads::default();
            let dfs = discount_factors(&cf, tte, disc_curve, &no_spreads)?;
            let df_ex = dfs[dfs.len() - 1];

            let denominator: f64 = cf
                .t_pmt()
                .iter()
                .zip(cf.pmt_total())
                .zip(&dfs)
                .map(|((&t, &amount), &df)| amount * df * self.h(t))
                .sum();

            let quote = instrument.market_value(valuation, disc_curve, fwd_curve, surface)?;
            let annuity = instrument.annuity(valuation, disc_curve)?;
            let mut xi = (quote.std_dev * annuity / denominator).powi(2);
            if !xi.is_finite() {
                xi = 0.0;
            }

            let min_raw = self
                .underlying(&cf, tte, &dfs, 0.0)
                .map_or(0.0, |u| u.value(0.0, 0.0));
            let max_value = min_raw + instrument.notional() * df_ex;
            let min_value = min_raw.max(0.0);
            let accuracy = quote.value * 1e-7 + 1e-7;
            let target = quote.value.min(max_value);

            if quote.value <= min_value + accuracy || xi == 0.0 {
                xi = 0.0;
            } else {
                let failure: RefCell<Option<ModelError>> = RefCell::new(None);
                let objective = |xi: f64| {
                    match self.european_with_dfs(&cf, tte, disc_curve, xi, &no_spreads, &dfs) {
                        Ok(v) => v - target,
                        Err(e) => {
                            failure.borrow_mut().get_or_insert(e);
                            f64::NAN
                        }
                    }
                };

                let mut approx = objective(xi);
                let mut doublings = self.config.calibration.max_doublings;
                while approx < 0.0 && doublings > 0 {
                    doublings -= 1;
                    xi *= 2.0;
                    approx = objective(xi);
                }

                let solver = SolverConfig::new(accuracy, self.config.calibration.max_iterations);
                let solved = ridders(&objective, 0.0, xi, &solver);
                if let Some(e) = failure.into_inner() {
                    return Err(e);
                }
                match solved {
                    Ok(result) => xi = result.root,
                    Err(source) => match policy {
                        CalibrationPolicy::Strict => {
                            return Err(ModelError::Calibration { index, source });
                        }
                        CalibrationPolicy::Lenient => {
                            warn!("calibration of instrument {index} failed ({source}), using fallback");
                            if (target - min_value).abs() < approx.abs() {
                                xi = 0.0;
                            }
                        }
                    },
                }
            }

            if let Some(&prev) = xi_vec.last() {
                if prev > xi {
                    match policy {
                        CalibrationPolicy::Strict => {
                            return Err(ModelError::NonMonotonicVariance {
                                index,
                                prev,
                                current: xi,
                            });
                        }
                        CalibrationPolicy::Lenient => {
                            warn!("calibrated variance decreases at instrument {index}, keeping {prev:.6e}");
                            xi = prev;
                        }
                    }
                }
            }

            debug!("calibrated xi[{index}] = {xi:.6e} at t = {tte:.4}");
            t_ex.push(tte);
            xi_vec.push(xi);
        }

        self.t_ex = t_ex;
        self.xi = xi_vec;
        self.state = ModelState::Parametrized;
        Ok(())
    }

    /// Value of the right to receive the cash flows after `t_exercise` in
    /// exchange for the outstanding principal at `t_exercise`.
    ///
    /// The strike includes interest accrued since the previous payment when
    /// the cash flows carry an interest column, plus the opportunity-spread
    /// adjustment. Returns 0 for expired exercise dates and when no payment
    /// follows the exercise date.
    pub fn european_call(
        &self,
        cash_flows: &CashFlows,
        t_exercise: f64,
        disc_curve: &dyn YieldCurve,
        xi: f64,
        spreads: &DiscountSpreads<'_>,
    ) -> ModelResult<f64> {
        if t_exercise < 0.0 {
            return Ok(0.0);
        }
        let dfs = discount_factors(cash_flows, t_exercise, disc_curve, spreads)?;
        self.european_with_dfs(cash_flows, t_exercise, disc_curve, xi, spreads, &dfs)
    }

    fn european_with_dfs(
        &self,
        cash_flows: &CashFlows,
        t_exercise: f64,
        disc_curve: &dyn YieldCurve,
        xi: f64,
        spreads: &DiscountSpreads<'_>,
        dfs: &[f64],
    ) -> ModelResult<f64> {
        if t_exercise < 0.0 {
            return Ok(0.0);
        }
        let opportunity_spread = spreads.opportunity_spread;
        let Some(underlying) = self.underlying(cash_flows, t_exercise, dfs, opportunity_spread) else {
            return Ok(0.0);
        };
        if t_exercise < MIN_TIME || xi < MIN_XI {
            return Ok(underlying.value(0.0, 0.0).max(0.0));
        }

        let range = f64::from(self.config.grid.std_dev_range);
        let mut std_dev = xi.sqrt();
        let dh = self.h(t_exercise + 1.0 / 365.0) - self.h(t_exercise);

        // Beyond this width every quantile lies outside ±10 and the normal
        // probabilities are exhausted.
        let break_even = if std_dev > 20.0 / dh {
            std_dev = 20.0 / dh;
            -10.0 * std_dev
        } else {
            let payoff = |x: f64| underlying.value(xi, x);
            let (lower, upper) = if payoff(0.0) >= 0.0 {
                if payoff(range * std_dev) > 0.0 {
                    return Ok(underlying.value(0.0, 0.0));
                }
                (0.0, range * std_dev)
            } else {
                if payoff(-range * std_dev) < 0.0 {
                    return Ok(0.0);
                }
                (-range * std_dev, 0.0)
            };
            match ridders(payoff, upper, lower, &self.config.break_even_solver()) {
                Ok(result) => result.root,
                Err(e) => {
                    debug!("break-even search failed at t = {t_exercise:.4} ({e}), integrating numerically");
                    return self.bermudan_call(
                        cash_flows,
                        &[t_exercise],
                        disc_curve,
                        &[xi],
                        spreads,
                    );
                }
            }
        };

        let scaled = break_even / std_dev;
        Ok(underlying
            .legs
            .iter()
            .map(|&(amount, h)| amount * cndf(scaled + h * std_dev))
            .sum())
    }

    /// Value of a right exercisable on each of `t_exercise` (increasing),
    /// with model variances `xi`.
    ///
    /// Works backwards through the exercise dates on a grid of
    /// `2·range·resolution + 1` states spanning `±range` standard deviations.
    /// At each date the node value is the maximum of exercise value, hold
    /// value and zero, with a correction for the kink where exercise and
    /// hold cross between two nodes.
    pub fn bermudan_call(
        &self,
        cash_flows: &CashFlows,
        t_exercise: &[f64],
        disc_curve: &dyn YieldCurve,
        xi: &[f64],
        spreads: &DiscountSpreads<'_>,
    ) -> ModelResult<f64> {
        if t_exercise.len() != xi.len() {
            return Err(ModelError::invalid_parameter(format!(
                "{} exercise times but {} variances",
                t_exercise.len(),
                xi.len()
            )));
        }
        let Some(&t_last) = t_exercise.last() else {
            return Ok(0.0);
        };
        if t_last < 0.0 {
            return Ok(0.0);
        }
        if t_last < MIN_TIME {
            return self.european_call(cash_flows, t_last, disc_curve, 0.0, spreads);
        }

        let grid = Grid {
            range: f64::from(self.config.grid.std_dev_range),
            resolution: f64::from(self.config.grid.resolution),
            n: self.config.grid.size(),
        };
        let mut value = vec![0.0; grid.n];
        let mut hold = vec![0.0; grid.n];
        let mut next: Option<(Vec<f64>, f64, f64)> = None;

        for (&t, &xi_t) in t_exercise.iter().zip(xi).rev() {
            let std_dev = xi_t.sqrt();
            let ds = std_dev / grid.resolution;
            let state: Vec<f64> = (0..grid.n)
                .map(|i| -grid.range * std_dev + i as f64 * ds)
                .collect();

            let dfs = discount_factors(cash_flows, t, disc_curve, spreads)?;
            let payoff = match self.underlying(cash_flows, t, &dfs, spreads.opportunity_spread) {
                Some(u) => u.values(xi_t, &state),
                None => vec![0.0; grid.n],
            };

            match &next {
                Some((state_last, xi_last, ds_last)) => {
                    for (j, h) in hold.iter_mut().enumerate() {
                        *h = grid.integrate(
                            &value, j, state[j], xi_t, state_last, *xi_last, *ds_last,
                        );
                    }
                }
                None => hold.fill(0.0),
            }

            update_value(&mut value, &payoff, &hold);
            next = Some((state, xi_t, ds));
        }

        let Some((state_last, xi_last, ds_last)) = next else {
            return Ok(0.0);
        };
        Ok(grid.integrate(&value, 0, 0.0, 0.0, &state_last, xi_last, ds_last))
    }

    /// Terms of the reduced value of exercising at `t_exercise`, or `None`
    /// if no payment follows.
    fn underlying(
        &self,
        cash_flows: &CashFlows,
        t_exercise: f64,
        dfs: &[f64],
        opportunity_spread: f64,
    ) -> Option<Underlying> {
        let times = cash_flows.t_pmt();
        let amounts = cash_flows.pmt_total();
        let i = cash_flows.first_after(t_exercise);
        if i >= times.len() {
            return None;
        }

        let accrued = match cash_flows.pmt_interest() {
            Some(interest) if i > 0 => {
                interest[i] * (t_exercise - times[i - 1]) / (times[i] - times[i - 1])
            }
            _ => 0.0,
        };
        let sadj = strike_adjustment(cash_flows, t_exercise, dfs, opportunity_spread);
        let df_ex = dfs[dfs.len() - 1];

        let mut legs = Vec::with_capacity(times.len() - i + 1);
        legs.push((
            -(cash_flows.current_principal()[i] + accrued + sadj) * df_ex,
            self.h(t_exercise),
        ));
        for k in i..times.len() {
            legs.push((amounts[k] * dfs[k], self.h(times[k])));
        }
        Some(Underlying { legs })
    }
}

/// Reduced value of an exercise as a sum of `amount · exp(-h·x - ½h²ξ)`.
struct Underlying {
    /// `(discounted amount, h(t))`, the strike leg first.
    legs: Vec<(f64, f64)>,
}

impl Underlying {
    fn value(&self, xi: f64, x: f64) -> f64 {
        self.legs
            .iter()
            .filter(|(amount, _)| *amount != 0.0)
            .map(|&(amount, h)| amount * (-h * x - 0.5 * h * h * xi).exp())
            .sum()
    }

    fn values(&self, xi: f64, states: &[f64]) -> Vec<f64> {
        states.iter().map(|&x| self.value(xi, x)).collect()
    }
}

/// Dimensions of the Bermudan state grid.
struct Grid {
    range: f64,
    resolution: f64,
    n: usize,
}

impl Grid {
    /// Expected value of `value` (on `state_last` with variance `xi_last`)
    /// conditional on state `x` at variance `xi`.
    #[allow(clippy::too_many_arguments)]
    fn integrate(
        &self,
        value: &[f64],
        j: usize,
        x: f64,
        xi: f64,
        state_last: &[f64],
        xi_last: f64,
        ds_last: f64,
    ) -> f64 {
        if xi_last - xi < MIN_XI_STEP {
            return value[j];
        }
        let norm = 1.0 / (xi_last - xi).sqrt();
        let increment = ds_last * norm;
        let mut q = (state_last[0] - x + 0.5 * ds_last) * norm;
        let mut i = 0;
        while q < -self.range && i < self.n {
            q += increment;
            i += 1;
        }
        let (mut acc, mut p_lo) = (0.0, 0.0);
        while q < self.range && i < self.n {
            let p_hi = cndf(q);
            acc += value[i] * (p_hi - p_lo);
            p_lo = p_hi;
            q += increment;
            i += 1;
        }
        acc
    }
}

/// Sets `value` to `max(hold, payoff, 0)` and smooths the first node pair
/// where `payoff - hold` changes sign.
fn update_value(value: &mut [f64], payoff: &[f64], hold: &[f64]) {
    let mut crossing = None;
    for i in 0..value.len() {
        value[i] = hold[i].max(payoff[i]).max(0.0);
        if crossing.is_none()
            && i > 0
            && (payoff[i] - hold[i]) * (payoff[i - 1] - hold[i - 1]) < 0.0
        {
            crossing = Some(i);
        }
    }
    let Some(i) = crossing else {
        return;
    };
    let (max_0, max_1) = (value[i - 1], value[i]);
    let min_0 = payoff[i - 1].min(hold[i - 1]);
    let min_1 = payoff[i].min(hold[i]);
    let denominator = max_1 - min_1 + max_0 - min_0;
    if denominator <= 0.0 {
        return;
    }
    let cross = (max_0 - min_0) / denominator;
    let err = 0.25 * (cross * (max_1 - min_1) + (1.0 - cross) * (max_0 - min_0));
    value[i] -= cross * err;
    value[i - 1] -= (1.0 - cross) * err;
}

/// Discount factors of every payment, followed by the factor at
/// `t_exercise`. Past payments get 0.
fn discount_factors(
    cash_flows: &CashFlows,
    t_exercise: f64,
    disc_curve: &dyn YieldCurve,
    spreads: &DiscountSpreads<'_>,
) -> ModelResult<Vec<f64>> {
    let plain = spreads.is_plain();
    let df = |t: f64| -> ModelResult<f64> {
        if plain {
            return Ok(disc_curve.get_df(t)?);
        }
        let mut rate = disc_curve.get_rate(t)? + spreads.residual_spread;
        if let Some(spread_curve) = spreads.spread_curve {
            rate += spread_curve.get_rate(t)?;
        }
        Ok((1.0 + rate).powf(-t))
    };

    let mut dfs = Vec::with_capacity(cash_flows.len() + 1);
    for &t in cash_flows.t_pmt() {
        dfs.push(if t > 0.0 { df(t)? } else { 0.0 });
    }
    dfs.push(df(t_exercise)?);
    Ok(dfs)
}

/// Present value at `t_exercise` of the opportunity spread on the
/// principal outstanding after exercise.
fn strike_adjustment(
    cash_flows: &CashFlows,
    t_exercise: f64,
    dfs: &[f64],
    opportunity_spread: f64,
) -> f64 {
    if opportunity_spread == 0.0 {
        return 0.0;
    }
    let times = cash_flows.t_pmt();
    let principal = cash_flows.current_principal();
    let mut adjustment = 0.0;
    for k in cash_flows.first_after(t_exercise)..times.len() {
        let start = if k == 0 {
            t_exercise
        } else {
            times[k - 1].max(t_exercise)
        };
        adjustment += principal[k] * dfs[k] * opportunity_spread * (times[k] - start);
    }
    adjustment / dfs[dfs.len() - 1]
}
