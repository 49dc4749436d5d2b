//! Call rights embedded in fixed cash flows.
//!
//! A [`CallRight`] lets the issuer redeem the remaining cash flows at par
//! (plus accrued interest) on any of its exercise dates. Pricing parametrizes
//! an [`LgmModel`] from the right's calibration basket or from a configured
//! Hull-White volatility, then uses the European closed form for a single
//! live exercise date and backward induction for several.

use lgmkit_cashflows::CashFlows;
use lgmkit_core::{time_from, Date, MIN_TIME};
use lgmkit_curves::{VolSurface, YieldCurve};
use log::debug;

use crate::error::{ModelError, ModelResult};
use crate::lgm::{DiscountSpreads, LgmModel};
use crate::swaption::BasketSwaption;

/// Market inputs of one valuation.
#[derive(Clone, Copy)]
pub struct MarketData<'a> {
    /// Valuation date the cash-flow times are measured from.
    pub valuation: Date,
    /// Discount curve.
    pub disc_curve: &'a dyn YieldCurve,
    /// Projection curve of the basket's floating legs.
    pub fwd_curve: &'a dyn YieldCurve,
    /// Swaption volatility surface.
    pub surface: &'a dyn VolSurface,
    /// Optional credit or funding spread curve.
    pub spread_curve: Option<&'a dyn YieldCurve>,
}

impl<'a> MarketData<'a> {
    /// Market without a spread curve.
    pub fn new(
        valuation: Date,
        disc_curve: &'a dyn YieldCurve,
        fwd_curve: &'a dyn YieldCurve,
        surface: &'a dyn VolSurface,
    ) -> Self {
        Self {
            valuation,
            disc_curve,
            fwd_curve,
            surface,
            spread_curve: None,
        }
    }

    /// Sets the spread curve.
    #[must_use]
    pub fn with_spread_curve(mut self, curve: &'a dyn YieldCurve) -> Self {
        self.spread_curve = Some(curve);
        self
    }
}

/// How a call right was valued.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExerciseStyle {
    /// Every exercise date has passed.
    Expired,
    /// One live exercise date, closed form.
    European,
    /// Several live exercise dates, backward induction.
    Bermudan,
}

/// Result of pricing a call right.
#[derive(Debug, Clone, PartialEq)]
pub struct CallValuation {
    /// Pricing method used.
    pub style: ExerciseStyle,
    /// Value of the right to its holder.
    pub option_value: f64,
    /// Live exercise times.
    pub t_exercise: Vec<f64>,
    /// Model variance at each live exercise time.
    pub xi: Vec<f64>,
}

impl CallValuation {
    /// Value of the callable instrument to its investor, who is short the
    /// call.
    pub fn callable_value(&self, base_value: f64) -> f64 {
        base_value - self.option_value
    }
}

/// Issuer's right to redeem a cash-flow stream early.
#[derive(Debug, Clone, PartialEq)]
pub struct CallRight {
    cash_flows: CashFlows,
    exercise_dates: Vec<Date>,
    basket: Vec<BasketSwaption>,
    opportunity_spread: f64,
    residual_spread: f64,
}

impl CallRight {
    /// Right to call `cash_flows` on each of `exercise_dates`.
    ///
    /// Exercise dates must be strictly increasing.
    pub fn new(cash_flows: CashFlows, exercise_dates: Vec<Date>) -> ModelResult<Self> {
        if let Some(w) = exercise_dates.windows(2).find(|w| w[1] <= w[0]) {
            return Err(ModelError::invalid_parameter(format!(
                "exercise dates must increase, got {} after {}",
                w[1], w[0]
            )));
        }
        Ok(Self {
            cash_flows,
            exercise_dates,
            basket: Vec::new(),
            opportunity_spread: 0.0,
            residual_spread: 0.0,
        })
    }

    /// Sets the calibration basket, one swaption per exercise date.
    #[must_use]
    pub fn with_basket(mut self, basket: Vec<BasketSwaption>) -> Self {
        self.basket = basket;
        self
    }

    /// Calibrates to co-terminal receiver swaptions expiring on each
    /// exercise date, struck at `fixed_rate` less the opportunity spread.
    ///
    /// The fixed legs pay annually; `float_tenor` is in months.
    pub fn with_coterminal_basket(
        mut self,
        maturity: Date,
        notional: f64,
        fixed_rate: f64,
        float_tenor: i32,
    ) -> ModelResult<Self> {
        let strike = fixed_rate - self.opportunity_spread;
        self.basket = self
            .exercise_dates
            .iter()
            .filter(|&&d| d < maturity)
            .map(|&d| BasketSwaption::new(d, maturity, notional, strike, 12, float_tenor))
            .collect::<ModelResult<_>>()?;
        Ok(self)
    }

    /// Sets the spread forgone by the issuer after exercise.
    #[must_use]
    pub fn with_opportunity_spread(mut self, spread: f64) -> Self {
        self.opportunity_spread = spread;
        self
    }

    /// Sets the residual discount spread of the cash flows.
    #[must_use]
    pub fn with_residual_spread(mut self, spread: f64) -> Self {
        self.residual_spread = spread;
        self
    }

    /// Callable cash flows.
    pub fn cash_flows(&self) -> &CashFlows {
        &self.cash_flows
    }

    /// Exercise dates.
    pub fn exercise_dates(&self) -> &[Date] {
        &self.exercise_dates
    }

    /// Calibration basket.
    pub fn basket(&self) -> &[BasketSwaption] {
        &self.basket
    }

    /// Opportunity spread.
    pub fn opportunity_spread(&self) -> f64 {
        self.opportunity_spread
    }

    /// Residual discount spread.
    pub fn residual_spread(&self) -> f64 {
        self.residual_spread
    }

    /// Exercise times after `valuation`, beyond [`MIN_TIME`].
    pub fn live_exercise_times(&self, valuation: Date) -> Vec<f64> {
        self.exercise_dates
            .iter()
            .map(|&d| time_from(valuation, d))
            .filter(|&t| t > MIN_TIME)
            .collect()
    }
}

impl LgmModel {
    /// Parametrizes the model for `call` and prices it.
    ///
    /// With a configured Hull-White volatility the variances follow from it
    /// directly; otherwise the model is calibrated to the call's basket,
    /// which must yield one variance per live exercise date.
    pub fn price_call(
        &mut self,
        call: &CallRight,
        market: &MarketData<'_>,
    ) -> ModelResult<CallValuation> {
        let live = call.live_exercise_times(market.valuation);

        match self.config().hull_white_volatility {
            Some(vol) => self.set_times_and_hull_white_volatility(&live, &[vol])?,
            None => self.calibrate(
                &call.basket,
                market.valuation,
                market.disc_curve,
                market.fwd_curve,
                market.surface,
            )?,
        }
        if self.xi().len() != live.len() {
            return Err(ModelError::invalid_parameter(format!(
                "basket yields {} variances for {} live exercise dates",
                self.xi().len(),
                live.len()
            )));
        }

        let spreads = DiscountSpreads {
            spread_curve: market.spread_curve,
            residual_spread: call.residual_spread,
            opportunity_spread: call.opportunity_spread,
        };
        let (style, option_value) = match live.len() {
            0 => (ExerciseStyle::Expired, 0.0),
            1 => {
                let value = self.european_call(
                    &call.cash_flows,
                    live[0],
                    market.disc_curve,
                    self.xi()[0],
                    &spreads,
                )?;
                (ExerciseStyle::European, value)
            }
            _ => {
                let value = self.bermudan_call(
                    &call.cash_flows,
                    &live,
                    market.disc_curve,
                    self.xi(),
                    &spreads,
                )?;
                (ExerciseStyle::Bermudan, value)
            }
        };
        debug!("priced {style:?} call with {} exercise dates: {option_value:.6}", live.len());

        Ok(CallValuation {
            style,
            option_value,
            t_exercise: live,
            xi: self.xi().to_vec(),
        })
    }
}
