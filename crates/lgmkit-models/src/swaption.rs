//! Calibration instruments.
//!
//! The LGM model calibrates to a basket of European swaptions, one per
//! exercise date. Each instrument supplies its market value under the
//! Bachelier model and a single-curve cash flow that the LGM closed form can
//! reprice.

use lgmkit_cashflows::{CashFlows, FixedLeg, FloatLeg, Schedule, ScheduleConfig};
use lgmkit_core::{time_from, Date, MIN_TIME};
use lgmkit_curves::{VolSurface, YieldCurve};

use crate::bachelier::BachelierModel;
use crate::error::{ModelError, ModelResult};

/// Market value of a calibration instrument together with its inputs.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwaptionQuote {
    /// Option premium.
    pub value: f64,
    /// Fair swap rate of the underlying.
    pub fair_rate: f64,
    /// Normal volatility read from the surface.
    pub vol: f64,
    /// Terminal standard deviation `vol·√t_expiry`.
    pub std_dev: f64,
}

impl SwaptionQuote {
    fn zero() -> Self {
        Self {
            value: 0.0,
            fair_rate: 0.0,
            vol: 0.0,
            std_dev: 0.0,
        }
    }
}

/// An instrument the LGM model can be calibrated to.
pub trait CalibrationInstrument: Send + Sync {
    /// Exercise date.
    fn expiry(&self) -> Date;

    /// Notional of the underlying swap.
    fn notional(&self) -> f64;

    /// Value of one unit of fixed rate on the underlying swap.
    fn annuity(&self, valuation: Date, disc_curve: &dyn YieldCurve) -> ModelResult<f64>;

    /// Market value off the volatility surface.
    fn market_value(
        &self,
        valuation: Date,
        disc_curve: &dyn YieldCurve,
        fwd_curve: &dyn YieldCurve,
        surface: &dyn VolSurface,
    ) -> ModelResult<SwaptionQuote>;

    /// Fixed-leg cash flow with the basis between `fwd_curve` and
    /// `disc_curve` moved into the fixed rate, so that discounting on
    /// `disc_curve` alone reproduces the multi-curve swap value.
    fn adjusted_cash_flows(
        &self,
        valuation: Date,
        disc_curve: &dyn YieldCurve,
        fwd_curve: &dyn YieldCurve,
    ) -> ModelResult<CashFlows>;
}

/// European swaption into a fixed-against-floating swap starting at expiry.
///
/// A positive notional receives fixed, a negative one pays fixed.
#[derive(Debug, Clone, PartialEq)]
pub struct BasketSwaption {
    expiry: Date,
    maturity: Date,
    fixed_leg: FixedLeg,
    float_leg: FloatLeg,
}

impl BasketSwaption {
    /// Standard swaption with unadjusted schedules rolled back from
    /// `maturity`.
    ///
    /// `fixed_tenor` and `float_tenor` are in months.
    pub fn new(
        expiry: Date,
        maturity: Date,
        notional: f64,
        fixed_rate: f64,
        fixed_tenor: i32,
        float_tenor: i32,
    ) -> ModelResult<Self> {
        let schedule = |tenor: i32| {
            let config = ScheduleConfig::new(maturity, tenor).with_effective_date(expiry);
            Schedule::generate(&config, |d| d)
        };
        let fixed_leg =
            FixedLeg::new(schedule(fixed_tenor)?, notional, fixed_rate).with_notional_exchange(false);
        let float_leg =
            FloatLeg::new(schedule(float_tenor)?, -notional, 0.0).with_notional_exchange(false);
        Self::from_legs(expiry, maturity, fixed_leg, float_leg)
    }

    /// Swaption on prebuilt legs.
    ///
    /// The legs should carry opposite notionals and no notional exchange.
    pub fn from_legs(
        expiry: Date,
        maturity: Date,
        fixed_leg: FixedLeg,
        float_leg: FloatLeg,
    ) -> ModelResult<Self> {
        if maturity <= expiry {
            return Err(ModelError::invalid_parameter(format!(
                "swaption maturity {maturity} must follow expiry {expiry}"
            )));
        }
        Ok(Self {
            expiry,
            maturity,
            fixed_leg,
            float_leg,
        })
    }

    /// Maturity of the underlying swap.
    pub fn maturity(&self) -> Date {
        self.maturity
    }

    /// Strike of the swaption.
    pub fn fixed_rate(&self) -> f64 {
        self.fixed_leg.fixed_rate()
    }

    /// Fixed leg of the underlying.
    pub fn fixed_leg(&self) -> &FixedLeg {
        &self.fixed_leg
    }

    /// Floating leg of the underlying.
    pub fn float_leg(&self) -> &FloatLeg {
        &self.float_leg
    }

    /// Fixed rate at which the underlying swap is worth zero.
    pub fn fair_rate(
        &self,
        valuation: Date,
        disc_curve: &dyn YieldCurve,
        fwd_curve: &dyn YieldCurve,
    ) -> ModelResult<f64> {
        let annuity = self.fixed_leg.annuity(valuation, disc_curve)?;
        if annuity == 0.0 {
            return Ok(0.0);
        }
        let pv_float = self.float_leg.present_value(valuation, disc_curve, fwd_curve)?;
        Ok(-pv_float / annuity)
    }
}

impl CalibrationInstrument for BasketSwaption {
    fn expiry(&self) -> Date {
        self.expiry
    }

    fn notional(&self) -> f64 {
        self.fixed_leg.notional()
    }

    fn annuity(&self, valuation: Date, disc_curve: &dyn YieldCurve) -> ModelResult<f64> {
        Ok(self.fixed_leg.annuity(valuation, disc_curve)?)
    }

    fn market_value(
        &self,
        valuation: Date,
        disc_curve: &dyn YieldCurve,
        fwd_curve: &dyn YieldCurve,
        surface: &dyn VolSurface,
    ) -> ModelResult<SwaptionQuote> {
        let t_expiry = time_from(valuation, self.expiry);
        let t_term = time_from(valuation, self.maturity) - t_expiry;
        if t_term < MIN_TIME {
            return Ok(SwaptionQuote::zero());
        }

        let fair_rate = self.fair_rate(valuation, disc_curve, fwd_curve)?;
        let strike = self.fixed_rate();
        let vol = surface.get_rate(t_expiry, t_term, fair_rate, strike);
        let model = BachelierModel::new(t_expiry, vol);

        let annuity = self.annuity(valuation, disc_curve)?;
        let value = if annuity > 0.0 {
            model.put_price(fair_rate, strike) * annuity
        } else {
            model.call_price(fair_rate, strike) * -annuity
        };
        Ok(SwaptionQuote {
            value,
            fair_rate,
            vol,
            std_dev: model.std_dev(),
        })
    }

    fn adjusted_cash_flows(
        &self,
        valuation: Date,
        disc_curve: &dyn YieldCurve,
        fwd_curve: &dyn YieldCurve,
    ) -> ModelResult<CashFlows> {
        let notional = self.notional();
        let mut fixed_rate = self.fixed_rate();
        let annuity = self.annuity(valuation, disc_curve)?;
        if annuity != 0.0 {
            let single = self.float_leg.present_value(valuation, disc_curve, disc_curve)?;
            let multi = self.float_leg.present_value(valuation, disc_curve, fwd_curve)?;
            fixed_rate += (multi - single) / annuity;
        }

        let adjusted = FixedLeg::new(self.fixed_leg.schedule().clone(), notional, fixed_rate)
            .with_day_count(self.fixed_leg.day_count())
            .with_notional_exchange(true)
            .cash_flows(valuation)?;

        // Entering the swap at the start date pays the notional.
        let mut pmt_total = adjusted.pmt_total().to_vec();
        let mut current_principal = adjusted.current_principal().to_vec();
        let mut pmt_interest = adjusted.pmt_interest().map(<[f64]>::to_vec).unwrap_or_default();
        pmt_total[0] = -notional;
        current_principal[0] = 0.0;
        if let Some(first) = pmt_interest.first_mut() {
            *first = 0.0;
        }
        Ok(CashFlows::new(adjusted.t_pmt().to_vec(), pmt_total, current_principal)?
            .with_interest(pmt_interest)?)
    }
}
