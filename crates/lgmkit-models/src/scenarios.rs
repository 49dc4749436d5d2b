//! Batch pricing across market scenarios.
//!
//! Every scenario compiles its rules against the shared base market and
//! prices the call with a fresh model, so scenarios run in parallel on the
//! rayon pool without sharing mutable state. A failing scenario does not
//! affect the others.

use lgmkit_core::Date;
use lgmkit_curves::{
    Curve, CurveShift, ScenarioCurve, ScenarioRule, ScenarioSurface, Surface, SurfaceShift,
};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::call::{CallRight, MarketData};
use crate::config::LgmConfig;
use crate::error::ModelResult;
use crate::lgm::LgmModel;

/// Named set of shifts applied to the base market.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Scenario {
    /// Scenario identifier.
    pub name: String,
    /// Shift of the discount and forward curves.
    #[serde(default)]
    pub curve_rule: Option<ScenarioRule>,
    /// Shift of the volatility surface.
    #[serde(default)]
    pub surface_rule: Option<ScenarioRule>,
}

impl Scenario {
    /// Unshifted scenario.
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    /// Sets the curve rule.
    #[must_use]
    pub fn with_curve_rule(mut self, rule: ScenarioRule) -> Self {
        self.curve_rule = Some(rule);
        self
    }

    /// Sets the surface rule.
    #[must_use]
    pub fn with_surface_rule(mut self, rule: ScenarioRule) -> Self {
        self.surface_rule = Some(rule);
        self
    }
}

/// Unshifted market shared by all scenarios.
#[derive(Debug, Clone, Copy)]
pub struct BaseMarket<'a> {
    /// Valuation date.
    pub valuation: Date,
    /// Discount curve.
    pub disc_curve: &'a Curve,
    /// Forward curve.
    pub fwd_curve: &'a Curve,
    /// Volatility surface.
    pub surface: &'a Surface,
    /// Optional spread curve, never shifted.
    pub spread_curve: Option<&'a Curve>,
}

/// Option value of `call` under each scenario, in input order.
pub fn price_scenarios(
    config: &LgmConfig,
    call: &CallRight,
    base: &BaseMarket<'_>,
    scenarios: &[Scenario],
) -> Vec<ModelResult<f64>> {
    scenarios
        .par_iter()
        .map(|scenario| price_scenario(config, call, base, scenario))
        .collect()
}

/// Option value of `call` under one scenario.
pub fn price_scenario(
    config: &LgmConfig,
    call: &CallRight,
    base: &BaseMarket<'_>,
    scenario: &Scenario,
) -> ModelResult<f64> {
    let disc_shift = compile_curve(scenario.curve_rule.as_ref(), base.disc_curve)?;
    let fwd_shift = compile_curve(scenario.curve_rule.as_ref(), base.fwd_curve)?;
    let surface_shift = scenario
        .surface_rule
        .as_ref()
        .map(SurfaceShift::new)
        .transpose()?;

    let disc = ScenarioCurve::new(base.disc_curve, disc_shift.as_ref());
    let fwd = ScenarioCurve::new(base.fwd_curve, fwd_shift.as_ref());
    let surface = ScenarioSurface::new(base.surface, surface_shift.as_ref());

    let mut market = MarketData::new(base.valuation, &disc, &fwd, &surface);
    if let Some(spread) = base.spread_curve {
        market = market.with_spread_curve(spread);
    }

    let mut model = LgmModel::from_config(config.clone())?;
    let valuation = model.price_call(call, &market)?;
    log::debug!("scenario {}: {:.6}", scenario.name, valuation.option_value);
    Ok(valuation.option_value)
}

fn compile_curve(rule: Option<&ScenarioRule>, base: &Curve) -> ModelResult<Option<CurveShift>> {
    Ok(rule.map(|r| CurveShift::new(r, base)).transpose()?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use lgmkit_cashflows::{FixedLeg, Schedule, ScheduleConfig};
    use lgmkit_curves::ScenarioModel;

    fn ymd(y: i32, m: u32, d: u32) -> Date {
        Date::from_ymd(y, m, d).unwrap()
    }

    fn parallel(model: ScenarioModel, value: f64) -> ScenarioRule {
        ScenarioRule {
            model,
            labels_x: vec!["1Y".to_string()],
            labels_y: Vec::new(),
            values: vec![vec![value]],
        }
    }

    #[test]
    fn test_scenarios_in_order() {
        let valuation = ymd(2020, 1, 1);
        let config = ScheduleConfig::new(ymd(2028, 1, 1), 12).with_effective_date(valuation);
        let schedule = Schedule::generate(&config, |d| d).unwrap();
        let cf = FixedLeg::new(schedule, 100.0, 0.03).cash_flows(valuation).unwrap();
        let call = CallRight::new(cf, vec![ymd(2022, 1, 1), ymd(2024, 1, 1)]).unwrap();

        let curve = Curve::constant(0.02).unwrap();
        let surface = Surface::constant(0.006).unwrap();
        let base = BaseMarket {
            valuation,
            disc_curve: &curve,
            fwd_curve: &curve,
            surface: &surface,
            spread_curve: None,
        };
        let lgm = LgmConfig {
            hull_white_volatility: Some(0.007),
            ..LgmConfig::default()
        };

        let scenarios = vec![
            Scenario::base("base"),
            Scenario::base("up").with_curve_rule(parallel(ScenarioModel::Additive, 0.01)),
            Scenario::base("down").with_curve_rule(parallel(ScenarioModel::Additive, -0.01)),
            Scenario::base("broken").with_curve_rule(ScenarioRule {
                values: Vec::new(),
                ..parallel(ScenarioModel::Additive, 0.0)
            }),
        ];
        let results = price_scenarios(&lgm, &call, &base, &scenarios);
        assert_eq!(results.len(), 4);

        let base_value = *results[0].as_ref().unwrap();
        let up = *results[1].as_ref().unwrap();
        let down = *results[2].as_ref().unwrap();
        // Higher rates make the issuer's call cheaper.
        assert!(up < base_value);
        assert!(down > base_value);
        assert!(results[3].is_err());
    }
}
