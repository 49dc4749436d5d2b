//! Leg valuation under shifted curves.

use approx::assert_relative_eq;
use lgmkit_cashflows::{FixedLeg, Schedule, ScheduleConfig};
use lgmkit_core::Date;
use lgmkit_curves::{Curve, CurveShift, ScenarioCurve, ScenarioModel, ScenarioRule};

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn par_bond(valuation: Date) -> FixedLeg {
    let config = ScheduleConfig::new(ymd(2030, 1, 1), 12).with_effective_date(valuation);
    let schedule = Schedule::generate(&config, |d| d).unwrap();
    FixedLeg::new(schedule, 100.0, 0.02)
}

fn parallel(bp: f64) -> ScenarioRule {
    ScenarioRule {
        model: ScenarioModel::Additive,
        labels_x: vec!["1Y".to_string()],
        labels_y: Vec::new(),
        values: vec![vec![bp * 1e-4]],
    }
}

#[test]
fn test_price_moves_against_curve_shift() {
    let valuation = ymd(2020, 1, 1);
    let cf = par_bond(valuation).cash_flows(valuation).unwrap();
    let base = Curve::constant(0.02).unwrap();

    let price = |bp: f64| {
        let shift = CurveShift::new(&parallel(bp), &base).unwrap();
        cf.present_value(&ScenarioCurve::new(&base, Some(&shift))).unwrap()
    };
    let flat = cf.present_value(&base).unwrap();
    assert_relative_eq!(flat, 100.0, epsilon = 0.05);
    assert_relative_eq!(price(0.0), flat, epsilon = 1e-10);
    assert!(price(1.0) < flat);
    assert!(price(-1.0) > flat);
}

#[test]
fn test_unshifted_view_matches_base() {
    let valuation = ymd(2020, 1, 1);
    let cf = par_bond(valuation).cash_flows(valuation).unwrap();
    let base = Curve::constant(0.035).unwrap();
    let view = ScenarioCurve::new(&base, None);
    assert_relative_eq!(
        cf.present_value(&view).unwrap(),
        cf.present_value(&base).unwrap(),
        epsilon = 1e-12
    );
}
