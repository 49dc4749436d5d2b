//! Benchmarks for LGM pricing and calibration.
//!
//! Run with: cargo bench -p lgmkit-models

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};

use lgmkit_cashflows::CashFlows;
use lgmkit_core::{time_from, Date};
use lgmkit_curves::{Curve, Surface};
use lgmkit_models::{
    price_scenarios, BaseMarket, BasketSwaption, CallRight, DiscountSpreads, LgmConfig, LgmModel,
    Scenario,
};

// =============================================================================
// TEST DATA GENERATORS
// =============================================================================

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn create_amortizing(valuation: Date) -> CashFlows {
    let t_pmt = (2019..=2027)
        .map(|y| time_from(valuation, ymd(y, 1, 1)))
        .collect();
    CashFlows::new(
        t_pmt,
        vec![0.0, 11.0, 10.9, 10.8, 10.7, 10.6, 10.5, 10.4, 30.3],
        vec![100.0, 100.0, 90.0, 80.0, 70.0, 60.0, 50.0, 40.0, 30.0],
    )
    .unwrap()
    .with_interest(vec![0.0, 11.0, 0.9, 0.8, 0.7, 0.6, 0.5, 0.4, 0.3])
    .unwrap()
}

fn create_model(times: &[f64]) -> LgmModel {
    let mut model = LgmModel::new(0.02).unwrap();
    model
        .set_times_and_hull_white_volatility(times, &[0.008])
        .unwrap();
    model
}

// =============================================================================
// BENCHMARKS
// =============================================================================

fn bench_european(c: &mut Criterion) {
    let valuation = ymd(2019, 1, 1);
    let cf = create_amortizing(valuation);
    let curve = Curve::constant(0.015).unwrap();
    let t_ex = time_from(valuation, ymd(2022, 1, 1));
    let model = create_model(&[t_ex]);
    let spreads = DiscountSpreads::new();

    c.bench_function("european_call", |b| {
        b.iter(|| {
            model.european_call(
                black_box(&cf),
                black_box(t_ex),
                &curve,
                model.xi()[0],
                &spreads,
            )
        })
    });
}

fn bench_bermudan(c: &mut Criterion) {
    let valuation = ymd(2019, 1, 1);
    let cf = create_amortizing(valuation);
    let curve = Curve::constant(0.015).unwrap();
    let spreads = DiscountSpreads::new();

    let mut group = c.benchmark_group("bermudan_call");
    for n in [1usize, 3, 6] {
        let times: Vec<f64> = (0..n)
            .map(|i| time_from(valuation, ymd(2020 + i as i32, 1, 1)))
            .collect();
        let model = create_model(&times);
        group.bench_with_input(BenchmarkId::from_parameter(n), &times, |b, times| {
            b.iter(|| model.bermudan_call(black_box(&cf), times, &curve, model.xi(), &spreads))
        });
    }
    group.finish();
}

fn bench_calibration(c: &mut Criterion) {
    let valuation = ymd(2019, 1, 1);
    let curve = Curve::constant(0.02).unwrap();
    let surface = Surface::constant(0.006).unwrap();
    let basket: Vec<BasketSwaption> = (2020..=2024)
        .map(|y| BasketSwaption::new(ymd(y, 1, 1), ymd(2029, 1, 1), 100.0, 0.02, 12, 6).unwrap())
        .collect();

    c.bench_function("calibrate_5_swaptions", |b| {
        b.iter(|| {
            let mut model = LgmModel::new(0.01).unwrap();
            model
                .calibrate(black_box(&basket), valuation, &curve, &curve, &surface)
                .unwrap();
            model
        })
    });
}

fn bench_scenarios(c: &mut Criterion) {
    let valuation = ymd(2019, 1, 1);
    let cf = create_amortizing(valuation);
    let call = CallRight::new(
        cf,
        (2021..=2025).map(|y| ymd(y, 1, 1)).collect(),
    )
    .unwrap();
    let curve = Curve::constant(0.015).unwrap();
    let surface = Surface::constant(0.006).unwrap();
    let base = BaseMarket {
        valuation,
        disc_curve: &curve,
        fwd_curve: &curve,
        surface: &surface,
        spread_curve: None,
    };
    let config = LgmConfig {
        hull_white_volatility: Some(0.008),
        ..LgmConfig::default()
    };
    let scenarios: Vec<Scenario> = (0..32)
        .map(|i| Scenario::base(format!("s{i}")))
        .collect();

    c.bench_function("price_32_scenarios", |b| {
        b.iter(|| price_scenarios(&config, &call, &base, black_box(&scenarios)))
    });
}

// =============================================================================
// CRITERION GROUPS
// =============================================================================

criterion_group!(pricing, bench_european, bench_bermudan);

criterion_group!(calibration, bench_calibration, bench_scenarios);

criterion_main!(pricing, calibration);
