//! Schedule generation against reference date grids.

use lgmkit_cashflows::{Schedule, ScheduleConfig};
use lgmkit_core::calendars::{BusinessDayConvention, Calendar, TargetCalendar, WeekendCalendar};
use lgmkit_core::Date;
use proptest::prelude::*;

fn ymd(y: i32, m: u32, d: u32) -> Date {
    Date::from_ymd(y, m, d).unwrap()
}

fn annual() -> Vec<Date> {
    (1980..=1984).map(|y| ymd(y, 1, 1)).collect()
}

fn base() -> ScheduleConfig {
    ScheduleConfig::new(ymd(1984, 1, 1), 12).with_effective_date(ymd(1980, 1, 1))
}

fn unadjusted(config: &ScheduleConfig) -> Vec<Date> {
    Schedule::generate(config, |d| d).unwrap().dates().to_vec()
}

#[test]
fn test_backward_with_explicit_stub_dates() {
    assert_eq!(unadjusted(&base()), annual());

    let config = base()
        .with_first_date(ymd(1981, 1, 1))
        .with_next_to_last_date(ymd(1983, 1, 1));
    assert_eq!(unadjusted(&config), annual());

    let config = base()
        .with_first_date(ymd(1981, 1, 1))
        .with_next_to_last_date(ymd(1984, 1, 1));
    assert_eq!(unadjusted(&config), annual());
}

#[test]
fn test_preceding_adjustment_keeps_roll_dates() {
    let config = base()
        .with_first_date(ymd(1981, 1, 1))
        .with_next_to_last_date(ymd(1983, 1, 1));
    let schedule =
        Schedule::generate_with_calendar(&config, &WeekendCalendar, BusinessDayConvention::Preceding)
            .unwrap();
    assert_eq!(schedule.dates(), annual().as_slice());
}

#[test]
fn test_forward() {
    assert_eq!(unadjusted(&base().with_stub_at_end(true)), annual());
    assert_eq!(unadjusted(&base().with_first_date(ymd(1981, 1, 1))), annual());
}

#[test]
fn test_backward_avoids_duplicate_after_adjustment() {
    let config = ScheduleConfig::new(ymd(1984, 1, 2), 12).with_effective_date(ymd(1980, 1, 1));
    let schedule =
        Schedule::generate_with_calendar(&config, &TargetCalendar, BusinessDayConvention::Following)
            .unwrap();
    assert_eq!(
        schedule.dates(),
        &[ymd(1980, 1, 1), ymd(1981, 1, 2), ymd(1982, 1, 2), ymd(1983, 1, 2), ymd(1984, 1, 2)]
    );
}

#[test]
fn test_forward_avoids_duplicate_after_adjustment() {
    let config = ScheduleConfig::new(ymd(1985, 1, 1), 12)
        .with_effective_date(ymd(1980, 12, 31))
        .with_stub_at_end(true);
    let schedule =
        Schedule::generate_with_calendar(&config, &TargetCalendar, BusinessDayConvention::Preceding)
            .unwrap();
    assert_eq!(
        schedule.dates(),
        &[ymd(1980, 12, 31), ymd(1981, 12, 31), ymd(1982, 12, 31), ymd(1983, 12, 31), ymd(1985, 1, 1)]
    );
    let calendar = TargetCalendar;
    for (d, a) in schedule.dates().iter().zip(schedule.adjusted_dates()) {
        assert!(calendar.is_business_day(*a));
        assert!(a <= d);
    }
}

#[test]
fn test_explicit_front_and_back_stub() {
    let expected = vec![
        ymd(1980, 1, 1),
        ymd(1980, 3, 1),
        ymd(1981, 3, 1),
        ymd(1982, 3, 1),
        ymd(1983, 3, 1),
        ymd(1984, 1, 1),
    ];
    let both = base()
        .with_first_date(ymd(1980, 3, 1))
        .with_next_to_last_date(ymd(1983, 3, 1));
    assert_eq!(unadjusted(&both), expected);
    assert_eq!(unadjusted(&base().with_first_date(ymd(1980, 3, 1))), expected);
}

#[test]
fn test_semiannual_stubs() {
    let both = base()
        .with_first_date(ymd(1980, 3, 1))
        .with_next_to_last_date(ymd(1983, 3, 1));
    let both = ScheduleConfig {
        tenor_months: 6,
        ..both
    };
    assert_eq!(
        unadjusted(&both),
        vec![
            ymd(1980, 1, 1),
            ymd(1980, 3, 1),
            ymd(1980, 9, 1),
            ymd(1981, 3, 1),
            ymd(1981, 9, 1),
            ymd(1982, 3, 1),
            ymd(1982, 9, 1),
            ymd(1983, 3, 1),
            ymd(1984, 1, 1),
        ]
    );

    let front = ScheduleConfig::new(ymd(1984, 1, 1), 6)
        .with_effective_date(ymd(1980, 1, 1))
        .with_first_date(ymd(1980, 3, 1));
    assert_eq!(
        unadjusted(&front),
        vec![
            ymd(1980, 1, 1),
            ymd(1980, 3, 1),
            ymd(1980, 9, 1),
            ymd(1981, 3, 1),
            ymd(1981, 9, 1),
            ymd(1982, 3, 1),
            ymd(1982, 9, 1),
            ymd(1983, 3, 1),
            ymd(1983, 9, 1),
            ymd(1984, 1, 1),
        ]
    );
}

#[test]
fn test_anchored_on_valuation_date() {
    let config = ScheduleConfig::new(ymd(1984, 1, 1), 12).with_valuation_date(ymd(1980, 7, 1));
    assert_eq!(unadjusted(&config), annual());

    let config = config.with_next_to_last_date(ymd(1983, 1, 1));
    assert_eq!(unadjusted(&config), annual());

    let config = ScheduleConfig::new(ymd(1984, 1, 1), 6)
        .with_valuation_date(ymd(1980, 7, 1))
        .with_next_to_last_date(ymd(1983, 4, 1));
    assert_eq!(
        unadjusted(&config),
        vec![
            ymd(1980, 4, 1),
            ymd(1980, 10, 1),
            ymd(1981, 4, 1),
            ymd(1981, 10, 1),
            ymd(1982, 4, 1),
            ymd(1982, 10, 1),
            ymd(1983, 4, 1),
            ymd(1984, 1, 1),
        ]
    );
}

fn config_strategy() -> impl Strategy<Value = (Date, Date, i32)> {
    (
        1990i32..2030,
        1u32..=12,
        1u32..=31,
        prop::sample::select(vec![1, 3, 6, 12]),
        0i32..400,
    )
        .prop_map(|(y, m, d, tenor, months)| {
            let start = Date::from_ymd(y, m, 1).unwrap();
            let start = start.add_days(i64::from(d.min(start.days_in_month()) - 1));
            let end = start.add_months(months + 1).unwrap().add_days(i64::from(d % 7));
            (start, end, tenor)
        })
}

proptest! {
    #[test]
    fn prop_backward_rolls_from_maturity((start, end, tenor) in config_strategy()) {
        let config = ScheduleConfig::new(end, tenor).with_effective_date(start);
        let dates = unadjusted(&config);
        prop_assert_eq!(dates[0], start);
        prop_assert_eq!(*dates.last().unwrap(), end);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for (k, d) in dates[1..].iter().rev().enumerate() {
            prop_assert_eq!(*d, end.add_months(-(k as i32) * tenor).unwrap());
        }
    }

    #[test]
    fn prop_forward_rolls_from_effective((start, end, tenor) in config_strategy()) {
        let config = ScheduleConfig::new(end, tenor)
            .with_effective_date(start)
            .with_stub_at_end(true);
        let dates = unadjusted(&config);
        prop_assert_eq!(dates[0], start);
        prop_assert_eq!(*dates.last().unwrap(), end);
        prop_assert!(dates.windows(2).all(|w| w[0] < w[1]));
        for (k, d) in dates[..dates.len() - 1].iter().enumerate() {
            prop_assert_eq!(*d, start.add_months(k as i32 * tenor).unwrap());
        }
    }
}
