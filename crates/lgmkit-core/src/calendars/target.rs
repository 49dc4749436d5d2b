//! TARGET calendar for euro-denominated payments.

use super::Calendar;
use crate::types::Date;

/// TARGET holiday calendar.
///
/// Holidays: New Year's Day, Good Friday, Easter Monday, Labour Day
/// (May 1), Christmas Day and December 26. Holidays falling on a weekend
/// are not moved.
#[derive(Debug, Clone, Copy, Default)]
pub struct TargetCalendar;

impl Calendar for TargetCalendar {
    fn name(&self) -> &str {
        "TARGET"
    }

    fn is_business_day(&self, date: Date) -> bool {
        if date.is_weekend() {
            return false;
        }
        match (date.month(), date.day()) {
            (1, 1) | (5, 1) | (12, 25) | (12, 26) => return false,
            _ => {}
        }
        easter_sunday(date.year()).map_or(true, |easter| {
            let offset = easter.days_between(&date);
            offset != -2 && offset != 1
        })
    }
}

/// Easter Sunday for the given year (anonymous Gregorian algorithm).
pub fn easter_sunday(year: i32) -> Option<Date> {
    let a = year % 19;
    let b = year / 100;
    let c = year % 100;
    let d = b / 4;
    let e = b % 4;
    let f = (b + 8) / 25;
    let g = (b - f + 1) / 3;
    let h = (19 * a + b - d - g + 15) % 30;
    let i = c / 4;
    let k = c % 4;
    let l = (32 + 2 * e + 2 * i - h - k) % 7;
    let m = (a + 11 * h + 22 * l) / 451;
    let month = (h + l - 7 * m + 114) / 31;
    let day = ((h + l - 7 * m + 114) % 31) + 1;

    Date::from_ymd(year, month as u32, day as u32).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_easter_dates() {
        assert_eq!(easter_sunday(2019), Some(Date::from_ymd(2019, 4, 21).unwrap()));
        assert_eq!(easter_sunday(2024), Some(Date::from_ymd(2024, 3, 31).unwrap()));
    }

    #[test]
    fn test_target_holidays() {
        let cal = TargetCalendar;
        assert!(cal.is_holiday(Date::from_ymd(2019, 4, 19).unwrap())); // Good Friday
        assert!(cal.is_holiday(Date::from_ymd(2019, 4, 22).unwrap())); // Easter Monday
        assert!(cal.is_holiday(Date::from_ymd(2019, 5, 1).unwrap()));
        assert!(cal.is_holiday(Date::from_ymd(1981, 1, 1).unwrap()));
        assert!(cal.is_business_day(Date::from_ymd(2019, 4, 23).unwrap()));
    }
}
