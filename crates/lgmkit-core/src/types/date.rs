//! Date type for schedule and curve calculations.

use chrono::{Datelike, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::{Add, Sub};
use std::str::FromStr;

use crate::error::{CoreError, CoreResult};

/// A calendar date.
///
/// Newtype around `chrono::NaiveDate` carrying the month arithmetic used by
/// schedule generation (end-of-month clamping when rolling by months).
///
/// # Example
///
/// ```rust
/// use lgmkit_core::Date;
///
/// let date = Date::from_ymd(2024, 1, 31).unwrap();
/// let next = date.add_months(1).unwrap();
/// assert_eq!(next, Date::from_ymd(2024, 2, 29).unwrap());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Date(NaiveDate);

impl Date {
    /// Creates a new date from year, month, and day.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the date is invalid.
    pub fn from_ymd(year: i32, month: u32, day: u32) -> CoreResult<Self> {
        NaiveDate::from_ymd_opt(year, month, day)
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("{year}-{month:02}-{day:02}")))
    }

    /// Parses `YYYY-MM-DD`, `YYYY/MM/DD` or `DD.MM.YYYY`.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if none of the formats match.
    pub fn parse(s: &str) -> CoreResult<Self> {
        ["%Y-%m-%d", "%Y/%m/%d", "%d.%m.%Y"]
            .iter()
            .find_map(|fmt| NaiveDate::parse_from_str(s.trim(), fmt).ok())
            .map(Date)
            .ok_or_else(|| CoreError::invalid_date(format!("Cannot parse: {s}")))
    }

    /// Returns the year component.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.0.year()
    }

    /// Returns the month component (1-12).
    #[must_use]
    pub fn month(&self) -> u32 {
        self.0.month()
    }

    /// Returns the day component (1-31).
    #[must_use]
    pub fn day(&self) -> u32 {
        self.0.day()
    }

    /// Checks if the year is a leap year.
    #[must_use]
    pub fn is_leap_year(&self) -> bool {
        self.0.leap_year()
    }

    /// Returns the number of days in the date's month.
    #[must_use]
    pub fn days_in_month(&self) -> u32 {
        days_in_month(self.year(), self.month())
    }

    /// Adds a number of days to the date.
    #[must_use]
    pub fn add_days(&self, days: i64) -> Self {
        Date(self.0 + chrono::Duration::days(days))
    }

    /// Adds a number of months to the date.
    ///
    /// If the resulting day would be invalid (e.g., Jan 31 + 1 month),
    /// it rolls back to the last valid day of the month.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::InvalidDate` if the result is out of range.
    pub fn add_months(&self, months: i32) -> CoreResult<Self> {
        let total_months = self.year() * 12 + self.month() as i32 - 1 + months;
        let new_year = total_months.div_euclid(12);
        let new_month = (total_months.rem_euclid(12) + 1) as u32;

        let new_day = self.day().min(days_in_month(new_year, new_month));

        Self::from_ymd(new_year, new_month, new_day)
    }

    /// Calculates the number of calendar days from `self` to `other`.
    #[must_use]
    pub fn days_between(&self, other: &Date) -> i64 {
        (other.0 - self.0).num_days()
    }

    /// Returns the underlying `NaiveDate`.
    #[must_use]
    pub fn as_naive_date(&self) -> NaiveDate {
        self.0
    }

    /// Returns the last calendar day of the date's month.
    #[must_use]
    pub fn end_of_month(&self) -> Self {
        self.add_days(i64::from(self.days_in_month() - self.day()))
    }

    /// Checks if the date is the end of month.
    #[must_use]
    pub fn is_end_of_month(&self) -> bool {
        self.day() == self.days_in_month()
    }

    /// Returns the day of week.
    #[must_use]
    pub fn weekday(&self) -> Weekday {
        self.0.weekday()
    }

    /// Checks if the date is a weekend (Saturday or Sunday).
    #[must_use]
    pub fn is_weekend(&self) -> bool {
        matches!(self.weekday(), Weekday::Sat | Weekday::Sun)
    }
}

/// Year fractions below this (about half a day) are treated as "now".
pub const MIN_TIME: f64 = 1.0 / 512.0;

/// Year fraction from `valuation` to `date` on an ACT/365 clock.
///
/// This is the time axis shared by curves, surfaces, cash-flow objects and
/// the LGM model. Dates before `valuation` give negative times.
#[must_use]
pub fn time_from(valuation: Date, date: Date) -> f64 {
    valuation.days_between(&date) as f64 / 365.0
}

impl fmt::Display for Date {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%Y-%m-%d"))
    }
}

impl FromStr for Date {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl From<NaiveDate> for Date {
    fn from(date: NaiveDate) -> Self {
        Date(date)
    }
}

impl From<Date> for NaiveDate {
    fn from(date: Date) -> Self {
        date.0
    }
}

impl Add<i64> for Date {
    type Output = Self;

    fn add(self, days: i64) -> Self::Output {
        self.add_days(days)
    }
}

impl Sub<i64> for Date {
    type Output = Self;

    fn sub(self, days: i64) -> Self::Output {
        self.add_days(-days)
    }
}

impl Sub<Date> for Date {
    type Output = i64;

    /// Returns the number of days between two dates.
    fn sub(self, other: Date) -> Self::Output {
        other.days_between(&self)
    }
}

fn days_in_month(year: i32, month: u32) -> u32 {
    match month {
        4 | 6 | 9 | 11 => 30,
        2 if is_leap_year(year) => 29,
        2 => 28,
        _ => 31,
    }
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || (year % 400 == 0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_date_creation() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        assert_eq!(date.year(), 2025);
        assert_eq!(date.month(), 6);
        assert_eq!(date.day(), 15);
    }

    #[test]
    fn test_invalid_date() {
        assert!(Date::from_ymd(2025, 2, 30).is_err());
        assert!(Date::from_ymd(2025, 13, 1).is_err());
    }

    #[test]
    fn test_parse_formats() {
        let expected = Date::from_ymd(2019, 3, 7).unwrap();
        assert_eq!(Date::parse("2019-03-07").unwrap(), expected);
        assert_eq!(Date::parse("2019/03/07").unwrap(), expected);
        assert_eq!(Date::parse("07.03.2019").unwrap(), expected);
        assert!(Date::parse("March 7th").is_err());
    }

    #[test]
    fn test_add_months_clamps_to_month_end() {
        let date = Date::from_ymd(2025, 1, 31).unwrap();
        assert_eq!(date.add_months(1).unwrap(), Date::from_ymd(2025, 2, 28).unwrap());
        assert_eq!(date.add_months(-2).unwrap(), Date::from_ymd(2024, 11, 30).unwrap());
        assert_eq!(date.add_months(-13).unwrap(), Date::from_ymd(2023, 12, 31).unwrap());
    }

    #[test]
    fn test_end_of_month() {
        let date = Date::from_ymd(2024, 2, 10).unwrap();
        assert_eq!(date.end_of_month(), Date::from_ymd(2024, 2, 29).unwrap());
        assert!(date.end_of_month().is_end_of_month());
        assert!(!date.is_end_of_month());
    }

    #[test]
    fn test_time_from() {
        let start = Date::from_ymd(2000, 1, 1).unwrap();
        // 2000 is a leap year: Jan 1 to Dec 31 is 365 days
        let end = Date::from_ymd(2000, 12, 31).unwrap();
        assert!((time_from(start, end) - 1.0).abs() < 1e-15);
        assert!(time_from(end, start) < 0.0);
    }

    #[test]
    fn test_date_arithmetic() {
        let d1 = Date::from_ymd(2025, 1, 1).unwrap();
        let d2 = d1 + 30;
        assert_eq!(d2 - d1, 30);
        assert_eq!(d2 - 30, d1);
    }

    #[test]
    fn test_serde_transparent() {
        let date = Date::from_ymd(2025, 6, 15).unwrap();
        let json = serde_json::to_string(&date).unwrap();
        assert_eq!(json, "\"2025-06-15\"");
        let back: Date = serde_json::from_str(&json).unwrap();
        assert_eq!(back, date);
    }
}
