//! Business day calendars and conventions.
//!
//! The schedule generator only needs an adjustment function `Date -> Date`;
//! a [`Calendar`] plus a [`BusinessDayConvention`] is the usual way to build
//! one.

use std::collections::BTreeSet;

mod conventions;
mod target;

pub use conventions::{adjust, BusinessDayConvention};
pub use target::{easter_sunday, TargetCalendar};

use crate::types::Date;

/// Trait for business day calendars.
pub trait Calendar: Send + Sync {
    /// Returns the name of the calendar.
    fn name(&self) -> &str;

    /// Returns true if the date is a business day.
    fn is_business_day(&self, date: Date) -> bool;

    /// Returns true if the date is a holiday or a weekend day.
    fn is_holiday(&self, date: Date) -> bool {
        !self.is_business_day(date)
    }

    /// Adjusts a date according to the given business day convention.
    fn adjust(&self, date: Date, convention: BusinessDayConvention) -> Date {
        conventions::adjust(date, convention, self)
    }
}

/// A simple weekend-only calendar (no holidays).
#[derive(Debug, Clone, Copy, Default)]
pub struct WeekendCalendar;

impl Calendar for WeekendCalendar {
    fn name(&self) -> &str {
        "Weekend Only"
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend()
    }
}

/// Weekends plus an explicit list of holiday dates.
#[derive(Debug, Clone, Default)]
pub struct HolidayCalendar {
    name: String,
    holidays: BTreeSet<Date>,
}

impl HolidayCalendar {
    /// Creates a calendar from a list of holidays.
    pub fn new(name: impl Into<String>, holidays: impl IntoIterator<Item = Date>) -> Self {
        Self {
            name: name.into(),
            holidays: holidays.into_iter().collect(),
        }
    }

    /// Adds a holiday.
    #[must_use]
    pub fn with_holiday(mut self, date: Date) -> Self {
        self.holidays.insert(date);
        self
    }

    /// Number of explicit holidays.
    pub fn len(&self) -> usize {
        self.holidays.len()
    }

    /// True if no explicit holidays are registered.
    pub fn is_empty(&self) -> bool {
        self.holidays.is_empty()
    }
}

impl Calendar for HolidayCalendar {
    fn name(&self) -> &str {
        &self.name
    }

    fn is_business_day(&self, date: Date) -> bool {
        !date.is_weekend() && !self.holidays.contains(&date)
    }
}
