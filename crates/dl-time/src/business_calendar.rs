//! `BusinessCalendar` — a named market calendar.
//!
//! Bundles the two inputs every business-day operation needs (the holiday
//! calendar and the weekend) so that a market can be configured once and
//! queried with plain method calls.

use crate::adjust::{adjust, is_business_day};
use crate::advance::{advance, advance_tenor, business_days_diff};
use crate::business_day_convention::BusinessDayConvention;
use crate::date::CalendarDate;
use crate::holiday_calendar::HolidayCalendar;
use crate::period::Period;
use crate::weekend::WeekendDays;
use dl_core::errors::Result;
use dl_core::DayCount;

/// A financial calendar: holidays plus weekend days, under a display name.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BusinessCalendar {
    name: String,
    holidays: HolidayCalendar,
    weekend: WeekendDays,
}

impl BusinessCalendar {
    /// A calendar using the configured default weekend.
    pub fn new(name: impl Into<String>, holidays: HolidayCalendar) -> Self {
        Self::with_weekend(name, holidays, WeekendDays::default())
    }

    /// A calendar with an explicit weekend.
    pub fn with_weekend(
        name: impl Into<String>,
        holidays: HolidayCalendar,
        weekend: WeekendDays,
    ) -> Self {
        Self {
            name: name.into(),
            holidays,
            weekend,
        }
    }

    /// A calendar with no holidays and a Saturday/Sunday weekend.
    pub fn weekends_only() -> Self {
        Self::with_weekend(
            "Weekends Only",
            HolidayCalendar::new(),
            WeekendDays::saturday_sunday(),
        )
    }

    /// Human-readable name (e.g. `"United States (Settlement)"`).
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The holiday set.
    pub fn holidays(&self) -> &HolidayCalendar {
        &self.holidays
    }

    /// Mutable access to the holiday set.
    pub fn holidays_mut(&mut self) -> &mut HolidayCalendar {
        &mut self.holidays
    }

    /// The weekend days.
    pub fn weekend(&self) -> WeekendDays {
        self.weekend
    }

    /// Return `true` if `date` is a business day.
    pub fn is_business_day(&self, date: CalendarDate) -> bool {
        is_business_day(date, &self.holidays, &self.weekend)
    }

    /// Return `true` if `date` is a holiday or a weekend day.
    pub fn is_non_business_day(&self, date: CalendarDate) -> bool {
        !self.is_business_day(date)
    }

    /// Return `true` if `date` falls on a weekend day.
    pub fn is_weekend(&self, date: CalendarDate) -> bool {
        self.weekend.contains(date.weekday())
    }

    /// See [`adjust`](crate::adjust::adjust).
    pub fn adjust(
        &self,
        date: CalendarDate,
        convention: BusinessDayConvention,
    ) -> Result<CalendarDate> {
        adjust(date, convention, &self.holidays, &self.weekend)
    }

    /// See [`advance`](crate::advance::advance).
    pub fn advance(
        &self,
        date: CalendarDate,
        period: Period,
        convention: BusinessDayConvention,
    ) -> Result<CalendarDate> {
        advance(date, period, convention, &self.holidays, &self.weekend)
    }

    /// See [`advance_tenor`](crate::advance::advance_tenor).
    pub fn advance_tenor(
        &self,
        date: CalendarDate,
        tenor: &str,
        convention: BusinessDayConvention,
    ) -> Result<CalendarDate> {
        advance_tenor(date, tenor, convention, &self.holidays, &self.weekend)
    }

    /// Business days from `start` (exclusive) to `end` (inclusive); negative
    /// if `end < start`.
    pub fn business_days_between(
        &self,
        start: CalendarDate,
        end: CalendarDate,
    ) -> Result<DayCount> {
        business_days_diff(start, end, &self.holidays, &self.weekend)
    }

    /// The last business day of the month containing `date`.
    pub fn end_of_month(&self, date: CalendarDate) -> Result<CalendarDate> {
        self.adjust(date.end_of_month(), BusinessDayConvention::Preceding)
    }

    /// Return `true` if `date` is the last business day of its month.
    pub fn is_end_of_month(&self, date: CalendarDate) -> Result<bool> {
        Ok(self.is_business_day(date) && self.end_of_month(date)? == date)
    }
}
