//! Business-day predicate and roll adjustment.
//!
//! Both directional scans move one calendar day at a time and give up after
//! [`MAX_SEARCH_DAYS`] steps, so a calendar that blocks out a whole year
//! yields [`Error::BusinessDaySearchExceeded`] instead of looping forever.

use tracing::debug;

use crate::business_day_convention::BusinessDayConvention;
use crate::date::CalendarDate;
use crate::holiday_calendar::HolidayCalendar;
use crate::weekend::WeekendDays;
use dl_core::errors::{Error, Result};

/// Maximum number of single-day steps taken by any business-day scan.
pub const MAX_SEARCH_DAYS: u32 = 366;

/// Return `true` if `date` is neither a weekend day nor a holiday.
pub fn is_business_day(
    date: CalendarDate,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> bool {
    !weekend.contains(date.weekday()) && !calendar.is_holiday(date)
}

/// Roll `date` onto a business day according to `convention`.
///
/// Business days are returned unchanged under every convention, and
/// [`BusinessDayConvention::Unadjusted`] never moves a date.
///
/// # Errors
/// Returns [`Error::BusinessDaySearchExceeded`] if no business day is found
/// within [`MAX_SEARCH_DAYS`] steps.
///
/// # Example
/// ```
/// use dl_time::{adjust, BusinessDayConvention, CalendarDate, HolidayCalendar, WeekendDays};
///
/// let sat = CalendarDate::new(2024, 6, 29).unwrap();
/// let rolled = adjust(
///     sat,
///     BusinessDayConvention::ModifiedFollowing,
///     &HolidayCalendar::new(),
///     &WeekendDays::saturday_sunday(),
/// )
/// .unwrap();
/// // Following would land on Monday 1 July, so roll back to Friday instead.
/// assert_eq!(rolled, CalendarDate::new(2024, 6, 28).unwrap());
/// ```
pub fn adjust(
    date: CalendarDate,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    if convention == BusinessDayConvention::Unadjusted || is_business_day(date, calendar, weekend) {
        return Ok(date);
    }
    match convention {
        BusinessDayConvention::Unadjusted => Ok(date),
        BusinessDayConvention::Following => next_business_day(date, calendar, weekend),
        BusinessDayConvention::Preceding => previous_business_day(date, calendar, weekend),
        BusinessDayConvention::ModifiedFollowing => {
            let adjusted = next_business_day(date, calendar, weekend)?;
            if adjusted.month() != date.month() {
                previous_business_day(date, calendar, weekend)
            } else {
                Ok(adjusted)
            }
        }
        BusinessDayConvention::ModifiedPreceding => {
            let adjusted = previous_business_day(date, calendar, weekend)?;
            if adjusted.month() != date.month() {
                next_business_day(date, calendar, weekend)
            } else {
                Ok(adjusted)
            }
        }
    }
}

/// The first business day on or after `date`.
///
/// # Errors
/// Returns [`Error::BusinessDaySearchExceeded`] after [`MAX_SEARCH_DAYS`]
/// steps without a business day.
pub fn next_business_day(
    date: CalendarDate,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    scan(date, 1, "next", calendar, weekend)
}

/// The last business day on or before `date`.
///
/// # Errors
/// Returns [`Error::BusinessDaySearchExceeded`] after [`MAX_SEARCH_DAYS`]
/// steps without a business day.
pub fn previous_business_day(
    date: CalendarDate,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    scan(date, -1, "previous", calendar, weekend)
}

fn scan(
    start: CalendarDate,
    step: i64,
    direction: &str,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    let mut current = start;
    let mut iterations = 0;
    while !is_business_day(current, calendar, weekend) {
        iterations += 1;
        if iterations > MAX_SEARCH_DAYS {
            debug!(%start, direction, "business day scan exhausted");
            return Err(Error::BusinessDaySearchExceeded(format!(
                "unable to find {direction} business day from {start} within {MAX_SEARCH_DAYS} days"
            )));
        }
        current = current.add_days(step)?;
    }
    Ok(current)
}
