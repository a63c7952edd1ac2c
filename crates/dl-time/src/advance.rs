//! Period advancement: moving a date by a tenor and rolling the result.
//!
//! * **Days** count business days, one calendar step at a time.
//! * **Weeks** shift by seven calendar days per week.
//! * **Months** and **Years** shift the month/year and clamp the day of
//!   month to the target month's length (Jan 31 + 1M = Feb 28/29).
//!
//! Every unit except Days then rolls the result with the requested
//! [`BusinessDayConvention`]; a Days advance already ends on a business day.

use std::cmp::Ordering;

use tracing::debug;

use crate::adjust::{adjust, is_business_day, MAX_SEARCH_DAYS};
use crate::business_day_convention::BusinessDayConvention;
use crate::date::{days_in_month, CalendarDate};
use crate::holiday_calendar::HolidayCalendar;
use crate::period::Period;
use crate::time_unit::TimeUnit;
use crate::weekend::WeekendDays;
use dl_core::errors::{Error, Result};
use dl_core::{DayCount, Year};

/// Advance `date` by `period` and roll the result with `convention`.
///
/// # Errors
/// * [`Error::BusinessDaySearchExceeded`] if a Days advance or the final roll
///   runs out of search steps.
/// * [`Error::NumericOverflow`] if a Months/Years advance leaves the `i32`
///   year range; [`Error::InvalidDate`] if a Weeks shift does.
///
/// # Example
/// ```
/// use dl_time::{
///     advance, BusinessDayConvention, CalendarDate, HolidayCalendar, Period, WeekendDays,
/// };
///
/// let tue = CalendarDate::new(2024, 1, 2).unwrap();
/// let end = advance(
///     tue,
///     Period::days(5),
///     BusinessDayConvention::Following,
///     &HolidayCalendar::new(),
///     &WeekendDays::saturday_sunday(),
/// )
/// .unwrap();
/// assert_eq!(end, CalendarDate::new(2024, 1, 9).unwrap());
/// ```
pub fn advance(
    date: CalendarDate,
    period: Period,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    let shifted = match period.unit {
        TimeUnit::Days => return add_business_days(date, period.value, calendar, weekend),
        TimeUnit::Weeks => date.add_days(i64::from(period.value) * 7)?,
        TimeUnit::Months => add_months(date, period.value)?,
        TimeUnit::Years => add_years(date, period.value)?,
    };
    adjust(shifted, convention, calendar, weekend)
}

/// Parse `tenor` (e.g. `"3M"`) and [`advance`] by it.
///
/// # Errors
/// Any error of [`Period::parse`] or [`advance`].
pub fn advance_tenor(
    date: CalendarDate,
    tenor: &str,
    convention: BusinessDayConvention,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    let period = Period::parse(tenor)?;
    advance(date, period, convention, calendar, weekend)
}

/// Move `n` business days from `start` (backwards for negative `n`).
///
/// The start date itself is never counted.  At most [`MAX_SEARCH_DAYS`]
/// calendar days are visited in total.
///
/// # Errors
/// Returns [`Error::BusinessDaySearchExceeded`] if the step budget runs out.
pub fn add_business_days(
    start: CalendarDate,
    n: i32,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<CalendarDate> {
    let step: i64 = if n >= 0 { 1 } else { -1 };
    let target = n.unsigned_abs();
    let mut current = start;
    let mut added = 0u32;
    let mut iterations = 0u32;
    while added < target {
        iterations += 1;
        if iterations > MAX_SEARCH_DAYS {
            debug!(%start, n, "business day addition exhausted");
            return Err(Error::BusinessDaySearchExceeded(format!(
                "unable to add {n} business days to {start} within {MAX_SEARCH_DAYS} days"
            )));
        }
        current = current.add_days(step)?;
        if is_business_day(current, calendar, weekend) {
            added += 1;
        }
    }
    Ok(current)
}

/// Shift by `n` calendar months, clamping the day to the target month.
pub(crate) fn add_months(date: CalendarDate, n: i32) -> Result<CalendarDate> {
    let total = i64::from(date.month()) - 1 + i64::from(n);
    let year = i64::from(date.year()) + total.div_euclid(12);
    let month = (total.rem_euclid(12) + 1) as u8;
    let year = Year::try_from(year).map_err(|_| {
        Error::NumericOverflow(format!("{date} + {n} months leaves the year range"))
    })?;
    clamped(year, month, date.day())
}

/// Shift by `n` calendar years, clamping Feb 29 to Feb 28 when needed.
pub(crate) fn add_years(date: CalendarDate, n: i32) -> Result<CalendarDate> {
    let year = date.year().checked_add(n).ok_or_else(|| {
        Error::NumericOverflow(format!("{date} + {n} years leaves the year range"))
    })?;
    clamped(year, date.month(), date.day())
}

fn clamped(year: Year, month: u8, day: u8) -> Result<CalendarDate> {
    let last = days_in_month(year, month);
    if day > last {
        debug!(year, month, day, last, "day of month clamped");
    }
    CalendarDate::new(year, month, day.min(last))
}

/// Signed number of calendar days from `start` to `end`.
pub fn diff(start: CalendarDate, end: CalendarDate) -> DayCount {
    start.days_until(end)
}

/// Signed number of business days between two dates.
///
/// Counts from the earlier date (exclusive) to the later date (inclusive),
/// negated when `end < start`.  Whole weeks are counted arithmetically and
/// holidays are evaluated once per year, so the cost grows with the number
/// of years spanned rather than the number of days.
///
/// # Errors
/// Currently infallible; the `Result` matches the other business-day
/// operations.
pub fn business_days_diff(
    start: CalendarDate,
    end: CalendarDate,
    calendar: &HolidayCalendar,
    weekend: &WeekendDays,
) -> Result<DayCount> {
    let (sign, from, to) = match start.cmp(&end) {
        Ordering::Equal => return Ok(0),
        Ordering::Less => (1, start, end),
        Ordering::Greater => (-1, end, start),
    };
    let weekdays = working_weekdays(from, to, weekend);
    let holidays = if calendar.is_empty() {
        0
    } else {
        (from.year()..=to.year())
            .flat_map(|year| calendar.holidays(year))
            .filter(|d| *d > from && *d <= to && !weekend.contains(d.weekday()))
            .count() as DayCount
    };
    Ok(sign * (weekdays - holidays))
}

/// Days in `(from, to]` that are not weekend days; `from < to`.
fn working_weekdays(from: CalendarDate, to: CalendarDate, weekend: &WeekendDays) -> DayCount {
    let span = from.days_until(to);
    let per_week = (7 - weekend.len()) as DayCount;
    let start = from.weekday();
    let tail = (1..=span % 7)
        .filter(|k| !weekend.contains(start.shifted(*k)))
        .count() as DayCount;
    span / 7 * per_week + tail
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    fn weekend() -> WeekendDays {
        WeekendDays::saturday_sunday()
    }

    fn adv(d: CalendarDate, tenor: &str, conv: BusinessDayConvention) -> CalendarDate {
        advance_tenor(d, tenor, conv, &HolidayCalendar::new(), &weekend()).unwrap()
    }

    #[test]
    fn business_days_skip_weekends() {
        use BusinessDayConvention::Following;
        assert_eq!(adv(date(2024, 1, 2), "5D", Following), date(2024, 1, 9));
        // Friday + 1D = Monday
        assert_eq!(adv(date(2024, 1, 5), "1D", Following), date(2024, 1, 8));
        // Monday - 1D = Friday
        assert_eq!(adv(date(2024, 1, 8), "-1D", Following), date(2024, 1, 5));
        // Saturday start: the start itself is not counted
        assert_eq!(adv(date(2024, 1, 6), "1D", Following), date(2024, 1, 8));
    }

    #[test]
    fn zero_days_is_identity() {
        let sat = date(2024, 1, 6);
        assert_eq!(adv(sat, "0D", BusinessDayConvention::Unadjusted), sat);
        // No roll is applied to a Days advance, even a zero one.
        assert_eq!(adv(sat, "0D", BusinessDayConvention::Following), sat);
    }

    #[test]
    fn business_days_skip_holidays() {
        let cal = HolidayCalendar::new().with_holiday(date(2024, 1, 3));
        let end = advance(
            date(2024, 1, 2),
            Period::days(2),
            BusinessDayConvention::Following,
            &cal,
            &weekend(),
        )
        .unwrap();
        assert_eq!(end, date(2024, 1, 5));
    }

    #[test]
    fn weeks_then_roll() {
        // Wed 2024-01-03 + 1W = Wed 2024-01-10
        assert_eq!(
            adv(date(2024, 1, 3), "1W", BusinessDayConvention::Following),
            date(2024, 1, 10)
        );
        // Sat 2024-01-06 + 1W = Sat 2024-01-13 -> Mon 15
        assert_eq!(
            adv(date(2024, 1, 6), "1W", BusinessDayConvention::Following),
            date(2024, 1, 15)
        );
        assert_eq!(
            adv(date(2024, 1, 6), "-2W", BusinessDayConvention::Unadjusted),
            date(2023, 12, 23)
        );
    }

    #[test]
    fn months_clamp_to_month_end() {
        use BusinessDayConvention::Unadjusted;
        assert_eq!(adv(date(2024, 1, 31), "1M", Unadjusted), date(2024, 2, 29));
        assert_eq!(adv(date(2023, 1, 31), "1M", Unadjusted), date(2023, 2, 28));
        assert_eq!(adv(date(2024, 3, 31), "-1M", Unadjusted), date(2024, 2, 29));
        assert_eq!(adv(date(2024, 11, 15), "3M", Unadjusted), date(2025, 2, 15));
        assert_eq!(adv(date(2024, 1, 15), "-13M", Unadjusted), date(2022, 12, 15));
        assert_eq!(adv(date(2024, 12, 15), "-12M", Unadjusted), date(2023, 12, 15));
        assert_eq!(adv(date(2024, 5, 15), "0M", Unadjusted), date(2024, 5, 15));
    }

    #[test]
    fn months_non_round_trip_after_clamp() {
        use BusinessDayConvention::Unadjusted;
        let jan31 = date(2024, 1, 31);
        let there = adv(jan31, "1M", Unadjusted);
        let back = adv(there, "-1M", Unadjusted);
        assert_eq!(back, date(2024, 1, 29));
        assert_ne!(back, jan31);
    }

    #[test]
    fn months_then_roll() {
        // 2024-05-31 + 1M = Sun 2024-06-30 -> Fri 28 under ModifiedFollowing
        assert_eq!(
            adv(date(2024, 5, 31), "1M", BusinessDayConvention::ModifiedFollowing),
            date(2024, 6, 28)
        );
        assert_eq!(
            adv(date(2024, 5, 31), "1M", BusinessDayConvention::Following),
            date(2024, 7, 1)
        );
    }

    #[test]
    fn years_clamp_leap_day() {
        use BusinessDayConvention::Unadjusted;
        assert_eq!(adv(date(2024, 2, 29), "1Y", Unadjusted), date(2025, 2, 28));
        assert_eq!(adv(date(2024, 2, 29), "4Y", Unadjusted), date(2028, 2, 29));
        assert_eq!(adv(date(2024, 2, 29), "-100y", Unadjusted), date(1924, 2, 29));
        assert_eq!(adv(date(2000, 2, 29), "100Y", Unadjusted), date(2100, 2, 28));
    }

    #[test]
    fn year_overflow() {
        let d = date(Year::MAX, 6, 1);
        assert!(matches!(add_years(d, 1), Err(Error::NumericOverflow(_))));
        assert!(matches!(add_months(d, 12), Err(Error::NumericOverflow(_))));
    }

    #[test]
    fn tenor_errors_propagate() {
        let res = advance_tenor(
            date(2024, 1, 2),
            "1Y6M",
            BusinessDayConvention::Following,
            &HolidayCalendar::new(),
            &weekend(),
        );
        assert!(matches!(res, Err(Error::InvalidFormat(_))));
    }

    #[test]
    fn business_day_budget() {
        let all = WeekendDays::from_mask(0x7F);
        let err =
            add_business_days(date(2024, 1, 2), 1, &HolidayCalendar::new(), &all).unwrap_err();
        assert!(matches!(err, Error::BusinessDaySearchExceeded(ref m) if m.contains("add")));
    }

    #[test]
    fn calendar_differences() {
        let cal = HolidayCalendar::new();
        let mon = date(2023, 9, 4);
        let fri = date(2023, 9, 8);
        assert_eq!(diff(mon, fri), 4);
        assert_eq!(diff(fri, mon), -4);
        assert_eq!(business_days_diff(mon, fri, &cal, &weekend()).unwrap(), 4);
        assert_eq!(business_days_diff(fri, mon, &cal, &weekend()).unwrap(), -4);
        assert_eq!(business_days_diff(mon, mon, &cal, &weekend()).unwrap(), 0);
        // Fri -> next Mon: Sat, Sun skipped, Mon counted
        assert_eq!(
            business_days_diff(fri, date(2023, 9, 11), &cal, &weekend()).unwrap(),
            1
        );
    }

    /// Day-by-day count, for cross-checking.
    fn walked(from: CalendarDate, to: CalendarDate, cal: &HolidayCalendar, w: &WeekendDays) -> i64 {
        let mut count = 0;
        let mut d = from;
        while d < to {
            d = d.succ().unwrap();
            if is_business_day(d, cal, w) {
                count += 1;
            }
        }
        count
    }

    #[test]
    fn business_days_match_day_walk() {
        use crate::holiday_rule::{HolidayRule, Occurrence};
        use crate::weekday::Weekday;
        let cal = HolidayCalendar::new()
            .with_holiday(date(2024, 3, 15))
            .with_holiday(date(2024, 3, 16)) // Saturday, not double-counted
            .with_rule(HolidayRule::fixed("Christmas", 12, 25).unwrap())
            .with_rule(
                HolidayRule::nth_weekday("Labor Day", 9, Weekday::Monday, Occurrence::First)
                    .unwrap(),
            );
        let start = date(2022, 11, 3);
        for weekend in [weekend(), WeekendDays::friday_saturday(), WeekendDays::none()] {
            for span in [1, 2, 6, 7, 8, 30, 365, 800, 1200] {
                let end = start.add_days(span).unwrap();
                let expected = walked(start, end, &cal, &weekend);
                assert_eq!(
                    business_days_diff(start, end, &cal, &weekend).unwrap(),
                    expected,
                    "{start} -> {end} with {weekend:?}"
                );
                assert_eq!(
                    business_days_diff(end, start, &cal, &weekend).unwrap(),
                    -expected
                );
            }
        }
    }

    #[test]
    fn business_days_over_millions_of_years() {
        let from = date(-2_000_000, 1, 1);
        let to = date(2_000_000, 1, 1);
        // 10,000 Gregorian cycles of 146,097 days each, five sevenths working
        let expected = 10_000 * 146_097 / 7 * 5;
        assert_eq!(
            business_days_diff(from, to, &HolidayCalendar::new(), &weekend()).unwrap(),
            expected
        );
        let christmas = HolidayCalendar::new()
            .with_rule(crate::holiday_rule::HolidayRule::fixed("Christmas", 12, 25).unwrap());
        let with_holidays = business_days_diff(from, to, &christmas, &weekend()).unwrap();
        assert!(with_holidays < expected);
        assert!(with_holidays > expected - 4_000_000);
    }

    #[test]
    fn seven_day_weekend_has_no_business_days() {
        let all = WeekendDays::from_mask(0x7F);
        assert_eq!(
            business_days_diff(date(2024, 1, 1), date(2025, 1, 1), &HolidayCalendar::new(), &all)
                .unwrap(),
            0
        );
    }
}
