//! # dl-time
//!
//! Calendar dates, tenors, holiday calendars, business-day rolling, period
//! advancement and day-count conventions.
//!
//! Every operation is a pure function of its inputs: the holiday calendar and
//! the weekend are passed in explicitly, or bundled in a [`BusinessCalendar`].
//! The only process-wide state is the default weekend read by
//! [`WeekendDays::default`].

#![warn(missing_docs)]
#![forbid(unsafe_code)]

// ── Modules ───────────────────────────────────────────────────────────────────

/// Business-day predicate and roll adjustment.
pub mod adjust;

/// Moving dates by periods, and date differences.
pub mod advance;

/// `BusinessCalendar` — holidays and weekend under one name.
pub mod business_calendar;

/// Business-day adjustment conventions.
pub mod business_day_convention;

/// `CalendarDate` type and Gregorian helpers.
pub mod date;

/// `DayCounter` trait and built-in day-count conventions.
pub mod day_counter;

/// `HolidayCalendar` — explicit holiday dates plus recurring rules.
pub mod holiday_calendar;

/// `HolidayRule` — how a holiday recurs from year to year.
pub mod holiday_rule;

/// `Period` — a signed amount of a `TimeUnit`.
pub mod period;

/// `TimeUnit` — days, weeks, months, years.
pub mod time_unit;

/// `Weekday` — day of the week.
pub mod weekday;

/// `WeekendDays` — the set of weekdays that are never business days.
pub mod weekend;

// ── Convenience re-exports ────────────────────────────────────────────────────

pub use adjust::{
    adjust, is_business_day, next_business_day, previous_business_day, MAX_SEARCH_DAYS,
};
pub use advance::{add_business_days, advance, advance_tenor, business_days_diff, diff};
pub use business_calendar::BusinessCalendar;
pub use business_day_convention::BusinessDayConvention;
pub use date::CalendarDate;
pub use day_counter::{
    day_count, year_fraction, Actual360, Actual365Fixed, ActualActualIsda, DayCountConvention,
    DayCounter, Thirty360,
};
pub use holiday_calendar::HolidayCalendar;
pub use holiday_rule::{HolidayRule, Occurrence};
pub use period::Period;
pub use time_unit::TimeUnit;
pub use weekday::Weekday;
pub use weekend::WeekendDays;
