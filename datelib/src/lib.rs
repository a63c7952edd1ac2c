//! # datelib
//!
//! Financial date arithmetic: calendar dates, tenors, holiday calendars,
//! business-day conventions and day-count conventions.
//!
//! This crate is a **façade** that re-exports the underlying workspace
//! crates. Application code should depend on this crate rather than the
//! individual `dl-*` crates.
//!
//! ## Quick start
//!
//! ```toml
//! [dependencies]
//! datelib = "0.1"
//! ```
//!
//! ```rust
//! use datelib::time::{
//!     advance_tenor, year_fraction, BusinessDayConvention, CalendarDate, DayCountConvention,
//!     HolidayCalendar, HolidayRule, Occurrence, Weekday, WeekendDays,
//! };
//!
//! let holidays = HolidayCalendar::new()
//!     .with_rule(HolidayRule::fixed("Christmas", 12, 25).unwrap())
//!     .with_rule(
//!         HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thursday, Occurrence::Fourth)
//!             .unwrap(),
//!     );
//!
//! let trade = CalendarDate::new(2024, 11, 27).unwrap();
//! let settle = advance_tenor(
//!     trade,
//!     "1D",
//!     BusinessDayConvention::Following,
//!     &holidays,
//!     &WeekendDays::default(),
//! )
//! .unwrap();
//! assert_eq!(settle.to_string(), "2024-11-29");
//!
//! let maturity: CalendarDate = "2025-05-29".parse().unwrap();
//! let t = year_fraction(settle, maturity, DayCountConvention::Actual360).unwrap();
//! approx::assert_abs_diff_eq!(t, 181.0 / 360.0, epsilon = 1e-12);
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

/// Core types, aliases, error definitions and settings.
pub use dl_core as core;

/// Dates, periods, holiday calendars, business-day and day-count conventions.
pub use dl_time as time;
