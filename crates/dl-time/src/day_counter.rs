//! `DayCounter` trait and the built-in day-count conventions.
//!
//! A day counter computes the **day count** and the **year fraction**
//! between two dates, used when accruing interest.  Each convention is a unit
//! struct implementing [`DayCounter`]; [`DayCountConvention`] is the closed
//! enum over them, for callers that select a convention at run time.

use std::str::FromStr;

use crate::date::{days_in_year, CalendarDate};
use dl_core::errors::{Error, Result};
use dl_core::{ensure, DayCount, Real, Time};

/// A convention for counting days and the fraction of a year between two
/// dates.
pub trait DayCounter: std::fmt::Debug + Send + Sync {
    /// Human-readable name of this convention (e.g. `"Actual/365 (Fixed)"`).
    fn name(&self) -> &'static str;

    /// Number of days between `start` and `end` according to this convention.
    ///
    /// # Errors
    /// Conventions other than 30/360 return [`Error::InvalidArgument`] when
    /// `start > end`.
    fn day_count(&self, start: CalendarDate, end: CalendarDate) -> Result<DayCount>;

    /// Fraction of a year between `start` and `end`.
    ///
    /// # Errors
    /// As for [`day_count`](Self::day_count).
    fn year_fraction(&self, start: CalendarDate, end: CalendarDate) -> Result<Time>;
}

fn check_order(start: CalendarDate, end: CalendarDate) -> Result<()> {
    ensure!(
        start <= end,
        "start date {start} must not be after end date {end}"
    );
    Ok(())
}

/// Actual/Actual (ISDA) day counter.
///
/// Within one year: `actual_days / days_in_year`.  Across years the period is
/// split at the year boundaries: the tail of the first year over its length,
/// 1.0 for each whole year in between, and the head of the last year over its
/// length.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActualActualIsda;

impl DayCounter for ActualActualIsda {
    fn name(&self) -> &'static str {
        "Actual/Actual (ISDA)"
    }

    fn day_count(&self, start: CalendarDate, end: CalendarDate) -> Result<DayCount> {
        check_order(start, end)?;
        Ok(start.days_until(end))
    }

    fn year_fraction(&self, start: CalendarDate, end: CalendarDate) -> Result<Time> {
        check_order(start, end)?;
        let (y1, y2) = (start.year(), end.year());
        if y1 == y2 {
            return Ok(start.days_until(end) as Real / days_in_year(y1) as Real);
        }
        let dec31 = CalendarDate::new(y1, 12, 31)?;
        let jan1 = CalendarDate::new(y2, 1, 1)?;
        let first = (start.days_until(dec31) + 1) as Real / days_in_year(y1) as Real;
        let whole = (i64::from(y2) - i64::from(y1) - 1) as Real;
        let last = jan1.days_until(end) as Real / days_in_year(y2) as Real;
        Ok(first + whole + last)
    }
}

/// Actual/360 day counter.
///
/// `year_fraction = actual_days / 360`
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual360;

impl DayCounter for Actual360 {
    fn name(&self) -> &'static str {
        "Actual/360"
    }

    fn day_count(&self, start: CalendarDate, end: CalendarDate) -> Result<DayCount> {
        check_order(start, end)?;
        Ok(start.days_until(end))
    }

    fn year_fraction(&self, start: CalendarDate, end: CalendarDate) -> Result<Time> {
        Ok(self.day_count(start, end)? as Real / 360.0)
    }
}

/// Actual/365 (Fixed) day counter.
///
/// `year_fraction = actual_days / 365`, leap years included.
#[derive(Debug, Clone, Copy, Default)]
pub struct Actual365Fixed;

impl DayCounter for Actual365Fixed {
    fn name(&self) -> &'static str {
        "Actual/365 (Fixed)"
    }

    fn day_count(&self, start: CalendarDate, end: CalendarDate) -> Result<DayCount> {
        check_order(start, end)?;
        Ok(start.days_until(end))
    }

    fn year_fraction(&self, start: CalendarDate, end: CalendarDate) -> Result<Time> {
        Ok(self.day_count(start, end)? as Real / 365.0)
    }
}

/// Thirty/360 day counter (US Bond Basis).
///
/// `day_count = 360(Y2−Y1) + 30(M2−M1) + (D2−D1)` after clamping: a start
/// day of 31 becomes 30, and an end day of 31 becomes 30 when the original
/// start day was 30 or 31.  Dates may be given in either order.
#[derive(Debug, Clone, Copy, Default)]
pub struct Thirty360;

impl DayCounter for Thirty360 {
    fn name(&self) -> &'static str {
        "30/360 (Bond Basis)"
    }

    fn day_count(&self, start: CalendarDate, end: CalendarDate) -> Result<DayCount> {
        let y1 = i64::from(start.year());
        let m1 = i64::from(start.month());
        let d1_orig = i64::from(start.day());
        let y2 = i64::from(end.year());
        let m2 = i64::from(end.month());
        let mut d2 = i64::from(end.day());

        let d1 = if d1_orig == 31 { 30 } else { d1_orig };
        if d2 == 31 && d1_orig >= 30 {
            d2 = 30;
        }

        Ok(360 * (y2 - y1) + 30 * (m2 - m1) + (d2 - d1))
    }

    fn year_fraction(&self, start: CalendarDate, end: CalendarDate) -> Result<Time> {
        Ok(self.day_count(start, end)? as Real / 360.0)
    }
}

// ── Run-time selection ────────────────────────────────────────────────────────

/// The day-count conventions, selectable at run time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum DayCountConvention {
    /// [`ActualActualIsda`].
    ActualActual,
    /// [`Actual360`].
    Actual360,
    /// [`Actual365Fixed`].
    Actual365Fixed,
    /// [`Thirty360`].
    Thirty360,
}

impl DayCountConvention {
    /// All conventions, in code order.
    pub const ALL: [DayCountConvention; 4] = [
        DayCountConvention::ActualActual,
        DayCountConvention::Actual360,
        DayCountConvention::Actual365Fixed,
        DayCountConvention::Thirty360,
    ];

    /// The day counter implementing this convention.
    pub fn counter(&self) -> &'static dyn DayCounter {
        match self {
            DayCountConvention::ActualActual => &ActualActualIsda,
            DayCountConvention::Actual360 => &Actual360,
            DayCountConvention::Actual365Fixed => &Actual365Fixed,
            DayCountConvention::Thirty360 => &Thirty360,
        }
    }
}

impl DayCounter for DayCountConvention {
    fn name(&self) -> &'static str {
        self.counter().name()
    }

    fn day_count(&self, start: CalendarDate, end: CalendarDate) -> Result<DayCount> {
        self.counter().day_count(start, end)
    }

    fn year_fraction(&self, start: CalendarDate, end: CalendarDate) -> Result<Time> {
        self.counter().year_fraction(start, end)
    }
}

impl TryFrom<u8> for DayCountConvention {
    type Error = Error;

    /// Codes 0–3 in the order of [`DayCountConvention::ALL`].
    fn try_from(code: u8) -> Result<Self> {
        Self::ALL.get(code as usize).copied().ok_or_else(|| {
            Error::UnhandledConvention(format!("day count convention code {code}"))
        })
    }
}

impl FromStr for DayCountConvention {
    type Err = Error;

    /// Accepts the display names and the common short forms (`"ACT/360"`,
    /// `"30/360"`, `"Actual/Actual"`), in any case.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && !matches!(c, '(' | ')' | '_'))
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "actual/actualisda" | "actual/actual" | "act/act" | "actualactual" => {
                Ok(DayCountConvention::ActualActual)
            }
            "actual/360" | "act/360" | "actual360" => Ok(DayCountConvention::Actual360),
            "actual/365fixed" | "act/365" | "act/365f" | "actual365fixed" => {
                Ok(DayCountConvention::Actual365Fixed)
            }
            "30/360bondbasis" | "30/360" | "thirty360" => Ok(DayCountConvention::Thirty360),
            _ => Err(Error::UnhandledConvention(format!(
                "unknown day count convention {s:?}"
            ))),
        }
    }
}

impl std::fmt::Display for DayCountConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Day count between `start` and `end` under `convention`.
///
/// # Errors
/// See [`DayCounter::day_count`].
pub fn day_count(
    start: CalendarDate,
    end: CalendarDate,
    convention: DayCountConvention,
) -> Result<DayCount> {
    convention.day_count(start, end)
}

/// Year fraction between `start` and `end` under `convention`.
///
/// # Errors
/// See [`DayCounter::year_fraction`].
pub fn year_fraction(
    start: CalendarDate,
    end: CalendarDate,
    convention: DayCountConvention,
) -> Result<Time> {
    convention.year_fraction(start, end)
}
