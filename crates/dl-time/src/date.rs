//! `CalendarDate` — a validated proleptic-Gregorian calendar date.
//!
//! A date is stored as its (year, month, day) components.  Construction
//! validates the triple, so every `CalendarDate` value is a real date; there
//! is no null or invalid sentinel.
//!
//! Day arithmetic goes through a day number counted from 1970-01-01, which
//! makes differences and shifts O(1) for any `i32` year.

use std::str::FromStr;

use crate::weekday::Weekday;
use dl_core::errors::{Error, Result};
use dl_core::{DayCount, Year};

/// A calendar date.
///
/// Ordering and equality are lexicographic over (year, month, day).
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(try_from = "String", into = "String")
)]
pub struct CalendarDate {
    year: Year,
    month: u8,
    day: u8,
}

impl CalendarDate {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Create a date from year, month (1–12), and day-of-month.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the month is outside 1–12 or the day
    /// is outside `1..=days_in_month(year, month)`.
    pub fn new(year: Year, month: u8, day: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        let days_in = days_in_month(year, month);
        if day == 0 || day > days_in {
            return Err(Error::InvalidDate(format!(
                "day {day} out of range [1, {days_in}] for {year}-{month:02}"
            )));
        }
        Ok(Self { year, month, day })
    }

    /// The date `day_number` days after 1970-01-01.
    fn from_day_number(day_number: i64) -> Result<Self> {
        let (y, m, d) = civil_from_days(day_number);
        let year = Year::try_from(y)
            .map_err(|_| Error::InvalidDate(format!("year {y} out of range")))?;
        Ok(Self {
            year,
            month: m,
            day: d,
        })
    }

    /// The last calendar day of `year`/`month`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if `month` is outside 1–12.
    pub fn last_of_month(year: Year, month: u8) -> Result<Self> {
        if !(1..=12).contains(&month) {
            return Err(Error::InvalidDate(format!(
                "month {month} out of range [1, 12]"
            )));
        }
        Self::new(year, month, days_in_month(year, month))
    }

    /// January 1st of `year`.
    pub(crate) fn first_of_year(year: Year) -> Self {
        Self { year, month: 1, day: 1 }
    }

    /// December 31st of `year`.
    pub(crate) fn last_of_year(year: Year) -> Self {
        Self {
            year,
            month: 12,
            day: 31,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────────

    /// Return the year.
    pub fn year(&self) -> Year {
        self.year
    }

    /// Return the month (1–12).
    pub fn month(&self) -> u8 {
        self.month
    }

    /// Return the day of the month.
    pub fn day(&self) -> u8 {
        self.day
    }

    /// Return the day of the year (1–366).
    pub fn day_of_year(&self) -> u16 {
        let mut doy = self.day as u16;
        for mon in 1..self.month {
            doy += days_in_month(self.year, mon) as u16;
        }
        doy
    }

    /// Day of the week, 0 = Sunday … 6 = Saturday.
    ///
    /// Computed with Zeller's congruence.  January and February count as
    /// months 13 and 14 of the previous year; Zeller's Saturday-origin result
    /// is then shifted to a Sunday origin.
    pub fn day_of_week(&self) -> u8 {
        let mut y = self.year as i64;
        let mut m = self.month as i64;
        let d = self.day as i64;
        if m < 3 {
            m += 12;
            y -= 1;
        }
        let c = y.div_euclid(100);
        let k = y.rem_euclid(100);
        let h = (d + (13 * (m + 1)) / 5 + k + k / 4 + c.div_euclid(4) - 2 * c).rem_euclid(7);
        ((h + 6) % 7) as u8
    }

    /// Return the weekday.
    pub fn weekday(&self) -> Weekday {
        match Weekday::from_number(self.day_of_week()) {
            Some(wd) => wd,
            None => unreachable!("day_of_week is always in 0..=6"),
        }
    }

    // ── Arithmetic ────────────────────────────────────────────────────────────

    /// Days since 1970-01-01 (negative before).
    pub(crate) fn day_number(&self) -> i64 {
        days_from_civil(self.year as i64, self.month, self.day)
    }

    /// Advance by `n` calendar days (negative `n` goes backwards).
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the resulting year is not
    /// representable.
    pub fn add_days(self, n: i64) -> Result<Self> {
        let target = self
            .day_number()
            .checked_add(n)
            .ok_or_else(|| Error::InvalidDate(format!("{self} + {n} days overflows")))?;
        Self::from_day_number(target)
    }

    /// The next calendar day.
    pub fn succ(self) -> Result<Self> {
        self.add_days(1)
    }

    /// The previous calendar day.
    pub fn pred(self) -> Result<Self> {
        self.add_days(-1)
    }

    /// Signed number of calendar days from `self` to `other`.
    /// Positive if `other > self`.
    pub fn days_until(self, other: CalendarDate) -> DayCount {
        other.day_number() - self.day_number()
    }

    /// Return the last day of the month containing this date.
    pub fn end_of_month(self) -> Self {
        Self {
            day: days_in_month(self.year, self.month),
            ..self
        }
    }

    /// Return `true` if this is the last calendar day of its month.
    pub fn is_end_of_month(self) -> bool {
        self.day == days_in_month(self.year, self.month)
    }

    /// Return the *n*-th (1–5) occurrence of `weekday` in `year`/`month`.
    ///
    /// The first occurrence lies `(weekday - first_weekday + 7) mod 7` days
    /// after the 1st; each later one is a further 7 days on.
    ///
    /// # Errors
    /// Returns [`Error::OccurrenceNotFound`] if that occurrence falls outside
    /// the month, and [`Error::InvalidArgument`] if `n` is not in 1–5 or the
    /// month is invalid.
    pub fn nth_weekday(n: u8, weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        dl_core::ensure!((1..=5).contains(&n), "nth_weekday: n must be in [1, 5], got {n}");
        dl_core::ensure!((1..=12).contains(&month), "month {month} out of range [1, 12]");
        let first = Self::new(year, month, 1)?;
        let skip = (weekday.number() + 7 - first.day_of_week()) % 7;
        let day = 1 + skip + 7 * (n - 1);
        if day > days_in_month(year, month) {
            return Err(Error::OccurrenceNotFound(format!(
                "{n}-th {weekday} does not exist in {year}-{month:02}"
            )));
        }
        Self::new(year, month, day)
    }

    /// Return the last occurrence of `weekday` in `year`/`month`.
    ///
    /// # Errors
    /// Returns [`Error::InvalidDate`] if the month is invalid.
    pub fn last_weekday(weekday: Weekday, year: Year, month: u8) -> Result<Self> {
        let last = Self::last_of_month(year, month)?;
        let back = (last.day_of_week() + 7 - weekday.number()) % 7;
        Self::new(year, month, last.day - back)
    }
}

impl std::ops::Sub<CalendarDate> for CalendarDate {
    type Output = DayCount;

    /// `a - b` is the number of days from `b` to `a`.
    fn sub(self, rhs: CalendarDate) -> DayCount {
        rhs.days_until(self)
    }
}

// ── Formatting / parsing ──────────────────────────────────────────────────────

impl std::fmt::Display for CalendarDate {
    /// ISO 8601 (`YYYY-MM-DD`).
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:04}-{:02}-{:02}", self.year, self.month, self.day)
    }
}

impl std::fmt::Debug for CalendarDate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "CalendarDate({self})")
    }
}

impl FromStr for CalendarDate {
    type Err = Error;

    /// Parse an ISO 8601 date (`YYYY-MM-DD`, optional leading sign on the
    /// year).
    fn from_str(s: &str) -> Result<Self> {
        let bad = || Error::InvalidFormat(format!("expected YYYY-MM-DD, got {s:?}"));
        let (sign, rest) = match s.as_bytes().first() {
            Some(b'-') => (-1, &s[1..]),
            Some(b'+') => (1, &s[1..]),
            _ => (1, s),
        };
        let mut parts = rest.split('-');
        let (Some(y), Some(m), Some(d), None) =
            (parts.next(), parts.next(), parts.next(), parts.next())
        else {
            return Err(bad());
        };
        let all_digits = |p: &str| !p.is_empty() && p.bytes().all(|b| b.is_ascii_digit());
        if !all_digits(y) || m.len() != 2 || d.len() != 2 || !all_digits(m) || !all_digits(d) {
            return Err(bad());
        }
        // The year is all digits, so the only way either step fails is a
        // value too large, however many digits it has.
        let overflow = || Error::NumericOverflow(format!("year in {s:?} out of range"));
        let year: i64 = y.parse().map_err(|_| overflow())?;
        let year = Year::try_from(sign * year).map_err(|_| overflow())?;
        let month: u8 = m.parse().map_err(|_| bad())?;
        let day: u8 = d.parse().map_err(|_| bad())?;
        Self::new(year, month, day)
    }
}

impl TryFrom<String> for CalendarDate {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

impl From<CalendarDate> for String {
    fn from(d: CalendarDate) -> String {
        d.to_string()
    }
}

// ── Calendar helpers ──────────────────────────────────────────────────────────

/// Whether a given year is a leap year.
pub fn is_leap_year(year: Year) -> bool {
    year % 4 == 0 && (year % 100 != 0 || year % 400 == 0)
}

/// Number of days in a given month/year; 0 for a month outside 1–12.
pub fn days_in_month(year: Year, month: u8) -> u8 {
    match month {
        1 | 3 | 5 | 7 | 8 | 10 | 12 => 31,
        4 | 6 | 9 | 11 => 30,
        2 => {
            if is_leap_year(year) {
                29
            } else {
                28
            }
        }
        _ => 0,
    }
}

/// Number of days in a year (365 or 366).
pub fn days_in_year(year: Year) -> u16 {
    if is_leap_year(year) {
        366
    } else {
        365
    }
}

/// Days from 1970-01-01 to the given proleptic-Gregorian date.
fn days_from_civil(year: i64, month: u8, day: u8) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = (month as i64 + 9) % 12; // March = 0
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

/// Inverse of [`days_from_civil`].
fn civil_from_days(z: i64) -> (i64, u8, u8) {
    let z = z + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z - era * 146_097;
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u8;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u8;
    let y = yoe + era * 400 + i64::from(m <= 2);
    (y, m, d)
}

// ── Tests ─────────────────────────────────────────────────────────────────────
