//! Yearly holiday rules.
//!
//! A [`HolidayRule`] produces at most one holiday per year.  The three rule
//! shapes form a closed enum, so a calendar can own a plain
//! `Vec<HolidayRule>` and copying it is an ordinary `clone`.

use crate::date::CalendarDate;
use crate::weekday::Weekday;
use dl_core::errors::{Error, Result};
use dl_core::{ensure, Year};

/// Which occurrence of a weekday within a month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Occurrence {
    /// 1st.
    First,
    /// 2nd.
    Second,
    /// 3rd.
    Third,
    /// 4th.
    Fourth,
    /// 5th (does not exist in every month).
    Fifth,
    /// The last one in the month (always exists).
    Last,
}

impl Occurrence {
    /// The 1-based position, or `None` for [`Occurrence::Last`].
    pub fn ordinal(&self) -> Option<u8> {
        match self {
            Occurrence::First => Some(1),
            Occurrence::Second => Some(2),
            Occurrence::Third => Some(3),
            Occurrence::Fourth => Some(4),
            Occurrence::Fifth => Some(5),
            Occurrence::Last => None,
        }
    }

    /// Construct from a 1-based position (1–5).
    pub fn from_ordinal(n: u8) -> Option<Self> {
        match n {
            1 => Some(Occurrence::First),
            2 => Some(Occurrence::Second),
            3 => Some(Occurrence::Third),
            4 => Some(Occurrence::Fourth),
            5 => Some(Occurrence::Fifth),
            _ => None,
        }
    }
}

/// A rule that yields zero or one holiday date for a given year.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HolidayRule {
    /// A single absolute date; only applies to that date's year.
    Explicit {
        /// Display name.
        name: String,
        /// The holiday.
        date: CalendarDate,
    },
    /// The same month/day every year (e.g. Christmas, 12/25).
    Fixed {
        /// Display name.
        name: String,
        /// Month (1–12).
        month: u8,
        /// Day of month (1–31).
        day: u8,
    },
    /// The n-th (or last) given weekday of a month (e.g. Thanksgiving, the
    /// 4th Thursday of November).
    NthWeekday {
        /// Display name.
        name: String,
        /// Month (1–12).
        month: u8,
        /// Target weekday.
        weekday: Weekday,
        /// Which occurrence.
        occurrence: Occurrence,
    },
}

impl HolidayRule {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// A one-off holiday on `date`.
    pub fn explicit(name: impl Into<String>, date: CalendarDate) -> Self {
        HolidayRule::Explicit {
            name: name.into(),
            date,
        }
    }

    /// A holiday on `month`/`day` every year.
    ///
    /// A day that does not exist in some years (Feb 29) is accepted; the rule
    /// is simply not applicable in those years.  A day the month never has
    /// (Apr 31, Feb 30) is rejected here, unlike a plain month/day pair that
    /// would silently never apply.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the month is outside 1–12 or the
    /// day outside 1–31, or if the day never occurs in that month (Apr 31).
    pub fn fixed(name: impl Into<String>, month: u8, day: u8) -> Result<Self> {
        ensure!((1..=12).contains(&month), "month must be between 1 and 12, got {month}");
        ensure!((1..=31).contains(&day), "day must be between 1 and 31, got {day}");
        // 2000 is a leap year, so this is the longest each month gets.
        ensure!(
            day <= crate::date::days_in_month(2000, month),
            "{month:02}/{day:02} never occurs"
        );
        Ok(HolidayRule::Fixed {
            name: name.into(),
            month,
            day,
        })
    }

    /// A holiday on the `occurrence`-th `weekday` of `month` every year.
    ///
    /// # Errors
    /// Returns [`Error::InvalidArgument`] if the month is outside 1–12.
    pub fn nth_weekday(
        name: impl Into<String>,
        month: u8,
        weekday: Weekday,
        occurrence: Occurrence,
    ) -> Result<Self> {
        ensure!((1..=12).contains(&month), "month must be between 1 and 12, got {month}");
        Ok(HolidayRule::NthWeekday {
            name: name.into(),
            month,
            weekday,
            occurrence,
        })
    }

    // ── Evaluation ───────────────────────────────────────────────────────────

    /// The rule's display name.
    pub fn name(&self) -> &str {
        match self {
            HolidayRule::Explicit { name, .. }
            | HolidayRule::Fixed { name, .. }
            | HolidayRule::NthWeekday { name, .. } => name,
        }
    }

    /// Return `true` if the rule yields a holiday in `year`.
    pub fn applies_to(&self, year: Year) -> bool {
        self.date_in(year).is_some()
    }

    /// The rule's holiday in `year`, or `None` if it has none that year.
    pub fn date_in(&self, year: Year) -> Option<CalendarDate> {
        self.calculate_date(year).ok()
    }

    /// The rule's holiday in `year`.
    ///
    /// # Errors
    /// * [`Error::RuleNotApplicable`] for an explicit date in another year, or
    ///   a fixed month/day that does not exist in `year`.
    /// * [`Error::OccurrenceNotFound`] when the requested weekday occurrence
    ///   does not exist in that month of `year`.
    ///
    /// A rule whose fields are out of range (built without the validating
    /// constructors, or deserialized) reports [`Error::RuleNotApplicable`].
    pub fn calculate_date(&self, year: Year) -> Result<CalendarDate> {
        match self {
            HolidayRule::Explicit { name, date } => {
                if date.year() == year {
                    Ok(*date)
                } else {
                    Err(Error::RuleNotApplicable(format!(
                        "{name}: explicit date {date} is not in {year}"
                    )))
                }
            }
            HolidayRule::Fixed { name, month, day } => CalendarDate::new(year, *month, *day)
                .map_err(|_| {
                    Error::RuleNotApplicable(format!(
                        "{name}: {month:02}/{day:02} does not exist in {year}"
                    ))
                }),
            HolidayRule::NthWeekday {
                name,
                month,
                weekday,
                occurrence,
            } => {
                let found = match occurrence.ordinal() {
                    Some(n) => CalendarDate::nth_weekday(n, *weekday, year, *month),
                    None => CalendarDate::last_weekday(*weekday, year, *month),
                };
                // A month outside 1-12 only gets here by building the variant
                // directly; such a rule has no date in any year.
                found.map_err(|e| match e {
                    Error::OccurrenceNotFound(msg) => {
                        Error::OccurrenceNotFound(format!("{name}: {msg}"))
                    }
                    other => Error::RuleNotApplicable(format!("{name}: {other}")),
                })
            }
        }
    }
}

impl std::fmt::Display for HolidayRule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HolidayRule::Explicit { name, date } => write!(f, "{name} ({date})"),
            HolidayRule::Fixed { name, month, day } => write!(f, "{name} ({month:02}/{day:02})"),
            HolidayRule::NthWeekday {
                name,
                month,
                weekday,
                occurrence,
            } => write!(f, "{name} ({occurrence:?} {weekday} of month {month})"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: Year, m: u8, d: u8) -> CalendarDate {
        CalendarDate::new(y, m, d).unwrap()
    }

    #[test]
    fn explicit_rule() {
        let rule = HolidayRule::explicit("Jubilee", date(2022, 6, 3));
        assert_eq!(rule.name(), "Jubilee");
        assert!(rule.applies_to(2022));
        assert!(!rule.applies_to(2023));
        assert_eq!(rule.calculate_date(2022).unwrap(), date(2022, 6, 3));
        assert!(matches!(
            rule.calculate_date(2023),
            Err(Error::RuleNotApplicable(_))
        ));
    }

    #[test]
    fn fixed_rule() {
        let christmas = HolidayRule::fixed("Christmas", 12, 25).unwrap();
        assert_eq!(christmas.calculate_date(2024).unwrap(), date(2024, 12, 25));
        assert_eq!(christmas.calculate_date(1999).unwrap(), date(1999, 12, 25));
        assert!(christmas.applies_to(2100));
    }

    #[test]
    fn fixed_rule_leap_day() {
        let leap = HolidayRule::fixed("Leap Day", 2, 29).unwrap();
        assert!(leap.applies_to(2024));
        assert!(!leap.applies_to(2023));
        assert!(!leap.applies_to(2100));
        assert!(matches!(
            leap.calculate_date(2023),
            Err(Error::RuleNotApplicable(_))
        ));
        assert_eq!(leap.date_in(2000), Some(date(2000, 2, 29)));
    }

    #[test]
    fn fixed_rule_validation() {
        assert!(matches!(HolidayRule::fixed("x", 0, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(HolidayRule::fixed("x", 13, 1), Err(Error::InvalidArgument(_))));
        assert!(matches!(HolidayRule::fixed("x", 1, 0), Err(Error::InvalidArgument(_))));
        assert!(matches!(HolidayRule::fixed("x", 1, 32), Err(Error::InvalidArgument(_))));
        assert!(matches!(HolidayRule::fixed("x", 4, 31), Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn thanksgiving() {
        let rule =
            HolidayRule::nth_weekday("Thanksgiving", 11, Weekday::Thursday, Occurrence::Fourth)
                .unwrap();
        assert_eq!(rule.calculate_date(2024).unwrap(), date(2024, 11, 28));
        assert_eq!(rule.calculate_date(2023).unwrap(), date(2023, 11, 23));
        assert!(rule.applies_to(2024));
    }

    #[test]
    fn fifth_occurrence_may_not_exist() {
        let rule =
            HolidayRule::nth_weekday("Fifth Monday", 9, Weekday::Monday, Occurrence::Fifth)
                .unwrap();
        // September 2024 has five Mondays (2, 9, 16, 23, 30)
        assert_eq!(rule.calculate_date(2024).unwrap(), date(2024, 9, 30));
        // September 2025: 1, 8, 15, 22, 29
        assert_eq!(rule.calculate_date(2025).unwrap(), date(2025, 9, 29));
        // September 2023 has four Mondays (4, 11, 18, 25)
        assert!(!rule.applies_to(2023));
        assert!(matches!(
            rule.calculate_date(2023),
            Err(Error::OccurrenceNotFound(_))
        ));
    }

    #[test]
    fn last_occurrence() {
        let memorial =
            HolidayRule::nth_weekday("Memorial Day", 5, Weekday::Monday, Occurrence::Last)
                .unwrap();
        assert_eq!(memorial.calculate_date(2024).unwrap(), date(2024, 5, 27));
        assert_eq!(memorial.calculate_date(2021).unwrap(), date(2021, 5, 31));
        for year in 1990..2030 {
            assert!(memorial.applies_to(year));
        }
    }

    #[test]
    fn nth_weekday_validation() {
        assert!(matches!(
            HolidayRule::nth_weekday("x", 13, Weekday::Monday, Occurrence::First),
            Err(Error::InvalidArgument(_))
        ));
        assert_eq!(Occurrence::from_ordinal(3), Some(Occurrence::Third));
        assert_eq!(Occurrence::from_ordinal(6), None);
        assert_eq!(Occurrence::Last.ordinal(), None);
    }

    #[test]
    fn unvalidated_fields_are_not_applicable() {
        for occurrence in [Occurrence::First, Occurrence::Last] {
            let rule = HolidayRule::NthWeekday {
                name: "Nowhere".into(),
                month: 13,
                weekday: Weekday::Monday,
                occurrence,
            };
            assert!(
                matches!(rule.calculate_date(2024), Err(Error::RuleNotApplicable(_))),
                "{occurrence:?}"
            );
            assert!(!rule.applies_to(2024));
        }
        let rule = HolidayRule::Fixed {
            name: "Nowhere".into(),
            month: 0,
            day: 40,
        };
        assert!(matches!(rule.calculate_date(2024), Err(Error::RuleNotApplicable(_))));
    }

    #[test]
    fn clone_is_independent() {
        let original = HolidayRule::fixed("New Year", 1, 1).unwrap();
        let mut copy = original.clone();
        if let HolidayRule::Fixed { name, .. } = &mut copy {
            name.push_str(" (observed)");
        }
        assert_eq!(original.name(), "New Year");
        assert_eq!(copy.name(), "New Year (observed)");
    }
}
