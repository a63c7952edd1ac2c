//! `HolidayCalendar` — explicit holiday dates plus yearly holiday rules.
//!
//! A calendar is typically built once per market and queried many times.
//! Cloning it copies both the date set and every rule, so two calendars
//! never share state after a `clone`.

use std::collections::BTreeSet;

use tracing::trace;

use crate::date::CalendarDate;
use crate::holiday_rule::HolidayRule;
use dl_core::Year;

/// Name reported by [`HolidayCalendar::holiday_names`] for explicit dates.
pub const EXPLICIT_HOLIDAY_NAME: &str = "Holiday";

/// A set of holidays: explicit dates and rule-generated dates.
///
/// A date is a holiday iff it was added explicitly or some rule evaluates to
/// it for that date's year.  Rules that have no date in a year are skipped.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HolidayCalendar {
    explicit: BTreeSet<CalendarDate>,
    rules: Vec<HolidayRule>,
}

impl HolidayCalendar {
    /// Create an empty calendar (no holidays).
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder form of [`add_holiday`](Self::add_holiday).
    pub fn with_holiday(mut self, date: CalendarDate) -> Self {
        self.add_holiday(date);
        self
    }

    /// Builder form of [`add_rule`](Self::add_rule).
    pub fn with_rule(mut self, rule: HolidayRule) -> Self {
        self.add_rule(rule);
        self
    }

    // ── Mutation ──────────────────────────────────────────────────────────────

    /// Add an explicit holiday.  Adding the same date twice is a no-op.
    pub fn add_holiday(&mut self, date: CalendarDate) {
        self.explicit.insert(date);
    }

    /// Remove a previously added explicit holiday.  Returns `true` if it was
    /// present.  Rule-generated holidays are unaffected.
    pub fn remove_holiday(&mut self, date: CalendarDate) -> bool {
        self.explicit.remove(&date)
    }

    /// Append a holiday rule.
    pub fn add_rule(&mut self, rule: HolidayRule) {
        self.rules.push(rule);
    }

    /// Remove all explicit holidays and rules.
    pub fn clear(&mut self) {
        self.explicit.clear();
        self.rules.clear();
    }

    // ── Queries ───────────────────────────────────────────────────────────────

    /// The explicit holidays, in ascending order.
    pub fn explicit_holidays(&self) -> impl Iterator<Item = CalendarDate> + '_ {
        self.explicit.iter().copied()
    }

    /// The rules, in insertion order.
    pub fn rules(&self) -> &[HolidayRule] {
        &self.rules
    }

    /// Return `true` if the calendar has neither explicit holidays nor rules.
    pub fn is_empty(&self) -> bool {
        self.explicit.is_empty() && self.rules.is_empty()
    }

    /// Return `true` if `date` is a holiday.
    pub fn is_holiday(&self, date: CalendarDate) -> bool {
        self.explicit.contains(&date)
            || self
                .rule_dates(date.year())
                .any(|(_, rule_date)| rule_date == date)
    }

    /// All holidays in `year`, ascending and without duplicates.
    pub fn holidays(&self, year: Year) -> Vec<CalendarDate> {
        let mut out: BTreeSet<CalendarDate> = self
            .explicit
            .range(CalendarDate::first_of_year(year)..=CalendarDate::last_of_year(year))
            .copied()
            .collect();
        out.extend(self.rule_dates(year).map(|(_, d)| d));
        out.into_iter().collect()
    }

    /// Names of every holiday falling on `date`.
    ///
    /// An explicit holiday contributes [`EXPLICIT_HOLIDAY_NAME`]; each
    /// matching rule contributes its own name, in insertion order.  Empty if
    /// `date` is not a holiday.
    pub fn holiday_names(&self, date: CalendarDate) -> Vec<String> {
        let mut names = Vec::new();
        if self.explicit.contains(&date) {
            names.push(EXPLICIT_HOLIDAY_NAME.to_string());
        }
        names.extend(
            self.rule_dates(date.year())
                .filter(|(_, d)| *d == date)
                .map(|(rule, _)| rule.name().to_string()),
        );
        names
    }

    /// Evaluate every rule for `year`, skipping rules with no date that year.
    fn rule_dates(&self, year: Year) -> impl Iterator<Item = (&HolidayRule, CalendarDate)> + '_ {
        self.rules
            .iter()
            .filter_map(move |rule| match rule.calculate_date(year) {
                Ok(d) => Some((rule, d)),
                Err(e) => {
                    trace!(rule = rule.name(), year, error = %e, "holiday rule skipped");
                    None
                }
            })
    }
}

impl FromIterator<CalendarDate> for HolidayCalendar {
    fn from_iter<I: IntoIterator<Item = CalendarDate>>(iter: I) -> Self {
        Self {
            explicit: iter.into_iter().collect(),
            rules: Vec::new(),
        }
    }
}

impl Extend<HolidayRule> for HolidayCalendar {
    fn extend<I: IntoIterator<Item = HolidayRule>>(&mut self, iter: I) {
        self.rules.extend(iter);
    }
}
