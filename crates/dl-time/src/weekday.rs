//! `Weekday` — day-of-week enum.

use std::str::FromStr;

use dl_core::errors::{Error, Result};

/// Day of the week.
///
/// Variants are numbered 0–6 (Sunday = 0, Saturday = 6), the numbering
/// returned by [`CalendarDate::day_of_week`](crate::date::CalendarDate::day_of_week).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[repr(u8)]
pub enum Weekday {
    /// Sunday (0).
    Sunday = 0,
    /// Monday (1).
    Monday = 1,
    /// Tuesday (2).
    Tuesday = 2,
    /// Wednesday (3).
    Wednesday = 3,
    /// Thursday (4).
    Thursday = 4,
    /// Friday (5).
    Friday = 5,
    /// Saturday (6).
    Saturday = 6,
}

impl Weekday {
    /// All weekdays, Sunday first.
    pub const ALL: [Weekday; 7] = [
        Weekday::Sunday,
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
    ];

    /// Construct from the day number (0 = Sunday … 6 = Saturday).
    ///
    /// Returns `None` if the value is out of range.
    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(n as usize).copied()
    }

    /// Return the day number (0 = Sunday … 6 = Saturday).
    pub fn number(&self) -> u8 {
        *self as u8
    }

    /// The weekday `n` days after this one (negative `n` goes backwards).
    pub fn shifted(self, n: i64) -> Self {
        let idx = (self.number() as i64 + n).rem_euclid(7) as usize;
        Self::ALL[idx]
    }

    /// Three-letter abbreviation (`"Sun"`, `"Mon"`, …).
    pub fn short_name(&self) -> &'static str {
        &self.name()[..3]
    }

    fn name(&self) -> &'static str {
        match self {
            Weekday::Sunday => "Sunday",
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
        }
    }
}

impl std::fmt::Display for Weekday {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Weekday {
    type Err = Error;

    /// Accepts full names or three-letter abbreviations, in any case.
    fn from_str(s: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|wd| s.eq_ignore_ascii_case(wd.name()) || s.eq_ignore_ascii_case(wd.short_name()))
            .ok_or_else(|| Error::InvalidFormat(format!("unknown weekday {s:?}")))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbering() {
        assert_eq!(Weekday::from_number(0), Some(Weekday::Sunday));
        assert_eq!(Weekday::from_number(6), Some(Weekday::Saturday));
        assert_eq!(Weekday::from_number(7), None);
        for wd in Weekday::ALL {
            assert_eq!(Weekday::from_number(wd.number()), Some(wd));
        }
    }

    #[test]
    fn shifted_wraps() {
        assert_eq!(Weekday::Saturday.shifted(1), Weekday::Sunday);
        assert_eq!(Weekday::Sunday.shifted(-1), Weekday::Saturday);
        assert_eq!(Weekday::Wednesday.shifted(14), Weekday::Wednesday);
    }

    #[test]
    fn parse_names() {
        assert_eq!("thursday".parse::<Weekday>().unwrap(), Weekday::Thursday);
        assert_eq!("FRI".parse::<Weekday>().unwrap(), Weekday::Friday);
        assert!("Thurs".parse::<Weekday>().is_err());
        assert_eq!(Weekday::Tuesday.to_string(), "Tuesday");
    }
}
