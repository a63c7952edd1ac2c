//! `Period` — a signed time span expressed in a [`TimeUnit`], and the tenor
//! string parser (`"3M"`, `"-10Y"`, `"5d"`).

use std::str::FromStr;

use crate::time_unit::TimeUnit;
use dl_core::errors::{Error, Result};

/// A time span made up of a signed integer count and a [`TimeUnit`].
///
/// A zero count is legal and advances nothing.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Period {
    /// Number of units.
    pub value: i32,
    /// The unit of time.
    pub unit: TimeUnit,
}

impl Period {
    /// Create a new period.
    pub fn new(value: i32, unit: TimeUnit) -> Self {
        Self { value, unit }
    }

    /// Shorthand for `Period::new(n, TimeUnit::Days)`.
    pub fn days(n: i32) -> Self {
        Self::new(n, TimeUnit::Days)
    }

    /// Shorthand for `Period::new(n, TimeUnit::Weeks)`.
    pub fn weeks(n: i32) -> Self {
        Self::new(n, TimeUnit::Weeks)
    }

    /// Shorthand for `Period::new(n, TimeUnit::Months)`.
    pub fn months(n: i32) -> Self {
        Self::new(n, TimeUnit::Months)
    }

    /// Shorthand for `Period::new(n, TimeUnit::Years)`.
    pub fn years(n: i32) -> Self {
        Self::new(n, TimeUnit::Years)
    }

    /// Parse a single-unit tenor string.
    ///
    /// Grammar: `[+-]?[0-9]+[DdWwMmYy]`.  No whitespace is allowed and
    /// combined tenors such as `"1Y6M"` are rejected.
    ///
    /// # Errors
    /// * [`Error::InvalidFormat`] if `s` does not match the grammar.
    /// * [`Error::NumericOverflow`] if the signed count does not fit an `i32`.
    ///
    /// # Example
    /// ```
    /// use dl_time::{Period, TimeUnit};
    /// assert_eq!(Period::parse("-3m").unwrap(), Period::new(-3, TimeUnit::Months));
    /// assert!(Period::parse("1Y6M").is_err());
    /// ```
    pub fn parse(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(Error::InvalidFormat("period string cannot be empty".into()));
        }
        let bytes = s.as_bytes();
        let digits_start = usize::from(matches!(bytes[0], b'+' | b'-'));
        let digits_end = digits_start
            + bytes[digits_start..]
                .iter()
                .take_while(|b| b.is_ascii_digit())
                .count();
        if digits_end == digits_start {
            return Err(Error::InvalidFormat(format!(
                "period string must contain a numeric value: {s:?}"
            )));
        }
        // Everything after the digits must be exactly one ASCII unit letter.
        let unit = match &bytes[digits_end..] {
            [c] => TimeUnit::from_letter(*c as char).ok_or_else(|| {
                Error::InvalidFormat(format!(
                    "invalid period unit '{}', must be D, W, M, or Y: {s:?}",
                    *c as char
                ))
            })?,
            _ => {
                return Err(Error::InvalidFormat(format!(
                    "period string must end with a single unit character (D/W/M/Y): {s:?}"
                )))
            }
        };
        let value: i32 = s[..digits_end].parse().map_err(|_| {
            Error::NumericOverflow(format!("period value out of range: {s:?}"))
        })?;
        Ok(Self { value, unit })
    }

    /// Negate the period (reverse direction), saturating at the `i32`
    /// bounds: negating `i32::MIN` units gives `i32::MAX` units.
    pub fn negated(self) -> Self {
        Self {
            value: self.value.saturating_neg(),
            unit: self.unit,
        }
    }

    /// Negate the period.
    ///
    /// # Errors
    /// Returns [`Error::NumericOverflow`] for a count of `i32::MIN`.
    pub fn checked_negated(self) -> Result<Self> {
        let value = self.value.checked_neg().ok_or_else(|| {
            Error::NumericOverflow(format!("cannot negate period {self}"))
        })?;
        Ok(Self::new(value, self.unit))
    }

    /// Multiply the count by `factor`.
    ///
    /// # Errors
    /// Returns [`Error::NumericOverflow`] if the product does not fit an `i32`.
    pub fn checked_mul(self, factor: i32) -> Result<Self> {
        let value = self.value.checked_mul(factor).ok_or_else(|| {
            Error::NumericOverflow(format!("period {self} times {factor} overflows"))
        })?;
        Ok(Self::new(value, self.unit))
    }

    /// Return `true` if the period advances nothing.
    pub fn is_zero(&self) -> bool {
        self.value == 0
    }
}

impl FromStr for Period {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

/// Saturating; see [`Period::negated`].
impl std::ops::Neg for Period {
    type Output = Self;
    fn neg(self) -> Self {
        self.negated()
    }
}

/// Saturating at the `i32` bounds; use [`Period::checked_mul`] to detect
/// overflow.
impl std::ops::Mul<i32> for Period {
    type Output = Self;
    fn mul(self, rhs: i32) -> Self {
        Period {
            value: self.value.saturating_mul(rhs),
            unit: self.unit,
        }
    }
}

impl std::ops::Mul<Period> for i32 {
    type Output = Period;
    fn mul(self, rhs: Period) -> Period {
        rhs * self
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}", self.value, self.unit.letter())
    }
}

impl std::fmt::Debug for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Period({self})")
    }
}
