//! Business-day convention: how a date falling on a non-business day is
//! rolled onto a business day.

use std::str::FromStr;

use dl_core::errors::{Error, Result};

/// How to adjust a date that falls on a non-business day.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BusinessDayConvention {
    /// Choose the first business day after the given holiday.
    Following,
    /// Choose the first business day after the given holiday unless it belongs
    /// to a different month; in that case choose the first business day before
    /// the holiday.
    ModifiedFollowing,
    /// Choose the first business day before the given holiday.
    Preceding,
    /// Choose the first business day before the given holiday unless it belongs
    /// to a different month; in that case choose the first business day after
    /// the holiday.
    ModifiedPreceding,
    /// Do not adjust (keep the original date).
    Unadjusted,
}

impl BusinessDayConvention {
    /// All conventions, in code order.
    pub const ALL: [BusinessDayConvention; 5] = [
        BusinessDayConvention::Following,
        BusinessDayConvention::ModifiedFollowing,
        BusinessDayConvention::Preceding,
        BusinessDayConvention::ModifiedPreceding,
        BusinessDayConvention::Unadjusted,
    ];
}

impl TryFrom<u8> for BusinessDayConvention {
    type Error = Error;

    /// Codes 0–4 in the order of [`BusinessDayConvention::ALL`].
    fn try_from(code: u8) -> Result<Self> {
        Self::ALL.get(code as usize).copied().ok_or_else(|| {
            Error::UnhandledConvention(format!("business day convention code {code}"))
        })
    }
}

impl FromStr for BusinessDayConvention {
    type Err = Error;

    /// Accepts the display names with or without spaces, in any case
    /// (`"Modified Following"`, `"modifiedfollowing"`), plus the usual short
    /// codes `F`, `MF`, `P`, `MP`, `U`.
    fn from_str(s: &str) -> Result<Self> {
        let key: String = s
            .chars()
            .filter(|c| !c.is_whitespace() && *c != '_' && *c != '-')
            .collect::<String>()
            .to_ascii_lowercase();
        match key.as_str() {
            "following" | "f" => Ok(BusinessDayConvention::Following),
            "modifiedfollowing" | "mf" => Ok(BusinessDayConvention::ModifiedFollowing),
            "preceding" | "p" => Ok(BusinessDayConvention::Preceding),
            "modifiedpreceding" | "mp" => Ok(BusinessDayConvention::ModifiedPreceding),
            "unadjusted" | "u" => Ok(BusinessDayConvention::Unadjusted),
            _ => Err(Error::UnhandledConvention(format!(
                "unknown business day convention {s:?}"
            ))),
        }
    }
}

impl std::fmt::Display for BusinessDayConvention {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            BusinessDayConvention::Following => "Following",
            BusinessDayConvention::ModifiedFollowing => "Modified Following",
            BusinessDayConvention::Preceding => "Preceding",
            BusinessDayConvention::ModifiedPreceding => "Modified Preceding",
            BusinessDayConvention::Unadjusted => "Unadjusted",
        };
        write!(f, "{s}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes() {
        assert_eq!(
            BusinessDayConvention::try_from(1).unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!(matches!(
            BusinessDayConvention::try_from(5),
            Err(Error::UnhandledConvention(_))
        ));
    }

    #[test]
    fn names_round_trip() {
        for conv in BusinessDayConvention::ALL {
            assert_eq!(conv.to_string().parse::<BusinessDayConvention>().unwrap(), conv);
        }
        assert_eq!(
            "MF".parse::<BusinessDayConvention>().unwrap(),
            BusinessDayConvention::ModifiedFollowing
        );
        assert!(matches!(
            "Nearest".parse::<BusinessDayConvention>(),
            Err(Error::UnhandledConvention(_))
        ));
    }
}
