//! `WeekendDays` — the set of weekdays a market does not trade on.

use crate::weekday::Weekday;
use dl_core::settings::{Settings, ALL_DAYS_MASK, SATURDAY_SUNDAY_MASK};

/// A set of weekend weekdays, stored as a 7-bit mask (bit `n` = weekday `n`).
///
/// [`WeekendDays::default`] is the process-wide default weekend configured
/// in [`Settings`]; Saturday and Sunday unless changed.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WeekendDays(u8);

impl WeekendDays {
    /// Saturday and Sunday.
    pub const fn saturday_sunday() -> Self {
        WeekendDays(SATURDAY_SUNDAY_MASK)
    }

    /// Friday and Saturday (much of the Middle East).
    pub const fn friday_saturday() -> Self {
        WeekendDays((1 << Weekday::Friday as u8) | (1 << Weekday::Saturday as u8))
    }

    /// Sunday only.
    pub const fn sunday_only() -> Self {
        WeekendDays(1 << Weekday::Sunday as u8)
    }

    /// No weekend: a seven-day working week.
    pub const fn none() -> Self {
        WeekendDays(0)
    }

    /// Construct from a raw mask; bits above bit 6 are ignored.
    pub const fn from_mask(mask: u8) -> Self {
        WeekendDays(mask & ALL_DAYS_MASK)
    }

    /// The raw mask.
    pub const fn mask(&self) -> u8 {
        self.0
    }

    /// Return `true` if `weekday` is a weekend day.
    pub fn contains(&self, weekday: Weekday) -> bool {
        self.0 & (1 << weekday.number()) != 0
    }

    /// Add `weekday` to the weekend.
    pub fn insert(&mut self, weekday: Weekday) {
        self.0 |= 1 << weekday.number();
    }

    /// Remove `weekday` from the weekend.
    pub fn remove(&mut self, weekday: Weekday) {
        self.0 &= !(1 << weekday.number());
    }

    /// Number of weekend days.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Return `true` for a seven-day working week.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the weekend days, Sunday first.
    pub fn iter(&self) -> impl Iterator<Item = Weekday> + '_ {
        Weekday::ALL.into_iter().filter(|wd| self.contains(*wd))
    }

    /// Make this the process-wide default weekend.
    pub fn set_as_default(self) {
        Settings::instance().set_default_weekend_mask(self.0);
    }
}

impl Default for WeekendDays {
    fn default() -> Self {
        WeekendDays(Settings::instance().default_weekend_mask())
    }
}

impl FromIterator<Weekday> for WeekendDays {
    fn from_iter<I: IntoIterator<Item = Weekday>>(iter: I) -> Self {
        let mut set = WeekendDays::none();
        for wd in iter {
            set.insert(wd);
        }
        set
    }
}

impl std::fmt::Debug for WeekendDays {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn presets() {
        let ss = WeekendDays::saturday_sunday();
        assert!(ss.contains(Weekday::Saturday));
        assert!(ss.contains(Weekday::Sunday));
        assert!(!ss.contains(Weekday::Friday));
        assert_eq!(ss.len(), 2);

        let fs = WeekendDays::friday_saturday();
        assert!(fs.contains(Weekday::Friday));
        assert!(!fs.contains(Weekday::Sunday));

        assert_eq!(WeekendDays::sunday_only().iter().collect::<Vec<_>>(), vec![Weekday::Sunday]);
        assert!(WeekendDays::none().is_empty());
    }

    #[test]
    fn insert_remove() {
        let mut set = WeekendDays::none();
        set.insert(Weekday::Friday);
        set.insert(Weekday::Friday);
        assert_eq!(set.len(), 1);
        set.remove(Weekday::Friday);
        assert!(set.is_empty());
    }

    #[test]
    fn from_iter_and_mask() {
        let set: WeekendDays = [Weekday::Saturday, Weekday::Sunday].into_iter().collect();
        assert_eq!(set, WeekendDays::saturday_sunday());
        assert_eq!(WeekendDays::from_mask(0xFF).len(), 7);
        assert_eq!(format!("{set:?}"), "{Sunday, Saturday}");
    }
}
