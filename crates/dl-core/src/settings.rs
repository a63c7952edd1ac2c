//! Process-wide library settings.
//!
//! [`Settings`] holds the **default weekend**: the weekdays treated as
//! non-business days when a caller does not supply its own weekend set.  It is
//! a process-wide singleton accessed via a `std::sync::OnceLock`.
//!
//! The weekend is stored as a 7-bit mask (bit `n` set means weekday `n` is a
//! weekend day, with 0 = Sunday … 6 = Saturday) so that this crate does not
//! depend on the typed `Weekday` of `dl-time`.
//!
//! Thread safety: the mask is stored behind a `Mutex` so that it can be
//! changed from any thread.  Code that changes it should restore it when done.

use std::sync::{Mutex, MutexGuard, OnceLock};

/// Weekend mask used when nothing has been configured: Saturday and Sunday.
pub const SATURDAY_SUNDAY_MASK: u8 = (1 << 0) | (1 << 6);

/// All seven weekday bits.
pub const ALL_DAYS_MASK: u8 = 0b0111_1111;

/// Process-wide settings used by the datelib crates.
pub struct Settings {
    default_weekend: Mutex<Option<u8>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            default_weekend: Mutex::new(None),
        })
    }

    fn lock(&self) -> MutexGuard<'_, Option<u8>> {
        // A poisoned lock still holds a valid mask.
        self.default_weekend
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// Return the configured default weekend mask, or
    /// [`SATURDAY_SUNDAY_MASK`] if none has been set.
    pub fn default_weekend_mask(&self) -> u8 {
        self.lock().unwrap_or(SATURDAY_SUNDAY_MASK)
    }

    /// Return `true` if a default weekend has been explicitly configured.
    pub fn has_default_weekend(&self) -> bool {
        self.lock().is_some()
    }

    /// Set the default weekend mask.  Bits above bit 6 are ignored.
    pub fn set_default_weekend_mask(&self, mask: u8) {
        *self.lock() = Some(mask & ALL_DAYS_MASK);
    }

    /// Clear the configured weekend, reverting to Saturday and Sunday.
    pub fn reset_default_weekend(&self) {
        *self.lock() = None;
    }
}

/// Sets the default weekend for the lifetime of the guard and restores the
/// previous configuration on drop.
///
/// # Example
/// ```
/// use dl_core::settings::{ScopedDefaultWeekend, Settings, SATURDAY_SUNDAY_MASK};
///
/// {
///     let _guard = ScopedDefaultWeekend::new(0b0110_0000); // Friday + Saturday
///     assert_eq!(Settings::instance().default_weekend_mask(), 0b0110_0000);
/// }
/// assert_eq!(Settings::instance().default_weekend_mask(), SATURDAY_SUNDAY_MASK);
/// ```
pub struct ScopedDefaultWeekend {
    previous: Option<u8>,
}

impl ScopedDefaultWeekend {
    /// Install `mask` as the default weekend until the guard is dropped.
    pub fn new(mask: u8) -> Self {
        let settings = Settings::instance();
        let mut slot = settings.lock();
        let previous = *slot;
        *slot = Some(mask & ALL_DAYS_MASK);
        Self { previous }
    }
}

impl Drop for ScopedDefaultWeekend {
    fn drop(&mut self) {
        *Settings::instance().lock() = self.previous;
    }
}
