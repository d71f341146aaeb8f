//! Global library settings.
//!
//! [`Settings`] holds the **reference date** used by the relative date
//! queries (`is_today`, `is_yesterday`, …).  It is a process-wide singleton
//! accessed via a `std::sync::OnceLock`.
//!
//! When no reference date has been set, "today" is the current UTC date.
//! Tests that pin the date should use [`ScopedToday`] so the previous value
//! is restored when the guard drops.

use std::sync::{Mutex, MutexGuard, OnceLock, PoisonError};

use chrono::{NaiveDate, Utc};
use tracing::debug;

/// Process-wide settings used by the chillisource helpers.
pub struct Settings {
    today: Mutex<Option<NaiveDate>>,
}

static INSTANCE: OnceLock<Settings> = OnceLock::new();

impl Settings {
    /// Return a reference to the global singleton.
    pub fn instance() -> &'static Settings {
        INSTANCE.get_or_init(|| Settings {
            today: Mutex::new(None),
        })
    }

    fn slot(&self) -> MutexGuard<'_, Option<NaiveDate>> {
        self.today.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Return the reference date: the override if one is set, otherwise the
    /// current UTC date.
    pub fn today(&self) -> NaiveDate {
        self.today_override()
            .unwrap_or_else(|| Utc::now().date_naive())
    }

    /// Return the override, if any.
    pub fn today_override(&self) -> Option<NaiveDate> {
        *self.slot()
    }

    /// Pin "today" to `date`.
    pub fn set_today(&self, date: NaiveDate) {
        debug!(%date, "reference date pinned");
        *self.slot() = Some(date);
    }

    /// Clear the override, resetting "today" to the system clock.
    pub fn reset_today(&self) {
        debug!("reference date reset to system clock");
        *self.slot() = None;
    }
}

/// RAII guard that pins [`Settings::today`] and restores the previous value
/// when dropped.
///
/// # Example
/// ```
/// use chrono::NaiveDate;
/// use cs_core::{ScopedToday, Settings};
///
/// let pinned = NaiveDate::from_ymd_opt(2016, 8, 1).unwrap();
/// {
///     let _guard = ScopedToday::new(pinned);
///     assert_eq!(Settings::instance().today(), pinned);
/// }
/// ```
#[must_use = "the reference date is restored as soon as the guard is dropped"]
pub struct ScopedToday {
    previous: Option<NaiveDate>,
}

impl ScopedToday {
    /// Pin "today" to `date` for the lifetime of the guard.
    pub fn new(date: NaiveDate) -> Self {
        let settings = Settings::instance();
        let previous = settings.today_override();
        settings.set_today(date);
        Self { previous }
    }
}

impl Drop for ScopedToday {
    fn drop(&mut self) {
        let settings = Settings::instance();
        match self.previous {
            Some(date) => settings.set_today(date),
            None => settings.reset_today(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scoped_today_restores_previous() {
        let outer = NaiveDate::from_ymd_opt(2020, 2, 29).unwrap();
        let inner = NaiveDate::from_ymd_opt(2021, 3, 1).unwrap();
        let _outer = ScopedToday::new(outer);
        {
            let _inner = ScopedToday::new(inner);
            assert_eq!(Settings::instance().today(), inner);
        }
        assert_eq!(Settings::instance().today(), outer);
    }
}
