//! Working-day arithmetic.
//!
//! A **working day** is Monday to Friday.  Public holidays are not
//! considered: the calculator knows weekends only.
//!
//! [`WorkingDayExt::add_working_days`] works on any [`CalendarDay`]:
//! `NaiveDate`, `NaiveDateTime`, and `DateTime<Tz>`.  Only the calendar date
//! moves; time of day and UTC offset are carried through unchanged, and the
//! weekday is judged on the local (offset-adjusted) date.

use chrono::{DateTime, Datelike, Days, NaiveDate, NaiveDateTime, TimeZone, Weekday};
use cs_core::errors::{Error, Result};

/// Return `true` if `weekday` is Monday–Friday.
pub fn is_working_weekday(weekday: Weekday) -> bool {
    !matches!(weekday, Weekday::Sat | Weekday::Sun)
}

/// A value that sits on a calendar day and can be moved a whole day at a
/// time without touching its time of day or offset.
pub trait CalendarDay: Sized {
    /// The local calendar date.
    fn calendar_date(&self) -> NaiveDate;

    /// Move by `days` calendar days (negative moves backwards), or `None`
    /// when the result is not representable.
    fn checked_add_calendar_days(self, days: i64) -> Option<Self>;
}

impl CalendarDay for NaiveDate {
    fn calendar_date(&self) -> NaiveDate {
        *self
    }

    fn checked_add_calendar_days(self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        if days < 0 {
            self.checked_sub_days(magnitude)
        } else {
            self.checked_add_days(magnitude)
        }
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_date(&self) -> NaiveDate {
        self.date()
    }

    fn checked_add_calendar_days(self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        if days < 0 {
            self.checked_sub_days(magnitude)
        } else {
            self.checked_add_days(magnitude)
        }
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_date(&self) -> NaiveDate {
        self.date_naive()
    }

    fn checked_add_calendar_days(self, days: i64) -> Option<Self> {
        let magnitude = Days::new(days.unsigned_abs());
        if days < 0 {
            self.checked_sub_days(magnitude)
        } else {
            self.checked_add_days(magnitude)
        }
    }
}

/// Working-day queries and arithmetic.
pub trait WorkingDayExt: CalendarDay {
    /// Return `true` if the local date is Monday–Friday.
    fn is_working_day(&self) -> bool {
        is_working_weekday(self.calendar_date().weekday())
    }

    /// Move by `working_days` working days, forwards when positive and
    /// backwards when negative.
    ///
    /// The result is always a working day.  A weekend origin is first moved
    /// off the weekend in the direction of travel, and that landing counts as
    /// the first working day; so with `working_days == 0` a Saturday or
    /// Sunday rolls forward to Monday, while a weekday is returned unchanged.
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use cs_time::WorkingDayExt;
    ///
    /// let friday = NaiveDate::from_ymd_opt(2016, 8, 19).unwrap();
    /// let next = friday.add_working_days(5).unwrap();
    /// assert_eq!(next, NaiveDate::from_ymd_opt(2016, 8, 26).unwrap());
    /// ```
    ///
    /// # Errors
    /// Returns [`Error::Date`] if stepping leaves chrono's representable range.
    fn add_working_days(self, working_days: i32) -> Result<Self> {
        let direction: i64 = if working_days < 0 { -1 } else { 1 };
        let mut remaining = working_days.unsigned_abs();
        let mut date = self;
        while remaining != 0 || !date.is_working_day() {
            date = step(date, direction)?;
            while !date.is_working_day() {
                date = step(date, direction)?;
            }
            remaining = remaining.saturating_sub(1);
        }
        Ok(date)
    }
}

impl<T: CalendarDay> WorkingDayExt for T {}

fn step<T: CalendarDay>(date: T, direction: i64) -> Result<T> {
    let from = date.calendar_date();
    date.checked_add_calendar_days(direction).ok_or_else(|| {
        Error::Date(format!(
            "stepping {direction:+} day from {from} leaves the representable range"
        ))
    })
}
