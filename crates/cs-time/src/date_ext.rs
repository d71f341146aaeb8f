//! Date manipulation, relative queries, and standard formatting.
//!
//! [`DateExt`] is implemented for `NaiveDate` and `NaiveDateTime`.  Methods
//! that produce a new month boundary on a `NaiveDateTime` return midnight,
//! except [`DateExt::end_of_month`], which returns the last millisecond of the
//! month.  Relative queries (`is_today`, …) compare against
//! [`Settings::today`](cs_core::Settings::today).

use chrono::{
    DateTime, Datelike, NaiveDate, NaiveDateTime, NaiveTime, TimeDelta, TimeZone, Timelike,
    Weekday,
};
use cs_core::errors::{Error, Result};
use cs_core::Settings;

use crate::calendar::{days_in_month, first_of_month, first_of_next_month, last_of_month};
use crate::working_days::CalendarDay;

/// Month arithmetic and relative date queries.
pub trait DateExt: CalendarDay + Sized {
    /// The first day of this month.
    fn this_month(&self) -> Self;

    /// The first day of the following month.
    ///
    /// # Errors
    /// Returns [`Error::Date`] past the end of the representable range.
    fn next_month(&self) -> Result<Self>;

    /// The last day of this month.
    fn end_of_month(&self) -> Self;

    /// The closest date on or after this one that falls on `weekday`
    /// (this date itself when it already matches).
    ///
    /// # Errors
    /// Returns [`Error::Date`] past the end of the representable range.
    fn next_day_of_week(&self, weekday: Weekday) -> Result<Self>;

    /// Number of days in this month.
    fn days_in_month(&self) -> u32 {
        let d = self.calendar_date();
        days_in_month(d.year(), d.month())
    }

    /// Return `true` if this is today's date.
    fn is_today(&self) -> bool {
        self.calendar_date() == Settings::instance().today()
    }

    /// Return `true` if this is yesterday's date.
    fn is_yesterday(&self) -> bool {
        Settings::instance().today().pred_opt() == Some(self.calendar_date())
    }

    /// Return `true` if this is tomorrow's date.
    fn is_tomorrow(&self) -> bool {
        Settings::instance().today().succ_opt() == Some(self.calendar_date())
    }

    /// Return `true` if this falls in the current month.
    fn is_this_month(&self) -> bool {
        let (d, today) = (self.calendar_date(), Settings::instance().today());
        d.year() == today.year() && d.month() == today.month()
    }

    /// ISO date only: `yyyy-MM-dd`.
    fn to_iso_date(&self) -> String {
        self.calendar_date().format("%Y-%m-%d").to_string()
    }
}

fn days_until(from: Weekday, to: Weekday) -> i64 {
    i64::from(to.num_days_from_monday()) - i64::from(from.num_days_from_monday())
}

fn out_of_range(what: &str, date: NaiveDate) -> Error {
    Error::Date(format!("{what} of {date} is out of range"))
}

impl DateExt for NaiveDate {
    fn this_month(&self) -> Self {
        first_of_month(*self)
    }

    fn next_month(&self) -> Result<Self> {
        first_of_next_month(*self).ok_or_else(|| out_of_range("next month", *self))
    }

    fn end_of_month(&self) -> Self {
        last_of_month(*self)
    }

    fn next_day_of_week(&self, weekday: Weekday) -> Result<Self> {
        let diff = days_until(self.weekday(), weekday).rem_euclid(7);
        self.checked_add_calendar_days(diff)
            .ok_or_else(|| out_of_range("next weekday", *self))
    }
}

impl DateExt for NaiveDateTime {
    fn this_month(&self) -> Self {
        first_of_month(self.date()).and_time(NaiveTime::MIN)
    }

    fn next_month(&self) -> Result<Self> {
        Ok(self.date().next_month()?.and_time(NaiveTime::MIN))
    }

    fn end_of_month(&self) -> Self {
        let last_millisecond =
            NaiveTime::from_hms_milli_opt(23, 59, 59, 999).unwrap_or(NaiveTime::MIN);
        last_of_month(self.date()).and_time(last_millisecond)
    }

    fn next_day_of_week(&self, weekday: Weekday) -> Result<Self> {
        Ok(self.date().next_day_of_week(weekday)?.and_time(NaiveTime::MIN))
    }
}

/// Time-of-day manipulation and formatting for `NaiveDateTime`.
pub trait DateTimeExt: Sized {
    /// Replace the time of day, keeping the date.  Sub-second precision is
    /// reset to zero.
    ///
    /// # Errors
    /// Returns [`Error::Date`] if a component is out of range.
    fn change_time(&self, hour: u32, minute: u32, second: u32) -> Result<Self>;

    /// `yyyy-MM-dd HH:mm`, with `:ss` appended when `output_seconds` is set and
    /// a `T` separator instead of a space when `iso8601` is set.
    fn to_iso_date_time(&self, output_seconds: bool, iso8601: bool) -> String;

    /// A JavaScript `Date` constructor expression for this local time
    /// (months are zero-based in JavaScript).
    fn to_javascript(&self) -> String;

    /// Signed duration since the Unix epoch, treating this value as UTC.
    fn to_unix_time(&self) -> TimeDelta;
}

impl DateTimeExt for NaiveDateTime {
    fn change_time(&self, hour: u32, minute: u32, second: u32) -> Result<Self> {
        let time = NaiveTime::from_hms_opt(hour, minute, second).ok_or_else(|| {
            Error::Date(format!("invalid time {hour:02}:{minute:02}:{second:02}"))
        })?;
        Ok(self.date().and_time(time))
    }

    fn to_iso_date_time(&self, output_seconds: bool, iso8601: bool) -> String {
        let pattern = match (output_seconds, iso8601) {
            (true, true) => "%Y-%m-%dT%H:%M:%S",
            (true, false) => "%Y-%m-%d %H:%M:%S",
            (false, true) => "%Y-%m-%dT%H:%M",
            (false, false) => "%Y-%m-%d %H:%M",
        };
        self.format(pattern).to_string()
    }

    fn to_javascript(&self) -> String {
        format!(
            "new Date({},{},{},{},{},{},{})",
            self.year(),
            self.month0(),
            self.day(),
            self.hour(),
            self.minute(),
            self.second(),
            self.and_utc().timestamp_subsec_millis(),
        )
    }

    fn to_unix_time(&self) -> TimeDelta {
        self.signed_duration_since(DateTime::UNIX_EPOCH.naive_utc())
    }
}

/// Offset removal for zoned date-times.
pub trait ZonedExt {
    /// Drop the time zone, keeping the local wall-clock date and time.
    fn remove_time_zone(&self) -> NaiveDateTime;
}

impl<Tz: TimeZone> ZonedExt for DateTime<Tz> {
    fn remove_time_zone(&self) -> NaiveDateTime {
        self.naive_local()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::FixedOffset;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn datetime(y: i32, m: u32, d: u32, h: u32, mi: u32, s: u32) -> NaiveDateTime {
        date(y, m, d).and_hms_opt(h, mi, s).unwrap()
    }

    #[test]
    fn month_boundaries_on_dates() {
        let d = date(2016, 8, 17);
        assert_eq!(d.this_month(), date(2016, 8, 1));
        assert_eq!(d.next_month(), Ok(date(2016, 9, 1)));
        assert_eq!(d.end_of_month(), date(2016, 8, 31));
        assert_eq!(d.days_in_month(), 31);
        assert!(NaiveDate::MAX.next_month().is_err());
    }

    #[test]
    fn month_boundaries_on_date_times() {
        let dt = datetime(2016, 2, 10, 13, 45, 0);
        assert_eq!(dt.this_month(), datetime(2016, 2, 1, 0, 0, 0));
        assert_eq!(dt.next_month(), Ok(datetime(2016, 3, 1, 0, 0, 0)));
        let end = dt.end_of_month();
        assert_eq!(end.date(), date(2016, 2, 29));
        assert_eq!((end.hour(), end.minute(), end.second()), (23, 59, 59));
        assert_eq!(end.and_utc().timestamp_subsec_millis(), 999);
    }

    #[test]
    fn next_day_of_week() {
        // 2016-08-17 is a Wednesday
        let wed = date(2016, 8, 17);
        assert_eq!(wed.next_day_of_week(Weekday::Wed), Ok(wed));
        assert_eq!(wed.next_day_of_week(Weekday::Sun), Ok(date(2016, 8, 21)));
        assert_eq!(wed.next_day_of_week(Weekday::Mon), Ok(date(2016, 8, 22)));
        let dt = datetime(2016, 8, 17, 9, 30, 0);
        assert_eq!(dt.next_day_of_week(Weekday::Fri), Ok(datetime(2016, 8, 19, 0, 0, 0)));
    }

    #[test]
    fn change_time() {
        let dt = datetime(2016, 8, 17, 9, 30, 15);
        let changed = dt.change_time(22, 3, 5).unwrap();
        assert_eq!((changed.hour(), changed.minute(), changed.second()), (22, 3, 5));
        assert_eq!(changed.date(), dt.date());
        assert!(matches!(dt.change_time(24, 0, 0), Err(Error::Date(_))));
    }

    #[test]
    fn formatting() {
        let dt = datetime(2001, 10, 1, 8, 5, 9);
        assert_eq!(dt.to_iso_date(), "2001-10-01");
        assert_eq!(dt.to_iso_date_time(false, false), "2001-10-01 08:05");
        assert_eq!(dt.to_iso_date_time(true, false), "2001-10-01 08:05:09");
        assert_eq!(dt.to_iso_date_time(true, true), "2001-10-01T08:05:09");
        assert_eq!(dt.to_javascript(), "new Date(2001,9,1,8,5,9,0)");
    }

    #[test]
    fn unix_time() {
        assert_eq!(datetime(1970, 1, 1, 0, 0, 0).to_unix_time(), TimeDelta::zero());
        assert_eq!(
            datetime(1970, 1, 2, 0, 0, 1).to_unix_time(),
            TimeDelta::seconds(86_401)
        );
        assert!(datetime(1969, 12, 31, 0, 0, 0).to_unix_time() < TimeDelta::zero());
    }

    #[test]
    fn remove_time_zone_keeps_wall_clock() {
        let sydney = FixedOffset::east_opt(10 * 3600).unwrap();
        let zoned = sydney.with_ymd_and_hms(2016, 8, 1, 9, 0, 0).unwrap();
        assert_eq!(zoned.remove_time_zone(), datetime(2016, 8, 1, 9, 0, 0));
    }
}
