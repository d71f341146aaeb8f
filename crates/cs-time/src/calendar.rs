//! Month arithmetic shared by the date helpers.

use chrono::{Datelike, NaiveDate};

/// Whether a given year is a leap year in the proleptic Gregorian calendar.
/// Years outside chrono's range are reported as common years.
pub fn is_leap_year(year: i32) -> bool {
    NaiveDate::from_ymd_opt(year, 1, 1).is_some_and(|d| d.leap_year())
}

/// Number of days in a given month (1–12) of `year`, or 0 when the month
/// does not exist.
pub fn days_in_month(year: i32, month: u32) -> u32 {
    NaiveDate::from_ymd_opt(year, month, 1).map_or(0, |first| last_of_month(first).day())
}

/// The first day of the month containing `date`.
pub fn first_of_month(date: NaiveDate) -> NaiveDate {
    date.with_day(1).unwrap_or(date)
}

/// The last day of the month containing `date`.
pub fn last_of_month(date: NaiveDate) -> NaiveDate {
    if date.month() == 12 {
        return date.with_day(31).unwrap_or(date);
    }
    first_of_month(date)
        .with_month(date.month() + 1)
        .and_then(|next| next.pred_opt())
        .unwrap_or(date)
}

/// The first day of the month after the one containing `date`, or `None`
/// past the end of the representable range.
pub fn first_of_next_month(date: NaiveDate) -> Option<NaiveDate> {
    last_of_month(date).succ_opt()
}

/// The earliest date a SQL Server `datetime` column can store (1753-01-01).
pub fn min_date_for_sql_server() -> NaiveDate {
    NaiveDate::from_ymd_opt(1753, 1, 1).unwrap_or(NaiveDate::MIN)
}
