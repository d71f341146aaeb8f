//! Working-day arithmetic across the three chrono representations.

use chrono::{
    DateTime, Datelike, FixedOffset, NaiveDate, NaiveDateTime, TimeZone, Timelike, Weekday,
};
use cs_time::{CalendarDay, WorkingDayExt};
use proptest::prelude::*;

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn zoned(hours_east: i32, y: i32, m: u32, d: u32, h: u32) -> DateTime<FixedOffset> {
    FixedOffset::east_opt(hours_east * 3600)
        .unwrap()
        .with_ymd_and_hms(y, m, d, h, 0, 0)
        .unwrap()
}

// ── Scenarios ─────────────────────────────────────────────────────────────────

#[test]
fn monday_plus_three_is_thursday() {
    let result = zoned(10, 2016, 8, 1, 0).add_working_days(3).unwrap();
    assert_eq!(result.date_naive(), date(2016, 8, 4));
    assert_eq!(result.weekday(), Weekday::Thu);
}

#[test]
fn monday_minus_three_is_previous_wednesday() {
    let result = zoned(10, 2016, 8, 1, 0).add_working_days(-3).unwrap();
    assert_eq!(result.date_naive(), date(2016, 7, 27));
    assert_eq!(result.weekday(), Weekday::Wed);
}

#[test]
fn saturday_with_zero_offset_moves_to_monday() {
    let result = zoned(12, 2016, 8, 13, 0).add_working_days(0).unwrap();
    assert_eq!(result.date_naive(), date(2016, 8, 15));
    assert_eq!(result.weekday(), Weekday::Mon);
}

#[test]
fn monday_plus_five_is_next_monday() {
    let result = zoned(8, 2016, 8, 15, 0).add_working_days(5).unwrap();
    assert_eq!(result.date_naive(), date(2016, 8, 22));
}

#[test]
fn saturday_counts_its_landing_as_the_first_day() {
    assert_eq!(date(2016, 8, 13).add_working_days(5), Ok(date(2016, 8, 19)));
    assert_eq!(date(2016, 8, 13).add_working_days(-5), Ok(date(2016, 8, 8)));
}

#[test]
fn weekday_with_zero_offset_is_unchanged() {
    let wednesday = zoned(10, 2016, 8, 17, 14);
    assert_eq!(wednesday.add_working_days(0), Ok(wednesday));
}

// ── Representation ────────────────────────────────────────────────────────────

#[test]
fn offset_and_time_of_day_are_preserved() {
    let origin = zoned(10, 2016, 8, 1, 9);
    let result = origin.add_working_days(3).unwrap();
    assert_eq!(result.offset(), origin.offset());
    assert_eq!(result.hour(), 9);
}

#[test]
fn weekday_is_judged_on_the_local_date() {
    // Saturday 05:00 at UTC+12 is still Friday in UTC.
    let origin = zoned(12, 2016, 8, 13, 5);
    assert!(!origin.is_working_day());
    let result = origin.add_working_days(0).unwrap();
    assert_eq!(result.date_naive(), date(2016, 8, 15));
    assert_eq!(result.hour(), 5);
}

#[test]
fn naive_date_time_keeps_its_time() {
    let origin: NaiveDateTime = date(2016, 8, 19).and_hms_opt(17, 30, 0).unwrap();
    let result = origin.add_working_days(1).unwrap();
    assert_eq!(result, date(2016, 8, 22).and_hms_opt(17, 30, 0).unwrap());
}

#[test]
fn stepping_before_the_first_date_fails() {
    assert!(NaiveDate::MIN.add_working_days(-10).is_err());
}

// ── Round trips ───────────────────────────────────────────────────────────────

#[test]
fn weekend_round_trip_is_asymmetric() {
    let saturday = date(2016, 8, 13);
    let there = saturday.add_working_days(5).unwrap();
    assert_eq!(there, date(2016, 8, 19));
    let back = there.add_working_days(-5).unwrap();
    assert_eq!(back, date(2016, 8, 12));
    assert_ne!(back, saturday);

    let rolled = saturday.add_working_days(0).unwrap();
    assert_eq!(rolled.add_working_days(0), Ok(date(2016, 8, 15)));
}

// ── Properties ────────────────────────────────────────────────────────────────

fn any_date() -> impl Strategy<Value = NaiveDate> {
    (0_i64..80_000).prop_map(|days| date(1900, 1, 1).checked_add_calendar_days(days).unwrap())
}

proptest! {
    #[test]
    fn result_is_never_a_weekend(d in any_date(), n in -1_000_i32..1_000) {
        let result = d.add_working_days(n).unwrap();
        prop_assert!(result.is_working_day());
    }

    #[test]
    fn zero_offset_keeps_working_days(d in any_date()) {
        prop_assume!(d.is_working_day());
        prop_assert_eq!(d.add_working_days(0).unwrap(), d);
    }

    #[test]
    fn working_day_round_trip(d in any_date(), n in -1_000_i32..1_000) {
        prop_assume!(d.is_working_day());
        let there = d.add_working_days(n).unwrap();
        prop_assert_eq!(there.add_working_days(-n).unwrap(), d);
    }

    #[test]
    fn direction_follows_sign(d in any_date(), n in 1_i32..1_000) {
        prop_assert!(d.add_working_days(n).unwrap() > d);
        prop_assert!(d.add_working_days(-n).unwrap() < d);
    }
}
