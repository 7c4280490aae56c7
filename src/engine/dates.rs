//! ISO calendar-date helpers shared by the layout and the drag machine.
//!
//! All arithmetic runs on `NaiveDate`, which has no time-of-day and no
//! offset, so day counts are immune to daylight-saving shifts.

use chrono::{NaiveDate, TimeDelta};

use crate::error::{ScheduleError, ScheduleResult};

const ISO_FORMAT: &str = "%Y-%m-%d";

/// Parse a strict `YYYY-MM-DD` string. Month and day must be zero-padded.
pub fn parse(value: &str) -> ScheduleResult<NaiveDate> {
    let invalid = || ScheduleError::InvalidDate(value.to_string());
    let shaped = value.len() == 10
        && value.bytes().enumerate().all(|(i, b)| match i {
            4 | 7 => b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return Err(invalid());
    }
    NaiveDate::parse_from_str(value, ISO_FORMAT).map_err(|_| invalid())
}

/// Zero-padded `YYYY-MM-DD`.
pub fn format(date: NaiveDate) -> String {
    date.format(ISO_FORMAT).to_string()
}

/// Shift a date by `days`, which may be negative. `None` when the result
/// falls outside the representable calendar.
pub fn checked_add_days(date: NaiveDate, days: i64) -> Option<NaiveDate> {
    TimeDelta::try_days(days).and_then(|delta| date.checked_add_signed(delta))
}

/// Like [`checked_add_days`], saturating at the ends of the calendar.
pub fn add_days(date: NaiveDate, days: i64) -> NaiveDate {
    checked_add_days(date, days).unwrap_or(if days < 0 {
        NaiveDate::MIN
    } else {
        NaiveDate::MAX
    })
}

/// Signed day count from `start` to `end`.
pub fn day_offset(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days()
}

/// Signed day count between two ISO date strings.
pub fn days_between(start: &str, end: &str) -> ScheduleResult<i64> {
    Ok(day_offset(parse(start)?, parse(end)?))
}
