//! Date and time-of-day helpers.
//!
//! Everything here works in minutes since local midnight. There is no
//! timezone: the caller's wall clock is the only reference.

use chrono::{NaiveDate, NaiveDateTime, Timelike};

use crate::error::{Result, SlotError};

/// Minutes in a day; the largest valid `close_min`.
pub const MINUTES_PER_DAY: u32 = 24 * 60;

/// Parse a strict `H:MM` or `HH:MM` 24-hour time into minutes since midnight.
///
/// Hours must be in `0..=23` and minutes in `0..=59`, with exactly two minute
/// digits. Anything else returns `None`.
pub fn parse_time_to_minutes(s: &str) -> Option<u32> {
    let (hours, minutes) = s.trim().split_once(':')?;

    if hours.is_empty() || hours.len() > 2 || !hours.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if minutes.len() != 2 || !minutes.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let h: u32 = hours.parse().ok()?;
    let m: u32 = minutes.parse().ok()?;
    if h > 23 || m > 59 {
        return None;
    }
    Some(h * 60 + m)
}

/// Format minutes since midnight as `HH:MM`.
pub fn minutes_to_hhmm(minutes: u32) -> String {
    format!("{:02}:{:02}", minutes / 60, minutes % 60)
}

/// Round `minutes` up to the next multiple of `step`.
///
/// A zero step leaves the value unchanged; callers that accept a step from
/// outside reject zero before getting here.
pub fn round_up_to_step(minutes: u32, step: u32) -> u32 {
    if step == 0 {
        return minutes;
    }
    minutes.div_ceil(step).saturating_mul(step)
}

/// Minutes since midnight of a local datetime. Seconds are dropped.
pub fn minutes_of_day(datetime: &NaiveDateTime) -> u32 {
    datetime.hour() * 60 + datetime.minute()
}

/// Format a date as `YYYY-MM-DD`.
pub fn to_iso_date_local(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Parse a `YYYY-MM-DD` date.
pub fn parse_iso_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s.trim(), "%Y-%m-%d")
        .map_err(|e| SlotError::InvalidDate(format!("'{}': {}", s, e)))
}

/// Parse a local datetime such as `2026-10-21T10:00`, `2026-10-21 10:00` or
/// `2026-10-21T10:00:30`.
pub fn parse_local_datetime(s: &str) -> Result<NaiveDateTime> {
    let trimmed = s.trim();
    [
        "%Y-%m-%dT%H:%M:%S",
        "%Y-%m-%dT%H:%M",
        "%Y-%m-%d %H:%M:%S",
        "%Y-%m-%d %H:%M",
    ]
    .iter()
    .find_map(|fmt| NaiveDateTime::parse_from_str(trimmed, fmt).ok())
    .ok_or_else(|| SlotError::InvalidDatetime(format!("'{}'", s)))
}
