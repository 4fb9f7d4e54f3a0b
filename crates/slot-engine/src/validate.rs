//! Checking a user-entered date and time against working hours.
//!
//! Uses the same [`HoursSource::window_for_date`] resolution as
//! [`suggest_booking_slot`](crate::suggest_booking_slot), so a slot the
//! engine suggests always passes validation.

use chrono::{NaiveDate, NaiveDateTime};
use thiserror::Error;

use crate::clock::{minutes_of_day, parse_time_to_minutes};
use crate::schedule::{HoursSource, WorkingWindow};

/// Why a requested slot cannot be booked.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotRejection {
    #[error("time '{0}' is not a valid HH:MM time")]
    MalformedTime(String),

    #[error("requested time is in the past")]
    InPast,

    #[error("closed on {0}")]
    ClosedOnDate(NaiveDate),

    #[error("outside working hours {open}-{close}")]
    OutsideHours { open: String, close: String },
}

/// Validate that `time` on `date` is bookable at `now`.
///
/// Checks run in order: time syntax, not in the past, open that day,
/// inside the window. On success returns the window for `date`.
pub fn validate_requested_slot(
    source: &HoursSource,
    date: NaiveDate,
    time: &str,
    now: NaiveDateTime,
) -> Result<WorkingWindow, SlotRejection> {
    let minute = parse_time_to_minutes(time)
        .ok_or_else(|| SlotRejection::MalformedTime(time.trim().to_string()))?;

    if (date, minute) < (now.date(), minutes_of_day(&now)) {
        return Err(SlotRejection::InPast);
    }

    let window = source
        .window_for_date(date)
        .ok_or(SlotRejection::ClosedOnDate(date))?;

    if !window.contains(minute) {
        return Err(SlotRejection::OutsideHours {
            open: window.open_hhmm(),
            close: window.close_hhmm(),
        });
    }

    Ok(window)
}

/// Whether the business is open at `at`.
pub fn is_open_at(source: &HoursSource, at: NaiveDateTime) -> bool {
    source
        .window_for_date(at.date())
        .is_some_and(|window| window.contains(minutes_of_day(&at)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn salon() -> HoursSource {
        HoursSource::from("Пн-Пт: 09:00-18:00, Сб: 10:00-16:00")
    }

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn at(d: NaiveDate, h: u32, min: u32) -> NaiveDateTime {
        d.and_hms_opt(h, min, 0).unwrap()
    }

    #[test]
    fn test_accepts_slot_inside_window() {
        let wed = date(2026, 10, 21);
        let window = validate_requested_slot(&salon(), wed, "11:30", at(wed, 10, 0)).unwrap();
        assert_eq!(window, WorkingWindow::new(540, 1080).unwrap());
    }

    #[test]
    fn test_rejects_malformed_time() {
        let wed = date(2026, 10, 21);
        assert_eq!(
            validate_requested_slot(&salon(), wed, "11.30", at(wed, 10, 0)),
            Err(SlotRejection::MalformedTime("11.30".into()))
        );
    }

    #[test]
    fn test_rejects_past() {
        let wed = date(2026, 10, 21);
        assert_eq!(
            validate_requested_slot(&salon(), wed, "09:30", at(wed, 10, 0)),
            Err(SlotRejection::InPast)
        );
        assert_eq!(
            validate_requested_slot(&salon(), date(2026, 10, 20), "12:00", at(wed, 10, 0)),
            Err(SlotRejection::InPast)
        );
    }

    #[test]
    fn test_rejects_closed_day() {
        let sun = date(2026, 10, 25);
        assert_eq!(
            validate_requested_slot(&salon(), sun, "12:00", at(date(2026, 10, 21), 10, 0)),
            Err(SlotRejection::ClosedOnDate(sun))
        );
    }

    #[test]
    fn test_rejects_closing_time_itself() {
        let sat = date(2026, 10, 24);
        let rejection =
            validate_requested_slot(&salon(), sat, "16:00", at(date(2026, 10, 21), 10, 0))
                .unwrap_err();
        assert_eq!(
            rejection,
            SlotRejection::OutsideHours {
                open: "10:00".into(),
                close: "16:00".into()
            }
        );
        assert_eq!(rejection.to_string(), "outside working hours 10:00-16:00");
    }

    #[test]
    fn test_is_open_at() {
        let wed = date(2026, 10, 21);
        assert!(is_open_at(&salon(), at(wed, 9, 0)));
        assert!(!is_open_at(&salon(), at(wed, 18, 0)));
        assert!(!is_open_at(&salon(), at(date(2026, 10, 25), 12, 0)));
    }
}
