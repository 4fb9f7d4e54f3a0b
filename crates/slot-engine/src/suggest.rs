//! Booking-slot suggestion.
//!
//! Given working hours, an explicit "now" and a [`SuggestOptions`] policy,
//! [`suggest_booking_slot`] produces one concrete date and time to pre-fill
//! a booking form. The caller supplies "now"; nothing here reads the clock,
//! so identical inputs always give identical suggestions.
//!
//! # Rules
//!
//! The first rule that applies wins:
//!
//! 1. No window today → search forward (rule 4).
//! 2. Before today's opening → today, at least `open_offset_minutes` after
//!    opening and at least `lead_minutes` from now.
//! 3. Inside today's window → `now + lead_minutes` rounded up, if that still
//!    falls before closing. Flagged as closing soon when the window ends
//!    within `closing_soon_minutes`. Otherwise fall through.
//! 4. The first open day in the next `horizon_days` days, at
//!    `open_offset_minutes` after opening.
//! 5. Nothing open in the horizon → today at `fallback_time` with a notice
//!    that the schedule could not be read.
//!
//! Every suggested time is a multiple of `step_minutes` where the window
//! allows it and always lies in `[open, close)` of the date it names.

use chrono::{Days, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

use crate::clock::{minutes_of_day, minutes_to_hhmm, parse_time_to_minutes, round_up_to_step};
use crate::error::{Result, SlotError};
use crate::schedule::{HoursSource, WorkingWindow};

pub const NOTICE_NOT_OPEN_YET: &str =
    "We are not open yet. The earliest time today has been suggested.";
pub const NOTICE_CLOSING_SOON: &str =
    "We close soon. Today's slot is still available but please confirm quickly.";
pub const NOTICE_CLOSED_NOW: &str =
    "We are currently closed. The nearest working day has been suggested.";
pub const NOTICE_SCHEDULE_UNREADABLE: &str =
    "Working hours could not be interpreted. Please pick a date and time manually.";

// ── Options ─────────────────────────────────────────────────────────────────

/// Policy for [`suggest_booking_slot`].
///
/// Every field has a default, so a partial TOML or JSON table deserializes
/// cleanly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SuggestOptions {
    /// Minimum minutes between now and the suggested slot.
    pub lead_minutes: u32,
    /// Rounding granularity for suggested times. Must be non-zero.
    pub step_minutes: u32,
    /// How many days after today to search for an open day.
    pub horizon_days: u32,
    /// A window ending within this many minutes of now is "closing soon".
    pub closing_soon_minutes: u32,
    /// Earliest offset after opening for a suggested slot.
    pub open_offset_minutes: u32,
    /// Time used when no open day is found.
    pub fallback_time: String,
}

impl Default for SuggestOptions {
    fn default() -> Self {
        Self {
            lead_minutes: 90,
            step_minutes: 15,
            horizon_days: 14,
            closing_soon_minutes: 60,
            open_offset_minutes: 30,
            fallback_time: "10:00".to_string(),
        }
    }
}

// ── Suggestion ──────────────────────────────────────────────────────────────

/// Which rule produced a [`BookingSuggestion`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SuggestionKind {
    Today,
    BeforeOpening,
    ClosingSoon,
    NextOpenDay,
    Fallback,
}

/// A suggested appointment slot, ready to pre-fill a form.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BookingSuggestion {
    /// Serialized as `YYYY-MM-DD`.
    pub suggested_date: NaiveDate,
    /// `HH:MM`.
    pub suggested_time: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub notice: Option<String>,
    pub is_closed_now: bool,
    pub is_closing_soon: bool,
    pub kind: SuggestionKind,
}

impl BookingSuggestion {
    fn new(date: NaiveDate, minutes: u32, kind: SuggestionKind) -> Self {
        Self {
            suggested_date: date,
            suggested_time: minutes_to_hhmm(minutes),
            notice: None,
            is_closed_now: false,
            is_closing_soon: false,
            kind,
        }
    }

    fn with_notice(mut self, notice: &str) -> Self {
        self.notice = Some(notice.to_string());
        self
    }

    fn closed_now(mut self) -> Self {
        self.is_closed_now = true;
        self
    }

    fn closing_soon(mut self) -> Self {
        self.is_closing_soon = true;
        self
    }
}

// ── suggest_booking_slot ────────────────────────────────────────────────────

/// Suggest the next bookable slot.
///
/// # Errors
///
/// Returns [`SlotError::InvalidStep`] if `options.step_minutes` is zero, or
/// [`SlotError::InvalidTime`] if `options.fallback_time` is not `HH:MM`.
/// Malformed working hours are never an error: they degrade to closed days
/// and, at worst, to the fallback suggestion.
///
/// # Examples
///
/// ```
/// use chrono::NaiveDate;
/// use slot_engine::{suggest_booking_slot, HoursSource, SuggestOptions};
///
/// let hours = HoursSource::from("Пн-Пт: 09:00-18:00, Сб: 10:00-16:00");
/// // Wednesday 10:00
/// let now = NaiveDate::from_ymd_opt(2026, 10, 21).unwrap().and_hms_opt(10, 0, 0).unwrap();
///
/// let slot = suggest_booking_slot(&hours, now, &SuggestOptions::default()).unwrap();
/// assert_eq!(slot.suggested_time, "11:30");
/// assert_eq!(slot.notice, None);
/// ```
pub fn suggest_booking_slot(
    source: &HoursSource,
    now: NaiveDateTime,
    options: &SuggestOptions,
) -> Result<BookingSuggestion> {
    if options.step_minutes == 0 {
        return Err(SlotError::InvalidStep);
    }
    let fallback_min = parse_time_to_minutes(&options.fallback_time).ok_or_else(|| {
        SlotError::InvalidTime(format!("fallback_time '{}'", options.fallback_time))
    })?;

    let today = now.date();

    let suggestion = source
        .window_for_date(today)
        .and_then(|window| try_today(window, today, minutes_of_day(&now), options))
        .or_else(|| try_next_open_day(source, today, options))
        .unwrap_or_else(|| fallback(today, fallback_min, options));

    Ok(suggestion)
}

/// Rules 2 and 3: a slot later today, if one fits.
fn try_today(
    window: WorkingWindow,
    today: NaiveDate,
    now_min: u32,
    options: &SuggestOptions,
) -> Option<BookingSuggestion> {
    let step = options.step_minutes;

    if now_min < window.open_min {
        let earliest = window
            .open_min
            .saturating_add(options.open_offset_minutes)
            .max(now_min.saturating_add(options.lead_minutes));
        let minutes = fit_into_window(window, earliest, step);

        let suggestion = BookingSuggestion::new(today, minutes, SuggestionKind::BeforeOpening);
        return Some(suggestion.with_notice(NOTICE_NOT_OPEN_YET).closed_now());
    }

    if now_min >= window.close_min {
        return None;
    }

    let requested = round_up_to_step(now_min.saturating_add(options.lead_minutes), step);
    if requested >= window.close_min {
        return None;
    }

    if window.close_min - now_min <= options.closing_soon_minutes {
        let suggestion = BookingSuggestion::new(today, requested, SuggestionKind::ClosingSoon);
        return Some(suggestion.with_notice(NOTICE_CLOSING_SOON).closing_soon());
    }

    Some(BookingSuggestion::new(today, requested, SuggestionKind::Today))
}

/// Rule 4: the first open day after today within the horizon.
fn try_next_open_day(
    source: &HoursSource,
    today: NaiveDate,
    options: &SuggestOptions,
) -> Option<BookingSuggestion> {
    // The walk stops at the last representable date.
    (1..=u64::from(options.horizon_days))
        .map_while(|offset| today.checked_add_days(Days::new(offset)))
        .find_map(|date| source.window_for_date(date).map(|window| (date, window)))
        .map(|(date, window)| {
            let minutes = fit_into_window(
                window,
                window.open_min.saturating_add(options.open_offset_minutes),
                options.step_minutes,
            );
            let suggestion = BookingSuggestion::new(date, minutes, SuggestionKind::NextOpenDay);
            suggestion.with_notice(NOTICE_CLOSED_NOW).closed_now()
        })
}

/// Rule 5: nothing open anywhere in the horizon.
fn fallback(today: NaiveDate, minutes: u32, options: &SuggestOptions) -> BookingSuggestion {
    tracing::warn!(
        date = %today,
        horizon_days = options.horizon_days,
        "no open day found in search horizon, using fallback slot"
    );

    BookingSuggestion::new(today, minutes, SuggestionKind::Fallback)
        .with_notice(NOTICE_SCHEDULE_UNREADABLE)
}

/// Round `candidate` up to `step`, then pull it back inside the window.
///
/// The result is capped at `close - step` so a full step still fits before
/// closing, and floored at `open` for windows shorter than one step.
fn fit_into_window(window: WorkingWindow, candidate: u32, step: u32) -> u32 {
    let latest = window.close_min.saturating_sub(step);
    round_up_to_step(candidate, step)
        .min(latest)
        .max(window.open_min)
}
