//! # slot-engine
//!
//! Deterministic working-hours resolution and booking-slot suggestion.
//!
//! The engine reads a small business's weekly hours, either as a compact
//! display string (`"Пн-Пт: 09:00-18:00, Сб: 10:00-16:00"`) or as a
//! structured per-weekday document, and answers two questions: which window
//! is open on a given date, and which slot should a booking form suggest
//! right now. Every function is pure; the caller passes "now" in.
//!
//! ## Modules
//!
//! - [`weekday`]: Canonical Monday-first day order and day tokens
//! - [`clock`]: Time-of-day parsing, formatting and rounding helpers
//! - [`schedule`]: Weekly schedule documents and resolved working windows
//! - [`text`]: Schedule text parsing and formatting
//! - [`suggest`]: Next bookable slot from now, lead time and step
//! - [`validate`]: Check a user-entered date and time against working hours
//! - [`error`]: Error types

pub mod clock;
pub mod error;
pub mod schedule;
pub mod suggest;
pub mod text;
pub mod validate;
pub mod weekday;

pub use clock::{
    minutes_of_day, minutes_to_hhmm, parse_iso_date, parse_local_datetime, parse_time_to_minutes,
    round_up_to_step, to_iso_date_local,
};
pub use error::SlotError;
pub use schedule::{DayRule, HoursSource, WeeklySchedule, WorkingWindow};
pub use suggest::{suggest_booking_slot, BookingSuggestion, SuggestOptions, SuggestionKind};
pub use text::{
    format_working_hours_from_schedule, parse_working_hours_string_to_schedule,
    working_window_for_date,
};
pub use validate::{is_open_at, validate_requested_slot, SlotRejection};
pub use weekday::{parse_days_token, WeekDay};
