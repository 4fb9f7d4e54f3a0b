//! Structured weekly schedules and resolved working windows.
//!
//! A [`WeeklySchedule`] is the document the admin editor saves: one
//! [`DayRule`] per weekday. Resolving it for a concrete date yields a
//! [`WorkingWindow`] in minutes since midnight, or `None` when the business
//! is closed that day. [`HoursSource`] lets callers hand in either the
//! structured document or the legacy display string.

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use crate::clock::{minutes_to_hhmm, parse_time_to_minutes, MINUTES_PER_DAY};
use crate::error::{Result, SlotError};
use crate::text;
use crate::weekday::WeekDay;

// ── WorkingWindow ───────────────────────────────────────────────────────────

/// Open and close minutes-of-day for one concrete date.
///
/// Always satisfies `open_min < close_min <= 1440`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct WorkingWindow {
    pub open_min: u32,
    pub close_min: u32,
}

impl WorkingWindow {
    /// Build a window, rejecting empty, inverted or past-midnight ranges.
    pub fn new(open_min: u32, close_min: u32) -> Option<Self> {
        (open_min < close_min && close_min <= MINUTES_PER_DAY).then_some(Self {
            open_min,
            close_min,
        })
    }

    /// Whether `minute` falls inside the half-open range `[open, close)`.
    pub fn contains(&self, minute: u32) -> bool {
        self.open_min <= minute && minute < self.close_min
    }

    pub fn open_hhmm(&self) -> String {
        minutes_to_hhmm(self.open_min)
    }

    pub fn close_hhmm(&self) -> String {
        minutes_to_hhmm(self.close_min)
    }
}

// ── DayRule ─────────────────────────────────────────────────────────────────

const PLACEHOLDER_OPEN: &str = "09:00";
const PLACEHOLDER_CLOSE: &str = "18:00";

fn placeholder_open() -> String {
    PLACEHOLDER_OPEN.to_string()
}

fn placeholder_close() -> String {
    PLACEHOLDER_CLOSE.to_string()
}

/// Opening hours for one weekday as stored by the admin editor.
///
/// Missing `open`/`close` keys take placeholder times, so a stored closed
/// day may be just `{"closed": true}`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRule {
    #[serde(default = "placeholder_open")]
    pub open: String,
    #[serde(default = "placeholder_close")]
    pub close: String,
    #[serde(default)]
    pub closed: bool,
}

impl DayRule {
    /// An open day from `open` to `close` (`HH:MM`).
    pub fn open(open: impl Into<String>, close: impl Into<String>) -> Self {
        Self {
            open: open.into(),
            close: close.into(),
            closed: false,
        }
    }

    /// A closed day. The times are placeholders for the editor and are never
    /// used for resolution.
    pub fn closed() -> Self {
        Self {
            open: placeholder_open(),
            close: placeholder_close(),
            closed: true,
        }
    }

    /// The window this rule opens, if any.
    ///
    /// Closed days, unparseable times and `close <= open` all resolve to
    /// `None`.
    pub fn window(&self) -> Option<WorkingWindow> {
        if self.closed {
            return None;
        }
        let open = parse_time_to_minutes(&self.open)?;
        let close = parse_time_to_minutes(&self.close)?;
        WorkingWindow::new(open, close)
    }
}

impl Default for DayRule {
    fn default() -> Self {
        Self::closed()
    }
}

// ── WeeklySchedule ──────────────────────────────────────────────────────────

/// One [`DayRule`] for each of the seven weekdays.
///
/// Deserialization requires all seven keys (`mon` .. `sun`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklySchedule {
    pub mon: DayRule,
    pub tue: DayRule,
    pub wed: DayRule,
    pub thu: DayRule,
    pub fri: DayRule,
    pub sat: DayRule,
    pub sun: DayRule,
}

impl WeeklySchedule {
    /// A schedule with every day closed.
    pub fn all_closed() -> Self {
        Self::from_fn(|_| DayRule::closed())
    }

    /// Build a schedule by computing each day's rule.
    pub fn from_fn(mut f: impl FnMut(WeekDay) -> DayRule) -> Self {
        Self {
            mon: f(WeekDay::Mon),
            tue: f(WeekDay::Tue),
            wed: f(WeekDay::Wed),
            thu: f(WeekDay::Thu),
            fri: f(WeekDay::Fri),
            sat: f(WeekDay::Sat),
            sun: f(WeekDay::Sun),
        }
    }

    pub fn rule(&self, day: WeekDay) -> &DayRule {
        match day {
            WeekDay::Mon => &self.mon,
            WeekDay::Tue => &self.tue,
            WeekDay::Wed => &self.wed,
            WeekDay::Thu => &self.thu,
            WeekDay::Fri => &self.fri,
            WeekDay::Sat => &self.sat,
            WeekDay::Sun => &self.sun,
        }
    }

    pub fn set(&mut self, day: WeekDay, rule: DayRule) {
        let slot = match day {
            WeekDay::Mon => &mut self.mon,
            WeekDay::Tue => &mut self.tue,
            WeekDay::Wed => &mut self.wed,
            WeekDay::Thu => &mut self.thu,
            WeekDay::Fri => &mut self.fri,
            WeekDay::Sat => &mut self.sat,
            WeekDay::Sun => &mut self.sun,
        };
        *slot = rule;
    }

    /// Builder form of [`set`](Self::set).
    pub fn with_day(mut self, day: WeekDay, rule: DayRule) -> Self {
        self.set(day, rule);
        self
    }

    /// Resolve the window for `date` straight from the structured rules.
    pub fn window_for_date(&self, date: NaiveDate) -> Option<WorkingWindow> {
        self.rule(WeekDay::from(date.weekday())).window()
    }

    /// Check every open day has well-formed, non-inverted times.
    ///
    /// Resolution never needs this (bad days simply resolve to `None`), but
    /// the admin editor uses it to refuse saving a broken document.
    pub fn validate(&self) -> Result<()> {
        for day in WeekDay::ALL {
            let rule = self.rule(day);
            if rule.closed {
                continue;
            }
            let invalid = |reason: String| SlotError::InvalidDayRule { day, reason };

            let open = parse_time_to_minutes(&rule.open)
                .ok_or_else(|| invalid(format!("open time '{}' is not HH:MM", rule.open)))?;
            let close = parse_time_to_minutes(&rule.close)
                .ok_or_else(|| invalid(format!("close time '{}' is not HH:MM", rule.close)))?;
            if close <= open {
                return Err(invalid(format!(
                    "close {} is not after open {}",
                    rule.close, rule.open
                )));
            }
        }
        Ok(())
    }
}

impl Default for WeeklySchedule {
    fn default() -> Self {
        Self::all_closed()
    }
}

// ── HoursSource ─────────────────────────────────────────────────────────────

/// Where working hours come from: the legacy display string or the
/// structured document.
///
/// Deserializes untagged, so JSON may hold either a string or a schedule
/// object.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HoursSource {
    Text(String),
    Weekly(WeeklySchedule),
}

impl HoursSource {
    /// Parse a JSON string or schedule document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| SlotError::InvalidSchedule(e.to_string()))
    }

    /// The window open on `date`, if any.
    ///
    /// This is the single resolution path shared by slot suggestion and
    /// slot validation.
    pub fn window_for_date(&self, date: NaiveDate) -> Option<WorkingWindow> {
        match self {
            HoursSource::Text(text) => text::working_window_for_date(text, date),
            HoursSource::Weekly(schedule) => schedule.window_for_date(date),
        }
    }
}

impl From<WeeklySchedule> for HoursSource {
    fn from(schedule: WeeklySchedule) -> Self {
        HoursSource::Weekly(schedule)
    }
}

impl From<String> for HoursSource {
    fn from(text: String) -> Self {
        HoursSource::Text(text)
    }
}

impl From<&str> for HoursSource {
    fn from(text: &str) -> Self {
        HoursSource::Text(text.to_string())
    }
}
