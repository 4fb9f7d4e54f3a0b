//! The compact weekly-hours string and its conversions.
//!
//! Schedule text is a comma-separated list of clauses:
//!
//! ```text
//! Пн-Пт: 09:00-18:00, Сб: 10:00-16:00
//! ```
//!
//! Each clause is `<days>: <open>-<close>`, where `<days>` is one day token
//! or an inclusive range. Clause order is precedence order: when clauses
//! overlap, the first one that covers a day wins. Malformed clauses are
//! skipped, never reported as errors. A day no clause covers is closed.

use chrono::{Datelike, NaiveDate};

use crate::clock::parse_time_to_minutes;
use crate::schedule::{DayRule, WeeklySchedule, WorkingWindow};
use crate::weekday::{parse_days_token, WeekDay};

/// One well-formed clause of schedule text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub days: Vec<WeekDay>,
    pub window: WorkingWindow,
}

impl Clause {
    pub fn covers(&self, day: WeekDay) -> bool {
        self.days.contains(&day)
    }
}

/// Parse a single `<days>: <open> - <close>` clause.
///
/// Returns `None` when the days token matches nothing, either time is not
/// `H:MM`/`HH:MM`, or the window is empty or inverted.
pub fn parse_clause(raw: &str) -> Option<Clause> {
    let (days, times) = raw.split_once(':')?;
    let days = parse_days_token(days);
    if days.is_empty() {
        return None;
    }

    let (open, close) = times.split_once('-')?;
    let open_min = parse_time_to_minutes(open)?;
    let close_min = parse_time_to_minutes(close)?;
    let window = WorkingWindow::new(open_min, close_min)?;

    Some(Clause { days, window })
}

/// Every well-formed clause of `text`, in order.
pub fn clauses(text: &str) -> impl Iterator<Item = Clause> + '_ {
    text.split(',')
        .map(str::trim)
        .filter(|raw| !raw.is_empty())
        .filter_map(|raw| {
            let clause = parse_clause(raw);
            if clause.is_none() {
                tracing::debug!(clause = raw, "skipping malformed schedule clause");
            }
            clause
        })
}

/// The window `text` opens on `date`, or `None` if no clause covers it.
///
/// First match wins.
pub fn working_window_for_date(text: &str, date: NaiveDate) -> Option<WorkingWindow> {
    let day = WeekDay::from(date.weekday());
    clauses(text)
        .find(|clause| clause.covers(day))
        .map(|clause| clause.window)
}

/// Render a schedule as compact text.
///
/// Only days that resolve to a window are written. Runs of consecutive days
/// (Monday to Sunday, no wrap) sharing the same window collapse into one
/// range clause. An all-closed schedule renders as the empty string.
pub fn format_working_hours_from_schedule(schedule: &WeeklySchedule) -> String {
    let windows: Vec<Option<WorkingWindow>> = WeekDay::ALL
        .iter()
        .map(|&day| schedule.rule(day).window())
        .collect();

    let mut parts = Vec::new();
    let mut start = 0;
    while start < windows.len() {
        let Some(window) = windows[start] else {
            start += 1;
            continue;
        };

        let mut end = start;
        while end + 1 < windows.len() && windows[end + 1] == Some(window) {
            end += 1;
        }

        parts.push(format_clause(
            WeekDay::from_index(start),
            WeekDay::from_index(end),
            window,
        ));
        start = end + 1;
    }

    parts.join(", ")
}

fn format_clause(first: WeekDay, last: WeekDay, window: WorkingWindow) -> String {
    let days = if first == last {
        first.token().to_string()
    } else {
        format!("{}-{}", first.token(), last.token())
    };
    format!("{}: {}-{}", days, window.open_hhmm(), window.close_hhmm())
}

/// Parse schedule text into a structured schedule.
///
/// Each day takes the first clause that covers it. Days with no clause are
/// marked closed, so text that omits a day means the business is closed.
pub fn parse_working_hours_string_to_schedule(text: &str) -> WeeklySchedule {
    let parsed: Vec<Clause> = clauses(text).collect();
    WeeklySchedule::from_fn(|day| {
        parsed
            .iter()
            .find(|clause| clause.covers(day))
            .map(|clause| DayRule::open(clause.window.open_hhmm(), clause.window.close_hhmm()))
            .unwrap_or_else(DayRule::closed)
    })
}
