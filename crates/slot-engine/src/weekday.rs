//! Canonical weekday order and the day tokens used in schedule text.
//!
//! The week starts on Monday. Indices run `0..7` in that order and every
//! range computation is done modulo 7, so `"Сб-Вт"` wraps past Sunday
//! without a special case.

use std::fmt;

use chrono::Weekday;
use serde::{Deserialize, Serialize};

/// One of the seven days of the week, in canonical Monday-first order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WeekDay {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
    Sat,
    Sun,
}

impl WeekDay {
    /// All days in canonical order.
    pub const ALL: [WeekDay; 7] = [
        WeekDay::Mon,
        WeekDay::Tue,
        WeekDay::Wed,
        WeekDay::Thu,
        WeekDay::Fri,
        WeekDay::Sat,
        WeekDay::Sun,
    ];

    /// Position in the canonical order (Monday = 0).
    pub fn index(self) -> usize {
        self as usize
    }

    /// The day at `index`, taken modulo 7.
    pub fn from_index(index: usize) -> WeekDay {
        Self::ALL[index % 7]
    }

    /// The token written in schedule text (`"Пн"`, `"Вт"`, ...).
    pub fn token(self) -> &'static str {
        match self {
            WeekDay::Mon => "Пн",
            WeekDay::Tue => "Вт",
            WeekDay::Wed => "Ср",
            WeekDay::Thu => "Чт",
            WeekDay::Fri => "Пт",
            WeekDay::Sat => "Сб",
            WeekDay::Sun => "Вс",
        }
    }

    /// Parse a single day token, case-insensitive.
    ///
    /// Accepts the canonical Russian abbreviations plus English short and
    /// full names. Returns `None` for anything else.
    pub fn parse_token(s: &str) -> Option<WeekDay> {
        match s.trim().to_lowercase().as_str() {
            "пн" | "mon" | "monday" => Some(WeekDay::Mon),
            "вт" | "tue" | "tues" | "tuesday" => Some(WeekDay::Tue),
            "ср" | "wed" | "wednesday" => Some(WeekDay::Wed),
            "чт" | "thu" | "thurs" | "thursday" => Some(WeekDay::Thu),
            "пт" | "fri" | "friday" => Some(WeekDay::Fri),
            "сб" | "sat" | "saturday" => Some(WeekDay::Sat),
            "вс" | "sun" | "sunday" => Some(WeekDay::Sun),
            _ => None,
        }
    }
}

impl From<Weekday> for WeekDay {
    fn from(day: Weekday) -> Self {
        WeekDay::from_index(day.num_days_from_monday() as usize)
    }
}

impl fmt::Display for WeekDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

/// Resolve a days token (`"Пт"` or `"Пн-Пт"`) to the days it covers.
///
/// Ranges are inclusive and follow the canonical order, wrapping past
/// Sunday when the end precedes the start. An unrecognized token, or a
/// range with an unrecognized endpoint, yields an empty vec: the clause
/// simply does not apply.
pub fn parse_days_token(token: &str) -> Vec<WeekDay> {
    let token = token.trim();

    let Some((start, end)) = token.split_once('-') else {
        return WeekDay::parse_token(token).into_iter().collect();
    };

    let (Some(start), Some(end)) = (WeekDay::parse_token(start), WeekDay::parse_token(end)) else {
        return Vec::new();
    };

    let span = (end.index() + 7 - start.index()) % 7;
    (0..=span)
        .map(|offset| WeekDay::from_index(start.index() + offset))
        .collect()
}
