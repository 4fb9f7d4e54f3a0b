//! Error types for slot-engine operations.

use thiserror::Error;

use crate::weekday::WeekDay;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SlotError {
    #[error("Invalid step: step_minutes must be greater than zero")]
    InvalidStep,

    #[error("Invalid date: {0}")]
    InvalidDate(String),

    #[error("Invalid datetime: {0}")]
    InvalidDatetime(String),

    #[error("Invalid time: {0}")]
    InvalidTime(String),

    #[error("Invalid schedule: {0}")]
    InvalidSchedule(String),

    #[error("Invalid rule for {day}: {reason}")]
    InvalidDayRule { day: WeekDay, reason: String },
}

pub type Result<T> = std::result::Result<T, SlotError>;
