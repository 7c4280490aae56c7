use chrono::NaiveDate;
use thiserror::Error;

/// Errors surfaced at the engine boundary.
///
/// Stray pointer events and empty undo/redo stacks are not errors: the
/// operations that can hit them report "nothing changed" instead.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ScheduleError {
    #[error("invalid date `{0}`, expected YYYY-MM-DD")]
    InvalidDate(String),

    #[error("End date must be the same or after start date.")]
    InvalidDateRange { start: NaiveDate, end: NaiveDate },

    #[error("Title is required.")]
    EmptyTitle,

    #[error("unknown lane `{0}`")]
    UnknownLane(String),
}

pub type ScheduleResult<T> = Result<T, ScheduleError>;
