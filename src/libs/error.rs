//! Error taxonomy shared by the date utilities, the recurrence engine,
//! the lifecycle policy and the task store.
//!
//! Every variant except [`TaskError::Storage`] is a validation failure: it is
//! detected where the offending value was supplied and retrying the same call
//! can never succeed. Storage failures come from the backing database and are
//! passed through untouched.

use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// Date string is not `YYYYMMDD` or does not name a real calendar day.
    #[error("invalid date format, expected YYYYMMDD: '{0}'")]
    InvalidFormat(String),

    #[error("no repeat rule specified")]
    NoRuleSpecified,

    #[error("unsupported repeat rule: '{0}'")]
    UnsupportedRule(String),

    /// Day interval is not a number in `1..=400`.
    #[error("invalid day count in repeat rule: '{0}'")]
    InvalidDayCount(String),

    /// `y` followed by extra arguments.
    #[error("invalid yearly repeat rule: '{0}'")]
    InvalidYearRule(String),

    #[error("invalid anchor date: '{0}'")]
    InvalidAnchorDate(String),

    /// The next occurrence no longer fits into a four digit year.
    #[error("next date is out of the supported range")]
    DateOutOfRange,

    #[error("task title cannot be empty")]
    EmptyTitle,

    #[error("task id is not specified")]
    MissingId,

    #[error("task not found: {0}")]
    NotFound(String),

    #[error("storage failure: {0}")]
    Storage(#[from] rusqlite::Error),
}

impl TaskError {
    /// True for malformed input, false for missing rows and store failures.
    pub fn is_validation(&self) -> bool {
        !matches!(self, TaskError::Storage(_) | TaskError::NotFound(_))
    }
}

pub type TaskResult<T> = Result<T, TaskError>;
