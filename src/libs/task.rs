use serde::{Deserialize, Serialize};

/// A dated task with an optional repeat rule.
///
/// `date` is always the eight digit `YYYYMMDD` form once the task has been
/// through the lifecycle policy. An empty `repeat` marks a one-off task.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub title: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub comment: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub repeat: String,
}

impl Task {
    pub fn new(date: &str, title: &str, comment: &str, repeat: &str) -> Self {
        Task {
            id: String::new(),
            date: date.to_string(),
            title: title.to_string(),
            comment: comment.to_string(),
            repeat: repeat.to_string(),
        }
    }

    pub fn is_recurring(&self) -> bool {
        !self.repeat.trim().is_empty()
    }
}

/// Listing payload, `tasks` is an empty array rather than null.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TasksResponse {
    pub tasks: Vec<Task>,
}

/// Returned by task creation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IdResponse {
    pub id: String,
}

/// Single human-readable error message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(err: impl std::fmt::Display) -> Self {
        ErrorResponse { error: err.to_string() }
    }
}

/// Payload of operations that succeed without data (`{}`).
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct EmptyResponse {}
