#[cfg(test)]
mod tests {
    use scheduler::libs::error::TaskError;
    use scheduler::libs::task::{EmptyResponse, ErrorResponse, IdResponse, Task, TasksResponse};
    use serde_json::{json, Value};

    fn to_value<T: serde::Serialize>(value: &T) -> Value {
        serde_json::to_value(value).unwrap()
    }

    #[test]
    fn test_task_omits_empty_optional_fields() {
        let task = Task {
            id: "1".to_string(),
            ..Task::new("20240310", "Dentist", "", "")
        };
        assert_eq!(to_value(&task), json!({"id": "1", "date": "20240310", "title": "Dentist"}));
    }

    #[test]
    fn test_task_includes_comment_and_repeat() {
        let task = Task {
            id: "2".to_string(),
            ..Task::new("20240315", "Water plants", "balcony", "d 7")
        };
        assert_eq!(
            to_value(&task),
            json!({"id": "2", "date": "20240315", "title": "Water plants", "comment": "balcony", "repeat": "d 7"})
        );
    }

    #[test]
    fn test_task_accepts_missing_fields() {
        let task: Task = serde_json::from_str(r#"{"title": "Call mom"}"#).unwrap();
        assert_eq!(task, Task::new("", "Call mom", "", ""));
    }

    #[test]
    fn test_empty_listing_is_an_array() {
        assert_eq!(to_value(&TasksResponse::default()), json!({"tasks": []}));
    }

    #[test]
    fn test_id_and_empty_responses() {
        assert_eq!(to_value(&IdResponse { id: "186".to_string() }), json!({"id": "186"}));
        assert_eq!(serde_json::to_string(&EmptyResponse::default()).unwrap(), "{}");
    }

    #[test]
    fn test_error_response_carries_message() {
        let response = ErrorResponse::new(TaskError::EmptyTitle);
        assert_eq!(to_value(&response), json!({"error": "task title cannot be empty"}));
    }

    #[test]
    fn test_validation_classification() {
        assert!(TaskError::InvalidFormat("x".to_string()).is_validation());
        assert!(TaskError::UnsupportedRule("w 1".to_string()).is_validation());
        assert!(TaskError::EmptyTitle.is_validation());
        assert!(!TaskError::NotFound("1".to_string()).is_validation());
        assert!(!TaskError::Storage(rusqlite::Error::InvalidQuery).is_validation());
    }
}
