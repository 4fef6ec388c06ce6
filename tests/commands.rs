#[cfg(test)]
mod tests {
    use anyhow::anyhow;
    use scheduler::commands::{exit_status, is_rendered, Rendered, EXIT_FAILURE, EXIT_INVALID_INPUT};
    use scheduler::libs::error::TaskError;
    use scheduler::libs::messages::Message;

    #[test]
    fn test_validation_errors_exit_with_invalid_input() {
        for err in [
            TaskError::EmptyTitle,
            TaskError::MissingId,
            TaskError::UnsupportedRule("w 1".to_string()),
            TaskError::InvalidFormat("2024-03-10".to_string()),
        ] {
            assert_eq!(exit_status(&anyhow::Error::new(err)), EXIT_INVALID_INPUT);
        }
    }

    #[test]
    fn test_other_errors_exit_with_failure() {
        assert_eq!(exit_status(&anyhow::Error::new(TaskError::NotFound("7".to_string()))), EXIT_FAILURE);
        assert_eq!(
            exit_status(&anyhow::Error::new(TaskError::Storage(rusqlite::Error::InvalidQuery))),
            EXIT_FAILURE
        );
        assert_eq!(exit_status(&anyhow!("config file is unreadable")), EXIT_FAILURE);
    }

    #[test]
    fn test_context_keeps_the_task_error_reachable() {
        let err = anyhow::Error::new(TaskError::InvalidDayCount("d 0".to_string()))
            .context(Message::NextDateFailed("invalid day count".to_string()));

        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);
        assert!(err.to_string().starts_with("Failed to calculate next date"));
        assert!(!is_rendered(&err));
    }

    #[test]
    fn test_rendered_errors_are_not_printed_again() {
        let err = anyhow::Error::new(TaskError::EmptyTitle).context(Rendered);

        assert!(is_rendered(&err));
        assert_eq!(exit_status(&err), EXIT_INVALID_INPUT);

        let storage = anyhow::Error::new(TaskError::NotFound("3".to_string())).context(Rendered);
        assert!(is_rendered(&storage));
        assert_eq!(exit_status(&storage), EXIT_FAILURE);
    }
}
