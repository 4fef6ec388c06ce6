//! Human-readable text for every [`Message`] variant.
//!
//! All user-facing wording lives in this one match so that commands only
//! ever deal with typed messages.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(id) => format!("Task {} created", id),
            Message::TaskUpdated(id) => format!("Task {} updated", id),
            Message::TaskDeleted(id) => format!("Task {} deleted", id),
            Message::TaskCompleted(id) => format!("Task {} completed and removed", id),
            Message::TaskRescheduled(id, date) => format!("Task {} done, next date is {}", id, date),
            Message::TasksHeader(today) => format!("Tasks due from {}:", today),
            Message::NoDueTasks => "No upcoming tasks.".to_string(),
            Message::ListTruncated(limit) => format!("Only the first {} tasks are shown", limit),
            Message::TaskDetailsHeader(id) => format!("Task {}:", id),
            Message::ConfirmDeleteTask(title) => format!("Are you sure you want to delete '{}'?", title),

            // === NEXT DATE MESSAGES ===
            Message::NextDateFailed(error) => format!("Failed to calculate next date: {}", error),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleStorage => "Storage settings".to_string(),
            Message::ConfigModuleList => "Task list settings".to_string(),

            // === DATABASE MESSAGES ===
            Message::DbOpened(path) => format!("Database opened at {}", path),

            // === GENERAL MESSAGES ===
            Message::OperationCancelled => "Operation cancelled.".to_string(),

            // === PROMPTS ===
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDbFile => "Database file".to_string(),
            Message::PromptMaxTasks => "Maximum number of listed tasks".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
        };
        write!(f, "{}", text)
    }
}
