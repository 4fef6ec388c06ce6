#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),           // id
    TaskUpdated(String),           // id
    TaskDeleted(String),           // id
    TaskCompleted(String),         // id
    TaskRescheduled(String, String), // id, next date
    TasksHeader(String),           // today
    NoDueTasks,
    ListTruncated(usize), // limit
    TaskDetailsHeader(String), // id
    ConfirmDeleteTask(String), // title

    // === NEXT DATE MESSAGES ===
    NextDateFailed(String), // error message

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleStorage,
    ConfigModuleList,

    // === DATABASE MESSAGES ===
    DbOpened(String), // path

    // === GENERAL MESSAGES ===
    OperationCancelled,

    // === PROMPTS ===
    PromptSelectModules,
    PromptDbFile,
    PromptMaxTasks,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),        // count
    RunningMigration(u32, String), // version, name
    MigrationCompleted(u32),       // version
    MigrationFailed(u32, String),  // version, error
    AllMigrationsCompleted,
    DatabaseUpToDate,
}
