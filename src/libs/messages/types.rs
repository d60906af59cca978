//! Typed user-facing messages.
//!
//! Every string shown to the user is a variant here, formatted centrally in
//! `display.rs`. Parameters are typed, so message text and data can never
//! drift apart.

#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskNotFound(i64),
    TasksDeletedCount(usize),
    TaskCompleted(String),
    TaskReopened(String),
    NoTasksFound,
    NoTasksMatched,
    ConfirmDeleteTasks(usize),
    DeleteCancelled,
    EditingTask(String),
    NoChangesDetected,
    TitleRequired,
    InvalidDueDate(String),

    // === TAG MESSAGES ===
    NoTagsFound,
    TagListHeader,
    TagRenamed(String, String),
    TagRemoved(String, usize),
    TagNotFound(String),

    // === DASHBOARD MESSAGES ===
    SummaryHeader,
    BoardHeader,
    StatsHeader,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    RemoteNotConfigured,

    // === SESSION & SYNC MESSAGES ===
    LoggedIn(String),
    LoggedOut,
    NotLoggedIn,
    LoginFailed,
    WrongPassword(i32),
    SyncStarted(String),
    SyncCompleted(usize, usize),
    SyncFailed(String),

    // === EXPORT MESSAGES ===
    ExportCompleted(String),
    ExportEmpty,

    // === MIGRATION MESSAGES ===
    MigrationsFound(usize),
    RunningMigration(u32, String),
    MigrationCompleted(u32),
    MigrationFailed(u32, String),
    AllMigrationsCompleted,
    NothingToRollback,
    RollingBack(u32, u32),
    RollbackCompleted(u32),
}
