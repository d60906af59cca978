//! Display implementation for kaglo application messages.
//!
//! Single source of truth for all user-facing text. Each `Message` variant
//! maps to exactly one formatted string; parameter interpolation is
//! type-checked at compile time.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskCreated(title) => format!("Task '{}' created", title),
            Message::TaskUpdated(title) => format!("Task '{}' updated", title),
            Message::TaskNotFound(id) => format!("Task with ID {} not found", id),
            Message::TasksDeletedCount(count) => format!("Deleted {} task(s)", count),
            Message::TaskCompleted(title) => format!("Task '{}' marked as completed", title),
            Message::TaskReopened(title) => format!("Task '{}' reopened", title),
            Message::NoTasksFound => "No tasks yet. Create one with 'kaglo task add'".to_string(),
            Message::NoTasksMatched => "No tasks match the current filters".to_string(),
            Message::ConfirmDeleteTasks(count) => format!("Delete {} task(s)?", count),
            Message::DeleteCancelled => "Deletion cancelled".to_string(),
            Message::EditingTask(title) => format!("Editing task '{}'", title),
            Message::NoChangesDetected => "No changes detected".to_string(),
            Message::TitleRequired => "Task title cannot be empty".to_string(),
            Message::InvalidDueDate(value) => format!("Invalid due date '{}', expected YYYY-MM-DD", value),

            // === TAG MESSAGES ===
            Message::NoTagsFound => "No tags in use".to_string(),
            Message::TagListHeader => "Tags".to_string(),
            Message::TagRenamed(from, to) => format!("Tag '{}' renamed to '{}'", from, to),
            Message::TagRemoved(tag, count) => format!("Tag '{}' removed from {} task(s)", tag, count),
            Message::TagNotFound(tag) => format!("Tag '{}' is not used by any task", tag),

            // === DASHBOARD MESSAGES ===
            Message::SummaryHeader => "Task summary".to_string(),
            Message::BoardHeader => "Task board".to_string(),
            Message::StatsHeader => "Statistics".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::ConfigParseError => "Failed to parse configuration file".to_string(),
            Message::RemoteNotConfigured => "Sync server is not configured, run 'kaglo init'".to_string(),

            // === SESSION & SYNC MESSAGES ===
            Message::LoggedIn(email) => format!("Logged in as {}", email),
            Message::LoggedOut => "Logged out, session removed".to_string(),
            Message::NotLoggedIn => "No active session".to_string(),
            Message::LoginFailed => "Login failed, check your credentials".to_string(),
            Message::WrongPassword(count) => format!("You entered the wrong password {} times!", count),
            Message::SyncStarted(url) => format!("Syncing with {}", url),
            Message::SyncCompleted(created, updated) => {
                format!("Sync completed: {} task(s) created, {} updated", created, updated)
            }
            Message::SyncFailed(reason) => format!("Sync failed: {}", reason),

            // === EXPORT MESSAGES ===
            Message::ExportCompleted(path) => format!("Export completed: {}", path),
            Message::ExportEmpty => "Nothing to export".to_string(),

            // === MIGRATION MESSAGES ===
            Message::MigrationsFound(count) => format!("Found {} pending migration(s)", count),
            Message::RunningMigration(version, name) => format!("Running migration v{}: {}", version, name),
            Message::MigrationCompleted(version) => format!("Migration v{} completed", version),
            Message::MigrationFailed(version, error) => format!("Migration v{} failed: {}", version, error),
            Message::AllMigrationsCompleted => "All migrations completed".to_string(),
            Message::NothingToRollback => "Nothing to roll back".to_string(),
            Message::RollingBack(from, to) => format!("Rolling back from v{} to v{}", from, to),
            Message::RollbackCompleted(version) => format!("Rollback to v{} completed", version),
        };

        write!(f, "{}", text)
    }
}
