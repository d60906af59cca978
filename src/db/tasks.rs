//! Core task persistence.
//!
//! CRUD over the `tasks` table. Tags travel on the row as a JSON array so
//! their order and duplicates survive a round trip; priority is stored as a
//! lowercase string and parsed leniently on the way out.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskQuery};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, params_from_iter, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO tasks (title, description, completed, priority, tags, due_date, remote_id, created_at)
    VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, COALESCE(?8, datetime(CURRENT_TIMESTAMP, 'localtime')))";
const UPDATE_TASK: &str = "UPDATE tasks SET title = ?2, description = ?3, completed = ?4, priority = ?5, tags = ?6, due_date = ?7 WHERE id = ?1";
const UPDATE_COMPLETED: &str = "UPDATE tasks SET completed = ?2 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const SELECT_TASKS: &str = "SELECT id, title, description, completed, priority, tags, due_date, created_at, remote_id FROM tasks";
const WHERE_ID_IN: &str = "WHERE id IN";
const WHERE_COMPLETED: &str = "WHERE completed = ?1";
const WHERE_REMOTE_ID: &str = "WHERE remote_id = ?1";
const ORDER_BY_ID: &str = "ORDER BY id";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a task and returns its new row id.
    ///
    /// An explicit `created_at` (a synced record keeps the server's
    /// timestamp) is stored as-is; otherwise the insert time is used.
    pub fn insert(&mut self, task: &Task) -> Result<i64> {
        self.conn.execute(
            INSERT_TASK,
            params![
                task.title,
                task.description,
                task.completed,
                task.priority.as_str(),
                serde_json::to_string(&task.tags)?,
                task.due_date,
                task.remote_id,
                task.created_at,
            ],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Updates every mutable field of a task. The id never changes.
    pub fn update(&mut self, task: &Task) -> Result<()> {
        let id = task.id.ok_or_else(|| msg_error_anyhow!(Message::TaskNotFound(0)))?;
        let affected = self.conn.execute(
            UPDATE_TASK,
            params![
                id,
                task.title,
                task.description,
                task.completed,
                task.priority.as_str(),
                serde_json::to_string(&task.tags)?,
                task.due_date,
            ],
        )?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }
        Ok(())
    }

    /// Flips completion in either direction; there is no terminal state.
    pub fn set_completed(&mut self, id: i64, completed: bool) -> Result<()> {
        let affected = self.conn.execute(UPDATE_COMPLETED, params![id, completed])?;
        if affected == 0 {
            return Err(msg_error_anyhow!(Message::TaskNotFound(id)));
        }
        Ok(())
    }

    /// Deletes a task, returning the number of removed rows.
    pub fn delete(&mut self, id: i64) -> Result<usize> {
        Ok(self.conn.execute(DELETE_TASK, params![id])?)
    }

    pub fn delete_many(&mut self, ids: &[i64]) -> Result<usize> {
        let placeholders = vec!["?"; ids.len()].join(", ");
        let sql = format!("DELETE FROM tasks {} ({})", WHERE_ID_IN, placeholders);
        Ok(self.conn.execute(&sql, params_from_iter(ids.iter()))?)
    }

    pub fn get_by_id(&mut self, id: i64) -> Result<Option<Task>> {
        self.conn
            .query_row(&format!("{} WHERE id = ?1", SELECT_TASKS), params![id], Self::map_row)
            .optional()
            .map_err(Into::into)
    }

    /// Fetches tasks matching the query, ordered by insertion.
    pub fn fetch(&mut self, query: TaskQuery) -> Result<Vec<Task>> {
        let (sql, bindings): (String, Vec<rusqlite::types::Value>) = match query {
            TaskQuery::All => (format!("{} {}", SELECT_TASKS, ORDER_BY_ID), vec![]),
            TaskQuery::ByIds(ids) => {
                let placeholders = vec!["?"; ids.len()].join(", ");
                (
                    format!("{} {} ({}) {}", SELECT_TASKS, WHERE_ID_IN, placeholders, ORDER_BY_ID),
                    ids.into_iter().map(Into::into).collect(),
                )
            }
            TaskQuery::Completed(completed) => (
                format!("{} {} {}", SELECT_TASKS, WHERE_COMPLETED, ORDER_BY_ID),
                vec![completed.into()],
            ),
            TaskQuery::ByRemoteId(remote_id) => (
                format!("{} {} {}", SELECT_TASKS, WHERE_REMOTE_ID, ORDER_BY_ID),
                vec![remote_id.into()],
            ),
        };

        let mut stmt = self.conn.prepare(&sql)?;
        let task_iter = stmt.query_map(params_from_iter(bindings.iter()), Self::map_row)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    /// Inserts or updates a task coming from the sync server.
    ///
    /// Matching happens on `remote_id`; returns true when a new row was
    /// created.
    pub fn upsert_remote(&mut self, task: &Task) -> Result<bool> {
        let remote_id = match &task.remote_id {
            Some(id) => id.clone(),
            None => {
                self.insert(task)?;
                return Ok(true);
            }
        };

        match self.fetch(TaskQuery::ByRemoteId(remote_id))?.into_iter().next() {
            Some(existing) => {
                let mut updated = task.clone();
                updated.id = existing.id;
                self.update(&updated)?;
                Ok(false)
            }
            None => {
                self.insert(task)?;
                Ok(true)
            }
        }
    }

    fn map_row(row: &Row) -> rusqlite::Result<Task> {
        let priority: String = row.get(4)?;
        let tags: String = row.get(5)?;
        Ok(Task {
            id: row.get(0)?,
            title: row.get(1)?,
            description: row.get(2)?,
            completed: row.get(3)?,
            priority: priority.parse().unwrap_or_default(),
            tags: serde_json::from_str(&tags).unwrap_or_default(),
            due_date: row.get(6)?,
            created_at: row.get(7)?,
            remote_id: row.get(8)?,
        })
    }
}
