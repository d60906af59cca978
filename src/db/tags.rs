//! Tag maintenance over the task store.
//!
//! Tags live on the task rows themselves (ordered JSON arrays), so tag-level
//! operations decode, transform and write back the affected rows rather than
//! touching a separate table.

use crate::db::db::Db;
use crate::libs::messages::Message;
use crate::libs::task::{Task, TaskQuery};
use crate::msg_error_anyhow;
use anyhow::Result;
use rusqlite::{params, Connection};
use std::collections::BTreeMap;

const SELECT_TAGS: &str = "SELECT id, tags FROM tasks";
const UPDATE_TAGS: &str = "UPDATE tasks SET tags = ?2 WHERE id = ?1";

/// A tag together with the number of tasks carrying it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagUsage {
    pub name: String,
    pub tasks: usize,
}

pub struct Tags {
    conn: Connection,
}

impl Tags {
    pub fn new() -> Result<Self> {
        let db = Db::new()?;
        Ok(Self { conn: db.conn })
    }

    /// All tags in use, alphabetical, with per-task usage counts.
    ///
    /// A task carrying the same tag twice still counts once here; the
    /// duplicates stay on the task itself.
    pub fn list(&mut self) -> Result<Vec<TagUsage>> {
        let mut counts: BTreeMap<String, usize> = BTreeMap::new();

        for (_, tags) in self.rows()? {
            let mut seen: Vec<&String> = Vec::new();
            for tag in &tags {
                if !seen.contains(&tag) {
                    *counts.entry(tag.clone()).or_insert(0) += 1;
                    seen.push(tag);
                }
            }
        }

        Ok(counts.into_iter().map(|(name, tasks)| TagUsage { name, tasks }).collect())
    }

    /// Renames a tag on every task carrying it, preserving position.
    ///
    /// Returns the number of tasks touched.
    pub fn rename(&mut self, from: &str, to: &str) -> Result<usize> {
        let mut touched = 0;

        for (id, tags) in self.rows()? {
            if !tags.iter().any(|t| t == from) {
                continue;
            }
            let renamed: Vec<String> = tags.iter().map(|t| if t == from { to.to_string() } else { t.clone() }).collect();
            self.conn.execute(UPDATE_TAGS, params![id, serde_json::to_string(&renamed)?])?;
            touched += 1;
        }

        if touched == 0 {
            return Err(msg_error_anyhow!(Message::TagNotFound(from.to_string())));
        }
        Ok(touched)
    }

    /// Removes a tag from every task carrying it.
    ///
    /// Returns the number of tasks touched.
    pub fn remove(&mut self, tag: &str) -> Result<usize> {
        let mut touched = 0;

        for (id, tags) in self.rows()? {
            if !tags.iter().any(|t| t == tag) {
                continue;
            }
            let remaining: Vec<String> = tags.into_iter().filter(|t| t != tag).collect();
            self.conn.execute(UPDATE_TAGS, params![id, serde_json::to_string(&remaining)?])?;
            touched += 1;
        }

        if touched == 0 {
            return Err(msg_error_anyhow!(Message::TagNotFound(tag.to_string())));
        }
        Ok(touched)
    }

    /// Tasks carrying the given tag, in insertion order.
    pub fn tasks_with_tag(&mut self, tag: &str) -> Result<Vec<Task>> {
        let ids: Vec<i64> = self
            .rows()?
            .into_iter()
            .filter(|(_, tags)| tags.iter().any(|t| t == tag))
            .map(|(id, _)| id)
            .collect();

        if ids.is_empty() {
            return Ok(Vec::new());
        }

        let mut tasks = crate::db::tasks::Tasks::new()?;
        tasks.fetch(TaskQuery::ByIds(ids))
    }

    fn rows(&mut self) -> Result<Vec<(i64, Vec<String>)>> {
        let mut stmt = self.conn.prepare(SELECT_TAGS)?;
        let row_iter = stmt.query_map([], |row| {
            let id: i64 = row.get(0)?;
            let tags: String = row.get(1)?;
            Ok((id, tags))
        })?;

        let mut rows = Vec::new();
        for row in row_iter {
            let (id, tags) = row?;
            rows.push((id, serde_json::from_str(&tags).unwrap_or_default()));
        }
        Ok(rows)
    }
}
