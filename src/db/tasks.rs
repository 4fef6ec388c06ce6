//! SQLite-backed task store.
//!
//! Tasks live in the `scheduler` table created by the migrations. Dates are
//! stored as `YYYYMMDD` text, which sorts chronologically, so due listings
//! are a plain range scan over `idx_date`.
//!
//! ## Usage
//!
//! ```rust
//! use scheduler::db::{db::Db, store::TaskStore, tasks::Tasks};
//! use scheduler::libs::task::Task;
//!
//! let tasks = Tasks::from_db(Db::in_memory()?);
//! let id = tasks.insert(&Task::new("20240301", "Water plants", "", "d 7"))?;
//! assert_eq!(tasks.find_by_id(&id)?.title, "Water plants");
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use super::store::TaskStore;
use crate::libs::date::format_date;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::Task;
use anyhow::Result;
use chrono::NaiveDate;
use parking_lot::Mutex;
use rusqlite::{params, Connection, OptionalExtension, Row};

const INSERT_TASK: &str = "INSERT INTO scheduler (date, title, comment, repeat) VALUES (?1, ?2, ?3, ?4)";
const SELECT_TASK_BY_ID: &str = "SELECT id, date, title, comment, repeat FROM scheduler WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE scheduler SET date = ?2, title = ?3, comment = ?4, repeat = ?5 WHERE id = ?1";
const DELETE_TASK: &str = "DELETE FROM scheduler WHERE id = ?1";

/// Ties on date fall back to id so output is stable for a given table state.
const SELECT_DUE_TASKS: &str = "SELECT id, date, title, comment, repeat FROM scheduler WHERE date >= ?1 ORDER BY date ASC, id ASC LIMIT ?2";

pub struct Tasks {
    conn: Mutex<Connection>,
}

impl Tasks {
    /// Opens the configured database.
    pub fn new() -> Result<Self> {
        Ok(Self::from_db(Db::new()?))
    }

    pub fn from_db(db: Db) -> Self {
        Tasks { conn: Mutex::new(db.conn) }
    }

    /// Ids are opaque strings to callers but integers in SQLite.
    ///
    /// A string that is not a row id can never match one, so it reports
    /// `NotFound` rather than a format error.
    fn row_id(id: &str) -> TaskResult<i64> {
        let id = id.trim();
        if id.is_empty() {
            return Err(TaskError::MissingId);
        }
        id.parse().map_err(|_| TaskError::NotFound(id.to_string()))
    }

    fn map_task(row: &Row) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get::<_, i64>(0)?.to_string(),
            date: row.get(1)?,
            title: row.get(2)?,
            comment: row.get(3)?,
            repeat: row.get(4)?,
        })
    }
}

impl TaskStore for Tasks {
    fn insert(&self, task: &Task) -> TaskResult<String> {
        let conn = self.conn.lock();
        conn.execute(INSERT_TASK, params![task.date, task.title, task.comment, task.repeat])?;
        let id = conn.last_insert_rowid().to_string();
        tracing::debug!(id = %id, date = %task.date, "task inserted");

        Ok(id)
    }

    fn find_by_id(&self, id: &str) -> TaskResult<Task> {
        let row_id = Self::row_id(id)?;
        self.conn
            .lock()
            .query_row(SELECT_TASK_BY_ID, params![row_id], Self::map_task)
            .optional()?
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    fn replace(&self, task: &Task) -> TaskResult<()> {
        let row_id = Self::row_id(&task.id)?;
        let affected = self
            .conn
            .lock()
            .execute(UPDATE_TASK, params![row_id, task.date, task.title, task.comment, task.repeat])?;
        if affected == 0 {
            return Err(TaskError::NotFound(task.id.clone()));
        }
        tracing::debug!(id = %task.id, date = %task.date, "task replaced");

        Ok(())
    }

    fn remove(&self, id: &str) -> TaskResult<()> {
        let row_id = Self::row_id(id)?;
        let affected = self.conn.lock().execute(DELETE_TASK, params![row_id])?;
        if affected == 0 {
            return Err(TaskError::NotFound(id.to_string()));
        }
        tracing::debug!(id = %id, "task removed");

        Ok(())
    }

    fn list_due(&self, today: NaiveDate, limit: usize) -> TaskResult<Vec<Task>> {
        let limit = i64::try_from(limit).unwrap_or(i64::MAX);
        let conn = self.conn.lock();
        let mut stmt = conn.prepare(SELECT_DUE_TASKS)?;
        let task_iter = stmt.query_map(params![format_date(today), limit], Self::map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }
}
