//! In-memory task store.
//!
//! Mirrors the SQLite store's contract: ids come from a counter that never
//! goes backwards, and due listings sort by date with id as tie-breaker.

use super::store::TaskStore;
use crate::libs::date::format_date;
use crate::libs::error::{TaskError, TaskResult};
use crate::libs::task::Task;
use chrono::NaiveDate;
use parking_lot::Mutex;
use std::collections::BTreeMap;

#[derive(Debug, Default)]
struct MemoryState {
    last_id: u64,
    rows: BTreeMap<u64, Task>,
}

/// In-memory task store with the same contract as the SQLite one.
///
/// Used by tests and as a scratch store; nothing is persisted.
#[derive(Debug, Default)]
pub struct MemoryTasks {
    state: Mutex<MemoryState>,
}

impl MemoryTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.state.lock().rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn key(id: &str) -> TaskResult<u64> {
        let id = id.trim();
        if id.is_empty() {
            return Err(TaskError::MissingId);
        }
        id.parse().map_err(|_| TaskError::NotFound(id.to_string()))
    }
}

impl TaskStore for MemoryTasks {
    fn insert(&self, task: &Task) -> TaskResult<String> {
        let mut state = self.state.lock();
        state.last_id += 1;
        let key = state.last_id;
        let id = key.to_string();
        state.rows.insert(key, Task { id: id.clone(), ..task.clone() });

        Ok(id)
    }

    fn find_by_id(&self, id: &str) -> TaskResult<Task> {
        let key = Self::key(id)?;
        self.state
            .lock()
            .rows
            .get(&key)
            .cloned()
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    fn replace(&self, task: &Task) -> TaskResult<()> {
        let key = Self::key(&task.id)?;
        let mut state = self.state.lock();
        match state.rows.get_mut(&key) {
            Some(row) => {
                *row = Task { id: key.to_string(), ..task.clone() };
                Ok(())
            }
            None => Err(TaskError::NotFound(task.id.clone())),
        }
    }

    fn remove(&self, id: &str) -> TaskResult<()> {
        let key = Self::key(id)?;
        self.state
            .lock()
            .rows
            .remove(&key)
            .map(|_| ())
            .ok_or_else(|| TaskError::NotFound(id.to_string()))
    }

    fn list_due(&self, today: NaiveDate, limit: usize) -> TaskResult<Vec<Task>> {
        let today = format_date(today);
        let state = self.state.lock();
        // BTreeMap iterates by id, so a stable sort on date keeps id as the tie-breaker.
        let mut due: Vec<Task> = state.rows.values().filter(|task| task.date >= today).cloned().collect();
        due.sort_by(|a, b| a.date.cmp(&b.date));
        due.truncate(limit);

        Ok(due)
    }
}
