//! Storage collaborator consumed by the lifecycle policy.
//!
//! The trait takes `&self` so a single handle can be shared between threads;
//! implementations serialize access internally. Each call maps to a single
//! atomic operation on the backing store.

use crate::libs::error::TaskResult;
use crate::libs::task::Task;
use chrono::NaiveDate;

pub trait TaskStore {
    /// Stores a new task and returns its freshly assigned id.
    ///
    /// The incoming `id` is ignored. Ids are never reused, even after delete.
    fn insert(&self, task: &Task) -> TaskResult<String>;

    /// Fails with `NotFound` if no task has this id.
    fn find_by_id(&self, id: &str) -> TaskResult<Task>;

    /// Replaces every field of the task matching `task.id`.
    fn replace(&self, task: &Task) -> TaskResult<()>;

    fn remove(&self, id: &str) -> TaskResult<()>;

    /// Up to `limit` tasks dated on or after `today`, earliest first.
    fn list_due(&self, today: NaiveDate, limit: usize) -> TaskResult<Vec<Task>>;
}
