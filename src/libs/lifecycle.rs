//! Task lifecycle policy: date normalization on create/update and the
//! transition taken when a task is marked done.
//!
//! All functions are pure apart from the store they are handed, and take
//! "today" as an argument so callers decide which calendar day applies.
//!
//! ## Date normalization
//!
//! 1. An empty date becomes today.
//! 2. A non-empty date must parse as `YYYYMMDD`, otherwise the call fails.
//! 3. A date before today is moved forward:
//!    - one-off tasks move to today;
//!    - recurring tasks move to their next occurrence. On creation that
//!      occurrence is clamped back to today, so an overdue recurring task
//!      always starts today. Updates keep the computed occurrence.
//! 4. A date on or after today is kept as is.
//!
//! ## Usage
//!
//! ```rust
//! use scheduler::db::{memory::MemoryTasks, store::TaskStore};
//! use scheduler::libs::date::parse_date;
//! use scheduler::libs::lifecycle::{add_task, complete_task, Completion};
//! use scheduler::libs::task::Task;
//!
//! let store = MemoryTasks::new();
//! let today = parse_date("20240310")?;
//! let id = add_task(&store, Task::new("20240315", "Water plants", "", "d 7"), today)?;
//!
//! match complete_task(&store, &id, today)? {
//!     Completion::Rescheduled(task) => assert_eq!(task.date, "20240322"),
//!     Completion::Removed => unreachable!(),
//! }
//! # Ok::<(), scheduler::libs::error::TaskError>(())
//! ```

use super::date::{format_date, parse_date};
use super::error::{TaskError, TaskResult};
use super::repeat::{next_date, Rule};
use super::task::Task;
use crate::db::store::TaskStore;
use chrono::NaiveDate;

/// Which write path a task is being normalized for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Normalization {
    Create,
    Update,
}

/// Outcome of marking a task done.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Completion {
    /// One-off task, deleted from the store.
    Removed,
    /// Recurring task, stored again with its next date.
    Rescheduled(Task),
}

/// A bounded due listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DueTasks {
    pub tasks: Vec<Task>,
    /// More tasks were due than the bound allowed.
    pub truncated: bool,
}

/// Resolves the date a task should be stored with.
pub fn normalize_date(date: &str, repeat: &str, today: NaiveDate, mode: Normalization) -> TaskResult<NaiveDate> {
    let date = if date.is_empty() { today } else { parse_date(date)? };

    if date >= today {
        return Ok(date);
    }

    let repeat = repeat.trim();
    if repeat.is_empty() {
        return Ok(today);
    }

    let next = Rule::parse(repeat)?.next_after(date, today)?;
    match mode {
        Normalization::Create if next > today => Ok(today),
        _ => Ok(next),
    }
}

/// Validates a task and normalizes its date and repeat rule.
///
/// A non-empty rule is parsed even when the date needs no adjustment, so a
/// broken rule is never stored.
pub fn prepare(task: Task, today: NaiveDate, mode: Normalization) -> TaskResult<Task> {
    if task.title.trim().is_empty() {
        return Err(TaskError::EmptyTitle);
    }

    let repeat = task.repeat.trim().to_string();
    if !repeat.is_empty() {
        Rule::parse(&repeat)?;
    }

    let date = normalize_date(&task.date, &repeat, today, mode)?;

    Ok(Task {
        date: format_date(date),
        repeat,
        ..task
    })
}

/// Creates a task and returns the id assigned by the store.
pub fn add_task<S: TaskStore + ?Sized>(store: &S, task: Task, today: NaiveDate) -> TaskResult<String> {
    let task = prepare(task, today, Normalization::Create)?;
    let id = store.insert(&task)?;
    tracing::debug!(id = %id, date = %task.date, "task created");

    Ok(id)
}

/// Replaces every field of an existing task and returns what was stored.
pub fn update_task<S: TaskStore + ?Sized>(store: &S, task: Task, today: NaiveDate) -> TaskResult<Task> {
    if task.id.trim().is_empty() {
        return Err(TaskError::MissingId);
    }

    let task = prepare(task, today, Normalization::Update)?;
    store.replace(&task)?;
    tracing::debug!(id = %task.id, date = %task.date, "task updated");

    Ok(task)
}

/// Lists up to `limit` due tasks, earliest first.
///
/// One extra row is fetched so a listing that exactly fills the bound is not
/// reported as truncated.
pub fn due_tasks<S: TaskStore + ?Sized>(store: &S, today: NaiveDate, limit: usize) -> TaskResult<DueTasks> {
    let mut tasks = store.list_due(today, limit.saturating_add(1))?;
    let truncated = tasks.len() > limit;
    tasks.truncate(limit);

    Ok(DueTasks { tasks, truncated })
}

/// Marks a task done: one-off tasks are deleted, recurring ones advance.
///
/// This reads and then writes without a transaction. Two concurrent calls
/// for the same recurring task both advance from the same stored date and
/// write the same value; for a one-off task the slower caller gets
/// `NotFound` from the delete. If the next date cannot be computed the
/// stored task is left untouched.
pub fn complete_task<S: TaskStore + ?Sized>(store: &S, id: &str, today: NaiveDate) -> TaskResult<Completion> {
    if id.trim().is_empty() {
        return Err(TaskError::MissingId);
    }

    let mut task = store.find_by_id(id)?;

    if !task.is_recurring() {
        store.remove(&task.id)?;
        tracing::debug!(id = %task.id, "one-off task done");
        return Ok(Completion::Removed);
    }

    let next = next_date(today, &task.date, &task.repeat)?;
    task.date = format_date(next);
    store.replace(&task)?;
    tracing::debug!(id = %task.id, date = %task.date, "recurring task advanced");

    Ok(Completion::Rescheduled(task))
}
