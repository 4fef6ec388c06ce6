//! # Scheduler
//!
//! A command-line task planner. Tasks carry a due date and an optional
//! repeat rule; marking a one-off task done deletes it, while a recurring
//! task moves on to its next occurrence.
//!
//! ## Features
//!
//! - **Recurrence Engine**: `d <N>` (every N days) and `y` (yearly) rules
//! - **Lifecycle Policy**: overdue dates are normalized on create and update
//! - **Task Storage**: SQLite with versioned migrations, plus an in-memory store
//! - **JSON Output**: the same task/error shapes a web front end consumes
//!
//! ## Usage
//!
//! ```rust,no_run
//! use scheduler::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
