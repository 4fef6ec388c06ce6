//! Database layer for the scheduler.
//!
//! Persists tasks in SQLite behind the [`store::TaskStore`] trait, which the
//! lifecycle policy consumes. An in-memory implementation of the same trait
//! backs the tests.
//!
//! ## Usage
//!
//! ```rust
//! use scheduler::db::{db::Db, store::TaskStore, tasks::Tasks};
//! use scheduler::libs::date::parse_date;
//!
//! let tasks = Tasks::from_db(Db::in_memory()?);
//! let due = tasks.list_due(parse_date("20240101")?, 10)?;
//! assert!(due.is_empty());
//! # Ok::<(), anyhow::Error>(())
//! ```

/// Connection bootstrap: resolves the database file and applies migrations.
pub mod db;

/// In-memory [`store::TaskStore`] with the same id and ordering guarantees.
pub mod memory;

/// Versioned schema changes and their history.
pub mod migrations;

/// The storage contract consumed by the lifecycle policy.
pub mod store;

/// SQLite implementation of the storage contract.
pub mod tasks;
