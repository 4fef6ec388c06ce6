//! Core library modules for the scheduler.
//!
//! ## Features
//!
//! - **Dates**: strict `YYYYMMDD` parsing and formatting
//! - **Recurrence**: next-occurrence calculation for `d <N>` and `y` rules
//! - **Lifecycle**: date normalization on create/update and the done transition
//! - **Infrastructure**: configuration, data directory, messages, terminal views
//!
//! ## Usage
//!
//! ```rust
//! use scheduler::libs::date::parse_date;
//! use scheduler::libs::repeat::next_date;
//!
//! let today = parse_date("20240101")?;
//! let next = next_date(today, "20231225", "y")?;
//! assert_eq!(next, parse_date("20241225")?);
//! # Ok::<(), scheduler::libs::error::TaskError>(())
//! ```

pub mod config;
pub mod data_storage;
pub mod date;
pub mod error;
pub mod lifecycle;
pub mod messages;
pub mod repeat;
pub mod task;
pub mod view;
