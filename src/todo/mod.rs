//! To-do domain models and business logic
//!
//! This module contains the core task data structures and their implementations.
//! It is split into submodules:
//! - `task`: `Task`, `DeadlineTask`, the stored `TodoItem` variant and status rules
//! - `task_list`: ordered in-memory collection with mutating operations
//! - `queries`: search, filter and progress statistics for `TaskList`
//! - `serde_impl`: persisted record shape and lenient deserialization
//! - `dates`: date parsing and local clock helpers

mod dates;
mod queries;
mod serde_impl;
mod task;
mod task_list;

// Re-export all public types
pub use dates::{local_date_today, parse_deadline};
pub use queries::{Progress, TaskFilter};
pub use serde_impl::TaskRecord;
pub use task::{
    DEFAULT_CATEGORIES, DEFAULT_CATEGORY, DeadlineTask, Task, TaskItem, TaskKind, TaskStatus,
    TodoItem, URGENT_WINDOW_DAYS, derive_status,
};
pub use task_list::{NewTask, TaskList, TaskUpdate};
