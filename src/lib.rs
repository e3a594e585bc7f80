//! To-do MCP Server Library
//!
//! This library provides a Model Context Protocol (MCP) server for a simple
//! single-user to-do list. Tasks have an optional deadline from which a
//! display status (completed, overdue, urgent, normal) is derived.
//!
//! # Architecture
//!
//! The library follows a 3-layer architecture:
//! - **MCP Layer**: `TodoServerHandler` - Handles MCP protocol communication
//! - **Domain Layer**: `todo` module and `TaskManager` - Task models and collection operations
//! - **Persistence Layer**: `storage` module - Whole-file JSON storage
//!
//! # Example
//!
//! ```no_run
//! use todo_mcp::TodoServerHandler;
//! use anyhow::Result;
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let handler = TodoServerHandler::new("tasks.json");
//!     // Use handler with MCP server...
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod formatting;
pub mod handlers;
pub mod manager;
pub mod storage;
pub mod todo;
pub mod validation;

use mcp_attr::Result as McpResult;
use mcp_attr::server::{McpServer, mcp_server};
use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

// Re-export commonly used types
pub use error::{TodoError, TodoResult};
pub use manager::TaskManager;
pub use storage::Storage;
pub use todo::{
    DeadlineTask, NewTask, Progress, Task, TaskFilter, TaskItem, TaskList, TaskStatus, TaskUpdate,
    TodoItem,
};

/// MCP Server handler for to-do list management
///
/// Every change is persisted to a JSON file immediately.
pub struct TodoServerHandler {
    pub(crate) manager: Mutex<TaskManager>,
}

impl TodoServerHandler {
    /// Create a new to-do server handler
    ///
    /// # Arguments
    /// * `storage_path` - Path to the task data file (JSON format)
    ///
    /// A corrupt data file does not prevent start-up; the handler starts with
    /// an empty list, and `list` plus the first change report the problem.
    ///
    /// # Example
    /// ```no_run
    /// # use todo_mcp::TodoServerHandler;
    /// let handler = TodoServerHandler::new("tasks.json");
    /// ```
    pub fn new(storage_path: impl AsRef<Path>) -> Self {
        Self::from_manager(TaskManager::open(storage_path))
    }

    pub fn from_manager(manager: TaskManager) -> Self {
        Self {
            manager: Mutex::new(manager),
        }
    }

    /// Lock the task manager
    ///
    /// Every handler finishes its mutation before releasing the lock, so a
    /// poisoned lock still guards consistent data.
    pub(crate) fn manager(&self) -> MutexGuard<'_, TaskManager> {
        self.manager.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Warning raised while loading the data file, if any
    pub fn load_warning(&self) -> Option<String> {
        self.manager().load_warning().map(str::to_string)
    }
}

/// To-do list server for tracking personal tasks with optional deadlines.
///
/// Each task has a numeric ID, a title, an optional description and category
/// (default "General"; suggested: General, Study, Work, Personal), a completion
/// flag, and an optional deadline.
///
/// Status is derived, never set directly:
/// - **Completed**: the task is marked done
/// - **Overdue**: open and the deadline has passed
/// - **Urgent**: open and the deadline is today or within the next 3 days
/// - **Normal**: everything else, including tasks without a deadline
///
/// Dates use YYYY-MM-DD (DD-MM-YYYY is accepted too).
#[mcp_server]
impl McpServer for TodoServerHandler {
    /// **Add**: Create a new task. Title is required and must not be blank.
    /// **Returns**: The ID assigned to the task.
    #[tool]
    async fn add(
        &self,
        /// Title: short description of the task (required, non-empty)
        title: String,
        /// Description: longer details (optional)
        description: Option<String>,
        /// Category label, e.g. "Work", "Study" (optional, default "General")
        category: Option<String>,
        /// Deadline: YYYY-MM-DD (optional)
        deadline: Option<String>,
    ) -> McpResult<String> {
        self.handle_add(title, description, category, deadline).await
    }

    /// **Edit**: Change task fields. Omitted fields are left unchanged.
    /// **Tip**: Use deadline="" to clear the deadline.
    #[tool]
    async fn edit(
        &self,
        /// ID of task to edit
        id: u64,
        /// New title (optional, non-empty)
        title: Option<String>,
        /// New description (optional)
        description: Option<String>,
        /// New category (optional)
        category: Option<String>,
        /// New deadline YYYY-MM-DD, ""=clear (optional)
        deadline: Option<String>,
    ) -> McpResult<String> {
        self.handle_edit(id, title, description, category, deadline).await
    }

    /// **Toggle**: Switch a task between completed and pending.
    #[tool]
    async fn toggle(
        &self,
        /// ID of task to toggle
        id: u64,
    ) -> McpResult<String> {
        self.handle_toggle(id).await
    }

    /// **Remove**: Permanently delete a task.
    #[tool]
    async fn remove(
        &self,
        /// ID of task to delete
        id: u64,
    ) -> McpResult<String> {
        self.handle_remove(id).await
    }

    /// **Find**: Case-insensitive keyword search in title, description and category.
    #[tool]
    async fn find(
        &self,
        /// Keyword to search for
        keyword: String,
    ) -> McpResult<String> {
        self.handle_find(keyword).await
    }

    /// **List**: Show tasks in creation order, optionally filtered.
    /// **Use**: No filter=all; status="urgent"=due within 3 days; status="overdue"=past deadline.
    #[tool]
    async fn list(
        &self,
        /// Status filter: completed/overdue/urgent/normal (optional)
        status: Option<String>,
        /// Category filter, exact match ignoring case (optional)
        category: Option<String>,
        /// Keyword filter (optional)
        keyword: Option<String>,
    ) -> McpResult<String> {
        self.handle_list(status, category, keyword).await
    }

    /// **Progress**: Totals and completion percentage across all tasks.
    #[tool]
    async fn progress(&self) -> McpResult<String> {
        self.handle_progress().await
    }

    /// **Categories**: Preset categories plus any others already in use.
    #[tool]
    async fn categories(&self) -> McpResult<String> {
        self.handle_categories().await
    }
}
