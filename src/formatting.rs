//! Formatting helper functions for the to-do MCP server
//!
//! This module contains formatting logic for displaying tasks and progress.

use crate::todo::{Progress, TaskItem, TodoItem};
use chrono::NaiveDate;

/// Format tasks into a display string
///
/// # Arguments
/// * `tasks` - Tasks to format, in display order
/// * `today` - Date used to derive each task's status
///
/// # Returns
/// Formatted string representation of the tasks
pub fn format_tasks(tasks: &[TodoItem], today: NaiveDate) -> String {
    if tasks.is_empty() {
        return "No tasks found".to_string();
    }

    let mut result = format!("Found {} task(s):\n\n", tasks.len());
    for item in tasks {
        let task = item.base();
        result.push_str(&format!(
            "- [{}] {} (status: {}, category: {})\n",
            task.id(),
            task.title(),
            item.status_on(today),
            task.category()
        ));

        if !task.description().is_empty() {
            result.push_str(&format!("  Description: {}\n", task.description()));
        }
        if let Some(deadline) = item.deadline() {
            result.push_str(&format!("  Deadline: {}\n", deadline));
        }
        result.push_str(&format!(
            "  Created: {}\n",
            task.created_at().format("%Y-%m-%d %H:%M")
        ));
    }

    result
}

/// One-line progress summary, as shown in a status bar
pub fn format_progress(progress: &Progress) -> String {
    format!(
        "Total: {}, Completed: {}, Pending: {}, Progress: {}%",
        progress.total, progress.completed, progress.pending, progress.percent
    )
}

/// Prefix a reply with the start-up warning about a corrupt data file
pub fn with_load_warning(warning: Option<&str>, reply: String) -> String {
    match warning {
        Some(w) => format!("Warning: {}\n\n{}", w, reply),
        None => reply,
    }
}

/// Comma separated category list
pub fn format_categories(categories: &[String]) -> String {
    format!("Categories: {}", categories.join(", "))
}
