//! Query methods for TaskList
//!
//! Searching, filtering and progress statistics. None of these mutate the
//! list; results are clones in insertion order.

use chrono::NaiveDate;
use serde::Serialize;

use super::task::{TaskItem, TaskStatus, TodoItem};
use super::task_list::TaskList;

/// Aggregate completion statistics
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Progress {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    /// Completed share rounded to the nearest whole percent; 0 for an empty list
    pub percent: u8,
}

impl Progress {
    /// Build statistics from raw counts; `completed` is capped at `total`
    pub fn from_counts(total: usize, completed: usize) -> Self {
        let completed = completed.min(total);
        let percent = if total == 0 {
            0
        } else {
            (completed as f64 * 100.0 / total as f64).round() as u8
        };
        Self {
            total,
            completed,
            pending: total - completed,
            percent,
        }
    }
}

/// Criteria for `TaskList::filter`; unset fields match everything
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    /// Case-insensitive exact category match
    pub category: Option<String>,
    /// Case-insensitive substring over title, description and category
    pub keyword: Option<String>,
}

impl TaskList {
    /// Search tasks by keyword
    ///
    /// A blank keyword returns every task.
    pub fn find(&self, keyword: &str) -> Vec<TodoItem> {
        let keyword_lower = keyword.trim().to_lowercase();
        self.items
            .iter()
            .filter(|item| item.base().matches_keyword(&keyword_lower))
            .cloned()
            .collect()
    }

    /// Filter tasks by status, category and keyword as of `today`
    pub fn filter(&self, filter: &TaskFilter, today: NaiveDate) -> Vec<TodoItem> {
        let keyword_lower = filter
            .keyword
            .as_ref()
            .map(|k| k.trim().to_lowercase())
            .filter(|k| !k.is_empty());
        let category_lower = filter
            .category
            .as_ref()
            .map(|c| c.trim().to_lowercase())
            .filter(|c| !c.is_empty());

        self.items
            .iter()
            .filter(|item| {
                filter
                    .status
                    .is_none_or(|status| item.status_on(today) == status)
            })
            .filter(|item| {
                category_lower
                    .as_ref()
                    .is_none_or(|c| item.base().category().to_lowercase() == *c)
            })
            .filter(|item| {
                keyword_lower
                    .as_ref()
                    .is_none_or(|k| item.base().matches_keyword(k))
            })
            .cloned()
            .collect()
    }

    /// Distinct categories in first-seen order
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            let category = item.base().category();
            if !categories.iter().any(|c| c == category) {
                categories.push(category.to_string());
            }
        }
        categories
    }

    /// Completion statistics over the whole list
    pub fn progress(&self) -> Progress {
        let completed = self
            .items
            .iter()
            .filter(|item| item.base().is_completed())
            .count();
        Progress::from_counts(self.items.len(), completed)
    }
}
