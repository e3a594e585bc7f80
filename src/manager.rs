//! Collection manager: the task list plus its backing file
//!
//! Every successful mutation rewrites the whole file. Failed validation and
//! unknown ids leave both memory and disk untouched.

use std::path::Path;

use crate::error::{TodoError, TodoResult};
use crate::storage::Storage;
use crate::todo::{
    DEFAULT_CATEGORIES, NewTask, Progress, TaskFilter, TaskList, TaskUpdate, TodoItem,
    local_date_today,
};

pub struct TaskManager {
    tasks: TaskList,
    storage: Storage,
    load_warning: Option<String>,
}

impl TaskManager {
    /// Open the task file at `path`
    ///
    /// Never fails: a corrupt or unreadable file is logged, remembered as a
    /// warning for the front-end, and replaced by an empty list.
    pub fn open(path: impl AsRef<Path>) -> Self {
        Self::with_storage(Storage::new(path))
    }

    pub fn with_storage(storage: Storage) -> Self {
        let loaded = storage.load().and_then(|items| {
            TaskList::from_items(items).map_err(|e| TodoError::CorruptData {
                path: storage.path().to_path_buf(),
                reason: e.to_string(),
            })
        });

        let (tasks, load_warning) = match loaded {
            Ok(tasks) => (tasks, None),
            Err(e) => {
                tracing::warn!(error = %e, "starting with an empty task list");
                (
                    TaskList::new(),
                    Some(format!("{}. Starting with an empty task list.", e)),
                )
            }
        };

        Self {
            tasks,
            storage,
            load_warning,
        }
    }

    pub fn tasks(&self) -> &TaskList {
        &self.tasks
    }

    pub fn storage(&self) -> &Storage {
        &self.storage
    }

    /// Warning produced while loading the file, if it was corrupt
    pub fn load_warning(&self) -> Option<&str> {
        self.load_warning.as_deref()
    }

    pub fn get(&self, id: u64) -> TodoResult<&TodoItem> {
        self.tasks.get(id).ok_or(TodoError::NotFound(id))
    }

    /// Create a task and persist
    pub fn add(&mut self, new_task: NewTask) -> TodoResult<TodoItem> {
        let item = self.tasks.add(new_task)?.clone();
        tracing::debug!(id = item.id(), "added task");
        self.persist()?;
        Ok(item)
    }

    /// Update fields of an existing task and persist
    pub fn edit(&mut self, id: u64, update: &TaskUpdate) -> TodoResult<TodoItem> {
        let item = self.tasks.update(id, update)?.clone();
        tracing::debug!(id, "edited task");
        self.persist()?;
        Ok(item)
    }

    /// Flip completion of a task and persist
    pub fn toggle(&mut self, id: u64) -> TodoResult<TodoItem> {
        let item = self.tasks.toggle(id)?.clone();
        tracing::debug!(id, completed = item.base().is_completed(), "toggled task");
        self.persist()?;
        Ok(item)
    }

    /// Delete a task and persist
    pub fn remove(&mut self, id: u64) -> TodoResult<TodoItem> {
        let item = self.tasks.remove(id)?;
        tracing::debug!(id, "removed task");
        self.persist()?;
        Ok(item)
    }

    pub fn find(&self, keyword: &str) -> Vec<TodoItem> {
        self.tasks.find(keyword)
    }

    /// Filter as of the local current date
    pub fn filter(&self, filter: &TaskFilter) -> Vec<TodoItem> {
        self.tasks.filter(filter, local_date_today())
    }

    pub fn progress(&self) -> Progress {
        self.tasks.progress()
    }

    /// Preset categories followed by any other labels in use
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> =
            DEFAULT_CATEGORIES.iter().map(|c| c.to_string()).collect();
        for category in self.tasks.categories() {
            if !categories.iter().any(|c| c.eq_ignore_ascii_case(&category)) {
                categories.push(category);
            }
        }
        categories
    }

    fn persist(&mut self) -> TodoResult<()> {
        self.storage.save(self.tasks.items()).inspect_err(|e| {
            tracing::error!(error = %e, "failed to save tasks");
        })?;
        // the corrupt file has now been replaced
        self.load_warning = None;
        Ok(())
    }
}
