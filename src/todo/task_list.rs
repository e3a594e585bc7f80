use chrono::NaiveDate;
use std::collections::HashSet;

use super::task::{DeadlineTask, Task, TaskItem, TodoItem};
use crate::error::{TodoError, TodoResult};

/// Fields for a task that is about to be created
///
/// Supplying a deadline (even `None`) makes the new task a `DeadlineTask`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub description: String,
    pub category: String,
    pub deadline: Option<Option<NaiveDate>>,
}

impl NewTask {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Default::default()
        }
    }

    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn category(mut self, category: impl Into<String>) -> Self {
        self.category = category.into();
        self
    }

    pub fn deadline(mut self, deadline: Option<NaiveDate>) -> Self {
        self.deadline = Some(deadline);
        self
    }
}

/// Field changes for an existing task; `None` leaves a field untouched
///
/// `deadline: Some(None)` clears the deadline.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub deadline: Option<Option<NaiveDate>>,
    pub completed: Option<bool>,
}

impl TaskUpdate {
    pub fn is_empty(&self) -> bool {
        self == &TaskUpdate::default()
    }
}

/// In-memory ordered task collection
///
/// Vec keeps insertion order, which is also the display and file order.
/// At the expected scale (tens to hundreds of tasks) linear lookups are fine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskList {
    pub(crate) items: Vec<TodoItem>,

    /// Next id to hand out; never reused within a process
    next_id: u64,
}

impl Default for TaskList {
    fn default() -> Self {
        Self {
            items: Vec::new(),
            next_id: 1,
        }
    }
}

impl TaskList {
    /// Create a new empty task list
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a task list from loaded items
    ///
    /// # Returns
    /// An error naming the first duplicated id, if any
    pub fn from_items(items: Vec<TodoItem>) -> TodoResult<Self> {
        let mut seen = HashSet::new();
        for item in &items {
            if !seen.insert(item.id()) {
                return Err(TodoError::validation(format!(
                    "duplicate task id {}",
                    item.id()
                )));
            }
        }

        let max_id = items.iter().map(TodoItem::id).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .ok_or_else(|| TodoError::validation(format!("task id {} is out of range", max_id)))?;
        Ok(Self { items, next_id })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    pub fn items(&self) -> &[TodoItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &TodoItem> {
        self.items.iter()
    }

    /// Find a task by its id
    pub fn get(&self, id: u64) -> Option<&TodoItem> {
        self.items.iter().find(|item| item.id() == id)
    }

    fn get_mut(&mut self, id: u64) -> TodoResult<&mut TodoItem> {
        self.items
            .iter_mut()
            .find(|item| item.id() == id)
            .ok_or(TodoError::NotFound(id))
    }

    fn allocate_id(&mut self) -> TodoResult<u64> {
        let id = self.next_id;
        self.next_id = id
            .checked_add(1)
            .ok_or_else(|| TodoError::validation("no task ids left to assign"))?;
        Ok(id)
    }

    /// Create and append a task
    ///
    /// The id is assigned only after validation succeeds.
    ///
    /// # Returns
    /// The newly created task
    pub fn add(&mut self, new_task: NewTask) -> TodoResult<&TodoItem> {
        if new_task.title.trim().is_empty() {
            return Err(TodoError::validation("Task title must not be empty"));
        }
        let id = self.allocate_id()?;
        let task = Task::new(id, &new_task.title, &new_task.description, &new_task.category)?;

        let item = match new_task.deadline {
            Some(deadline) => TodoItem::DeadlineTask(DeadlineTask::new(task, deadline)),
            None => TodoItem::Task(task),
        };
        self.items.push(item);
        Ok(&self.items[self.items.len() - 1])
    }

    /// Apply field changes to a task
    ///
    /// Nothing is changed when the id is unknown or the new title is blank.
    pub fn update(&mut self, id: u64, update: &TaskUpdate) -> TodoResult<&TodoItem> {
        let item = self.get_mut(id)?;

        if let Some(title) = &update.title
            && title.trim().is_empty()
        {
            return Err(TodoError::validation("Task title must not be empty"));
        }

        let base = item.base_mut();
        if let Some(title) = &update.title {
            base.set_title(title)?;
        }
        if let Some(description) = &update.description {
            base.set_description(description);
        }
        if let Some(category) = &update.category {
            base.set_category(category);
        }
        if let Some(completed) = update.completed {
            base.set_completed(completed);
        }
        if let Some(deadline) = update.deadline {
            item.set_deadline(deadline);
        }

        Ok(item)
    }

    /// Flip the completion flag of a task
    pub fn toggle(&mut self, id: u64) -> TodoResult<&TodoItem> {
        let item = self.get_mut(id)?;
        item.toggle_complete();
        Ok(item)
    }

    /// Remove a task and return it
    pub fn remove(&mut self, id: u64) -> TodoResult<TodoItem> {
        let pos = self
            .items
            .iter()
            .position(|item| item.id() == id)
            .ok_or(TodoError::NotFound(id))?;
        Ok(self.items.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::task::{TaskKind, TaskStatus};

    #[test]
    fn test_ids_are_sequential() {
        let mut list = TaskList::new();
        assert_eq!(list.add(NewTask::new("one")).unwrap().id(), 1);
        assert_eq!(list.add(NewTask::new("two")).unwrap().id(), 2);
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn test_failed_add_does_not_consume_id() {
        let mut list = TaskList::new();
        assert!(list.add(NewTask::new("  ")).is_err());
        assert!(list.is_empty());
        assert_eq!(list.add(NewTask::new("first")).unwrap().id(), 1);
    }

    #[test]
    fn test_ids_not_reused_after_remove() {
        let mut list = TaskList::new();
        list.add(NewTask::new("one")).unwrap();
        list.add(NewTask::new("two")).unwrap();
        list.remove(2).unwrap();
        assert_eq!(list.add(NewTask::new("three")).unwrap().id(), 3);
    }

    #[test]
    fn test_from_items_continues_after_max_id() {
        let items = vec![
            TodoItem::from(Task::new(5, "five", "", "").unwrap()),
            TodoItem::from(Task::new(2, "two", "", "").unwrap()),
        ];
        let mut list = TaskList::from_items(items).unwrap();
        assert_eq!(list.add(NewTask::new("next")).unwrap().id(), 6);
    }

    #[test]
    fn test_from_items_rejects_duplicate_ids() {
        let items = vec![
            TodoItem::from(Task::new(1, "a", "", "").unwrap()),
            TodoItem::from(Task::new(1, "b", "", "").unwrap()),
        ];
        let err = TaskList::from_items(items).unwrap_err();
        assert!(err.to_string().contains("duplicate task id 1"));
    }

    #[test]
    fn test_add_with_deadline_creates_deadline_task() {
        let mut list = TaskList::new();
        let item = list.add(NewTask::new("x").deadline(None)).unwrap();
        assert_eq!(item.kind(), TaskKind::DeadlineTask);
        let item = list.add(NewTask::new("y")).unwrap();
        assert_eq!(item.kind(), TaskKind::Task);
    }

    #[test]
    fn test_update_applies_fields() {
        let mut list = TaskList::new();
        list.add(NewTask::new("old").category("Work")).unwrap();

        let update = TaskUpdate {
            title: Some("new".to_string()),
            description: Some("details".to_string()),
            category: Some("".to_string()),
            deadline: Some(NaiveDate::from_ymd_opt(2026, 2, 1)),
            completed: Some(true),
        };
        let item = list.update(1, &update).unwrap();
        assert_eq!(item.base().title(), "new");
        assert_eq!(item.base().description(), "details");
        assert_eq!(item.base().category(), "General");
        assert_eq!(item.deadline(), NaiveDate::from_ymd_opt(2026, 2, 1));
        assert_eq!(item.status(), TaskStatus::Completed);
    }

    #[test]
    fn test_update_with_blank_title_changes_nothing() {
        let mut list = TaskList::new();
        list.add(NewTask::new("keep").description("same")).unwrap();
        let before = list.clone();

        let update = TaskUpdate {
            title: Some(" ".to_string()),
            description: Some("changed".to_string()),
            ..Default::default()
        };
        assert!(matches!(list.update(1, &update), Err(TodoError::Validation(_))));
        assert_eq!(list, before);
    }

    #[test]
    fn test_missing_ids_are_not_found() {
        let mut list = TaskList::new();
        assert!(matches!(
            list.update(9, &TaskUpdate::default()),
            Err(TodoError::NotFound(9))
        ));
        assert!(matches!(list.toggle(9), Err(TodoError::NotFound(9))));
        assert!(matches!(list.remove(9), Err(TodoError::NotFound(9))));
    }

    #[test]
    fn test_toggle_twice_restores_state() {
        let mut list = TaskList::new();
        list.add(NewTask::new("flip")).unwrap();
        assert!(list.toggle(1).unwrap().base().is_completed());
        assert!(!list.toggle(1).unwrap().base().is_completed());
    }

    #[test]
    fn test_from_items_rejects_largest_possible_id() {
        let items = vec![TodoItem::from(Task::new(u64::MAX, "last", "", "").unwrap())];
        let err = TaskList::from_items(items).unwrap_err();
        assert!(matches!(err, TodoError::Validation(_)));
        assert!(err.to_string().contains("out of range"));
    }

    #[test]
    fn test_add_fails_when_ids_run_out() {
        let items = vec![TodoItem::from(Task::new(u64::MAX - 1, "almost", "", "").unwrap())];
        let mut list = TaskList::from_items(items).unwrap();
        let before = list.clone();

        assert!(matches!(
            list.add(NewTask::new("one too many")),
            Err(TodoError::Validation(_))
        ));
        assert_eq!(list, before);
    }
}
