use chrono::{Duration, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use super::dates::{DATE_FORMAT, local_date_today, local_now};
use super::serde_impl::TaskRecord;
use crate::error::{TodoError, TodoResult};

/// Category used when none is given
pub const DEFAULT_CATEGORY: &str = "General";

/// Categories offered by the front-end; any other label is accepted too
pub const DEFAULT_CATEGORIES: [&str; 4] = ["General", "Study", "Work", "Personal"];

/// A deadline this many days away (or fewer) makes an open task urgent
pub const URGENT_WINDOW_DAYS: i64 = 3;

/// Display status of a task
///
/// Never stored; always derived from the completion flag, the deadline and
/// the current date.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TaskStatus {
    Completed,
    Overdue,
    Urgent,
    Normal,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Completed => "Completed",
            TaskStatus::Overdue => "Overdue",
            TaskStatus::Urgent => "Urgent",
            TaskStatus::Normal => "Normal",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TaskStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "completed" => Ok(TaskStatus::Completed),
            "overdue" => Ok(TaskStatus::Overdue),
            "urgent" => Ok(TaskStatus::Urgent),
            "normal" => Ok(TaskStatus::Normal),
            _ => Err(format!(
                "Invalid status '{}'. Valid options are: completed, overdue, urgent, normal",
                s
            )),
        }
    }
}

/// Derive a status from its inputs
///
/// Completed wins over everything. An open task is overdue once its deadline
/// has passed, urgent while the deadline is within `URGENT_WINDOW_DAYS`
/// (inclusive) of `today`, and normal otherwise or when it has no deadline.
pub fn derive_status(completed: bool, deadline: Option<NaiveDate>, today: NaiveDate) -> TaskStatus {
    if completed {
        return TaskStatus::Completed;
    }
    match deadline {
        Some(d) if d < today => TaskStatus::Overdue,
        Some(d) if d <= today + Duration::days(URGENT_WINDOW_DAYS) => TaskStatus::Urgent,
        _ => TaskStatus::Normal,
    }
}

/// Capabilities shared by every kind of task
pub trait TaskItem {
    /// Status as of the given date
    fn status_on(&self, today: NaiveDate) -> TaskStatus;

    /// Status as of the local current date
    fn status(&self) -> TaskStatus {
        self.status_on(local_date_today())
    }

    /// One-line human readable summary
    fn summary(&self) -> String;

    fn mark_complete(&mut self);

    fn toggle_complete(&mut self);

    /// Flatten into the persisted record shape
    fn to_record(&self) -> TaskRecord;
}

/// Which variant a task is, as written to the `type` field on disk
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskKind {
    Task,
    DeadlineTask,
}

/// A single to-do item without a deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: u64,
    title: String,
    description: String,
    category: String,
    completed: bool,
    created_at: NaiveDateTime,
}

impl Task {
    /// Create a new open task stamped with the current local time
    ///
    /// Fails with `TodoError::Validation` when the title is blank. A blank
    /// category falls back to `DEFAULT_CATEGORY`.
    pub fn new(id: u64, title: &str, description: &str, category: &str) -> TodoResult<Self> {
        let title = validate_title(title)?;
        Ok(Self {
            id,
            title,
            description: description.trim().to_string(),
            category: normalize_category(category),
            completed: false,
            created_at: local_now(),
        })
    }

    /// Rebuild a task from persisted fields without touching timestamps
    pub(crate) fn restore(
        id: u64,
        title: String,
        description: String,
        category: String,
        completed: bool,
        created_at: NaiveDateTime,
    ) -> TodoResult<Self> {
        let title = validate_title(&title)?;
        Ok(Self {
            id,
            title,
            description,
            category: normalize_category(&category),
            completed,
            created_at,
        })
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn category(&self) -> &str {
        &self.category
    }

    pub fn is_completed(&self) -> bool {
        self.completed
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    pub fn set_title(&mut self, title: &str) -> TodoResult<()> {
        self.title = validate_title(title)?;
        Ok(())
    }

    pub fn set_description(&mut self, description: &str) {
        self.description = description.trim().to_string();
    }

    pub fn set_category(&mut self, category: &str) {
        self.category = normalize_category(category);
    }

    pub(crate) fn set_completed(&mut self, completed: bool) {
        self.completed = completed;
    }

    /// Case-insensitive substring match over title, description and category
    ///
    /// `keyword_lower` must already be lowercased.
    pub(crate) fn matches_keyword(&self, keyword_lower: &str) -> bool {
        self.title.to_lowercase().contains(keyword_lower)
            || self.description.to_lowercase().contains(keyword_lower)
            || self.category.to_lowercase().contains(keyword_lower)
    }
}

impl TaskItem for Task {
    fn status_on(&self, today: NaiveDate) -> TaskStatus {
        derive_status(self.completed, None, today)
    }

    fn summary(&self) -> String {
        format!("{} ({})", self.title, self.category)
    }

    fn mark_complete(&mut self) {
        self.completed = true;
    }

    fn toggle_complete(&mut self) {
        self.completed = !self.completed;
    }

    fn to_record(&self) -> TaskRecord {
        TaskRecord {
            id: self.id,
            title: self.title.clone(),
            description: self.description.clone(),
            category: self.category.clone(),
            completed: self.completed,
            created_at: self.created_at,
            deadline: None,
            kind: TaskKind::Task,
        }
    }
}

/// A task that may carry a deadline
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeadlineTask {
    task: Task,
    deadline: Option<NaiveDate>,
}

impl DeadlineTask {
    pub fn new(task: Task, deadline: Option<NaiveDate>) -> Self {
        Self { task, deadline }
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn task_mut(&mut self) -> &mut Task {
        &mut self.task
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        self.deadline
    }

    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        self.deadline = deadline;
    }
}

impl TaskItem for DeadlineTask {
    fn status_on(&self, today: NaiveDate) -> TaskStatus {
        derive_status(self.task.completed, self.deadline, today)
    }

    fn summary(&self) -> String {
        let mark = if self.task.completed { "x" } else { " " };
        let deadline = self
            .deadline
            .map(|d| d.format(DATE_FORMAT).to_string())
            .unwrap_or_else(|| "-".to_string());
        format!("[{}] {} | Deadline: {}", mark, self.task.title, deadline)
    }

    fn mark_complete(&mut self) {
        self.task.mark_complete();
    }

    fn toggle_complete(&mut self) {
        self.task.toggle_complete();
    }

    fn to_record(&self) -> TaskRecord {
        TaskRecord {
            deadline: self.deadline,
            kind: TaskKind::DeadlineTask,
            ..self.task.to_record()
        }
    }
}

/// A task as stored in the task list
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TodoItem {
    Task(Task),
    DeadlineTask(DeadlineTask),
}

impl TodoItem {
    /// Common task fields regardless of variant
    pub fn base(&self) -> &Task {
        match self {
            TodoItem::Task(t) => t,
            TodoItem::DeadlineTask(dt) => dt.task(),
        }
    }

    pub fn base_mut(&mut self) -> &mut Task {
        match self {
            TodoItem::Task(t) => t,
            TodoItem::DeadlineTask(dt) => dt.task_mut(),
        }
    }

    pub fn id(&self) -> u64 {
        self.base().id()
    }

    pub fn kind(&self) -> TaskKind {
        match self {
            TodoItem::Task(_) => TaskKind::Task,
            TodoItem::DeadlineTask(_) => TaskKind::DeadlineTask,
        }
    }

    pub fn deadline(&self) -> Option<NaiveDate> {
        match self {
            TodoItem::Task(_) => None,
            TodoItem::DeadlineTask(dt) => dt.deadline(),
        }
    }

    /// Set or clear the deadline
    ///
    /// A plain task becomes a `DeadlineTask` with the same identity when a
    /// deadline is given. Clearing a deadline keeps the variant.
    pub fn set_deadline(&mut self, deadline: Option<NaiveDate>) {
        match self {
            TodoItem::DeadlineTask(dt) => dt.set_deadline(deadline),
            TodoItem::Task(t) => {
                if deadline.is_some() {
                    *self = TodoItem::DeadlineTask(DeadlineTask::new(t.clone(), deadline));
                }
            }
        }
    }

    fn as_item(&self) -> &dyn TaskItem {
        match self {
            TodoItem::Task(t) => t,
            TodoItem::DeadlineTask(dt) => dt,
        }
    }

    fn as_item_mut(&mut self) -> &mut dyn TaskItem {
        match self {
            TodoItem::Task(t) => t,
            TodoItem::DeadlineTask(dt) => dt,
        }
    }
}

impl TaskItem for TodoItem {
    fn status_on(&self, today: NaiveDate) -> TaskStatus {
        self.as_item().status_on(today)
    }

    fn summary(&self) -> String {
        self.as_item().summary()
    }

    fn mark_complete(&mut self) {
        self.as_item_mut().mark_complete();
    }

    fn toggle_complete(&mut self) {
        self.as_item_mut().toggle_complete();
    }

    fn to_record(&self) -> TaskRecord {
        self.as_item().to_record()
    }
}

impl From<Task> for TodoItem {
    fn from(task: Task) -> Self {
        TodoItem::Task(task)
    }
}

impl From<DeadlineTask> for TodoItem {
    fn from(task: DeadlineTask) -> Self {
        TodoItem::DeadlineTask(task)
    }
}

fn validate_title(title: &str) -> TodoResult<String> {
    let trimmed = title.trim();
    if trimmed.is_empty() {
        return Err(TodoError::validation("Task title must not be empty"));
    }
    Ok(trimmed.to_string())
}

fn normalize_category(category: &str) -> String {
    let trimmed = category.trim();
    if trimmed.is_empty() {
        DEFAULT_CATEGORY.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn deadline_task(deadline: Option<NaiveDate>) -> DeadlineTask {
        DeadlineTask::new(Task::new(1, "Write report", "", "Work").unwrap(), deadline)
    }

    #[test]
    fn test_new_task_defaults() {
        let task = Task::new(7, "  Buy milk ", "", "").unwrap();
        assert_eq!(task.id(), 7);
        assert_eq!(task.title(), "Buy milk");
        assert_eq!(task.category(), DEFAULT_CATEGORY);
        assert!(!task.is_completed());
    }

    #[test]
    fn test_empty_title_rejected() {
        assert!(matches!(
            Task::new(1, "   ", "desc", "Work"),
            Err(TodoError::Validation(_))
        ));

        let mut task = Task::new(1, "Valid", "", "").unwrap();
        assert!(task.set_title("").is_err());
        assert_eq!(task.title(), "Valid");
    }

    #[test]
    fn test_completed_wins_over_deadline() {
        let today = date(2026, 5, 10);
        let mut task = deadline_task(Some(date(2026, 5, 1)));
        task.mark_complete();
        assert_eq!(task.status_on(today), TaskStatus::Completed);
    }

    #[test]
    fn test_past_deadline_is_overdue() {
        let today = date(2026, 5, 10);
        let task = deadline_task(Some(date(2026, 5, 9)));
        assert_eq!(task.status_on(today), TaskStatus::Overdue);
    }

    #[test]
    fn test_urgent_window_is_inclusive() {
        let today = date(2026, 5, 10);
        for offset in 0..=URGENT_WINDOW_DAYS {
            let task = deadline_task(Some(today + Duration::days(offset)));
            assert_eq!(task.status_on(today), TaskStatus::Urgent, "offset {offset}");
        }
        let task = deadline_task(Some(today + Duration::days(URGENT_WINDOW_DAYS + 1)));
        assert_eq!(task.status_on(today), TaskStatus::Normal);
    }

    #[test]
    fn test_no_deadline_is_normal() {
        let today = date(2026, 5, 10);
        assert_eq!(deadline_task(None).status_on(today), TaskStatus::Normal);

        let mut plain = Task::new(2, "Plain", "", "").unwrap();
        assert_eq!(plain.status_on(today), TaskStatus::Normal);
        plain.toggle_complete();
        assert_eq!(plain.status_on(today), TaskStatus::Completed);
    }

    #[test]
    fn test_summaries() {
        let plain = Task::new(1, "Call mom", "", "Personal").unwrap();
        assert_eq!(plain.summary(), "Call mom (Personal)");

        let mut dt = deadline_task(Some(date(2026, 12, 25)));
        assert_eq!(dt.summary(), "[ ] Write report | Deadline: 2026-12-25");
        dt.toggle_complete();
        assert_eq!(dt.summary(), "[x] Write report | Deadline: 2026-12-25");
        assert_eq!(deadline_task(None).summary(), "[ ] Write report | Deadline: -");
    }

    #[test]
    fn test_set_deadline_promotes_plain_task() {
        let plain = Task::new(3, "Plain", "", "").unwrap();
        let created_at = plain.created_at();
        let mut item = TodoItem::from(plain);

        item.set_deadline(None);
        assert_eq!(item.kind(), TaskKind::Task);

        item.set_deadline(Some(date(2026, 1, 1)));
        assert_eq!(item.kind(), TaskKind::DeadlineTask);
        assert_eq!(item.id(), 3);
        assert_eq!(item.base().created_at(), created_at);
        assert_eq!(item.deadline(), Some(date(2026, 1, 1)));
    }

    #[test]
    fn test_status_from_str() {
        assert_eq!("URGENT".parse::<TaskStatus>(), Ok(TaskStatus::Urgent));
        assert_eq!(" completed ".parse::<TaskStatus>(), Ok(TaskStatus::Completed));
        assert!("later".parse::<TaskStatus>().is_err());
    }
}
