//! Serialization and deserialization for persisted tasks
//!
//! Tasks are written as flat `TaskRecord`s. Reading goes through a lenient
//! `RawTaskRecord` so that files produced by the old desktop front-end
//! (`created_date`, `DD-MM-YYYY` deadlines, missing `type`) still load.

use chrono::{NaiveDate, NaiveDateTime};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::dates::{parse_deadline, parse_timestamp};
use super::task::{DeadlineTask, Task, TaskItem, TaskKind, TodoItem};

/// On-disk shape of a single task
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TaskRecord {
    pub id: u64,
    pub title: String,
    pub description: String,
    pub category: String,
    pub completed: bool,
    pub created_at: NaiveDateTime,
    pub deadline: Option<NaiveDate>,
    #[serde(rename = "type")]
    pub kind: TaskKind,
}

#[derive(Deserialize)]
struct RawTaskRecord {
    id: u64,
    title: String,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    completed: bool,
    #[serde(alias = "created_date")]
    created_at: String,
    /// Outer `None` means the key was absent; `Some(None)` means `null`
    #[serde(default, deserialize_with = "deserialize_present")]
    deadline: Option<Option<String>>,
    #[serde(default, rename = "type")]
    kind: Option<TaskKind>,
}

fn deserialize_present<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: Deserialize<'de>,
{
    T::deserialize(deserializer).map(Some)
}

impl RawTaskRecord {
    fn into_item(self) -> Result<TodoItem, String> {
        let created_at = parse_timestamp(&self.created_at).ok_or_else(|| {
            format!(
                "task {}: invalid created_at timestamp '{}'",
                self.id, self.created_at
            )
        })?;

        let deadline = match self.deadline.as_ref().and_then(|d| d.as_deref()) {
            Some(raw) => parse_deadline(raw).map_err(|e| format!("task {}: {}", self.id, e))?,
            None => None,
        };

        let kind = self.kind.unwrap_or(if self.deadline.is_some() {
            TaskKind::DeadlineTask
        } else {
            TaskKind::Task
        });

        let task = Task::restore(
            self.id,
            self.title,
            self.description.unwrap_or_default(),
            self.category.unwrap_or_default(),
            self.completed,
            created_at,
        )
        .map_err(|e| format!("task {}: {}", self.id, e))?;

        Ok(match kind {
            TaskKind::Task if deadline.is_none() => TodoItem::Task(task),
            _ => TodoItem::DeadlineTask(DeadlineTask::new(task, deadline)),
        })
    }
}

impl Serialize for TodoItem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        self.to_record().serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for TodoItem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        RawTaskRecord::deserialize(deserializer)?
            .into_item()
            .map_err(D::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::todo::task::DEFAULT_CATEGORY;

    #[test]
    fn test_deadline_task_record_fields() {
        let task = Task::new(4, "Submit essay", "PBO coursework", "Study").unwrap();
        let item = TodoItem::from(DeadlineTask::new(
            task,
            NaiveDate::from_ymd_opt(2026, 11, 2),
        ));

        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], 4);
        assert_eq!(value["title"], "Submit essay");
        assert_eq!(value["description"], "PBO coursework");
        assert_eq!(value["category"], "Study");
        assert_eq!(value["completed"], false);
        assert_eq!(value["deadline"], "2026-11-02");
        assert_eq!(value["type"], "DeadlineTask");
        assert!(value["created_at"].is_string());
    }

    #[test]
    fn test_plain_task_writes_null_deadline() {
        let item = TodoItem::from(Task::new(1, "Plain", "", "").unwrap());
        let value = serde_json::to_value(&item).unwrap();
        assert!(value["deadline"].is_null());
        assert_eq!(value["type"], "Task");
    }

    #[test]
    fn test_legacy_record_loads() {
        let json = r#"{
            "id": 3,
            "title": "Tugas PBO",
            "description": "Kerjakan laporan",
            "category": "Kuliah",
            "completed": true,
            "created_date": "2025-01-05",
            "type": "DeadlineTask",
            "deadline": "25-12-2025"
        }"#;

        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.id(), 3);
        assert_eq!(item.kind(), TaskKind::DeadlineTask);
        assert_eq!(item.deadline(), NaiveDate::from_ymd_opt(2025, 12, 25));
        assert!(item.base().is_completed());
        assert_eq!(
            item.base().created_at(),
            NaiveDate::from_ymd_opt(2025, 1, 5)
                .unwrap()
                .and_hms_opt(0, 0, 0)
                .unwrap()
        );
    }

    #[test]
    fn test_missing_optional_fields_use_defaults() {
        let json = r#"{"id": 1, "title": "Minimal", "created_at": "2025-01-05T10:00:00"}"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind(), TaskKind::Task);
        assert_eq!(item.base().description(), "");
        assert_eq!(item.base().category(), DEFAULT_CATEGORY);
        assert!(!item.base().is_completed());
    }

    #[test]
    fn test_empty_deadline_string_means_none() {
        let json = r#"{"id": 1, "title": "x", "created_at": "2025-01-05", "deadline": ""}"#;
        let item: TodoItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.kind(), TaskKind::DeadlineTask);
        assert_eq!(item.deadline(), None);
    }

    #[test]
    fn test_missing_required_field_fails() {
        let json = r#"{"id": 1, "created_at": "2025-01-05"}"#;
        let err = serde_json::from_str::<TodoItem>(json).unwrap_err();
        assert!(err.to_string().contains("title"));
    }

    #[test]
    fn test_empty_title_fails() {
        let json = r#"{"id": 1, "title": " ", "created_at": "2025-01-05"}"#;
        assert!(serde_json::from_str::<TodoItem>(json).is_err());
    }

    #[test]
    fn test_bad_deadline_fails() {
        let json = r#"{"id": 1, "title": "x", "created_at": "2025-01-05", "deadline": "soon"}"#;
        let err = serde_json::from_str::<TodoItem>(json).unwrap_err();
        assert!(err.to_string().contains("task 1"));
    }
}
