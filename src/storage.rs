//! Whole-file JSON persistence for the task list

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{TodoError, TodoResult};
use crate::todo::TodoItem;

/// Default data file, relative to the working directory
pub const DEFAULT_FILE: &str = "tasks.json";

#[derive(Debug, Clone)]
pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    /// Read every task from disk
    ///
    /// A missing or blank file yields an empty list. Anything else that cannot
    /// be read or parsed is reported as `TodoError::CorruptData`.
    pub fn load(&self) -> TodoResult<Vec<TodoItem>> {
        if !self.file_path.exists() {
            tracing::debug!(path = %self.file_path.display(), "no task file yet");
            return Ok(Vec::new());
        }

        let content = fs::read_to_string(&self.file_path).map_err(|e| self.corrupt(e))?;
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }

        let items: Vec<TodoItem> = serde_json::from_str(&content).map_err(|e| self.corrupt(e))?;
        tracing::info!(path = %self.file_path.display(), count = items.len(), "loaded tasks");
        Ok(items)
    }

    /// Write every task to disk
    ///
    /// The data goes to a sibling `.tmp` file first and is then renamed over
    /// the target, so readers never see a half-written file.
    pub fn save(&self, items: &[TodoItem]) -> TodoResult<()> {
        if let Some(parent) = self.file_path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.io_error(parent, e))?;
        }

        let data = serde_json::to_vec_pretty(items)?;
        let tmp = self.tmp_path();
        fs::write(&tmp, &data).map_err(|e| self.io_error(&tmp, e))?;
        fs::rename(&tmp, &self.file_path).map_err(|e| self.io_error(&self.file_path, e))?;

        tracing::debug!(path = %self.file_path.display(), count = items.len(), "saved tasks");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .file_path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_default();
        name.push(".tmp");
        self.file_path.with_file_name(name)
    }

    fn corrupt(&self, reason: impl ToString) -> TodoError {
        TodoError::CorruptData {
            path: self.file_path.clone(),
            reason: reason.to_string(),
        }
    }

    fn io_error(&self, path: &Path, source: std::io::Error) -> TodoError {
        TodoError::Io {
            path: path.to_path_buf(),
            source,
        }
    }
}
