//! Add handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::NewTask;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Creates a task. Every task created here can carry a deadline, so it is
    /// stored as a `DeadlineTask` even when no deadline is given.
    pub async fn handle_add(
        &self,
        title: String,
        description: Option<String>,
        category: Option<String>,
        deadline: Option<String>,
    ) -> McpResult<String> {
        let deadline = match deadline {
            Some(ref date_str) => validation::parse_deadline_arg(date_str)?,
            None => None,
        };

        let new_task = NewTask::new(title)
            .description(description.unwrap_or_default())
            .category(category.unwrap_or_default())
            .deadline(deadline);

        let mut manager = self.manager();
        let warning = manager.load_warning().map(str::to_string);
        let item = manager.add(new_task).map_err(validation::to_mcp_error)?;
        drop(manager);

        Ok(formatting::with_load_warning(
            warning.as_deref(),
            format!("Task created with ID: {}", item.id()),
        ))
    }
}
