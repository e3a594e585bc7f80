//! Edit handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::TaskUpdate;
use crate::validation;
use mcp_attr::{Result as McpResult, bail_public};

impl TodoServerHandler {
    /// Updates task fields. Omitted fields stay as they are; an empty
    /// deadline string clears the deadline. IDs are immutable.
    pub async fn handle_edit(
        &self,
        id: u64,
        title: Option<String>,
        description: Option<String>,
        category: Option<String>,
        deadline: Option<String>,
    ) -> McpResult<String> {
        let deadline = match deadline {
            Some(ref date_str) => Some(validation::parse_deadline_arg(date_str)?),
            None => None,
        };

        let update = TaskUpdate {
            title,
            description,
            category,
            deadline,
            completed: None,
        };

        if update.is_empty() {
            bail_public!(
                _,
                "Nothing to update: provide at least one of title, description, category or deadline."
            );
        }

        let mut manager = self.manager();
        let warning = manager.load_warning().map(str::to_string);
        manager.edit(id, &update).map_err(validation::to_mcp_error)?;
        drop(manager);

        Ok(formatting::with_load_warning(
            warning.as_deref(),
            format!("Task {} updated successfully", id),
        ))
    }
}
