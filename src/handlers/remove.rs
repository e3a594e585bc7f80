//! Remove handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Permanently deletes a task.
    pub async fn handle_remove(&self, id: u64) -> McpResult<String> {
        let mut manager = self.manager();
        let warning = manager.load_warning().map(str::to_string);
        let item = manager.remove(id).map_err(validation::to_mcp_error)?;
        drop(manager);

        Ok(formatting::with_load_warning(
            warning.as_deref(),
            format!("Task {} removed ({})", id, item.base().title()),
        ))
    }
}
