//! Toggle handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Flips a task between completed and pending.
    pub async fn handle_toggle(&self, id: u64) -> McpResult<String> {
        let mut manager = self.manager();
        let warning = manager.load_warning().map(str::to_string);
        let item = manager.toggle(id).map_err(validation::to_mcp_error)?;
        drop(manager);

        let state = if item.base().is_completed() {
            "completed"
        } else {
            "pending"
        };
        Ok(formatting::with_load_warning(
            warning.as_deref(),
            format!("Task {} marked as {}", id, state),
        ))
    }
}
