//! Find handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Keyword search over title, description and category.
    pub async fn handle_find(&self, keyword: String) -> McpResult<String> {
        let tasks = self.manager().find(&keyword);
        Ok(formatting::format_tasks(&tasks, todo::local_date_today()))
    }
}
