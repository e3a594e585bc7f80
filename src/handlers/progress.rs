//! Progress handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    pub async fn handle_progress(&self) -> McpResult<String> {
        let progress = self.manager().progress();
        Ok(formatting::format_progress(&progress))
    }
}
