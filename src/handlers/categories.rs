//! Categories handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Lists the preset categories, then any other category already in use.
    pub async fn handle_categories(&self) -> McpResult<String> {
        let categories = self.manager().categories();
        Ok(formatting::format_categories(&categories))
    }
}
