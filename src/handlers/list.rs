//! List handler for the to-do MCP server

use crate::TodoServerHandler;
use crate::formatting;
use crate::todo::{self, TaskFilter};
use crate::validation;
use mcp_attr::Result as McpResult;

impl TodoServerHandler {
    /// Handles list/filter operations - applies filters and formats results for display.
    /// A start-up warning about a corrupt data file is shown above the list.
    pub async fn handle_list(
        &self,
        status: Option<String>,
        category: Option<String>,
        keyword: Option<String>,
    ) -> McpResult<String> {
        let status_filter = if let Some(ref status_str) = status {
            Some(validation::parse_status_filter(status_str)?)
        } else {
            None
        };

        let filter = TaskFilter {
            status: status_filter,
            category,
            keyword,
        };

        let manager = self.manager();
        let tasks = manager.filter(&filter);
        let warning = manager.load_warning().map(str::to_string);
        drop(manager);

        let listing = formatting::format_tasks(&tasks, todo::local_date_today());
        Ok(formatting::with_load_warning(warning.as_deref(), listing))
    }
}
