//! Validation helper functions for the to-do MCP server
//!
//! This module turns raw tool arguments into domain values and maps domain
//! errors onto MCP errors with user-visible messages.

use crate::error::TodoError;
use crate::todo::{self, TaskStatus};
use chrono::NaiveDate;
use mcp_attr::Result as McpResult;

fn invalid_params(message: String) -> mcp_attr::Error {
    mcp_attr::Error::new(mcp_attr::ErrorCode::INVALID_PARAMS).with_message(message, true)
}

/// Parse a deadline argument
///
/// # Arguments
/// * `date_str` - Date in YYYY-MM-DD or DD-MM-YYYY format; blank means none
///
/// # Returns
/// Result containing the parsed date (or `None`) or an error
pub fn parse_deadline_arg(date_str: &str) -> McpResult<Option<NaiveDate>> {
    todo::parse_deadline(date_str).map_err(invalid_params)
}

/// Parse and validate a status filter parameter
pub fn parse_status_filter(status_str: &str) -> McpResult<TaskStatus> {
    status_str.parse::<TaskStatus>().map_err(invalid_params)
}

/// Convert a domain error into an MCP error
///
/// Input problems become `INVALID_PARAMS`; disk problems become
/// `INTERNAL_ERROR`. Both carry a public message.
pub fn to_mcp_error(err: TodoError) -> mcp_attr::Error {
    match err {
        TodoError::Validation(msg) => invalid_params(format!("Validation error: {}", msg)),
        TodoError::NotFound(id) => invalid_params(format!(
            "Task not found: task {} does not exist. Use list() to see available tasks.",
            id
        )),
        other => mcp_attr::Error::new(mcp_attr::ErrorCode::INTERNAL_ERROR)
            .with_message(format!("Failed to save: {}", other), true),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_deadline_arg() {
        assert_eq!(
            parse_deadline_arg("2026-01-31").unwrap(),
            NaiveDate::from_ymd_opt(2026, 1, 31)
        );
        assert_eq!(parse_deadline_arg("").unwrap(), None);
        assert!(parse_deadline_arg("31/01/2026").is_err());
    }

    #[test]
    fn test_parse_status_filter() {
        assert_eq!(parse_status_filter("overdue").unwrap(), TaskStatus::Overdue);
        assert!(parse_status_filter("inbox").is_err());
    }
}
