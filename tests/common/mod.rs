//! Common test utilities for integration tests

#![allow(dead_code)]

use tempfile::NamedTempFile;
use todo_mcp::TodoServerHandler;

/// Create a test handler with temporary storage
pub fn get_test_handler() -> (TodoServerHandler, NamedTempFile) {
    let temp_file = NamedTempFile::new().unwrap();
    let handler = TodoServerHandler::new(temp_file.path());
    (handler, temp_file)
}

/// Extract task ID from add() response message
/// Response format: "Task created with ID: <id>"
pub fn extract_id_from_response(response: &str) -> u64 {
    response
        .rsplit("ID: ")
        .next()
        .and_then(|id| id.trim().parse().ok())
        .unwrap_or_else(|| panic!("no task id in response: {response}"))
}
