//! MCP tool handlers for the to-do server
//!
//! This module contains the implementation of all MCP tool handlers.
//! Each handler is in a separate file.

pub mod add;
pub mod categories;
pub mod edit;
pub mod find;
pub mod list;
pub mod progress;
pub mod remove;
pub mod toggle;
