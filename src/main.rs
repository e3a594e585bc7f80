//! To-do MCP Server - Main Entry Point
//!
//! This is the main entry point for the to-do MCP server application.
//! The actual implementation is in the `todo_mcp` library.
//!
//! Diagnostics go to stderr; stdout carries the MCP protocol.

use anyhow::Result;
use clap::Parser;
use mcp_attr::server::serve_stdio;
use todo_mcp::TodoServerHandler;
use todo_mcp::storage::DEFAULT_FILE;
use tracing_subscriber::EnvFilter;

/// To-do MCP Server - a personal task list with deadlines via Model Context Protocol
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Path to the task data file (JSON)
    #[arg(env = "TODO_MCP_FILE", default_value = DEFAULT_FILE)]
    file: String,

    /// Log level used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = Args::parse();

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(&args.log_level)),
        )
        .init();

    tracing::info!(file = %args.file, "todo-mcp starting");

    let handler = TodoServerHandler::new(&args.file);

    serve_stdio(handler).await.map_err(|e| {
        tracing::error!(error = %e, "todo-mcp exited with error");
        anyhow::anyhow!("todo-mcp failed: {e}")
    })?;

    tracing::info!("todo-mcp shut down cleanly");
    Ok(())
}
