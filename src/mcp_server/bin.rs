//! MCP Server binary entry point
//!
//! Runs the gdscope MCP server using stdio transport. Configuration comes
//! from the environment:
//! - `GDSCOPE_PROJECT_ROOT`: project directory indexed at startup
//! - `RUST_LOG`: log filter (logs go to stderr)

use std::path::PathBuf;

use anyhow::Result;
use rmcp::transport::stdio;
use rmcp::ServiceExt;

use gdscope::cli::ServeArgs;
use gdscope::commands::serve::{build_server, init_server_logging};

#[tokio::main]
async fn main() -> Result<()> {
    init_server_logging();

    let args = ServeArgs {
        project_root: std::env::var_os("GDSCOPE_PROJECT_ROOT").map(PathBuf::from),
        working_dir: None,
    };

    tracing::info!(
        "Starting gdscope MCP server v{}",
        env!("CARGO_PKG_VERSION")
    );
    if let Some(root) = &args.project_root {
        tracing::info!("Project root: {}", root.display());
    }

    let server = build_server(&args)?;

    let service = server.serve(stdio()).await?;

    tracing::info!("MCP server initialized, waiting for requests...");

    // Wait for shutdown
    service.waiting().await?;

    tracing::info!("MCP server shutting down");

    Ok(())
}
