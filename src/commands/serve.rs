//! MCP Server command handler
//!
//! Runs the gdscope MCP server using stdio transport, allowing AI
//! assistants to call the analysis tools.

use rmcp::transport::stdio;
use rmcp::ServiceExt;
use tracing_subscriber::{self, EnvFilter};

use crate::cli::ServeArgs;
use crate::error::{AnalyzerError, Result};
use crate::mcp_server::GdscopeServer;
use crate::service::{default_working_dir, Analyzer};

/// Run the MCP server
///
/// This creates a tokio runtime and runs the async MCP server.
pub fn run_serve(args: &ServeArgs) -> Result<String> {
    let runtime = tokio::runtime::Runtime::new()?;

    runtime.block_on(async { run_serve_async(args).await })?;

    // Server exits cleanly - no output needed
    Ok(String::new())
}

/// Install the stderr log subscriber; stdout carries JSON-RPC
pub fn init_server_logging() {
    // May fail if already initialized, which is fine
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new("gdscope=info,rmcp=info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Build the server, pre-seeding the project index when a root is configured
pub fn build_server(args: &ServeArgs) -> Result<GdscopeServer> {
    let working_dir = args
        .working_dir
        .clone()
        .unwrap_or_else(default_working_dir);
    let analyzer = Analyzer::with_working_dir(working_dir);

    if let Some(root) = &args.project_root {
        analyzer.set_project_root(&root.to_string_lossy())?;
    }

    Ok(GdscopeServer::with_analyzer(analyzer))
}

async fn run_serve_async(args: &ServeArgs) -> Result<()> {
    init_server_logging();

    tracing::info!("Starting gdscope MCP server v{}", env!("CARGO_PKG_VERSION"));

    let server = build_server(args)?;

    let service = server
        .serve(stdio())
        .await
        .map_err(|e| AnalyzerError::Io(std::io::Error::other(format!(
            "Failed to start MCP server: {}",
            e
        ))))?;

    tracing::info!("MCP server initialized, waiting for requests...");

    service
        .waiting()
        .await
        .map_err(|e| AnalyzerError::Io(std::io::Error::other(format!("MCP server error: {}", e))))?;

    tracing::info!("MCP server shutting down");

    Ok(())
}
