//! MCP Server for gdscope
//!
//! Exposes the GDScript analysis operations as MCP tools so AI assistants
//! can inspect a script's structure without reading it into context.
//!
//! The server holds one [`Analyzer`], whose project index is shared by all
//! clones of the server. Tool failures are reported as tool results with
//! `is_error` set, never as protocol errors.

mod formatting;
mod types;

pub use types::*;

use std::path::PathBuf;

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::*,
    tool, tool_handler, tool_router, ErrorData as McpError, ServerHandler,
};

use crate::service::Analyzer;
use formatting::{json_result, root_status_result, text_result};

// ============================================================================
// MCP Server Implementation
// ============================================================================

/// MCP Server for GDScript structural analysis
#[derive(Clone)]
pub struct GdscopeServer {
    analyzer: Analyzer,
    /// Tool router for MCP
    tool_router: ToolRouter<GdscopeServer>,
}

impl Default for GdscopeServer {
    fn default() -> Self {
        Self::new()
    }
}

#[tool_router]
impl GdscopeServer {
    /// Create a new MCP server instance rooted at the current directory
    pub fn new() -> Self {
        Self::with_analyzer(Analyzer::new())
    }

    /// Create a new MCP server with a specific working directory
    pub fn with_working_dir(working_dir: PathBuf) -> Self {
        Self::with_analyzer(Analyzer::with_working_dir(working_dir))
    }

    pub fn with_analyzer(analyzer: Analyzer) -> Self {
        Self {
            analyzer,
            tool_router: Self::tool_router(),
        }
    }

    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    #[tool(description = "Analyze a GDScript file and extract its structure (classes, functions, signals, variables, enums). Returns a comprehensive overview without reading the entire file into context.")]
    async fn analyze_gdscript_file(
        &self,
        Parameters(request): Parameters<FileRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("analyze_gdscript_file: {}", request.file_path);
        Ok(json_result(self.analyzer.analyze_file(&request.file_path)))
    }

    #[tool(description = "Get a high-level structure view of a GDScript file, showing all classes, functions, signals, and variables with their line numbers.")]
    async fn get_gdscript_structure(
        &self,
        Parameters(request): Parameters<FileRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("get_gdscript_structure: {}", request.file_path);
        Ok(text_result(self.analyzer.get_structure(&request.file_path)))
    }

    #[tool(description = "Search for a specific symbol (class, function, signal, etc.) in a GDScript file and get its details.")]
    async fn find_gdscript_symbol(
        &self,
        Parameters(request): Parameters<FindSymbolRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "find_gdscript_symbol: {} in {}",
            request.symbol_name,
            request.file_path
        );
        Ok(json_result(
            self.analyzer
                .find_symbol(&request.file_path, &request.symbol_name),
        ))
    }

    #[tool(description = "Extract dependencies from a GDScript file (extends, preload, import statements).")]
    async fn get_gdscript_dependencies(
        &self,
        Parameters(request): Parameters<FileRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("get_gdscript_dependencies: {}", request.file_path);
        Ok(json_result(self.analyzer.get_dependencies(&request.file_path)))
    }

    #[tool(description = "Analyze GDScript code provided directly and extract its structure.")]
    async fn analyze_gdscript_code(
        &self,
        Parameters(request): Parameters<AnalyzeCodeRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("analyze_gdscript_code: {} bytes", request.code.len());
        Ok(json_result(self.analyzer.analyze_code(&request.code)))
    }

    #[tool(description = "Set the root directory of the Godot project. All .gd files under it are indexed for find_references.")]
    async fn set_project_root(
        &self,
        Parameters(request): Parameters<SetProjectRootRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!("set_project_root: {}", request.project_root);
        Ok(json_result(
            self.analyzer.set_project_root(&request.project_root),
        ))
    }

    #[tool(description = "Show the current project root and how many GDScript files it contains.")]
    async fn get_project_root(
        &self,
        Parameters(_request): Parameters<GetProjectRootRequest>,
    ) -> Result<CallToolResult, McpError> {
        Ok(root_status_result(self.analyzer.get_project_root()))
    }

    #[tool(description = "Find every occurrence of a symbol name, including its declaration. Searches one file when file_path is given, otherwise every GDScript file under the project root.")]
    async fn find_references(
        &self,
        Parameters(request): Parameters<FindReferencesRequest>,
    ) -> Result<CallToolResult, McpError> {
        tracing::info!(
            "find_references: {} ({})",
            request.symbol_name,
            request.file_path.as_deref().unwrap_or("project")
        );
        Ok(json_result(self.analyzer.find_references(
            &request.symbol_name,
            request.file_path.as_deref(),
        )))
    }
}

#[tool_handler]
impl ServerHandler for GdscopeServer {
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            protocol_version: ProtocolVersion::V_2024_11_05,
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            server_info: Implementation {
                name: "gdscope".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
                title: Some("GDScript Structure Analyzer".to_string()),
                website_url: None,
                icons: None,
            },
            instructions: Some(MCP_INSTRUCTIONS.to_string()),
        }
    }
}

/// Instructions for AI agents using the gdscope tools
const MCP_INSTRUCTIONS: &str = r#"gdscope - GDScript structure analysis

## Tools
- analyze_gdscript_file / analyze_gdscript_code: symbols grouped by kind with totals
- get_gdscript_structure: outline of classes, functions, signals, variables, enums
- find_gdscript_symbol: kind and position of one named symbol
- get_gdscript_dependencies: extends, preload and import targets
- set_project_root / get_project_root: configure the directory searched by find_references
- find_references: every occurrence of a name, in one file or across the project

## Notes
- Lines are 1-based, columns 0-based.
- References are matched by name only; same-named locals in different scopes all match.
- Call set_project_root before find_references without a file_path."#;
