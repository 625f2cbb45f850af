//! Request types for the MCP tools

use rmcp::schemars;
use serde::Deserialize;

// ============================================================================
// Single-file Request Types
// ============================================================================

/// Request naming one GDScript file
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FileRequest {
    /// Absolute path, or a path relative to the server's working directory
    #[schemars(description = "Path to the GDScript file (.gd or .gdscript)")]
    pub file_path: String,
}

/// Request to find a symbol in a file
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FindSymbolRequest {
    #[schemars(description = "Path to the GDScript file")]
    pub file_path: String,

    #[schemars(description = "Name of the symbol to find (exact, case-sensitive)")]
    pub symbol_name: String,
}

/// Request to analyze inline source
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct AnalyzeCodeRequest {
    #[schemars(description = "GDScript source code to analyze")]
    pub code: String,
}

// ============================================================================
// Project Request Types
// ============================================================================

/// Request to set the project root
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct SetProjectRootRequest {
    #[schemars(description = "Directory containing the Godot project's GDScript files")]
    pub project_root: String,
}

/// Request to show the project root
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct GetProjectRootRequest {}

/// Request to find references to a symbol
#[derive(Debug, Deserialize, schemars::JsonSchema)]
pub struct FindReferencesRequest {
    #[schemars(description = "Name of the symbol to search for (exact, case-sensitive)")]
    pub symbol_name: String,

    /// Search a single file instead of the whole project
    #[schemars(
        description = "Optional GDScript file to search. If omitted, every file under the project root is searched (requires set_project_root)."
    )]
    pub file_path: Option<String>,
}
