//! Unified parsing module.
//!
//! Every operation that needs a syntax tree goes through [`parse_source`], so
//! the CLI, the MCP tools and project-wide search all build trees the same way.
//!
//! # Example
//!
//! ```ignore
//! use gdscope::parsing::parse_source;
//!
//! let tree = parse_source("func _ready():\n\tpass\n")?;
//! assert_eq!(tree.root_node().kind(), "source");
//! ```

use tree_sitter::Tree;

use crate::error::{AnalyzerError, Result};
use crate::lang::Lang;

/// Parse GDScript source into a tree-sitter tree.
///
/// tree-sitter is error tolerant: any text, including empty or invalid
/// source, yields a tree whose malformed regions are `ERROR` nodes.
///
/// # Errors
///
/// Returns `AnalyzerError::ParseFailure` if the grammar cannot be loaded
/// into the parser or the parser gives up without producing a tree.
pub fn parse_source(source: &str) -> Result<Tree> {
    let lang = Lang::GdScript;
    let mut parser = tree_sitter::Parser::new();
    parser
        .set_language(&lang.tree_sitter_language())
        .map_err(|e| AnalyzerError::ParseFailure {
            message: format!("Failed to set language for {}: {:?}", lang.name(), e),
        })?;

    parser
        .parse(source, None)
        .ok_or_else(|| AnalyzerError::ParseFailure {
            message: "parser returned no tree".to_string(),
        })
}
