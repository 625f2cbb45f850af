//! Command modules for the gdscope CLI
//!
//! ## Architecture
//!
//! - `analyze` - single-file operations (analyze, structure, symbol, deps, code)
//! - `refs` - reference search in one file or a project
//! - `serve` - the MCP server
//!
//! All command handlers take their respective `Args` struct from `cli.rs`
//! and a shared `CommandContext` for output format and verbosity, and return
//! the text to print on stdout.

pub mod analyze;
pub mod refs;
pub mod serve;

// Re-export command handlers for easy access
pub use analyze::{run_analyze, run_code, run_deps, run_structure, run_symbol};
pub use refs::run_refs;
pub use serve::run_serve;

use serde::Serialize;

use crate::cli::OutputFormat;
use crate::error::Result;
use crate::service::Analyzer;

/// Shared context passed to all command handlers
#[derive(Debug, Clone)]
pub struct CommandContext {
    /// Output format (text or json)
    pub format: OutputFormat,
    /// Show verbose output
    pub verbose: bool,
    /// Analyzer resolving paths against the current directory
    pub analyzer: Analyzer,
}

impl Default for CommandContext {
    fn default() -> Self {
        Self::from_cli(OutputFormat::Text, false)
    }
}

impl CommandContext {
    /// Create a new CommandContext from CLI args
    pub fn from_cli(format: OutputFormat, verbose: bool) -> Self {
        Self {
            format,
            verbose,
            analyzer: Analyzer::new(),
        }
    }

    /// Render `value` as pretty JSON or through `text`, depending on the format
    pub fn render<T, F>(&self, value: &T, text: F) -> Result<String>
    where
        T: Serialize,
        F: FnOnce(&T) -> String,
    {
        match self.format {
            OutputFormat::Json => Ok(format!("{}\n", serde_json::to_string_pretty(value)?)),
            OutputFormat::Text => Ok(text(value)),
        }
    }
}
