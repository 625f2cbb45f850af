//! CLI argument definitions using clap with subcommand architecture
//!
//! Each subcommand mirrors one MCP tool, so a terminal user gets the same
//! results an assistant would.

use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

/// Structural analyzer for GDScript
#[derive(Parser, Debug)]
#[command(name = "gdscope")]
#[command(about = "Extract symbols, dependencies and references from GDScript files")]
#[command(version)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (applies to all commands)
    #[arg(short, long, default_value = "text", value_enum, global = true)]
    pub format: OutputFormat,

    /// Show verbose output (debug logging on stderr)
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

/// Available subcommands for gdscope
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List the symbols of a file with per-kind totals
    #[command(visible_alias = "a")]
    Analyze(FileArgs),

    /// Print the structure outline of a file
    Structure(FileArgs),

    /// Look up one symbol by name
    Symbol(SymbolArgs),

    /// List extends, preload and import targets
    Deps(FileArgs),

    /// Analyze source read from an argument or stdin
    Code(CodeArgs),

    /// Find every occurrence of a symbol name
    #[command(visible_alias = "r")]
    Refs(RefsArgs),

    /// Start the MCP server (for AI coding assistants)
    Serve(ServeArgs),
}

/// A single GDScript file
#[derive(Args, Debug)]
pub struct FileArgs {
    /// Path to the .gd or .gdscript file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,
}

#[derive(Args, Debug)]
pub struct SymbolArgs {
    /// Path to the .gd or .gdscript file
    #[arg(value_name = "FILE")]
    pub file: PathBuf,

    /// Symbol name (exact, case-sensitive)
    #[arg(value_name = "NAME")]
    pub name: String,
}

#[derive(Args, Debug)]
pub struct CodeArgs {
    /// Source text; read from stdin when omitted
    #[arg(value_name = "CODE")]
    pub code: Option<String>,
}

#[derive(Args, Debug)]
pub struct RefsArgs {
    /// Symbol name (exact, case-sensitive)
    #[arg(value_name = "NAME")]
    pub name: String,

    /// Search only this file (takes precedence over the project root)
    #[arg(long, value_name = "FILE")]
    pub file: Option<PathBuf>,

    /// Search every GDScript file under this directory
    #[arg(long, short = 'p', value_name = "DIR", env = "GDSCOPE_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,
}

#[derive(Args, Debug)]
pub struct ServeArgs {
    /// Project root to index at startup
    #[arg(long, short = 'p', value_name = "DIR", env = "GDSCOPE_PROJECT_ROOT")]
    pub project_root: Option<PathBuf>,

    /// Working directory for relative paths (default: current directory)
    #[arg(long, value_name = "DIR")]
    pub working_dir: Option<PathBuf>,
}

/// Output format for CLI results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable text
    #[default]
    #[value(alias = "pretty")]
    Text,
    /// JSON - the same payloads the MCP tools return
    Json,
}

impl Cli {
    /// Parse CLI arguments from command line
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
