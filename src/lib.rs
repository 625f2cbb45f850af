//! gdscope: structural analysis of GDScript source
//!
//! This library extracts declared symbols, dependency declarations and
//! name-based references from GDScript files. It uses tree-sitter for parsing
//! and never fails on malformed source: a broken file simply yields fewer
//! results.
//!
//! # Example
//!
//! ```ignore
//! use gdscope::{extract_symbols, parse_source, render_structure};
//!
//! let source = "signal died\n\nfunc _ready():\n\tpass\n";
//! let tree = parse_source(source)?;
//! let symbols = extract_symbols(tree.root_node(), source);
//! println!("{}", render_structure(&symbols));
//! ```

pub mod cli;
pub mod commands;
pub mod error;
pub mod extract;
pub mod lang;
pub mod lookup;
pub mod mcp_server;
pub mod node_kind;
pub mod parsing;
pub mod project;
pub mod references;
pub mod schema;
pub mod service;
pub mod structure;
pub mod walk;

// Re-export commonly used types
pub use cli::{Cli, Commands, OutputFormat};
pub use error::{AnalyzerError, ErrorCategory, Result};
pub use extract::{extract_dependencies, extract_symbols};
pub use lang::Lang;
pub use lookup::find_symbol;
pub use parsing::parse_source;
pub use project::{ProjectIndex, RootStatus, SharedProjectIndex};
pub use references::{
    find_references_in_project, find_references_in_source, find_references_in_tree,
};
pub use schema::{
    DependencyRecord, Reference, ReferenceReport, SkippedFile, Symbol, SymbolKind, SymbolMatch,
    SymbolSummary, SymbolTable,
};
pub use service::Analyzer;
pub use structure::render_structure;
pub use walk::MAX_TRAVERSAL_DEPTH;
