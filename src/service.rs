//! The analysis operations behind every CLI subcommand and MCP tool
//!
//! [`Analyzer`] owns the working directory used to resolve relative paths
//! and a handle to the shared project index. Every operation returns a typed
//! payload or an [`AnalyzerError`]; nothing here panics on bad input.

use std::fs;
use std::path::{Component, Path, PathBuf};

use serde::Serialize;

use crate::error::{AnalyzerError, Result};
use crate::extract::{extract_dependencies, extract_symbols};
use crate::lang::Lang;
use crate::lookup::find_symbol;
use crate::parsing::parse_source;
use crate::project::{RootStatus, SharedProjectIndex};
use crate::references::{find_references_in_project, find_references_in_source};
use crate::schema::{
    DependencyRecord, ReferenceReport, SymbolMatch, SymbolSummary, SymbolTable,
};
use crate::structure::render_structure;

/// Result of `analyze_gdscript_file`
#[derive(Debug, Clone, Serialize)]
pub struct FileAnalysis {
    pub file: String,
    pub symbols: SymbolTable,
    pub summary: SymbolSummary,
}

/// Result of `analyze_gdscript_code`
#[derive(Debug, Clone, Serialize)]
pub struct CodeAnalysis {
    pub structure: String,
    pub symbols: SymbolTable,
    pub summary: SymbolSummary,
}

/// Result of `get_gdscript_dependencies`
#[derive(Debug, Clone, Serialize)]
pub struct FileDependencies {
    pub file: String,
    pub dependencies: DependencyRecord,
}

/// Result of `set_project_root`
#[derive(Debug, Clone, Serialize)]
pub struct ProjectRootSet {
    pub status: &'static str,
    pub project_root: String,
    pub gdscript_files_count: usize,
}

/// Reply to `get_project_root` when no root has been configured
pub const NO_PROJECT_ROOT_MESSAGE: &str =
    "No project root set. Use set_project_root to configure one.";

#[derive(Debug, Clone)]
pub struct Analyzer {
    working_dir: PathBuf,
    project: SharedProjectIndex,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer rooted at the current directory with an unset project index
    pub fn new() -> Self {
        Self::with_working_dir(default_working_dir())
    }

    pub fn with_working_dir(working_dir: PathBuf) -> Self {
        Self {
            working_dir,
            project: SharedProjectIndex::new(),
        }
    }

    /// Handle to the project index this analyzer searches
    pub fn project(&self) -> &SharedProjectIndex {
        &self.project
    }

    /// Resolve a path relative to the working directory, dropping `.` components
    pub fn resolve_path(&self, path: &str) -> PathBuf {
        let path = Path::new(path);
        let joined = if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.working_dir.join(path)
        };
        joined
            .components()
            .filter(|c| !matches!(c, Component::CurDir))
            .collect()
    }

    /// Symbols of a file with per-kind totals
    pub fn analyze_file(&self, file_path: &str) -> Result<FileAnalysis> {
        let (path, source) = self.load_source(file_path)?;
        let symbols = symbols_of(&source)?;
        tracing::debug!("Analyzed {}: {} symbols", path.display(), symbols.len());

        Ok(FileAnalysis {
            file: file_path.to_string(),
            summary: symbols.summary(),
            symbols,
        })
    }

    /// Sectioned outline of a file
    pub fn get_structure(&self, file_path: &str) -> Result<String> {
        let (_, source) = self.load_source(file_path)?;
        Ok(render_structure(&symbols_of(&source)?))
    }

    /// First symbol named `symbol_name` in a file
    pub fn find_symbol(&self, file_path: &str, symbol_name: &str) -> Result<SymbolMatch> {
        let symbol_name = require("symbol_name", symbol_name)?;
        let (_, source) = self.load_source(file_path)?;
        let symbols = symbols_of(&source)?;

        find_symbol(&symbols, symbol_name).ok_or_else(|| AnalyzerError::SymbolNotFound {
            name: symbol_name.to_string(),
        })
    }

    /// `extends`, `preload` and import targets of a file
    pub fn get_dependencies(&self, file_path: &str) -> Result<FileDependencies> {
        let (_, source) = self.load_source(file_path)?;
        let tree = parse_source(&source)?;

        Ok(FileDependencies {
            file: file_path.to_string(),
            dependencies: extract_dependencies(tree.root_node(), &source),
        })
    }

    /// Structure and symbols of inline source text
    pub fn analyze_code(&self, code: &str) -> Result<CodeAnalysis> {
        let symbols = symbols_of(code)?;
        Ok(CodeAnalysis {
            structure: render_structure(&symbols),
            summary: symbols.summary(),
            symbols,
        })
    }

    /// Point the project index at a directory and rescan it
    pub fn set_project_root(&self, project_root: &str) -> Result<ProjectRootSet> {
        let project_root = require("project_root", project_root)?;
        let path = self.resolve_path(project_root);

        match self.project.set_root(&path)? {
            RootStatus::Set { root, file_count } => Ok(ProjectRootSet {
                status: "success",
                project_root: root.display().to_string(),
                gdscript_files_count: file_count,
            }),
            RootStatus::Unset => Err(AnalyzerError::ProjectRootNotSet),
        }
    }

    pub fn get_project_root(&self) -> RootStatus {
        self.project.status()
    }

    /// Occurrences of `symbol_name` in one file, or across the project when
    /// `file_path` is absent
    pub fn find_references(
        &self,
        symbol_name: &str,
        file_path: Option<&str>,
    ) -> Result<ReferenceReport> {
        let symbol_name = require("symbol_name", symbol_name)?;

        match file_path.filter(|p| !p.is_empty()) {
            Some(file_path) => {
                let (_, source) = self.load_source(file_path)?;
                let references = find_references_in_source(&source, symbol_name)?;
                Ok(ReferenceReport::for_file(symbol_name, references))
            }
            None => find_references_in_project(&self.project.snapshot(), symbol_name),
        }
    }

    /// Validate and read a GDScript file
    fn load_source(&self, file_path: &str) -> Result<(PathBuf, String)> {
        let file_path = require("file_path", file_path)?;
        let path = self.resolve_path(file_path);

        if !path.exists() {
            return Err(AnalyzerError::FileNotFound {
                path: file_path.to_string(),
            });
        }
        Lang::from_path(&path)?;

        let source = fs::read_to_string(&path)?;
        Ok((path, source))
    }
}

/// Current directory, or `.` when it cannot be determined
pub fn default_working_dir() -> PathBuf {
    std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."))
}

fn symbols_of(source: &str) -> Result<SymbolTable> {
    let tree = parse_source(source)?;
    Ok(extract_symbols(tree.root_node(), source))
}

/// Reject empty required arguments
fn require<'a>(name: &'static str, value: &'a str) -> Result<&'a str> {
    if value.trim().is_empty() {
        Err(AnalyzerError::MissingArgument { name })
    } else {
        Ok(value)
    }
}
