//! Result types shared by the extractors, the CLI and the MCP tools
//!
//! Field names and nesting here are the stable wire shape of every tool
//! result, so serde attributes carry as much weight as the Rust types.

use serde::{Deserialize, Serialize};

/// Kind of a declared symbol
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SymbolKind {
    Class,
    Function,
    Signal,
    Variable,
    Enum,
}

impl SymbolKind {
    /// Lookup priority, also the section order of the structure report
    pub const PRIORITY: [SymbolKind; 5] = [
        SymbolKind::Class,
        SymbolKind::Function,
        SymbolKind::Signal,
        SymbolKind::Variable,
        SymbolKind::Enum,
    ];

    /// Singular label used in lookup results (`class`, `function`, ...)
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Class => "class",
            Self::Function => "function",
            Self::Signal => "signal",
            Self::Variable => "variable",
            Self::Enum => "enum",
        }
    }

    /// Heading used by the structure report
    pub fn section_title(&self) -> &'static str {
        match self {
            Self::Class => "Classes",
            Self::Function => "Functions",
            Self::Signal => "Signals",
            Self::Variable => "Variables",
            Self::Enum => "Enums",
        }
    }
}

/// A named declaration site
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Symbol {
    pub name: String,
    #[serde(skip)]
    pub kind: SymbolKind,
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
}

impl Symbol {
    pub fn new(name: impl Into<String>, kind: SymbolKind, line: usize, column: usize) -> Self {
        Self {
            name: name.into(),
            kind,
            line,
            column,
        }
    }
}

/// Declared symbols grouped by kind, each list in document order
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct SymbolTable {
    pub classes: Vec<Symbol>,
    pub functions: Vec<Symbol>,
    pub variables: Vec<Symbol>,
    pub signals: Vec<Symbol>,
    pub enums: Vec<Symbol>,
}

impl SymbolTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Symbols of one kind, in document order
    pub fn get(&self, kind: SymbolKind) -> &[Symbol] {
        match kind {
            SymbolKind::Class => &self.classes,
            SymbolKind::Function => &self.functions,
            SymbolKind::Signal => &self.signals,
            SymbolKind::Variable => &self.variables,
            SymbolKind::Enum => &self.enums,
        }
    }

    fn get_mut(&mut self, kind: SymbolKind) -> &mut Vec<Symbol> {
        match kind {
            SymbolKind::Class => &mut self.classes,
            SymbolKind::Function => &mut self.functions,
            SymbolKind::Signal => &mut self.signals,
            SymbolKind::Variable => &mut self.variables,
            SymbolKind::Enum => &mut self.enums,
        }
    }

    /// Append a symbol to the list of its kind. No deduplication.
    pub fn push(&mut self, symbol: Symbol) {
        self.get_mut(symbol.kind).push(symbol);
    }

    pub fn len(&self) -> usize {
        SymbolKind::PRIORITY.iter().map(|k| self.get(*k).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn summary(&self) -> SymbolSummary {
        SymbolSummary {
            total_classes: self.classes.len(),
            total_functions: self.functions.len(),
            total_signals: self.signals.len(),
            total_variables: self.variables.len(),
            total_enums: self.enums.len(),
        }
    }
}

/// Per-kind totals attached to analysis results
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolSummary {
    pub total_classes: usize,
    pub total_functions: usize,
    pub total_signals: usize,
    pub total_variables: usize,
    pub total_enums: usize,
}

/// Result of a successful symbol lookup
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SymbolMatch {
    #[serde(rename = "type")]
    pub kind: SymbolKind,
    pub name: String,
    pub line: usize,
    pub column: usize,
}

/// External references declared by a file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DependencyRecord {
    pub extends: Vec<String>,
    pub preload: Vec<String>,
    pub import: Vec<String>,
}

/// One occurrence of an identifier
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reference {
    /// Owning file, set only by project-wide search
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub file: Option<String>,
    /// 1-based line
    pub line: usize,
    /// 0-based column
    pub column: usize,
}

/// A project file that could not be searched
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

/// All occurrences of a symbol in one file or across a project
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceReport {
    pub symbol: String,
    pub total_references: usize,
    pub references: Vec<Reference>,
    /// Number of project files scanned (project mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub files_searched: Option<usize>,
    /// Files skipped because they could not be read or parsed (project mode only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped_files: Option<Vec<SkippedFile>>,
}

impl ReferenceReport {
    /// Report for a single file search
    pub fn for_file(symbol: impl Into<String>, references: Vec<Reference>) -> Self {
        Self {
            symbol: symbol.into(),
            total_references: references.len(),
            references,
            files_searched: None,
            skipped_files: None,
        }
    }
}
