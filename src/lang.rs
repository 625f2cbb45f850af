//! Language detection and tree-sitter grammar loading

use std::path::Path;
use tree_sitter::Language;

use crate::error::{AnalyzerError, Result};

/// Supported languages. GDScript is the only grammar this crate targets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Lang {
    GdScript,
}

impl Lang {
    /// Detect language from file path extension
    pub fn from_path(path: &Path) -> Result<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(|ext| Self::from_extension(ext).ok())
            .ok_or_else(|| AnalyzerError::UnsupportedFile {
                path: path.display().to_string(),
            })
    }

    /// Detect language from file extension string
    pub fn from_extension(ext: &str) -> Result<Self> {
        match ext.to_lowercase().as_str() {
            "gd" | "gdscript" => Ok(Self::GdScript),
            _ => Err(AnalyzerError::UnsupportedFile {
                path: format!("*.{}", ext),
            }),
        }
    }

    /// Get the canonical name of the language
    pub fn name(&self) -> &'static str {
        match self {
            Self::GdScript => "gdscript",
        }
    }

    /// Get the tree-sitter Language for parsing
    pub fn tree_sitter_language(&self) -> Language {
        match self {
            Self::GdScript => tree_sitter_gdscript::LANGUAGE.into(),
        }
    }

    /// Get common file extensions for this language
    pub fn extensions(&self) -> &'static [&'static str] {
        match self {
            Self::GdScript => &["gd", "gdscript"],
        }
    }
}

/// Check whether a path carries a GDScript extension
pub fn is_gdscript_path(path: &Path) -> bool {
    Lang::from_path(path).is_ok()
}
