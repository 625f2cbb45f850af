//! Error types and exit codes for gdscope

use std::process::ExitCode;
use thiserror::Error;

/// Main error type for gdscope operations
#[derive(Error, Debug)]
pub enum AnalyzerError {
    #[error("File not found: {path}")]
    FileNotFound { path: String },

    #[error("File must be a .gd or .gdscript file: {path}")]
    UnsupportedFile { path: String },

    #[error("Not a directory: {path}")]
    NotADirectory { path: String },

    #[error("Missing required argument: {name}")]
    MissingArgument { name: &'static str },

    #[error("No project root set. Call set_project_root first or pass a file_path")]
    ProjectRootNotSet,

    #[error("Symbol '{name}' not found")]
    SymbolNotFound { name: String },

    #[error("Failed to parse source: {message}")]
    ParseFailure { message: String },

    #[error("Serialization failed: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of failures reported at the tool boundary
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    NotFound,
    InvalidInput,
    IoError,
    Internal,
}

impl AnalyzerError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::FileNotFound { .. } | Self::SymbolNotFound { .. } => ErrorCategory::NotFound,
            Self::UnsupportedFile { .. }
            | Self::NotADirectory { .. }
            | Self::MissingArgument { .. }
            | Self::ProjectRootNotSet => ErrorCategory::InvalidInput,
            Self::Io(_) => ErrorCategory::IoError,
            Self::ParseFailure { .. } | Self::Serialization(_) => ErrorCategory::Internal,
        }
    }

    /// Convert error to a process exit code:
    /// - 1: Not found
    /// - 2: Invalid input
    /// - 3: IO error
    /// - 4: Internal failure
    pub fn exit_code(&self) -> ExitCode {
        match self.category() {
            ErrorCategory::NotFound => ExitCode::from(1),
            ErrorCategory::InvalidInput => ExitCode::from(2),
            ErrorCategory::IoError => ExitCode::from(3),
            ErrorCategory::Internal => ExitCode::from(4),
        }
    }
}

/// Result type alias for gdscope operations
pub type Result<T> = std::result::Result<T, AnalyzerError>;
