//! TestProject builder for temporary Godot project trees

use std::fs;
use std::path::Path;
use tempfile::TempDir;

use gdscope::Analyzer;

/// Builder for creating temporary project structures
pub struct TestProject {
    dir: TempDir,
}

impl TestProject {
    /// Create a new empty project
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Get the path to the project root
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Get path as string
    pub fn path_str(&self) -> String {
        self.dir.path().to_string_lossy().to_string()
    }

    /// Add a file with the given content
    pub fn add_file(&self, relative_path: &str, content: &str) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Add a file with raw bytes (e.g. invalid UTF-8)
    pub fn add_bytes(&self, relative_path: &str, content: &[u8]) -> &Self {
        let full_path = self.dir.path().join(relative_path);
        if let Some(parent) = full_path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&full_path, content).expect("Failed to write file");
        self
    }

    /// Analyzer whose relative paths resolve inside this project
    pub fn analyzer(&self) -> Analyzer {
        Analyzer::with_working_dir(self.path().to_path_buf())
    }
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}
