//! Project root and the cached list of GDScript files under it
//!
//! The index starts unset. [`ProjectIndex::set_root`] validates the path and
//! rescans the whole tree; a failed validation leaves the previous root and
//! file list in place. Files are discovered once per set, not per query.
//!
//! [`SharedProjectIndex`] wraps the index for callers that may run queries
//! concurrently (the MCP server). Rescans happen outside the lock and the new
//! root, file list and generation are installed together, so a reader never
//! sees a root paired with another root's files.

use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use ignore::WalkBuilder;
use parking_lot::RwLock;
use serde::Serialize;

use crate::error::{AnalyzerError, Result};
use crate::lang::is_gdscript_path;

/// Directories Godot generates that never hold user scripts
const SKIPPED_DIRS: &[&str] = &[".godot", ".import"];

/// Current root of an index, or the explicit unset state
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum RootStatus {
    Unset,
    Set {
        #[serde(rename = "project_root")]
        root: PathBuf,
        #[serde(rename = "gdscript_files_count")]
        file_count: usize,
    },
}

#[derive(Debug, Clone, Default)]
pub struct ProjectIndex {
    root: Option<PathBuf>,
    files: Vec<PathBuf>,
    /// Bumped on every successful `set_root`
    generation: u64,
}

impl ProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validate `path`, rescan it, and make it the new root.
    ///
    /// # Errors
    ///
    /// - `FileNotFound` if the path does not exist
    /// - `NotADirectory` if it exists but is not a directory
    ///
    /// The index is unchanged on error.
    pub fn set_root(&mut self, path: impl AsRef<Path>) -> Result<RootStatus> {
        let root = validate_root(path.as_ref())?;
        let files = discover_gdscript_files(&root);
        self.install(root, files);
        Ok(self.status())
    }

    fn install(&mut self, root: PathBuf, files: Vec<PathBuf>) {
        tracing::info!(
            "Project root set to {} ({} GDScript files)",
            root.display(),
            files.len()
        );
        self.root = Some(root);
        self.files = files;
        self.generation += 1;
    }

    /// Forget the root and its files
    pub fn reset(&mut self) {
        self.root = None;
        self.files.clear();
        self.generation += 1;
    }

    pub fn status(&self) -> RootStatus {
        match &self.root {
            Some(root) => RootStatus::Set {
                root: root.clone(),
                file_count: self.files.len(),
            },
            None => RootStatus::Unset,
        }
    }

    pub fn root(&self) -> Option<&Path> {
        self.root.as_deref()
    }

    /// Cached files in discovery order (empty while unset)
    pub fn files(&self) -> &[PathBuf] {
        &self.files
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_set(&self) -> bool {
        self.root.is_some()
    }
}

/// Process-wide index handle shared between concurrent callers
#[derive(Debug, Clone, Default)]
pub struct SharedProjectIndex {
    inner: Arc<RwLock<ProjectIndex>>,
}

impl SharedProjectIndex {
    pub fn new() -> Self {
        Self::default()
    }

    /// Same contract as [`ProjectIndex::set_root`]; the rescan runs without
    /// holding the lock.
    pub fn set_root(&self, path: impl AsRef<Path>) -> Result<RootStatus> {
        let root = validate_root(path.as_ref())?;
        let files = discover_gdscript_files(&root);

        let mut index = self.inner.write();
        index.install(root, files);
        Ok(index.status())
    }

    pub fn status(&self) -> RootStatus {
        self.inner.read().status()
    }

    /// Consistent copy of the current generation for a single query
    pub fn snapshot(&self) -> ProjectIndex {
        self.inner.read().clone()
    }
}

fn validate_root(path: &Path) -> Result<PathBuf> {
    if !path.exists() {
        return Err(AnalyzerError::FileNotFound {
            path: path.display().to_string(),
        });
    }
    if !path.is_dir() {
        return Err(AnalyzerError::NotADirectory {
            path: path.display().to_string(),
        });
    }
    Ok(path.to_path_buf())
}

/// Recursively collect GDScript files under `root`, sorted by file name at
/// every directory level. Hidden entries are included; Godot's cache directories
/// are skipped.
pub fn discover_gdscript_files(root: &Path) -> Vec<PathBuf> {
    let walker = WalkBuilder::new(root)
        // Every file under the root counts, ignore files included
        .standard_filters(false)
        .hidden(false)
        .follow_links(false)
        .sort_by_file_name(|a, b| a.cmp(b))
        .filter_entry(|entry| !is_skipped_dir(entry.file_name()))
        .build();

    let mut files = Vec::new();
    for entry in walker {
        match entry {
            Ok(entry) => {
                let is_file = entry.file_type().is_some_and(|t| t.is_file());
                if is_file && is_gdscript_path(entry.path()) {
                    files.push(entry.into_path());
                }
            }
            Err(e) => tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e),
        }
    }
    files
}

fn is_skipped_dir(name: &OsStr) -> bool {
    SKIPPED_DIRS.iter().any(|skipped| name == OsStr::new(skipped))
}
