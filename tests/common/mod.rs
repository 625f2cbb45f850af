//! Common test utilities and fixtures for gdscope integration tests

#![allow(dead_code)]

pub mod test_project;

pub use test_project::TestProject;

use std::path::PathBuf;

/// Directory holding the checked-in GDScript fixtures
pub fn fixture_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Path of a fixture file as a string
pub fn fixture(name: &str) -> String {
    fixture_dir().join(name).to_string_lossy().into_owned()
}
