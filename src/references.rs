//! Name-based reference search in one tree or across a project
//!
//! A reference is any identifier-shaped node whose text equals the queried
//! name. Declarations are identifier nodes too, so the declaration site is
//! reported alongside every use. There is no scope resolution: two unrelated
//! locals with the same name are both reported.

use std::fs;
use std::path::Path;

use tree_sitter::Node;

use crate::error::{AnalyzerError, Result};
use crate::node_kind::is_identifier;
use crate::parsing::parse_source;
use crate::project::ProjectIndex;
use crate::schema::{Reference, ReferenceReport, SkippedFile};
use crate::walk::{node_text, start_position, walk_bounded, MAX_TRAVERSAL_DEPTH};

/// Every occurrence of `name` in the tree, in document order
pub fn find_references_in_tree(root: Node<'_>, source: &str, name: &str) -> Vec<Reference> {
    let mut references = Vec::new();

    walk_bounded(root, MAX_TRAVERSAL_DEPTH, |node, _| {
        if is_identifier(node.kind()) && node_text(node, source) == Some(name) {
            let (line, column) = start_position(node);
            references.push(Reference {
                file: None,
                line,
                column,
            });
        }
    });

    references
}

/// Parse `source` and search it for `name`
pub fn find_references_in_source(source: &str, name: &str) -> Result<Vec<Reference>> {
    let tree = parse_source(source)?;
    Ok(find_references_in_tree(tree.root_node(), source, name))
}

/// Search every file of the project index, in discovery order.
///
/// Files that cannot be read or parsed are skipped and listed in the
/// report's `skipped_files`; the search carries on with the rest.
///
/// # Errors
///
/// `ProjectRootNotSet` if the index has no root.
pub fn find_references_in_project(index: &ProjectIndex, name: &str) -> Result<ReferenceReport> {
    if !index.is_set() {
        return Err(AnalyzerError::ProjectRootNotSet);
    }

    let mut references = Vec::new();
    let mut skipped = Vec::new();

    for path in index.files() {
        match search_file(path, name) {
            Ok(found) => {
                let file = path.display().to_string();
                references.extend(found.into_iter().map(|r| Reference {
                    file: Some(file.clone()),
                    ..r
                }));
            }
            Err(e) => {
                tracing::warn!("Skipping {} during reference search: {}", path.display(), e);
                skipped.push(SkippedFile {
                    file: path.display().to_string(),
                    reason: e.to_string(),
                });
            }
        }
    }

    tracing::debug!(
        "Found {} references to '{}' in {} files ({} skipped)",
        references.len(),
        name,
        index.files().len(),
        skipped.len()
    );

    Ok(ReferenceReport {
        symbol: name.to_string(),
        total_references: references.len(),
        references,
        files_searched: Some(index.files().len()),
        skipped_files: Some(skipped),
    })
}

fn search_file(path: &Path, name: &str) -> Result<Vec<Reference>> {
    let source = fs::read_to_string(path)?;
    find_references_in_source(&source, name)
}
