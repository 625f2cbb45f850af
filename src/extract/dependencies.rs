//! Dependency extraction: `extends`, `preload(...)` and import targets

use tree_sitter::Node;

use crate::node_kind::{
    classify, is_identifier, NodeCategory, ARGUMENTS_KIND, PRELOAD_CALLEE, STRING_KIND,
};
use crate::schema::DependencyRecord;
use crate::walk::{node_text, strip_quotes, walk_bounded, MAX_TRAVERSAL_DEPTH};

/// Collect the external references a file declares.
///
/// Only string literals count: `extends "res://base.gd"` contributes a value,
/// `extends Node2D` does not.
pub fn extract_dependencies(root: Node<'_>, source: &str) -> DependencyRecord {
    let mut deps = DependencyRecord::default();

    walk_bounded(root, MAX_TRAVERSAL_DEPTH, |node, _| match classify(node.kind()) {
        NodeCategory::Inheritance => {
            if let Some(path) = first_string_child(node, source) {
                deps.extends.push(path);
            }
        }
        NodeCategory::Call if is_preload_call(node, source) => {
            if let Some(path) = first_string_argument(node, source) {
                deps.preload.push(path);
            }
        }
        NodeCategory::Import => {
            if let Some(path) = first_string_child(node, source) {
                deps.import.push(path);
            }
        }
        _ => {}
    });

    deps
}

/// De-quoted text of the first string literal among the node's children
fn first_string_child(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let literal = node
        .children(&mut cursor)
        .find(|child| child.kind() == STRING_KIND)?;
    node_text(literal, source).map(|text| strip_quotes(text).to_string())
}

/// De-quoted text of the first string literal in the call's argument list
fn first_string_argument(node: Node<'_>, source: &str) -> Option<String> {
    let mut cursor = node.walk();
    let arguments = node
        .children(&mut cursor)
        .find(|child| child.kind() == ARGUMENTS_KIND)?;
    first_string_child(arguments, source)
}

fn is_preload_call(node: Node<'_>, source: &str) -> bool {
    let mut cursor = node.walk();
    let is_preload = node.children(&mut cursor).any(|child| {
        is_identifier(child.kind()) && node_text(child, source) == Some(PRELOAD_CALLEE)
    });
    is_preload
}
