//! Declared symbol extraction

use tree_sitter::Node;

use crate::node_kind::{classify, is_identifier, NodeCategory};
use crate::schema::{Symbol, SymbolTable};
use crate::walk::{node_text, start_position, walk_bounded, MAX_TRAVERSAL_DEPTH};

/// Collect every declaration in the tree, grouped by kind in document order.
///
/// Redeclarations all appear. Nodes deeper than [`MAX_TRAVERSAL_DEPTH`] are
/// not visited.
pub fn extract_symbols(root: Node<'_>, source: &str) -> SymbolTable {
    let mut table = SymbolTable::new();

    walk_bounded(root, MAX_TRAVERSAL_DEPTH, |node, _| {
        let NodeCategory::Declaration(kind) = classify(node.kind()) else {
            return;
        };

        match resolve_name(node, source) {
            Some(name) => {
                let (line, column) = start_position(node);
                table.push(Symbol::new(name, kind, line, column));
            }
            None => {
                tracing::trace!(
                    "skipping unnamed {} at {}:{}",
                    node.kind(),
                    node.start_position().row + 1,
                    node.start_position().column
                );
            }
        }
    });

    table
}

/// Resolve the display name of a declaration node.
///
/// Tries the grammar's `name` field first, then the first identifier-shaped
/// immediate child. Empty names count as unresolved.
pub fn resolve_name<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    let from_field = node
        .child_by_field_name("name")
        .and_then(|name_node| identifier_text(name_node, source));

    from_field
        .or_else(|| first_identifier_child(node, source))
        .filter(|name| !name.is_empty())
}

/// Text of `node` if it is identifier-shaped, else of its first identifier child
fn identifier_text<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    if is_identifier(node.kind()) {
        return node_text(node, source);
    }
    first_identifier_child(node, source)
}

fn first_identifier_child<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    let mut cursor = node.walk();
    let child = node
        .children(&mut cursor)
        .find(|child| is_identifier(child.kind()))?;
    node_text(child, source)
}
