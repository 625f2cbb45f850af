//! Bounded pre-order traversal over tree-sitter nodes
//!
//! Every extractor in this crate walks trees through [`walk_bounded`]. The
//! depth cutoff guarantees termination on pathological input; nodes below the
//! cutoff are ignored rather than reported as errors.

use tree_sitter::Node;

/// Deepest node depth visited by the extractors (the root is depth 0)
pub const MAX_TRAVERSAL_DEPTH: usize = 20;

/// Visit `root` and its descendants depth-first, pre-order, in document order.
///
/// `visit` receives each node with its depth. Children of a node at
/// `max_depth` are not visited.
pub fn walk_bounded<'tree, F>(root: Node<'tree>, max_depth: usize, mut visit: F)
where
    F: FnMut(Node<'tree>, usize),
{
    let mut stack: Vec<(Node<'tree>, usize)> = vec![(root, 0)];
    let mut cursor = root.walk();

    while let Some((node, depth)) = stack.pop() {
        visit(node, depth);

        if depth >= max_depth {
            continue;
        }

        // Push in reverse so the first child is popped next
        let children: Vec<Node<'tree>> = node.children(&mut cursor).collect();
        stack.extend(children.into_iter().rev().map(|child| (child, depth + 1)));
    }
}

/// Source text covered by a node, or `None` if the byte range is not valid UTF-8
pub fn node_text<'a>(node: Node<'_>, source: &'a str) -> Option<&'a str> {
    node.utf8_text(source.as_bytes()).ok()
}

/// Remove one leading and one trailing quote character, leaving interior text intact
pub fn strip_quotes(text: &str) -> &str {
    let is_quote = |c: char| c == '"' || c == '\'';
    let text = text.strip_prefix(is_quote).unwrap_or(text);
    text.strip_suffix(is_quote).unwrap_or(text)
}

/// Convert a node's start point to (1-based line, 0-based column)
pub fn start_position(node: Node<'_>) -> (usize, usize) {
    let point = node.start_position();
    (point.row + 1, point.column)
}
