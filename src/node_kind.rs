//! Classification of GDScript grammar node types
//!
//! All grammar tags the extractors care about live in [`NODE_CATEGORIES`].
//! Anything not listed there is [`NodeCategory::Unrecognized`] and is only
//! traversed for its children.

use crate::schema::SymbolKind;

/// What a node means to the extractors
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NodeCategory {
    /// A declaration producing a symbol of the given kind
    Declaration(SymbolKind),
    /// `extends "res://base.gd"`
    Inheritance,
    /// A call expression; a `preload(...)` call when the callee matches
    Call,
    /// An import declaration
    Import,
    /// Not interesting by itself
    Unrecognized,
}

/// Grammar tag → category
pub const NODE_CATEGORIES: &[(&str, NodeCategory)] = &[
    ("class_definition", NodeCategory::Declaration(SymbolKind::Class)),
    ("function_definition", NodeCategory::Declaration(SymbolKind::Function)),
    ("signal_statement", NodeCategory::Declaration(SymbolKind::Signal)),
    ("enum_definition", NodeCategory::Declaration(SymbolKind::Enum)),
    ("variable_statement", NodeCategory::Declaration(SymbolKind::Variable)),
    ("export_variable_statement", NodeCategory::Declaration(SymbolKind::Variable)),
    ("const_statement", NodeCategory::Declaration(SymbolKind::Variable)),
    ("assignment", NodeCategory::Declaration(SymbolKind::Variable)),
    ("extends_statement", NodeCategory::Inheritance),
    ("call", NodeCategory::Call),
    ("import_statement", NodeCategory::Import),
];

/// Node types that carry an identifier's text
pub const IDENTIFIER_KINDS: &[&str] = &["identifier", "name"];

/// Node type of string literals
pub const STRING_KIND: &str = "string";

/// Node type wrapping a call's argument list
pub const ARGUMENTS_KIND: &str = "arguments";

/// Callee name that marks a resource preload
pub const PRELOAD_CALLEE: &str = "preload";

/// Look up the category of a grammar node type
pub fn classify(kind: &str) -> NodeCategory {
    NODE_CATEGORIES
        .iter()
        .find(|(tag, _)| *tag == kind)
        .map(|(_, category)| *category)
        .unwrap_or(NodeCategory::Unrecognized)
}

pub fn is_identifier(kind: &str) -> bool {
    IDENTIFIER_KINDS.contains(&kind)
}
