//! Symbol lookup by exact name

use crate::schema::{SymbolKind, SymbolMatch, SymbolTable};

/// Find the first symbol named `name`.
///
/// Kinds are searched in [`SymbolKind::PRIORITY`] order, each in document
/// order. Matching is exact and case-sensitive; `None` means no symbol of
/// any kind has that name.
pub fn find_symbol(table: &SymbolTable, name: &str) -> Option<SymbolMatch> {
    SymbolKind::PRIORITY.iter().find_map(|kind| {
        table
            .get(*kind)
            .iter()
            .find(|symbol| symbol.name == name)
            .map(|symbol| SymbolMatch {
                kind: *kind,
                name: symbol.name.clone(),
                line: symbol.line,
                column: symbol.column,
            })
    })
}
