//! Human-readable structure report for a symbol table

use crate::schema::{SymbolKind, SymbolTable};

const HEADER: &str = "=== GDScript File Structure ===";

/// Render the table as a sectioned outline.
///
/// Sections follow [`SymbolKind::PRIORITY`]; empty sections are omitted and
/// sections are separated by a blank line. The output depends only on the table.
pub fn render_structure(table: &SymbolTable) -> String {
    let sections: Vec<String> = SymbolKind::PRIORITY
        .iter()
        .filter(|kind| !table.get(**kind).is_empty())
        .map(|kind| {
            let mut section = format!("{}:", kind.section_title());
            for symbol in table.get(*kind) {
                section.push_str(&format!("\n  - {} (line {})", symbol.name, symbol.line));
            }
            section
        })
        .collect();

    let mut output = format!("{}\n", HEADER);
    if !sections.is_empty() {
        output.push('\n');
        output.push_str(&sections.join("\n\n"));
    }
    output
}
