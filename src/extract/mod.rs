//! Structural extraction over GDScript syntax trees
//!
//! Two extractors share the bounded walk in [`crate::walk`]:
//! - [`extract_symbols`] collects declarations into a [`SymbolTable`]
//! - [`extract_dependencies`] collects `extends`, `preload` and import targets
//!
//! Both treat unresolvable names and values as absence. A malformed tree
//! produces fewer results, never an error.
//!
//! [`SymbolTable`]: crate::schema::SymbolTable

mod dependencies;
mod symbols;

pub use dependencies::extract_dependencies;
pub use symbols::{extract_symbols, resolve_name};
