use std::sync::OnceLock;

use tree_sitter::Query;

use crate::treesitter::{language_for_name, ParseError};

/// Declarations the Go type resolver reads: package, imports, type aliases and
/// package-level type names.
pub const GO_DECLARATIONS: &str = include_str!("go.scm");

static GO_DECLARATIONS_QUERY: OnceLock<Result<Query, String>> = OnceLock::new();

/// The compiled declarations query. Compiled on first use and shared by every
/// worker thread afterwards.
pub fn go_declarations() -> Result<&'static Query, ParseError> {
    GO_DECLARATIONS_QUERY
        .get_or_init(|| {
            let lang = language_for_name("go").map_err(|e| e.to_string())?;
            Query::new(&lang, GO_DECLARATIONS).map_err(|e| format!("go declarations: {e}"))
        })
        .as_ref()
        .map_err(|e| ParseError::Query(e.clone()))
}
