use std::path::Path;

use tree_sitter::{Language, Node, Parser, Tree};

/// A reusable tree-sitter parser. Not `Sync`, so each worker thread owns one;
/// the grammar is only reloaded when the requested language changes.
pub struct TreeSitterParser {
    parser: Parser,
    loaded: Option<&'static str>,
}

impl TreeSitterParser {
    pub fn new() -> Self {
        Self {
            parser: Parser::new(),
            loaded: None,
        }
    }

    pub fn parse(&mut self, lang_name: &str, source: &[u8]) -> Result<Tree, ParseError> {
        if self.loaded != Some(lang_name) {
            let (name, lang) = grammar(lang_name)?;
            self.parser
                .set_language(&lang)
                .map_err(|e| ParseError::Language(e.to_string()))?;
            self.loaded = Some(name);
        }
        // Only fails on cancellation or timeout, neither of which is configured.
        self.parser.parse(source, None).ok_or(ParseError::ParseFailed)
    }
}

impl Default for TreeSitterParser {
    fn default() -> Self {
        Self::new()
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ParseError {
    #[error("unsupported language: {0}")]
    UnsupportedLanguage(String),
    #[error("cannot load grammar: {0}")]
    Language(String),
    #[error("invalid query: {0}")]
    Query(String),
    #[error("tree-sitter returned no tree")]
    ParseFailed,
}

fn grammar(name: &str) -> Result<(&'static str, Language), ParseError> {
    match name {
        "go" => Ok(("go", tree_sitter_go::LANGUAGE.into())),
        other => Err(ParseError::UnsupportedLanguage(other.to_string())),
    }
}

pub(crate) fn language_for_name(name: &str) -> Result<Language, ParseError> {
    grammar(name).map(|(_, lang)| lang)
}

/// Source text of `node`; empty if the range is not valid UTF-8.
pub(crate) fn node_text<'a>(node: Node<'a>, source: &'a [u8]) -> &'a str {
    node.utf8_text(source).unwrap_or("")
}

/// Language name for a path, by extension.
pub fn detect_language(path: &Path) -> Option<&'static str> {
    path.extension()
        .and_then(|ext| ext.to_str())
        .filter(|ext| *ext == "go")
        .map(|_| "go")
}
