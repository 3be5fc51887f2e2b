//! Go type resolution within a single file: imports, dot imports, local aliases.
//!
//! Resolution is syntactic. A qualified name resolves through the import that
//! binds its qualifier; an unqualified name resolves through local aliases,
//! package-level declarations, predeclared identifiers and finally dot imports.
//! Names of the file's own package resolve to [`TypeIdentity::local`], which
//! never equals an imported identity.

use std::collections::{HashMap, HashSet};

use streaming_iterator::StreamingIterator;
use tree_sitter::{Node, Query, QueryCursor};

use ctxarg_core::types::TypeIdentity;

use crate::go::type_expr_from_node;
use crate::resolver::{TypeExpr, TypeResolver};
use crate::treesitter::node_text;

/// Alias chains longer than this are treated as unresolvable.
const MAX_ALIAS_DEPTH: usize = 16;

const PREDECLARED_TYPES: &[&str] = &[
    "any", "bool", "byte", "comparable", "complex64", "complex128", "error", "float32",
    "float64", "int", "int8", "int16", "int32", "int64", "rune", "string", "uint", "uint8",
    "uint16", "uint32", "uint64", "uintptr",
];

/// Per-file resolver built from the file's package clause, imports and type
/// declarations.
#[derive(Debug, Clone, Default)]
pub struct GoTypeResolver {
    package: String,
    imports: HashMap<String, String>,
    dot_imports: Vec<String>,
    aliases: HashMap<String, TypeExpr>,
    local_types: HashSet<String>,
}

impl GoTypeResolver {
    /// Create an empty resolver for `package`; add bindings with the builder
    /// methods or build one from a tree with [`GoTypeResolver::from_tree`].
    pub fn new(package: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            ..Self::default()
        }
    }

    pub fn with_import(mut self, alias: Option<&str>, path: &str) -> Self {
        self.add_import(alias, path);
        self
    }

    pub fn with_alias(mut self, name: &str, target: TypeExpr) -> Self {
        self.aliases.insert(name.to_string(), target);
        self
    }

    pub fn with_local_type(mut self, name: &str) -> Self {
        self.local_types.insert(name.to_string());
        self
    }

    /// Collect declarations from a parsed Go file using the bundled query.
    pub fn from_tree(query: &Query, root: Node<'_>, source: &[u8]) -> Self {
        let mut resolver = Self::default();
        let mut cursor = QueryCursor::new();
        let capture_names = query.capture_names();
        let mut matches = cursor.matches(query, root, source);

        while let Some(m) = matches.next() {
            for cap in m.captures {
                match capture_names[cap.index as usize] {
                    "package.name" => {
                        resolver.package = node_text(cap.node, source).to_string();
                    }
                    "import" => {
                        let Some(path_node) = cap.node.child_by_field_name("path") else {
                            continue;
                        };
                        let path = unquote(node_text(path_node, source));
                        let alias = cap
                            .node
                            .child_by_field_name("name")
                            .map(|n| node_text(n, source));
                        resolver.add_import(alias, path);
                    }
                    "alias" => {
                        let name = cap.node.child_by_field_name("name");
                        let target = cap.node.child_by_field_name("type");
                        if let (Some(name), Some(target)) = (name, target) {
                            resolver.aliases.insert(
                                node_text(name, source).to_string(),
                                type_expr_from_node(target, source),
                            );
                        }
                    }
                    "type.name" => {
                        resolver
                            .local_types
                            .insert(node_text(cap.node, source).to_string());
                    }
                    _ => {}
                }
            }
        }
        resolver
    }

    pub fn package(&self) -> &str {
        &self.package
    }

    fn add_import(&mut self, alias: Option<&str>, path: &str) {
        match alias {
            Some("_") => {}
            Some(".") => self.dot_imports.push(path.to_string()),
            Some(name) => {
                self.imports.insert(name.to_string(), path.to_string());
            }
            None => {
                self.imports
                    .insert(go_package_alias(path).to_string(), path.to_string());
            }
        }
    }

    fn resolve_depth(&self, ty: &TypeExpr, depth: usize) -> Option<TypeIdentity> {
        let TypeExpr::Named { qualifier, name } = ty else {
            return None;
        };
        if let Some(q) = qualifier {
            return self
                .imports
                .get(q)
                .map(|path| TypeIdentity::new(path.as_str(), name.as_str()));
        }
        if let Some(target) = self.aliases.get(name) {
            if depth >= MAX_ALIAS_DEPTH {
                return None;
            }
            return self.resolve_depth(target, depth + 1);
        }
        if self.local_types.contains(name) {
            return Some(TypeIdentity::local(&self.package, name.as_str()));
        }
        if PREDECLARED_TYPES.contains(&name.as_str()) {
            return Some(TypeIdentity::builtin(name.as_str()));
        }
        match self.dot_imports.as_slice() {
            [] => Some(TypeIdentity::local(&self.package, name.as_str())),
            [only] => Some(TypeIdentity::new(only.as_str(), name.as_str())),
            // Several dot imports: the exporting package cannot be told apart.
            _ => None,
        }
    }
}

impl TypeResolver for GoTypeResolver {
    fn resolve(&self, ty: &TypeExpr) -> Option<TypeIdentity> {
        self.resolve_depth(ty, 0)
    }
}

/// Default binding name for an import path.
/// e.g., `"net/http"` -> `"http"`, `"github.com/x/y/v2"` -> `"y"`, `"gopkg.in/yaml.v3"` -> `"yaml"`.
pub fn go_package_alias(import_path: &str) -> &str {
    let mut segments = import_path.rsplit('/');
    let last = segments.next().unwrap_or(import_path);
    let last = if is_major_version(last) {
        segments.next().unwrap_or(last)
    } else {
        last
    };
    match last.split_once(".v") {
        Some((base, version)) if !version.is_empty() && version.bytes().all(|b| b.is_ascii_digit()) => {
            base
        }
        _ => last,
    }
}

fn is_major_version(segment: &str) -> bool {
    segment
        .strip_prefix('v')
        .is_some_and(|n| !n.is_empty() && n.bytes().all(|b| b.is_ascii_digit()))
}

fn unquote(literal: &str) -> &str {
    literal.trim_matches('"').trim_matches('`')
}
