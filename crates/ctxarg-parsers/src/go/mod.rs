pub mod type_resolution;

use std::path::{Path, PathBuf};

use tree_sitter::{Node, Tree, TreeCursor};

use ctxarg_core::types::Position;

use crate::queries;
use crate::resolver::{Parameter, Signature, SignatureKind, SignatureSource, TypeExpr};
use crate::treesitter::{node_text, ParseError, TreeSitterParser};

pub use type_resolution::GoTypeResolver;

/// A parsed Go file together with its per-file type resolver.
pub struct GoFile {
    path: PathBuf,
    source: String,
    tree: Tree,
    resolver: GoTypeResolver,
}

impl GoFile {
    pub fn parse(
        parser: &mut TreeSitterParser,
        path: &Path,
        source: String,
    ) -> Result<Self, ParseError> {
        let tree = parser.parse("go", source.as_bytes())?;
        let query = queries::go_declarations()?;
        let resolver = GoTypeResolver::from_tree(query, tree.root_node(), source.as_bytes());

        Ok(Self {
            path: path.to_path_buf(),
            source,
            tree,
            resolver,
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn type_resolver(&self) -> &GoTypeResolver {
        &self.resolver
    }

    /// Whether tree-sitter had to recover from syntax errors anywhere.
    pub fn has_errors(&self) -> bool {
        self.tree.root_node().has_error()
    }

    /// Lazily enumerate every function-like node in preorder.
    pub fn signatures(&self) -> GoSignatures<'_> {
        GoSignatures {
            cursor: self.tree.walk(),
            source: self.source.as_bytes(),
            started: false,
            done: false,
        }
    }
}

impl SignatureSource for GoFile {
    fn signatures(&self) -> Box<dyn Iterator<Item = Signature> + '_> {
        Box::new(GoFile::signatures(self))
    }
}

/// Preorder walk over a Go syntax tree yielding one [`Signature`] per
/// function declaration, method, literal, function type or interface method.
pub struct GoSignatures<'a> {
    cursor: TreeCursor<'a>,
    source: &'a [u8],
    started: bool,
    done: bool,
}

impl GoSignatures<'_> {
    fn advance(&mut self) -> bool {
        if self.cursor.goto_first_child() {
            return true;
        }
        loop {
            if self.cursor.goto_next_sibling() {
                return true;
            }
            if !self.cursor.goto_parent() {
                return false;
            }
        }
    }
}

impl Iterator for GoSignatures<'_> {
    type Item = Signature;

    fn next(&mut self) -> Option<Signature> {
        while !self.done {
            if !self.started {
                self.started = true;
            } else if !self.advance() {
                self.done = true;
                break;
            }
            if let Some(sig) = signature_from_node(self.cursor.node(), self.source) {
                return Some(sig);
            }
        }
        None
    }
}

fn signature_kind(kind: &str) -> Option<SignatureKind> {
    match kind {
        "function_declaration" => Some(SignatureKind::Function),
        "method_declaration" => Some(SignatureKind::Method),
        "func_literal" => Some(SignatureKind::Literal),
        "function_type" => Some(SignatureKind::FuncType),
        // method_spec is the pre-0.21 grammar name for interface methods
        "method_elem" | "method_spec" => Some(SignatureKind::InterfaceMethod),
        _ => None,
    }
}

/// Build a signature from a function-like node. Returns `None` for other
/// nodes and for nodes whose parameter list did not parse.
pub(crate) fn signature_from_node(node: Node<'_>, source: &[u8]) -> Option<Signature> {
    let kind = signature_kind(node.kind())?;
    let params_node = node.child_by_field_name("parameters")?;
    if params_node.kind() != "parameter_list" || params_node.has_error() {
        return None;
    }

    let name = node
        .child_by_field_name("name")
        .map(|n| node_text(n, source).to_string());

    // Interface methods have no `func` keyword; anchor them on the parameter list.
    let anchor = match kind {
        SignatureKind::InterfaceMethod => params_node,
        _ => node,
    };
    let start = anchor.start_position();
    let position = Position::new(start.row as u32 + 1, start.column as u32 + 1);

    Some(Signature {
        kind,
        name,
        position,
        params: extract_parameters(params_node, source),
        type_params: type_params_in_scope(node, source),
    })
}

/// Type parameter names visible at `node`: its own, then those of every
/// enclosing generic function, method receiver or type declaration.
fn type_params_in_scope(node: Node<'_>, source: &[u8]) -> Vec<String> {
    let mut names = Vec::new();
    let mut current = Some(node);
    while let Some(n) = current {
        match n.kind() {
            "function_declaration" | "type_spec" | "type_alias" => {
                if let Some(list) = n.child_by_field_name("type_parameters") {
                    let mut cursor = list.walk();
                    for decl in list.named_children(&mut cursor) {
                        let mut name_cursor = decl.walk();
                        names.extend(
                            decl.children_by_field_name("name", &mut name_cursor)
                                .map(|id| node_text(id, source).to_string()),
                        );
                    }
                }
            }
            // func (l *List[T]) Push(v T)
            "method_declaration" => {
                if let Some(receiver) = n.child_by_field_name("receiver") {
                    collect_receiver_type_params(receiver, source, &mut names);
                }
            }
            _ => {}
        }
        current = n.parent();
    }
    names
}

fn collect_receiver_type_params(node: Node<'_>, source: &[u8], names: &mut Vec<String>) {
    if node.kind() == "type_arguments" {
        let mut cursor = node.walk();
        let mut stack: Vec<Node<'_>> = node.named_children(&mut cursor).collect();
        while let Some(n) = stack.pop() {
            if n.kind() == "type_identifier" {
                names.push(node_text(n, source).to_string());
            } else {
                let mut inner = n.walk();
                stack.extend(n.named_children(&mut inner));
            }
        }
        return;
    }
    let mut cursor = node.walk();
    for child in node.named_children(&mut cursor) {
        collect_receiver_type_params(child, source, names);
    }
}

fn extract_parameters(params_node: Node<'_>, source: &[u8]) -> Vec<Parameter> {
    let mut params = Vec::new();
    let mut cursor = params_node.walk();

    for child in params_node.named_children(&mut cursor) {
        let (names, ty) = match child.kind() {
            "parameter_declaration" => {
                let mut name_cursor = child.walk();
                let names: Vec<String> = child
                    .children_by_field_name("name", &mut name_cursor)
                    .map(|n| node_text(n, source).to_string())
                    .collect();
                (names, declared_type(child, source))
            }
            "variadic_parameter_declaration" => {
                let names = child
                    .child_by_field_name("name")
                    .map(|n| vec![node_text(n, source).to_string()])
                    .unwrap_or_default();
                let inner = declared_type(child, source);
                (names, TypeExpr::Variadic(Box::new(inner)))
            }
            // comments and anything else inside the list
            _ => continue,
        };
        params.push(Parameter {
            index: params.len(),
            names,
            ty,
        });
    }
    params
}

fn declared_type(decl: Node<'_>, source: &[u8]) -> TypeExpr {
    decl.child_by_field_name("type")
        .map(|t| type_expr_from_node(t, source))
        .unwrap_or_else(|| TypeExpr::Other(String::new()))
}

/// Convert a type node into a [`TypeExpr`].
pub(crate) fn type_expr_from_node(node: Node<'_>, source: &[u8]) -> TypeExpr {
    match node.kind() {
        "type_identifier" => TypeExpr::named(node_text(node, source)),
        "qualified_type" => {
            let package = node.child_by_field_name("package");
            let name = node.child_by_field_name("name");
            match (package, name) {
                (Some(p), Some(n)) => {
                    TypeExpr::qualified(node_text(p, source), node_text(n, source))
                }
                _ => TypeExpr::Other(node_text(node, source).to_string()),
            }
        }
        "pointer_type" => match node.named_child(0) {
            Some(inner) => TypeExpr::Pointer(Box::new(type_expr_from_node(inner, source))),
            None => TypeExpr::Other(node_text(node, source).to_string()),
        },
        "parenthesized_type" => match node.named_child(0) {
            Some(inner) => type_expr_from_node(inner, source),
            None => TypeExpr::Other(node_text(node, source).to_string()),
        },
        "generic_type" => match node.child_by_field_name("type") {
            Some(base) => TypeExpr::Generic(Box::new(type_expr_from_node(base, source))),
            None => TypeExpr::Other(node_text(node, source).to_string()),
        },
        _ => TypeExpr::Other(node_text(node, source).to_string()),
    }
}
