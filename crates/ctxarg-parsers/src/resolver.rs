use ctxarg_core::types::{Position, TypeIdentity};

// ---------------------------------------------------------------------------
// Seams between the rule and its host
// ---------------------------------------------------------------------------

/// Maps a declared type expression to its canonical identity.
///
/// Returning `None` means "cannot classify"; the rule treats that as
/// "not a context". Implementations must be side-effect free.
pub trait TypeResolver {
    fn resolve(&self, ty: &TypeExpr) -> Option<TypeIdentity>;
}

impl<F> TypeResolver for F
where
    F: Fn(&TypeExpr) -> Option<TypeIdentity>,
{
    fn resolve(&self, ty: &TypeExpr) -> Option<TypeIdentity> {
        self(ty)
    }
}

/// A unit of source that can enumerate its function signatures.
///
/// The sequence is lazy and finite; each call starts a fresh traversal.
pub trait SignatureSource {
    fn signatures(&self) -> Box<dyn Iterator<Item = Signature> + '_>;
}

// ---------------------------------------------------------------------------
// Signature data model
// ---------------------------------------------------------------------------

/// Where a signature came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SignatureKind {
    /// Top-level `func name(...)`.
    Function,
    /// `func (r T) name(...)`.
    Method,
    /// `func(...) { ... }` expression.
    Literal,
    /// A function type: field, parameter, result or type declaration.
    FuncType,
    /// A method listed in an interface type.
    InterfaceMethod,
}

impl SignatureKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            SignatureKind::Function => "function",
            SignatureKind::Method => "method",
            SignatureKind::Literal => "func literal",
            SignatureKind::FuncType => "func type",
            SignatureKind::InterfaceMethod => "interface method",
        }
    }
}

/// The ordered parameter list of one function-like node.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Signature {
    pub kind: SignatureKind,
    /// Declared name, when the node has one.
    pub name: Option<String>,
    /// Position diagnostics for this signature are attached to.
    pub position: Position,
    pub params: Vec<Parameter>,
    /// Type parameter names in scope, from the signature itself and from
    /// enclosing generic declarations.
    pub type_params: Vec<String>,
}

impl Signature {
    /// Short description for output, e.g. `method Serve` or `func literal`.
    pub fn describe(&self) -> String {
        match &self.name {
            Some(name) => format!("{} {}", self.kind.as_str(), name),
            None => self.kind.as_str().to_string(),
        }
    }

    /// Whether `ty` names one of the type parameters in scope. Such a name
    /// shadows any package-level or dot-imported type of the same name.
    pub fn is_type_parameter(&self, ty: &TypeExpr) -> bool {
        matches!(ty, TypeExpr::Named { qualifier: None, name } if self.type_params.contains(name))
    }
}

/// One declared parameter slot. Several names may share the slot (`a, b T`);
/// anonymous parameters have none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Position within the owning signature, starting at 0.
    pub index: usize,
    pub names: Vec<String>,
    pub ty: TypeExpr,
}

/// Structured form of a declared parameter type.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TypeExpr {
    /// `Name` or `pkg.Name`.
    Named {
        qualifier: Option<String>,
        name: String,
    },
    /// `*T`
    Pointer(Box<TypeExpr>),
    /// `...T` in the last parameter slot.
    Variadic(Box<TypeExpr>),
    /// `T[A, B]`
    Generic(Box<TypeExpr>),
    /// Any other shape, kept as source text.
    Other(String),
}

impl TypeExpr {
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            qualifier: None,
            name: name.into(),
        }
    }

    pub fn qualified(qualifier: impl Into<String>, name: impl Into<String>) -> Self {
        TypeExpr::Named {
            qualifier: Some(qualifier.into()),
            name: name.into(),
        }
    }
}

impl std::fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TypeExpr::Named {
                qualifier: Some(q),
                name,
            } => write!(f, "{q}.{name}"),
            TypeExpr::Named {
                qualifier: None,
                name,
            } => f.write_str(name),
            TypeExpr::Pointer(inner) => write!(f, "*{inner}"),
            TypeExpr::Variadic(inner) => write!(f, "...{inner}"),
            TypeExpr::Generic(inner) => write!(f, "{inner}[...]"),
            TypeExpr::Other(text) => f.write_str(text),
        }
    }
}
