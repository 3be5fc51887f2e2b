use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// A source location. Lines and columns are 1-based; columns count bytes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Position {
    pub line: u32,
    pub column: u32,
}

impl Position {
    pub fn new(line: u32, column: u32) -> Self {
        Self { line, column }
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Fully-qualified identity of a named type: package path plus type name.
///
/// Two parameters are "the same type" for the rule exactly when their
/// identities compare equal. Predeclared types carry an empty package.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TypeIdentity {
    pub package: String,
    pub name: String,
}

impl TypeIdentity {
    pub fn new(package: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            package: package.into(),
            name: name.into(),
        }
    }

    /// Identity of a predeclared type such as `int` or `error`.
    pub fn builtin(name: impl Into<String>) -> Self {
        Self::new("", name)
    }

    /// The conventional context type, `context.Context`.
    pub fn context() -> Self {
        Self::new("context", "Context")
    }

    pub fn is_builtin(&self) -> bool {
        self.package.is_empty()
    }

    /// Identity of a type declared in the file's own package, which is known
    /// only by its clause name. The package is written `<name>`, a form no
    /// import path can take, so `package context` never yields `context.Context`.
    pub fn local(package_name: &str, name: impl Into<String>) -> Self {
        Self::new(format!("<{package_name}>"), name)
    }

    pub fn is_local(&self) -> bool {
        self.package.starts_with('<')
    }
}

/// Characters the go tool rejects in import paths.
fn is_import_path_char(c: char) -> bool {
    !c.is_whitespace() && !c.is_control() && !"!\"#$%&'()*,:;<=>?[\\]^`{|}".contains(c)
}

impl fmt::Display for TypeIdentity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.package.is_empty() {
            f.write_str(&self.name)
        } else {
            write!(f, "{}.{}", self.package, self.name)
        }
    }
}

/// Error returned when a `path.Name` string cannot be split into an identity.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid type identity `{0}`: expected `package/path.TypeName`")]
pub struct InvalidTypeIdentity(pub String);

impl FromStr for TypeIdentity {
    type Err = InvalidTypeIdentity;

    /// Splits on the last `.`, so `golang.org/x/net/context.Context` keeps the
    /// dotted host in the package path.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        let (package, name) = trimmed
            .rsplit_once('.')
            .ok_or_else(|| InvalidTypeIdentity(s.to_string()))?;
        if package.is_empty()
            || package.ends_with('/')
            || !package.chars().all(is_import_path_char)
            || !is_identifier(name)
        {
            return Err(InvalidTypeIdentity(s.to_string()));
        }
        Ok(Self::new(package, name))
    }
}

impl TryFrom<String> for TypeIdentity {
    type Error = InvalidTypeIdentity;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TypeIdentity> for String {
    fn from(id: TypeIdentity) -> Self {
        id.to_string()
    }
}

fn is_identifier(s: &str) -> bool {
    let mut chars = s.chars();
    match chars.next() {
        Some(c) if c.is_alphabetic() || c == '_' => {}
        _ => return false,
    }
    chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// The three checks the rule performs, each with a stable code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum RuleCode {
    /// More than one context parameter in one signature.
    #[serde(rename = "C001")]
    MultipleContexts,
    /// The context parameter is not at index 0.
    #[serde(rename = "C002")]
    NotFirst,
    /// The context parameter is not named `ctx`.
    #[serde(rename = "C003")]
    NotNamedCtx,
}

impl RuleCode {
    pub const ALL: [RuleCode; 3] = [
        RuleCode::MultipleContexts,
        RuleCode::NotFirst,
        RuleCode::NotNamedCtx,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            RuleCode::MultipleContexts => "C001",
            RuleCode::NotFirst => "C002",
            RuleCode::NotNamedCtx => "C003",
        }
    }

    /// The human-readable message reported for this code.
    pub fn message(&self) -> &'static str {
        match self {
            RuleCode::MultipleContexts => "more than one context parameter",
            RuleCode::NotFirst => "context parameter is not the first argument",
            RuleCode::NotNamedCtx => "context parameter is not named 'ctx'",
        }
    }
}

impl fmt::Display for RuleCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown rule code `{0}` (expected one of C001, C002, C003)")]
pub struct UnknownRuleCode(pub String);

impl FromStr for RuleCode {
    type Err = UnknownRuleCode;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let upper = s.trim().to_ascii_uppercase();
        RuleCode::ALL
            .into_iter()
            .find(|code| code.as_str() == upper)
            .ok_or_else(|| UnknownRuleCode(s.to_string()))
    }
}

/// A single rule finding: where it is and what is wrong.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Diagnostic {
    pub position: Position,
    pub code: RuleCode,
    pub message: String,
}

impl Diagnostic {
    pub fn new(position: Position, code: RuleCode) -> Self {
        Self {
            position,
            code,
            message: code.message().to_string(),
        }
    }
}
