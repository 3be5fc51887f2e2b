use serde::{Deserialize, Serialize};

use ctxarg_core::types::{Diagnostic, RuleCode};

/// A diagnostic placed in a file, as reported to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    pub code: RuleCode,
    pub message: String,
    pub file: String,
    pub line: u32,
    pub column: u32,
    /// e.g. `function Handle`, `func literal`.
    pub signature: Option<String>,
    pub suppressed: bool,
    pub suppress_hint: Option<String>,
}

impl Violation {
    pub fn from_diagnostic(diagnostic: Diagnostic, file: &str, signature: Option<String>) -> Self {
        Self {
            code: diagnostic.code,
            message: diagnostic.message,
            file: file.to_string(),
            line: diagnostic.position.line,
            column: diagnostic.position.column,
            signature,
            suppressed: false,
            suppress_hint: None,
        }
    }
}

/// A file that could not be analysed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkippedFile {
    pub file: String,
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LintStatus {
    Ok,
    Violations,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LintResult {
    pub version: String,
    pub analyzer: String,
    pub status: LintStatus,
    pub files_analyzed: Vec<String>,
    pub violations: Vec<Violation>,
    #[serde(skip_serializing_if = "Vec::is_empty", default)]
    pub skipped: Vec<SkippedFile>,
}

impl LintResult {
    /// Violations that were not suppressed.
    pub fn active(&self) -> impl Iterator<Item = &Violation> {
        self.violations.iter().filter(|v| !v.suppressed)
    }

    pub fn active_count(&self) -> usize {
        self.active().count()
    }

    pub fn suppressed_count(&self) -> usize {
        self.violations.iter().filter(|v| v.suppressed).count()
    }

    pub fn is_clean(&self) -> bool {
        self.status == LintStatus::Ok
    }
}
