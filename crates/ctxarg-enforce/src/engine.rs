use std::path::{Path, PathBuf};

use rayon::prelude::*;

use ctxarg_core::config::{CtxargConfig, RuleConfig};
use ctxarg_core::types::{Diagnostic, RuleCode};
use ctxarg_parsers::go::GoFile;
use ctxarg_parsers::treesitter::TreeSitterParser;

use crate::rule;
use crate::suppress::SuppressionManager;
use crate::types::{LintResult, LintStatus, SkippedFile, Violation};

/// Runs the rule over a set of Go files and assembles a [`LintResult`].
///
/// Files are independent, so they are analysed in parallel with one parser
/// per worker thread. The configuration is shared read-only.
pub struct LintEngine {
    config: RuleConfig,
    suppressions: SuppressionManager,
}

enum FileOutcome {
    Analyzed { file: String, violations: Vec<Violation> },
    Skipped(SkippedFile),
}

impl LintEngine {
    pub fn new(config: RuleConfig) -> Self {
        Self {
            config,
            suppressions: SuppressionManager::new(),
        }
    }

    /// Create an engine configured from a `CtxargConfig`.
    pub fn with_config(config: &CtxargConfig) -> Self {
        Self {
            config: config.rule_config(),
            suppressions: config.suppress.iter().copied().collect(),
        }
    }

    pub fn suppress(&mut self, code: RuleCode) {
        self.suppressions.suppress(code);
    }

    pub fn config(&self) -> &RuleConfig {
        &self.config
    }

    /// Violations for one parsed file, in signature preorder.
    pub fn lint_file(&self, file: &GoFile, display_path: &str) -> Vec<Violation> {
        if file.has_errors() {
            tracing::debug!(file = display_path, "syntax errors recovered; analysing anyway");
        }
        let resolver = file.type_resolver();
        let mut violations = Vec::new();
        for sig in file.signatures() {
            let mut diagnostics: Vec<Diagnostic> = Vec::new();
            rule::check_signature(&sig, &self.config, resolver, &mut diagnostics);
            if diagnostics.is_empty() {
                continue;
            }
            let described = sig.describe();
            violations.extend(diagnostics.into_iter().map(|d| {
                self.suppressions.apply(Violation::from_diagnostic(
                    d,
                    display_path,
                    Some(described.clone()),
                ))
            }));
        }
        violations
    }

    /// Lint in-memory sources given as `(display path, content)` pairs.
    pub fn lint_sources(&self, sources: &[(String, String)]) -> LintResult {
        let outcomes: Vec<FileOutcome> = sources
            .par_iter()
            .map_init(TreeSitterParser::new, |parser, (name, content)| {
                self.lint_one(parser, Path::new(name), name, content.clone())
            })
            .collect();
        self.finish(outcomes)
    }

    /// Read and lint files from disk. Paths are reported relative to `root`.
    /// Unreadable or unparsable files are listed as skipped, not fatal.
    pub fn lint_paths(&self, paths: &[PathBuf], root: &Path) -> LintResult {
        let outcomes: Vec<FileOutcome> = paths
            .par_iter()
            .map_init(TreeSitterParser::new, |parser, path| {
                let shown = display_path(path, root);
                match std::fs::read_to_string(path) {
                    Ok(content) => self.lint_one(parser, path, &shown, content),
                    Err(e) => {
                        tracing::warn!(file = %shown, error = %e, "skipping unreadable file");
                        FileOutcome::Skipped(SkippedFile {
                            file: shown,
                            reason: e.to_string(),
                        })
                    }
                }
            })
            .collect();
        self.finish(outcomes)
    }

    fn lint_one(
        &self,
        parser: &mut TreeSitterParser,
        path: &Path,
        shown: &str,
        content: String,
    ) -> FileOutcome {
        match GoFile::parse(parser, path, content) {
            Ok(file) => FileOutcome::Analyzed {
                file: shown.to_string(),
                violations: self.lint_file(&file, shown),
            },
            Err(e) => {
                tracing::warn!(file = shown, error = %e, "skipping file that failed to parse");
                FileOutcome::Skipped(SkippedFile {
                    file: shown.to_string(),
                    reason: e.to_string(),
                })
            }
        }
    }

    fn finish(&self, outcomes: Vec<FileOutcome>) -> LintResult {
        let mut files_analyzed = Vec::new();
        let mut violations = Vec::new();
        let mut skipped = Vec::new();

        for outcome in outcomes {
            match outcome {
                FileOutcome::Analyzed {
                    file,
                    violations: found,
                } => {
                    files_analyzed.push(file);
                    violations.extend(found);
                }
                FileOutcome::Skipped(s) => skipped.push(s),
            }
        }

        files_analyzed.sort();
        skipped.sort_by(|a, b| a.file.cmp(&b.file));
        violations.sort_by(|a, b| {
            (&a.file, a.line, a.column, a.code).cmp(&(&b.file, b.line, b.column, b.code))
        });

        let status = if violations.iter().any(|v| !v.suppressed) {
            LintStatus::Violations
        } else {
            LintStatus::Ok
        };

        tracing::debug!(
            files = files_analyzed.len(),
            violations = violations.len(),
            skipped = skipped.len(),
            "lint finished"
        );

        LintResult {
            version: env!("CARGO_PKG_VERSION").to_string(),
            analyzer: rule::ANALYZER_NAME.to_string(),
            status,
            files_analyzed,
            violations,
            skipped,
        }
    }
}

fn display_path(path: &Path, root: &Path) -> String {
    path.strip_prefix(root)
        .unwrap_or(path)
        .to_string_lossy()
        .replace('\\', "/")
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
