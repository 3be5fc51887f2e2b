//! Output formatters for lint results.
//!
//! Provides two output modes:
//! - **Human** (default): one `file:line:col: message [code]` block per violation
//! - **JSON** (`--json`): the full [`LintResult`] as pretty-printed JSON

pub mod human;
pub(crate) mod human_helpers;
pub mod json;

use ctxarg_enforce::types::LintResult;

pub trait OutputFormatter {
    fn format_lint(&self, result: &LintResult) -> String;
}
