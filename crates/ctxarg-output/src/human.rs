use crate::human_helpers::{format_violation_human, plural};
use crate::OutputFormatter;
use ctxarg_enforce::types::LintResult;

#[derive(Debug, Default)]
pub struct HumanFormatter {
    verbose: bool,
}

impl HumanFormatter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Also print suppressed violations and skipped files.
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }
}

impl OutputFormatter for HumanFormatter {
    fn format_lint(&self, result: &LintResult) -> String {
        let active = result.active_count();
        let suppressed = result.suppressed_count();
        let show_suppressed = self.verbose && suppressed > 0;
        let show_skipped = self.verbose && !result.skipped.is_empty();

        if active == 0 && !show_suppressed && !show_skipped {
            return String::new(); // Clean run = empty stdout
        }

        let mut out = String::new();

        for v in &result.violations {
            if !v.suppressed || self.verbose {
                out.push_str(&format_violation_human(v));
            }
        }

        if show_skipped {
            for s in &result.skipped {
                out.push_str(&format!("skipped {}: {}\n", s.file, s.reason));
            }
        }

        out.push_str(&format!(
            "\n{} in {}",
            plural(active, "violation"),
            plural(result.files_analyzed.len(), "file"),
        ));
        if suppressed > 0 {
            out.push_str(&format!(", {} suppressed", suppressed));
        }
        out.push('\n');

        out
    }
}
