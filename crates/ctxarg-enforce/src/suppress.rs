use std::collections::HashSet;

use ctxarg_core::types::RuleCode;

use crate::types::Violation;

/// Manages suppressed rule codes.
///
/// A suppressed violation stays in the result, marked `suppressed = true` with
/// a hint, and no longer counts towards a failing status.
#[derive(Debug, Default, Clone)]
pub struct SuppressionManager {
    suppressed_codes: HashSet<RuleCode>,
}

impl SuppressionManager {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn suppress(&mut self, code: RuleCode) {
        self.suppressed_codes.insert(code);
    }

    pub fn is_suppressed(&self, code: RuleCode) -> bool {
        self.suppressed_codes.contains(&code)
    }

    /// Apply suppression to a violation, returning the modified violation.
    /// If the code is not suppressed, returns the violation unchanged.
    pub fn apply(&self, mut violation: Violation) -> Violation {
        if self.is_suppressed(violation.code) {
            violation.suppress_hint = Some(format!("Suppressed {} via configuration", violation.code));
            violation.suppressed = true;
        }
        violation
    }

    pub fn count(&self) -> usize {
        self.suppressed_codes.len()
    }
}

impl FromIterator<RuleCode> for SuppressionManager {
    fn from_iter<I: IntoIterator<Item = RuleCode>>(iter: I) -> Self {
        Self {
            suppressed_codes: iter.into_iter().collect(),
        }
    }
}
