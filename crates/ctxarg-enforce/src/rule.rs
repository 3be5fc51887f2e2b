//! The context-parameter rule.
//!
//! A function that accepts a context must accept at most one, take it as the
//! first parameter, and name it `ctx`. The two latter checks can be switched
//! off through [`RuleConfig`]; the multiplicity check always runs and, when it
//! fires, is the only finding for that signature.

use ctxarg_core::config::RuleConfig;
use ctxarg_core::types::{Diagnostic, RuleCode};
use ctxarg_parsers::resolver::{Signature, TypeResolver};

pub const ANALYZER_NAME: &str = "ctxarg";

pub const DOC: &str = "check for parameters order while receiving context as parameter

The ctxarg checker walks functions checking context parameters
and ensures the context parameter is always the first received argument.";

/// The only name accepted for a context parameter.
pub const CONTEXT_PARAM_NAME: &str = "ctx";

/// Sink for rule findings.
pub trait Reporter {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl Reporter for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

/// Evaluate one signature and report 0, 1 or 2 diagnostics.
pub fn check_signature<R>(
    sig: &Signature,
    config: &RuleConfig,
    resolver: &R,
    reporter: &mut dyn Reporter,
) where
    R: TypeResolver + ?Sized,
{
    let is_context: Vec<bool> = sig
        .params
        .iter()
        .map(|p| {
            !sig.is_type_parameter(&p.ty)
                && resolver.resolve(&p.ty).as_ref() == Some(&config.context_type)
        })
        .collect();

    if is_context.iter().filter(|c| **c).count() > 1 {
        reporter.report(Diagnostic::new(sig.position, RuleCode::MultipleContexts));
        return;
    }

    for (param, _) in sig.params.iter().zip(&is_context).filter(|(_, c)| **c) {
        if config.enforce_order && param.index != 0 {
            reporter.report(Diagnostic::new(sig.position, RuleCode::NotFirst));
        }
        if config.enforce_name {
            // Grouped (`ctx, other T`) and anonymous parameters are not name-checked.
            if let [only] = param.names.as_slice() {
                if only != CONTEXT_PARAM_NAME {
                    reporter.report(Diagnostic::new(sig.position, RuleCode::NotNamedCtx));
                }
            }
        }
    }
}

/// Evaluate every signature of one unit of source, in sequence.
pub fn check_signatures<I, R>(
    signatures: I,
    config: &RuleConfig,
    resolver: &R,
    reporter: &mut dyn Reporter,
) where
    I: IntoIterator<Item = Signature>,
    R: TypeResolver + ?Sized,
{
    for sig in signatures {
        check_signature(&sig, config, resolver, reporter);
    }
}

/// Convenience wrapper collecting the diagnostics of one signature.
pub fn evaluate<R>(sig: &Signature, config: &RuleConfig, resolver: &R) -> Vec<Diagnostic>
where
    R: TypeResolver + ?Sized,
{
    let mut out = Vec::new();
    check_signature(sig, config, resolver, &mut out);
    out
}

#[cfg(test)]
#[path = "rule_tests.rs"]
mod tests;
