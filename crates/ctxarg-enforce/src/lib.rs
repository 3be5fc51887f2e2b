//! Enforcement of the context-parameter convention.
//!
//! Every function-like signature is checked for:
//! - C001: more than one context parameter
//! - C002: context parameter is not the first argument
//! - C003: context parameter is not named `ctx`

pub mod types;
pub mod rule;
pub mod suppress;
pub mod engine;

pub use engine::LintEngine;
pub use types::{LintResult, LintStatus, SkippedFile, Violation};
