//! Core types and configuration for ctxarg.
//!
//! - [`types`]: positions, canonical type identities, rule codes, diagnostics
//! - [`config`]: the immutable [`RuleConfig`](config::RuleConfig) and `ctxarg.json` loading

pub mod config;
pub mod types;
