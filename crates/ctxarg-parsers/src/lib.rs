//! Go front end for ctxarg.
//!
//! - [`resolver`]: the signature data model and the `TypeResolver` / `SignatureSource` seams
//! - [`go`]: tree-sitter-go signature enumeration and per-file type resolution
//! - [`treesitter`]: parser wrapper and language detection
//! - [`walker`]: source file discovery

pub mod queries;
pub mod resolver;
pub mod treesitter;
pub mod walker;

pub mod go;
