//! Configuration for ctxarg.
//!
//! [`RuleConfig`] is the immutable value the rule reads. [`CtxargConfig`] is the
//! on-disk `ctxarg.json` that produces it, plus the host-level settings
//! (suppressions and exclude globs). Missing keys fall back to defaults.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::types::{InvalidTypeIdentity, RuleCode, TypeIdentity};

/// File name looked up in the project root when no `--config` is given.
pub const CONFIG_FILE_NAME: &str = "ctxarg.json";

/// Switches for one analysis run. Fixed once the run starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RuleConfig {
    /// Require the sole context parameter to be named `ctx`.
    pub enforce_name: bool,
    /// Require the context parameter to be the first parameter.
    pub enforce_order: bool,
    /// The type treated as "the" context type.
    pub context_type: TypeIdentity,
}

impl Default for RuleConfig {
    fn default() -> Self {
        Self {
            enforce_name: true,
            enforce_order: true,
            context_type: TypeIdentity::context(),
        }
    }
}

/// Contents of `ctxarg.json`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CtxargConfig {
    #[serde(default = "default_true")]
    pub enforce_name: bool,
    #[serde(default = "default_true")]
    pub enforce_order: bool,
    #[serde(default = "TypeIdentity::context")]
    pub context_type: TypeIdentity,
    #[serde(default)]
    pub suppress: Vec<RuleCode>,
    #[serde(default)]
    pub exclude: Vec<String>,
}

fn default_true() -> bool {
    true
}

impl Default for CtxargConfig {
    fn default() -> Self {
        Self {
            enforce_name: true,
            enforce_order: true,
            context_type: TypeIdentity::context(),
            suppress: vec![],
            exclude: vec![],
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error(transparent)]
    ContextType(#[from] InvalidTypeIdentity),

    #[error("invalid exclude pattern `{pattern}`: {reason}")]
    Glob { pattern: String, reason: String },
}

impl CtxargConfig {
    /// Load `ctxarg.json` from `root`.
    /// Returns defaults if the file doesn't exist or can't be parsed.
    pub fn load(root: &Path) -> Self {
        let path = root.join(CONFIG_FILE_NAME);
        if !path.exists() {
            return Self::default();
        }
        match Self::from_file(&path) {
            Ok(cfg) => cfg,
            Err(e) => {
                tracing::warn!(error = %e, "using default configuration");
                Self::default()
            }
        }
    }

    /// Load a config file that must exist and parse.
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let cfg = serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        })?;
        tracing::debug!(path = %path.display(), "loaded configuration");
        Ok(cfg)
    }

    pub fn rule_config(&self) -> RuleConfig {
        RuleConfig {
            enforce_name: self.enforce_name,
            enforce_order: self.enforce_order,
            context_type: self.context_type.clone(),
        }
    }
}
