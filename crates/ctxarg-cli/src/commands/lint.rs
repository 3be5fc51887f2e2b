use std::path::{Path, PathBuf};

use ctxarg_core::config::{ConfigError, CtxargConfig};
use ctxarg_core::types::{RuleCode, TypeIdentity};
use ctxarg_enforce::types::LintResult;
use ctxarg_enforce::LintEngine;
use ctxarg_output::OutputFormatter;
use ctxarg_parsers::walker::FileWalker;

/// Flags for a lint run. `None` means "take it from the config file".
#[derive(Debug, Clone, Default)]
pub struct LintOptions {
    pub paths: Vec<PathBuf>,
    pub enforce_name: Option<bool>,
    pub enforce_order: Option<bool>,
    pub context_type: Option<TypeIdentity>,
    pub suppress: Vec<RuleCode>,
    pub config: Option<PathBuf>,
    pub strict: bool,
}

/// Run `ctxarg [PATHS]...`. Returns the process exit code.
pub fn run(formatter: &dyn OutputFormatter, opts: LintOptions) -> i32 {
    let cwd = match std::env::current_dir() {
        Ok(p) => p,
        Err(e) => {
            eprintln!("ctxarg: failed to get current directory: {}", e);
            return 2;
        }
    };

    let paths = if opts.paths.is_empty() {
        vec![cwd.clone()]
    } else {
        opts.paths.clone()
    };
    let root = project_root(&paths, &cwd);

    let config = match resolve_config(&root, &opts) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("ctxarg: {}", e);
            return 2;
        }
    };

    let files = match collect_files(&paths, &config) {
        Ok(f) => f,
        Err(msg) => {
            eprintln!("ctxarg: {}", msg);
            return 2;
        }
    };
    tracing::debug!(files = files.len(), root = %root.display(), "collected Go files");

    let result = LintEngine::with_config(&config).lint_paths(&files, &root);
    output_result(formatter, &result, opts.strict)
}

/// The first directory argument, or the working directory.
fn project_root(paths: &[PathBuf], cwd: &Path) -> PathBuf {
    match paths.first() {
        Some(p) if p.is_dir() => p.clone(),
        _ => cwd.to_path_buf(),
    }
}

/// Config file (explicit or `<root>/ctxarg.json`) with CLI flags layered on top.
fn resolve_config(root: &Path, opts: &LintOptions) -> Result<CtxargConfig, ConfigError> {
    let mut config = match &opts.config {
        Some(path) => CtxargConfig::from_file(path)?,
        None => CtxargConfig::load(root),
    };

    if let Some(name) = opts.enforce_name {
        config.enforce_name = name;
    }
    if let Some(order) = opts.enforce_order {
        config.enforce_order = order;
    }
    if let Some(ty) = &opts.context_type {
        config.context_type = ty.clone();
    }
    for code in &opts.suppress {
        if !config.suppress.contains(code) {
            config.suppress.push(*code);
        }
    }

    Ok(config)
}

fn collect_files(paths: &[PathBuf], config: &CtxargConfig) -> Result<Vec<PathBuf>, String> {
    let mut files = Vec::new();
    for path in paths {
        if path.is_dir() {
            let walker = FileWalker::new(path)
                .with_excludes(&config.exclude)
                .map_err(|e| e.to_string())?;
            files.extend(walker.walk().into_iter().map(|entry| entry.path));
        } else if path.is_file() {
            files.push(path.clone());
        } else {
            return Err(format!("path not found: {}", path.display()));
        }
    }
    files.sort();
    files.dedup();
    Ok(files)
}

fn output_result(formatter: &dyn OutputFormatter, result: &LintResult, strict: bool) -> i32 {
    let output = formatter.format_lint(result);
    if !output.is_empty() {
        println!("{}", output.trim_end());
    }

    if !result.is_clean() {
        return 1;
    }
    if strict && (!result.skipped.is_empty() || result.files_analyzed.is_empty()) {
        tracing::warn!(
            skipped = result.skipped.len(),
            analysed = result.files_analyzed.len(),
            "strict mode: incomplete analysis"
        );
        return 1;
    }
    tracing::debug!("clean: no violations");
    0
}
