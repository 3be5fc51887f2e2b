use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};
use clap_complete::Shell;

use ctxarg_core::types::{RuleCode, TypeIdentity};

use crate::commands::lint::LintOptions;

#[derive(Parser, Debug)]
#[command(
    name = "ctxarg",
    version,
    about = "Check that Go functions take context.Context first and name it ctx",
    args_conflicts_with_subcommands = true
)]
pub(crate) struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Files or directories to check (default: current directory)
    pub paths: Vec<PathBuf>,

    /// Require the context parameter to be named `ctx`
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub name: Option<bool>,

    /// Require the context parameter to come first
    #[arg(long, value_name = "BOOL", action = ArgAction::Set)]
    pub paramorder: Option<bool>,

    /// Fully qualified context type, e.g. `context.Context`
    #[arg(long, value_name = "PKG.NAME")]
    pub context_type: Option<TypeIdentity>,

    /// Suppress a rule code (C001, C002, C003); repeatable
    #[arg(long, value_name = "CODE")]
    pub suppress: Vec<RuleCode>,

    /// Configuration file (default: <root>/ctxarg.json)
    #[arg(long, value_name = "FILE", env = "CTXARG_CONFIG")]
    pub config: Option<PathBuf>,

    /// Output as structured JSON
    #[arg(long)]
    pub json: bool,

    /// Also fail when files were skipped or nothing was analysed
    #[arg(long)]
    pub strict: bool,

    /// Debug logging; show suppressed violations
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub(crate) enum Commands {
    /// Generate shell completion scripts
    Completion {
        /// Target shell
        #[arg(value_enum)]
        shell: Shell,
    },
}

impl Cli {
    pub fn lint_options(&self) -> LintOptions {
        LintOptions {
            paths: self.paths.clone(),
            enforce_name: self.name,
            enforce_order: self.paramorder,
            context_type: self.context_type.clone(),
            suppress: self.suppress.clone(),
            config: self.config.clone(),
            strict: self.strict,
        }
    }
}
