//! ctxarg CLI: checks Go sources for context-parameter conventions.
//!
//! `ctxarg [PATHS]...` lints the given files and directories;
//! `ctxarg completion <shell>` prints a completion script.

use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod cli_args;
mod commands;

use cli_args::{Cli, Commands};

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let exit_code = match &cli.command {
        Some(Commands::Completion { shell }) => commands::completion::run(*shell),
        None => {
            let formatter: Box<dyn ctxarg_output::OutputFormatter> = if cli.json {
                Box::new(ctxarg_output::json::JsonFormatter)
            } else {
                Box::new(ctxarg_output::human::HumanFormatter::new().with_verbose(cli.verbose))
            };
            commands::lint::run(&*formatter, cli.lint_options())
        }
    };

    std::process::exit(exit_code);
}

/// Logs go to stderr so stdout stays parseable. `RUST_LOG` wins over `--verbose`.
fn init_tracing(verbose: bool) {
    let default = if verbose { "debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false),
        )
        .init();
}
