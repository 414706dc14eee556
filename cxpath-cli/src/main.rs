//! Main entry point for the cxpath CLI.
//!
//! It exposes the library's path model on the command line:
//! - `decompose`, `normal`, `relative`, `absolute`: lexical queries
//! - `canonical`, `weakly-canonical`, `mkdirs`: filesystem-aware services
//! - `split-list`, `join-list`: path lists such as `PATH`
//! - `check`, `validate`: validity of paths and configuration files

mod cli;
mod commands;
mod error;
mod utils;

use clap::Parser;
use cli::Cli;
use utils::{load_configuration, select_logger, GlobalOptions};

fn main() {
    // Parse CLI arguments
    let cli = Cli::parse();

    let config = match load_configuration(cli.config_dir.as_ref(), cli.platform) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    };

    // Initialize logging based on verbosity
    if select_logger(cli.verbose, cli.quiet, &config)
        .install()
        .is_err()
    {
        eprintln!("Warning: a logger was already installed");
    }

    let global = GlobalOptions {
        verbose: cli.verbose,
        quiet: cli.quiet,
        config,
    };

    // Execute the command
    let result = match cli.command {
        cli::Command::Decompose(cmd) => cmd.execute(&global),
        cli::Command::Normal(cmd) => cmd.execute(&global),
        cli::Command::Relative(cmd) => cmd.execute(&global),
        cli::Command::Absolute(cmd) => cmd.execute(&global),
        cli::Command::Canonical(cmd) => cmd.execute(&global),
        cli::Command::WeaklyCanonical(cmd) => cmd.execute(&global),
        cli::Command::Mkdirs(cmd) => cmd.execute(&global),
        cli::Command::SplitList(cmd) => cmd.execute(&global),
        cli::Command::JoinList(cmd) => cmd.execute(&global),
        cli::Command::Check(cmd) => cmd.execute(&global),
        cli::Command::Validate(cmd) => cmd.execute(&global),
        cli::Command::Completions(cmd) => cmd.execute(&global),
    };

    // Handle errors and set exit code
    match result {
        Ok(()) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {e}");
            std::process::exit(e.exit_code());
        }
    }
}
