//! Utility functions for CLI operations.
//!
//! This module provides the pieces every command shares: global options,
//! configuration loading, logger selection and path parsing.

use crate::error::CliError;
use cxpath::{init_logger, Config, ConfigBuilder, LogLevel, Logger, Path, Platform, Shell};
use std::path::PathBuf;

/// Global CLI options shared across all commands.
#[derive(Debug, Clone)]
#[allow(dead_code)] // not every command reads every flag
pub struct GlobalOptions {
    /// Enable verbose output.
    pub verbose: bool,

    /// Suppress non-essential output.
    pub quiet: bool,

    /// Merged configuration, with `--platform` already applied.
    pub config: Config,
}

impl GlobalOptions {
    /// The path grammar in effect.
    pub fn platform(&self) -> Platform {
        self.config.platform_or_native()
    }

    /// Parses `text` with the grammar in effect.
    pub fn path(&self, text: &str) -> Path {
        Path::with_platform(text, self.platform())
    }

    /// A shell over the real filesystem configured from `config`.
    pub fn shell(&self) -> Shell {
        Shell::from_config(&self.config)
    }
}

/// Load hierarchical configuration.
///
/// Configuration is merged from multiple sources with precedence:
/// 1. Command-line flags (highest priority)
/// 2. Environment variables
/// 3. The config file in `config_dir`, or `~/.cxpath/config.yaml`
/// 4. Built-in defaults (lowest priority)
pub fn load_configuration(
    config_dir: Option<&PathBuf>,
    platform: Option<Platform>,
) -> Result<Config, CliError> {
    let mut builder = ConfigBuilder::new();
    if let Some(dir) = config_dir {
        builder = builder.with_config_dir(dir);
    }
    if platform.is_some() {
        builder = builder.with_config(Config {
            platform,
            ..Default::default()
        });
    }

    builder.build().map_err(|e| CliError::Config(e.to_string()))
}

/// Choose the logger: flags first, then the configured log mode (which
/// already reflects `CXPATH_LOG_MODE`), then the default.
pub fn select_logger(verbose: bool, quiet: bool, config: &Config) -> Logger {
    if verbose || quiet {
        return init_logger(verbose, quiet);
    }
    config
        .log_mode
        .as_deref()
        .and_then(|mode| LogLevel::parse(mode).ok())
        .map_or_else(|| init_logger(false, false), Logger::new)
}

/// Fail with a semantic error when a lexical result is empty.
pub fn require_non_empty(path: Path, what: &str) -> Result<Path, CliError> {
    if path.is_empty() {
        return Err(CliError::SemanticFailure(format!("{what} is empty")));
    }
    Ok(path)
}
