//! CLI structure and command definitions.
//!
//! This module defines the main CLI structure using clap's derive macros,
//! including global options and subcommands.

use crate::commands::{
    AbsoluteCommand, CanonicalCommand, CheckCommand, CompletionsCommand, DecomposeCommand,
    JoinListCommand, MkdirsCommand, NormalCommand, RelativeCommand, SplitListCommand,
    ValidateCommand, WeaklyCanonicalCommand,
};
use clap::{Parser, Subcommand};
use cxpath::Platform;
use std::path::PathBuf;

/// Inspect, normalize and canonicalize filesystem paths.
#[derive(Parser)]
#[command(name = "cxpath")]
#[command(version, about = "Inspect, normalize and canonicalize filesystem paths", long_about = None)]
pub struct Cli {
    /// Enable verbose output
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Suppress non-essential output
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Path grammar to use (posix or windows)
    #[arg(
        long,
        value_name = "PLATFORM",
        global = true,
        env = "CXPATH_PLATFORM",
        value_parser = parse_platform
    )]
    pub platform: Option<Platform>,

    /// Directory holding config.yaml (defaults to ~/.cxpath)
    #[arg(long, value_name = "PATH", global = true, env = "CXPATH_CONFIG_DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

fn parse_platform(text: &str) -> Result<Platform, String> {
    text.parse().map_err(|e: cxpath::Error| e.to_string())
}

/// Available CLI commands.
#[derive(Subcommand)]
pub enum Command {
    /// Show every lexical part of one or more paths
    Decompose(DecomposeCommand),

    /// Print the lexical normal form of paths
    Normal(NormalCommand),

    /// Express a path relative to a base
    Relative(RelativeCommand),

    /// Anchor a path onto an absolute base
    Absolute(AbsoluteCommand),

    /// Resolve a path to its absolute, symlink-free form
    Canonical(CanonicalCommand),

    /// Canonicalize the existing prefix of a path
    WeaklyCanonical(WeaklyCanonicalCommand),

    /// Create a directory and any missing parents
    Mkdirs(MkdirsCommand),

    /// Split a delimited path list into one path per line
    SplitList(SplitListCommand),

    /// Join paths into a delimited path list
    JoinList(JoinListCommand),

    /// Check whether a path is valid for the platform
    Check(CheckCommand),

    /// Validate a configuration file
    Validate(ValidateCommand),

    /// Generate shell completion scripts
    Completions(CompletionsCommand),
}
