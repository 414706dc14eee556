//! Library exports for cxpath-cli.
//!
//! This module exports the CLI structure so tests and documentation tooling
//! can inspect the command tree.

pub mod cli;
pub mod commands;
pub mod error;
pub mod utils;

pub use cli::Cli;
