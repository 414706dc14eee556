//! CLI command implementations.
//!
//! This module contains the implementations of all CLI commands:
//! - `decompose`: Show every lexical part of paths
//! - `normal`: Lexical normal form
//! - `relative`: Path relative to a base, lexically or via the filesystem
//! - `absolute`: Path anchored onto an absolute base
//! - `canonical`: Absolute, symlink-free form verified on disk
//! - `weakly_canonical`: Canonical form of the existing prefix
//! - `mkdirs`: Create a directory and its missing parents
//! - `split_list` / `join_list`: Path list conversion
//! - `check`: Platform validity of a path
//! - `validate`: Validate a configuration file
//! - `completions`: Shell completion scripts

pub mod absolute;
pub mod canonical;
pub mod check;
pub mod completions;
pub mod decompose;
pub mod join_list;
pub mod mkdirs;
pub mod normal;
pub mod relative;
pub mod split_list;
pub mod validate;
pub mod weakly_canonical;

pub use absolute::AbsoluteCommand;
pub use canonical::CanonicalCommand;
pub use check::CheckCommand;
pub use completions::CompletionsCommand;
pub use decompose::DecomposeCommand;
pub use join_list::JoinListCommand;
pub use mkdirs::MkdirsCommand;
pub use normal::NormalCommand;
pub use relative::RelativeCommand;
pub use split_list::SplitListCommand;
pub use validate::ValidateCommand;
pub use weakly_canonical::WeaklyCanonicalCommand;
