//! Command to express a path relative to a base.

use crate::error::CliError;
use crate::utils::{require_non_empty, GlobalOptions};
use clap::Args;

/// Express a path relative to a base.
///
/// By default only the text is compared. With `--filesystem` both paths are
/// weakly canonicalized first, so symlinks and `..` are resolved against the
/// real filesystem.
#[derive(Args)]
pub struct RelativeCommand {
    /// Path to express
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Base to express it against
    #[arg(long, value_name = "BASE")]
    pub base: String,

    /// Resolve both paths against the filesystem first
    #[arg(long)]
    pub filesystem: bool,
}

impl RelativeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        let base = global.path(&self.base);

        let relative = if self.filesystem {
            global.shell().relative(&path, &base)?
        } else {
            path.lexically_relative(&base)
        };

        let relative = require_non_empty(
            relative,
            &format!("'{path}' relative to '{base}' (no common prefix)"),
        )?;
        println!("{relative}");
        Ok(())
    }
}
