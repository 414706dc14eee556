//! Command to canonicalize a path against the filesystem.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Resolve a path to its absolute, symlink-free, normalized form.
///
/// Every component must exist. The base must be an existing directory.
#[derive(Args)]
pub struct CanonicalCommand {
    /// Path to canonicalize
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Directory relative paths are resolved against (defaults to the
    /// current directory)
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,
}

impl CanonicalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let shell = global.shell();
        let path = global.path(&self.path);

        let canonical = match self.base {
            Some(base) => shell.canonical(&path, &global.path(&base))?,
            None => shell.canonical_from_cwd(&path)?,
        };

        println!("{canonical}");
        Ok(())
    }
}
