//! Command to canonicalize the existing prefix of a path.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Canonicalize the longest existing prefix and keep the rest lexically.
#[derive(Args)]
pub struct WeaklyCanonicalCommand {
    /// Path to resolve
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl WeaklyCanonicalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        println!("{}", global.shell().weakly_canonical(&path)?);
        Ok(())
    }
}
