//! Command to create a directory tree.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Create a directory and any missing parents.
///
/// Existing directories are left alone. A non-directory in the way is an
/// error.
#[derive(Args)]
pub struct MkdirsCommand {
    /// Directory to create
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl MkdirsCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let path = global.path(&self.path);
        global.shell().create_directories(&path)?;
        log::info!("created {path}");
        Ok(())
    }
}
