//! Command to anchor a path onto an absolute base.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Anchor a path onto an absolute base without touching the filesystem.
#[derive(Args)]
pub struct AbsoluteCommand {
    /// Path to anchor
    #[arg(value_name = "PATH")]
    pub path: String,

    /// Absolute base (defaults to the current directory)
    #[arg(long, value_name = "BASE")]
    pub base: Option<String>,
}

impl AbsoluteCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let shell = global.shell();
        let path = global.path(&self.path);

        let absolute = match self.base {
            Some(base) => shell.absolute(&path, &global.path(&base))?,
            None => shell.absolute_from_cwd(&path)?,
        };

        println!("{absolute}");
        Ok(())
    }
}
