//! Command to print lexical normal forms.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Print the lexical normal form of each path, one per line.
#[derive(Args)]
pub struct NormalCommand {
    /// Paths to normalize
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl NormalCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        for text in &self.paths {
            println!("{}", global.path(text).lexically_normal());
        }
        Ok(())
    }
}
