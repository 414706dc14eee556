//! Command to show the lexical anatomy of paths.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use cxpath::output::{Decomposition, OutputFormat};

/// Show every lexical part of one or more paths.
#[derive(Args)]
pub struct DecomposeCommand {
    /// Paths to decompose
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Human)]
    pub format: OutputFormat,
}

impl DecomposeCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = global.platform();
        let items: Vec<Decomposition> = self
            .paths
            .iter()
            .map(|text| Decomposition::from_path(text, platform))
            .collect();

        println!("{}", self.format.render(&items)?);
        Ok(())
    }
}
