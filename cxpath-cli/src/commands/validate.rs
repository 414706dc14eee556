//! Command to validate a configuration file.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use cxpath::config::{ConfigLoader, ConfigValidator};
use std::path::PathBuf;

/// Validate a configuration file without applying it.
#[derive(Args)]
pub struct ValidateCommand {
    /// Path to the configuration file
    #[arg(value_name = "FILE")]
    pub config_path: PathBuf,
}

impl ValidateCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        if !self.config_path.is_file() {
            return Err(CliError::InvalidArguments(format!(
                "configuration file not found: {}",
                self.config_path.display()
            )));
        }

        let result = ConfigLoader::load_file(&self.config_path)
            .and_then(|config| ConfigValidator::validate(&config));

        match result {
            Ok(()) => {
                if !global.quiet {
                    println!("{}: valid", self.config_path.display());
                }
                Ok(())
            }
            Err(e) => Err(CliError::SemanticFailure(format!(
                "{}: {e}",
                self.config_path.display()
            ))),
        }
    }
}
