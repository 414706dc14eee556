//! Command to join paths into a path list.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use cxpath::PathList;

/// Join paths into a single delimited path list.
#[derive(Args)]
pub struct JoinListCommand {
    /// Paths to join
    #[arg(value_name = "PATH", required = true)]
    pub paths: Vec<String>,
}

impl JoinListCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = global.platform();
        let mut list = PathList::new(platform);
        list.extend(self.paths.iter().map(|text| global.path(text)));

        let delimiter = platform.list_delimiter();
        if let Some(bad) = list.iter().find(|p| p.to_string().contains(delimiter)) {
            return Err(CliError::InvalidArguments(format!(
                "'{bad}' contains the list delimiter '{delimiter}'"
            )));
        }

        println!("{list}");
        Ok(())
    }
}
