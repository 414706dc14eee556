//! Command to split a path list.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;
use cxpath::PathList;

/// Split a delimited path list (such as `$PATH`) into one path per line.
#[derive(Args)]
pub struct SplitListCommand {
    /// The delimited list
    #[arg(value_name = "LIST")]
    pub list: String,

    /// Print each entry's lexical normal form
    #[arg(long)]
    pub normalize: bool,
}

impl SplitListCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let list = PathList::with_platform(&self.list, global.platform());
        for path in &list {
            if self.normalize {
                println!("{}", path.lexically_normal());
            } else {
                println!("{path}");
            }
        }
        Ok(())
    }
}
