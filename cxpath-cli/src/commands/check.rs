//! Command to check a path against the platform's rules.

use crate::error::CliError;
use crate::utils::GlobalOptions;
use clap::Args;

/// Check whether a path is valid for the platform.
///
/// Exits with status 1 and names the offending components when it is not.
#[derive(Args)]
pub struct CheckCommand {
    /// Path to check
    #[arg(value_name = "PATH")]
    pub path: String,
}

impl CheckCommand {
    pub fn execute(self, global: &GlobalOptions) -> Result<(), CliError> {
        let platform = global.platform();
        let path = global.path(&self.path);

        if path.is_valid() {
            if !global.quiet {
                println!("{path}: valid for {platform}");
            }
            return Ok(());
        }

        if path.is_empty() {
            return Err(CliError::SemanticFailure(
                "empty path is never valid".to_string(),
            ));
        }

        // judge each component alone the same way the policy judges the path
        let policy = platform.policy();
        let root_name = path.has_root_name().then_some(0);
        let offending: Vec<String> = path
            .components()
            .iter()
            .enumerate()
            .filter(|&(i, c)| {
                let own_root = root_name.filter(|&r| r == i).map(|_| 0);
                !policy.is_valid(std::slice::from_ref(c), own_root)
            })
            .map(|(_, c)| format!("'{c}'"))
            .collect();

        Err(CliError::SemanticFailure(format!(
            "{path}: invalid for {platform} (bad components: {})",
            offending.join(", ")
        )))
    }
}
