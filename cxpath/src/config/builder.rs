//! Layered configuration assembly.

use std::path::{Path, PathBuf};

use crate::config::environment::EnvironmentConfig;
use crate::config::loader::ConfigLoader;
use crate::config::merger::ConfigMerger;
use crate::config::schema::Config;
use crate::config::validator::ConfigValidator;
use crate::error::Result;

/// Builds a validated [`Config`] from files, environment and overrides.
///
/// # Examples
///
/// ```no_run
/// use cxpath::config::ConfigBuilder;
///
/// let config = ConfigBuilder::new().build().unwrap();
/// println!("symlink bound: {}", config.symlink_depth_or_default());
/// ```
#[derive(Debug, Default)]
pub struct ConfigBuilder {
    config_dir: Option<PathBuf>,
    overrides: Option<Config>,
    skip_files: bool,
    skip_env: bool,
}

impl ConfigBuilder {
    /// A builder that reads the user config file and the environment.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Read `config.yaml` from `dir` instead of `~/.cxpath/`.
    #[must_use]
    pub fn with_config_dir(mut self, dir: &Path) -> Self {
        self.config_dir = Some(dir.to_path_buf());
        self
    }

    /// Apply `config` on top of every other source.
    #[must_use]
    pub fn with_config(mut self, config: Config) -> Self {
        self.overrides = Some(config);
        self
    }

    /// Do not read any configuration file.
    #[must_use]
    pub fn skip_files(mut self) -> Self {
        self.skip_files = true;
        self
    }

    /// Do not consult `CXPATH_*` variables.
    #[must_use]
    pub fn skip_env(mut self) -> Self {
        self.skip_env = true;
        self
    }

    /// Merge the enabled sources and validate the result.
    ///
    /// # Errors
    ///
    /// Returns an error if a file cannot be loaded, an environment variable
    /// is malformed, or the merged configuration is invalid.
    pub fn build(self) -> Result<Config> {
        let mut sources = Vec::new();
        if !self.skip_files {
            if let Some(source) = ConfigLoader::load_user_config(self.config_dir.as_deref())? {
                sources.push(source);
            }
        }

        let mut config = ConfigMerger::merge(sources);

        if !self.skip_env {
            EnvironmentConfig::apply_overrides(&mut config)?;
        }

        if let Some(ref overrides) = self.overrides {
            ConfigMerger::merge_into(&mut config, overrides);
        }

        ConfigValidator::validate(&config)?;
        Ok(config)
    }
}
