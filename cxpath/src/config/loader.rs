//! Configuration file discovery and loading.

use std::fs;
use std::path::{Path, PathBuf};

use crate::config::schema::Config;
use crate::error::{Error, Result};

/// Directory under the home directory holding the user config.
pub const USER_CONFIG_DIR: &str = ".cxpath";

/// Name of the configuration file inside a config directory.
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// A loaded configuration file.
#[derive(Debug, Clone)]
pub struct ConfigSource {
    /// Path to the configuration file.
    pub path: PathBuf,
    /// Parsed configuration.
    pub config: Config,
}

/// Loads configuration files.
///
/// # Examples
///
/// ```no_run
/// use cxpath::config::ConfigLoader;
///
/// if let Some(source) = ConfigLoader::load_user_config(None).unwrap() {
///     println!("loaded {}", source.path.display());
/// }
/// ```
pub struct ConfigLoader;

impl ConfigLoader {
    /// Loads `config.yaml` from `config_dir`, or from `~/.cxpath/` when no
    /// directory is given. A missing file is `Ok(None)`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined, or if
    /// the file exists but cannot be read or parsed.
    pub fn load_user_config(config_dir: Option<&Path>) -> Result<Option<ConfigSource>> {
        let config_path = match config_dir {
            Some(dir) => dir.join(CONFIG_FILE_NAME),
            None => Self::user_config_path()?,
        };

        if !config_path.exists() {
            log::debug!("no config file at {}", config_path.display());
            return Ok(None);
        }

        let config = Self::load_file(&config_path)?;
        log::debug!("loaded config from {}", config_path.display());
        Ok(Some(ConfigSource {
            path: config_path,
            config,
        }))
    }

    /// Load and parse a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or the YAML is invalid.
    pub fn load_file(path: &Path) -> Result<Config> {
        let contents = fs::read_to_string(path).map_err(|e| Error::Filesystem {
            path: path.display().to_string(),
            reason: format!("Failed to read configuration file: {e}"),
        })?;

        serde_yaml::from_str(&contents).map_err(|e| Error::Validation {
            field: path.display().to_string(),
            message: format!("Invalid YAML: {e}"),
        })
    }

    /// `~/.cxpath/config.yaml`.
    ///
    /// # Errors
    ///
    /// Returns an error if the home directory cannot be determined.
    pub fn user_config_path() -> Result<PathBuf> {
        let home = home::home_dir().ok_or_else(|| Error::NotFound {
            path: "~".to_string(),
        })?;
        Ok(home.join(USER_CONFIG_DIR).join(CONFIG_FILE_NAME))
    }
}
