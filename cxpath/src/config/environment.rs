//! `CXPATH_*` environment variable overrides.

use std::env;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::policy::Platform;

/// Selects the path grammar.
pub const PLATFORM_VAR: &str = "CXPATH_PLATFORM";
/// Overrides the symlink substitution bound.
pub const MAX_SYMLINK_DEPTH_VAR: &str = "CXPATH_MAX_SYMLINK_DEPTH";
/// Sets the log verbosity.
pub const LOG_MODE_VAR: &str = "CXPATH_LOG_MODE";

/// Handles environment variable overrides for configuration.
///
/// # Examples
///
/// ```no_run
/// use cxpath::config::{Config, EnvironmentConfig};
///
/// let mut config = Config::default();
/// EnvironmentConfig::apply_overrides(&mut config).unwrap();
/// ```
pub struct EnvironmentConfig;

impl EnvironmentConfig {
    /// Apply environment variable overrides to `config`.
    ///
    /// Empty variables are ignored.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] if a variable holds an unusable value.
    pub fn apply_overrides(config: &mut Config) -> Result<()> {
        if let Some(value) = Self::var(PLATFORM_VAR) {
            config.platform = Some(value.parse::<Platform>().map_err(|_| Error::Validation {
                field: PLATFORM_VAR.into(),
                message: format!("Unknown platform '{value}' (expected posix or windows)"),
            })?);
        }

        if let Some(value) = Self::var(MAX_SYMLINK_DEPTH_VAR) {
            config.max_symlink_depth = Some(value.parse().map_err(|_| Error::Validation {
                field: MAX_SYMLINK_DEPTH_VAR.into(),
                message: "Must be a positive integer".into(),
            })?);
        }

        if let Some(value) = Self::var(LOG_MODE_VAR) {
            config.log_mode = Some(value);
        }

        Ok(())
    }

    fn var(name: &str) -> Option<String> {
        env::var(name).ok().filter(|v| !v.trim().is_empty())
    }
}
