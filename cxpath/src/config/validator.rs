//! Configuration validation.

use std::ops::RangeInclusive;

use crate::config::schema::Config;
use crate::error::{Error, Result};
use crate::logging::LogLevel;

/// Accepted values for `max_symlink_depth`.
pub const SYMLINK_DEPTH_RANGE: RangeInclusive<usize> = 1..=4096;

/// Validates a merged configuration.
///
/// # Examples
///
/// ```
/// use cxpath::config::{Config, ConfigValidator};
///
/// ConfigValidator::validate(&Config::default()).unwrap();
///
/// let zero = Config { max_symlink_depth: Some(0), ..Default::default() };
/// assert!(ConfigValidator::validate(&zero).is_err());
/// ```
pub struct ConfigValidator;

impl ConfigValidator {
    /// Validate every set field.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Validation`] naming the first offending field.
    pub fn validate(config: &Config) -> Result<()> {
        if let Some(depth) = config.max_symlink_depth {
            if !SYMLINK_DEPTH_RANGE.contains(&depth) {
                return Err(Error::Validation {
                    field: "max_symlink_depth".into(),
                    message: format!(
                        "Must be between {} and {}, got {depth}",
                        SYMLINK_DEPTH_RANGE.start(),
                        SYMLINK_DEPTH_RANGE.end()
                    ),
                });
            }
        }

        if let Some(ref mode) = config.log_mode {
            LogLevel::parse(mode).map_err(|message| Error::Validation {
                field: "log_mode".into(),
                message,
            })?;
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn depth(n: usize) -> Config {
        Config {
            max_symlink_depth: Some(n),
            ..Default::default()
        }
    }

    #[test]
    fn test_depth_bounds() {
        assert!(ConfigValidator::validate(&depth(0)).is_err());
        assert!(ConfigValidator::validate(&depth(1)).is_ok());
        assert!(ConfigValidator::validate(&depth(4096)).is_ok());
        assert!(ConfigValidator::validate(&depth(4097)).is_err());
    }

    #[test]
    fn test_log_mode() {
        let good = Config {
            log_mode: Some("Verbose".into()),
            ..Default::default()
        };
        assert!(ConfigValidator::validate(&good).is_ok());

        let bad = Config {
            log_mode: Some("chatty".into()),
            ..Default::default()
        };
        match ConfigValidator::validate(&bad) {
            Err(Error::Validation { field, .. }) => assert_eq!(field, "log_mode"),
            other => panic!("expected validation error, got {other:?}"),
        }
    }
}
