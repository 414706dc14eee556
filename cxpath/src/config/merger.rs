//! Configuration merging.

use crate::config::loader::ConfigSource;
use crate::config::schema::Config;

/// Merges configuration sources; later sources win field by field.
///
/// # Examples
///
/// ```
/// use cxpath::config::{Config, ConfigMerger};
///
/// let low = Config { max_symlink_depth: Some(10), ..Default::default() };
/// let high = Config { max_symlink_depth: Some(20), ..Default::default() };
///
/// let mut result = low;
/// ConfigMerger::merge_into(&mut result, &high);
/// assert_eq!(result.max_symlink_depth, Some(20));
/// ```
pub struct ConfigMerger;

impl ConfigMerger {
    /// Merge sources given from lowest to highest precedence.
    #[must_use]
    pub fn merge(sources: Vec<ConfigSource>) -> Config {
        let mut result = Config::default();
        for source in sources {
            Self::merge_into(&mut result, &source.config);
        }
        result
    }

    /// Overwrite each field of `target` that `source` sets.
    pub fn merge_into(target: &mut Config, source: &Config) {
        if source.platform.is_some() {
            target.platform = source.platform;
        }

        if source.max_symlink_depth.is_some() {
            target.max_symlink_depth = source.max_symlink_depth;
        }

        if source.log_mode.is_some() {
            target.log_mode.clone_from(&source.log_mode);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::policy::Platform;
    use std::path::PathBuf;

    #[test]
    fn test_unset_fields_do_not_clobber() {
        let mut target = Config {
            platform: Some(Platform::Posix),
            max_symlink_depth: Some(7),
            log_mode: Some("quiet".into()),
        };
        ConfigMerger::merge_into(&mut target, &Config::default());
        assert_eq!(target.platform, Some(Platform::Posix));
        assert_eq!(target.max_symlink_depth, Some(7));
        assert_eq!(target.log_mode.as_deref(), Some("quiet"));
    }

    #[test]
    fn test_merge_respects_order() {
        let sources = vec![
            ConfigSource {
                path: PathBuf::from("low.yaml"),
                config: Config {
                    platform: Some(Platform::Posix),
                    max_symlink_depth: Some(1),
                    ..Default::default()
                },
            },
            ConfigSource {
                path: PathBuf::from("high.yaml"),
                config: Config {
                    platform: Some(Platform::Windows),
                    ..Default::default()
                },
            },
        ];

        let merged = ConfigMerger::merge(sources);
        assert_eq!(merged.platform, Some(Platform::Windows));
        assert_eq!(merged.max_symlink_depth, Some(1));
        assert_eq!(merged.log_mode, None);
    }

    #[test]
    fn test_merge_nothing_is_default() {
        assert_eq!(ConfigMerger::merge(Vec::new()), Config::default());
    }
}
